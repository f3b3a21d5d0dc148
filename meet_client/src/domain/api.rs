use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::meeting::UserProfile;

// Wire shapes live here so the port can name them; the HTTP client is the only producer.

// Body posted to the schedule route.
#[derive(Clone, Debug, Serialize)]
pub struct ScheduleMeetingForm {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub date: String,
    pub time: String,
    pub duration: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstantMeetingReply {
    pub meet_link: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleMeetingReply {
    pub meet_link: Option<String>,
    pub meeting_details: Option<MeetingDetails>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeetingDetails {
    pub name: Option<String>,
    pub date: String,
    pub time: String,
    pub duration: u32,
    pub display_timezone: String,
    pub calendar_timezone: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionInfo {
    pub user: UserProfile,
    pub expires_at: u64,
}

#[derive(Debug)]
pub enum ApiError {
    Transport(String),
    Upstream {
        status: u16,
        message: Option<String>,
    },
    Decode(String),
}

impl ApiError {
    // Server error strings are shown verbatim; anything else gets `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Upstream {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => message.clone(),
            _ => fallback.to_string(),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Transport(err) => write!(f, "api transport error: {err}"),
            ApiError::Upstream { status, message } => {
                if let Some(message) = message {
                    write!(f, "api upstream error {status}: {message}")
                } else {
                    write!(f, "api upstream error {status}")
                }
            }
            ApiError::Decode(err) => write!(f, "api response decode error: {err}"),
        }
    }
}

impl std::error::Error for ApiError {}

// The store thunks depend on this trait, not on the reqwest client.
#[async_trait]
pub trait MeetingApi: Send + Sync {
    async fn create_instant_meeting(&self) -> Result<InstantMeetingReply, ApiError>;

    async fn schedule_meeting(
        &self,
        form: &ScheduleMeetingForm,
    ) -> Result<ScheduleMeetingReply, ApiError>;

    // `None` when there is no valid session.
    async fn current_session(&self) -> Result<Option<SessionInfo>, ApiError>;
}
