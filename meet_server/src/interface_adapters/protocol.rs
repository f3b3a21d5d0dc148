use serde::{Deserialize, Serialize};

use crate::domain::{MeetingDetails, UserProfile};

// Request payload for scheduling a meeting.
#[derive(Debug, Deserialize)]
pub struct ScheduleMeetingRequest {
    pub name: Option<String>,
    pub date: String,
    pub time: String,
    // Minutes.
    pub duration: u32,
    pub timezone: Option<String>,
}

// Response payload for an instant meeting.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InstantMeetingResponse {
    pub meet_link: String,
}

// Response payload for a scheduled meeting.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleMeetingResponse {
    pub meet_link: String,
    pub meeting_details: MeetingDetailsResponse,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MeetingDetailsResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub date: String,
    pub time: String,
    pub duration: u32,
    pub display_timezone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calendar_timezone: Option<String>,
}

impl From<MeetingDetails> for MeetingDetailsResponse {
    fn from(details: MeetingDetails) -> Self {
        Self {
            name: details.name,
            date: details.date,
            time: details.time,
            duration: details.duration,
            display_timezone: details.display_timezone,
            calendar_timezone: details.calendar_timezone,
        }
    }
}

// Request payload for exchanging an OAuth access token for a session.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignInRequest {
    pub access_token: String,
    pub expires_in: Option<u64>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignInResponse {
    pub session_token: String,
    pub expires_at: u64,
    pub user: UserProfile,
}

// Response payload describing the current session.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub user: UserProfile,
    pub expires_at: u64,
}

#[derive(Debug, Serialize)]
pub struct SignOutResponse {
    pub revoked: bool,
}

// Error envelope shared by every route.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
