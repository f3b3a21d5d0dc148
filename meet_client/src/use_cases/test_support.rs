use std::sync::Mutex;

use async_trait::async_trait;
use chrono::NaiveDateTime;

use crate::domain::{
    ApiError, Clock, InstantMeetingReply, MeetingApi, ScheduleMeetingForm, ScheduleMeetingReply,
    SessionInfo,
};

// Fixed local time for deterministic `created_at` stamps.
pub(crate) struct FixedClock(pub(crate) NaiveDateTime);

impl FixedClock {
    pub(crate) fn afternoon() -> Self {
        Self(
            NaiveDateTime::parse_from_str("2026-10-19 14:30", "%Y-%m-%d %H:%M")
                .expect("valid timestamp"),
        )
    }
}

impl Clock for FixedClock {
    fn now_local(&self) -> NaiveDateTime {
        self.0
    }
}

// Scripted API fake: each reply is consumed once; forms are recorded.
#[derive(Default)]
pub(crate) struct ScriptedApi {
    pub instant: Mutex<Option<Result<InstantMeetingReply, ApiError>>>,
    pub scheduled: Mutex<Option<Result<ScheduleMeetingReply, ApiError>>>,
    pub session: Mutex<Option<Result<Option<SessionInfo>, ApiError>>>,
    pub forms: Mutex<Vec<ScheduleMeetingForm>>,
}

impl ScriptedApi {
    pub(crate) fn instant(reply: Result<InstantMeetingReply, ApiError>) -> Self {
        Self {
            instant: Mutex::new(Some(reply)),
            ..Self::default()
        }
    }

    pub(crate) fn scheduled(reply: Result<ScheduleMeetingReply, ApiError>) -> Self {
        Self {
            scheduled: Mutex::new(Some(reply)),
            ..Self::default()
        }
    }

    pub(crate) fn session(reply: Result<Option<SessionInfo>, ApiError>) -> Self {
        Self {
            session: Mutex::new(Some(reply)),
            ..Self::default()
        }
    }
}

fn unscripted() -> ApiError {
    ApiError::Transport("no scripted reply".to_string())
}

#[async_trait]
impl MeetingApi for ScriptedApi {
    async fn create_instant_meeting(&self) -> Result<InstantMeetingReply, ApiError> {
        self.instant
            .lock()
            .expect("api mutex poisoned")
            .take()
            .unwrap_or_else(|| Err(unscripted()))
    }

    async fn schedule_meeting(
        &self,
        form: &ScheduleMeetingForm,
    ) -> Result<ScheduleMeetingReply, ApiError> {
        self.forms
            .lock()
            .expect("api mutex poisoned")
            .push(form.clone());
        self.scheduled
            .lock()
            .expect("api mutex poisoned")
            .take()
            .unwrap_or_else(|| Err(unscripted()))
    }

    async fn current_session(&self) -> Result<Option<SessionInfo>, ApiError> {
        self.session
            .lock()
            .expect("api mutex poisoned")
            .take()
            .unwrap_or_else(|| Err(unscripted()))
    }
}
