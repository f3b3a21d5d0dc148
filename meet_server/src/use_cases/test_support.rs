use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};

use crate::domain::{
    CalendarProvider, Clock, CreatedEvent, IdentityProvider, NewCalendarEvent, ProviderError,
    Session, SessionStore, UserProfile,
};

pub(crate) type SessionTable = Arc<Mutex<HashMap<String, Session>>>;

pub(crate) const TEST_MEET_LINK: &str = "https://meet.google.com/abc-defg-hij";

// Shared fixed time source for deterministic use-case tests.
pub(crate) struct FixedClock(pub(crate) DateTime<Utc>);

impl FixedClock {
    pub(crate) fn at_epoch(seconds: i64) -> Self {
        Self(Utc.timestamp_opt(seconds, 0).single().unwrap_or_default())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

pub(crate) fn test_session(access_token: &str, expires_at: u64) -> Session {
    Session {
        user: UserProfile {
            name: Some("Ada".to_string()),
            email: Some("ada@example.com".to_string()),
            image: None,
        },
        access_token: access_token.to_string(),
        expires_at,
    }
}

#[derive(Clone, Copy, Default)]
pub(crate) struct FailureFlags {
    pub insert: bool,
    pub get: bool,
    pub remove: bool,
}

#[derive(Clone)]
pub(crate) struct RecordingStore {
    sessions: SessionTable,
    failures: FailureFlags,
}

impl RecordingStore {
    pub(crate) fn new() -> Self {
        Self {
            sessions: Arc::new(Mutex::new(HashMap::new())),
            failures: FailureFlags::default(),
        }
    }

    pub(crate) fn with_failures(mut self, failures: FailureFlags) -> Self {
        self.failures = failures;
        self
    }

    pub(crate) fn insert_test_session(&self, token: impl Into<String>, session: Session) {
        let mut guard = self.sessions.lock().expect("sessions mutex poisoned");
        guard.insert(token.into(), session);
    }

    pub(crate) fn get_test_session(&self, token: &str) -> Option<Session> {
        let guard = self.sessions.lock().expect("sessions mutex poisoned");
        guard.get(token).cloned()
    }
}

#[async_trait]
impl SessionStore for RecordingStore {
    async fn insert(&self, token: String, session: Session) -> Result<(), String> {
        if self.failures.insert {
            return Err("insert failed".to_string());
        }

        let mut guard = self.sessions.lock().expect("sessions mutex poisoned");
        guard.insert(token, session);
        Ok(())
    }

    async fn get(&self, token: &str) -> Result<Option<Session>, String> {
        if self.failures.get {
            return Err("get failed".to_string());
        }

        let guard = self.sessions.lock().expect("sessions mutex poisoned");
        Ok(guard.get(token).cloned())
    }

    async fn remove(&self, token: &str) -> Result<bool, String> {
        if self.failures.remove {
            return Err("remove failed".to_string());
        }

        let mut guard = self.sessions.lock().expect("sessions mutex poisoned");
        Ok(guard.remove(token).is_some())
    }

    async fn remove_expired(&self, now: u64) -> Result<usize, String> {
        if self.failures.remove {
            return Err("remove failed".to_string());
        }

        let mut guard = self.sessions.lock().expect("sessions mutex poisoned");
        let before = guard.len();
        guard.retain(|_, session| session.expires_at > now);
        Ok(before - guard.len())
    }
}

// Calendar fake that records every insert and can be told to fail.
#[derive(Clone, Default)]
pub(crate) struct RecordingCalendar {
    pub inserted: Arc<Mutex<Vec<(String, NewCalendarEvent)>>>,
    pub fail_insert: bool,
    pub omit_link: bool,
    pub calendar_timezone: Option<String>,
}

impl RecordingCalendar {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn failing() -> Self {
        Self {
            fail_insert: true,
            ..Self::default()
        }
    }

    pub(crate) fn with_calendar_timezone(mut self, time_zone: &str) -> Self {
        self.calendar_timezone = Some(time_zone.to_string());
        self
    }

    pub(crate) fn inserted_events(&self) -> Vec<(String, NewCalendarEvent)> {
        self.inserted.lock().expect("calendar mutex poisoned").clone()
    }
}

#[async_trait]
impl CalendarProvider for RecordingCalendar {
    async fn insert_event(
        &self,
        access_token: &str,
        event: &NewCalendarEvent,
    ) -> Result<CreatedEvent, ProviderError> {
        self.inserted
            .lock()
            .expect("calendar mutex poisoned")
            .push((access_token.to_string(), event.clone()));

        if self.fail_insert {
            return Err("calendar unavailable".into());
        }
        if self.omit_link {
            return Err("event created without a conference link".into());
        }

        Ok(CreatedEvent {
            event_id: Some("event-1".to_string()),
            meet_link: TEST_MEET_LINK.to_string(),
        })
    }

    async fn calendar_timezone(&self, _access_token: &str) -> Result<String, ProviderError> {
        self.calendar_timezone
            .clone()
            .ok_or_else(|| "settings lookup failed".into())
    }
}

// Identity fake returning a fixed profile, or failing when `profile` is None.
#[derive(Clone)]
pub(crate) struct StaticIdentity {
    pub profile: Option<UserProfile>,
}

impl StaticIdentity {
    pub(crate) fn ada() -> Self {
        Self {
            profile: Some(UserProfile {
                name: Some("Ada".to_string()),
                email: Some("ada@example.com".to_string()),
                image: Some("https://example.com/ada.png".to_string()),
            }),
        }
    }

    pub(crate) fn failing() -> Self {
        Self { profile: None }
    }
}

#[async_trait]
impl IdentityProvider for StaticIdentity {
    async fn fetch_profile(&self, _access_token: &str) -> Result<UserProfile, ProviderError> {
        self.profile
            .clone()
            .ok_or_else(|| "userinfo rejected token".into())
    }
}
