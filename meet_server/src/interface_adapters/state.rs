use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::{CalendarProvider, Clock, IdentityProvider, Session, SessionStore};

// Application state shared by every handler.
#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<Mutex<HashMap<String, Session>>>,
    // Arc<dyn Trait> lets tests swap in fakes for the Google client.
    pub calendar: Arc<dyn CalendarProvider>,
    pub identity: Arc<dyn IdentityProvider>,
    pub settings: SchedulingSettings,
}

// Runtime settings consumed by the scheduling and sign-in flows.
#[derive(Clone, Debug)]
pub struct SchedulingSettings {
    pub default_time_zone: String,
    pub session_ttl_seconds: u64,
}

impl AppState {
    pub fn session_store(&self) -> InMemorySessionStore {
        InMemorySessionStore {
            sessions: self.sessions.clone(),
        }
    }
}

// In-memory session store adapter.
#[derive(Clone)]
pub struct InMemorySessionStore {
    pub sessions: Arc<Mutex<HashMap<String, Session>>>,
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn insert(&self, token: String, session: Session) -> Result<(), String> {
        let mut sessions = self.sessions.lock().await;
        sessions.insert(token, session);
        Ok(())
    }

    async fn get(&self, token: &str) -> Result<Option<Session>, String> {
        let sessions = self.sessions.lock().await;
        Ok(sessions.get(token).cloned())
    }

    async fn remove(&self, token: &str) -> Result<bool, String> {
        let mut sessions = self.sessions.lock().await;
        Ok(sessions.remove(token).is_some())
    }

    async fn remove_expired(&self, now: u64) -> Result<usize, String> {
        let mut sessions = self.sessions.lock().await;
        let before = sessions.len();
        sessions.retain(|_, session| session.expires_at > now);
        Ok(before - sessions.len())
    }
}

// System clock adapter used by the use cases.
#[derive(Clone)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
