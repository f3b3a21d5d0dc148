use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::entities::{CreatedEvent, NewCalendarEvent, Session, UserProfile};

pub type ProviderError = Box<dyn std::error::Error + Send + Sync>;

// Port for session storage used by the session gate and sign-in flows.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn insert(&self, token: String, session: Session) -> Result<(), String>;
    async fn get(&self, token: &str) -> Result<Option<Session>, String>;
    async fn remove(&self, token: &str) -> Result<bool, String>;
    // Drops every session whose expiry is at or before `now`; returns how many went.
    async fn remove_expired(&self, now: u64) -> Result<usize, String>;
}

// Port for retrieving the current time.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;

    fn now_epoch_seconds(&self) -> u64 {
        u64::try_from(self.now().timestamp()).unwrap_or_default()
    }
}

// The calendar provider that turns an event description into a join link.
// Handlers depend on this trait, not on the concrete HTTP client.
#[async_trait]
pub trait CalendarProvider: Send + Sync {
    async fn insert_event(
        &self,
        access_token: &str,
        event: &NewCalendarEvent,
    ) -> Result<CreatedEvent, ProviderError>;

    // Calendar-level timezone setting, used for display only.
    async fn calendar_timezone(&self, access_token: &str) -> Result<String, ProviderError>;
}

// Resolves the profile behind an OAuth access token.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn fetch_profile(&self, access_token: &str) -> Result<UserProfile, ProviderError>;
}
