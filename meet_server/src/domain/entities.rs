use serde::{Deserialize, Serialize};

// Identity returned by the OAuth provider and echoed back to the client.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

// Authenticated session stored in memory, keyed by its session token.
#[derive(Clone, Debug)]
pub struct Session {
    pub user: UserProfile,
    // Bearer credential used against the calendar provider.
    pub access_token: String,
    pub expires_at: u64,
}

// A calendar timestamp. `time_zone` is set when `date_time` is a wall-clock value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EventTime {
    pub date_time: String,
    pub time_zone: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EventWindow {
    pub start: EventTime,
    pub end: EventTime,
}

// Event description handed to the calendar provider.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewCalendarEvent {
    pub summary: String,
    pub window: EventWindow,
}

// Result of a successful event insert.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CreatedEvent {
    pub event_id: Option<String>,
    pub meet_link: String,
}

// Details echoed back for a scheduled meeting.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MeetingDetails {
    pub name: Option<String>,
    pub date: String,
    pub time: String,
    pub duration: u32,
    pub display_timezone: String,
    pub calendar_timezone: Option<String>,
}
