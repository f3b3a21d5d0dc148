use std::{env, time::Duration};

// Runtime/server settings read from the environment.

pub fn http_port() -> u16 {
    env::var("MEET_SERVER_PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(3000)
}

pub fn calendar_api_url() -> String {
    env::var("GOOGLE_CALENDAR_API_URL")
        .unwrap_or_else(|_| "https://www.googleapis.com/calendar/v3".to_string())
}

pub fn userinfo_url() -> String {
    env::var("GOOGLE_USERINFO_URL")
        .unwrap_or_else(|_| "https://openidconnect.googleapis.com/v1/userinfo".to_string())
}

pub fn calendar_timeout() -> Duration {
    let millis = env::var("CALENDAR_TIMEOUT_MS")
        .ok()
        .and_then(|value| value.parse::<u64>().ok())
        .unwrap_or(10_000);
    Duration::from_millis(millis)
}

// Timezone applied to scheduled meetings that do not name one.
pub fn default_time_zone() -> String {
    env::var("DEFAULT_TIMEZONE")
        .ok()
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| "UTC".to_string())
}

// Session lifetime used when sign-in does not report the token expiry.
pub fn session_ttl_seconds() -> u64 {
    env::var("SESSION_TTL_SECONDS")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(60 * 60)
}
