use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rand::Rng;
use regex::Regex;
use std::sync::LazyLock;

use crate::domain::Meeting;

const MEET_BASE_URL: &str = "https://meet.google.com";
const ID_PREFIX: &str = "abc";
const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz";

static MEET_ID_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"meet\.google\.com/([a-z-]+)").ok());

/// Returns a `len`-character lowercase id that always starts with `abc`.
pub fn generate_random_id(len: usize) -> String {
    let mut rng = rand::thread_rng();
    let mut id = String::from(ID_PREFIX);

    for _ in ID_PREFIX.len()..len {
        id.push(char::from(ALPHABET[rng.gen_range(0..ALPHABET.len())]));
    }

    id
}

/// Builds a synthetic Meet link without calling the calendar provider.
pub fn create_local_meet_link(now: NaiveDateTime) -> Meeting {
    let id = generate_random_id(10);
    let link = format!("{MEET_BASE_URL}/{id}");
    Meeting::new(id, link, format_date(now))
}

/// Extracts the meeting code from a Meet URL, falling back to the last path segment.
pub fn extract_meeting_id(meet_link: &str) -> String {
    if meet_link.is_empty() {
        return String::new();
    }

    if let Some(code) = MEET_ID_PATTERN
        .as_ref()
        .and_then(|pattern| pattern.captures(meet_link))
        .and_then(|captures| captures.get(1))
    {
        return code.as_str().to_string();
    }

    meet_link.rsplit('/').next().unwrap_or_default().to_string()
}

/// Short timestamp such as `Oct 19, 02:30 PM`.
pub fn format_date(value: NaiveDateTime) -> String {
    value.format("%b %-d, %I:%M %p").to_string()
}

/// Long date such as `Monday, October 19, 2026`.
pub fn format_long_date(date: &str) -> Option<String> {
    NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
        .ok()
        .map(|date| date.format("%A, %B %-d, %Y").to_string())
}

/// Clock time such as `02:30 PM`.
pub fn format_clock_time(time: &str) -> Option<String> {
    let time = time.trim();
    NaiveTime::parse_from_str(time, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(time, "%H:%M:%S"))
        .ok()
        .map(|time| time.format("%I:%M %p").to_string())
}

pub fn format_duration(duration_minutes: u32) -> String {
    if duration_minutes < 60 {
        return format!("{duration_minutes} minutes");
    }

    let hours = duration_minutes / 60;
    let minutes = duration_minutes % 60;
    let hour_label = if hours > 1 { "hours" } else { "hour" };

    if minutes > 0 {
        let minute_label = if minutes > 1 { "minutes" } else { "minute" };
        format!("{hours} {hour_label} {minutes} {minute_label}")
    } else {
        format!("{hours} {hour_label}")
    }
}
