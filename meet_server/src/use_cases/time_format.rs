use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, SecondsFormat, TimeDelta, Utc};
use chrono_tz::Tz;

use crate::domain::{EventTime, EventWindow, ScheduleError};

// Upper bound for a single meeting, in minutes.
pub const MAX_DURATION_MINUTES: u32 = 24 * 60;

const WALL_CLOCK_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Builds a wall-clock event window tagged with `time_zone`.
///
/// The start and end are rendered as literal local date-times and are never
/// converted through UTC, so the provider interprets them in `time_zone`.
/// Minutes past the hour carry into the hour field, and an end past midnight
/// moves to the next calendar day.
pub fn build_event_window(
    date: &str,
    time: &str,
    duration_minutes: u32,
    time_zone: &str,
) -> Result<EventWindow, ScheduleError> {
    let date = parse_date(date)?;
    let time = parse_time(time)?;
    validate_duration(duration_minutes)?;

    let start = NaiveDateTime::new(date, time);
    let end = start + TimeDelta::minutes(i64::from(duration_minutes));

    Ok(EventWindow {
        start: wall_clock(start, time_zone),
        end: wall_clock(end, time_zone),
    })
}

/// Builds a UTC window of `minutes` starting at `now`.
pub fn instant_window(now: DateTime<Utc>, minutes: u32) -> EventWindow {
    let end = now + TimeDelta::minutes(i64::from(minutes));
    EventWindow {
        start: EventTime {
            date_time: now.to_rfc3339_opts(SecondsFormat::Millis, true),
            time_zone: None,
        },
        end: EventTime {
            date_time: end.to_rfc3339_opts(SecondsFormat::Millis, true),
            time_zone: None,
        },
    }
}

/// Picks the requested timezone or the configured default, rejecting names
/// outside the IANA database.
pub fn resolve_time_zone(
    requested: Option<&str>,
    default_time_zone: &str,
) -> Result<String, ScheduleError> {
    let candidate = requested
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .unwrap_or(default_time_zone);

    candidate
        .parse::<Tz>()
        .map(|tz| tz.name().to_string())
        .map_err(|_| ScheduleError::InvalidRequest(format!("unknown timezone: {candidate}")))
}

fn parse_date(value: &str) -> Result<NaiveDate, ScheduleError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| {
        ScheduleError::InvalidRequest("date must be formatted as YYYY-MM-DD".to_string())
    })
}

fn parse_time(value: &str) -> Result<NaiveTime, ScheduleError> {
    let value = value.trim();
    NaiveTime::parse_from_str(value, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"))
        .map_err(|_| ScheduleError::InvalidRequest("time must be formatted as HH:MM".to_string()))
}

fn validate_duration(duration_minutes: u32) -> Result<(), ScheduleError> {
    if duration_minutes == 0 || duration_minutes > MAX_DURATION_MINUTES {
        return Err(ScheduleError::InvalidRequest(format!(
            "duration must be between 1 and {MAX_DURATION_MINUTES} minutes"
        )));
    }
    Ok(())
}

fn wall_clock(value: NaiveDateTime, time_zone: &str) -> EventTime {
    EventTime {
        date_time: value.format(WALL_CLOCK_FORMAT).to_string(),
        time_zone: Some(time_zone.to_string()),
    }
}
