use std::sync::Arc;

use crate::domain::{CalendarProvider, MeetingDetails, NewCalendarEvent, ScheduleError, Session};
use crate::use_cases::time_format::{build_event_window, resolve_time_zone};

const DEFAULT_MEETING_SUMMARY: &str = "Scheduled Meeting";

// Scheduling input after boundary deserialization.
#[derive(Clone, Debug)]
pub struct MeetingRequest {
    pub name: Option<String>,
    pub date: String,
    pub time: String,
    pub duration: u32,
    pub timezone: Option<String>,
}

pub struct ScheduledMeeting {
    pub meet_link: String,
    pub details: MeetingDetails,
}

// Creates a meeting at an explicit date, time and timezone.
pub struct ScheduleMeetingUseCase {
    pub calendar: Arc<dyn CalendarProvider>,
    // Used when the request carries no timezone.
    pub default_time_zone: String,
}

impl ScheduleMeetingUseCase {
    pub async fn execute(
        &self,
        session: &Session,
        request: MeetingRequest,
    ) -> Result<ScheduledMeeting, ScheduleError> {
        let display_timezone =
            resolve_time_zone(request.timezone.as_deref(), &self.default_time_zone)?;
        let window = build_event_window(
            &request.date,
            &request.time,
            request.duration,
            &display_timezone,
        )?;

        let name = request
            .name
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(str::to_string);
        let event = NewCalendarEvent {
            summary: name
                .clone()
                .unwrap_or_else(|| DEFAULT_MEETING_SUMMARY.to_string()),
            window,
        };

        let created = self
            .calendar
            .insert_event(&session.access_token, &event)
            .await
            .map_err(|err| {
                tracing::error!(error = %err, "failed to schedule meeting");
                ScheduleError::ProviderFailure
            })?;

        tracing::info!(event_id = ?created.event_id, "meeting scheduled");

        // Display-only lookup; a failure leaves the requested timezone in charge.
        let calendar_timezone = match self.calendar.calendar_timezone(&session.access_token).await
        {
            Ok(time_zone) => Some(time_zone),
            Err(err) => {
                tracing::warn!(error = %err, "failed to read calendar timezone");
                None
            }
        };

        Ok(ScheduledMeeting {
            meet_link: created.meet_link,
            details: MeetingDetails {
                name,
                date: request.date,
                time: request.time,
                duration: request.duration,
                display_timezone,
                calendar_timezone,
            },
        })
    }
}
