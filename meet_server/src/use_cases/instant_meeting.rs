use std::sync::Arc;

use crate::domain::{CalendarProvider, Clock, NewCalendarEvent, ScheduleError, Session};
use crate::use_cases::time_format::instant_window;

// Instant meetings always cover this many minutes from now.
pub const INSTANT_MEETING_MINUTES: u32 = 30;

const INSTANT_MEETING_SUMMARY: &str = "Instant Meeting";

pub struct InstantMeeting {
    pub meet_link: String,
}

// Creates a meeting starting now for an already resolved session.
pub struct InstantMeetingUseCase<C> {
    pub clock: C,
    pub calendar: Arc<dyn CalendarProvider>,
}

impl<C> InstantMeetingUseCase<C>
where
    C: Clock,
{
    pub async fn execute(&self, session: &Session) -> Result<InstantMeeting, ScheduleError> {
        let event = NewCalendarEvent {
            summary: INSTANT_MEETING_SUMMARY.to_string(),
            window: instant_window(self.clock.now(), INSTANT_MEETING_MINUTES),
        };

        let created = self
            .calendar
            .insert_event(&session.access_token, &event)
            .await
            .map_err(|err| {
                tracing::error!(error = %err, "failed to create instant meeting");
                ScheduleError::ProviderFailure
            })?;

        tracing::info!(event_id = ?created.event_id, "instant meeting created");

        Ok(InstantMeeting {
            meet_link: created.meet_link,
        })
    }
}
