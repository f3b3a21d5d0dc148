use crate::domain::{Clock, Meeting, MeetingApi, ScheduleMeetingForm};
use crate::use_cases::meeting_utils::{create_local_meet_link, extract_meeting_id, format_date};
use crate::use_cases::store::{Action, AsyncPhase, Store};

pub const CREATE_FAILED: &str = "Failed to create meeting";
pub const SCHEDULE_FAILED: &str = "Failed to schedule meeting. Please try again.";
pub const NO_MEETING_LINK: &str = "No meeting link returned from the API";

/// Requests an instant meeting and drives the store through
/// pending, then fulfilled or rejected.
pub async fn create_instant_meeting<A, C>(
    store: &mut Store,
    api: &A,
    clock: &C,
) -> Result<Meeting, String>
where
    A: MeetingApi + ?Sized,
    C: Clock,
{
    store.dispatch(Action::CreateInstantMeeting(AsyncPhase::Pending));

    let outcome = match api.create_instant_meeting().await {
        Ok(reply) => meeting_from_link(reply.meet_link, clock),
        Err(err) => {
            tracing::warn!(error = %err, "instant meeting request failed");
            Err(err.user_message(CREATE_FAILED))
        }
    };

    settle(store, outcome, Action::CreateInstantMeeting)
}

/// Schedules a meeting and keeps the submitted details on the resulting meeting.
pub async fn schedule_meeting<A, C>(
    store: &mut Store,
    api: &A,
    clock: &C,
    form: ScheduleMeetingForm,
) -> Result<Meeting, String>
where
    A: MeetingApi + ?Sized,
    C: Clock,
{
    store.dispatch(Action::ScheduleMeeting(AsyncPhase::Pending));

    let outcome = match api.schedule_meeting(&form).await {
        Ok(reply) => meeting_from_link(reply.meet_link, clock).map(|mut meeting| {
            meeting.name = form.name.clone().filter(|name| !name.trim().is_empty());
            meeting.date = Some(form.date.clone());
            meeting.time = Some(form.time.clone());
            meeting.duration = Some(form.duration);
            // Prefer what the server actually used over what was asked for.
            meeting.timezone = reply
                .meeting_details
                .map(|details| details.display_timezone)
                .or_else(|| form.timezone.clone());
            meeting
        }),
        Err(err) => {
            tracing::warn!(error = %err, "schedule meeting request failed");
            Err(err.user_message(SCHEDULE_FAILED))
        }
    };

    settle(store, outcome, Action::ScheduleMeeting)
}

/// Mirrors the server session into the auth slice.
/// A transport failure leaves the current auth state alone.
pub async fn sync_session<A>(store: &mut Store, api: &A)
where
    A: MeetingApi + ?Sized,
{
    match api.current_session().await {
        Ok(Some(session)) => store.dispatch(Action::SetUser(session.user)),
        Ok(None) => store.dispatch(Action::ClearUser),
        Err(err) => tracing::warn!(error = %err, "failed to load session"),
    }
}

/// Creates a synthetic meeting locally, without the calendar provider.
pub fn create_local_meeting<C: Clock>(store: &mut Store, clock: &C) -> Meeting {
    let meeting = create_local_meet_link(clock.now_local());
    store.dispatch(Action::CreateMeeting(meeting.clone()));
    meeting
}

fn meeting_from_link<C: Clock>(meet_link: Option<String>, clock: &C) -> Result<Meeting, String> {
    let link = meet_link
        .filter(|link| !link.trim().is_empty())
        .ok_or_else(|| NO_MEETING_LINK.to_string())?;

    Ok(Meeting::new(
        extract_meeting_id(&link),
        link,
        format_date(clock.now_local()),
    ))
}

fn settle(
    store: &mut Store,
    outcome: Result<Meeting, String>,
    action: fn(AsyncPhase<Meeting>) -> Action,
) -> Result<Meeting, String> {
    match outcome {
        Ok(meeting) => {
            store.dispatch(action(AsyncPhase::Fulfilled(meeting.clone())));
            Ok(meeting)
        }
        Err(message) => {
            store.dispatch(action(AsyncPhase::Rejected(message.clone())));
            Err(message)
        }
    }
}
