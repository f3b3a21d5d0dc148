use crate::domain::ScheduleError;
use crate::interface_adapters::handlers::{ApiError, error_response, resolve_session};
use crate::interface_adapters::protocol::{
    InstantMeetingResponse, ScheduleMeetingRequest, ScheduleMeetingResponse,
};
use crate::interface_adapters::state::{AppState, SystemClock};
use crate::use_cases::{InstantMeetingUseCase, MeetingRequest, ScheduleMeetingUseCase};
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::{HeaderMap, StatusCode},
};

// Handler for creating a meeting that starts now.
#[tracing::instrument(name = "instant_meeting", skip_all)]
pub async fn instant_meeting(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<InstantMeetingResponse>, ApiError> {
    let session = resolve_session(&state, &headers)
        .await
        .map_err(|err| map_schedule_error(err.into(), MeetingContext::Instant))?;

    let use_case = InstantMeetingUseCase {
        clock: SystemClock,
        calendar: state.calendar.clone(),
    };

    let result = use_case
        .execute(&session)
        .await
        .map_err(|err| map_schedule_error(err, MeetingContext::Instant))?;

    Ok(Json(InstantMeetingResponse {
        meet_link: result.meet_link,
    }))
}

// Handler for scheduling a meeting at an explicit date and time.
#[tracing::instrument(name = "schedule_meeting", skip_all)]
pub async fn schedule_meeting(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<ScheduleMeetingRequest>, JsonRejection>,
) -> Result<Json<ScheduleMeetingResponse>, ApiError> {
    // The session gate runs before the body is looked at.
    let session = resolve_session(&state, &headers)
        .await
        .map_err(|err| map_schedule_error(err.into(), MeetingContext::Scheduled))?;

    let Json(body) =
        payload.map_err(|rejection| error_response(rejection.status(), &rejection.body_text()))?;

    let use_case = ScheduleMeetingUseCase {
        calendar: state.calendar.clone(),
        default_time_zone: state.settings.default_time_zone.clone(),
    };

    let result = use_case
        .execute(
            &session,
            MeetingRequest {
                name: body.name,
                date: body.date,
                time: body.time,
                duration: body.duration,
                timezone: body.timezone,
            },
        )
        .await
        .map_err(|err| map_schedule_error(err, MeetingContext::Scheduled))?;

    Ok(Json(ScheduleMeetingResponse {
        meet_link: result.meet_link,
        meeting_details: result.details.into(),
    }))
}

// Selects the provider failure message per route.
enum MeetingContext {
    Instant,
    Scheduled,
}

fn map_schedule_error(err: ScheduleError, context: MeetingContext) -> ApiError {
    match err {
        ScheduleError::Unauthorized => error_response(StatusCode::UNAUTHORIZED, "Unauthorized"),
        ScheduleError::InvalidRequest(message) => {
            error_response(StatusCode::BAD_REQUEST, &message)
        }
        ScheduleError::ProviderFailure => match context {
            MeetingContext::Instant => {
                error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to create meeting")
            }
            MeetingContext::Scheduled => {
                error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to schedule meeting")
            }
        },
    }
}
