pub mod auth;
pub mod meetings;

use crate::domain::{AuthError, Session};
use crate::interface_adapters::protocol::ErrorResponse;
use crate::interface_adapters::state::{AppState, SystemClock};
use crate::use_cases::ResolveSessionUseCase;
use axum::{
    Json,
    http::{HeaderMap, StatusCode, header::AUTHORIZATION},
};

pub(crate) type ApiError = (StatusCode, Json<ErrorResponse>);

// Liveness probe.
pub async fn health() -> &'static str {
    "ok"
}

// Helper to build a JSON error response.
pub(crate) fn error_response(status: StatusCode, message: &str) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
}

// Extract the session token from `Authorization: Bearer <token>`.
pub(crate) fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

// Session gate shared by every protected route.
pub(crate) async fn resolve_session(
    state: &AppState,
    headers: &HeaderMap,
) -> Result<Session, AuthError> {
    let use_case = ResolveSessionUseCase {
        clock: SystemClock,
        store: state.session_store(),
    };

    use_case.execute(bearer_token(headers)).await.inspect_err(|err| {
        tracing::warn!(error = ?err, "session rejected");
    })
}
