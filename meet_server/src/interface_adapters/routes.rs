use crate::interface_adapters::handlers::auth::{current_session, sign_in, sign_out};
use crate::interface_adapters::handlers::health;
use crate::interface_adapters::handlers::meetings::{instant_meeting, schedule_meeting};
use crate::interface_adapters::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/instant-meeting", post(instant_meeting))
        .route("/api/schedule-meeting", post(schedule_meeting))
        .route("/api/auth/session", post(sign_in).get(current_session))
        .route("/api/auth/signout", post(sign_out))
        .with_state(state)
}
