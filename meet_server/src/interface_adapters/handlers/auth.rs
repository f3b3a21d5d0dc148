use crate::domain::AuthError;
use crate::interface_adapters::handlers::{ApiError, bearer_token, error_response, resolve_session};
use crate::interface_adapters::protocol::{
    SessionResponse, SignInRequest, SignInResponse, SignOutResponse,
};
use crate::interface_adapters::state::{AppState, SystemClock};
use crate::use_cases::{SignInUseCase, SignOutUseCase};
use axum::{
    Json,
    extract::State,
    http::{HeaderMap, StatusCode},
};

// Handler for exchanging an OAuth access token for a session token.
#[tracing::instrument(name = "sign_in", skip_all)]
pub async fn sign_in(
    State(state): State<AppState>,
    Json(payload): Json<SignInRequest>,
) -> Result<Json<SignInResponse>, ApiError> {
    let use_case = SignInUseCase {
        clock: SystemClock,
        store: state.session_store(),
        identity: state.identity.clone(),
        default_ttl_seconds: state.settings.session_ttl_seconds,
    };

    let result = use_case
        .execute(payload.access_token, payload.expires_in)
        .await
        .map_err(|err| map_auth_error(err, AuthContext::SignIn))?;

    tracing::info!(email = ?result.user.email, "session created");

    Ok(Json(SignInResponse {
        session_token: result.session_token,
        expires_at: result.expires_at,
        user: result.user,
    }))
}

// Handler describing the presented session.
pub async fn current_session(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<SessionResponse>, ApiError> {
    let session = resolve_session(&state, &headers)
        .await
        .map_err(|err| map_auth_error(err, AuthContext::Session))?;

    Ok(Json(SessionResponse {
        user: session.user,
        expires_at: session.expires_at,
    }))
}

// Handler for revoking the presented session.
pub async fn sign_out(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<SignOutResponse>, ApiError> {
    let token = bearer_token(&headers)
        .ok_or_else(|| map_auth_error(AuthError::MissingToken, AuthContext::SignOut))?;

    let use_case = SignOutUseCase {
        store: state.session_store(),
    };

    let result = use_case
        .execute(token)
        .await
        .map_err(|err| map_auth_error(err, AuthContext::SignOut))?;

    Ok(Json(SignOutResponse {
        revoked: result.revoked,
    }))
}

// Maps domain errors to HTTP responses by endpoint context.
enum AuthContext {
    SignIn,
    Session,
    SignOut,
}

fn map_auth_error(err: AuthError, context: AuthContext) -> ApiError {
    match context {
        AuthContext::SignIn => match err {
            AuthError::MissingCredential => {
                error_response(StatusCode::BAD_REQUEST, "accessToken is required")
            }
            AuthError::IdentityFailure => {
                error_response(StatusCode::BAD_GATEWAY, "Failed to sign in")
            }
            AuthError::StorageFailure => {
                error_response(StatusCode::INTERNAL_SERVER_ERROR, "storage error")
            }
            // Sign-in never reads a presented session token.
            AuthError::MissingToken | AuthError::InvalidToken | AuthError::SessionExpired => {
                error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to sign in")
            }
        },
        AuthContext::Session => match err {
            AuthError::StorageFailure => {
                error_response(StatusCode::INTERNAL_SERVER_ERROR, "storage error")
            }
            AuthError::MissingToken
            | AuthError::InvalidToken
            | AuthError::SessionExpired
            | AuthError::MissingCredential
            | AuthError::IdentityFailure => {
                error_response(StatusCode::UNAUTHORIZED, "Unauthorized")
            }
        },
        AuthContext::SignOut => match err {
            AuthError::StorageFailure => {
                error_response(StatusCode::INTERNAL_SERVER_ERROR, "storage error")
            }
            AuthError::MissingToken
            | AuthError::InvalidToken
            | AuthError::SessionExpired
            | AuthError::MissingCredential
            | AuthError::IdentityFailure => {
                error_response(StatusCode::UNAUTHORIZED, "Unauthorized")
            }
        },
    }
}
