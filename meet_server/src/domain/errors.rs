// Errors raised while resolving or creating a session.
#[derive(Debug, PartialEq, Eq)]
pub enum AuthError {
    MissingToken,
    InvalidToken,
    SessionExpired,
    MissingCredential,
    IdentityFailure,
    StorageFailure,
}

// Errors raised by the scheduling workflows.
#[derive(Debug, PartialEq, Eq)]
pub enum ScheduleError {
    Unauthorized,
    InvalidRequest(String),
    // Any calendar provider failure, deliberately undifferentiated.
    ProviderFailure,
}

impl From<AuthError> for ScheduleError {
    fn from(_: AuthError) -> Self {
        ScheduleError::Unauthorized
    }
}
