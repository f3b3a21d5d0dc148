use crate::domain::{AuthError, SessionStore};

// Response returned by the sign-out use case.
pub struct SignOutResponse {
    pub revoked: bool,
}

pub struct SignOutUseCase<S> {
    pub store: S,
}

impl<S> SignOutUseCase<S>
where
    S: SessionStore,
{
    pub async fn execute(&self, token: &str) -> Result<SignOutResponse, AuthError> {
        let revoked = self
            .store
            .remove(token)
            .await
            .map_err(|_| AuthError::StorageFailure)?;

        Ok(SignOutResponse { revoked })
    }
}
