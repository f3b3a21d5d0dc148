use crate::domain::{AuthError, Clock, Session, SessionStore};

// Resolves the session behind a presented session token.
// Every scheduling workflow runs this before touching the calendar provider.
pub struct ResolveSessionUseCase<C, S> {
    pub clock: C,
    pub store: S,
}

impl<C, S> ResolveSessionUseCase<C, S>
where
    C: Clock,
    S: SessionStore,
{
    pub async fn execute(&self, token: Option<&str>) -> Result<Session, AuthError> {
        let token = token.ok_or(AuthError::MissingToken)?;

        let session = self
            .store
            .get(token)
            .await
            .map_err(|_| AuthError::StorageFailure)?
            .ok_or(AuthError::InvalidToken)?;

        if session.expires_at <= self.clock.now_epoch_seconds() {
            // Best-effort cleanup of expired session.
            let _ = self.store.remove(token).await;
            return Err(AuthError::SessionExpired);
        }

        if session.access_token.trim().is_empty() {
            return Err(AuthError::MissingCredential);
        }

        Ok(session)
    }
}
