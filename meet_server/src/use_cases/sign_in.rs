use std::sync::Arc;

use uuid::Uuid;

use crate::domain::{AuthError, Clock, IdentityProvider, Session, SessionStore, UserProfile};

// Upper bound on a session lifetime, whatever the client reports.
pub const MAX_SESSION_TTL_SECONDS: u64 = 7 * 24 * 60 * 60;

// Response returned by the sign-in use case.
pub struct SignInResponse {
    pub session_token: String,
    pub expires_at: u64,
    pub user: UserProfile,
}

// Exchanges an OAuth access token for a server-side session.
pub struct SignInUseCase<C, S> {
    pub clock: C,
    pub store: S,
    pub identity: Arc<dyn IdentityProvider>,
    // Lifetime applied when the provider did not report one.
    pub default_ttl_seconds: u64,
}

impl<C, S> SignInUseCase<C, S>
where
    C: Clock,
    S: SessionStore,
{
    pub async fn execute(
        &self,
        access_token: String,
        expires_in: Option<u64>,
    ) -> Result<SignInResponse, AuthError> {
        let access_token = access_token.trim().to_string();
        if access_token.is_empty() {
            return Err(AuthError::MissingCredential);
        }

        let user = self
            .identity
            .fetch_profile(&access_token)
            .await
            .map_err(|err| {
                tracing::error!(error = %err, "failed to fetch user profile");
                AuthError::IdentityFailure
            })?;

        let token = Uuid::new_v4().to_string();
        let ttl = expires_in
            .filter(|seconds| *seconds > 0)
            .unwrap_or(self.default_ttl_seconds)
            .min(MAX_SESSION_TTL_SECONDS);
        let now = self.clock.now_epoch_seconds();
        let expires_at = now.saturating_add(ttl);

        // Abandoned sessions are only dropped here, so keep this best-effort.
        match self.store.remove_expired(now).await {
            Ok(0) => {}
            Ok(pruned) => tracing::debug!(pruned, "expired sessions pruned"),
            Err(err) => tracing::warn!(error = %err, "failed to prune expired sessions"),
        }

        let session = Session {
            user: user.clone(),
            access_token,
            expires_at,
        };

        self.store
            .insert(token.clone(), session)
            .await
            .map_err(|_| AuthError::StorageFailure)?;

        Ok(SignInResponse {
            session_token: token,
            expires_at,
            user,
        })
    }
}
