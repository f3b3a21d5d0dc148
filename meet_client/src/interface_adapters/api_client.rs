use crate::domain::{
    ApiError, InstantMeetingReply, MeetingApi, ScheduleMeetingForm, ScheduleMeetingReply,
    SessionInfo, UserProfile,
};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

// Thin wrapper around reqwest for the meeting server routes.
#[derive(Clone)]
pub struct MeetApiClient {
    http: Client,
    pub base_url: String,
    session_token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SignInBody<'a> {
    access_token: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    expires_in: Option<u64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignInReply {
    pub session_token: String,
    pub expires_at: u64,
    pub user: UserProfile,
}

#[derive(Debug, Deserialize)]
struct SignOutReply {
    revoked: bool,
}

impl MeetApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            session_token: None,
        }
    }

    pub fn with_session_token(mut self, token: impl Into<String>) -> Self {
        self.session_token = Some(token.into());
        self
    }

    pub fn session_token(&self) -> Option<&str> {
        self.session_token.as_deref()
    }

    /// Exchanges a provider access token for a server session and keeps the
    /// session token for later calls.
    pub async fn sign_in(
        &mut self,
        access_token: &str,
        expires_in: Option<u64>,
    ) -> Result<SignInReply, ApiError> {
        let req = self.http.post(self.url("/api/auth/session")).json(&SignInBody {
            access_token,
            expires_in,
        });
        let reply: SignInReply = decode(send(req).await?).await?;
        self.session_token = Some(reply.session_token.clone());
        Ok(reply)
    }

    /// Revokes the current session. The token is forgotten even when the
    /// server no longer knows it.
    pub async fn sign_out(&mut self) -> Result<bool, ApiError> {
        let Some(token) = self.session_token.take() else {
            return Ok(false);
        };

        let req = self.http.post(self.url("/api/auth/signout")).bearer_auth(token);
        let res = send(req).await?;
        if res.status() == StatusCode::UNAUTHORIZED {
            return Ok(false);
        }
        let reply: SignOutReply = decode(res).await?;
        Ok(reply.revoked)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorized(&self, req: RequestBuilder) -> RequestBuilder {
        match &self.session_token {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }
}

#[async_trait]
impl MeetingApi for MeetApiClient {
    async fn create_instant_meeting(&self) -> Result<InstantMeetingReply, ApiError> {
        let req = self.authorized(self.http.post(self.url("/api/instant-meeting")));
        decode(send(req).await?).await
    }

    async fn schedule_meeting(
        &self,
        form: &ScheduleMeetingForm,
    ) -> Result<ScheduleMeetingReply, ApiError> {
        let req = self.authorized(self.http.post(self.url("/api/schedule-meeting")).json(form));
        decode(send(req).await?).await
    }

    async fn current_session(&self) -> Result<Option<SessionInfo>, ApiError> {
        if self.session_token.is_none() {
            return Ok(None);
        }

        let req = self.authorized(self.http.get(self.url("/api/auth/session")));
        let res = send(req).await?;
        if res.status() == StatusCode::UNAUTHORIZED {
            return Ok(None);
        }
        decode(res).await.map(Some)
    }
}

async fn send(req: RequestBuilder) -> Result<Response, ApiError> {
    req.send()
        .await
        .map_err(|err| ApiError::Transport(err.to_string()))
}

// Keeps the server's `{ "error": ... }` message so it can be shown verbatim.
async fn decode<T: DeserializeOwned>(res: Response) -> Result<T, ApiError> {
    let status = res.status();
    if !status.is_success() {
        let message = res.json::<ErrorBody>().await.ok().map(|body| body.error);
        return Err(ApiError::Upstream {
            status: status.as_u16(),
            message,
        });
    }

    res.json::<T>()
        .await
        .map_err(|err| ApiError::Decode(err.to_string()))
}
