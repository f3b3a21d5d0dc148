use crate::domain::{
    CalendarProvider, CreatedEvent, EventTime, IdentityProvider, NewCalendarEvent, ProviderError,
    UserProfile,
};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;
use url::Url;
use uuid::Uuid;

const PRIMARY_CALENDAR_ID: &str = "primary";
const MEET_CONFERENCE_TYPE: &str = "hangoutsMeet";

// Thin wrapper around reqwest for Google Calendar v3 and the OIDC userinfo endpoint.
#[derive(Clone)]
pub struct GoogleClient {
    http: Client,
    calendar_base_url: Url,
    userinfo_url: Url,
}

#[derive(Debug)]
pub enum GoogleClientError {
    InvalidUrl(String),
    Transport(reqwest::Error),
    Upstream {
        status: StatusCode,
        message: Option<String>,
    },
    Decode(reqwest::Error),
    MissingConferenceLink,
}

impl fmt::Display for GoogleClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GoogleClientError::InvalidUrl(message) => write!(f, "invalid google api url: {message}"),
            GoogleClientError::Transport(err) => write!(f, "google transport error: {err}"),
            GoogleClientError::Upstream { status, message } => {
                if let Some(message) = message {
                    write!(f, "google upstream error {status}: {message}")
                } else {
                    write!(f, "google upstream error {status}")
                }
            }
            GoogleClientError::Decode(err) => write!(f, "google response decode error: {err}"),
            GoogleClientError::MissingConferenceLink => {
                write!(f, "event created without a conference entry point")
            }
        }
    }
}

impl std::error::Error for GoogleClientError {}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct EventRequest<'a> {
    summary: &'a str,
    start: EventDateTime<'a>,
    end: EventDateTime<'a>,
    conference_data: ConferenceDataRequest,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct EventDateTime<'a> {
    date_time: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    time_zone: Option<&'a str>,
}

impl<'a> From<&'a EventTime> for EventDateTime<'a> {
    fn from(value: &'a EventTime) -> Self {
        Self {
            date_time: &value.date_time,
            time_zone: value.time_zone.as_deref(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ConferenceDataRequest {
    create_request: CreateConferenceRequest,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateConferenceRequest {
    // Unique per call so the provider sets up exactly one conference for it.
    request_id: String,
    conference_solution_key: ConferenceSolutionKey,
}

#[derive(Debug, Serialize)]
struct ConferenceSolutionKey {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EventResponse {
    id: Option<String>,
    conference_data: Option<ConferenceDataResponse>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConferenceDataResponse {
    #[serde(default)]
    entry_points: Vec<EntryPoint>,
}

#[derive(Debug, Deserialize)]
struct EntryPoint {
    uri: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SettingResponse {
    value: String,
}

#[derive(Debug, Deserialize)]
struct UserInfoResponse {
    name: Option<String>,
    email: Option<String>,
    picture: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GoogleErrorEnvelope {
    error: GoogleErrorBody,
}

#[derive(Debug, Deserialize)]
struct GoogleErrorBody {
    message: Option<String>,
}

impl GoogleClient {
    pub fn new(
        calendar_base_url: &str,
        userinfo_url: &str,
        timeout: Duration,
    ) -> Result<Self, GoogleClientError> {
        let calendar_base_url = Url::parse(calendar_base_url)
            .map_err(|err| GoogleClientError::InvalidUrl(format!("{calendar_base_url}: {err}")))?;
        let userinfo_url = Url::parse(userinfo_url)
            .map_err(|err| GoogleClientError::InvalidUrl(format!("{userinfo_url}: {err}")))?;
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(GoogleClientError::Transport)?;

        Ok(Self {
            http,
            calendar_base_url,
            userinfo_url,
        })
    }

    fn calendar_endpoint(&self, segments: &[&str]) -> Result<Url, GoogleClientError> {
        let mut url = self.calendar_base_url.clone();
        url.path_segments_mut()
            .map_err(|_| GoogleClientError::InvalidUrl("calendar base url cannot be a base".into()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    // Keep upstream status and message for the logs; callers flatten them anyway.
    async fn upstream_error(response: reqwest::Response) -> GoogleClientError {
        let status = response.status();
        let message = response
            .json::<GoogleErrorEnvelope>()
            .await
            .ok()
            .and_then(|payload| payload.error.message);
        GoogleClientError::Upstream { status, message }
    }
}

#[async_trait]
impl CalendarProvider for GoogleClient {
    async fn insert_event(
        &self,
        access_token: &str,
        event: &NewCalendarEvent,
    ) -> Result<CreatedEvent, ProviderError> {
        let mut url = self.calendar_endpoint(&["calendars", PRIMARY_CALENDAR_ID, "events"])?;
        url.query_pairs_mut().append_pair("conferenceDataVersion", "1");
        let body = EventRequest {
            summary: &event.summary,
            start: (&event.window.start).into(),
            end: (&event.window.end).into(),
            conference_data: ConferenceDataRequest {
                create_request: CreateConferenceRequest {
                    request_id: Uuid::new_v4().to_string(),
                    conference_solution_key: ConferenceSolutionKey {
                        kind: MEET_CONFERENCE_TYPE,
                    },
                },
            },
        };

        let res = self
            .http
            .post(url)
            .bearer_auth(access_token)
            .json(&body)
            .send()
            .await
            .map_err(GoogleClientError::Transport)?;

        if !res.status().is_success() {
            return Err(Box::new(Self::upstream_error(res).await));
        }

        let created = res
            .json::<EventResponse>()
            .await
            .map_err(GoogleClientError::Decode)?;

        // The first entry point is the video join link.
        let meet_link = created
            .conference_data
            .and_then(|data| data.entry_points.into_iter().next())
            .and_then(|entry| entry.uri)
            .filter(|uri| !uri.trim().is_empty())
            .ok_or(GoogleClientError::MissingConferenceLink)?;

        Ok(CreatedEvent {
            event_id: created.id,
            meet_link,
        })
    }

    async fn calendar_timezone(&self, access_token: &str) -> Result<String, ProviderError> {
        let url = self.calendar_endpoint(&["users", "me", "settings", "timezone"])?;

        let res = self
            .http
            .get(url)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(GoogleClientError::Transport)?;

        if !res.status().is_success() {
            return Err(Box::new(Self::upstream_error(res).await));
        }

        let setting = res
            .json::<SettingResponse>()
            .await
            .map_err(GoogleClientError::Decode)?;

        Ok(setting.value)
    }
}

#[async_trait]
impl IdentityProvider for GoogleClient {
    async fn fetch_profile(&self, access_token: &str) -> Result<UserProfile, ProviderError> {
        let res = self
            .http
            .get(self.userinfo_url.clone())
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(GoogleClientError::Transport)?;

        if !res.status().is_success() {
            return Err(Box::new(Self::upstream_error(res).await));
        }

        let info = res
            .json::<UserInfoResponse>()
            .await
            .map_err(GoogleClientError::Decode)?;

        Ok(UserProfile {
            name: info.name,
            email: info.email,
            image: info.picture,
        })
    }
}
