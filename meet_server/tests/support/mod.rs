// Shared harness: one meet server per test binary, wired to a mock Google API.
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, OnceLock, mpsc};
use std::time::Duration;

use meet_server::interface_adapters::clients::GoogleClient;
use meet_server::interface_adapters::state::{AppState, SchedulingSettings};
use serde_json::json;
use tokio::sync::Mutex;
use wiremock::matchers::{body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const GOOGLE_ACCESS_TOKEN: &str = "ya29.integration";
pub const INSTANT_MEET_LINK: &str = "https://meet.google.com/ins-tant-lnk";
pub const LATE_NIGHT_MEET_LINK: &str = "https://meet.google.com/lat-enig-htx";
pub const CALENDAR_TIMEZONE: &str = "Europe/Vilnius";

static BASE_URL: OnceLock<String> = OnceLock::new();

pub fn ensure_server() -> &'static str {
    BASE_URL.get_or_init(|| {
        let (ready_tx, ready_rx) = mpsc::channel();

        // The server outlives each `#[tokio::test]` runtime, so it gets its own thread.
        std::thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("server runtime");
            runtime.block_on(async move {
                let google = mock_google().await;
                let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
                    .await
                    .expect("bind ephemeral port");
                let addr = listener.local_addr().expect("local addr");
                let state = state_for(&google);

                ready_tx
                    .send(format!("http://{addr}"))
                    .expect("publish server url");
                // Keep the mock alive for as long as the server runs.
                let _google = google;
                meet_server::serve(listener, state).await.expect("server failed");
            });
        });

        ready_rx
            .recv_timeout(Duration::from_secs(10))
            .expect("server did not start in time")
    })
}

fn state_for(google: &MockServer) -> AppState {
    let client = GoogleClient::new(
        &format!("{}/calendar/v3", google.uri()),
        &format!("{}/userinfo", google.uri()),
        Duration::from_secs(5),
    )
    .expect("google client");
    let client = Arc::new(client);

    AppState {
        sessions: Arc::new(Mutex::new(HashMap::new())),
        calendar: client.clone(),
        identity: client,
        settings: SchedulingSettings {
            default_time_zone: "UTC".to_string(),
            session_ttl_seconds: 3600,
        },
    }
}

async fn mock_google() -> MockServer {
    let google = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/userinfo"))
        .and(header("authorization", format!("Bearer {GOOGLE_ACCESS_TOKEN}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "Grace",
            "email": "grace@example.com",
            "picture": "https://example.com/grace.png"
        })))
        .mount(&google)
        .await;

    Mock::given(method("GET"))
        .and(path("/userinfo"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": { "message": "Invalid Credentials" }
        })))
        .with_priority(10)
        .mount(&google)
        .await;

    // Only the rolled-over late-night window gets this link.
    Mock::given(method("POST"))
        .and(path("/calendar/v3/calendars/primary/events"))
        .and(query_param("conferenceDataVersion", "1"))
        .and(body_partial_json(json!({
            "start": { "dateTime": "2026-10-19T23:50:00", "timeZone": "Asia/Tokyo" },
            "end": { "dateTime": "2026-10-20T00:20:00", "timeZone": "Asia/Tokyo" }
        })))
        .respond_with(event_with_link(LATE_NIGHT_MEET_LINK))
        .with_priority(1)
        .mount(&google)
        .await;

    Mock::given(method("POST"))
        .and(path("/calendar/v3/calendars/primary/events"))
        .and(query_param("conferenceDataVersion", "1"))
        .respond_with(event_with_link(INSTANT_MEET_LINK))
        .mount(&google)
        .await;

    Mock::given(method("GET"))
        .and(path("/calendar/v3/users/me/settings/timezone"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "value": CALENDAR_TIMEZONE
        })))
        .mount(&google)
        .await;

    google
}

fn event_with_link(link: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "id": "evt-integration",
        "conferenceData": {
            "entryPoints": [{ "entryPointType": "video", "uri": link }]
        }
    }))
}

// Signs in with the mocked Google token and returns the server session token.
pub async fn sign_in(client: &reqwest::Client, base_url: &str) -> String {
    let res = client
        .post(format!("{base_url}/api/auth/session"))
        .json(&json!({ "accessToken": GOOGLE_ACCESS_TOKEN }))
        .send()
        .await
        .expect("sign-in request");
    assert_eq!(res.status(), reqwest::StatusCode::OK);

    let payload: serde_json::Value = res.json().await.expect("sign-in body");
    payload["sessionToken"]
        .as_str()
        .expect("session token")
        .to_string()
}
