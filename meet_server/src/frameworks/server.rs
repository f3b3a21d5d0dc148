// Framework bootstrap for the meeting scheduler service.

use crate::frameworks::config;
use crate::interface_adapters::clients::GoogleClient;
use crate::interface_adapters::routes;
use crate::interface_adapters::state::{AppState, SchedulingSettings};
use crate::use_cases::time_format::resolve_time_zone;

use std::collections::HashMap;
use std::io::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::Mutex;

fn init_runtime() {
    // Load .env locally; safe to ignore when not present.
    let _ = dotenvy::dotenv();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

pub async fn run(listener: tokio::net::TcpListener) -> Result<()> {
    let state = build_state()?;
    serve(listener, state).await
}

// Serves the routes over an already-built state; tests inject their own providers here.
pub async fn serve(listener: tokio::net::TcpListener, state: AppState) -> Result<()> {
    let address = listener.local_addr()?;
    let app = routes::app(state);

    tracing::info!(%address, "listening");

    // Serve app and report errors rather than panicking.
    axum::serve(listener, app).await.inspect_err(|e| {
        tracing::error!(error = %e, "server error");
    })
}

pub async fn run_with_config() -> Result<()> {
    init_runtime();

    let address = SocketAddr::from(([127, 0, 0, 1], config::http_port()));

    // Bind TCP listener with error handling.
    let listener = tokio::net::TcpListener::bind(address)
        .await
        .inspect_err(|e| {
            tracing::error!(%address, error = %e, "failed to bind");
        })?;

    run(listener).await
}

fn build_state() -> Result<AppState> {
    let calendar_api_url = config::calendar_api_url();
    let userinfo_url = config::userinfo_url();
    let calendar_timeout = config::calendar_timeout();
    let google = GoogleClient::new(&calendar_api_url, &userinfo_url, calendar_timeout)
        .map_err(|e| std::io::Error::other(format!("failed to initialize google client: {e}")))?;
    tracing::debug!(
        calendar_api_url = %calendar_api_url,
        userinfo_url = %userinfo_url,
        calendar_timeout_ms = calendar_timeout.as_millis(),
        "google client configured"
    );

    // Reject a bad default at startup instead of on every request.
    let default_time_zone = resolve_time_zone(None, &config::default_time_zone())
        .map_err(|e| std::io::Error::other(format!("invalid DEFAULT_TIMEZONE: {e:?}")))?;

    let google = Arc::new(google);
    Ok(AppState {
        sessions: Arc::new(Mutex::new(HashMap::new())),
        calendar: google.clone(),
        identity: google,
        settings: SchedulingSettings {
            default_time_zone,
            session_ttl_seconds: config::session_ttl_seconds(),
        },
    })
}
