//! Local development server for the two Lambda handlers.
//!
//! Each POST route forwards the JSON body (an empty or `null` body counts as
//! `{}`) into the matching dispatcher and relays the whole envelope as the
//! HTTP response, so the front-end sees exactly what API Gateway would hand
//! it. The HTTP status is 200 whenever the handler ran; the handler's own
//! code lives inside the envelope.

use crate::application::{data_aggregation, property_valuation};
use crate::config::ServerEnvConfig;
use crate::domain::envelope::ErrorBody;
use crate::domain::errors::RequestError;
use crate::infrastructure::rng::RngSource;
use anyhow::{Context, Result};
use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::Utc;
use serde_json::{Value, json};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

pub const SERVICE_NAME: &str = "Lambda Functions Local Server";

/// Shared state for the route handlers.
#[derive(Debug, Default)]
pub struct AppState {
    pub rng_source: RngSource,
}

impl AppState {
    pub fn new(rng_source: RngSource) -> Self {
        Self { rng_source }
    }
}

/// Errors surfaced before a request reaches a dispatcher.
#[derive(Debug)]
enum AdapterError {
    MalformedJson(serde_json::Error),
    Request(RequestError),
}

impl IntoResponse for AdapterError {
    fn into_response(self) -> Response {
        let message = match self {
            AdapterError::MalformedJson(err) => format!("Malformed JSON body: {}", err),
            AdapterError::Request(err) => err.to_string(),
        };
        warn!(error = %message, "Rejected request at the transport layer");
        (StatusCode::BAD_REQUEST, Json(ErrorBody { error: message })).into_response()
    }
}

impl From<RequestError> for AdapterError {
    fn from(err: RequestError) -> Self {
        AdapterError::Request(err)
    }
}

pub fn router(state: Arc<AppState>, cors: bool) -> Router {
    let mut router = Router::new()
        .route("/", get(welcome))
        .route("/health", get(health))
        .route("/property-valuation", post(handle_property_valuation))
        .route("/data-aggregation", post(handle_data_aggregation))
        .with_state(state);

    router = router.layer(TraceLayer::new_for_http());

    if cors {
        router = router.layer(CorsLayer::permissive());
    }

    router
}

/// Bind and serve until Ctrl+C or SIGTERM.
pub async fn serve(config: &ServerEnvConfig, state: Arc<AppState>) -> Result<()> {
    let addr = config.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!(%addr, cors = config.cors, "Lambda local server listening");

    axum::serve(listener, router(state, config.cors))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Local server terminated with an error")?;

    info!("Local server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            warn!(error = %err, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                warn!(error = %err, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received Ctrl+C, shutting down"),
        () = terminate => info!("Received SIGTERM, shutting down"),
    }
}

/// Parse a request body the way the development server always has:
/// nothing or `null` means an empty event.
fn parse_event(body: &Bytes) -> Result<Value, AdapterError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(json!({}));
    }
    match serde_json::from_slice::<Value>(body).map_err(AdapterError::MalformedJson)? {
        Value::Null => Ok(json!({})),
        event => Ok(event),
    }
}

async fn handle_property_valuation(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Response, AdapterError> {
    let event = parse_event(&body)?;
    let mut rng = state.rng_source.next_rng();
    let envelope = property_valuation::handle_event(&event, &mut rng, Utc::now())?;
    Ok(Json(envelope).into_response())
}

async fn handle_data_aggregation(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Response, AdapterError> {
    let event = parse_event(&body)?;
    let mut rng = state.rng_source.next_rng();
    let envelope = data_aggregation::handle_event(&event, &mut rng, Utc::now())?;
    Ok(Json(envelope).into_response())
}

async fn welcome() -> Json<Value> {
    Json(json!({
        "service": SERVICE_NAME,
        "endpoints": {
            "property-valuation": "/property-valuation",
            "data-aggregation": "/data-aggregation",
            "health": "/health"
        }
    }))
}

async fn health() -> Json<Value> {
    Json(json!({"status": "healthy", "service": "lambda-local"}))
}
