//! HTTP status endpoint.
//!
//! ```text
//!  POST /set_led  {"status": "<status>"}
//!    200 {"success": true,  "status_set": "<status>"}
//!    400 {"success": false, "error": "No status provided"}
//!    400 {"success": false, "error": "Invalid JSON body"}
//! ```
//!
//! The handler only writes the [`StatusStore`]; it never waits for the
//! render loop. Statuses outside the known set are accepted and echoed
//! back; the renderer shows them as all-off.
//!
//! The calling page is usually opened from `file://`, so CORS allows any
//! origin, and the body is parsed as JSON whatever its `Content-Type`
//! (a `text/plain` post avoids the preflight round trip).

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use log::{info, warn};
use serde::Serialize;
use serde_json::Value;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tower_http::cors::{Any, CorsLayer};

use crate::app::status::Status;
use crate::app::store::StatusStore;

pub const SET_LED_PATH: &str = "/set_led";

/// Why a `/set_led` request was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestError {
    /// Body has no non-empty string `status` field.
    MissingStatus,
    /// Body is not JSON at all.
    InvalidJson,
}

impl RequestError {
    pub fn message(self) -> &'static str {
        match self {
            Self::MissingStatus => "No status provided",
            Self::InvalidJson => "Invalid JSON body",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SetLedResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_set: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<&'static str>,
}

impl SetLedResponse {
    pub fn accepted(status: String) -> Self {
        Self {
            success: true,
            status_set: Some(status),
            error: None,
        }
    }

    pub fn rejected(reason: RequestError) -> Self {
        Self {
            success: false,
            status_set: None,
            error: Some(reason.message()),
        }
    }
}

/// Extract the requested status from a raw request body.
pub fn parse_set_led(body: &[u8]) -> Result<String, RequestError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(RequestError::MissingStatus);
    }
    let value: Value = serde_json::from_slice(body).map_err(|_| RequestError::InvalidJson)?;
    value
        .get("status")
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .ok_or(RequestError::MissingStatus)
}

async fn set_led(
    State(store): State<Arc<StatusStore>>,
    body: Bytes,
) -> (StatusCode, Json<SetLedResponse>) {
    match parse_set_led(&body) {
        Ok(raw) => {
            let status = Status::parse(&raw);
            if status.is_recognized() {
                info!("HTTP | status set: {}", raw);
            } else {
                warn!("HTTP | status set to unrecognised value: {:?}", raw);
            }
            store.set(status);
            (StatusCode::OK, Json(SetLedResponse::accepted(raw)))
        }
        Err(reason) => {
            warn!("HTTP | rejected /set_led: {}", reason.message());
            (StatusCode::BAD_REQUEST, Json(SetLedResponse::rejected(reason)))
        }
    }
}

/// Router with `POST /set_led` and permissive CORS.
pub fn router(store: Arc<StatusStore>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(SET_LED_PATH, post(set_led))
        .layer(cors)
        .with_state(store)
}

/// Serve [`router`] on `listener` until `shutdown` is cancelled.
pub async fn serve(
    listener: TcpListener,
    store: Arc<StatusStore>,
    shutdown: CancellationToken,
) -> std::io::Result<()> {
    axum::serve(listener, router(store))
        .with_graceful_shutdown(async move { shutdown.cancelled().await })
        .await
}
