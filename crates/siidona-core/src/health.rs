use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// Liveness handler for `GET /healthz`.
pub async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// Outcome of a single dependency probe.
#[derive(Debug, Clone, Serialize)]
pub struct Probe {
    pub name: &'static str,
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Probe {
    /// Build a probe from a dependency check result.
    pub fn from_result<E: std::fmt::Display>(name: &'static str, result: Result<(), E>) -> Self {
        match result {
            Ok(()) => Self {
                name,
                ok: true,
                error: None,
            },
            Err(e) => Self {
                name,
                ok: false,
                error: Some(e.to_string()),
            },
        }
    }
}

/// Body of `GET /readyz`: 200 when every probe passed, 503 otherwise.
#[derive(Debug, Serialize)]
pub struct Readiness {
    pub ready: bool,
    pub probes: Vec<Probe>,
}

impl Readiness {
    pub fn new(probes: Vec<Probe>) -> Self {
        let ready = probes.iter().all(|p| p.ok);
        Self { ready, probes }
    }
}

impl IntoResponse for Readiness {
    fn into_response(self) -> Response {
        let status = if self.ready {
            StatusCode::OK
        } else {
            tracing::warn!(probes = ?self.probes, "readiness check failed");
            StatusCode::SERVICE_UNAVAILABLE
        };
        (status, Json(self)).into_response()
    }
}
