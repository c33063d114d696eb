use serde::Serialize;
use utoipa::ToSchema;

/// Payload served by `/healthcheck`: `ok` while the document store answers
/// pings, `degraded` while the backend runs on the in-memory roster alone.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Either "ok" or "degraded".
    pub status: String,
}

impl HealthResponse {
    /// Payload reporting a reachable store.
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }

    /// Payload reporting that storage is unreachable.
    pub fn degraded() -> Self {
        Self {
            status: "degraded".to_string(),
        }
    }
}
