use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use chrono::Utc;
use serde::Serialize;

use crate::api::AdvisorState;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HealthCheck {
    pub status: &'static str,
    pub detail: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: HealthCheck,
    pub advisor: HealthCheck,
    pub checked_at: String,
}

pub fn router(state: AdvisorState) -> Router {
    Router::new().route("/health", get(health)).with_state(state)
}

pub async fn health(State(state): State<AdvisorState>) -> (StatusCode, Json<HealthResponse>) {
    let advisor = advisor_check(&state);
    let ready = advisor.status == "ready";

    let payload = HealthResponse {
        status: if ready { "ready" } else { "degraded" },
        service: HealthCheck {
            status: "ready",
            detail: "roomwise-server runtime initialized".to_string(),
        },
        advisor,
        checked_at: Utc::now().to_rfc3339(),
    };

    let status_code = if ready { StatusCode::OK } else { StatusCode::SERVICE_UNAVAILABLE };
    (status_code, Json(payload))
}

fn advisor_check(state: &AdvisorState) -> HealthCheck {
    match state.cache_stats("health") {
        Ok(stats) => HealthCheck {
            status: "ready",
            detail: format!(
                "catalog cache {}/{} entries, {} hits, {} misses",
                stats.entries, stats.capacity, stats.hits, stats.misses
            ),
        },
        Err(error) => HealthCheck { status: "degraded", detail: error.to_string() },
    }
}
