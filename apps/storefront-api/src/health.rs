//! Readiness and liveness endpoints
//!
//! `/health` itself (app name and version) comes from
//! `axum_helpers::health_router` and is merged in `main`.

use axum::{Json, Router, extract::State, http::StatusCode, routing::get};
use axum_helpers::{HealthCheckFuture, run_health_checks};
use serde_json::{Value, json};

use crate::state::AppState;

/// Create a router with readiness and liveness checks
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health/ready", get(readiness_check))
        .route("/health/live", get(liveness_check))
        .with_state(state)
}

/// Readiness check - verifies the MongoDB connection with a ping
async fn readiness_check(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<Value>), (StatusCode, Json<Value>)> {
    let checks: Vec<(&str, HealthCheckFuture<'_>)> = vec![(
        "mongodb",
        Box::pin(async {
            if database::mongodb::check_health(&state.mongo_client).await {
                Ok(())
            } else {
                Err("ping failed".to_string())
            }
        }),
    )];

    run_health_checks(checks).await
}

/// Liveness check - always 200 while the process is serving requests
async fn liveness_check() -> Json<Value> {
    Json(json!({ "status": "alive" }))
}
