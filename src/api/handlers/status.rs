/*
 * Responsibility
 * - GET /api/status (JSON health summary of both backing stores)
 * - Always 200; probe outcomes live in the body
 */
use axum::{Json, extract::State};
use chrono::Utc;

use crate::{
    api::dto::status::{ServiceStatuses, StatusResponse},
    services::probes,
    state::AppState,
};

pub async fn status(State(state): State<AppState>) -> Json<StatusResponse> {
    let relational = probes::database::probe(&state.config.database).await;
    let cache = probes::cache::probe(&state.config.cache).await;

    Json(StatusResponse {
        status: "running",
        timestamp: Utc::now().to_rfc3339(),
        services: ServiceStatuses { relational, cache },
    })
}
