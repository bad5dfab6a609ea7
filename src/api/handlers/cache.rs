/*
 * Responsibility
 * - GET /api/test-cache (one write/read round trip, result as JSON)
 */
use axum::{Json, extract::State};

use crate::{
    services::probes::{self, ProbeResult},
    state::AppState,
};

pub async fn test_cache(State(state): State<AppState>) -> Json<ProbeResult> {
    Json(probes::cache::probe(&state.config.cache).await)
}
