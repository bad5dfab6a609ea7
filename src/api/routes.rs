/*
 * Responsibility
 * - URL structure of the whole app
 * - One page route plus the three JSON endpoints under /api
 */
use axum::{Router, routing::get};

use crate::state::AppState;

use crate::api::handlers::{cache::test_cache, index::index, status::status, users::list_users};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/api/status", get(status))
        .route("/api/users", get(list_users))
        .route("/api/test-cache", get(test_cache))
}
