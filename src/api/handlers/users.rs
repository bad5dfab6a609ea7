/*
 * Responsibility
 * - GET /api/users (up to 10 rows, empty on storage failure)
 */
use axum::{Json, extract::State};

use crate::{
    api::dto::users::{UserResponse, UsersResponse},
    services::users,
    state::AppState,
};

pub async fn list_users(State(state): State<AppState>) -> Json<UsersResponse> {
    let users = users::recent_users(&state.config.database)
        .await
        .into_iter()
        .map(UserResponse::from)
        .collect();

    Json(UsersResponse { users })
}
