/*
 * Responsibility
 * - GET / (HTML status page)
 * - Runs both probes plus the user listing and renders one document
 */
use axum::{extract::State, response::Html};
use chrono::Local;
use minijinja::context;

use crate::{
    api::dto::users::UserResponse,
    error::AppError,
    services::{probes, users},
    state::AppState,
};

pub async fn index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let database = probes::database::probe(&state.config.database).await;
    let cache = probes::cache::probe(&state.config.cache).await;
    let users: Vec<UserResponse> = users::recent_users(&state.config.database)
        .await
        .into_iter()
        .map(UserResponse::from)
        .collect();

    let template = state.templates.get_template("index.html")?;
    let html = template.render(context! {
        port => state.config.addr.port(),
        current_time => Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        database => database,
        cache => cache,
        users => users,
    })?;

    Ok(Html(html))
}
