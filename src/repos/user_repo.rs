/*
 * Responsibility
 * - SQLx operations against the users table
 * - Opens its own connection per call (no pool in this demo)
 */
use sqlx::{ConnectOptions, Connection, FromRow};

use crate::config::DatabaseConfig;
use crate::repos::error::RepoError;

#[derive(Debug, FromRow)]
pub struct UserRow {
    pub id: i32,
    pub name: String,
    pub email: String,
}

pub async fn list(config: &DatabaseConfig) -> Result<Vec<UserRow>, RepoError> {
    let mut conn = config.connect_options().connect().await?;

    let rows = sqlx::query_as::<_, UserRow>(
        r#"
        SELECT id, name, email
        FROM users
        LIMIT 10
        "#,
    )
    .fetch_all(&mut conn)
    .await?;

    conn.close().await?;

    Ok(rows)
}
