//! Relational store probe: one connection, one count query, close.
use sqlx::{ConnectOptions, Connection};

use crate::config::DatabaseConfig;
use crate::services::probes::ProbeResult;

pub async fn probe(config: &DatabaseConfig) -> ProbeResult {
    match check(config).await {
        Ok(message) => ProbeResult::success(message),
        Err(e) => ProbeResult::error(e.to_string()),
    }
}

async fn check(config: &DatabaseConfig) -> Result<String, sqlx::Error> {
    // Fresh connection per call, no pool. Concurrent requests each open
    // their own.
    let mut conn = config.connect_options().connect().await?;

    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
        .fetch_one(&mut conn)
        .await?;

    conn.close().await?;

    Ok(format!("connected, {} users found", count))
}
