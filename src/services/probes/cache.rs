//! Key-value store probe: write a timestamped value, read it straight back.
use chrono::Local;

use crate::config::CacheConfig;
use crate::services::probes::ProbeResult;

pub async fn probe(config: &CacheConfig) -> ProbeResult {
    match check(config).await {
        Ok(message) => ProbeResult::success(message),
        Err(e) => ProbeResult::error(e.to_string()),
    }
}

async fn check(config: &CacheConfig) -> Result<String, redis::RedisError> {
    let client = redis::Client::open(config.url())?;
    let mut conn = client.get_multiplexed_async_connection().await?;

    let key = config.probe_key();
    let value = format!(
        "connectivity check - {}",
        Local::now().format("%Y-%m-%d %H:%M:%S%.6f")
    );

    // Plain SET without TTL: the next probe overwrites the same key, so
    // repeated calls never collide.
    let _: () = redis::cmd("SET")
        .arg(&key)
        .arg(&value)
        .query_async(&mut conn)
        .await?;

    let read: Option<String> = redis::cmd("GET").arg(&key).query_async(&mut conn).await?;

    match read {
        Some(v) => Ok(format!("connected, read back: {}", v)),
        // A nil right after our own SET means the store is misbehaving;
        // report it instead of echoing an empty success.
        None => Err(redis::RedisError::from((
            redis::ErrorKind::UnexpectedReturnType,
            "probe key missing after write",
        ))),
    }
}
