//! User listing with graceful degradation.
use crate::config::DatabaseConfig;
use crate::repos::user_repo::{self, UserRow};

/// Returns up to 10 users, or an empty list if the store is unreachable.
///
/// Unlike the probes, this path does not surface the failure: the error is
/// logged here and callers render whatever they get. The database probe is
/// the place that reports connectivity.
pub async fn recent_users(config: &DatabaseConfig) -> Vec<UserRow> {
    match user_repo::list(config).await {
        Ok(rows) => rows,
        Err(e) => {
            tracing::error!(error = %e, "failed to load users, returning empty list");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unreachable_config() -> DatabaseConfig {
        DatabaseConfig {
            host: "127.0.0.1".to_string(),
            port: 1,
            user: "postgres".to_string(),
            password: "postgres".to_string(),
            database: "devstack".to_string(),
        }
    }

    #[tokio::test]
    async fn degrades_to_empty_list_when_store_is_down() {
        let users = recent_users(&unreachable_config()).await;
        assert!(users.is_empty());
    }
}
