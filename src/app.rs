use anyhow::Result;
use axum::Router;
use std::{panic, process, sync::Arc};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::api;
use crate::config::Config;
use crate::state::AppState;

fn init_tracing() {
    // Prefer RUST_LOG if set; otherwise use a sensible default.
    // Ex:
    // RUST_LOG=info,devstack_status=debug,tower_http=debug cargo run
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,tower_http=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn init_panic_hook(abort_on_panic: bool) {
    // Keep the default hook as a fallback (prints to stderr with location).
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |info| {
        // Surface panics via tracing so they don't get lost when stderr is
        // hidden by the process launcher.
        tracing::error!(?info, "panic");

        // In development, fail fast. In production, keep the server running
        // and fall back to the default stderr report.
        if abort_on_panic {
            process::abort();
        } else {
            default_hook(info);
        }
    }))
}

pub async fn run() -> Result<()> {
    init_tracing();

    let config = Config::from_env()?;
    let abort_on_panic = !config.app_env.is_production();
    init_panic_hook(abort_on_panic);

    tracing::info!(
        "starting status server in {:?} mode on {}",
        config.app_env,
        config.addr
    );

    let addr = config.addr;
    let state = AppState::new(Arc::new(config))?;
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(api::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AppEnv, CacheConfig, Config, DatabaseConfig};
    use axum::{
        body::{Body, to_bytes},
        http::{Request, StatusCode, header},
    };
    use std::net::SocketAddr;
    use std::str::FromStr;
    use tower::ServiceExt;

    // Port 1 on loopback: nothing listens there, so every backend call
    // fails fast with a refused connection.
    fn offline_config() -> Config {
        Config {
            addr: SocketAddr::from_str("0.0.0.0:5000").unwrap(),
            app_env: AppEnv::Development,
            database: DatabaseConfig {
                host: "127.0.0.1".to_string(),
                port: 1,
                user: "postgres".to_string(),
                password: "postgres".to_string(),
                database: "devstack".to_string(),
            },
            cache: CacheConfig {
                host: "127.0.0.1".to_string(),
                port: 1,
                namespace: "devstack".to_string(),
            },
        }
    }

    fn offline_app() -> Router {
        let state = AppState::new(Arc::new(offline_config())).expect("state");
        build_router(state)
    }

    async fn get(app: Router, uri: &str) -> axum::response::Response {
        app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .expect("router response")
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        serde_json::from_slice(&bytes).expect("json body")
    }

    #[tokio::test]
    async fn page_renders_even_with_backends_down() {
        let response = get(offline_app(), "/").await;
        assert_eq!(response.status(), StatusCode::OK);

        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        assert!(content_type.starts_with("text/html"));

        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        let html = String::from_utf8(bytes.to_vec()).expect("utf-8 page");

        // Both checks failed but still render, with the endpoint list intact.
        assert!(html.contains(r#"class="status error""#));
        assert!(html.contains("GET /api/status"));
        assert!(html.contains("GET /api/test-cache"));
    }

    #[tokio::test]
    async fn status_reports_both_services_down() {
        let response = get(offline_app(), "/api/status").await;
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        let root = json.as_object().expect("object body");
        assert_eq!(root.len(), 3);
        assert_eq!(json["status"], "running");
        assert!(json["timestamp"].is_string());

        let services = json["services"].as_object().expect("services object");
        assert_eq!(services.len(), 2);
        for name in ["relational", "cache"] {
            let service = services[name].as_object().expect("service object");
            assert_eq!(service.len(), 2);
            assert_eq!(service["status"], "error");
            assert!(service["message"].is_string());
        }
    }

    #[tokio::test]
    async fn users_degrade_to_empty_list() {
        let response = get(offline_app(), "/api/users").await;
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json, serde_json::json!({ "users": [] }));
    }

    #[tokio::test]
    async fn test_cache_reports_error_when_cache_is_down() {
        let response = get(offline_app(), "/api/test-cache").await;
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["status"], "error");
        assert!(json["message"].as_str().is_some_and(|m| !m.is_empty()));
    }

    #[tokio::test]
    async fn unknown_route_is_not_found() {
        let response = get(offline_app(), "/api/nope").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
