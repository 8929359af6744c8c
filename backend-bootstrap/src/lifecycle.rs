use std::time::Duration;

use anyhow::Result;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use backend_application::AppState;
use backend_infrastructure::AppConfig;
use backend_interfaces_http::build_router;

use crate::context::AppContext;
use crate::telemetry::init_tracing;

pub fn build_router_with_layers(state: AppState) -> Router {
    build_router(state.clone())
        .layer(CorsLayer::permissive())
        .layer(RequestBodyLimitLayer::new(
            usize::try_from(state.config.max_body_bytes).unwrap_or(usize::MAX),
        ))
        .layer(TimeoutLayer::new(Duration::from_secs(
            state.config.request_timeout_seconds,
        )))
        .layer(TraceLayer::new_for_http())
}

pub async fn run_standalone() -> Result<()> {
    let config = AppConfig::load().await?;
    let _log_guard = init_tracing(config.log_dir.as_deref());
    config.report_sources();

    let context = AppContext::from_config(&config).await?;
    let state = context.state;

    let app = build_router_with_layers(state.clone());
    let addr: std::net::SocketAddr = state.config.bind_addr.parse()?;
    let listener = TcpListener::bind(addr).await?;
    info!("listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        let _ = tokio::signal::ctrl_c().await;
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                warn!("sigterm handler unavailable: {}", err);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("shutdown signal received");
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use super::*;

    async fn memory_state(max_body_bytes: u64) -> AppState {
        let config = AppConfig {
            store_backend: "memory".to_string(),
            max_body_bytes,
            ..AppConfig::default()
        };
        AppContext::from_config(&config).await.unwrap().state
    }

    #[tokio::test]
    async fn layered_router_serves_liveness() {
        let app = build_router_with_layers(memory_state(1024 * 1024).await);
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/v1/ops/health/live")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn oversized_bodies_are_rejected() {
        let app = build_router_with_layers(memory_state(16).await);
        let body = format!(r#"{{"asset_id":"{}"}}"#, "A".repeat(64));
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/v1/stocks")
                    .header("content-type", "application/json")
                    .header("content-length", body.len())
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }
}
