use axum::extract::State;
use axum::http::{header, HeaderMap, HeaderValue, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use tokio::time::{timeout, Duration};
use tracing::error;

use backend_application::AppState;

use crate::middleware::authorize;

pub async fn health_live() -> StatusCode {
    StatusCode::OK
}

#[derive(Serialize)]
pub struct ReadyStatus {
    store: &'static str,
    live_subscribers: usize,
}

/// Readiness: the record store answers a ping within the request timeout.
pub async fn health_ready(State(state): State<AppState>) -> (StatusCode, Json<ReadyStatus>) {
    let timeout_secs = state.config.request_timeout_seconds.max(1);
    let ping = timeout(Duration::from_secs(timeout_secs), state.record_store.ping());
    let (code, store) = match ping.await {
        Ok(Ok(())) => (StatusCode::OK, "ok"),
        Ok(Err(err)) => {
            error!("record store ping failed: {}", err);
            (StatusCode::SERVICE_UNAVAILABLE, "error")
        }
        Err(_) => {
            error!("record store ping timed out after {}s", timeout_secs);
            (StatusCode::SERVICE_UNAVAILABLE, "timeout")
        }
    };
    let body = ReadyStatus {
        store,
        live_subscribers: state.stream_hub.subscriber_count(),
    };
    (code, Json(body))
}

pub async fn metrics_prometheus(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> impl IntoResponse {
    if !authorize(&state.config, &headers) {
        return (StatusCode::UNAUTHORIZED, "unauthorized".to_string()).into_response();
    }
    let payload = state.metrics.render_prometheus();
    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("text/plain; version=0.0.4; charset=utf-8"),
    );
    (headers, payload).into_response()
}
