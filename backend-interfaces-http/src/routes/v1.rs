use axum::routing::{get, post};
use axum::Router;

use backend_application::AppState;

use crate::handlers::{
    dashboard_handlers, distribution_handlers, live_handlers, ops_handlers, stock_handlers,
};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/v1/stocks",
            post(stock_handlers::receive_stock).get(stock_handlers::list_stocks),
        )
        .route("/v1/stocks/pending", get(stock_handlers::list_pending))
        .route("/v1/stocks/live", get(live_handlers::live_stocks))
        .route(
            "/v1/stocks/distribute",
            post(distribution_handlers::distribute_stock),
        )
        .route(
            "/v1/stocks/:id",
            get(stock_handlers::get_stock).delete(stock_handlers::delete_stock),
        )
        .route("/v1/dashboard", get(dashboard_handlers::get_dashboard))
        .route("/v1/ops/health/live", get(ops_handlers::health_live))
        .route("/v1/ops/health/ready", get(ops_handlers::health_ready))
        .route(
            "/v1/ops/metrics/prometheus",
            get(ops_handlers::metrics_prometheus),
        )
        .with_state(state)
}
