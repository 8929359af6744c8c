use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::HeaderMap;
use axum::Json;

use backend_application::queries::dashboard_queries;
use backend_application::AppState;
use backend_domain::{DashboardQuery, DashboardSummary};

use crate::error::HttpError;
use crate::middleware::{authorize, query_params};

pub async fn get_dashboard(
    State(state): State<AppState>,
    headers: HeaderMap,
    query: Result<Query<DashboardQuery>, QueryRejection>,
) -> Result<Json<DashboardSummary>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    let query = query_params(query)?;
    let summary = dashboard_queries::dashboard_summary(&state, query).await?;
    Ok(Json(summary))
}
