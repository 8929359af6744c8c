use axum::body::Bytes;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;

use backend_application::commands::distribution_commands;
use backend_application::AppState;
use backend_domain::{DistributionOutcome, DistributionRequest};

use crate::error::HttpError;
use crate::middleware::{authorize, parse_json_body};

pub async fn distribute_stock(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<DistributionOutcome>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    let payload: DistributionRequest = parse_json_body(&body)?;
    let outcome = distribution_commands::distribute_stock(&state, payload).await?;
    Ok(Json(outcome))
}
