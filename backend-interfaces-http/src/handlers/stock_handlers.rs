use axum::body::Bytes;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::Json;
use serde::Deserialize;

use backend_application::commands::{admin_commands, intake_commands};
use backend_application::queries::inventory_queries;
use backend_application::AppState;
use backend_domain::{IntakeRequest, InventoryItem, InventoryQuery, RecordId};

use crate::error::HttpError;
use crate::middleware::{authorize, parse_json_body, query_params};

#[derive(Deserialize)]
pub struct PendingQuery {
    pub q: Option<String>,
}

pub async fn receive_stock(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<(StatusCode, Json<InventoryItem>), HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    let payload: IntakeRequest = parse_json_body(&body)?;
    let item = intake_commands::receive_stock(&state, payload).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

pub async fn list_stocks(
    State(state): State<AppState>,
    headers: HeaderMap,
    query: Result<Query<InventoryQuery>, QueryRejection>,
) -> Result<Json<Vec<InventoryItem>>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    let query = query_params(query)?;
    let items = inventory_queries::list_inventory(&state, query).await?;
    Ok(Json(items))
}

pub async fn list_pending(
    State(state): State<AppState>,
    headers: HeaderMap,
    query: Result<Query<PendingQuery>, QueryRejection>,
) -> Result<Json<Vec<InventoryItem>>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    let query = query_params(query)?;
    let items = inventory_queries::pending_distribution(&state, query.q).await?;
    Ok(Json(items))
}

pub async fn get_stock(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<Json<InventoryItem>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    let item = inventory_queries::get_item(&state, RecordId::new(id)).await?;
    Ok(Json(item))
}

pub async fn delete_stock(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<StatusCode, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    admin_commands::delete_stock(&state, RecordId::new(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}
