use tracing::error;

use backend_domain::{
    open_entry, open_record, sort_newest_first, InventoryItem, InventoryQuery, RecordId,
    StockStatus,
};

use crate::{AppError, AppState};

const DEFAULT_LIMIT: usize = 500;
const MAX_LIMIT: usize = 5000;

/// Record reader: every stored record decoded, newest first.
pub async fn load_inventory(state: &AppState) -> Result<Vec<InventoryItem>, AppError> {
    let entries = state.record_store.list().await.map_err(|err| {
        error!("failed to list stock records: {}", err);
        AppError::Internal(err)
    })?;
    let mut items = entries
        .iter()
        .map(|entry| open_entry(state.codec.as_ref(), entry))
        .collect::<Vec<_>>();
    sort_newest_first(&mut items);
    Ok(items)
}

pub async fn list_inventory(
    state: &AppState,
    query: InventoryQuery,
) -> Result<Vec<InventoryItem>, AppError> {
    let status = match query.status.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(raw) => Some(
            StockStatus::parse(raw)
                .ok_or_else(|| AppError::BadRequest(format!("unknown status '{}'", raw)))?,
        ),
    };
    let limit = query.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);
    select_inventory(state, status, query.q, Some(limit)).await
}

/// The `received` subset offered for distribution. Uncapped: every item on
/// hand must be selectable.
pub async fn pending_distribution(
    state: &AppState,
    q: Option<String>,
) -> Result<Vec<InventoryItem>, AppError> {
    select_inventory(state, Some(StockStatus::Received), q, None).await
}

async fn select_inventory(
    state: &AppState,
    status: Option<StockStatus>,
    q: Option<String>,
    limit: Option<usize>,
) -> Result<Vec<InventoryItem>, AppError> {
    let needle = q.unwrap_or_default().trim().to_lowercase();
    let items = load_inventory(state)
        .await?
        .into_iter()
        .filter(|item| status.map(|status| item.status == status).unwrap_or(true))
        .filter(|item| item.matches_search(&needle))
        .take(limit.unwrap_or(usize::MAX))
        .collect();
    Ok(items)
}

pub async fn get_item(state: &AppState, id: RecordId) -> Result<InventoryItem, AppError> {
    let record = state
        .record_store
        .get(&id)
        .await
        .map_err(AppError::Internal)?
        .ok_or_else(|| AppError::NotFound(format!("stock {}", id)))?;
    Ok(open_record(state.codec.as_ref(), id, &record))
}
