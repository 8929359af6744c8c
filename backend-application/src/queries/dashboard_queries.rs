use backend_domain::{DashboardQuery, DashboardSummary, StockStatus};

use crate::queries::inventory_queries::load_inventory;
use crate::{AppError, AppState};

pub async fn dashboard_summary(
    state: &AppState,
    query: DashboardQuery,
) -> Result<DashboardSummary, AppError> {
    let recent = query.recent.unwrap_or(10).clamp(1, 100);
    let items = load_inventory(state).await?;
    let available = items
        .iter()
        .filter(|item| item.status == StockStatus::Received)
        .count();
    let distributed = items
        .iter()
        .filter(|item| item.status == StockStatus::Distributed)
        .count();
    Ok(DashboardSummary {
        total: items.len(),
        available,
        distributed,
        recent: items.into_iter().take(recent).collect(),
    })
}
