use tracing::{error, info};

use backend_domain::RecordId;

use crate::ops::StockChangeKind;
use crate::{AppError, AppState};

/// Administrative removal. Not part of the normal stock lifecycle.
pub async fn delete_stock(state: &AppState, id: RecordId) -> Result<(), AppError> {
    let removed = state.record_store.delete(&id).await.map_err(|err| {
        state.metrics.record_store_error();
        error!(record_id = %id, "failed to delete stock: {}", err);
        AppError::Internal(err)
    })?;
    if !removed {
        return Err(AppError::NotFound(format!("stock {}", id)));
    }
    state.metrics.record_deleted();
    info!(record_id = %id, "stock deleted");
    state.stream_hub.publish(StockChangeKind::Deleted, vec![id]);
    Ok(())
}
