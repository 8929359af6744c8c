use chrono::Utc;
use tracing::{error, info};

use backend_domain::{open_record, seal_intake, IntakeRequest, InventoryItem};

use crate::commands::{optional_text, required_text, resolve_date};
use crate::ops::StockChangeKind;
use crate::{AppError, AppState};

/// Record writer for new intakes: validates the form, encodes the sensitive
/// fields and files the record with status `received`.
pub async fn receive_stock(
    state: &AppState,
    request: IntakeRequest,
) -> Result<InventoryItem, AppError> {
    let request = normalize_intake(request)?;
    let import_date = resolve_date(request.import_date.clone(), "import_date")?;
    let record = seal_intake(
        state.codec.as_ref(),
        &request,
        import_date,
        Utc::now().timestamp_millis(),
    );

    let id = state
        .record_store
        .insert(record.clone())
        .await
        .map_err(|err| {
            state.metrics.record_store_error();
            error!("failed to store intake: {}", err);
            AppError::Internal(err)
        })?;

    state.metrics.record_intake();
    info!(record_id = %id, receiver_id = %record.receiver_id, "stock received");
    state
        .stream_hub
        .publish(StockChangeKind::Created, vec![id.clone()]);
    Ok(open_record(state.codec.as_ref(), id, &record))
}

fn normalize_intake(request: IntakeRequest) -> Result<IntakeRequest, AppError> {
    Ok(IntakeRequest {
        import_date: request.import_date,
        asset_id: required_text(&request.asset_id, "asset_id")?,
        serial_number: request.serial_number.trim().to_string(),
        brand_model: required_text(&request.brand_model, "brand_model")?,
        category: optional_text(request.category),
        computer_name: optional_text(request.computer_name),
        department: required_text(&request.department, "department")?,
        building: required_text(&request.building, "building")?,
        remarks: request.remarks,
        receiver_id: required_text(&request.receiver_id, "receiver_id")?,
    })
}
