use std::collections::HashSet;

use tracing::{error, info, warn};

use backend_domain::{
    open_record, seal_distribution, DistributionOutcome, DistributionRequest, DistributionResult,
    RecordId, StockStatus,
};

use crate::commands::{required_text, resolve_date};
use crate::ops::StockChangeKind;
use crate::{AppError, AppState};

/// Record writer for the `received -> distributed` transition. Every id is
/// checked before the first write so a bad selection changes nothing.
pub async fn distribute_stock(
    state: &AppState,
    request: DistributionRequest,
) -> Result<DistributionOutcome, AppError> {
    let ids = dedup_ids(request.ids)?;
    let distributor = required_text(&request.distributor, "distributor")?;
    let distribution_date = resolve_date(request.distribution_date, "distribution_date")?;

    for id in &ids {
        let record = state
            .record_store
            .get(id)
            .await
            .map_err(AppError::Internal)?
            .ok_or_else(|| AppError::NotFound(format!("stock {}", id)))?;
        if record.status != StockStatus::Received {
            return Err(AppError::Conflict(format!("stock {} is already distributed", id)));
        }
    }

    let patch = seal_distribution(state.codec.as_ref(), distribution_date, &distributor);
    let mut distributed = Vec::with_capacity(ids.len());
    for id in ids {
        let result = state
            .record_store
            .apply_distribution(&id, patch.clone())
            .await
            .map_err(|err| {
                state.metrics.record_store_error();
                error!(record_id = %id, "failed to distribute stock: {}", err);
                AppError::Internal(err)
            })?;
        match result {
            DistributionResult::Applied(record) => {
                distributed.push(open_record(state.codec.as_ref(), id, &record));
            }
            DistributionResult::NotFound => {
                warn!(record_id = %id, "stock vanished before distribution");
            }
            DistributionResult::AlreadyDistributed => {
                warn!(record_id = %id, "stock distributed concurrently");
            }
        }
    }

    if !distributed.is_empty() {
        state.metrics.record_distributed(distributed.len());
        info!(count = distributed.len(), "stock distributed");
        state.stream_hub.publish(
            StockChangeKind::Distributed,
            distributed.iter().map(|item| item.id.clone()).collect(),
        );
    }
    Ok(DistributionOutcome { distributed })
}

fn dedup_ids(ids: Vec<RecordId>) -> Result<Vec<RecordId>, AppError> {
    let mut seen = HashSet::new();
    let ids = ids
        .into_iter()
        .map(|id| RecordId::new(id.as_str().trim()))
        .filter(|id| !id.as_str().is_empty())
        .filter(|id| seen.insert(id.clone()))
        .collect::<Vec<_>>();
    if ids.is_empty() {
        return Err(AppError::BadRequest("ids must not be empty".to_string()));
    }
    Ok(ids)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::intake_commands::receive_stock;
    use crate::test_support::{intake_request, test_state};
    use backend_domain::Quantities;

    fn request(ids: Vec<RecordId>) -> DistributionRequest {
        DistributionRequest {
            ids,
            distribution_date: Some("2025-02-01".to_string()),
            distributor: "it-desk@example.org".to_string(),
        }
    }

    #[tokio::test]
    async fn distributes_selected_records() {
        let state = test_state();
        let a = receive_stock(&state, intake_request("AS-A")).await.expect("a");
        let b = receive_stock(&state, intake_request("AS-B")).await.expect("b");
        let untouched = receive_stock(&state, intake_request("AS-C")).await.expect("c");

        let outcome = distribute_stock(&state, request(vec![a.id.clone(), b.id.clone(), a.id.clone()]))
            .await
            .expect("distribute");
        assert_eq!(outcome.distributed.len(), 2);
        for item in &outcome.distributed {
            assert_eq!(item.status, StockStatus::Distributed);
            assert_eq!(item.distributor, "it-desk@example.org");
            assert_eq!(item.distribution_date, "2025-02-01");
        }

        let stored = state.record_store.get(&a.id).await.expect("get").expect("a");
        assert_ne!(stored.distributor.as_deref(), Some("it-desk@example.org"));
        assert_eq!(stored.quantities(), Quantities::on_distribution());

        let other = state
            .record_store
            .get(&untouched.id)
            .await
            .expect("get")
            .expect("c");
        assert_eq!(other.status, StockStatus::Received);
    }

    #[tokio::test]
    async fn unknown_id_changes_nothing() {
        let state = test_state();
        let a = receive_stock(&state, intake_request("AS-A")).await.expect("a");
        let result = distribute_stock(&state, request(vec![a.id.clone(), RecordId::new("nope")])).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));

        let stored = state.record_store.get(&a.id).await.expect("get").expect("a");
        assert_eq!(stored.status, StockStatus::Received);
    }

    #[tokio::test]
    async fn repeated_distribution_is_a_conflict() {
        let state = test_state();
        let a = receive_stock(&state, intake_request("AS-A")).await.expect("a");
        distribute_stock(&state, request(vec![a.id.clone()]))
            .await
            .expect("first");
        let again = distribute_stock(&state, request(vec![a.id.clone()])).await;
        assert!(matches!(again, Err(AppError::Conflict(_))));
    }

    #[tokio::test]
    async fn empty_selection_is_rejected() {
        let state = test_state();
        let result = distribute_stock(&state, request(vec![RecordId::new("  ")])).await;
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }
}
