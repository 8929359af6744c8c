use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Default)]
pub struct Metrics {
    intake_requests: AtomicU64,
    records_distributed: AtomicU64,
    records_deleted: AtomicU64,
    store_errors: AtomicU64,
}

impl Metrics {
    pub fn record_intake(&self) {
        self.intake_requests.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_distributed(&self, count: usize) {
        self.records_distributed
            .fetch_add(count as u64, Ordering::Relaxed);
    }

    pub fn record_deleted(&self) {
        self.records_deleted.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_store_error(&self) {
        self.store_errors.fetch_add(1, Ordering::Relaxed);
    }

    pub fn render_prometheus(&self) -> String {
        let intake = self.intake_requests.load(Ordering::Relaxed);
        let distributed = self.records_distributed.load(Ordering::Relaxed);
        let deleted = self.records_deleted.load(Ordering::Relaxed);
        let errors = self.store_errors.load(Ordering::Relaxed);

        format!(
            "# TYPE stockroom_intake_requests_total counter\n\
stockroom_intake_requests_total {}\n\
# TYPE stockroom_records_distributed_total counter\n\
stockroom_records_distributed_total {}\n\
# TYPE stockroom_records_deleted_total counter\n\
stockroom_records_deleted_total {}\n\
# TYPE stockroom_store_errors_total counter\n\
stockroom_store_errors_total {}\n",
            intake, distributed, deleted, errors
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_counters_in_prometheus_text() {
        let metrics = Metrics::default();
        metrics.record_intake();
        metrics.record_intake();
        metrics.record_distributed(3);
        metrics.record_store_error();

        let text = metrics.render_prometheus();
        assert!(text.contains("stockroom_intake_requests_total 2\n"));
        assert!(text.contains("stockroom_records_distributed_total 3\n"));
        assert!(text.contains("stockroom_records_deleted_total 0\n"));
        assert!(text.contains("stockroom_store_errors_total 1\n"));
    }
}
