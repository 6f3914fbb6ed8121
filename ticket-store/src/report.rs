//! Run summary: success/error counters and the final text report.

use crate::record::UploadOutcome;

/// Aggregate result of one upload run.
#[derive(Clone, Debug, Default)]
pub struct UploadReport {
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
    pub vector_store_id: String,
    pub purpose: String,
    /// Per-record outcomes in input order.
    pub outcomes: Vec<UploadOutcome>,
}

impl UploadReport {
    pub fn new(total: usize, vector_store_id: &str, purpose: &str) -> Self {
        Self {
            total,
            vector_store_id: vector_store_id.to_string(),
            purpose: purpose.to_string(),
            outcomes: Vec::with_capacity(total),
            ..Default::default()
        }
    }

    /// Counts one processed record.
    pub fn record(&mut self, outcome: UploadOutcome) {
        if outcome.is_success() {
            self.succeeded += 1;
        } else {
            self.failed += 1;
        }
        self.outcomes.push(outcome);
    }

    /// Percentage of records uploaded; `0.0` for an empty run.
    pub fn success_rate(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.succeeded as f64 / self.total as f64 * 100.0
    }

    /// Human-readable results block.
    pub fn summary(&self) -> String {
        format!(
            "📊 Results:\n   \
             Total documents: {}\n   \
             Successfully uploaded: {}\n   \
             Errors: {}\n   \
             Success rate: {:.1}%\n\
             \n\
             🔗 Vector Store ID: {}\n\
             📁 Files uploaded with purpose: {}",
            self.total,
            self.succeeded,
            self.failed,
            self.success_rate(),
            self.vector_store_id,
            self.purpose,
        )
    }
}
