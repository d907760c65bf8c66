use serde::Serialize;

use crate::constants::DEFAULT_CONFIDENCE_LEVEL;

/// Inclusive interval `[lower_bound, upper_bound]` over the keys of a distribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ConfidenceInterval<T> {
    pub lower_bound: T,
    pub upper_bound: T,
}

impl<T: Ord> ConfidenceInterval<T> {
    pub fn new(lower_bound: T, upper_bound: T) -> Self {
        ConfidenceInterval { lower_bound, upper_bound }
    }

    pub fn contains(&self, key: &T) -> bool {
        &self.lower_bound <= key && key <= &self.upper_bound
    }
}

/// Options for `summarize()` and `summarize_intentions()`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SummaryOptions {
    /// Confidence level of the reported interval (e.g. 0.95).
    pub confidence_level: f64,
    /// Legislature size. `None` = skip seat reconciliation.
    pub total_seats: Option<i64>,
}

impl Default for SummaryOptions {
    fn default() -> Self {
        SummaryOptions {
            confidence_level: DEFAULT_CONFIDENCE_LEVEL,
            total_seats: None,
        }
    }
}

/// Publication record for one group: point estimate, band, and reconciled seat count.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupSummary<T> {
    pub group: String,
    pub median: T,
    pub confidence_interval: ConfidenceInterval<T>,
    /// Median after seat-total reconciliation. `None` for vote shares, or when
    /// no seat total was requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adjusted_median: Option<u32>,
}
