/// seatcast-core: summary statistics for election simulation output.
///
/// Per-party distributions → medians, confidence intervals, and adjusted
/// medians that sum to the legislature size. No IO beyond optional config
/// loading. Feed it parsed distributions; render the results elsewhere.
///
/// # Quick start
///
/// ```rust
/// use seatcast_core::{summarize, SeatProjection, SummaryOptions};
///
/// let projection = SeatProjection::from_table("\
/// Choice | 0 | 1 | 2
/// Red | 0.4 | 0.35 | 0.25
/// Blue | 0.65 | 0.35 | 0
/// Green | 0.75 | 0.25 | 0
/// ").unwrap();
///
/// let summaries = summarize(&projection, &SummaryOptions {
///     confidence_level: 0.95,
///     total_seats: Some(2),
/// }).unwrap();
///
/// for s in &summaries {
///     println!(
///         "{}: {} [{}, {}] -> {:?}",
///         s.group, s.median, s.confidence_interval.lower_bound,
///         s.confidence_interval.upper_bound, s.adjusted_median,
///     );
/// }
/// assert_eq!(summaries[0].group, "Red");
/// assert_eq!(summaries[0].adjusted_median, Some(2));
/// ```
pub mod apportionment;
pub mod combination;
pub mod config;
pub mod constants;
pub mod error;
pub mod pmf;
pub mod range;
pub mod summary;
pub mod table;
pub mod types;

// Re-export primary public API at crate root.
pub use combination::{ProbabilityMassFunctionCombination, SeatProjection, VotingIntentions};
pub use config::{load_config, ReportConfig};
pub use error::{Error, Result};
pub use pmf::ProbabilityMassFunction;
pub use range::ProbabilityRange;
pub use summary::{summarize, summarize_intentions};
pub use types::{ConfidenceInterval, GroupSummary, SummaryOptions};
