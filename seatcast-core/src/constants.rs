/// Confidence level used when the caller does not ask for a specific one.
pub const DEFAULT_CONFIDENCE_LEVEL: f64 = 0.95;

/// Confidence level of the interval used to break median ties when ranking groups.
/// Independent of the confidence level a report is rendered with.
pub const RANKING_CONFIDENCE_LEVEL: f64 = 0.95;

/// Number of vote-share bands per unit in a voting-intentions table.
/// Column `i` covers `[i / 2000, (i + 1) / 2000)`, i.e. bands of 0.05 percentage points.
pub const VOTE_SHARE_RESOLUTION: u32 = 2000;

/// Label of header rows in simulation output tables.
pub const HEADER_TOKEN: &str = "Choice";

/// Column separator in simulation output tables.
pub const COLUMN_SEPARATOR: char = '|';
