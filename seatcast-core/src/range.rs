/// Half-open vote-share band `[lower_bound, upper_bound)`, the outcome key of
/// voting-intentions distributions. Bands are ordered by lower bound.
use std::cmp::Ordering;
use std::fmt;

use serde::Serialize;

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ProbabilityRange {
    lower_bound: f64,
    upper_bound: f64,
}

impl ProbabilityRange {
    pub fn new(lower_bound: f64, upper_bound: f64) -> Result<Self> {
        if !lower_bound.is_finite() || !upper_bound.is_finite() {
            return Err(Error::invalid_argument(format!(
                "range bounds must be finite, got [{lower_bound}, {upper_bound})"
            )));
        }
        if lower_bound >= upper_bound {
            return Err(Error::invalid_argument(format!(
                "range lower bound must be below upper bound, got [{lower_bound}, {upper_bound})"
            )));
        }
        Ok(ProbabilityRange { lower_bound, upper_bound })
    }

    /// The `index`-th band of width `1 / resolution`.
    pub fn band(index: u32, resolution: u32) -> Result<Self> {
        if resolution == 0 {
            return Err(Error::invalid_argument("band resolution must be positive"));
        }
        let resolution = f64::from(resolution);
        ProbabilityRange::new(f64::from(index) / resolution, (f64::from(index) + 1.0) / resolution)
    }

    pub fn lower_bound(&self) -> f64 {
        self.lower_bound
    }

    pub fn upper_bound(&self) -> f64 {
        self.upper_bound
    }

    pub fn width(&self) -> f64 {
        self.upper_bound - self.lower_bound
    }

    pub fn midpoint(&self) -> f64 {
        (self.lower_bound + self.upper_bound) / 2.0
    }

    pub fn contains(&self, value: f64) -> bool {
        self.lower_bound <= value && value < self.upper_bound
    }
}

impl Ord for ProbabilityRange {
    fn cmp(&self, other: &Self) -> Ordering {
        self.lower_bound
            .total_cmp(&other.lower_bound)
            .then_with(|| self.upper_bound.total_cmp(&other.upper_bound))
    }
}

impl PartialOrd for ProbabilityRange {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for ProbabilityRange {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for ProbabilityRange {}

impl fmt::Display for ProbabilityRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:.2}%, {:.2}%)", self.lower_bound * 100.0, self.upper_bound * 100.0)
    }
}
