/// Discrete probability distribution over an ordered outcome type.
///
/// Entries are kept sorted by key, so every cumulative walk below is a single
/// pass in natural order. Probabilities are validated individually; summing
/// to 1.0 is the caller's responsibility.
use std::fmt::Debug;

use crate::error::{Error, Result};
use crate::types::ConfidenceInterval;

const MEDIAN_THRESHOLD: f64 = 0.5;

#[derive(Debug, Clone, PartialEq)]
pub struct ProbabilityMassFunction<T> {
    /// Sorted by key, keys unique, never empty.
    entries: Vec<(T, f64)>,
}

impl<T: Ord + Clone + Debug> ProbabilityMassFunction<T> {
    /// Build a distribution from `(key, probability)` pairs in any order.
    pub fn new(pairs: impl IntoIterator<Item = (T, f64)>) -> Result<Self> {
        let mut entries: Vec<(T, f64)> = pairs.into_iter().collect();
        if entries.is_empty() {
            return Err(Error::invalid_argument("distribution must contain at least one key"));
        }

        for (key, probability) in &entries {
            if !probability.is_finite() || *probability < 0.0 {
                return Err(Error::invalid_argument(format!(
                    "probability for key {key:?} must be a finite non-negative number, got {probability}"
                )));
            }
        }

        entries.sort_by(|a, b| a.0.cmp(&b.0));
        if let Some(pair) = entries.windows(2).find(|pair| pair[0].0 == pair[1].0) {
            return Err(Error::invalid_argument(format!("duplicate key {:?}", pair[0].0)));
        }

        Ok(ProbabilityMassFunction { entries })
    }

    pub fn probability(&self, key: &T) -> Result<f64> {
        self.entries
            .binary_search_by(|(k, _)| k.cmp(key))
            .map(|idx| self.entries[idx].1)
            .map_err(|_| Error::KeyNotFound { key: format!("{key:?}") })
    }

    /// Probability of the key, or 0.0 when the key is outside the distribution.
    pub(crate) fn probability_or_zero(&self, key: &T) -> f64 {
        self.probability(key).unwrap_or(0.0)
    }

    /// Smallest key whose inclusive cumulative probability reaches one half.
    ///
    /// A key landing exactly on 0.5 is the median. If the distribution never
    /// reaches 0.5 (a caller-side error), the largest key is returned.
    pub fn median(&self) -> T {
        let mut cumulative = 0.0;
        self.entries
            .iter()
            .find(|(_, probability)| {
                cumulative += probability;
                cumulative >= MEDIAN_THRESHOLD
            })
            .unwrap_or(&self.entries[self.entries.len() - 1])
            .0
            .clone()
    }

    /// Interval holding at least `confidence` of the mass, trimming equal tail mass from each end.
    ///
    /// `confidence` must lie strictly between 0 and 1.
    pub fn confidence_interval(&self, confidence: f64) -> Result<ConfidenceInterval<T>> {
        if !(confidence > 0.0 && confidence < 1.0) {
            return Err(Error::invalid_argument(format!(
                "confidence must lie strictly between 0 and 1, got {confidence}"
            )));
        }
        Ok(self.trimmed_interval((1.0 - confidence) / 2.0))
    }

    /// Drop from each end the keys whose cumulative mass does not exceed `tail`.
    /// A key landing exactly on `tail` is dropped.
    pub(crate) fn trimmed_interval(&self, tail: f64) -> ConfidenceInterval<T> {
        let mut cumulative = 0.0;
        let lower = self
            .entries
            .iter()
            .find(|(_, probability)| {
                cumulative += probability;
                cumulative > tail
            })
            .unwrap_or(&self.entries[0]);

        let mut cumulative = 0.0;
        let upper = self
            .entries
            .iter()
            .rev()
            .find(|(_, probability)| {
                cumulative += probability;
                cumulative > tail
            })
            .unwrap_or(&self.entries[self.entries.len() - 1]);

        ConfidenceInterval::new(lower.0.clone(), upper.0.clone())
    }

    /// Total mass of all keys less than or equal to `key`. `key` need not be in the distribution.
    pub fn cumulative_probability(&self, key: &T) -> f64 {
        self.entries
            .iter()
            .take_while(|(k, _)| k <= key)
            .map(|(_, probability)| probability)
            .sum()
    }

    pub fn total_probability(&self) -> f64 {
        self.entries.iter().map(|(_, probability)| probability).sum()
    }

    /// Keys in ascending order.
    pub fn keys(&self) -> impl Iterator<Item = &T> + '_ {
        self.entries.iter().map(|(key, _)| key)
    }

    /// `(key, probability)` pairs in ascending key order.
    pub fn iter(&self) -> impl Iterator<Item = (&T, f64)> + '_ {
        self.entries.iter().map(|(key, probability)| (key, *probability))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
