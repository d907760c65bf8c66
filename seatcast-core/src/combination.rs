/// Named groups (parties), each carrying its own independent distribution.
///
/// One generic type serves both vote shares and seat counts; the outcome key
/// type is the only difference between `VotingIntentions` and `SeatProjection`.
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt::Debug;

use crate::constants::RANKING_CONFIDENCE_LEVEL;
use crate::error::{Error, Result};
use crate::pmf::ProbabilityMassFunction;
use crate::range::ProbabilityRange;
use crate::types::ConfidenceInterval;

#[derive(Debug, Clone, PartialEq)]
pub struct ProbabilityMassFunctionCombination<T> {
    groups: BTreeMap<String, ProbabilityMassFunction<T>>,
}

/// Vote-share distributions per group.
pub type VotingIntentions = ProbabilityMassFunctionCombination<ProbabilityRange>;

/// Seat-count distributions per group.
pub type SeatProjection = ProbabilityMassFunctionCombination<u32>;

/// Everything the group ordering looks at, computed once per group.
struct RankKey<T> {
    median: T,
    interval: ConfidenceInterval<T>,
}

impl<T: Ord + Clone + Debug> RankKey<T> {
    fn of(pmf: &ProbabilityMassFunction<T>) -> Self {
        RankKey {
            median: pmf.median(),
            interval: pmf.trimmed_interval((1.0 - RANKING_CONFIDENCE_LEVEL) / 2.0),
        }
    }
}

/// `Less` = `a` ranks first. Higher median, then higher interval upper bound,
/// then higher interval lower bound, then the lexicographically earlier name.
fn compare_ranked<T: Ord>(a_name: &str, a: &RankKey<T>, b_name: &str, b: &RankKey<T>) -> Ordering {
    b.median
        .cmp(&a.median)
        .then_with(|| b.interval.upper_bound.cmp(&a.interval.upper_bound))
        .then_with(|| b.interval.lower_bound.cmp(&a.interval.lower_bound))
        .then_with(|| a_name.cmp(b_name))
}

impl<T: Ord + Clone + Debug> ProbabilityMassFunctionCombination<T> {
    pub fn new(groups: impl IntoIterator<Item = (String, ProbabilityMassFunction<T>)>) -> Result<Self> {
        let mut map = BTreeMap::new();
        for (name, pmf) in groups {
            if map.contains_key(&name) {
                return Err(Error::invalid_argument(format!("duplicate group \"{name}\"")));
            }
            map.insert(name, pmf);
        }
        if map.is_empty() {
            return Err(Error::invalid_argument("combination must contain at least one group"));
        }
        Ok(ProbabilityMassFunctionCombination { groups: map })
    }

    /// Group names in lexicographic order.
    pub fn groups(&self) -> impl Iterator<Item = &str> + '_ {
        self.groups.keys().map(String::as_str)
    }

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    pub fn contains_group(&self, group: &str) -> bool {
        self.groups.contains_key(group)
    }

    pub fn distribution(&self, group: &str) -> Result<&ProbabilityMassFunction<T>> {
        self.groups
            .get(group)
            .ok_or_else(|| Error::GroupNotFound { group: group.to_string() })
    }

    pub fn probability(&self, group: &str, key: &T) -> Result<f64> {
        self.distribution(group)?.probability(key)
    }

    pub fn median(&self, group: &str) -> Result<T> {
        Ok(self.distribution(group)?.median())
    }

    pub fn confidence_interval(&self, group: &str, confidence: f64) -> Result<ConfidenceInterval<T>> {
        self.distribution(group)?.confidence_interval(confidence)
    }

    /// Display and apportionment order of two groups. `Less` means `a` ranks first.
    pub fn compare(&self, a: &str, b: &str) -> Result<Ordering> {
        let a_key = RankKey::of(self.distribution(a)?);
        let b_key = RankKey::of(self.distribution(b)?);
        Ok(compare_ranked(a, &a_key, b, &b_key))
    }

    /// All group names, highest-ranked first.
    pub fn ranked_groups(&self) -> Vec<&str> {
        self.ranked_entries().into_iter().map(|(name, _)| name).collect()
    }

    /// Groups with their distributions, highest-ranked first.
    pub(crate) fn ranked_entries(&self) -> Vec<(&str, &ProbabilityMassFunction<T>)> {
        let mut keyed: Vec<(&str, &ProbabilityMassFunction<T>, RankKey<T>)> = self
            .groups
            .iter()
            .map(|(name, pmf)| (name.as_str(), pmf, RankKey::of(pmf)))
            .collect();
        keyed.sort_by(|a, b| compare_ranked(a.0, &a.2, b.0, &b.2));
        keyed.into_iter().map(|(name, pmf, _)| (name, pmf)).collect()
    }
}
