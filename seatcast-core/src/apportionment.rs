/// Adjusted medians: per-group seat counts that sum to the legislature size.
///
/// Independent medians do not add up to the seat total. The difference is
/// handed out one seat at a time, each time to the group for which the
/// shifted seat count is most plausible relative to its current value
/// (`P(current ± 1) / P(current)`). A group is adjusted at most once.
use std::collections::BTreeMap;

use tracing::debug;

use crate::combination::SeatProjection;
use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SeatStep {
    Up,
    Down,
}

impl SeatStep {
    fn apply(self, seats: u32) -> Option<u32> {
        match self {
            SeatStep::Up => seats.checked_add(1),
            SeatStep::Down => seats.checked_sub(1),
        }
    }
}

impl SeatProjection {
    /// Reconcile every group's median with `total_seats`.
    ///
    /// Returns the raw medians unchanged when they already sum to the total.
    /// Fails with `InvalidTotal` for a negative total and with `Infeasible`
    /// when the deficit exceeds the number of groups that can still move.
    pub fn adjusted_medians(&self, total_seats: i64) -> Result<BTreeMap<String, u32>> {
        if total_seats < 0 {
            return Err(Error::InvalidTotal { total: total_seats });
        }

        // Rank order doubles as the tie-break: the first maximal ratio wins.
        let ranked = self.ranked_entries();
        let mut adjusted: BTreeMap<String, u32> = ranked
            .iter()
            .map(|(group, pmf)| (group.to_string(), pmf.median()))
            .collect();

        let raw_total: i64 = adjusted.values().map(|&seats| i64::from(seats)).sum();
        let deficit = total_seats - raw_total;
        debug!(total_seats, raw_total, deficit, "reconciling medians with seat total");
        if deficit == 0 {
            return Ok(adjusted);
        }

        let infeasible = Error::Infeasible { deficit, groups: ranked.len() };
        if deficit.unsigned_abs() > ranked.len() as u64 {
            return Err(infeasible);
        }

        let step = if deficit > 0 { SeatStep::Up } else { SeatStep::Down };
        let mut candidates = ranked;

        for _ in 0..deficit.unsigned_abs() {
            let mut best: Option<(usize, u32, u32, f64)> = None;

            for (idx, (group, pmf)) in candidates.iter().enumerate() {
                let current = adjusted[*group];
                let Some(target) = step.apply(current) else {
                    continue;
                };
                let ratio = pmf.probability_or_zero(&target) / pmf.probability_or_zero(&current);
                // 0/0: neither count is plausible
                let ratio = if ratio.is_nan() { 0.0 } else { ratio };

                if best.map_or(true, |(_, _, _, best_ratio)| ratio > best_ratio) {
                    best = Some((idx, current, target, ratio));
                }
            }

            let Some((idx, from, to, ratio)) = best else {
                return Err(infeasible);
            };
            let (group, _) = candidates.remove(idx);
            debug!(group, from, to, ratio, "adjusted median");
            adjusted.insert(group.to_string(), to);
        }

        Ok(adjusted)
    }
}
