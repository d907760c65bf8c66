/// Publication summaries.
///
/// One function per combination kind, one options struct. Pure functions, no IO.
use std::fmt::Debug;

use crate::combination::{ProbabilityMassFunctionCombination, SeatProjection, VotingIntentions};
use crate::error::Result;
use crate::range::ProbabilityRange;
use crate::types::{GroupSummary, SummaryOptions};

fn summarize_groups<T: Ord + Clone + Debug>(
    combination: &ProbabilityMassFunctionCombination<T>,
    confidence_level: f64,
) -> Result<Vec<GroupSummary<T>>> {
    combination
        .ranked_entries()
        .into_iter()
        .map(|(group, pmf)| {
            Ok(GroupSummary {
                group: group.to_string(),
                median: pmf.median(),
                confidence_interval: pmf.confidence_interval(confidence_level)?,
                adjusted_median: None,
            })
        })
        .collect()
}

/// Summarize a seat projection, highest-ranked group first.
///
/// Adjusted medians are filled in only when `options.total_seats` is set.
pub fn summarize(projection: &SeatProjection, options: &SummaryOptions) -> Result<Vec<GroupSummary<u32>>> {
    let mut summaries = summarize_groups(projection, options.confidence_level)?;

    if let Some(total_seats) = options.total_seats {
        let adjusted = projection.adjusted_medians(total_seats)?;
        for summary in &mut summaries {
            summary.adjusted_median = adjusted.get(&summary.group).copied();
        }
    }

    Ok(summaries)
}

/// Summarize voting intentions, highest-ranked group first. `options.total_seats` is ignored.
pub fn summarize_intentions(
    intentions: &VotingIntentions,
    options: &SummaryOptions,
) -> Result<Vec<GroupSummary<ProbabilityRange>>> {
    summarize_groups(intentions, options.confidence_level)
}
