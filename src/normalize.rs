use crate::rice::RiceIssue;
use crate::writer::PriorityUpdate;
use thiserror::Error;

/// Priority given to the highest-weighted issue of a batch
pub const TOP_PRIORITY: u8 = 2;
/// Priority given to the lowest-weighted issue of a batch
pub const BOTTOM_PRIORITY: u8 = 4;

#[derive(Debug, Error, PartialEq)]
pub enum NormalizeError {
    #[error(
        "cannot normalize {count} issue(s) that all weigh {weight}\n  hint: prioritization needs at least two distinct weights"
    )]
    ZeroSpread { count: usize, weight: f64 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct PrioritizedIssue {
    pub id: String,
    pub weight: f64,
    pub weight_normed: f64,
    pub priority_int: u8,
}

impl PrioritizedIssue {
    pub fn priority_update(&self) -> PriorityUpdate {
        PriorityUpdate {
            issue_id: self.id.clone(),
            priority: self.priority_int,
        }
    }
}

/// Rounds to the nearest integer, sending `.5` away from zero.
pub fn round_half_up(value: f64) -> i64 {
    value.round() as i64
}

/// Maps a normalized weight in [0, 1] onto the priority range 4..=2.
pub fn bucket(weight_normed: f64) -> u8 {
    let steps = round_half_up(weight_normed * f64::from(BOTTOM_PRIORITY - TOP_PRIORITY));
    BOTTOM_PRIORITY - steps.clamp(0, i64::from(BOTTOM_PRIORITY - TOP_PRIORITY)) as u8
}

/// Min-max normalizes the batch's weights and buckets each issue.
///
/// An empty batch yields an empty result. A batch without spread (every
/// weight equal, including a single issue) is rejected.
pub fn prioritize(issues: &[RiceIssue]) -> Result<Vec<PrioritizedIssue>, NormalizeError> {
    let Some(first) = issues.first() else {
        return Ok(Vec::new());
    };

    let (min_weight, max_weight) = issues
        .iter()
        .fold((first.weight, first.weight), |(min, max), issue| {
            (min.min(issue.weight), max.max(issue.weight))
        });
    let spread = max_weight - min_weight;
    if spread == 0.0 {
        return Err(NormalizeError::ZeroSpread {
            count: issues.len(),
            weight: min_weight,
        });
    }

    Ok(issues
        .iter()
        .map(|issue| {
            let weight_normed = (issue.weight - min_weight) / spread;
            PrioritizedIssue {
                id: issue.id.clone(),
                weight: issue.weight,
                weight_normed,
                priority_int: bucket(weight_normed),
            }
        })
        .collect())
}
