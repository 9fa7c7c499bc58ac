use crate::linear::types::LabelNode;
use crate::writer::PriorityUpdate;
use thiserror::Error;

pub const SCORE_LABEL_PREFIX: &str = "fixit-score-";
pub const UNASSIGNED: &str = "unassigned";

#[derive(Debug, Error, PartialEq)]
pub enum ScoreError {
    #[error("invalid fixit label: '{0}'\n  hint: expected fixit-score-<number>")]
    InvalidLabel(String),

    #[error("unmapped fixit score {0} on label '{1}'\n  hint: valid scores are 0, 0.5, 1, 2, 4")]
    Unmapped(f64, String),
}

/// Closed set of scores a fixit label may carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FixitScore {
    Zero,
    Half,
    One,
    Two,
    Four,
}

impl FixitScore {
    pub fn value(&self) -> f64 {
        match self {
            FixitScore::Zero => 0.0,
            FixitScore::Half => 0.5,
            FixitScore::One => 1.0,
            FixitScore::Two => 2.0,
            FixitScore::Four => 4.0,
        }
    }

    /// Linear priority for the score. Bigger fixes get more urgent priorities;
    /// a zero score clears the priority.
    pub fn priority(&self) -> u8 {
        match self {
            FixitScore::Zero => 0,
            FixitScore::Half => 4,
            FixitScore::One => 3,
            FixitScore::Two => 2,
            FixitScore::Four => 1,
        }
    }
}

impl TryFrom<f64> for FixitScore {
    type Error = f64;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        [
            FixitScore::Zero,
            FixitScore::Half,
            FixitScore::One,
            FixitScore::Two,
            FixitScore::Four,
        ]
        .into_iter()
        .find(|score| score.value() == value)
        .ok_or(value)
    }
}

/// Issue flattened out of a fixit label
#[derive(Debug, Clone, PartialEq)]
pub struct FixitIssue {
    pub id: String,
    pub identifier: String,
    pub state: String,
    pub assignee: String,
    pub fixit_score: FixitScore,
}

impl FixitIssue {
    pub fn priority_update(&self) -> PriorityUpdate {
        PriorityUpdate {
            issue_id: self.id.clone(),
            priority: self.fixit_score.priority(),
        }
    }
}

/// Returns the numeric suffix of a `fixit-score-<n>` label name.
pub fn parse_label_score(name: &str) -> Result<f64, ScoreError> {
    name.strip_prefix(SCORE_LABEL_PREFIX)
        .and_then(|suffix| suffix.parse::<f64>().ok())
        .ok_or_else(|| ScoreError::InvalidLabel(name.to_string()))
}

/// Flattens one label into its issues, each tagged with the label's score.
///
/// A label without issues yields an empty list and its name is not checked.
pub fn parse_label_issues(label: &LabelNode) -> Result<Vec<FixitIssue>, ScoreError> {
    if label.issues.nodes.is_empty() {
        return Ok(Vec::new());
    }

    let raw = parse_label_score(&label.name)?;
    let fixit_score =
        FixitScore::try_from(raw).map_err(|value| ScoreError::Unmapped(value, label.name.clone()))?;

    Ok(label
        .issues
        .nodes
        .iter()
        .map(|issue| FixitIssue {
            id: issue.id.clone(),
            identifier: issue.identifier.clone(),
            state: issue.state.name.clone(),
            assignee: issue
                .assignee
                .as_ref()
                .map_or_else(|| UNASSIGNED.to_string(), |a| a.name.clone()),
            fixit_score,
        })
        .collect())
}

/// Concatenates the issues of every label, in label order.
///
/// An issue carrying two score labels appears once per label.
pub fn collect_fixit_issues(labels: &[LabelNode]) -> Result<Vec<FixitIssue>, ScoreError> {
    let mut issues = Vec::new();
    for label in labels {
        issues.extend(parse_label_issues(label)?);
    }
    Ok(issues)
}
