use crate::linear::types::TeamIssueNode;
use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

/// Label that marks an issue as a prioritization candidate
pub const FEEDBACK_LABEL: &str = "feedback";
/// Issues already at this priority are left alone
pub const URGENT_PRIORITY: f64 = 1.0;

static FACET_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([a-z]+)-([1-3])$").expect("facet label pattern is valid")
});

#[derive(Debug, Error, PartialEq)]
pub enum RiceError {
    #[error("issue {issue} has no {facet} label\n  hint: add one of {facet}-1, {facet}-2, {facet}-3")]
    MissingFacet { issue: String, facet: Facet },

    #[error("issue {issue} has more than one {facet} label")]
    DuplicateFacet { issue: String, facet: Facet },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Facet {
    Reach,
    Impact,
    Confidence,
    Effort,
}

impl Facet {
    pub fn as_str(&self) -> &'static str {
        match self {
            Facet::Reach => "reach",
            Facet::Impact => "impact",
            Facet::Confidence => "confidence",
            Facet::Effort => "effort",
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        match name {
            "reach" => Some(Facet::Reach),
            "impact" => Some(Facet::Impact),
            "confidence" => Some(Facet::Confidence),
            "effort" => Some(Facet::Effort),
            _ => None,
        }
    }
}

impl std::fmt::Display for Facet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Issue with its facet levels and weighted score
#[derive(Debug, Clone, PartialEq)]
pub struct RiceIssue {
    pub id: String,
    pub reach: Option<u8>,
    pub impact: u8,
    pub confidence: u8,
    pub effort: u8,
    pub weight: f64,
}

/// Linear combination of the facet levels. Reach does not contribute.
pub fn rice_weight(impact: u8, confidence: u8, effort: u8) -> f64 {
    f64::from(confidence) * 0.75 + f64::from(impact) * 1.0 - f64::from(effort) * 0.5
}

/// Splits a `<facet>-<level>` label. Labels of other shapes, or with an
/// unknown facet name, yield `None`.
pub fn parse_facet_label(name: &str) -> Option<(Facet, u8)> {
    let captures = FACET_LABEL.captures(name)?;
    let facet = Facet::from_name(&captures[1])?;
    let level = captures[2].parse::<u8>().ok()?;
    Some((facet, level))
}

/// Reads the facet labels of one issue and computes its weight.
///
/// Impact, confidence and effort must each appear exactly once.
pub fn parse_issue_rice<'a>(
    id: &str,
    label_names: impl IntoIterator<Item = &'a str>,
) -> Result<RiceIssue, RiceError> {
    let mut levels: [Option<u8>; 4] = [None; 4];

    for (facet, level) in label_names.into_iter().filter_map(parse_facet_label) {
        let slot = &mut levels[facet as usize];
        if slot.is_some() {
            return Err(RiceError::DuplicateFacet {
                issue: id.to_string(),
                facet,
            });
        }
        *slot = Some(level);
    }

    let required = |facet: Facet| {
        levels[facet as usize].ok_or_else(|| RiceError::MissingFacet {
            issue: id.to_string(),
            facet,
        })
    };
    let impact = required(Facet::Impact)?;
    let confidence = required(Facet::Confidence)?;
    let effort = required(Facet::Effort)?;

    Ok(RiceIssue {
        id: id.to_string(),
        reach: levels[Facet::Reach as usize],
        impact,
        confidence,
        effort,
        weight: rice_weight(impact, confidence, effort),
    })
}

/// Non-urgent issues labelled `feedback`, in fetch order.
pub fn select_candidates(issues: &[TeamIssueNode]) -> Vec<&TeamIssueNode> {
    issues
        .iter()
        .filter(|issue| issue.priority != URGENT_PRIORITY)
        .filter(|issue| issue.label_names().any(|name| name == FEEDBACK_LABEL))
        .collect()
}

/// Parses every candidate; the first malformed issue aborts the batch.
pub fn parse_candidates(candidates: &[&TeamIssueNode]) -> Result<Vec<RiceIssue>, RiceError> {
    candidates
        .iter()
        .map(|issue| parse_issue_rice(&issue.id, issue.label_names()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::linear::fake::team_issue;

    #[test]
    fn test_rice_weight() {
        assert_eq!(rice_weight(3, 2, 1), 4.0);
        assert_eq!(rice_weight(1, 1, 3), 0.25);
    }

    #[test]
    fn test_parse_facet_label() {
        assert_eq!(parse_facet_label("impact-2"), Some((Facet::Impact, 2)));
        assert_eq!(parse_facet_label("reach-3"), Some((Facet::Reach, 3)));
        assert_eq!(parse_facet_label("effort-4"), None);
        assert_eq!(parse_facet_label("impact-23"), None);
        assert_eq!(parse_facet_label("Impact-2"), None);
        assert_eq!(parse_facet_label("bug-1"), None);
        assert_eq!(parse_facet_label("feedback"), None);
    }

    #[test]
    fn test_parse_issue_rice() {
        let issue = parse_issue_rice(
            "abc",
            ["feedback", "impact-3", "confidence-2", "effort-1", "reach-2"],
        )
        .unwrap();

        assert_eq!(
            issue,
            RiceIssue {
                id: "abc".to_string(),
                reach: Some(2),
                impact: 3,
                confidence: 2,
                effort: 1,
                weight: 4.0,
            }
        );
    }

    #[test]
    fn test_parse_issue_rice_without_reach() {
        let issue = parse_issue_rice("abc", ["impact-1", "confidence-3", "effort-2"]).unwrap();
        assert_eq!(issue.reach, None);
        assert_eq!(issue.weight, 2.25 + 1.0 - 1.0);
    }

    #[test]
    fn test_parse_issue_rice_missing_facet() {
        let result = parse_issue_rice("abc", ["impact-1", "effort-2"]);
        assert_eq!(
            result,
            Err(RiceError::MissingFacet {
                issue: "abc".to_string(),
                facet: Facet::Confidence
            })
        );
    }

    #[test]
    fn test_parse_issue_rice_duplicate_facet() {
        let result = parse_issue_rice("abc", ["impact-1", "impact-3", "confidence-2", "effort-2"]);
        assert_eq!(
            result,
            Err(RiceError::DuplicateFacet {
                issue: "abc".to_string(),
                facet: Facet::Impact
            })
        );
    }

    #[test]
    fn test_missing_facet_message() {
        let err = RiceError::MissingFacet {
            issue: "abc".to_string(),
            facet: Facet::Effort,
        };
        assert!(err.to_string().starts_with("issue abc has no effort label"));
    }

    #[test]
    fn test_select_candidates() {
        let issues = vec![
            team_issue("a", 3.0, &["feedback", "impact-1"]),
            team_issue("b", 1.0, &["feedback"]),
            team_issue("c", 0.0, &["bug"]),
            team_issue("d", 0.0, &["feedback"]),
        ];

        let ids: Vec<&str> = select_candidates(&issues)
            .iter()
            .map(|issue| issue.id.as_str())
            .collect();

        assert_eq!(ids, vec!["a", "d"]);
    }

    #[test]
    fn test_parse_candidates_aborts_on_first_error() {
        let issues = vec![
            team_issue("a", 3.0, &["feedback", "impact-1", "confidence-1", "effort-1"]),
            team_issue("b", 3.0, &["feedback", "impact-1"]),
        ];
        let candidates = select_candidates(&issues);

        assert!(matches!(
            parse_candidates(&candidates),
            Err(RiceError::MissingFacet { ref issue, .. }) if issue == "b"
        ));
    }
}
