use crate::fixit::FixitIssue;
use comfy_table::Table;
use std::collections::BTreeMap;

pub const DONE_STATE: &str = "Done";
pub const NO_COMPLETED_MESSAGE: &str = "no completed fixit issues yet";

/// Sum of completed fixit scores per assignee, sorted by assignee.
pub fn completed_totals(issues: &[FixitIssue]) -> Vec<(String, f64)> {
    let mut totals: BTreeMap<&str, f64> = BTreeMap::new();
    for issue in issues.iter().filter(|issue| issue.state == DONE_STATE) {
        *totals.entry(issue.assignee.as_str()).or_insert(0.0) += issue.fixit_score.value();
    }
    totals
        .into_iter()
        .map(|(assignee, total)| (assignee.to_string(), total))
        .collect()
}

/// Renders the totals table, or the no-data message.
pub fn render_totals(issues: &[FixitIssue]) -> String {
    let totals = completed_totals(issues);
    if totals.is_empty() {
        return NO_COMPLETED_MESSAGE.to_string();
    }

    let mut table = Table::new();
    table.set_header(vec!["assignee", "fixit_score_total"]);
    for (assignee, total) in totals {
        table.add_row(vec![assignee, format!("{total:.1}")]);
    }
    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixit::FixitScore;

    fn issue(assignee: &str, state: &str, fixit_score: FixitScore) -> FixitIssue {
        FixitIssue {
            id: format!("{assignee}-{state}"),
            identifier: "ENG-1".to_string(),
            state: state.to_string(),
            assignee: assignee.to_string(),
            fixit_score,
        }
    }

    #[test]
    fn test_totals_only_count_done() {
        let issues = vec![
            issue("Alice", "Done", FixitScore::One),
            issue("Alice", "Done", FixitScore::Two),
            issue("Bob", "Todo", FixitScore::Four),
        ];

        assert_eq!(
            completed_totals(&issues),
            vec![("Alice".to_string(), 3.0)]
        );
    }

    #[test]
    fn test_totals_sorted_by_assignee() {
        let issues = vec![
            issue("unassigned", "Done", FixitScore::Half),
            issue("Carol", "Done", FixitScore::Four),
            issue("Alice", "Done", FixitScore::One),
        ];

        let names: Vec<String> = completed_totals(&issues)
            .into_iter()
            .map(|(name, _)| name)
            .collect();

        assert_eq!(names, vec!["Alice", "Carol", "unassigned"]);
    }

    #[test]
    fn test_render_table() {
        let issues = vec![
            issue("Alice", "Done", FixitScore::One),
            issue("Alice", "Done", FixitScore::Two),
            issue("Bob", "Todo", FixitScore::Four),
        ];

        let rendered = render_totals(&issues);

        assert!(rendered.contains("assignee"));
        assert!(rendered.contains("fixit_score_total"));
        assert!(rendered.contains("Alice"));
        assert!(rendered.contains("3.0"));
        assert!(!rendered.contains("Bob"));
    }

    #[test]
    fn test_render_without_done_issues() {
        let issues = vec![issue("Bob", "Todo", FixitScore::Four)];
        assert_eq!(render_totals(&issues), "no completed fixit issues yet");
        assert_eq!(render_totals(&[]), "no completed fixit issues yet");
    }
}
