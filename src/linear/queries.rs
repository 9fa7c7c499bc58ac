/// Parent label grouping the `fixit-score-<n>` labels.
pub const FIXIT_PARENT_LABEL: &str = "fixit-scores";

pub const FIXIT_LABELS: &str = r#"
query FixitLabels($teamId: String!, $parent: String!) {
  team(id: $teamId) {
    labels(filter: { parent: { name: { eq: $parent } } }) {
      nodes {
        name
        issues {
          nodes {
            id
            identifier
            state { name }
            assignee { name }
          }
        }
      }
    }
  }
}
"#;

pub const TEAM_ISSUES: &str = r#"
query TeamIssues($teamId: String!) {
  team(id: $teamId) {
    issues {
      nodes {
        id
        priority
        labels { nodes { name } }
      }
    }
  }
}
"#;

pub const ISSUE_UPDATE: &str = r#"
mutation IssueUpdate($id: String!, $priority: Int!) {
  issueUpdate(id: $id, input: { priority: $priority }) {
    success
    issue { id }
  }
}
"#;
