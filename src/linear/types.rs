use serde::{Deserialize, Serialize};

/// GraphQL list wrapper (`{ nodes: [...] }`)
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Connection<T> {
    pub nodes: Vec<T>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Named {
    pub name: String,
}

/// Child label of `fixit-scores` together with the issues carrying it
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct LabelNode {
    pub name: String,
    pub issues: Connection<FixitIssueNode>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct FixitIssueNode {
    pub id: String,
    pub identifier: String,
    pub state: Named,
    pub assignee: Option<Named>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct TeamIssueNode {
    pub id: String,
    /// Linear exposes priority as a float (0 = none, 1 = urgent .. 4 = low)
    pub priority: f64,
    pub labels: Connection<Named>,
}

impl TeamIssueNode {
    pub fn label_names(&self) -> impl Iterator<Item = &str> {
        self.labels.nodes.iter().map(|label| label.name.as_str())
    }
}

#[derive(Deserialize, Debug)]
pub(crate) struct FixitLabelsData {
    pub team: TeamLabels,
}

#[derive(Deserialize, Debug)]
pub(crate) struct TeamLabels {
    pub labels: Connection<LabelNode>,
}

#[derive(Deserialize, Debug)]
pub(crate) struct TeamIssuesData {
    pub team: TeamIssues,
}

#[derive(Deserialize, Debug)]
pub(crate) struct TeamIssues {
    pub issues: Connection<TeamIssueNode>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub(crate) struct IssueUpdateData {
    pub issue_update: IssuePayload,
}

/// Payload of the `issueUpdate` mutation
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct IssuePayload {
    pub success: bool,
    pub issue: Option<IssueRef>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct IssueRef {
    pub id: String,
}

/// Request body posted to the GraphQL endpoint
#[derive(Serialize, Debug)]
pub struct GraphQlRequest<'a> {
    pub query: &'a str,
    pub variables: serde_json::Value,
}
