use crate::linear::graphql;
use crate::linear::queries;
use crate::linear::types::{
    FixitLabelsData, GraphQlRequest, IssuePayload, IssueUpdateData, LabelNode, TeamIssueNode,
    TeamIssuesData,
};
use serde::de::DeserializeOwned;
use serde_json::json;
use thiserror::Error;

pub const DEFAULT_API_URL: &str = "https://api.linear.app/graphql";
const REQUEST_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(30);

#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Token invalid or expired. Check LINEAR_API_TOKEN.")]
    Unauthorized,

    #[error("API request error: {0}")]
    Status(reqwest::StatusCode),

    #[error("{0}")]
    GraphQl(String),
}

/// Remote operations the pipelines need from the issue tracker
#[allow(async_fn_in_trait)]
pub trait IssueTracker {
    /// Child labels of `fixit-scores` in the team, each with its issues
    async fn fixit_labels(&self, team_id: &str) -> Result<Vec<LabelNode>, TrackerError>;
    /// Every issue of the team with its current priority and labels
    async fn team_issues(&self, team_id: &str) -> Result<Vec<TeamIssueNode>, TrackerError>;
    /// Set the priority of one issue
    async fn update_priority(
        &self,
        issue_id: &str,
        priority: u8,
    ) -> Result<IssuePayload, TrackerError>;
}

/// GraphQL-over-HTTP client for Linear
pub struct LinearClient {
    http: reqwest::Client,
    api_url: String,
    token: String,
}

impl LinearClient {
    pub fn new(api_url: &str, token: &str) -> Result<Self, TrackerError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(LinearClient {
            http,
            api_url: api_url.to_string(),
            token: token.to_string(),
        })
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        query: &str,
        variables: serde_json::Value,
    ) -> Result<T, TrackerError> {
        let body = GraphQlRequest { query, variables };
        let response = self
            .http
            .post(&self.api_url)
            // Personal API keys are sent as-is, without a scheme prefix
            .header("Authorization", &self.token)
            .header("Content-Type", "application/json")
            .header("User-Agent", "linear-priority")
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(TrackerError::Unauthorized);
        }
        if !status.is_success() {
            return Err(TrackerError::Status(status));
        }

        let text = response.text().await?;
        graphql::extract_data(&text).map_err(TrackerError::GraphQl)
    }
}

impl IssueTracker for LinearClient {
    async fn fixit_labels(&self, team_id: &str) -> Result<Vec<LabelNode>, TrackerError> {
        let data: FixitLabelsData = self
            .execute(
                queries::FIXIT_LABELS,
                json!({ "teamId": team_id, "parent": queries::FIXIT_PARENT_LABEL }),
            )
            .await?;
        Ok(data.team.labels.nodes)
    }

    async fn team_issues(&self, team_id: &str) -> Result<Vec<TeamIssueNode>, TrackerError> {
        let data: TeamIssuesData = self
            .execute(queries::TEAM_ISSUES, json!({ "teamId": team_id }))
            .await?;
        Ok(data.team.issues.nodes)
    }

    async fn update_priority(
        &self,
        issue_id: &str,
        priority: u8,
    ) -> Result<IssuePayload, TrackerError> {
        let data: IssueUpdateData = self
            .execute(
                queries::ISSUE_UPDATE,
                json!({ "id": issue_id, "priority": priority }),
            )
            .await?;
        Ok(data.issue_update)
    }
}
