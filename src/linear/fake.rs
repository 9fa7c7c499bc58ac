use crate::linear::client::{IssueTracker, TrackerError};
use crate::linear::types::{Connection, IssuePayload, IssueRef, LabelNode, Named, TeamIssueNode};
use std::cell::RefCell;

/// In-memory tracker recording every priority update in call order
#[derive(Default)]
pub struct FakeTracker {
    pub labels: Vec<LabelNode>,
    pub issues: Vec<TeamIssueNode>,
    /// Issue ids whose update reports `success: false`
    pub rejected: Vec<String>,
    /// Issue id whose update fails at the transport level
    pub broken: Option<String>,
    pub updates: RefCell<Vec<(String, u8)>>,
}

impl FakeTracker {
    pub fn updates(&self) -> Vec<(String, u8)> {
        self.updates.borrow().clone()
    }
}

impl IssueTracker for FakeTracker {
    async fn fixit_labels(&self, _team_id: &str) -> Result<Vec<LabelNode>, TrackerError> {
        Ok(self.labels.clone())
    }

    async fn team_issues(&self, _team_id: &str) -> Result<Vec<TeamIssueNode>, TrackerError> {
        Ok(self.issues.clone())
    }

    async fn update_priority(
        &self,
        issue_id: &str,
        priority: u8,
    ) -> Result<IssuePayload, TrackerError> {
        if self.broken.as_deref() == Some(issue_id) {
            return Err(TrackerError::GraphQl("connection reset".to_string()));
        }
        self.updates
            .borrow_mut()
            .push((issue_id.to_string(), priority));
        Ok(IssuePayload {
            success: !self.rejected.iter().any(|id| id == issue_id),
            issue: Some(IssueRef {
                id: issue_id.to_string(),
            }),
        })
    }
}

pub fn named(name: &str) -> Named {
    Named {
        name: name.to_string(),
    }
}

pub fn team_issue(id: &str, priority: f64, labels: &[&str]) -> TeamIssueNode {
    TeamIssueNode {
        id: id.to_string(),
        priority,
        labels: Connection {
            nodes: labels.iter().map(|name| named(name)).collect(),
        },
    }
}
