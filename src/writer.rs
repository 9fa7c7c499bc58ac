use crate::linear::client::{IssueTracker, TrackerError};

/// Priority to write back for one issue
#[derive(Debug, Clone, PartialEq)]
pub struct PriorityUpdate {
    pub issue_id: String,
    pub priority: u8,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WriteOutcome {
    pub issue_id: String,
    pub priority: u8,
    pub success: bool,
}

/// Outcomes of a batch of write-backs, in the order they were issued
#[derive(Debug, Default, PartialEq)]
pub struct WriteReport {
    pub outcomes: Vec<WriteOutcome>,
}

impl WriteReport {
    pub fn failures(&self) -> impl Iterator<Item = &WriteOutcome> {
        self.outcomes.iter().filter(|outcome| !outcome.success)
    }

    pub fn failure_count(&self) -> usize {
        self.failures().count()
    }

    /// One-line summary of rejected updates, or `None` if all succeeded
    pub fn failure_summary(&self) -> Option<String> {
        match self.failure_count() {
            0 => None,
            failed => Some(format!(
                "{failed} of {} priority updates were not applied",
                self.outcomes.len()
            )),
        }
    }
}

/// Writes each update one at a time, in order.
///
/// An update the tracker reports as unsuccessful is recorded and the batch
/// continues. A transport or API error stops the batch.
pub async fn write_priorities<T: IssueTracker>(
    tracker: &T,
    updates: &[PriorityUpdate],
) -> Result<WriteReport, TrackerError> {
    let mut report = WriteReport::default();

    for update in updates {
        let payload = tracker
            .update_priority(&update.issue_id, update.priority)
            .await?;
        if payload.success {
            tracing::debug!(issue = %update.issue_id, priority = update.priority, "priority updated");
        } else {
            tracing::warn!(issue = %update.issue_id, priority = update.priority, "priority update not applied");
        }
        report.outcomes.push(WriteOutcome {
            issue_id: update.issue_id.clone(),
            priority: update.priority,
            success: payload.success,
        });
    }

    Ok(report)
}
