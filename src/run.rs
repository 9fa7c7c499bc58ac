use crate::cli;
use crate::config::Settings;
use crate::fixit::{self, FixitIssue};
use crate::linear::client::{IssueTracker, LinearClient};
use crate::normalize::{self, PrioritizedIssue};
use crate::output;
use crate::report;
use crate::rice;
use crate::token::{self, TokenSource};
use crate::writer::{self, PriorityUpdate, WriteReport};
use anyhow::Context;
use std::io::Write;

pub async fn run(
    args: Vec<String>,
    stdout_additional: Option<&mut dyn Write>,
) -> anyhow::Result<()> {
    let source = token::EnvTokenSource::new();
    let dir = std::env::current_dir().context("Failed to get current directory")?;
    run_with(args, &source, &dir, stdout_additional).await
}

/// Dispatches a command with an explicit token source and config directory.
pub async fn run_with(
    args: Vec<String>,
    source: &dyn TokenSource,
    config_dir: &std::path::Path,
    mut stdout_additional: Option<&mut dyn Write>,
) -> anyhow::Result<()> {
    match cli::parser::parse_args(&args) {
        cli::parser::Command::Fixit => {
            if let Some((client, settings)) =
                connect(source, config_dir, &mut stdout_additional)?
            {
                fixit_pipeline(&client, &settings.fixit_team_id, &mut stdout_additional).await?;
            }
        }
        cli::parser::Command::Prioritize => {
            if let Some((client, settings)) =
                connect(source, config_dir, &mut stdout_additional)?
            {
                prioritize_pipeline(&client, &settings.product_team_id, &mut stdout_additional)
                    .await?;
            }
        }
        cli::parser::Command::Help => {
            output::println(cli::parser::USAGE, &mut stdout_additional)?;
        }
        cli::parser::Command::Unknown(input) => {
            output::println(
                &format!("Unknown command: {input}. Use `help` for usage."),
                &mut stdout_additional,
            )?;
        }
    }
    Ok(())
}

/// Resolves the token and settings and builds the client.
///
/// Without a token the instructional message is printed and `None` returned.
fn connect(
    source: &dyn TokenSource,
    config_dir: &std::path::Path,
    out: &mut Option<&mut dyn Write>,
) -> anyhow::Result<Option<(LinearClient, Settings)>> {
    let Some(token) = source.load()? else {
        output::println(token::MISSING_TOKEN_MESSAGE, out)?;
        return Ok(None);
    };
    let settings = Settings::load(config_dir)?;
    let client =
        LinearClient::new(&settings.api_url, &token).context("Failed to create HTTP client")?;
    Ok(Some((client, settings)))
}

/// Fetch fixit labels, write the mapped priorities, print completed totals.
pub async fn fixit_pipeline<T: IssueTracker>(
    tracker: &T,
    team_id: &str,
    out: &mut Option<&mut dyn Write>,
) -> anyhow::Result<WriteReport> {
    let labels = tracker
        .fixit_labels(team_id)
        .await
        .context("Failed to fetch fixit labels")?;
    let issues = fixit::collect_fixit_issues(&labels)?;
    tracing::info!(labels = labels.len(), issues = issues.len(), "fetched fixit issues");

    let updates: Vec<PriorityUpdate> = issues.iter().map(FixitIssue::priority_update).collect();
    let report = writer::write_priorities(tracker, &updates)
        .await
        .context("Failed to write fixit priorities")?;
    if let Some(summary) = report.failure_summary() {
        output::println(&summary, out)?;
    }

    output::println(&report::render_totals(&issues), out)?;
    Ok(report)
}

/// Fetch team issues, RICE-score the feedback ones, write bucketed priorities.
pub async fn prioritize_pipeline<T: IssueTracker>(
    tracker: &T,
    team_id: &str,
    out: &mut Option<&mut dyn Write>,
) -> anyhow::Result<WriteReport> {
    let issues = tracker
        .team_issues(team_id)
        .await
        .context("Failed to fetch team issues")?;
    let candidates = rice::select_candidates(&issues);
    tracing::info!(
        issues = issues.len(),
        candidates = candidates.len(),
        "fetched team issues"
    );

    let scored = rice::parse_candidates(&candidates)?;
    let prioritized = normalize::prioritize(&scored)?;
    if prioritized.is_empty() {
        tracing::info!("no feedback issues to prioritize");
    }

    let updates: Vec<PriorityUpdate> = prioritized
        .iter()
        .map(PrioritizedIssue::priority_update)
        .collect();
    let report = writer::write_priorities(tracker, &updates)
        .await
        .context("Failed to write RICE priorities")?;
    if let Some(summary) = report.failure_summary() {
        output::println(&summary, out)?;
    }

    output::println("done", out)?;
    Ok(report)
}
