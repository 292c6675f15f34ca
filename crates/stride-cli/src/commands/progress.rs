//! Progress log commands.

use std::str::FromStr;
use std::sync::Arc;

use anyhow::{Result, anyhow};
use colored::Colorize;
use stride_application::ProgressJournal;
use stride_core::{CoachApi, Identity, LogKind, ProgressForm, ProgressLog};

/// Lists the user's progress history.
pub async fn list(identity: Identity, api: Arc<dyn CoachApi>) {
    let journal = ProgressJournal::new(identity, api);
    journal.load().await;
    render(&journal).await;
}

/// Logs one progress entry from command-line fields, then shows the
/// refetched history.
pub async fn log(
    identity: Identity,
    api: Arc<dyn CoachApi>,
    kind: &str,
    duration: String,
    exercises: String,
    notes: String,
) -> Result<()> {
    let kind = LogKind::from_str(kind)
        .map_err(|_| anyhow!("unknown log kind '{kind}' (expected workout, measurement, or goal)"))?;

    let journal = ProgressJournal::new(identity, api);
    let form = ProgressForm {
        kind,
        duration,
        exercises,
        notes,
    };
    journal.log_entry(kind, &form).await;
    render(&journal).await;

    Ok(())
}

async fn render(journal: &ProgressJournal) {
    let logs = journal.logs().await;

    if logs.is_empty() {
        println!(
            "{}",
            "No progress logged yet. Start tracking your fitness journey!".bright_black()
        );
        return;
    }

    for log in &logs {
        render_log(log);
    }

    println!();
    println!(
        "{}",
        format!("{} entries logged", logs.len()).bright_green().bold()
    );
}

fn render_log(log: &ProgressLog) {
    let mut details = Vec::new();
    if log.payload.duration > 0 {
        details.push(format!("{} min", log.payload.duration));
    }
    if !log.payload.exercises.is_empty() {
        details.push(log.payload.exercises.join(", "));
    }
    if !log.payload.notes.is_empty() {
        details.push(log.payload.notes.clone());
    }

    println!(
        "{} {} {}",
        log.kind.to_string().bold(),
        log.created_at.bright_black(),
        details.join(" | ").bright_blue()
    );
}
