//! Interactive chat loop against the AI coach.

use std::sync::Arc;

use anyhow::Result;
use colored::Colorize;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use stride_application::ChatSession;
use stride_core::{ChatEntry, ChatRole, CoachApi, Identity};

/// Runs the readline-based chat REPL until the user leaves.
pub async fn run(identity: Identity, api: Arc<dyn CoachApi>) -> Result<()> {
    let session = ChatSession::new(identity, api);
    let mut rl = DefaultEditor::new()?;

    println!("{}", "=== Stride AI Coach ===".bright_magenta().bold());
    println!("{}", format!("User: {}", session.identity()).bright_black());
    println!(
        "{}",
        "Type a message, or 'exit' to leave.".bright_black()
    );
    println!();

    loop {
        match rl.readline(">> ") {
            Ok(line) => {
                let trimmed = line.trim();

                if trimmed == "quit" || trimmed == "exit" {
                    println!("{}", "Goodbye!".bright_green());
                    break;
                }
                if trimmed.is_empty() {
                    continue;
                }

                let _ = rl.add_history_entry(&line);

                let before = session.transcript().await.len();
                session.submit(trimmed).await;

                // Render only this turn's entries; the submitted line is
                // already on screen, so skip the user echo.
                for entry in session.transcript().await.into_iter().skip(before) {
                    if entry.role == ChatRole::Assistant {
                        render_reply(&entry);
                    }
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                println!("{}", "Goodbye!".bright_green());
                break;
            }
            Err(err) => return Err(err.into()),
        }
    }

    Ok(())
}

fn render_reply(entry: &ChatEntry) {
    for line in entry.text.lines() {
        println!("{} {}", "coach>".bright_magenta(), line.bright_blue());
    }
    println!();
}
