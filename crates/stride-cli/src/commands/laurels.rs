//! Laurel (achievement) commands.

use std::sync::Arc;

use colored::Colorize;
use stride_application::LaurelBoard;
use stride_core::{CoachApi, Identity, Laurel};

/// Lists earned laurels with the derived point total.
pub async fn list(identity: Identity, api: Arc<dyn CoachApi>) {
    let board = LaurelBoard::new(identity, api);
    board.load().await;
    render(&board).await;
}

/// Awards a laurel, then shows the refetched list.
pub async fn award(
    identity: Identity,
    api: Arc<dyn CoachApi>,
    kind: &str,
    points: u32,
    description: &str,
) {
    let board = LaurelBoard::new(identity, api);
    board.award(kind, points, description).await;
    render(&board).await;
}

/// Quick action: record a completed workout session.
pub async fn workout(identity: Identity, api: Arc<dyn CoachApi>) {
    let board = LaurelBoard::new(identity, api);
    board.log_workout().await;
    render(&board).await;
}

/// Quick action: record a new fitness goal.
pub async fn goal(identity: Identity, api: Arc<dyn CoachApi>) {
    let board = LaurelBoard::new(identity, api);
    board.set_goal().await;
    render(&board).await;
}

async fn render(board: &LaurelBoard) {
    let laurels = board.laurels().await;

    if laurels.is_empty() {
        println!(
            "{}",
            "No laurels earned yet. Start your fitness journey to earn achievements!"
                .bright_black()
        );
        return;
    }

    for laurel in &laurels {
        render_laurel(laurel);
    }

    println!();
    println!(
        "{}",
        format!(
            "{} laurels earned - {} total points",
            laurels.len(),
            board.total_points().await
        )
        .bright_green()
        .bold()
    );
}

fn render_laurel(laurel: &Laurel) {
    let title = laurel.laurel_type.replace('_', " ");
    let description = laurel
        .description
        .as_deref()
        .unwrap_or("Achievement unlocked!");
    println!(
        "{} {} {} {}",
        laurel.kind().glyph(),
        title.bold(),
        format!("+{}", laurel.points).bright_yellow(),
        description.bright_black()
    );
}
