use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use stride_core::Identity;
use stride_infrastructure::{ClientConfig, HttpCoachApi};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "stride")]
#[command(about = "Stride - terminal dashboard for your AI fitness coach", long_about = None)]
struct Cli {
    /// Backend base URL (overrides the config file and STRIDE_BASE_URL)
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Reuse an existing user identity instead of generating one
    #[arg(long, global = true)]
    user: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Talk to the AI coach
    Chat,
    /// View and award laurels (achievements)
    Laurels {
        #[command(subcommand)]
        action: LaurelsAction,
    },
    /// View and log progress
    Progress {
        #[command(subcommand)]
        action: ProgressAction,
    },
}

#[derive(Subcommand)]
enum LaurelsAction {
    /// List earned laurels and the point total
    List,
    /// Award a laurel
    Award {
        /// Laurel type, e.g. first_plan or workout_streak
        #[arg(long)]
        kind: String,
        #[arg(long, default_value_t = 10)]
        points: u32,
        #[arg(long, default_value = "")]
        description: String,
    },
    /// Quick action: record a completed workout session (+10)
    Workout,
    /// Quick action: record a new fitness goal (+5)
    Goal,
}

#[derive(Subcommand)]
enum ProgressAction {
    /// List logged progress entries
    List,
    /// Log a progress entry
    Log {
        /// Entry kind: workout, measurement, or goal
        #[arg(long, default_value = "workout")]
        kind: String,
        /// Duration in minutes
        #[arg(long, default_value = "")]
        duration: String,
        /// Comma-separated exercise list
        #[arg(long, default_value = "")]
        exercises: String,
        #[arg(long, default_value = "")]
        notes: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let mut config = ClientConfig::load()?;
    if let Some(base_url) = cli.base_url {
        config.base_url = base_url;
    }
    let api = Arc::new(HttpCoachApi::new(config.base_url));

    let identity = cli
        .user
        .map(Identity::from_raw)
        .unwrap_or_else(Identity::generate);

    match cli.command {
        Commands::Chat => commands::chat::run(identity, api).await?,
        Commands::Laurels { action } => match action {
            LaurelsAction::List => commands::laurels::list(identity, api).await,
            LaurelsAction::Award {
                kind,
                points,
                description,
            } => commands::laurels::award(identity, api, &kind, points, &description).await,
            LaurelsAction::Workout => commands::laurels::workout(identity, api).await,
            LaurelsAction::Goal => commands::laurels::goal(identity, api).await,
        },
        Commands::Progress { action } => match action {
            ProgressAction::List => commands::progress::list(identity, api).await,
            ProgressAction::Log {
                kind,
                duration,
                exercises,
                notes,
            } => commands::progress::log(identity, api, &kind, duration, exercises, notes).await?,
        },
    }

    Ok(())
}
