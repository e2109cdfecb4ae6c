//! Choreboard CLI
//!
//! Command-line client for a Choreboard server:
//! - Show the home page, scoreboard or admin list
//! - Log repeatable chores and tick weekly ones
//! - Add and delete chores
//! - Start a new week

use anyhow::{bail, Context};
use choreboard::api::HttpGateway;
use choreboard::config::{generate_default_config, Config, LoadReport, LoggingConfig};
use choreboard::controller::{Command, Controller, Outcome, Page};
use choreboard::model::{ChoreId, ChoreType, UserId};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "choreboard")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Household chore tracking")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Server URL (overrides config)
    #[arg(long, global = true)]
    pub server_url: Option<String>,

    /// Config file (default: search standard locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text", global = true)]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the board
    Show {
        /// Page to show (home, scoreboard, admin)
        #[arg(short, long)]
        page: Option<Page>,
    },

    /// Log a repeatable chore
    Log {
        /// Chore ID
        chore: ChoreId,
        /// User who did it
        #[arg(short, long)]
        user: UserId,
    },

    /// Toggle a weekly chore
    Toggle {
        /// Chore ID
        chore: ChoreId,
        /// User the chore is assigned to
        #[arg(short, long)]
        user: UserId,
        /// Set explicitly instead of flipping
        #[arg(long)]
        completed: Option<bool>,
    },

    /// Add a chore to the catalog
    Add {
        #[arg(short, long)]
        name: String,
        #[arg(short, long)]
        points: String,
        /// repeatable or weekly
        #[arg(short = 't', long = "type", default_value = "repeatable")]
        kind: ChoreType,
        /// User to assign a weekly chore to
        #[arg(short, long)]
        assign: Option<UserId>,
    },

    /// Delete a chore from the catalog
    Delete {
        /// Chore ID
        chore: ChoreId,
    },

    /// Start a new week
    Reset {
        /// Prize for the new week
        #[arg(short, long)]
        prize: String,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Commands::Config { output } = &cli.command {
        return write_config(output.as_ref());
    }

    let (mut config, report) = match &cli.config {
        Some(path) => (Config::load_with_env(path)?, LoadReport::from_file(path)),
        None => Config::load_default(),
    };
    if let Some(url) = &cli.server_url {
        config.server.base_url = url.clone();
    }
    init_logging(&config.logging);

    for skipped in &report.skipped {
        tracing::warn!("Ignoring config file: {}", skipped);
    }
    match &report.source {
        Some(path) => tracing::info!("Loaded config from {:?}", path),
        None => tracing::debug!("Using default config with environment overrides"),
    }

    tracing::info!("Using Choreboard server at {}", config.server.base_url);

    let gateway = HttpGateway::new(config.server.gateway_config())?;
    let mut controller = Controller::new(gateway);

    let mut outcome = controller.dispatch(Command::Load).await;
    if !outcome.is_failed() {
        let commands = commands_for(&controller, cli.command)?;
        outcome = controller.dispatch_all(commands).await;
    }

    if let Some(error) = &controller.ui().form_error {
        bail!("{}", error);
    }

    let screen = controller.render();
    match cli.format {
        OutputFormat::Text => print!("{}", screen),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&screen)?),
    }

    if let Outcome::Failed(e) = outcome {
        tracing::debug!("Exiting after failed call: {}", e);
        std::process::exit(1);
    }
    Ok(())
}

/// Commands to run after the initial load
fn commands_for(
    controller: &Controller<HttpGateway>,
    command: Commands,
) -> anyhow::Result<Vec<Command>> {
    let state = controller
        .state()
        .context("board state missing after load")?;

    let commands: Vec<Command> = match command {
        Commands::Show { page } => page.map(Command::Navigate).into_iter().collect(),

        Commands::Log { chore, user } => {
            match state.chore(chore) {
                Some(c) if c.kind == ChoreType::Repeatable => {}
                Some(_) => bail!("Chore #{} is weekly; use `toggle` instead", chore),
                None => bail!("No chore #{}", chore),
            }
            if state.user(user).is_none() {
                bail!("No user #{}", user);
            }
            vec![Command::QuickAdd(chore), Command::SelectUser(user)]
        }

        Commands::Toggle {
            chore,
            user,
            completed,
        } => {
            let assigned = state
                .assignment(chore, user)
                .with_context(|| format!("Chore #{} is not assigned to user #{}", chore, user))?;
            vec![Command::ToggleWeekly {
                chore_id: chore,
                user_id: user,
                completed: completed.unwrap_or(!assigned.completed),
            }]
        }

        Commands::Add {
            name,
            points,
            kind,
            assign,
        } => vec![
            Command::Navigate(Page::Admin),
            Command::SetChoreName(name),
            Command::SetChorePoints(points),
            Command::SetChoreType(kind),
            Command::SetAssignedUser(assign),
            Command::SubmitAddChore,
        ],

        Commands::Delete { chore } => {
            if state.chore(chore).is_none() {
                bail!("No chore #{}", chore);
            }
            vec![Command::Navigate(Page::Admin), Command::DeleteChore(chore)]
        }

        Commands::Reset { prize } => vec![Command::SetPrize(prize), Command::SubmitResetWeek],

        Commands::Config { .. } => Vec::new(),
    };
    Ok(commands)
}

fn write_config(output: Option<&PathBuf>) -> anyhow::Result<()> {
    let config = generate_default_config();

    match output {
        Some(path) => {
            // Create parent directory if needed
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, &config)?;
            println!("Config written to {:?}", path);
        }
        None => print!("{}", config),
    }
    Ok(())
}

fn init_logging(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| format!("choreboard={}", logging.level)),
    );

    // Logs go to stderr; stdout carries the rendered board
    if logging.format == "json" {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
