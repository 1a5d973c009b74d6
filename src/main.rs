//! TalentScout CLI entry point

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use talentscout::commands::{self, chat, check, config};
use talentscout::services::intake::IntakeMachine;
use talentscout::{ConfigService, SettingsUpdate};

#[derive(Parser)]
#[command(name = "talentscout")]
#[command(about = "TalentScout - AI hiring assistant for candidate screening", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to the config file (defaults to ~/.talentscout/config.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Override the model for this run
    #[arg(long, global = true)]
    model: Option<String>,

    /// Override the generation timeout in seconds for this run
    #[arg(long, global = true)]
    timeout: Option<u64>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start a screening conversation (default)
    Chat,
    /// Inspect or reset the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
    /// Check that the language model provider is reachable
    Check,
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the active configuration
    Show,
    /// Restore default settings
    Reset,
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut service = match &cli.config {
        Some(path) => ConfigService::open(path),
        None => ConfigService::new(),
    }
    .context("failed to load configuration")?;

    service
        .override_config(SettingsUpdate {
            model: cli.model,
            request_timeout_secs: cli.timeout,
            ..Default::default()
        })
        .context("invalid command-line override")?;

    match cli.command.unwrap_or(Commands::Chat) {
        Commands::Chat => {
            let generator = commands::create_generator(service.get_config())?;
            let machine = IntakeMachine::new(Arc::new(generator));
            let stdin = tokio::io::BufReader::new(tokio::io::stdin());
            let mut stdout = std::io::stdout();
            chat::run_chat(&machine, stdin, &mut stdout).await?;
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => println!("{}", config::show_config(&service)?),
            ConfigAction::Reset => println!("{}", config::reset_config(&mut service)?),
        },
        Commands::Check => {
            let provider = commands::create_provider(service.get_config())?;
            let health = check::check_provider(provider.as_ref()).await;
            println!("{}", serde_json::to_string_pretty(&health)?);
            if !health.is_healthy() {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
