//! Main entry point for the Deskmate command-line client.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dotenv::dotenv;
use shared::client::DeskmateClient;
use shared::config::{ClientConfig, ConfigOverrides};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

use commands::ask::AskArgs;
use commands::chats::ChatsCommand;
use commands::history::HistoryArgs;
use commands::onboarding::OnboardingCommand;

/// Deskmate CLI
#[derive(Parser)]
#[command(name = "deskmate")]
#[command(about = "Command-line client for the Deskmate support assistant", long_about = None)]
struct Cli {
    /// Path to the configuration file (optional)
    #[arg(
        long,
        short,
        global = true,
        help = "Path to the configuration file (config.toml, config.json or config.yaml). If not provided, defaults and environment variables are used."
    )]
    config: Option<PathBuf>,

    /// Base URL of the support API
    #[arg(
        long,
        global = true,
        help = "Base URL of the support API (e.g., https://support.example.com/api). Overrides DESKMATE_API_URL."
    )]
    api_url: Option<String>,

    /// Bearer token sent with every request
    #[arg(
        long,
        global = true,
        help = "Bearer token sent with every request. Overrides DESKMATE_ACCESS_TOKEN."
    )]
    token: Option<String>,

    /// Logging level used when RUST_LOG is unset
    #[arg(
        long,
        global = true,
        help = "Logging level used when RUST_LOG is unset (e.g., debug, info, warn). Overrides DESKMATE_LOG_LEVEL."
    )]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

/// Subcommands for the Deskmate CLI
#[derive(Subcommand)]
enum Commands {
    /// Ask a question and print the answer
    Ask(AskArgs),

    /// List, rename or delete chats
    Chats {
        #[command(subcommand)]
        command: ChatsCommand,
    },

    /// Print the messages and notifications of a chat
    History(HistoryArgs),

    /// Show or answer the onboarding questions
    Onboarding {
        #[command(subcommand)]
        command: OnboardingCommand,
    },

    /// Generate shell completion scripts for the CLI
    Completion {
        /// The shell type for which to generate the completion script (e.g., bash, zsh, fish, powershell)
        #[arg(
            long,
            short,
            help = "The shell type for which to generate the completion script (e.g., bash, zsh, fish, powershell)"
        )]
        shell: clap_complete::Shell,
    },

    /// Print the resolved configuration
    Config {
        /// Output format (toml, json or yaml). Defaults to toml.
        #[arg(
            long,
            short,
            default_value = "toml",
            help = "Output format (toml, json or yaml). Defaults to toml."
        )]
        format: String,
    },
}

impl Cli {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            api_url: self.api_url.clone(),
            access_token: self.token.clone(),
            log_level: self.log_level.clone(),
        }
    }
}

fn init_tracing(config: &ClientConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    // Logs go to stderr so answers on stdout stay pipeable.
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    let cli = Cli::parse();

    if let Commands::Completion { shell } = cli.command {
        commands::completion::generate_completion(shell);
        return Ok(());
    }

    let config = ClientConfig::load_config(cli.config.clone(), &cli.overrides())
        .context("failed to load configuration")?;
    init_tracing(&config);
    debug!(api_url = %config.api_url, "configuration loaded");

    if let Commands::Config { format } = &cli.command {
        return commands::config::print_config(&config, format);
    }

    let client = DeskmateClient::new(&config).context("failed to create API client")?;

    match cli.command {
        Commands::Ask(args) => commands::ask::run(client, args).await,
        Commands::Chats { command } => commands::chats::run(&client, command).await,
        Commands::History(args) => commands::history::run(client, args).await,
        Commands::Onboarding { command } => commands::onboarding::run(client, command).await,
        Commands::Completion { .. } | Commands::Config { .. } => Ok(()),
    }
}
