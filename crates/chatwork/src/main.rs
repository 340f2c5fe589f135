//! Chatwork - command-line client for the Chatwork API
//!
//! Main entry point for the `chatwork` CLI.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod config;

use commands::{files, me, messages, rooms, tasks};

// ─────────────────────────────────────────────────────────────────────────────
// CLI Structure
// ─────────────────────────────────────────────────────────────────────────────

/// Chatwork - command-line client for the Chatwork API
#[derive(Parser)]
#[command(name = "chatwork")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output as JSON (for scripting)
    #[arg(long, global = true)]
    pub json: bool,

    /// API token
    #[arg(long, global = true, env = "CHATWORK_API_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// API base URL (default: https://api.chatwork.com/v2)
    #[arg(long, global = true, env = "CHATWORK_BASE_URL")]
    pub base_url: Option<String>,

    /// Config file (default: ~/.config/chatwork/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show your own profile
    Me(me::MeArgs),

    /// Room management
    Rooms(rooms::RoomsArgs),

    /// Read and post messages
    Messages(messages::MessagesArgs),

    /// List and add tasks
    Tasks(tasks::TasksArgs),

    /// List and upload files
    Files(files::FilesArgs),
}

// ─────────────────────────────────────────────────────────────────────────────
// Main
// ─────────────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG wins over the built-in filters
    let filter = if cli.verbose {
        "chatwork=debug,chatwork_client=debug,info"
    } else {
        "chatwork=info,chatwork_client=info,warn"
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let loaded = config::load_config(cli.config.as_deref())?;
    let settings = config::Settings::resolve(&loaded, cli.token, cli.base_url);

    let ctx = commands::Context {
        settings,
        json_output: cli.json,
        verbose: cli.verbose,
    };

    // Dispatch to command handlers
    match cli.command {
        Commands::Me(args) => me::run(args, &ctx),
        Commands::Rooms(args) => rooms::run(args, &ctx),
        Commands::Messages(args) => messages::run(args, &ctx),
        Commands::Tasks(args) => tasks::run(args, &ctx),
        Commands::Files(args) => files::run(args, &ctx),
    }
}
