//! CLI adapter for the resource hub
//!
//! The terminal display layer. It depends on `core/` for content and
//! search and only decides how results are shown.
//!
//! # Architecture
//!
//! ```text
//!              +------------------+
//!              |     core/        |
//!              |  (content and    |
//!              |   search logic)  |
//!              +--------+---------+
//!                       |
//!                       v
//!              +------------------+
//!              |      cli/        |
//!              | (clap adapter)   |
//!              +------------------+
//! ```

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};
use std::env;
use tracing_subscriber::EnvFilter;

/// Resource Hub - HIV self-testing and PrEP information
///
/// Browse HIVST and PrEP topics, FAQs and local resources, and search
/// across all topic content.
#[derive(Parser, Debug)]
#[command(name = "resource-hub")]
#[command(version)]
#[command(about = "HIVST & PrEP resource hub", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    /// Enable debug logging on stderr
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for scripting
    Json,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search topic content (case-insensitive substring match)
    Search(commands::SearchArgs),

    /// Interactive search box: one query per line from stdin
    Browse(commands::BrowseArgs),

    /// List all topics
    #[command(name = "list-topics")]
    ListTopics(commands::topics::ListArgs),

    /// Show the sections and FAQs of one topic
    #[command(name = "show-topic")]
    ShowTopic(commands::topics::ShowArgs),

    /// Show quick facts, partners, downloads and other static resources
    #[command(name = "show-resources")]
    ShowResources(commands::ResourcesArgs),

    /// Check a content file before using it
    #[command(name = "validate-catalog")]
    ValidateCatalog(commands::ValidateArgs),

    /// Show current configuration
    #[command(name = "show-config")]
    ShowConfig(commands::ConfigArgs),

    /// Show version and content statistics
    #[command(name = "get-info")]
    GetInfo(commands::InfoArgs),

    /// Generate shell completion scripts
    ///
    /// Output completion script to stdout. To install:
    ///
    ///   bash:  resource-hub completions bash > ~/.local/share/bash-completion/completions/resource-hub
    ///   zsh:   resource-hub completions zsh > ~/.zfunc/_resource-hub
    ///   fish:  resource-hub completions fish > ~/.config/fish/completions/resource-hub.fish
    Completions(commands::CompletionsArgs),
}

/// Install the stderr log subscriber.
///
/// `RUST_LOG` takes precedence over `verbose`. Set
/// `RESOURCE_HUB_LOG_FORMAT=json` for JSON log lines.
pub fn init_logging(verbose: bool) {
    let default_directive = if verbose {
        "resource_hub=debug"
    } else {
        "resource_hub=warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    let json = env::var("RESOURCE_HUB_LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr); // stdout carries command output

    if json {
        builder.json().init();
    } else {
        builder.with_ansi(false).compact().init();
    }
}

/// Run the CLI with the provided arguments
pub fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    use crate::core::config::Config;
    use crate::core::services::Services;
    use std::sync::Arc;

    // Commands that don't need loaded content
    let command = match cli.command {
        Commands::Completions(args) => return commands::completions::execute(args),
        Commands::ValidateCatalog(args) => return commands::validate::execute(args, cli.format),
        command => command,
    };

    // Load configuration
    let config = Config::load()?;
    config.log_config();

    // Load content and build the index; invalid content aborts here
    let services = Arc::new(Services::new(config)?);

    match command {
        Commands::Search(args) => commands::search::execute(args, &services, cli.format),
        Commands::Browse(args) => commands::browse::execute(args, &services, cli.format),
        Commands::ListTopics(args) => commands::topics::execute_list(args, &services, cli.format),
        Commands::ShowTopic(args) => commands::topics::execute_show(args, &services, cli.format),
        Commands::ShowResources(args) => {
            commands::resources::execute(args, &services, cli.format)
        }
        Commands::ShowConfig(args) => commands::config::execute(args, &services, cli.format),
        Commands::GetInfo(args) => commands::info::execute(args, &services, cli.format),
        Commands::Completions(_) | Commands::ValidateCatalog(_) => unreachable!(), // Handled above
    }
}
