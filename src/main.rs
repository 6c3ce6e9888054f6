use anyhow::Result;
use bankdesk::{AppCommand, RunOptions, core::log::init_logging};
use clap::{CommandFactory, Parser, Subcommand};

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    /// Act as this user instead of the configured caller
    #[arg(long, global = true)]
    caller: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    #[command(flatten)]
    App(AppCommand),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let options = RunOptions {
        config_path: cli.config_path.as_deref(),
        caller: cli.caller.as_deref(),
    };
    let result = match cli.command {
        Some(Commands::Setup) => bankdesk::cli::setup::setup(),
        Some(Commands::App(cmd)) => bankdesk::run_command(cmd, options).await,
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}
