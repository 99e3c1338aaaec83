//! Webscout CLI - Command-line interface
//!
//! Provides command-line access to Webscout functionality.

mod commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "webscout")]
#[command(about = "Web search with dual-provider failover")]
struct Cli {
    #[command(subcommand)]
    command: commands::Commands,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    commands::handle_command(cli.command).await;
}
