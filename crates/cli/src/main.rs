use clap::Parser;
use proposer_cli::commands::{Cmd, Command};

/// Proposer CLI
///
/// Prepares proposal steps whose numeric arguments are only known at execution time: generate
/// deterministic placeholders, encode them into calldata, and substitute the final values later.
#[derive(Parser)]
#[command(name = "proposer")]
#[command(about = "Proposer: deferred values for proposal calldata")]
struct Cli {
    /// Log debug output to stderr.
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Cmd,
}

/// Runs the proposer CLI with the provided arguments.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .without_time()
        .init();

    cli.command.execute().await
}
