//! FundMe CLI - deploy, fund, and withdraw from the FundMe contract.

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "fundme")]
#[command(about = "Deployment and withdrawal runner for the FundMe contract", long_about = None)]
#[command(version)]
struct Cli {
    /// Override the configured network name
    #[arg(long, global = true)]
    network: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the deployment fixture and persist it
    Deploy,
    /// Send value to the FundMe contract as the deployer
    Fund {
        /// Amount in ether
        #[arg(long, default_value = "0.1")]
        amount: String,
    },
    /// Withdraw the full contract balance as the deployer
    Withdraw,
    /// Show contract address, balance, and funder count
    Status,
}

fn main() -> Result<()> {
    // Initialize tracing subscriber
    // Respects RUST_LOG environment variable (e.g., RUST_LOG=debug)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Deploy => commands::deploy::run(cli.network.as_deref()),
        Commands::Fund { amount } => commands::fund::run(cli.network.as_deref(), &amount),
        Commands::Withdraw => commands::withdraw::run(cli.network.as_deref()),
        Commands::Status => commands::status::run(cli.network.as_deref()),
    }
}
