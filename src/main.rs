use anyhow::Result;
use clap::{Parser, Subcommand};

use carteira_cli::cli::{
    handle_report_command, handle_transaction_command, ReportCommands, TransactionCommands,
};
use carteira_cli::config::CarteiraPaths;
use carteira_cli::storage::TransactionStore;

#[derive(Parser)]
#[command(
    name = "carteira",
    version,
    about = "Terminal-based personal income and expense tracker",
    long_about = "carteira is a terminal-based personal finance tracker. \
                  Record income and expense transactions, follow your \
                  balance and monthly trend, and export a report of your \
                  transactions."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Transaction(TransactionCommands),

    #[command(flatten)]
    Report(ReportCommands),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = CarteiraPaths::new()?;
    paths.ensure_directories()?;

    let store = TransactionStore::new(paths.transactions_file());

    match cli.command {
        Some(Commands::Transaction(cmd)) => {
            handle_transaction_command(&store, cmd)?;
        }
        Some(Commands::Report(cmd)) => {
            handle_report_command(&store, &paths, cmd)?;
        }
        Some(Commands::Config) => {
            println!("carteira configuration");
            println!("======================");
            println!("Base directory:    {}", paths.base_dir().display());
            println!("Data directory:    {}", paths.data_dir().display());
            println!("Transactions file: {}", paths.transactions_file().display());
            println!("Report file:       {}", paths.report_file().display());
        }
        None => {
            println!("carteira - terminal personal income and expense tracker");
            println!();
            println!("Run 'carteira --help' for usage information.");
        }
    }

    Ok(())
}
