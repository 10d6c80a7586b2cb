//! CLI commands for summaries and report export

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use clap::Subcommand;

use crate::config::CarteiraPaths;
use crate::display::summary::{format_monthly_series, format_totals};
use crate::error::{CarteiraError, CarteiraResult};
use crate::export::export_report;
use crate::reports::{MonthlySeries, Totals};
use crate::storage::TransactionStore;

/// Report subcommands
#[derive(Subcommand)]
pub enum ReportCommands {
    /// Show income, expense and balance totals with the monthly trend
    Summary,
    /// Export the transaction report document (HTML, ready for PDF
    /// conversion)
    Export {
        /// Output file, defaults to transacoes.html in the base
        /// directory
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Handle a report command
pub fn handle_report_command(
    store: &TransactionStore,
    paths: &CarteiraPaths,
    cmd: ReportCommands,
) -> CarteiraResult<()> {
    match cmd {
        ReportCommands::Summary => {
            let transactions = store.load()?;

            let totals = Totals::compute(&transactions);
            print!("{}", format_totals(&totals));

            println!();

            let series = MonthlySeries::compute(&transactions);
            print!("{}", format_monthly_series(&series));
        }

        ReportCommands::Export { output } => {
            let transactions = store.load()?;
            let path = output.unwrap_or_else(|| paths.report_file());

            let file = File::create(&path).map_err(|e| {
                CarteiraError::Export(format!("Failed to create {}: {}", path.display(), e))
            })?;
            let mut writer = BufWriter::new(file);
            export_report(&transactions, &mut writer)?;
            writer
                .flush()
                .map_err(|e| CarteiraError::Export(e.to_string()))?;

            println!("Report written to {}", path.display());
        }
    }

    Ok(())
}
