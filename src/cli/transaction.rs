//! Transaction CLI commands
//!
//! Implements CLI commands for recording, listing, and deleting
//! transactions.

use std::io::{self, Write};

use chrono::{NaiveDate, NaiveTime, Utc};
use clap::Subcommand;

use crate::display::transaction::{format_transaction_details, format_transaction_register};
use crate::error::{CarteiraError, CarteiraResult};
use crate::models::{Money, TransactionKind};
use crate::services::{CreateTransactionInput, TransactionService};
use crate::storage::TransactionStore;

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Record a new transaction
    Add {
        /// Transaction label (e.g., "Salário")
        name: String,
        /// Amount in reais (e.g., "1500" or "49,90")
        amount: String,
        /// Transaction kind: entrada (income) or saida (expense)
        #[arg(short, long, default_value = "saida")]
        kind: String,
        /// Date the transaction occurred (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },
    /// List all transactions in the order they were recorded
    List,
    /// Show details for one transaction
    Show {
        /// Transaction ID (full or unique prefix)
        id: String,
    },
    /// Delete a transaction
    #[command(alias = "delete")]
    Remove {
        /// Transaction ID (full or unique prefix)
        id: String,
        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },
}

/// Handle a transaction command
pub fn handle_transaction_command(
    store: &TransactionStore,
    cmd: TransactionCommands,
) -> CarteiraResult<()> {
    let service = TransactionService::new(store);

    match cmd {
        TransactionCommands::Add {
            name,
            amount,
            kind,
            date,
        } => {
            let kind = parse_kind(&kind)?;

            let amount = Money::parse(&amount).map_err(|e| {
                CarteiraError::Validation(format!(
                    "Invalid amount '{}'. Use a format like '1500' or '49,90'. {}",
                    amount, e
                ))
            })?;

            let date = match date {
                Some(date_str) => {
                    let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").map_err(|_| {
                        CarteiraError::Validation(format!(
                            "Invalid date format: '{}'. Use YYYY-MM-DD",
                            date_str
                        ))
                    })?;
                    date.and_time(NaiveTime::MIN).and_utc()
                }
                None => Utc::now(),
            };

            let txn = service.create(CreateTransactionInput {
                name,
                kind,
                amount,
                date: Some(date),
            })?;

            println!("Recorded transaction:");
            println!("  ID:     {}", txn.id);
            println!("  Date:   {}", txn.date.format("%d/%m/%Y"));
            println!("  Name:   {}", txn.name);
            println!("  Kind:   {}", txn.kind.label());
            println!("  Amount: {}", txn.amount);
        }

        TransactionCommands::List => {
            let transactions = service.list()?;
            print!("{}", format_transaction_register(&transactions));
            println!();
            println!("Showing {} transactions", transactions.len());
        }

        TransactionCommands::Show { id } => {
            let txn = service
                .find(&id)?
                .ok_or_else(|| CarteiraError::transaction_not_found(&id))?;
            print!("{}", format_transaction_details(&txn));
        }

        TransactionCommands::Remove { id, force } => {
            let txn = service
                .find(&id)?
                .ok_or_else(|| CarteiraError::transaction_not_found(&id))?;

            if !force {
                let prompt = format!("Delete \"{}\" ({})? [y/N] ", txn.name, txn.amount);
                if !confirm(&prompt)? {
                    println!("Aborted.");
                    return Ok(());
                }
            }

            service.remove(txn.id)?;
            println!("Deleted transaction {}", txn.id);
        }
    }

    Ok(())
}

/// Parse a kind argument ("entrada"/"saida", English aliases accepted)
fn parse_kind(s: &str) -> CarteiraResult<TransactionKind> {
    match s.to_lowercase().as_str() {
        "entrada" | "income" => Ok(TransactionKind::Income),
        "saida" | "saída" | "expense" => Ok(TransactionKind::Expense),
        _ => Err(CarteiraError::Validation(format!(
            "Invalid kind: '{}'. Use entrada or saida",
            s
        ))),
    }
}

/// Ask the user for confirmation on stdin
fn confirm(prompt: &str) -> CarteiraResult<bool> {
    print!("{}", prompt);
    io::stdout()
        .flush()
        .map_err(|e| CarteiraError::Io(e.to_string()))?;

    let mut answer = String::new();
    io::stdin()
        .read_line(&mut answer)
        .map_err(|e| CarteiraError::Io(e.to_string()))?;

    Ok(matches!(
        answer.trim().to_lowercase().as_str(),
        "y" | "yes" | "s" | "sim"
    ))
}
