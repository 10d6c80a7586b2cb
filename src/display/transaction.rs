//! Transaction display formatting
//!
//! Provides utilities for formatting transactions for terminal display.

use crate::models::Transaction;

/// Format a single transaction for display (register row)
pub fn format_transaction_row(txn: &Transaction) -> String {
    format!(
        "{:<12}  {:<10}  {:<24} {:<8} {:>14}",
        txn.id.to_string(),
        txn.date.format("%d/%m/%Y").to_string(),
        truncate(&txn.name, 24),
        txn.kind.label(),
        txn.amount.to_string()
    )
}

/// Format a list of transactions as a register, in recorded order
pub fn format_transaction_register(transactions: &[Transaction]) -> String {
    if transactions.is_empty() {
        return "No transactions recorded.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:<12}  {:<10}  {:<24} {:<8} {:>14}\n",
        "ID", "Date", "Name", "Kind", "Amount"
    ));
    output.push_str(&"-".repeat(74));
    output.push('\n');

    for txn in transactions {
        output.push_str(&format_transaction_row(txn));
        output.push('\n');
    }

    output
}

/// Format transaction details for display
pub fn format_transaction_details(txn: &Transaction) -> String {
    let mut output = String::new();

    output.push_str(&format!("Transaction: {}\n", txn.id.as_uuid()));
    output.push_str(&format!("Date:        {}\n", txn.date.format("%d/%m/%Y")));
    output.push_str(&format!("Name:        {}\n", txn.name));
    output.push_str(&format!("Kind:        {}\n", txn.kind.label()));
    output.push_str(&format!("Amount:      {}\n", txn.amount));

    output
}

/// Truncate a string to a maximum length
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        format!("{:width$}", s, width = max_len)
    } else {
        let cut: String = s.chars().take(max_len - 3).collect();
        format!("{}...", cut)
    }
}
