//! HTML report export
//!
//! Builds the "Transações" report: one table row per transaction with
//! the name, localized kind label, formatted amount, and formatted
//! date. PDF conversion and the file viewer consume this document
//! outside the application; export failures never touch stored data.

use std::io::Write;

use crate::display::currency::format_currency;
use crate::error::{CarteiraError, CarteiraResult};
use crate::models::Transaction;

/// Render the full report document
pub fn render_report(transactions: &[Transaction]) -> String {
    let mut output = String::new();

    output.push_str("<h1>Transações</h1>\n");
    output.push_str("<table border=\"1\" style=\"width:100%; border-collapse: collapse;\">\n");
    output.push_str("  <thead>\n");
    output.push_str(
        "    <tr>\n      <th>Nome</th>\n      <th>Tipo</th>\n      <th>Valor</th>\n      <th>Data</th>\n    </tr>\n",
    );
    output.push_str("  </thead>\n");
    output.push_str("  <tbody>\n");

    for txn in transactions {
        output.push_str(&format!(
            "    <tr>\n      <td>{}</td>\n      <td>{}</td>\n      <td>{}</td>\n      <td>{}</td>\n    </tr>\n",
            escape_html(&txn.name),
            txn.kind.label(),
            format_currency(txn.amount).unwrap_or_default(),
            txn.date.format("%d/%m/%Y"),
        ));
    }

    output.push_str("  </tbody>\n</table>\n");

    output
}

/// Write the report document to a writer
pub fn export_report<W: Write>(transactions: &[Transaction], writer: &mut W) -> CarteiraResult<()> {
    writer
        .write_all(render_report(transactions).as_bytes())
        .map_err(|e| CarteiraError::Export(e.to_string()))
}

/// Escape a string for HTML content
fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
