//! Summary and trend formatting
//!
//! Renders the totals card (Entrada / Saída / Saldo) and the monthly
//! trend series for terminal display.

use crate::reports::{MonthlySeries, Totals};

/// Format the totals card
pub fn format_totals(totals: &Totals) -> String {
    let mut output = String::new();

    output.push_str("Resumo\n");
    output.push_str(&"-".repeat(30));
    output.push('\n');
    output.push_str(&format!("{:<10} {:>18}\n", "Entrada:", totals.income.to_string()));
    output.push_str(&format!("{:<10} {:>18}\n", "Saída:", totals.expense.to_string()));
    output.push_str(&format!("{:<10} {:>18}\n", "Saldo:", totals.balance.to_string()));

    output
}

/// Format the monthly trend series as a table
pub fn format_monthly_series(series: &MonthlySeries) -> String {
    if series.is_empty() {
        return "No months to chart yet.\n".to_string();
    }

    let mut output = String::new();

    output.push_str(&format!(
        "{:<10} {:>14} {:>14}\n",
        "Month", "Entrada", "Saída"
    ));
    output.push_str(&"-".repeat(40));
    output.push('\n');

    for (i, label) in series.labels.iter().enumerate() {
        output.push_str(&format!(
            "{:<10} {:>14} {:>14}\n",
            label.to_string(),
            series.income[i].to_string(),
            series.expense[i].to_string()
        ));
    }

    output
}
