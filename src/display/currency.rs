//! Currency formatting helper
//!
//! Mirrors the formatter the screens use: a formatted BRL string, or
//! `None` as the empty-state fallback for a zero amount.

use crate::models::Money;

/// Format an amount as BRL, or `None` when the amount is zero
pub fn format_currency(amount: Money) -> Option<String> {
    if amount.is_zero() {
        return None;
    }
    Some(amount.to_string())
}
