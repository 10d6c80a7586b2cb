//! Aggregation over the transaction list
//!
//! Pure, side-effect-free summaries recomputed fresh on every reload:
//! running totals and the month-bucketed trend series.

pub mod monthly;
pub mod summary;

pub use monthly::MonthlySeries;
pub use summary::Totals;
