//! Month bucket key for the trend series
//!
//! Identifies one calendar month within one year, so buckets never
//! collapse across years. Rendered with the fixed pt-BR month
//! abbreviations ("JAN 2025", "FEV 2025").

use chrono::{DateTime, Datelike, Utc};
use std::fmt;

/// Month abbreviations in display order, pt-BR locale
const ABBREVIATIONS: [&str; 12] = [
    "JAN", "FEV", "MAR", "ABR", "MAI", "JUN", "JUL", "AGO", "SET", "OUT", "NOV", "DEZ",
];

/// A calendar month within a specific year
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MonthKey {
    pub year: i32,
    /// 1-based month number
    pub month: u32,
}

impl MonthKey {
    /// Create a month key directly
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    /// Derive the month key for a date
    pub fn from_date(date: &DateTime<Utc>) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// The upper-cased pt-BR month abbreviation
    pub fn abbreviation(&self) -> &'static str {
        ABBREVIATIONS
            .get((self.month.saturating_sub(1)) as usize)
            .copied()
            .unwrap_or("???")
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.abbreviation(), self.year)
    }
}
