//! Transaction model
//!
//! A single recorded income ("entrada") or expense ("saida") event.
//! Records are created by the entry path, never edited in place, and
//! removed only by explicit deletion.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::TransactionId;
use super::money::Money;
use super::month::MonthKey;

/// Whether a transaction adds to or subtracts from the balance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionKind {
    /// Money coming in
    #[serde(rename = "entrada")]
    Income,
    /// Money going out
    #[serde(rename = "saida")]
    Expense,
}

impl TransactionKind {
    /// The localized display label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Income => "Entrada",
            Self::Expense => "Saída",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A recorded income or expense event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier, assigned at creation
    pub id: TransactionId,

    /// Free-text label (e.g., "Salário")
    pub name: String,

    /// Income or expense
    #[serde(rename = "type")]
    pub kind: TransactionKind,

    /// Non-negative amount
    pub amount: Money,

    /// When the transaction occurred (user-supplied, distinct from
    /// creation time)
    pub date: DateTime<Utc>,
}

impl Transaction {
    /// Create a new transaction with a fresh identifier
    pub fn new(
        name: impl Into<String>,
        kind: TransactionKind,
        amount: Money,
        date: DateTime<Utc>,
    ) -> Self {
        Self {
            id: TransactionId::new(),
            name: name.into(),
            kind,
            amount,
            date,
        }
    }

    /// Check if this is an income transaction
    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }

    /// Check if this is an expense transaction
    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }

    /// The month bucket this transaction falls into
    pub fn month(&self) -> MonthKey {
        MonthKey::from_date(&self.date)
    }

    /// Validate the transaction before it is persisted
    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        if self.name.trim().is_empty() {
            return Err(TransactionValidationError::EmptyName);
        }
        if self.amount.is_negative() {
            return Err(TransactionValidationError::NegativeAmount(self.amount));
        }
        Ok(())
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.date.format("%Y-%m-%d"),
            self.name,
            self.amount
        )
    }
}

/// Validation errors for transactions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionValidationError {
    EmptyName,
    NegativeAmount(Money),
}

impl fmt::Display for TransactionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Transaction name must not be empty"),
            Self::NegativeAmount(amount) => {
                write!(f, "Transaction amount must not be negative: {}", amount)
            }
        }
    }
}

impl std::error::Error for TransactionValidationError {}
