//! Transaction service
//!
//! Business logic for recording, listing, and deleting transactions.
//! Validation happens here, before any store access, so invalid input
//! never reaches persistence.

use chrono::{DateTime, Utc};

use crate::error::{CarteiraError, CarteiraResult};
use crate::models::{Money, Transaction, TransactionId, TransactionKind};
use crate::storage::TransactionStore;

/// Input for recording a new transaction
#[derive(Debug, Clone)]
pub struct CreateTransactionInput {
    pub name: String,
    pub kind: TransactionKind,
    pub amount: Money,
    /// When the transaction occurred; defaults to now
    pub date: Option<DateTime<Utc>>,
}

/// Service for transaction management
pub struct TransactionService<'a> {
    store: &'a TransactionStore,
}

impl<'a> TransactionService<'a> {
    /// Create a new transaction service
    pub fn new(store: &'a TransactionStore) -> Self {
        Self { store }
    }

    /// Record a new transaction
    pub fn create(&self, input: CreateTransactionInput) -> CarteiraResult<Transaction> {
        let date = input.date.unwrap_or_else(Utc::now);
        let txn = Transaction::new(input.name.trim(), input.kind, input.amount, date);

        txn.validate()
            .map_err(|e| CarteiraError::Validation(e.to_string()))?;

        self.store.append(txn.clone())?;

        Ok(txn)
    }

    /// List all transactions in the order they were recorded
    pub fn list(&self) -> CarteiraResult<Vec<Transaction>> {
        self.store.load()
    }

    /// Get a transaction by ID
    pub fn get(&self, id: TransactionId) -> CarteiraResult<Option<Transaction>> {
        Ok(self.list()?.into_iter().find(|t| t.id == id))
    }

    /// Find a transaction by full ID or unique ID prefix
    pub fn find(&self, identifier: &str) -> CarteiraResult<Option<Transaction>> {
        if let Ok(id) = identifier.parse::<TransactionId>() {
            return self.get(id);
        }

        let needle = identifier
            .strip_prefix("txn-")
            .unwrap_or(identifier)
            .to_lowercase();
        if needle.is_empty() {
            return Ok(None);
        }

        let matches: Vec<Transaction> = self
            .list()?
            .into_iter()
            .filter(|t| t.id.as_uuid().to_string().starts_with(&needle))
            .collect();

        match matches.len() {
            0 => Ok(None),
            1 => Ok(matches.into_iter().next()),
            _ => Err(CarteiraError::Validation(format!(
                "Identifier '{}' matches more than one transaction",
                identifier
            ))),
        }
    }

    /// Delete a transaction; returns whether a record matched
    pub fn remove(&self, id: TransactionId) -> CarteiraResult<bool> {
        self.store.remove(id)
    }
}
