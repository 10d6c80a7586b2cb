//! Transaction store over the single JSON ledger file
//!
//! The whole transaction list lives as one JSON array. `load` reads it
//! in full; `append` and `remove` each run a full load-modify-store
//! cycle and rewrite the list atomically. Mutations serialize on an
//! internal mutex so two in-process operations cannot interleave and
//! lose an update; cross-process writers remain last-write-wins.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::CarteiraError;
use crate::models::{Money, Transaction, TransactionId, TransactionKind};

use super::file_io::{read_json, write_json_atomic};

/// On-disk record shape
///
/// `id` stayed optional because lists written before identifiers were
/// introduced lack the field; `load` backfills those records once and
/// rewrites the file, so deletion works for legacy data too.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoredTransaction {
    #[serde(default)]
    id: Option<TransactionId>,
    name: String,
    #[serde(rename = "type")]
    kind: TransactionKind,
    amount: Money,
    date: DateTime<Utc>,
}

impl From<&Transaction> for StoredTransaction {
    fn from(txn: &Transaction) -> Self {
        Self {
            id: Some(txn.id),
            name: txn.name.clone(),
            kind: txn.kind,
            amount: txn.amount,
            date: txn.date,
        }
    }
}

impl StoredTransaction {
    fn into_transaction(self) -> Transaction {
        Transaction {
            id: self.id.unwrap_or_else(TransactionId::new),
            name: self.name,
            kind: self.kind,
            amount: self.amount,
            date: self.date,
        }
    }
}

/// Sole gateway to the persisted transaction list
pub struct TransactionStore {
    path: PathBuf,
    /// Serializes load-modify-store cycles
    write_lock: Mutex<()>,
}

impl TransactionStore {
    /// Create a store over the given ledger file
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            write_lock: Mutex::new(()),
        }
    }

    /// The ledger file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the full transaction list in insertion order
    ///
    /// A missing file yields an empty list. Records persisted without
    /// an identifier are assigned one and the list is rewritten before
    /// returning, so repeated loads yield equal sequences.
    pub fn load(&self) -> Result<Vec<Transaction>, CarteiraError> {
        let _guard = self.lock()?;
        self.load_locked()
    }

    /// Append a transaction at the end of the list
    pub fn append(&self, transaction: Transaction) -> Result<(), CarteiraError> {
        let _guard = self.lock()?;
        let mut transactions = self.load_locked()?;
        transactions.push(transaction);
        self.write_locked(&transactions)
    }

    /// Remove the transaction with the given id
    ///
    /// Returns whether a record matched; a miss is a successful no-op.
    pub fn remove(&self, id: TransactionId) -> Result<bool, CarteiraError> {
        let _guard = self.lock()?;
        let mut transactions = self.load_locked()?;
        let before = transactions.len();
        transactions.retain(|t| t.id != id);
        let removed = transactions.len() != before;
        self.write_locked(&transactions)?;
        Ok(removed)
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, ()>, CarteiraError> {
        self.write_lock
            .lock()
            .map_err(|e| CarteiraError::Storage(format!("Failed to acquire store lock: {}", e)))
    }

    fn load_locked(&self) -> Result<Vec<Transaction>, CarteiraError> {
        let stored: Vec<StoredTransaction> = read_json(&self.path)?;

        let mut backfilled = false;
        let transactions: Vec<Transaction> = stored
            .into_iter()
            .map(|record| {
                if record.id.is_none() {
                    backfilled = true;
                }
                record.into_transaction()
            })
            .collect();

        if backfilled {
            self.write_locked(&transactions)?;
        }

        Ok(transactions)
    }

    fn write_locked(&self, transactions: &[Transaction]) -> Result<(), CarteiraError> {
        let stored: Vec<StoredTransaction> =
            transactions.iter().map(StoredTransaction::from).collect();
        write_json_atomic(&self.path, &stored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::fs;
    use tempfile::TempDir;

    fn create_test_store() -> (TempDir, TransactionStore) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("transactions.json");
        (temp_dir, TransactionStore::new(path))
    }

    fn sample(name: &str, kind: TransactionKind, cents: i64) -> Transaction {
        Transaction::new(
            name,
            kind,
            Money::from_cents(cents),
            Utc.with_ymd_and_hms(2025, 1, 15, 12, 0, 0).unwrap(),
        )
    }

    #[test]
    fn test_empty_load() {
        let (_temp_dir, store) = create_test_store();
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_append_then_load_round_trips() {
        let (_temp_dir, store) = create_test_store();

        let txn = sample("Salário", TransactionKind::Income, 500000);
        store.append(txn.clone()).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.len(), 1);
        let last = loaded.last().unwrap();
        assert_eq!(last.id, txn.id);
        assert_eq!(last.name, txn.name);
        assert_eq!(last.amount, txn.amount);
    }

    #[test]
    fn test_load_is_idempotent() {
        let (_temp_dir, store) = create_test_store();

        store
            .append(sample("Mercado", TransactionKind::Expense, 30000))
            .unwrap();

        let first = store.load().unwrap();
        let second = store.load().unwrap();
        assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(second.iter()) {
            assert_eq!(a.id, b.id);
            assert_eq!(a.name, b.name);
            assert_eq!(a.amount, b.amount);
            assert_eq!(a.date, b.date);
        }
    }

    #[test]
    fn test_insertion_order_is_preserved() {
        let (_temp_dir, store) = create_test_store();

        store
            .append(sample("Primeiro", TransactionKind::Income, 100))
            .unwrap();
        store
            .append(sample("Segundo", TransactionKind::Expense, 200))
            .unwrap();
        store
            .append(sample("Terceiro", TransactionKind::Income, 300))
            .unwrap();

        let names: Vec<_> = store.load().unwrap().into_iter().map(|t| t.name).collect();
        assert_eq!(names, vec!["Primeiro", "Segundo", "Terceiro"]);
    }

    #[test]
    fn test_remove() {
        let (_temp_dir, store) = create_test_store();

        let txn = sample("Mercado", TransactionKind::Expense, 30000);
        let id = txn.id;
        store.append(txn).unwrap();

        assert!(store.remove(id).unwrap());
        assert!(store.load().unwrap().iter().all(|t| t.id != id));
    }

    #[test]
    fn test_remove_nonexistent_is_noop() {
        let (_temp_dir, store) = create_test_store();

        store
            .append(sample("Mercado", TransactionKind::Expense, 30000))
            .unwrap();

        let before = store.load().unwrap();
        assert!(!store.remove(TransactionId::new()).unwrap());
        let after = store.load().unwrap();

        assert_eq!(before.len(), after.len());
        assert_eq!(before[0].id, after[0].id);
    }

    #[test]
    fn test_append_then_remove_restores_prior_state() {
        let (_temp_dir, store) = create_test_store();

        store
            .append(sample("Salário", TransactionKind::Income, 500000))
            .unwrap();
        let before: Vec<_> = store.load().unwrap().iter().map(|t| t.id).collect();

        let txn = sample("Mercado", TransactionKind::Expense, 30000);
        let id = txn.id;
        store.append(txn).unwrap();
        store.remove(id).unwrap();

        let after: Vec<_> = store.load().unwrap().iter().map(|t| t.id).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_malformed_file_is_reported() {
        let (temp_dir, store) = create_test_store();

        fs::write(temp_dir.path().join("transactions.json"), "{not valid").unwrap();

        let err = store.load().unwrap_err();
        assert!(err.is_malformed_data());
    }

    #[test]
    fn test_wrong_shape_is_reported() {
        let (temp_dir, store) = create_test_store();

        fs::write(
            temp_dir.path().join("transactions.json"),
            r#"{"transactions": []}"#,
        )
        .unwrap();

        let err = store.load().unwrap_err();
        assert!(err.is_malformed_data());
    }

    #[test]
    fn test_legacy_records_without_id_are_backfilled() {
        let (temp_dir, store) = create_test_store();

        fs::write(
            temp_dir.path().join("transactions.json"),
            r#"[
                {"name": "Aluguel", "type": "saida", "amount": 1200, "date": "2024-11-05T00:00:00Z"},
                {"name": "Salário", "type": "entrada", "amount": 5000, "date": "2024-11-01T00:00:00Z"}
            ]"#,
        )
        .unwrap();

        let first = store.load().unwrap();
        assert_eq!(first.len(), 2);

        // Backfilled ids are persisted, so a second load sees the same ones
        let second = store.load().unwrap();
        assert_eq!(first[0].id, second[0].id);
        assert_eq!(first[1].id, second[1].id);

        // And the record is now deletable
        assert!(store.remove(first[0].id).unwrap());
        let remaining = store.load().unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].name, "Salário");
    }

    #[test]
    fn test_persisted_layout() {
        let (temp_dir, store) = create_test_store();

        store
            .append(sample("Mercado", TransactionKind::Expense, 30000))
            .unwrap();

        let raw = fs::read_to_string(temp_dir.path().join("transactions.json")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();

        let records = value.as_array().expect("ledger should be a JSON array");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["type"], "saida");
        assert_eq!(records[0]["amount"], 300);
        assert!(records[0]["id"].is_string());
    }
}
