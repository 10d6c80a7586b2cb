//! Service layer for carteira-cli
//!
//! Provides business logic on top of the storage layer, handling
//! validation before anything reaches the store.

pub mod transaction;

pub use transaction::{CreateTransactionInput, TransactionService};
