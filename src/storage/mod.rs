//! Storage layer for carteira-cli
//!
//! A single JSON file holds the full transaction list; every operation
//! reads (and for mutations rewrites) the whole list.

pub mod file_io;
pub mod transactions;

pub use file_io::{read_json, write_json_atomic};
pub use transactions::TransactionStore;
