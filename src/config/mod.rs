//! Configuration for carteira-cli
//!
//! The only configuration this application needs is where its data lives.

pub mod paths;

pub use paths::CarteiraPaths;
