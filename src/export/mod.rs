//! Export module for carteira-cli
//!
//! Renders the transaction list as the HTML report document that the
//! host PDF conversion step consumes.

pub mod html;

pub use html::{export_report, render_report};
