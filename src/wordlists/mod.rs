//! Word lists for the daily round
//!
//! The catalog of legal words plus the built-in list compiled into the binary.

mod catalog;
mod embedded;

pub use catalog::{CatalogError, WordCatalog};
pub use embedded::{FALLBACK, FALLBACK_COUNT};
