//! Flat-file snapshot store for the League champion statistics CLI
//!
//! This module provides a clean abstraction over the snapshot directory,
//! organized into logical components:
//! - `store`: root layout, path helpers, and line-file primitives
//! - `queries`: per-table read/write operations and the cached-read
//!   `SnapshotSource` implementation
//!
//! Every file is UTF-8 text with one record per row and no header row; the
//! per-champion files share one alphabetical row order, which is the store's
//! only cross-file contract.

pub mod queries;
pub mod store;

#[cfg(test)]
mod tests;

pub use store::DataStore;
