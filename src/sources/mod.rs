//! Source readers: scrapers for the champion wiki and the statistics site,
//! plus the snapshot seam the pipeline consumes tables through.

pub mod http;
pub mod opgg;
pub mod snapshot;
pub mod wiki;

pub use snapshot::{ScrapedSnapshot, SnapshotSource};
