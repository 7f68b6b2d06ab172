//! File locating and duplicate removal over a live filesystem.
//!
//! This crate is a library-level engine with two halves:
//! - staged exact-name search across priority roots and, failing that,
//!   across all mounted volumes in parallel, with a fuzzy-similarity
//!   fallback when exact matching finds nothing;
//! - a single-pass duplicate scanner that digests file contents and sends
//!   later copies of byte-identical files to the recycle bin.
//!
//! Every operation scans the filesystem fresh; no index or cache survives a
//! call. Per-entry I/O failures are skipped and tagged, never fatal to the
//! whole operation.

pub mod cancel;
pub mod catalog;
pub mod dedupe;
pub mod error;
pub mod roots;
pub mod search;
pub mod trash;
pub mod types;
pub mod volumes;

// Re-export main types
pub use catalog::Listing;
pub use dedupe::{DedupeOutcome, DeduplicationScanner};
pub use error::{EngineError, Result};
pub use search::{FileLocator, LocatorConfig};
pub use trash::{RecycleBin, SystemTrash};
pub use types::{FileRecord, Match, SkippedEntry};
