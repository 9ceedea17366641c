//! Codebundle - print a project tree and bundle its source into size-capped text chunks

pub mod config;
pub mod error;
pub mod export;
pub mod filter;
pub mod output;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use config::BundleConfig;
pub use error::{BundleError, Result};
pub use export::{ChunkWriter, ExportStats, ExportSummary, Exporter, SkippedFile, format_block};
pub use filter::EntryFilter;
pub use output::{ConsoleFormatter, PlainFormatter};
pub use tree::{TreeOutput, TreeWalker};
