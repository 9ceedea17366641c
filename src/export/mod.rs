//! Source export into size-capped text chunks
//!
//! `Exporter` walks the project and hands one block per included file to a
//! `ChunkWriter`, which owns the single open chunk and rotates to
//! `<prefix>_<N+1>.txt` when the next block would overflow the budget.

mod exporter;
mod writer;

pub use exporter::{ExportStats, ExportSummary, Exporter, SkippedFile, format_block};
pub use writer::ChunkWriter;
