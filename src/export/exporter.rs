//! Exporter - walks the project and writes one block per included file

use std::cmp::Ordering;
use std::path::{Path, PathBuf};

use ignore::WalkBuilder;
use tracing::{debug, info, warn};

use crate::config::BundleConfig;
use crate::error::Result;
use crate::filter::EntryFilter;

use super::writer::ChunkWriter;

/// A file that matched the filters but could not be read as text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedFile {
    pub relative_path: String,
    pub error: String,
}

/// Counters for one export pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportStats {
    pub files_written: usize,
    pub skipped: Vec<SkippedFile>,
}

/// Outcome of [`Exporter::run`].
#[derive(Debug, Clone)]
pub struct ExportSummary {
    /// Chunk paths in the order they were written
    pub chunks: Vec<PathBuf>,
    pub stats: ExportStats,
}

impl ExportSummary {
    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }
}

/// Build the block written for one file: a path header, the content, and a blank line.
pub fn format_block(relative_path: &str, content: &str) -> String {
    format!("# {}\n{}\n\n", relative_path, content)
}

pub struct Exporter {
    config: BundleConfig,
    filter: EntryFilter,
}

impl Exporter {
    pub fn new(config: BundleConfig) -> Self {
        let filter = EntryFilter::from_config(&config);
        Self { config, filter }
    }

    /// Export into chunks created under `out_dir`, collecting skipped files.
    pub fn run(&self, out_dir: &Path) -> Result<ExportSummary> {
        let mut writer =
            ChunkWriter::create(out_dir, &self.config.output_prefix, self.config.char_limit)?;
        let stats = self.export_into(&mut writer, |_| {})?;
        let chunks = writer.finish()?;

        info!(
            chunks = chunks.len(),
            files = stats.files_written,
            skipped = stats.skipped.len(),
            "export complete"
        );
        Ok(ExportSummary { chunks, stats })
    }

    /// Walk the configured root and write every included file to `writer`.
    ///
    /// Unreadable files are passed to `on_skip` as they are met and the walk
    /// continues. Walk failures abort; the caller still owns `writer` and is
    /// responsible for finishing it.
    pub fn export_into<F>(&self, writer: &mut ChunkWriter, mut on_skip: F) -> Result<ExportStats>
    where
        F: FnMut(&SkippedFile),
    {
        let root = self.config.root.as_path();
        let mut stats = ExportStats::default();

        for result in self.build_walker(root) {
            let entry = result?;

            // The root itself is never a candidate, and symlinked
            // directories are reported but not followed.
            if entry.depth() == 0 || !entry.path().is_file() {
                continue;
            }

            let name = entry.file_name().to_string_lossy();
            if !self.filter.is_included_file(&name) {
                continue;
            }

            let relative_path = relative_display(entry.path(), root);
            match std::fs::read_to_string(entry.path()) {
                Ok(code) => {
                    let block = format_block(&relative_path, &code);
                    writer.write_block(&block)?;
                    stats.files_written += 1;
                    debug!(path = %relative_path, chunk = writer.chunk_count(), "wrote block");
                }
                Err(e) => {
                    warn!(path = %relative_path, error = %e, "skipping unreadable file");
                    let skipped = SkippedFile {
                        relative_path,
                        error: e.to_string(),
                    };
                    on_skip(&skipped);
                    stats.skipped.push(skipped);
                }
            }
        }

        Ok(stats)
    }

    /// Walk with no ignore-file handling: files before subdirectories, each
    /// in name order, and excluded directories pruned before descent.
    fn build_walker(&self, root: &Path) -> ignore::Walk {
        let filter = self.filter.clone();
        WalkBuilder::new(root)
            .standard_filters(false)
            .follow_links(false)
            .sort_by_file_path(files_before_dirs)
            .filter_entry(move |entry| {
                let is_dir = entry.file_type().is_some_and(|t| t.is_dir());
                !(is_dir && filter.is_excluded_dir(&entry.file_name().to_string_lossy()))
            })
            .build()
    }
}

fn files_before_dirs(a: &Path, b: &Path) -> Ordering {
    a.is_dir()
        .cmp(&b.is_dir())
        .then_with(|| a.file_name().cmp(&b.file_name()))
}

fn relative_display(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .to_string_lossy()
        .to_string()
}
