//! TreeWalker - streams a filtered directory listing to a `TreeOutput`

use std::fs::DirEntry;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{BundleError, Result};
use crate::filter::EntryFilter;

/// Indentation placed before the first level of children.
const BASE_PREFIX: &str = "  ";

/// Callback for tree output - receives node information for display.
pub trait TreeOutput {
    /// Render the root line. `name` is the root directory's base name.
    fn output_root(&mut self, name: &str) -> io::Result<()>;

    fn output_node(&mut self, name: &str, is_dir: bool, is_last: bool, prefix: &str)
    -> io::Result<()>;

    fn finish(&mut self, dir_count: usize, file_count: usize) -> io::Result<()>;
}

/// Tree walker that lists allowed subdirectories and files, in name order,
/// pruning excluded directories before they are read.
pub struct TreeWalker {
    filter: EntryFilter,
}

impl TreeWalker {
    pub fn new(filter: EntryFilter) -> Self {
        Self { filter }
    }

    /// Walk `root` and stream it to `output` - returns (dir_count, file_count).
    ///
    /// Directory listing failures are not recovered from.
    pub fn walk<O: TreeOutput>(&self, root: &Path, output: &mut O) -> Result<(usize, usize)> {
        output.output_root(&root_name(root))?;

        let mut counts = (0usize, 0usize);
        self.walk_dir(root, BASE_PREFIX, output, &mut counts)?;

        output.finish(counts.0, counts.1)?;
        Ok(counts)
    }

    fn walk_dir<O: TreeOutput>(
        &self,
        path: &Path,
        prefix: &str,
        output: &mut O,
        counts: &mut (usize, usize),
    ) -> Result<()> {
        let (dirs, files) = self.partition_entries(path)?;

        for (i, (name, dir_path)) in dirs.iter().enumerate() {
            let is_last = i == dirs.len() - 1 && files.is_empty();
            output.output_node(name, true, is_last, prefix)?;
            counts.0 += 1;

            // Listed, but never followed
            if dir_path.is_symlink() {
                debug!(path = %dir_path.display(), "not descending into symlinked directory");
                continue;
            }

            let child_prefix = child_prefix(prefix, is_last);
            self.walk_dir(dir_path, &child_prefix, output, counts)?;
        }

        for (i, name) in files.iter().enumerate() {
            let is_last = i == files.len() - 1;
            output.output_node(name, false, is_last, prefix)?;
            counts.1 += 1;
        }

        Ok(())
    }

    /// Read and sort a directory, splitting it into allowed subdirectories
    /// (with their paths) and allowed file names.
    fn partition_entries(&self, path: &Path) -> Result<(Vec<(String, PathBuf)>, Vec<String>)> {
        let entries = std::fs::read_dir(path).map_err(|e| BundleError::read_dir(path, e))?;

        let mut entries: Vec<DirEntry> = entries
            .collect::<io::Result<_>>()
            .map_err(|e| BundleError::read_dir(path, e))?;
        entries.sort_by_key(|a| a.file_name());

        let mut dirs = Vec::new();
        let mut files = Vec::new();

        for entry in entries {
            let entry_path = entry.path();
            let name = entry.file_name().to_string_lossy().to_string();

            if entry_path.is_dir() {
                if !self.filter.is_excluded_dir(&name) {
                    dirs.push((name, entry_path));
                }
            } else if entry_path.is_file() && self.filter.is_included_file(&name) {
                files.push(name);
            }
        }

        Ok((dirs, files))
    }
}

/// Base name of the root after making it absolute, so `.` renders as the
/// working directory's name.
fn root_name(root: &Path) -> String {
    let absolute = std::path::absolute(root).unwrap_or_else(|_| root.to_path_buf());
    absolute
        .file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| absolute.display().to_string())
}

/// Calculate the prefix for child entries
fn child_prefix(current_prefix: &str, is_last: bool) -> String {
    if is_last {
        format!("{}    ", current_prefix)
    } else {
        format!("{}│   ", current_prefix)
    }
}
