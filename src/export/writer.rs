//! ChunkWriter - the one open output chunk and its running character count

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{BundleError, Result};

/// Writes blocks into numbered chunk files, rotating on the character budget.
///
/// The open chunk is released when the writer is dropped, so an early
/// return still closes it. Call [`ChunkWriter::finish`] to surface flush errors.
pub struct ChunkWriter {
    dir: PathBuf,
    prefix: String,
    limit: usize,
    /// 1-based number of the open chunk
    index: usize,
    /// Characters written to the open chunk
    char_count: usize,
    current: BufWriter<File>,
    chunks: Vec<PathBuf>,
}

impl ChunkWriter {
    /// Create `<dir>/<prefix>_1.txt`, truncating any previous run's file.
    pub fn create(dir: impl Into<PathBuf>, prefix: impl Into<String>, limit: usize) -> Result<Self> {
        let dir = dir.into();
        let prefix = prefix.into();
        let path = chunk_path(&dir, &prefix, 1);
        let current = open_chunk(&path)?;

        Ok(Self {
            dir,
            prefix,
            limit,
            index: 1,
            char_count: 0,
            current,
            chunks: vec![path],
        })
    }

    /// Append a block, rotating first if it would push the open chunk past
    /// the limit. A block that alone exceeds the limit is written whole into
    /// a fresh chunk, even when that leaves the open chunk empty.
    pub fn write_block(&mut self, block: &str) -> Result<()> {
        let len = block.chars().count();

        if self.char_count + len > self.limit {
            self.rotate()?;
        }

        self.current
            .write_all(block.as_bytes())
            .map_err(|e| BundleError::chunk(self.current_path(), e))?;
        self.char_count += len;
        Ok(())
    }

    /// Close the open chunk and open the next numbered one.
    pub fn rotate(&mut self) -> Result<()> {
        self.current
            .flush()
            .map_err(|e| BundleError::chunk(self.current_path(), e))?;

        let next_index = self.index + 1;
        let path = chunk_path(&self.dir, &self.prefix, next_index);
        // Dropping the old writer closes its file
        self.current = open_chunk(&path)?;
        debug!(chunk = %path.display(), previous_chars = self.char_count, "rotated chunk");

        self.index = next_index;
        self.char_count = 0;
        self.chunks.push(path);
        Ok(())
    }

    /// Flush and close the open chunk, returning every chunk path in order.
    pub fn finish(mut self) -> Result<Vec<PathBuf>> {
        let path = self.current_path().to_path_buf();
        self.current
            .flush()
            .map_err(|e| BundleError::chunk(path, e))?;
        Ok(self.chunks)
    }

    pub fn current_path(&self) -> &Path {
        self.chunks
            .last()
            .map(PathBuf::as_path)
            .unwrap_or(self.dir.as_path())
    }

    pub fn chunk_count(&self) -> usize {
        self.index
    }

    pub fn char_count(&self) -> usize {
        self.char_count
    }
}

/// Path of chunk `index` (1-based): `<dir>/<prefix>_<index>.txt`.
pub fn chunk_path(dir: &Path, prefix: &str, index: usize) -> PathBuf {
    dir.join(format!("{}_{}.txt", prefix, index))
}

fn open_chunk(path: &Path) -> Result<BufWriter<File>> {
    File::create(path)
        .map(BufWriter::new)
        .map_err(|e| BundleError::chunk(path, e))
}
