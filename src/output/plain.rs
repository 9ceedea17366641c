//! Plain-text formatter that renders the tree into memory

use std::io;

use crate::tree::TreeOutput;

use super::{connector, summary_line};

/// Collects the rendered tree, uncolored, into a `String`.
#[derive(Debug, Default)]
pub struct PlainFormatter {
    buffer: String,
}

impl PlainFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    pub fn into_string(self) -> String {
        self.buffer
    }
}

impl TreeOutput for PlainFormatter {
    fn output_root(&mut self, name: &str) -> io::Result<()> {
        self.buffer.push_str(name);
        self.buffer.push_str("/\n");
        Ok(())
    }

    fn output_node(
        &mut self,
        name: &str,
        is_dir: bool,
        is_last: bool,
        prefix: &str,
    ) -> io::Result<()> {
        self.buffer.push_str(prefix);
        self.buffer.push_str(connector(is_last));
        self.buffer.push_str(name);
        if is_dir {
            self.buffer.push('/');
        }
        self.buffer.push('\n');
        Ok(())
    }

    fn finish(&mut self, dir_count: usize, file_count: usize) -> io::Result<()> {
        self.buffer.push('\n');
        self.buffer.push_str(&summary_line(dir_count, file_count));
        self.buffer.push('\n');
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_formatter_renders_nodes() {
        let mut f = PlainFormatter::new();
        f.output_root("project").unwrap();
        f.output_node("app", true, false, "  ").unwrap();
        f.output_node("index.php", false, true, "  ").unwrap();
        f.finish(1, 1).unwrap();

        assert_eq!(
            f.as_str(),
            "project/\n  ├── app/\n  └── index.php\n\n1 directories, 1 files\n"
        );
    }
}
