//! Tree output formatters
//!
//! - `ConsoleFormatter`: writes straight to stdout, with optional color
//! - `PlainFormatter`: collects the rendered tree into a `String`

mod console;
mod plain;

pub use console::ConsoleFormatter;
pub use plain::PlainFormatter;

/// Connector drawn before a node's name.
pub(crate) fn connector(is_last: bool) -> &'static str {
    if is_last { "└── " } else { "├── " }
}

/// Closing line printed after the tree.
pub(crate) fn summary_line(dir_count: usize, file_count: usize) -> String {
    format!("{} directories, {} files", dir_count, file_count)
}
