//! Bundle configuration and the built-in filter lists

use std::path::PathBuf;

/// Directory names that are never listed or exported.
pub const EXCLUDE_DIRS: &[&str] = &[
    "vendor",
    "storage",
    "bootstrap",
    "config",
    "database",
    "public",
    "resources",
    "routes",
    "tests",
    "__pycache__",
    "node_modules",
];

/// File names that are never listed or exported, even with a matching extension.
pub const EXCLUDE_FILES: &[&str] = &[
    "artisan",
    "composer.json",
    "composer.lock",
    "package.json",
    "webpack.mix.js",
    "yarn.lock",
    "phpunit.xml",
];

/// File name suffixes that select a file for listing and export.
pub const INCLUDE_EXTENSIONS: &[&str] = &[".php", ".js", ".vue", ".html", ".css", ".scss"];

/// Maximum number of characters accumulated in one chunk before rotating.
pub const CHAR_LIMIT: usize = 20_000;

/// Chunks are named `<prefix>_<N>.txt`.
pub const OUTPUT_FILE_PREFIX: &str = "project_code";

pub const ROOT_DIR: &str = ".";

/// Configuration shared by the tree printer and the exporter.
#[derive(Debug, Clone)]
pub struct BundleConfig {
    pub root: PathBuf,
    pub exclude_dirs: Vec<String>,
    pub exclude_files: Vec<String>,
    pub include_extensions: Vec<String>,
    /// Soft character budget per chunk. A single block larger than this
    /// is still written whole.
    pub char_limit: usize,
    pub output_prefix: String,
}

impl Default for BundleConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from(ROOT_DIR),
            exclude_dirs: to_owned_list(EXCLUDE_DIRS),
            exclude_files: to_owned_list(EXCLUDE_FILES),
            include_extensions: to_owned_list(INCLUDE_EXTENSIONS),
            char_limit: CHAR_LIMIT,
            output_prefix: OUTPUT_FILE_PREFIX.to_string(),
        }
    }
}

fn to_owned_list(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_uses_builtin_lists() {
        let config = BundleConfig::default();
        assert_eq!(config.root, PathBuf::from("."));
        assert_eq!(config.char_limit, 20_000);
        assert_eq!(config.output_prefix, "project_code");
        assert!(config.exclude_dirs.iter().any(|d| d == "node_modules"));
        assert!(config.exclude_files.iter().any(|f| f == "composer.lock"));
        assert_eq!(config.include_extensions.len(), INCLUDE_EXTENSIONS.len());
    }
}
