//! Name-based filtering shared by the tree printer and the exporter

use glob::Pattern;

use crate::config::BundleConfig;

/// A single exclusion entry. Matches a name exactly, or as a glob when the
/// entry parses as one.
#[derive(Debug, Clone)]
struct NamePattern {
    raw: String,
    glob: Option<Pattern>,
}

impl NamePattern {
    fn new(raw: &str) -> Self {
        Self {
            raw: raw.to_string(),
            glob: Pattern::new(raw).ok(),
        }
    }

    fn matches(&self, name: &str) -> bool {
        self.raw == name || self.glob.as_ref().is_some_and(|p| p.matches(name))
    }
}

/// Decides which directories are descended into and which files are kept.
#[derive(Debug, Clone)]
pub struct EntryFilter {
    exclude_dirs: Vec<NamePattern>,
    exclude_files: Vec<NamePattern>,
    include_extensions: Vec<String>,
}

impl EntryFilter {
    pub fn new<D, F, E>(exclude_dirs: D, exclude_files: F, include_extensions: E) -> Self
    where
        D: IntoIterator,
        D::Item: AsRef<str>,
        F: IntoIterator,
        F::Item: AsRef<str>,
        E: IntoIterator,
        E::Item: AsRef<str>,
    {
        Self {
            exclude_dirs: exclude_dirs
                .into_iter()
                .map(|d| NamePattern::new(d.as_ref()))
                .collect(),
            exclude_files: exclude_files
                .into_iter()
                .map(|f| NamePattern::new(f.as_ref()))
                .collect(),
            include_extensions: include_extensions
                .into_iter()
                .map(|e| e.as_ref().to_string())
                .collect(),
        }
    }

    pub fn from_config(config: &BundleConfig) -> Self {
        Self::new(
            &config.exclude_dirs,
            &config.exclude_files,
            &config.include_extensions,
        )
    }

    /// Check if a directory with this name must be skipped along with everything below it.
    pub fn is_excluded_dir(&self, name: &str) -> bool {
        self.exclude_dirs.iter().any(|p| p.matches(name))
    }

    pub fn is_excluded_file(&self, name: &str) -> bool {
        self.exclude_files.iter().any(|p| p.matches(name))
    }

    /// Plain, case-sensitive suffix test, so `.js` also selects `app.min.js`.
    pub fn has_included_extension(&self, name: &str) -> bool {
        self.include_extensions
            .iter()
            .any(|ext| name.ends_with(ext.as_str()))
    }

    /// Check if a file with this name is listed and exported.
    pub fn is_included_file(&self, name: &str) -> bool {
        self.has_included_extension(name) && !self.is_excluded_file(name)
    }
}

impl Default for EntryFilter {
    fn default() -> Self {
        Self::from_config(&BundleConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn js_filter() -> EntryFilter {
        EntryFilter::new(["node_modules", "build*"], ["webpack.mix.js"], [".js"])
    }

    #[test]
    fn test_excluded_dirs_match_exact_names() {
        let filter = js_filter();
        assert!(filter.is_excluded_dir("node_modules"));
        assert!(!filter.is_excluded_dir("node_modules_backup"));
        assert!(!filter.is_excluded_dir("src"));
    }

    #[test]
    fn test_excluded_dirs_match_globs() {
        let filter = js_filter();
        assert!(filter.is_excluded_dir("build"));
        assert!(filter.is_excluded_dir("build-cache"));
        assert!(!filter.is_excluded_dir("rebuild"));
    }

    #[test]
    fn test_extension_is_a_suffix_test() {
        let filter = js_filter();
        assert!(filter.has_included_extension("app.js"));
        assert!(filter.has_included_extension("app.min.js"));
        assert!(!filter.has_included_extension("app.json"));
        assert!(!filter.has_included_extension("APP.JS"));
    }

    #[test]
    fn test_excluded_file_overrides_extension() {
        let filter = js_filter();
        assert!(filter.is_included_file("main.js"));
        assert!(!filter.is_included_file("webpack.mix.js"));
        assert!(!filter.is_included_file("readme.md"));
    }

    #[test]
    fn test_default_filter() {
        let filter = EntryFilter::default();
        assert!(filter.is_excluded_dir("vendor"));
        assert!(filter.is_included_file("index.php"));
        assert!(filter.is_included_file("styles.scss"));
        assert!(!filter.is_included_file("package.json"));
        assert!(!filter.is_included_file("main.rs"));
    }

    #[test]
    fn test_invalid_glob_still_matches_exactly() {
        let filter = EntryFilter::new(["[broken"], Vec::<String>::new(), [".js"]);
        assert!(filter.is_excluded_dir("[broken"));
        assert!(!filter.is_excluded_dir("broken"));
    }
}
