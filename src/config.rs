use std::collections::HashSet;

/// Extensions eligible for archiving, compared case-insensitively.
pub const DEFAULT_INCLUDE_EXTENSIONS: &[&str] = &[
    ".js", ".jsx", ".ts", ".tsx", ".css", ".scss", ".json", ".md", ".txt", ".config", ".html",
];

/// Directory names pruned before the walker descends into them.
pub const DEFAULT_EXCLUDE_DIRS: &[&str] = &["node_modules", ".next", "build", "dist"];

/// File names skipped wherever they appear as a path segment.
pub const DEFAULT_EXCLUDE_FILES: &[&str] = &["package-lock.json", "yarn.lock"];

pub const DEFAULT_OUTPUT_FILE: &str = "project_code_archive.txt";

pub const DEFAULT_TOKEN_MODEL: &str = "gpt-4";

#[derive(Debug, Clone)]
pub struct ArchiverConfig {
    /// Lowercase extensions including the leading dot.
    pub include_extensions: HashSet<String>,
    pub exclude_dirs: HashSet<String>,
    pub exclude_files: HashSet<String>,
    /// Visit siblings in file-name order instead of directory-listing order.
    pub sort_entries: bool,
    /// Model whose tokenizer is used for the run summary. `None` skips token counting.
    pub token_model: Option<String>,
}

impl ArchiverConfig {
    pub fn new<I, D, F>(include_extensions: I, exclude_dirs: D, exclude_files: F) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
        D: IntoIterator,
        D::Item: AsRef<str>,
        F: IntoIterator,
        F::Item: AsRef<str>,
    {
        ArchiverConfig {
            include_extensions: include_extensions
                .into_iter()
                .map(|ext| normalize_extension(ext.as_ref()))
                .collect(),
            exclude_dirs: exclude_dirs
                .into_iter()
                .map(|d| d.as_ref().to_owned())
                .collect(),
            exclude_files: exclude_files
                .into_iter()
                .map(|f| f.as_ref().to_owned())
                .collect(),
            sort_entries: true,
            token_model: None,
        }
    }

    pub fn with_sort_entries(mut self, sort_entries: bool) -> Self {
        self.sort_entries = sort_entries;
        self
    }

    pub fn with_token_model(mut self, model: Option<String>) -> Self {
        self.token_model = model;
        self
    }
}

impl Default for ArchiverConfig {
    fn default() -> Self {
        ArchiverConfig::new(
            DEFAULT_INCLUDE_EXTENSIONS,
            DEFAULT_EXCLUDE_DIRS,
            DEFAULT_EXCLUDE_FILES,
        )
        .with_token_model(Some(DEFAULT_TOKEN_MODEL.to_owned()))
    }
}

/// Lowercases an extension and makes sure it carries a leading dot.
pub fn normalize_extension(ext: &str) -> String {
    let lower = ext.to_lowercase();
    if lower.starts_with('.') {
        lower
    } else {
        format!(".{}", lower)
    }
}
