use crate::config::ArchiverConfig;
use std::path::{Component, Path};
use tracing::{debug, trace};

/// Applies the inclusion and exclusion sets of an [`ArchiverConfig`] to walked entries.
#[derive(Clone, Copy)]
pub struct EntryFilter<'a> {
    config: &'a ArchiverConfig,
}

impl<'a> EntryFilter<'a> {
    pub fn new(config: &'a ArchiverConfig) -> Self {
        debug!(
            "Using filters: extensions={:?} excluded dirs={:?} excluded files={:?}",
            config.include_extensions, config.exclude_dirs, config.exclude_files
        );
        EntryFilter { config }
    }

    /// True when a directory with this name must not be descended into.
    pub fn is_pruned_dir(&self, name: &str) -> bool {
        self.config.exclude_dirs.contains(name)
    }

    /// True when any segment of the relative path equals an excluded file name.
    ///
    /// This is a segment match, so a directory named like an excluded file
    /// hides everything below it.
    pub fn has_excluded_segment<P: AsRef<Path>>(&self, relative_path: P) -> bool {
        relative_path.as_ref().components().any(|c| match c {
            Component::Normal(segment) => self
                .config
                .exclude_files
                .contains(&*segment.to_string_lossy()),
            _ => false,
        })
    }

    pub fn has_included_extension<P: AsRef<Path>>(&self, path: P) -> bool {
        match path.as_ref().extension() {
            Some(ext) => {
                let ext = format!(".{}", ext.to_string_lossy().to_lowercase());
                self.config.include_extensions.contains(&ext)
            }
            None => false,
        }
    }

    /// Full file check: no excluded segment and an included extension.
    pub fn should_archive<P: AsRef<Path>>(&self, relative_path: P) -> bool {
        let path = relative_path.as_ref();
        if self.has_excluded_segment(path) {
            trace!("Skipping excluded file: {}", path.display());
            return false;
        }
        if !self.has_included_extension(path) {
            trace!("Skipping file with unlisted extension: {}", path.display());
            return false;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_extension_match_is_case_insensitive() {
        let config = ArchiverConfig::default();
        let filter = EntryFilter::new(&config);
        assert!(filter.has_included_extension("src/App.JS"));
        assert!(filter.has_included_extension("README.Md"));
        assert!(!filter.has_included_extension("main.rs"));
        assert!(!filter.has_included_extension("Makefile"));
    }

    #[test]
    fn test_only_last_extension_counts() {
        let config = ArchiverConfig::default();
        let filter = EntryFilter::new(&config);
        assert!(!filter.has_included_extension("src/app.test.js.lock"));
        assert!(filter.has_included_extension("webpack.config.js"));
        assert!(!filter.has_included_extension(".json"));
    }

    #[test]
    fn test_excluded_file_matches_any_segment() {
        let config = ArchiverConfig::default();
        let filter = EntryFilter::new(&config);
        assert!(filter.has_excluded_segment("package-lock.json"));
        assert!(filter.has_excluded_segment(PathBuf::from("nested").join("yarn.lock")));
        assert!(filter.has_excluded_segment(PathBuf::from("yarn.lock").join("inner.js")));
        assert!(!filter.has_excluded_segment(PathBuf::from("src").join("package.json")));
    }

    #[test]
    fn test_should_archive_combines_checks() {
        let config = ArchiverConfig::default();
        let filter = EntryFilter::new(&config);
        assert!(filter.should_archive(PathBuf::from("src").join("index.tsx")));
        assert!(!filter.should_archive("package-lock.json"));
        assert!(!filter.should_archive("image.png"));
    }

    #[test]
    fn test_pruned_dirs() {
        let config = ArchiverConfig::default();
        let filter = EntryFilter::new(&config);
        assert!(filter.is_pruned_dir("node_modules"));
        assert!(filter.is_pruned_dir(".next"));
        assert!(!filter.is_pruned_dir("src"));
        assert!(!filter.is_pruned_dir("Build"));
    }
}
