use crate::config::ArchiverConfig;
use crate::filter::EntryFilter;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

/// A file that passed every filter and is ready to be read.
#[derive(Debug, Clone)]
pub struct Candidate {
    pub path: PathBuf,
    pub relative_path: PathBuf,
}

/// Walks `root` depth-first and yields the files eligible for the archive.
///
/// Excluded directories are pruned before descending. Unreadable directories
/// are logged and skipped. Sibling order follows the directory listing unless
/// `config.sort_entries` is set.
pub fn walk_candidates<'a>(
    root: &'a Path,
    config: &'a ArchiverConfig,
) -> impl Iterator<Item = Candidate> + 'a {
    let filter = EntryFilter::new(config);

    let mut walker = WalkDir::new(root).min_depth(1).follow_links(false);
    if config.sort_entries {
        walker = walker.sort_by_file_name();
    }

    walker
        .into_iter()
        .filter_entry(move |entry| !is_pruned(entry, &filter))
        .filter_map(|result| match result {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!("Failed to access entry: {}", e);
                None
            }
        })
        .filter(is_file_like)
        .filter_map(move |entry| {
            let relative_path = match entry.path().strip_prefix(root) {
                Ok(rel) => rel.to_path_buf(),
                Err(e) => {
                    warn!("Entry {} is outside the root: {}", entry.path().display(), e);
                    return None;
                }
            };
            debug!("Visiting file: {}", relative_path.display());
            if !filter.should_archive(&relative_path) {
                return None;
            }
            Some(Candidate {
                path: entry.into_path(),
                relative_path,
            })
        })
}

fn is_pruned(entry: &DirEntry, filter: &EntryFilter<'_>) -> bool {
    if entry.depth() == 0 || !entry.file_type().is_dir() {
        return false;
    }
    let pruned = filter.is_pruned_dir(&entry.file_name().to_string_lossy());
    if pruned {
        debug!("Pruning directory: {}", entry.path().display());
    }
    pruned
}

/// Regular files, plus symlinks that do not resolve to a directory.
///
/// Dangling symlinks are kept so the read fails and gets reported.
fn is_file_like(entry: &DirEntry) -> bool {
    entry.file_type().is_file() || (entry.path_is_symlink() && !entry.path().is_dir())
}
