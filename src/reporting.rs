use crate::archive::ArchiveReport;
use crate::trie::{FileStats, Trie, TrieNode};
use std::path::Path;
use tracing::{debug, info, warn};

/// Logs the archived files as a tree with per-directory totals, then any per-file failures.
pub fn print_stats(report: &ArchiveReport) {
    debug!("Printing statistics for {} archived files", report.archived.len());
    let mut trie = Trie::new();
    for file in &report.archived {
        trie.insert(&file.relative_path, file.stats);
    }

    let totals = trie.get_root().calculate_totals();
    info!(
        "Overall: {} files ({})",
        report.archived.len(),
        describe(&totals)
    );
    print_tree(trie.get_root(), "");

    if !report.failures.is_empty() {
        warn!("{} files could not be archived:", report.failures.len());
        for failure in &report.failures {
            warn!("  {}: {}", failure.path.display(), failure.reason);
        }
    }
}

fn print_tree(node: &TrieNode, prefix: &str) {
    let mut children: Vec<_> = node.children.iter().collect();
    children.sort_by(|a, b| a.0.cmp(b.0));

    for (i, (name, child)) in children.iter().enumerate() {
        let is_last_child = i == children.len() - 1;
        let connector = if is_last_child { "┗━━" } else { "┣━━" };

        match child.stats {
            Some(stats) => info!(
                "{}{} {} {} ({})",
                prefix,
                connector,
                get_file_icon(Path::new(name.as_str())),
                name,
                describe(&stats)
            ),
            None => {
                info!(
                    "{}{}📂 {} ({})",
                    prefix,
                    connector,
                    name,
                    describe(&child.calculate_totals())
                );
                let new_prefix = format!("{}{}    ", prefix, if is_last_child { " " } else { "┃" });
                print_tree(child, &new_prefix);
            }
        }
    }
}

fn describe(stats: &FileStats) -> String {
    match stats.tokens {
        Some(tokens) => format!("{} bytes, {} tokens", stats.bytes, tokens),
        None => format!("{} bytes", stats.bytes),
    }
}

/// Icon for the file types the archiver picks up by default.
pub fn get_file_icon(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase());
    match ext.as_deref() {
        Some("js") => "🟨",
        Some("jsx") => "⚛️",
        Some("ts") | Some("tsx") => "🔷",
        Some("html") => "🌐",
        Some("css") | Some("scss") => "🎨",
        Some("json") => "🔖",
        Some("config") => "⚙️",
        Some("md") => "📝",
        Some("txt") => "📄",
        _ => "📄",
    }
}
