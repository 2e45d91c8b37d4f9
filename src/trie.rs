use std::collections::HashMap;
use std::path::Path;
use tracing::trace;

/// Size of one archived block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FileStats {
    pub bytes: usize,
    pub tokens: Option<usize>,
}

/// Represents a node in a trie of relative path components.
#[derive(Default)]
pub struct TrieNode {
    pub children: HashMap<String, TrieNode>,
    pub stats: Option<FileStats>,
}

impl TrieNode {
    pub fn new() -> Self {
        TrieNode::default()
    }

    /// Sums bytes and tokens over the subtree. Tokens stay `None` unless some leaf counted them.
    pub fn calculate_totals(&self) -> FileStats {
        let own = self.stats.unwrap_or_default();
        self.children
            .values()
            .map(TrieNode::calculate_totals)
            .fold(own, |acc, child| FileStats {
                bytes: acc.bytes + child.bytes,
                tokens: match (acc.tokens, child.tokens) {
                    (None, None) => None,
                    (a, b) => Some(a.unwrap_or(0) + b.unwrap_or(0)),
                },
            })
    }
}

#[derive(Default)]
pub struct Trie {
    root: TrieNode,
}

impl Trie {
    pub fn new() -> Self {
        Trie::default()
    }

    /// Inserts a relative path with its stats into the trie.
    pub fn insert(&mut self, path: &Path, stats: FileStats) {
        trace!("Inserting path: {:?} with {:?}", path, stats);
        let mut current_node = &mut self.root;
        for component in path.iter() {
            let component_str = component.to_string_lossy().into_owned();
            current_node = current_node
                .children
                .entry(component_str)
                .or_insert_with(TrieNode::new);
        }
        if current_node.stats.is_some() {
            trace!("Overwriting existing stats for path: {:?}", path);
        }
        current_node.stats = Some(stats);
    }

    pub fn get_root(&self) -> &TrieNode {
        &self.root
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn stats(bytes: usize, tokens: Option<usize>) -> FileStats {
        FileStats { bytes, tokens }
    }

    #[test]
    fn test_totals_roll_up_through_directories() {
        let mut trie = Trie::new();
        trie.insert(&PathBuf::from("src/app.js"), stats(10, Some(3)));
        trie.insert(&PathBuf::from("src/lib/util.js"), stats(5, Some(2)));
        trie.insert(&PathBuf::from("README.md"), stats(7, Some(1)));

        let root = trie.get_root();
        assert_eq!(root.calculate_totals(), stats(22, Some(6)));

        let src = &root.children["src"];
        assert!(src.stats.is_none());
        assert_eq!(src.calculate_totals(), stats(15, Some(5)));
        assert_eq!(src.children["app.js"].stats, Some(stats(10, Some(3))));
    }

    #[test]
    fn test_tokens_absent_when_not_counted() {
        let mut trie = Trie::new();
        trie.insert(&PathBuf::from("a.md"), stats(4, None));
        trie.insert(&PathBuf::from("b.md"), stats(6, None));
        assert_eq!(trie.get_root().calculate_totals(), stats(10, None));
    }
}
