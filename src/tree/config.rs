//! Configuration types for the tree walker

use std::collections::BTreeSet;

use crate::classify::ExtensionSet;

/// Names skipped wherever they appear as a path component, unless the
/// caller supplies its own list.
pub const DEFAULT_IGNORE: &[&str] = &[
    "node_modules",
    ".git",
    ".venv",
    ".idea",
    ".vscode",
    "__pycache__",
];

/// Configuration for tree walking behavior.
#[derive(Debug, Clone)]
pub struct TreeConfig {
    /// Deepest level to list; `Some(0)` prints the root line only.
    pub max_depth: Option<usize>,
    /// Hide regular files the classifier does not recognize as code.
    pub only_code: bool,
    /// Exact path-segment names to exclude, along with their subtrees.
    pub ignore: BTreeSet<String>,
    pub extensions: ExtensionSet,
    pub show_hidden: bool,
}

impl TreeConfig {
    pub fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_only_code(mut self, only_code: bool) -> Self {
        self.only_code = only_code;
        self
    }

    /// Replace the ignore list. Blank names are dropped.
    pub fn with_ignore<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.ignore = names
            .into_iter()
            .map(|n| n.as_ref().trim().to_string())
            .filter(|n| !n.is_empty())
            .collect();
        self
    }

    pub fn with_extensions(mut self, extensions: ExtensionSet) -> Self {
        self.extensions = extensions;
        self
    }

    pub fn with_show_hidden(mut self, show_hidden: bool) -> Self {
        self.show_hidden = show_hidden;
        self
    }

    /// True once `depth` has reached the configured limit.
    pub fn at_max_depth(&self, depth: usize) -> bool {
        self.max_depth.is_some_and(|max| depth >= max)
    }
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            max_depth: None,
            only_code: false,
            ignore: DEFAULT_IGNORE.iter().map(|s| s.to_string()).collect(),
            extensions: ExtensionSet::new(),
            show_hidden: false,
        }
    }
}

/// Split a comma-separated CLI list into trimmed, non-empty items.
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}
