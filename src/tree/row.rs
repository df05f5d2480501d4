//! Rendered rows of the tree diagram

use std::fmt;

/// Connector for an entry followed by more siblings.
pub const BRANCH: &str = "├── ";
/// Connector for the last entry at a level.
pub const CORNER: &str = "└── ";
/// Indentation under a non-last sibling.
pub const PIPE: &str = "│   ";
/// Indentation under the last sibling.
pub const BLANK: &str = "    ";

/// What a row stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    /// The first line: the root directory name.
    Root,
    Dir,
    /// Anything that is not a directory, including dangling symlinks.
    File,
    /// A directory whose listing was refused by the OS.
    Denied,
}

/// One line of the tree: indentation prefix, connector, name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeRow {
    pub prefix: String,
    pub name: String,
    pub kind: RowKind,
    pub is_last: bool,
}

impl TreeRow {
    pub fn root(name: impl Into<String>) -> Self {
        Self {
            prefix: String::new(),
            name: name.into(),
            kind: RowKind::Root,
            is_last: true,
        }
    }

    pub fn entry(prefix: &str, name: impl Into<String>, is_dir: bool, is_last: bool) -> Self {
        Self {
            prefix: prefix.to_string(),
            name: name.into(),
            kind: if is_dir { RowKind::Dir } else { RowKind::File },
            is_last,
        }
    }

    /// Placeholder for a directory that could not be listed. Always terminal.
    pub fn denied(prefix: &str, name: impl Into<String>) -> Self {
        Self {
            prefix: prefix.to_string(),
            name: name.into(),
            kind: RowKind::Denied,
            is_last: true,
        }
    }

    pub fn connector(&self) -> &'static str {
        match self.kind {
            RowKind::Root => "",
            RowKind::Denied => CORNER,
            RowKind::Dir | RowKind::File if self.is_last => CORNER,
            RowKind::Dir | RowKind::File => BRANCH,
        }
    }

    /// Text after the connector: the name, decorated per kind.
    pub fn label(&self) -> String {
        match self.kind {
            RowKind::Root | RowKind::Dir => format!("{}/", self.name),
            RowKind::File => self.name.clone(),
            RowKind::Denied => format!("[denied] {}/", self.name),
        }
    }

    pub fn is_dir(&self) -> bool {
        matches!(self.kind, RowKind::Root | RowKind::Dir)
    }
}

impl fmt::Display for TreeRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.prefix, self.connector(), self.label())
    }
}

/// Prefix for the children of an entry rendered with `prefix`.
pub fn child_prefix(prefix: &str, is_last: bool) -> String {
    if is_last {
        format!("{}{}", prefix, BLANK)
    } else {
        format!("{}{}", prefix, PIPE)
    }
}
