//! Shared path helpers for tree walking

use std::collections::BTreeSet;
use std::io;
use std::path::{Component, Path, PathBuf};

/// Resolve `path` against the current directory and fold `.`/`..` lexically.
///
/// Symlinks are left alone, so the root keeps the name the user typed.
pub fn absolute_path(path: &Path) -> io::Result<PathBuf> {
    let path = if path.as_os_str().is_empty() {
        Path::new(".")
    } else {
        path
    };
    let joined = std::path::absolute(path)?;

    let mut normalized = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other),
        }
    }
    Ok(normalized)
}

/// Base name of a path; empty for a filesystem root.
pub fn base_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default()
}

/// Dotfiles and dotfolders.
pub fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}

/// Check if any component of `path` is exactly one of `names`.
pub fn has_ignored_segment(path: &Path, names: &BTreeSet<String>) -> bool {
    if names.is_empty() {
        return false;
    }
    path.components().any(|component| match component {
        Component::Normal(segment) => names.contains(&*segment.to_string_lossy()),
        _ => false,
    })
}
