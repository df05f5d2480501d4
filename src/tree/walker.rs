//! TreeWalker - depth-first listing into rendered rows

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::classify::is_code_file;
use crate::error::{Result, TreeError};

use super::config::TreeConfig;
use super::row::{TreeRow, child_prefix};
use super::utils::{absolute_path, base_name, has_ignored_segment, is_hidden};

/// A directory entry as seen while listing its parent.
#[derive(Debug)]
struct ListedEntry {
    name: String,
    path: PathBuf,
    /// Follows symlinks.
    is_dir: bool,
    /// Follows symlinks.
    is_file: bool,
    is_symlink: bool,
}

/// Walks a directory tree and produces its rows in pre-order.
pub struct TreeWalker {
    config: TreeConfig,
}

impl TreeWalker {
    pub fn new(config: TreeConfig) -> Self {
        Self { config }
    }

    /// Walk `root` and return every row, root line first.
    ///
    /// Fails with [`TreeError::NotFound`] if `root` does not exist. Subdirectories
    /// that cannot be read become `[denied]` rows instead of errors.
    pub fn walk(&self, root: &Path) -> Result<Vec<TreeRow>> {
        let root = absolute_path(root).map_err(|e| TreeError::io(root, e))?;
        if !root.exists() {
            return Err(TreeError::NotFound(root));
        }

        log::debug!("walking {} with {:?}", root.display(), self.config);

        let mut rows = vec![TreeRow::root(base_name(&root))];
        if root.is_dir() {
            self.walk_dir(&root, "", 0, &mut Vec::new(), &mut rows)?;
        } else {
            log::info!("{} is not a directory, nothing to list", root.display());
        }
        Ok(rows)
    }

    fn walk_dir(
        &self,
        dir: &Path,
        prefix: &str,
        depth: usize,
        open_dirs: &mut Vec<PathBuf>,
        rows: &mut Vec<TreeRow>,
    ) -> Result<()> {
        let entries = match read_entries(dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::PermissionDenied => {
                log::debug!("cannot list {}: {}", dir.display(), e);
                rows.push(TreeRow::denied(prefix, base_name(dir)));
                return Ok(());
            }
            Err(e) => return Err(TreeError::io(dir, e)),
        };

        if self.config.at_max_depth(depth) {
            return Ok(());
        }

        let entries = self.filter_and_sort(entries);
        let count = entries.len();
        open_dirs.push(fs::canonicalize(dir).unwrap_or_else(|_| dir.to_path_buf()));

        for (idx, entry) in entries.iter().enumerate() {
            let is_last = idx + 1 == count;
            rows.push(TreeRow::entry(prefix, entry.name.as_str(), entry.is_dir, is_last));

            if !entry.is_dir || self.config.at_max_depth(depth + 1) {
                continue;
            }
            if entry.is_symlink && loops_back(&entry.path, open_dirs) {
                log::trace!("not following looping symlink {}", entry.path.display());
                continue;
            }
            let child = child_prefix(prefix, is_last);
            self.walk_dir(&entry.path, &child, depth + 1, open_dirs, rows)?;
        }
        open_dirs.pop();
        Ok(())
    }

    /// Drop hidden, ignored and (in code-only mode) non-code entries, then
    /// order directories first and names case-insensitively.
    fn filter_and_sort(&self, entries: Vec<ListedEntry>) -> Vec<ListedEntry> {
        let mut kept: Vec<ListedEntry> = entries
            .into_iter()
            .filter(|entry| self.config.show_hidden || !is_hidden(&entry.name))
            .filter(|entry| !has_ignored_segment(&entry.path, &self.config.ignore))
            .filter(|entry| {
                !(self.config.only_code
                    && entry.is_file
                    && !is_code_file(&entry.name, &self.config.extensions))
            })
            .collect();

        kept.sort_by_cached_key(|entry| {
            (!entry.is_dir, entry.name.to_lowercase(), entry.name.clone())
        });
        kept
    }
}

/// List the immediate children of `dir`.
fn read_entries(dir: &Path) -> io::Result<Vec<ListedEntry>> {
    let mut entries = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        let is_symlink = entry.file_type().is_ok_and(|t| t.is_symlink());
        entries.push(ListedEntry {
            name: entry.file_name().to_string_lossy().to_string(),
            is_dir: path.is_dir(),
            is_file: path.is_file(),
            is_symlink,
            path,
        });
    }
    Ok(entries)
}

/// Whether the symlink at `link` resolves to one of `open_dirs` or to an
/// ancestor of one. Unresolvable links count as loops.
fn loops_back(link: &Path, open_dirs: &[PathBuf]) -> bool {
    match fs::canonicalize(link) {
        Ok(target) => open_dirs.iter().any(|open| open.starts_with(&target)),
        Err(_) => true,
    }
}

/// Render the tree under `root` as plain text lines.
///
/// # Examples
///
/// ```no_run
/// use codetree::{TreeConfig, list_tree};
///
/// let config = TreeConfig::default().with_max_depth(Some(1));
/// for line in list_tree(".", &config)? {
///     println!("{line}");
/// }
/// # Ok::<(), codetree::TreeError>(())
/// ```
pub fn list_tree(root: impl AsRef<Path>, config: &TreeConfig) -> Result<Vec<String>> {
    let rows = TreeWalker::new(config.clone()).walk(root.as_ref())?;
    Ok(rows.iter().map(ToString::to_string).collect())
}
