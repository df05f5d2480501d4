//! Directory tree walking logic
//!
//! `TreeWalker` lists a directory depth-first, filters and sorts each level,
//! and produces one `TreeRow` per rendered line. `list_tree` is the plain
//! string form of the same walk.

mod config;
mod row;
mod utils;
mod walker;

// Re-export public types
pub use config::{DEFAULT_IGNORE, TreeConfig, split_list};
pub use row::{BLANK, BRANCH, CORNER, PIPE, RowKind, TreeRow, child_prefix};
pub use utils::absolute_path;
pub use walker::{TreeWalker, list_tree};
