//! Codetree - a pretty directory tree with box-drawing characters that can
//! narrow itself down to source and config files

pub mod classify;
pub mod error;
pub mod output;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use classify::{DEFAULT_CODE_EXTENSIONS, ExtensionSet, is_code_file};
pub use error::TreeError;
pub use output::{ConsoleFormatter, OutputConfig, emit, render_text, wrap_markdown};
pub use tree::{RowKind, TreeConfig, TreeRow, TreeWalker, list_tree};
