//! Code file classification by name and extension
//!
//! The classifier decides whether a file counts as "code" for `--only-code`.
//! It never opens the file: only the name is inspected.

use std::collections::BTreeSet;
use std::path::Path;

/// Extensions treated as code out of the box.
///
/// Kept verbatim for output compatibility. Every entry is lowercase and
/// dot-prefixed.
#[rustfmt::skip]
pub const DEFAULT_CODE_EXTENSIONS: &[&str] = &[
    ".c", ".h", ".cpp", ".hpp", ".cc", ".hh", ".m", ".mm",
    ".py", ".ipynb",
    ".js", ".jsx", ".ts", ".tsx",
    ".java", ".kt", ".kts",
    ".go", ".rs", ".rb", ".php", ".swift", ".cs",
    ".html", ".htm", ".css", ".scss", ".sass",
    ".sql", ".yml", ".yaml", ".toml", ".ini", ".md", ".json", ".xml",
    ".sh", ".bash", ".zsh", ".ps1", ".bat", ".make", ".mk", ".gradle", ".dockerfile", ".env",
];

/// Conventional build/container manifests that carry no extension.
const SPECIAL_NAMES: &[&str] = &["makefile", "dockerfile"];

/// Set of normalized (lowercase, dot-prefixed) extensions.
///
/// Always starts from [`DEFAULT_CODE_EXTENSIONS`]; user additions are
/// normalized on insertion. Each set is an independent copy, so extending
/// one never leaks into another.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionSet {
    exts: BTreeSet<String>,
}

impl ExtensionSet {
    /// The default set with no additions.
    pub fn new() -> Self {
        Self {
            exts: DEFAULT_CODE_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
        }
    }

    /// The default set plus `extra`, each normalized with [`normalize_extension`].
    ///
    /// # Examples
    ///
    /// ```
    /// use codetree::classify::ExtensionSet;
    ///
    /// let exts = ExtensionSet::with_extra(["tex", ".R", "  "]);
    /// assert!(exts.contains(".tex"));
    /// assert!(exts.contains(".r"));
    /// assert!(exts.contains(".rs"));
    /// ```
    pub fn with_extra<I, S>(extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::new();
        set.extend(extra);
        set
    }

    /// Add one extension. Returns `false` if it was empty or already present.
    pub fn insert(&mut self, raw: &str) -> bool {
        match normalize_extension(raw) {
            Some(ext) => self.exts.insert(ext),
            None => false,
        }
    }

    /// Check membership of an already-normalized extension.
    pub fn contains(&self, ext: &str) -> bool {
        self.exts.contains(ext)
    }

}

impl Default for ExtensionSet {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: AsRef<str>> Extend<S> for ExtensionSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for raw in iter {
            self.insert(raw.as_ref());
        }
    }
}

/// Normalize a user-supplied extension: trim, lowercase, dot-prefix.
///
/// Returns `None` for blank input.
///
/// # Examples
///
/// ```
/// use codetree::classify::normalize_extension;
///
/// assert_eq!(normalize_extension("TeX"), Some(".tex".to_string()));
/// assert_eq!(normalize_extension(" .r "), Some(".r".to_string()));
/// assert_eq!(normalize_extension(""), None);
/// ```
pub fn normalize_extension(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    let lower = trimmed.to_lowercase();
    if lower.starts_with('.') {
        Some(lower)
    } else {
        Some(format!(".{}", lower))
    }
}

/// Final extension of a file name, lowercase and dot-prefixed.
///
/// Leading dots never start an extension, so `.env` and `..rs` have none
/// while `app.env` has `.env`. A trailing dot yields the bare `"."` extension.
pub fn extension_of(name: &str) -> Option<String> {
    let ext = Path::new(name.trim_start_matches('.')).extension()?;
    Some(format!(".{}", ext.to_string_lossy().to_lowercase()))
}

/// Check whether `name` looks like a source/config file.
///
/// True when the lowercase name is one of the special extensionless
/// manifests (`Makefile`, `Dockerfile`) or its final extension is in `exts`.
///
/// # Examples
///
/// ```
/// use codetree::classify::{ExtensionSet, is_code_file};
///
/// let exts = ExtensionSet::new();
/// assert!(is_code_file("main.RS", &exts));
/// assert!(is_code_file("Makefile", &exts));
/// assert!(!is_code_file("notes.log", &exts));
/// assert!(!is_code_file(".env", &exts));
/// ```
pub fn is_code_file(name: &str, exts: &ExtensionSet) -> bool {
    let lower = name.to_lowercase();
    if SPECIAL_NAMES.contains(&lower.as_str()) {
        return true;
    }
    extension_of(&lower).is_some_and(|ext| exts.contains(&ext))
}
