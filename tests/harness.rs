//! Test harness for codetree integration tests

use std::path::Path;

use assert_cmd::Command;

pub use codetree::test_utils::TestTree;

/// Build a `codetree` command running inside `dir` with a clean color environment.
pub fn codetree_cmd(dir: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_codetree"));
    cmd.current_dir(dir)
        .env_remove("FORCE_COLOR")
        .env_remove("NO_COLOR")
        .env_remove("RUST_LOG");
    cmd
}

/// Run codetree and return (stdout, stderr, success).
pub fn run_codetree(dir: &Path, args: &[&str]) -> (String, String, bool) {
    let output = codetree_cmd(dir)
        .args(args)
        .output()
        .expect("Failed to run codetree");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let success = output.status.success();

    (stdout, stderr, success)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_harness_creates_project_dir() {
        let tree = TestTree::new();
        assert!(tree.path().is_dir());
        assert!(tree.path().ends_with(TestTree::ROOT_NAME));
    }

    #[test]
    fn test_harness_add_file() {
        let tree = TestTree::new();
        let file_path = tree.add_file("src/main.rs", "fn main() {}");
        assert!(file_path.exists());
    }
}
