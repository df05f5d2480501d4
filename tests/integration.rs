//! Integration tests for codetree

mod harness;

use harness::{TestTree, codetree_cmd, run_codetree};
use predicates::prelude::*;

#[test]
fn test_basic_tree_output() {
    let tree = TestTree::new();
    tree.add_file("b.txt", "");
    tree.add_dir("a");
    tree.add_file("c.py", "");

    let (stdout, _stderr, success) = run_codetree(tree.path(), &[]);
    assert!(success, "codetree should succeed");
    assert_eq!(stdout, "project/\n├── a/\n├── b.txt\n└── c.py\n");
}

#[test]
fn test_explicit_path_argument() {
    let tree = TestTree::new();
    tree.add_file("src/lib.rs", "");

    let parent = tree.path().parent().expect("project has a parent");
    let (stdout, _stderr, success) = run_codetree(parent, &["project"]);
    assert!(success);
    assert_eq!(stdout, "project/\n└── src/\n    └── lib.rs\n");
}

#[test]
fn test_nested_directories() {
    let tree = TestTree::new();
    tree.add_file("src/main.rs", "fn main() {}");
    tree.add_file("src/foo/mod.rs", "pub fn foo() {}");
    tree.add_file("Cargo.toml", "");

    let (stdout, _stderr, success) = run_codetree(tree.path(), &[]);
    assert!(success);
    assert_eq!(
        stdout,
        "project/\n\
         ├── src/\n\
         │   ├── foo/\n\
         │   │   └── mod.rs\n\
         │   └── main.rs\n\
         └── Cargo.toml\n"
    );
}

#[test]
fn test_max_depth_zero() {
    let tree = TestTree::new();
    tree.add_file("top.rs", "");
    tree.add_file("level1/mid.rs", "");

    let (stdout, _stderr, success) = run_codetree(tree.path(), &["--max-depth", "0"]);
    assert!(success);
    assert_eq!(stdout, "project/\n");
}

#[test]
fn test_depth_limit() {
    let tree = TestTree::new();
    tree.add_file("top.rs", "");
    tree.add_file("level1/mid.rs", "");
    tree.add_file("level1/level2/deep.rs", "");

    let (stdout, _stderr, success) = run_codetree(tree.path(), &["-L", "1"]);
    assert!(success);
    assert!(stdout.contains("top.rs"), "should show top level");
    assert!(stdout.contains("level1/"), "should show first level dir");
    assert!(!stdout.contains("mid.rs"), "should not descend: {}", stdout);
    assert!(!stdout.contains("deep.rs"), "should not descend: {}", stdout);
}

#[test]
fn test_only_code() {
    let tree = TestTree::new();
    tree.add_file("app/notes.log", "log");
    tree.add_file("app/main.py", "print()");
    tree.add_file("build/artifact.o", "");
    tree.add_file("Dockerfile", "FROM scratch");

    let (stdout, _stderr, success) = run_codetree(tree.path(), &["--only-code"]);
    assert!(success);
    assert_eq!(
        stdout,
        "project/\n\
         ├── app/\n\
         │   └── main.py\n\
         ├── build/\n\
         └── Dockerfile\n"
    );
}

#[test]
fn test_extra_extensions() {
    let tree = TestTree::new();
    tree.add_file("paper.tex", "");
    tree.add_file("model.R", "");
    tree.add_file("notes.txt", "");

    let (stdout, _stderr, success) =
        run_codetree(tree.path(), &["--only-code", "--exts", "tex,.r"]);
    assert!(success);
    assert_eq!(stdout, "project/\n├── model.R\n└── paper.tex\n");
}

#[test]
fn test_default_ignore_list() {
    let tree = TestTree::new();
    tree.add_file("node_modules/pkg/index.js", "");
    tree.add_file("__pycache__/mod.pyc", "");
    tree.add_file("index.js", "");

    let (stdout, _stderr, success) = run_codetree(tree.path(), &[]);
    assert!(success);
    assert_eq!(stdout, "project/\n└── index.js\n");
}

#[test]
fn test_custom_ignore_replaces_default() {
    let tree = TestTree::new();
    tree.add_file("node_modules/pkg/index.js", "");
    tree.add_file("target/debug/app", "");
    tree.add_file("index.js", "");

    let (stdout, _stderr, success) = run_codetree(tree.path(), &["--ignore", "target"]);
    assert!(success);
    assert!(stdout.contains("node_modules/"), "default list replaced: {}", stdout);
    assert!(stdout.contains("pkg/"));
    assert!(!stdout.contains("target"), "custom ignore applied: {}", stdout);
}

#[test]
fn test_show_hidden() {
    let tree = TestTree::new();
    tree.add_file(".env", "SECRET=1");
    tree.add_file(".git/HEAD", "ref: refs/heads/main");
    tree.add_file("main.rs", "");

    let (stdout, _stderr, success) = run_codetree(tree.path(), &[]);
    assert!(success);
    assert_eq!(stdout, "project/\n└── main.rs\n");

    let (stdout, _stderr, success) = run_codetree(tree.path(), &["--show-hidden"]);
    assert!(success);
    assert_eq!(stdout, "project/\n├── .env\n└── main.rs\n");
}

#[test]
fn test_markdown_output() {
    let tree = TestTree::new();
    tree.add_file("main.rs", "");

    let (stdout, _stderr, success) = run_codetree(tree.path(), &["--markdown"]);
    assert!(success);
    assert_eq!(stdout, "```text\nproject/\n└── main.rs\n```\n");
}

#[test]
fn test_output_file() {
    let tree = TestTree::new();
    tree.add_file("src/main.rs", "");

    let target = tree.path().parent().unwrap().join("tree.txt");
    codetree_cmd(tree.path())
        .arg("-o")
        .arg(&target)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let written = std::fs::read_to_string(&target).expect("output file should exist");
    assert_eq!(written, "project/\n└── src/\n    └── main.rs");
}

#[test]
fn test_output_file_with_markdown() {
    let tree = TestTree::new();
    tree.add_file("lib.rs", "");

    let target = tree.path().parent().unwrap().join("TREE.md");
    codetree_cmd(tree.path())
        .args(["--markdown", "--output"])
        .arg(&target)
        .assert()
        .success();

    let written = std::fs::read_to_string(&target).unwrap();
    assert_eq!(written, "```text\nproject/\n└── lib.rs\n```");
}

#[test]
fn test_missing_path_exits_with_error() {
    let tree = TestTree::new();

    codetree_cmd(tree.path())
        .arg("does-not-exist")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::starts_with("Error: path not found: "))
        .stderr(predicate::str::contains("does-not-exist"));
}

#[test]
fn test_invalid_depth_is_usage_error() {
    let tree = TestTree::new();

    codetree_cmd(tree.path())
        .args(["--max-depth", "many"])
        .assert()
        .failure()
        .code(2);
}

#[test]
fn test_color_always_emits_escapes() {
    let tree = TestTree::new();
    tree.add_file("src/main.rs", "");

    codetree_cmd(tree.path())
        .args(["--color", "always"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\x1b["));
}

#[test]
fn test_markdown_is_never_colored() {
    let tree = TestTree::new();
    tree.add_file("src/main.rs", "");

    codetree_cmd(tree.path())
        .args(["--color", "always", "--markdown"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\x1b[").not());
}

#[test]
fn test_verbose_logs_to_stderr() {
    let tree = TestTree::new();
    tree.add_file("main.rs", "");

    let (stdout, stderr, success) = run_codetree(tree.path(), &["-vv"]);
    assert!(success);
    assert_eq!(stdout, "project/\n└── main.rs\n");
    assert!(stderr.contains("walking"), "debug log expected: {}", stderr);
}
