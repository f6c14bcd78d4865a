//! ast-grep wrapper and Go source file detection.

use std::path::Path;

use ast_grep_core::tree_sitter::StrDoc;
use ast_grep_language::SupportLang;

/// The concrete AST tree type returned by `parse_source`.
pub type AstTree = ast_grep_core::AstGrep<StrDoc<SupportLang>>;

/// Returns `true` for `*.go` file names.
#[must_use]
pub fn is_go_file(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "go")
}

/// Returns `true` for Go test files (`*_test.go`).
#[must_use]
pub fn is_go_test_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.ends_with("_test.go"))
}

/// Parse Go source code into an ast-grep tree.
#[must_use]
pub fn parse_source(source: &str) -> AstTree {
    use ast_grep_language::LanguageExt;
    SupportLang::Go.ast_grep(source)
}

/// 1-based line of the first syntax error in the tree, if any.
///
/// tree-sitter recovers from malformed input instead of failing, either by
/// wrapping tokens in an `ERROR` node or by inserting a zero-width MISSING
/// token. Both mark a file the Go toolchain would refuse to parse.
#[must_use]
pub fn first_syntax_error(tree: &AstTree) -> Option<usize> {
    let root = tree.root();
    root.dfs()
        .find(|node| node.is_error() || node.is_missing())
        .map(|node| node.start_pos().line() + 1)
}
