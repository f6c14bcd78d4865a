//! Package-level extraction: every `.go` file directly inside one directory.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::ParserError;
use crate::extractor::doc_pairs;
use crate::pair::DocPair;
use crate::parser::{first_syntax_error, is_go_file, is_go_test_file, parse_source};

/// How a package directory is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackageOptions {
    /// Include `*_test.go` files.
    pub include_test_files: bool,
    /// Fail on the first syntax error instead of extracting best-effort.
    pub strict: bool,
}

impl Default for PackageOptions {
    fn default() -> Self {
        Self {
            include_test_files: true,
            strict: true,
        }
    }
}

/// Go files directly inside `dir`, sorted by file name.
///
/// # Errors
/// Returns `ParserError::Io` if the directory cannot be listed.
pub fn go_files(dir: &Path, options: &PackageOptions) -> Result<Vec<PathBuf>, ParserError> {
    let io_error = |source| ParserError::Io {
        path: dir.to_path_buf(),
        source,
    };
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(io_error)? {
        let entry = entry.map_err(io_error)?;
        let path = entry.path();
        if !entry.file_type().map_err(io_error)?.is_file() || !is_go_file(&path) {
            continue;
        }
        if !options.include_test_files && is_go_test_file(&path) {
            continue;
        }
        files.push(path);
    }
    files.sort();
    Ok(files)
}

/// Parse the package in `dir` and hand every pair, prefixed with `prefix`,
/// to `visit`.
///
/// Returns the number of pairs emitted. Stops at the first error, whether it
/// comes from reading and parsing or from `visit` itself.
///
/// # Errors
/// Returns `ParserError::Io` for unreadable files, `ParserError::ParseFailed`
/// for malformed files in strict mode, `ParserError::UnsupportedReceiver` for
/// receivers without a type name, and any error produced by `visit`.
pub fn visit_package<E, F>(
    dir: &Path,
    prefix: &str,
    options: &PackageOptions,
    mut visit: F,
) -> Result<usize, E>
where
    E: From<ParserError>,
    F: FnMut(DocPair) -> Result<(), E>,
{
    let mut emitted = 0;
    for file in go_files(dir, options)? {
        let source = std::fs::read_to_string(&file).map_err(|source| ParserError::Io {
            path: file.clone(),
            source,
        })?;
        let tree = parse_source(&source);
        if let Some(line) = first_syntax_error(&tree) {
            if options.strict {
                return Err(ParserError::ParseFailed { path: file, line }.into());
            }
            warn!(file = %file.display(), line, "syntax error, extracting best-effort");
        }
        for pair in doc_pairs(&tree, prefix) {
            visit(pair?)?;
            emitted += 1;
        }
    }
    debug!(dir = %dir.display(), prefix, emitted, "package extracted");
    Ok(emitted)
}
