//! Parser error types for gdoc-parser.

use std::path::PathBuf;

/// Errors that can occur while parsing Go sources and extracting comments.
#[derive(Debug, thiserror::Error)]
pub enum ParserError {
    #[error("Parse failed for {}: syntax error at line {line}", path.display())]
    ParseFailed { path: PathBuf, line: usize },

    #[error("Unsupported method receiver on {name}: {kind}")]
    UnsupportedReceiver { name: String, kind: String },

    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
