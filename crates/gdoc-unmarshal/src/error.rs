//! Unmarshal error types.

use std::path::PathBuf;

use gdoc_parser::ParserError;
use thiserror::Error;

use crate::destination::Shape;

/// Errors that abort an unmarshal call.
///
/// Paths that match no destination field are not errors; they are dropped.
#[derive(Debug, Error)]
pub enum UnmarshalError {
    /// The destination is unset and cannot be populated.
    #[error("Invalid target: destination is {shape}")]
    InvalidTarget { shape: Shape },

    /// The destination, or a map value inside it, is not a record.
    #[error("Unsupported shape: {position} must be a record, got {shape}")]
    UnsupportedShape { position: String, shape: Shape },

    /// Extraction failed: unreadable or malformed Go source.
    #[error(transparent)]
    Parser(#[from] ParserError),

    /// Directory traversal failed.
    #[error("Walk error: {0}")]
    Walk(#[from] ignore::Error),

    /// A walked path does not live under the traversal root.
    #[error("Path {} is outside of {}", path.display(), root.display())]
    OutsideRoot { path: PathBuf, root: PathBuf },

    /// A schema file could not be parsed.
    #[error("Schema file error: {0}")]
    SchemaFile(#[from] toml::de::Error),
}
