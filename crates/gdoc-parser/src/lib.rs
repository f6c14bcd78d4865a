//! # gdoc-parser
//!
//! ast-grep-based extraction of Go documentation comments.
//!
//! Every top-level type, function and method declaration of a Go file
//! becomes one [`DocPair`]: a name path such as `Fetcher`,
//! `Fetcher.FetchOrders` or `module1/Module1Func`, and the normalized text
//! of the comment group directly above the declaration.
//!
//! - [`doc_pairs`] walks one parsed file lazily.
//! - [`visit_package`] parses every `.go` file of a directory and feeds
//!   the pairs to a caller-supplied sink.

mod error;
mod extractor;
mod package;
mod pair;
mod parser;

pub use error::ParserError;
pub use extractor::{comment_text, doc_pairs};
pub use package::{PackageOptions, go_files, visit_package};
pub use pair::DocPair;
pub use parser::{AstTree, first_syntax_error, is_go_file, is_go_test_file, parse_source};
