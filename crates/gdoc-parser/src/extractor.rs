//! Go doc comment extractor.
//!
//! Visits the top-level `function_declaration`, `method_declaration` and
//! `type_declaration` nodes of one file, in source order. Nothing nested in
//! function bodies is visited and `const`/`var` groups are skipped.

use ast_grep_core::{AstGrep, Doc, Node};

use crate::error::ParserError;
use crate::pair::DocPair;

mod helpers;
mod processors;

pub use helpers::comment_text;

/// Lazily extract one [`DocPair`] per declaration of `root`.
///
/// Every emitted path starts with `prefix`, which is either empty or a
/// directory scope ending in `/`. Methods whose receiver cannot be reduced to
/// a type name yield a [`ParserError::UnsupportedReceiver`] item.
pub fn doc_pairs<'r, D: Doc>(
    root: &'r AstGrep<D>,
    prefix: &'r str,
) -> impl Iterator<Item = Result<DocPair, ParserError>> + 'r {
    let decls: Vec<Node<'r, D>> = root.root().children().collect();
    decls
        .into_iter()
        .flat_map(move |node| -> Vec<Result<DocPair, ParserError>> {
            match node.kind().as_ref() {
                "function_declaration" => processors::process_function(&node, prefix)
                    .into_iter()
                    .map(Ok)
                    .collect(),
                "method_declaration" => processors::process_method(&node, prefix)
                    .transpose()
                    .into_iter()
                    .collect(),
                "type_declaration" => processors::process_type_declaration(&node, prefix)
                    .into_iter()
                    .map(Ok)
                    .collect(),
                _ => Vec::new(),
            }
        })
}

#[cfg(test)]
mod tests;
