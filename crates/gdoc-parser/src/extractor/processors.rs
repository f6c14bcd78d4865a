use ast_grep_core::{Doc, Node};

use crate::error::ParserError;
use crate::pair::DocPair;

use super::helpers::{extract_go_doc, extract_go_receiver};

// ── function_declaration ──────────────────────────────────────────

pub(super) fn process_function<D: Doc>(node: &Node<D>, prefix: &str) -> Option<DocPair> {
    let name = node.field("name").map(|n| n.text().to_string())?;
    Some(DocPair::new(format!("{prefix}{name}"), extract_go_doc(node)))
}

// ── method_declaration ────────────────────────────────────────────

pub(super) fn process_method<D: Doc>(
    node: &Node<D>,
    prefix: &str,
) -> Result<Option<DocPair>, ParserError> {
    // Method name is a field_identifier child
    let Some(name) = node.field("name").map(|n| n.text().to_string()) else {
        return Ok(None);
    };
    let path = match extract_go_receiver(node, &name)? {
        Some(receiver) => format!("{prefix}{receiver}.{name}"),
        None => format!("{prefix}{name}"),
    };
    Ok(Some(DocPair::new(path, extract_go_doc(node))))
}

// ── type_declaration ──────────────────────────────────────────────

/// One pair per `type_spec` / `type_alias` of the declaration.
///
/// `type X int` and `type ( X int )` take the comment above the `type`
/// keyword. When the parentheses hold several specs, each spec only gets the
/// comment directly above it.
pub(super) fn process_type_declaration<D: Doc>(node: &Node<D>, prefix: &str) -> Vec<DocPair> {
    let specs: Vec<_> = node
        .children()
        .filter(|c| matches!(c.kind().as_ref(), "type_spec" | "type_alias"))
        .collect();

    let shared = if specs.len() == 1 {
        Some(extract_go_doc(node))
    } else {
        None
    };

    specs
        .iter()
        .filter_map(|spec| {
            let name = spec.field("name").map(|n| n.text().to_string())?;
            let text = shared.clone().unwrap_or_else(|| extract_go_doc(spec));
            Some(DocPair::new(format!("{prefix}{name}"), text))
        })
        .collect()
}
