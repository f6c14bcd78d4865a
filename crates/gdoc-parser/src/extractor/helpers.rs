use ast_grep_core::{Doc, Node};

use crate::error::ParserError;

// ── Doc comment extraction ────────────────────────────────────────

/// Text of the comment group that documents `node`, or `""`.
///
/// Go convention: the doc comment is the group of comments ending on the
/// line directly above the declaration, with no blank lines between its
/// members. A comment trailing code on the same line never starts a group.
pub(super) fn extract_go_doc<D: Doc>(node: &Node<D>) -> String {
    let mut group = Vec::new();
    let mut next_line = node.start_pos().line();
    let mut current = node.prev();
    while let Some(sibling) = current {
        if sibling.kind().as_ref() != "comment" {
            break;
        }
        let end_line = sibling.end_pos().line();
        let adjacent = if group.is_empty() {
            end_line + 1 == next_line
        } else {
            end_line + 1 >= next_line
        };
        if !adjacent {
            break;
        }
        let previous = sibling.prev();
        if previous
            .as_ref()
            .is_some_and(|p| p.kind().as_ref() != "comment" && last_line(p) == sibling.start_pos().line())
        {
            break;
        }
        next_line = sibling.start_pos().line();
        group.push(sibling.text().to_string());
        current = previous;
    }
    group.reverse();
    comment_text(&group)
}

/// Line on which a token preceding a comment ends.
///
/// A newline terminator token spans into the next line, so its own start
/// line is the one that counts.
fn last_line<D: Doc>(node: &Node<D>) -> usize {
    if node.kind().as_ref() == "\n" {
        node.start_pos().line()
    } else {
        node.end_pos().line()
    }
}

/// Normalize raw comments into doc text.
///
/// Markers are removed along with one space after `//`, directives such as
/// `//go:generate` are dropped, trailing whitespace is trimmed, leading blank
/// lines are removed and blank runs collapse to one. A non-empty result always
/// ends with a single `\n`.
#[must_use]
pub fn comment_text<S: AsRef<str>>(comments: &[S]) -> String {
    let mut lines: Vec<&str> = Vec::new();
    for comment in comments {
        let comment = comment.as_ref();
        let body = if let Some(line) = comment.strip_prefix("//") {
            if let Some(rest) = line.strip_prefix(' ') {
                rest
            } else if is_directive(line) {
                continue;
            } else {
                line
            }
        } else if let Some(block) = comment
            .strip_prefix("/*")
            .and_then(|c| c.strip_suffix("*/"))
        {
            block
        } else {
            comment
        };
        lines.extend(
            body.split('\n')
                .map(|line| line.trim_end_matches([' ', '\t', '\n', '\r'])),
        );
    }

    let mut kept: Vec<&str> = Vec::with_capacity(lines.len());
    for line in lines {
        if !line.is_empty() || kept.last().is_some_and(|last| !last.is_empty()) {
            kept.push(line);
        }
    }
    if kept.last().is_some_and(|last| !last.is_empty()) {
        kept.push("");
    }
    kept.join("\n")
}

/// Compiler directives (`//go:embed`, `//line`, `//export`, ...) are not
/// documentation.
fn is_directive(line: &str) -> bool {
    if ["line ", "extern ", "export "]
        .iter()
        .any(|prefix| line.starts_with(prefix))
    {
        return true;
    }
    let Some(colon) = line.find(':') else {
        return false;
    };
    if colon == 0 || colon + 1 >= line.len() {
        return false;
    }
    line.bytes()
        .take(colon + 2)
        .enumerate()
        .all(|(i, b)| i == colon || b.is_ascii_lowercase() || b.is_ascii_digit())
}

// ── method_declaration ────────────────────────────────────────────

/// Base type name of a method receiver.
///
/// `T`, `*T`, `T[K]`, `*T[K]` and parenthesized forms all reduce to `T`.
/// Returns `Ok(None)` when the receiver list declares no parameter.
pub(super) fn extract_go_receiver<D: Doc>(
    node: &Node<D>,
    method: &str,
) -> Result<Option<String>, ParserError> {
    let Some(receiver_list) = node.field("receiver") else {
        return Ok(None);
    };
    let Some(declaration) = receiver_list
        .children()
        .find(|c| c.kind().as_ref() == "parameter_declaration")
    else {
        return Ok(None);
    };
    let Some(ty) = declaration.field("type") else {
        return Ok(None);
    };
    receiver_type_name(&ty, method).map(Some)
}

fn receiver_type_name<D: Doc>(ty: &Node<D>, method: &str) -> Result<String, ParserError> {
    let kind = ty.kind();
    match kind.as_ref() {
        "type_identifier" => Ok(ty.text().to_string()),
        "pointer_type" | "parenthesized_type" | "generic_type" => {
            let inner = ty
                .children()
                .find(|c| !matches!(c.kind().as_ref(), "*" | "(" | ")" | "type_arguments"));
            match inner {
                Some(inner) => receiver_type_name(&inner, method),
                None => Err(unsupported(ty, method)),
            }
        }
        _ => Err(unsupported(ty, method)),
    }
}

fn unsupported<D: Doc>(ty: &Node<D>, method: &str) -> ParserError {
    ParserError::UnsupportedReceiver {
        name: method.to_string(),
        kind: ty.kind().to_string(),
    }
}
