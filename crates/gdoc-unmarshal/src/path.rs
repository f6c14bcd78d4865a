//! Name path matching shared by every destination kind.
//!
//! Leaves compare the whole remaining path. Records and maps consume a
//! prefix that ends at a `/` scope separator; `.` is never a scope boundary.

/// Annotation that matches unconditionally without consuming anything.
pub const WILDCARD: &str = "*";

/// Separator between directory scopes in a name path.
pub const SCOPE_SEPARATOR: char = '/';

/// Remaining path after a record or map annotation consumed its prefix.
///
/// The wildcard passes `path` through untouched. Any other annotation must be
/// followed by a `/` in `path`; `module1` consumes `module1/x` but neither
/// `module10/x` nor a bare `module1`.
#[must_use]
pub fn descend<'p>(annotation: &str, path: &'p str) -> Option<&'p str> {
    if annotation == WILDCARD {
        return Some(path);
    }
    path.strip_prefix(annotation)?
        .strip_prefix(SCOPE_SEPARATOR)
}

/// Split a path reaching a map node into the entry key and the rest.
///
/// A path without a `/` addresses nothing inside an entry.
#[must_use]
pub fn split_key(path: &str) -> Option<(&str, &str)> {
    path.split_once(SCOPE_SEPARATOR)
}
