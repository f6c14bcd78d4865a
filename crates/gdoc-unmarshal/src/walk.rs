//! Directory traversal for module-wide unmarshaling.
//!
//! Uses the `ignore` crate's walker. By default every filter is off so every
//! directory is visited, hidden or git-ignored, including directories holding
//! no Go files at all.

use std::ffi::OsStr;
use std::path::{Component, Path};

use gdoc_config::WalkConfig;
use ignore::WalkBuilder;
use tracing::debug;

use crate::error::UnmarshalError;
use crate::path::SCOPE_SEPARATOR;

/// Build a directory walker over `root`, sorted by file name.
#[must_use]
pub fn build_walker(root: &Path, config: &WalkConfig) -> ignore::Walk {
    let mut builder = WalkBuilder::new(root);
    builder
        .standard_filters(false)
        .hidden(config.skip_hidden)
        .follow_links(config.follow_links)
        .sort_by_file_name(|a: &OsStr, b: &OsStr| a.cmp(b));

    if config.respect_gitignore {
        builder
            .git_ignore(true)
            .git_exclude(true)
            .git_global(true)
            .ignore(true)
            .parents(true)
            .require_git(false);
    }

    builder.build()
}

/// Name path prefix of `dir` relative to `root`.
///
/// Empty for the root itself, otherwise the `/`-joined relative components
/// followed by a trailing `/`, on every platform.
///
/// # Errors
/// Returns `UnmarshalError::OutsideRoot` if `dir` is not below `root`.
pub fn scope_prefix(root: &Path, dir: &Path) -> Result<String, UnmarshalError> {
    let relative = dir
        .strip_prefix(root)
        .map_err(|_| UnmarshalError::OutsideRoot {
            path: dir.to_path_buf(),
            root: root.to_path_buf(),
        })?;
    let mut prefix = String::new();
    for component in relative.components() {
        if let Component::Normal(name) = component {
            prefix.push_str(&name.to_string_lossy());
            prefix.push(SCOPE_SEPARATOR);
        }
    }
    Ok(prefix)
}

/// Call `visit` with every directory under `root` (root first) and its scope
/// prefix.
///
/// # Errors
/// Propagates walker errors as `UnmarshalError::Walk` and stops at the first
/// error returned by `visit`.
pub fn for_each_directory<F>(
    root: &Path,
    config: &WalkConfig,
    mut visit: F,
) -> Result<usize, UnmarshalError>
where
    F: FnMut(&Path, &str) -> Result<(), UnmarshalError>,
{
    let mut visited = 0;
    for entry in build_walker(root, config) {
        let entry = entry?;
        if !entry.file_type().is_some_and(|t| t.is_dir()) {
            continue;
        }
        let prefix = scope_prefix(root, entry.path())?;
        debug!(dir = %entry.path().display(), prefix = %prefix, "visiting directory");
        visit(entry.path(), &prefix)?;
        visited += 1;
    }
    Ok(visited)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn tree() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        for sub in ["b/c", "a", ".hidden", "ignored"] {
            std::fs::create_dir_all(dir.path().join(sub)).unwrap();
        }
        std::fs::write(dir.path().join("a/x.go"), "package a\n").unwrap();
        std::fs::write(dir.path().join(".gitignore"), "ignored/\n").unwrap();
        dir
    }

    fn prefixes(root: &Path, config: &WalkConfig) -> Vec<String> {
        let mut seen = Vec::new();
        for_each_directory(root, config, |_, prefix| {
            seen.push(prefix.to_string());
            Ok(())
        })
        .unwrap();
        seen
    }

    #[test]
    fn root_prefix_is_empty() {
        assert_eq!(scope_prefix(Path::new("/r"), Path::new("/r")).unwrap(), "");
    }

    #[test]
    fn nested_prefix_has_trailing_separator() {
        assert_eq!(
            scope_prefix(Path::new("/r"), Path::new("/r/module1/module2")).unwrap(),
            "module1/module2/"
        );
    }

    #[test]
    fn prefix_outside_root_is_an_error() {
        let result = scope_prefix(Path::new("/r"), Path::new("/elsewhere"));
        assert!(matches!(result, Err(UnmarshalError::OutsideRoot { .. })));
    }

    #[test]
    fn visits_every_directory_sorted() {
        let dir = tree();
        assert_eq!(
            prefixes(dir.path(), &WalkConfig::default()),
            vec!["", ".hidden/", "a/", "b/", "b/c/", "ignored/"]
        );
    }

    #[test]
    fn hidden_directories_can_be_skipped() {
        let dir = tree();
        let config = WalkConfig {
            skip_hidden: true,
            ..WalkConfig::default()
        };
        assert_eq!(
            prefixes(dir.path(), &config),
            vec!["", "a/", "b/", "b/c/", "ignored/"]
        );
    }

    #[test]
    fn gitignore_is_honored_on_request() {
        let dir = tree();
        let config = WalkConfig {
            respect_gitignore: true,
            ..WalkConfig::default()
        };
        assert!(!prefixes(dir.path(), &config).contains(&"ignored/".to_string()));
    }

    #[test]
    fn missing_root_is_a_walk_error() {
        let dir = tree();
        let result = for_each_directory(&dir.path().join("absent"), &WalkConfig::default(), |_, _| {
            Ok(())
        });
        assert!(matches!(result, Err(UnmarshalError::Walk(_))));
    }
}
