//! Directory traversal configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct WalkConfig {
    /// Parse `*_test.go` files along with the package sources.
    #[serde(default = "default_true")]
    pub include_test_files: bool,

    /// Skip dot-directories and dot-files.
    #[serde(default)]
    pub skip_hidden: bool,

    /// Honor `.gitignore`, `.ignore` and git exclude files.
    #[serde(default)]
    pub respect_gitignore: bool,

    /// Follow symbolic links to directories.
    #[serde(default)]
    pub follow_links: bool,
}

const fn default_true() -> bool {
    true
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self::everything()
    }
}

impl WalkConfig {
    /// Every directory, hidden or ignored, plus test files.
    #[must_use]
    pub const fn everything() -> Self {
        Self {
            include_test_files: true,
            skip_hidden: false,
            respect_gitignore: false,
            follow_links: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_visit_everything() {
        let config = WalkConfig::default();
        assert!(config.include_test_files);
        assert!(!config.skip_hidden);
        assert!(!config.respect_gitignore);
        assert!(!config.follow_links);
    }
}
