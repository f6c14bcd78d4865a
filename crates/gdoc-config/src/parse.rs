//! Go source parsing configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ParseConfig {
    /// Abort on the first file with a syntax error. When off, malformed files
    /// are extracted best-effort.
    #[serde(default = "default_strict")]
    pub strict: bool,
}

const fn default_strict() -> bool {
    true
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self {
            strict: default_strict(),
        }
    }
}
