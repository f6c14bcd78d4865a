use std::fmt;

/// One extracted documentation comment, addressed by its name path.
///
/// Paths use `.` between a receiver type and its method and `/` between
/// directory scopes: `module1/module2/Implementation.Implements`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocPair {
    pub path: String,
    pub text: String,
}

impl DocPair {
    #[must_use]
    pub fn new(path: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            text: text.into(),
        }
    }
}

impl fmt::Display for DocPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} bytes)", self.path, self.text.len())
    }
}
