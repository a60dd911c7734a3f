//! Error types that callers need to tell apart from ordinary failures.

use std::fmt;

/// The user asked for something the tool cannot do with the given arguments
/// (an unknown language code, an unsupported language pair, ...).
///
/// Carried inside `anyhow::Error` so `main` can pick the usage exit code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsageError(String);

impl UsageError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

impl fmt::Display for UsageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for UsageError {}
