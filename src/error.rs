//! Crate-level error types.

use std::fmt;

/// Errors produced by the bunpeek crate.
#[derive(Debug)]
pub enum BunpeekError {
    /// Generic I/O failure (options files, icon directories).
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Two icons registered under the same name.
    DuplicateIcon(String),
}

impl fmt::Display for BunpeekError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::DuplicateIcon(name) => {
                write!(f, "icon registered twice: {name}")
            }
        }
    }
}

impl std::error::Error for BunpeekError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for BunpeekError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
