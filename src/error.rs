//! Crate-level error types.

use std::fmt;

/// Errors produced by the galaxy crate.
///
/// The per-particle evaluator itself is total; these cover the surface
/// around it (options files, field parameters, shader composition).
#[derive(Debug)]
pub enum GalaxyError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Particle-field or color-stop parameters that cannot produce a field.
    InvalidField(String),
    /// WGSL module registration or composition failure.
    Shader(String),
}

impl fmt::Display for GalaxyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::InvalidField(msg) => {
                write!(f, "invalid particle field: {msg}")
            }
            Self::Shader(msg) => write!(f, "shader error: {msg}"),
        }
    }
}

impl std::error::Error for GalaxyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for GalaxyError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
