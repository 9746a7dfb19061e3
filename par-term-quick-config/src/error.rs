//! Typed error variants for the par-term-quick-config crate.
//!
//! Callers that only need a message can propagate these through `anyhow`;
//! callers that care about the failure mode can match on the variant.

use thiserror::Error;

/// Errors produced while parsing, loading, or saving quick terminal configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An I/O error occurred reading or writing the config file.
    #[error("I/O error reading config: {0}")]
    Io(#[from] std::io::Error),

    /// The config file contained invalid YAML that could not be parsed.
    #[error("YAML parse error in config: {0}")]
    Parse(#[from] serde_yaml_ng::Error),

    /// A field value failed semantic validation.
    ///
    /// The inner string describes which field is invalid and why.
    #[error("Config validation error: {0}")]
    Validation(String),

    /// A quick terminal position string was not one of the recognised keys.
    #[error("invalid quick terminal position '{0}' (expected top, bottom, left, right or center)")]
    InvalidPosition(String),
}
