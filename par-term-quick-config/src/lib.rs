//! Configuration for the par-term quick terminal panel.
//!
//! This crate owns the user-facing settings for the sliding quick terminal:
//!
//! - [`QuickTerminalPosition`]: the docking position parsed from `top`,
//!   `bottom`, `left`, `right` or `center`
//! - [`QuickTerminalConfig`]: YAML-backed settings with defaults and validation
//! - [`ConfigError`]: typed failures for parsing, validation and file I/O

pub mod config;
pub mod error;
pub mod position;

pub use config::{DEFAULT_ANIMATION_DURATION, QuickTerminalConfig};
pub use error::ConfigError;
pub use position::QuickTerminalPosition;
