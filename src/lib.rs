// Library exports for the par-term quick terminal.
//
// The quick terminal is a dropdown-style panel that slides in from a screen
// edge. This crate computes its placement geometry and hosts the paste
// protection dialog shown over it. The window controller, the animation
// driver and config loading live with the application that embeds it.

pub mod debug;
pub mod geometry;
pub mod paste_protection_ui;
pub mod quick_terminal;

pub use par_term_quick_config as config;
