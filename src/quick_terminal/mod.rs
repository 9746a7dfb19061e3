//! Quick terminal panel placement.
//!
//! The quick terminal is a terminal window that slides in from a screen edge
//! (or fades in at the center). This module computes where it starts, where
//! it rests, and how its size is constrained. Deciding when to show it and
//! running the animation belong to the window controller and the animation
//! driver.
//!
//! # Sub-modules
//!
//! - [`placement`] — [`QuickTerminalGeometry`]: per-position origin and size rules
//! - [`transition`] — [`QuickTerminalTransition`]: keyframes for the animation driver
//! - [`window`] — [`QuickTerminalWindow`] and [`FrameState`]

pub mod placement;
pub mod transition;
pub mod window;

pub use par_term_quick_config::QuickTerminalPosition;
pub use placement::QuickTerminalGeometry;
pub use transition::{QuickTerminalTransition, TransitionKind};
pub use window::{FrameState, HIDDEN_ALPHA, QuickTerminalWindow, VISIBLE_ALPHA};
