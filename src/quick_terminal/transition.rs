//! Keyframes handed to the animation driver.
//!
//! The driver interpolates position and opacity between `from` and `to`;
//! this module only computes the two endpoints.

use super::placement::QuickTerminalGeometry;
use super::window::FrameState;
use crate::geometry::{Rect, ScreenGeometry};
use par_term_quick_config::{
    DEFAULT_ANIMATION_DURATION, QuickTerminalConfig, QuickTerminalPosition,
};

/// Direction of a quick terminal transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionKind {
    /// Hidden -> visible
    Show,
    /// Visible -> hidden
    Hide,
}

/// Start and end states of one show or hide animation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuickTerminalTransition {
    pub position: QuickTerminalPosition,
    pub kind: TransitionKind,
    pub from: FrameState,
    pub to: FrameState,
    /// Seconds the driver should take to move from `from` to `to`
    pub duration: f32,
}

impl QuickTerminalTransition {
    /// Keyframes for revealing the panel, from the window's current frame
    pub fn show(position: QuickTerminalPosition, window: &Rect, screen: &ScreenGeometry) -> Self {
        let from = position.initial_state(window, screen);
        let to = position.final_state(window, screen);
        log::info!(
            "Quick terminal show ({}): {:?} -> {:?}",
            position,
            from.frame.origin,
            to.frame.origin
        );
        Self {
            position,
            kind: TransitionKind::Show,
            from,
            to,
            duration: DEFAULT_ANIMATION_DURATION,
        }
    }

    /// Keyframes for dismissing the panel, from the window's current frame
    pub fn hide(position: QuickTerminalPosition, window: &Rect, screen: &ScreenGeometry) -> Self {
        let from = position.final_state(window, screen);
        let to = position.initial_state(window, screen);
        log::info!(
            "Quick terminal hide ({}): {:?} -> {:?}",
            position,
            from.frame.origin,
            to.frame.origin
        );
        Self {
            position,
            kind: TransitionKind::Hide,
            from,
            to,
            duration: DEFAULT_ANIMATION_DURATION,
        }
    }

    /// Keyframes for revealing the panel using the configured position and duration
    pub fn show_with_config(
        config: &QuickTerminalConfig,
        window: &Rect,
        screen: &ScreenGeometry,
    ) -> Self {
        Self::show(config.position, window, screen).with_duration(config.animation_duration)
    }

    /// Keyframes for dismissing the panel using the configured position and duration
    pub fn hide_with_config(
        config: &QuickTerminalConfig,
        window: &Rect,
        screen: &ScreenGeometry,
    ) -> Self {
        Self::hide(config.position, window, screen).with_duration(config.animation_duration)
    }

    /// Override the animation duration in seconds
    pub fn with_duration(mut self, seconds: f32) -> Self {
        self.duration = seconds;
        self
    }

    /// Distance the origin travels over the animation
    pub fn travel(&self) -> (f64, f64) {
        (
            self.to.frame.origin.x - self.from.frame.origin.x,
            self.to.frame.origin.y - self.from.frame.origin.y,
        )
    }
}
