//! Window handle abstraction for the quick terminal panel.

use crate::geometry::Rect;

/// Opacity of the panel before it is revealed
pub const HIDDEN_ALPHA: f64 = 0.0;

/// Opacity of the panel once it is fully shown
pub const VISIBLE_ALPHA: f64 = 1.0;

/// Frame and opacity of the panel at one end of a transition
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameState {
    pub frame: Rect,
    pub alpha: f64,
}

impl FrameState {
    pub fn hidden(frame: Rect) -> Self {
        Self {
            frame,
            alpha: HIDDEN_ALPHA,
        }
    }

    pub fn visible(frame: Rect) -> Self {
        Self {
            frame,
            alpha: VISIBLE_ALPHA,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.alpha >= VISIBLE_ALPHA
    }
}

/// The platform window hosting the quick terminal.
///
/// Implemented by the window owner. Both methods are called on the UI thread.
pub trait QuickTerminalWindow {
    /// Current frame in Y-up screen coordinates
    fn frame(&self) -> Rect;

    /// Apply opacity and frame as a single change.
    ///
    /// When `display` is false the change must not trigger a redraw or layout
    /// pass; when true the window should redraw so the change visibly commits.
    fn apply_frame_state(&mut self, state: FrameState, display: bool);
}
