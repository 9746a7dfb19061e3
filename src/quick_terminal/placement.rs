//! Placement geometry for each quick terminal position.
//!
//! Every method is a pure function of the position, the window's current
//! frame and the target screen. Nothing is remembered between calls, so a
//! transition requested mid-animation simply recomputes from wherever the
//! window currently is.

use super::window::{FrameState, QuickTerminalWindow};
use crate::geometry::{Point, Rect, ScreenGeometry, Size};
use par_term_quick_config::QuickTerminalPosition;

/// Geometry rules for sliding the quick terminal in and out of a position.
pub trait QuickTerminalGeometry {
    /// Restrict a window size so the panel spans the screen across its slide axis.
    fn clamp_size(&self, size: Size, screen: &ScreenGeometry) -> Size;

    /// Origin the window starts from before it is revealed.
    fn initial_origin(&self, window: &Rect, screen: &ScreenGeometry) -> Point;

    /// Origin the window rests at once fully shown.
    fn final_origin(&self, window: &Rect, screen: &ScreenGeometry) -> Point;

    /// Hidden frame state computed from the window's current frame
    fn initial_state(&self, window: &Rect, screen: &ScreenGeometry) -> FrameState;

    /// Visible frame state computed from the window's current frame
    fn final_state(&self, window: &Rect, screen: &ScreenGeometry) -> FrameState;

    /// Move the window to its hidden starting state without redrawing.
    fn set_initial<W: QuickTerminalWindow + ?Sized>(
        &self,
        window: &mut W,
        screen: &ScreenGeometry,
    ) {
        let state = self.initial_state(&window.frame(), screen);
        window.apply_frame_state(state, false);
    }

    /// Move the window to its visible resting state and redraw.
    fn set_final<W: QuickTerminalWindow + ?Sized>(
        &self,
        window: &mut W,
        screen: &ScreenGeometry,
    ) {
        let state = self.final_state(&window.frame(), screen);
        window.apply_frame_state(state, true);
    }
}

/// X origin that centers `width` inside the screen's visible frame.
///
/// Offset by the visible frame's origin, so secondary displays and a bottom
/// dock keep the panel on its own display. On a display whose visible frame
/// starts at 0 this is `(visible.max_x - width) / 2`.
fn centered_x(width: f64, screen: &ScreenGeometry) -> f64 {
    let visible = &screen.visible_frame;
    visible.min_x() + (visible.width() - width) / 2.0
}

impl QuickTerminalGeometry for QuickTerminalPosition {
    fn clamp_size(&self, size: Size, screen: &ScreenGeometry) -> Size {
        match self {
            QuickTerminalPosition::Top | QuickTerminalPosition::Bottom => {
                Size::new(screen.frame.width(), size.height)
            }
            QuickTerminalPosition::Left | QuickTerminalPosition::Right => {
                Size::new(size.width, screen.frame.height())
            }
            QuickTerminalPosition::Center => size,
        }
    }

    fn initial_origin(&self, window: &Rect, screen: &ScreenGeometry) -> Point {
        match self {
            QuickTerminalPosition::Top => Point::new(screen.frame.min_x(), screen.frame.max_y()),
            QuickTerminalPosition::Bottom => Point::new(screen.frame.min_x(), -window.height()),
            QuickTerminalPosition::Left => Point::new(-window.width(), 0.0),
            QuickTerminalPosition::Right => Point::new(screen.frame.max_x(), 0.0),
            // Vertical offset is the window's width, not its height
            QuickTerminalPosition::Center => Point::new(
                centered_x(window.width(), screen),
                screen.visible_frame.max_y() - window.width(),
            ),
        }
    }

    fn final_origin(&self, window: &Rect, screen: &ScreenGeometry) -> Point {
        let visible = &screen.visible_frame;
        match self {
            QuickTerminalPosition::Top => {
                Point::new(screen.frame.min_x(), visible.max_y() - window.height())
            }
            QuickTerminalPosition::Bottom => {
                Point::new(screen.frame.min_x(), screen.frame.min_y())
            }
            QuickTerminalPosition::Left => Point::new(screen.frame.min_x(), window.min_y()),
            QuickTerminalPosition::Right => {
                Point::new(visible.max_x() - window.width(), window.min_y())
            }
            QuickTerminalPosition::Center => Point::new(
                centered_x(window.width(), screen),
                visible.min_y() + (visible.height() - window.height()) / 2.0,
            ),
        }
    }

    fn initial_state(&self, window: &Rect, screen: &ScreenGeometry) -> FrameState {
        let frame = Rect::from_origin_size(
            self.initial_origin(window, screen),
            self.clamp_size(window.size, screen),
        );
        log::debug!("Quick terminal {} initial frame {:?}", self, frame);
        FrameState::hidden(frame)
    }

    fn final_state(&self, window: &Rect, screen: &ScreenGeometry) -> FrameState {
        let frame = Rect::from_origin_size(
            self.final_origin(window, screen),
            self.clamp_size(window.size, screen),
        );
        log::debug!("Quick terminal {} final frame {:?}", self, frame);
        FrameState::visible(frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quick_terminal::window::{HIDDEN_ALPHA, VISIBLE_ALPHA};

    fn menu_bar_screen() -> ScreenGeometry {
        ScreenGeometry::new(
            Rect::new(0.0, 0.0, 1920.0, 1080.0),
            Rect::new(0.0, 0.0, 1920.0, 1055.0),
        )
    }

    /// Records every state applied by the resolver
    #[derive(Default)]
    struct RecordingWindow {
        frame: Rect,
        alpha: f64,
        applied: Vec<(FrameState, bool)>,
    }

    impl QuickTerminalWindow for RecordingWindow {
        fn frame(&self) -> Rect {
            self.frame
        }

        fn apply_frame_state(&mut self, state: FrameState, display: bool) {
            self.frame = state.frame;
            self.alpha = state.alpha;
            self.applied.push((state, display));
        }
    }

    #[test]
    fn test_clamp_size_per_position() {
        let screen = menu_bar_screen();
        let size = Size::new(800.0, 600.0);
        assert_eq!(
            QuickTerminalPosition::Top.clamp_size(size, &screen),
            Size::new(1920.0, 600.0)
        );
        assert_eq!(
            QuickTerminalPosition::Bottom.clamp_size(size, &screen),
            Size::new(1920.0, 600.0)
        );
        assert_eq!(
            QuickTerminalPosition::Left.clamp_size(size, &screen),
            Size::new(800.0, 1080.0)
        );
        assert_eq!(
            QuickTerminalPosition::Right.clamp_size(size, &screen),
            Size::new(800.0, 1080.0)
        );
        assert_eq!(QuickTerminalPosition::Center.clamp_size(size, &screen), size);
    }

    #[test]
    fn test_clamp_uses_full_frame_not_visible_frame() {
        let screen = ScreenGeometry::new(
            Rect::new(0.0, 0.0, 1920.0, 1080.0),
            Rect::new(0.0, 70.0, 1850.0, 985.0),
        );
        let size = QuickTerminalPosition::Right.clamp_size(Size::new(500.0, 10.0), &screen);
        assert_eq!(size.height, 1080.0);
        let size = QuickTerminalPosition::Bottom.clamp_size(Size::new(10.0, 300.0), &screen);
        assert_eq!(size.width, 1920.0);
    }

    #[test]
    fn test_initial_origins() {
        let screen = menu_bar_screen();
        let window = Rect::new(100.0, 300.0, 400.0, 600.0);
        assert_eq!(
            QuickTerminalPosition::Top.initial_origin(&window, &screen),
            Point::new(0.0, 1080.0)
        );
        assert_eq!(
            QuickTerminalPosition::Bottom.initial_origin(&window, &screen),
            Point::new(0.0, -600.0)
        );
        assert_eq!(
            QuickTerminalPosition::Left.initial_origin(&window, &screen),
            Point::new(-400.0, 0.0)
        );
        assert_eq!(
            QuickTerminalPosition::Right.initial_origin(&window, &screen),
            Point::new(1920.0, 0.0)
        );
    }

    #[test]
    fn test_center_initial_offset_uses_width() {
        let screen = menu_bar_screen();
        let window = Rect::new(0.0, 0.0, 800.0, 600.0);
        let origin = QuickTerminalPosition::Center.initial_origin(&window, &screen);
        assert_eq!(origin, Point::new(560.0, 1055.0 - 800.0));
        // Same horizontal position as the resting frame
        let final_origin = QuickTerminalPosition::Center.final_origin(&window, &screen);
        assert_eq!(origin.x, final_origin.x);
    }

    #[test]
    fn test_center_respects_offset_visible_frame() {
        // Secondary display to the right of the primary with a bottom dock
        let screen = ScreenGeometry::new(
            Rect::new(1920.0, 0.0, 1920.0, 1080.0),
            Rect::new(1920.0, 80.0, 1920.0, 1000.0),
        );
        let window = Rect::new(0.0, 0.0, 800.0, 600.0);
        let origin = QuickTerminalPosition::Center.final_origin(&window, &screen);
        assert_eq!(origin, Point::new(2480.0, 280.0));
    }

    #[test]
    fn test_right_final_respects_visible_frame() {
        let screen = ScreenGeometry::new(
            Rect::new(0.0, 0.0, 1920.0, 1080.0),
            Rect::new(0.0, 0.0, 1850.0, 1055.0),
        );
        let window = Rect::new(0.0, 120.0, 400.0, 1080.0);
        assert_eq!(
            QuickTerminalPosition::Right.final_origin(&window, &screen),
            Point::new(1450.0, 120.0)
        );
    }

    #[test]
    fn test_set_initial_is_hidden_without_display() {
        let screen = menu_bar_screen();
        let mut window = RecordingWindow {
            frame: Rect::new(0.0, 0.0, 800.0, 600.0),
            alpha: VISIBLE_ALPHA,
            ..Default::default()
        };

        QuickTerminalPosition::Top.set_initial(&mut window, &screen);

        assert_eq!(window.applied.len(), 1);
        let (state, display) = window.applied[0];
        assert!(!display);
        assert_eq!(state.alpha, HIDDEN_ALPHA);
        assert_eq!(window.frame, Rect::new(0.0, 1080.0, 1920.0, 600.0));
    }

    #[test]
    fn test_set_final_is_visible_with_display() {
        let screen = menu_bar_screen();
        let mut window = RecordingWindow {
            frame: Rect::new(0.0, 1080.0, 1920.0, 600.0),
            ..Default::default()
        };

        QuickTerminalPosition::Top.set_final(&mut window, &screen);

        let (state, display) = window.applied[0];
        assert!(display);
        assert_eq!(state.alpha, VISIBLE_ALPHA);
        assert_eq!(window.alpha, VISIBLE_ALPHA);
        assert_eq!(window.frame, Rect::new(0.0, 455.0, 1920.0, 600.0));
    }

    #[test]
    fn test_set_final_keeps_left_y() {
        let screen = menu_bar_screen();
        let mut window = RecordingWindow {
            frame: Rect::new(50.0, 300.0, 400.0, 600.0),
            ..Default::default()
        };

        QuickTerminalPosition::Left.set_final(&mut window, &screen);
        assert_eq!(window.frame, Rect::new(0.0, 300.0, 400.0, 1080.0));
    }
}
