//! Screen and window geometry for quick terminal placement.
//!
//! All types use a Y-up coordinate space: the origin sits at the bottom-left
//! of the primary display and increasing `y` moves up the screen. winit
//! reports monitors and window positions Y-down from the top-left corner, so
//! the conversion helpers at the bottom of this module flip between the two.

use winit::dpi::{LogicalPosition, LogicalSize, PhysicalPosition, PhysicalSize};

/// A point in Y-up screen coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Width and height of a rectangle
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Rectangle anchored at its bottom-left `origin`
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    /// Create a rectangle from its bottom-left corner and size
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    pub const fn from_origin_size(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    pub fn width(&self) -> f64 {
        self.size.width
    }

    pub fn height(&self) -> f64 {
        self.size.height
    }

    pub fn min_x(&self) -> f64 {
        self.origin.x
    }

    pub fn max_x(&self) -> f64 {
        self.origin.x + self.size.width
    }

    pub fn min_y(&self) -> f64 {
        self.origin.y
    }

    pub fn max_y(&self) -> f64 {
        self.origin.y + self.size.height
    }

    /// Check if `other` lies entirely inside this rectangle (edges inclusive)
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.min_x() >= self.min_x()
            && other.max_x() <= self.max_x()
            && other.min_y() >= self.min_y()
            && other.max_y() <= self.max_y()
    }

    /// Convert to the winit top-left logical position used by `set_outer_position`.
    ///
    /// `primary_height` is the logical height of the primary display, which
    /// anchors both coordinate systems.
    pub fn to_top_left_position(&self, primary_height: f64) -> LogicalPosition<f64> {
        LogicalPosition::new(self.origin.x, primary_height - self.max_y())
    }
}

/// One display's full bounds and the part of it available to application windows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenGeometry {
    /// Full physical bounds of the display
    pub frame: Rect,
    /// Bounds excluding reserved system UI such as menu bars and docks
    pub visible_frame: Rect,
}

impl ScreenGeometry {
    /// Create screen geometry from platform-provided frames.
    ///
    /// `visible_frame` is expected to lie inside `frame`. Platforms are trusted
    /// here, so a violation is only logged.
    pub fn new(frame: Rect, visible_frame: Rect) -> Self {
        if !frame.contains_rect(&visible_frame) {
            log::warn!(
                "Screen visible frame {:?} extends outside full frame {:?}",
                visible_frame,
                frame
            );
        }
        Self {
            frame,
            visible_frame,
        }
    }

    /// Screen with no reserved system UI
    pub fn full(frame: Rect) -> Self {
        Self {
            frame,
            visible_frame: frame,
        }
    }

    /// Derive the visible frame by reserving logical insets on each edge.
    ///
    /// Insets larger than the frame collapse the visible frame to zero size
    /// instead of producing a negative extent.
    pub fn with_reserved(self, top: f64, bottom: f64, left: f64, right: f64) -> Self {
        let frame = self.frame;
        let width = (frame.width() - left - right).max(0.0);
        let height = (frame.height() - top - bottom).max(0.0);
        Self::new(
            frame,
            Rect::new(frame.min_x() + left, frame.min_y() + bottom, width, height),
        )
    }

    /// Build screen geometry from a winit monitor rectangle.
    ///
    /// `position` and `size` come from `MonitorHandle::position()` and
    /// `MonitorHandle::size()` (physical pixels, Y-down). `primary_height` is
    /// the logical height of the primary display. winit does not expose the
    /// work area, so the visible frame equals the full frame; use
    /// [`ScreenGeometry::with_reserved`] to carve out system UI.
    pub fn from_monitor(
        position: PhysicalPosition<i32>,
        size: PhysicalSize<u32>,
        scale_factor: f64,
        primary_height: f64,
    ) -> Self {
        let logical_pos: LogicalPosition<f64> = position.to_logical(scale_factor);
        let logical_size: LogicalSize<f64> = size.to_logical(scale_factor);
        let frame = Rect::new(
            logical_pos.x,
            primary_height - logical_pos.y - logical_size.height,
            logical_size.width,
            logical_size.height,
        );
        log::trace!(
            "Monitor at {:?} size {:?} (scale {}) -> frame {:?}",
            position,
            size,
            scale_factor,
            frame
        );
        Self::full(frame)
    }

    /// Pick the display for the panel from `screens` (primary first).
    ///
    /// An out-of-range `target_monitor` falls back to the primary display.
    /// Returns `None` only when no displays are available.
    pub fn select(screens: &[ScreenGeometry], target_monitor: Option<usize>) -> Option<Self> {
        let selected = match target_monitor {
            Some(index) => screens.get(index).or_else(|| {
                log::warn!(
                    "Target monitor {} not found ({} available), using primary",
                    index,
                    screens.len()
                );
                screens.first()
            }),
            None => screens.first(),
        };
        if selected.is_none() {
            log::warn!("No monitors available for quick terminal placement");
        }
        selected.copied()
    }
}

impl From<LogicalSize<f64>> for Size {
    fn from(size: LogicalSize<f64>) -> Self {
        Size::new(size.width, size.height)
    }
}

impl From<Size> for LogicalSize<f64> {
    fn from(size: Size) -> Self {
        LogicalSize::new(size.width, size.height)
    }
}
