//! Coordinate conversions between screen space, the pin-relative offset
//! vector and container-local coordinates.
//!
//! Nothing here touches the DOM; callers pass in bounding rectangles they
//! have already read.

use glam::DVec2;

/// Axis-aligned rectangle in client (viewport) pixels, as reported by
/// `getBoundingClientRect`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    #[inline]
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    #[inline]
    pub fn top_left(&self) -> DVec2 {
        DVec2::new(self.left, self.top)
    }

    #[inline]
    pub fn center(&self) -> DVec2 {
        DVec2::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }
}

/// Offset from the pin centre to a screen point. This is the simulation's
/// `position` space.
#[inline]
pub fn pointer_to_vector(client: DVec2, pin_center: DVec2) -> DVec2 {
    client - pin_center
}

/// Screen point expressed relative to the top-left corner of `container`.
#[inline]
pub fn to_local(client: DVec2, container: &Rect) -> DVec2 {
    client - container.top_left()
}

/// Rotation, in degrees, that turns a downward-hanging segment onto `delta`.
///
/// Straight down is 0°; positive x swings give negative angles, which is the
/// direction CSS `rotate()` needs for an element hanging from its top edge.
#[inline]
pub fn css_angle_deg(delta: DVec2) -> f64 {
    -delta.x.atan2(delta.y).to_degrees()
}
