//! Maps simulation state and live layout to the values the stylesheet
//! consumes: hanger rotation/length and the two cord segments.

use super::geometry::{css_angle_deg, to_local, Rect};
use glam::DVec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HangerVisual {
    pub angle_deg: f64,
    pub length: f64,
}

impl HangerVisual {
    /// Value for the `--angle` custom property.
    pub fn angle_css(&self) -> String {
        format!("{}deg", self.angle_deg)
    }

    /// Value for the `--current-length` custom property.
    pub fn length_css(&self) -> String {
        format!("{}px", self.length)
    }
}

#[inline]
pub fn project_hanger(position: DVec2) -> HangerVisual {
    HangerVisual {
        angle_deg: css_angle_deg(position),
        length: position.length(),
    }
}

/// A straight cord, in anchor-local pixels, hanging from `start`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CordSegment {
    pub start: DVec2,
    pub end: DVec2,
    pub length: f64,
    pub angle_deg: f64,
}

impl CordSegment {
    pub fn between(start: DVec2, end: DVec2) -> Self {
        let delta = end - start;
        Self {
            start,
            end,
            length: delta.length(),
            angle_deg: css_angle_deg(delta),
        }
    }

    pub fn transform_css(&self) -> String {
        format!("translateX(-50%) rotate({}deg)", self.angle_deg)
    }
}

/// Live layout read for one frame. Never cached across frames.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnchorGeometry {
    pub pin_center: DVec2,
    pub anchor: Rect,
    /// Bounding rects of the left/right attachment points on the badge.
    pub attach_left: Rect,
    pub attach_right: Rect,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CordPair {
    pub left: CordSegment,
    pub right: CordSegment,
}

/// Cords start `split/2` either side of the pin centre and end at the
/// top-left corner of each attachment rect.
pub fn project_cords(geom: &AnchorGeometry, split: f64) -> CordPair {
    let half = DVec2::new(split / 2.0, 0.0);
    let start_l = to_local(geom.pin_center - half, &geom.anchor);
    let start_r = to_local(geom.pin_center + half, &geom.anchor);
    let end_l = to_local(geom.attach_left.top_left(), &geom.anchor);
    let end_r = to_local(geom.attach_right.top_left(), &geom.anchor);
    CordPair {
        left: CordSegment::between(start_l, end_l),
        right: CordSegment::between(start_r, end_r),
    }
}
