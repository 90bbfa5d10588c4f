use crate::core::{BadgeSim, CordSegment, HangerVisual};
use crate::dom::BadgeElements;
use web_sys as web;

#[inline]
pub fn apply_hanger(hanger: &web::HtmlElement, v: &HangerVisual) {
    let style = hanger.style();
    _ = style.set_property("--angle", &v.angle_css());
    _ = style.set_property("--current-length", &v.length_css());
}

#[inline]
pub fn apply_cord(cord: &web::HtmlElement, seg: &CordSegment) {
    let style = cord.style();
    _ = style.set_property("left", &format!("{}px", seg.start.x));
    _ = style.set_property("top", &format!("{}px", seg.start.y));
    _ = style.set_property("height", &format!("{}px", seg.length));
    _ = style.set_property("transform", &seg.transform_css());
}

/// Paint hanger and cords from the current state. Layout, pin included, is
/// re-read after the hanger moves so the cords follow it, and any scroll,
/// resize or reflow, even while the badge is at rest.
pub fn paint(els: &BadgeElements, sim: &mut BadgeSim) {
    apply_hanger(&els.hanger, &sim.hanger_visual());
    let cords = sim.follow_layout(&els.geometry());
    apply_cord(&els.cord_left, &cords.left);
    apply_cord(&els.cord_right, &cords.right);
}
