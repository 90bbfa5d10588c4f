// Host-side tests for geometry conversions and the render projector.

use glam::DVec2;
use hanging_badge::core::*;

#[test]
fn hanger_straight_down_is_zero_degrees() {
    let v = project_hanger(DVec2::new(0.0, 240.0));
    assert_eq!(v.angle_deg, 0.0);
    assert_eq!(v.length, 240.0);
    assert_eq!(v.length_css(), "240px");
}

#[test]
fn hanger_horizontal_is_quarter_turn() {
    let v = project_hanger(DVec2::new(100.0, 0.0));
    assert!((v.angle_deg + 90.0).abs() < 1e-12, "got {}", v.angle_deg);
    assert_eq!(v.length, 100.0);

    let v = project_hanger(DVec2::new(-100.0, 0.0));
    assert!((v.angle_deg - 90.0).abs() < 1e-12);
}

#[test]
fn hanger_diagonal() {
    let v = project_hanger(DVec2::new(30.0, 40.0));
    assert_eq!(v.length, 50.0);
    assert!((v.angle_deg + (30.0f64).atan2(40.0).to_degrees()).abs() < 1e-12);
}

#[test]
fn pointer_vector_is_offset_from_pin() {
    let pin = DVec2::new(512.5, 80.25);
    let client = DVec2::new(700.0, 410.0);
    let v = pointer_to_vector(client, pin);
    assert_eq!(v, DVec2::new(187.5, 329.75));
    assert_eq!(pin + v, client);
    assert_eq!(pointer_to_vector(pin, pin), DVec2::ZERO);
}

#[test]
fn rect_helpers() {
    let r = Rect::new(10.0, 20.0, 200.0, 100.0);
    assert_eq!(r.right(), 210.0);
    assert_eq!(r.center(), DVec2::new(110.0, 70.0));
    assert_eq!(to_local(DVec2::new(15.0, 25.0), &r), DVec2::new(5.0, 5.0));
}

fn geometry_at_rest() -> AnchorGeometry {
    // anchor at (50, 20), pin centred 100 px in, attachments 240 px below
    // the cord starts
    AnchorGeometry {
        pin_center: DVec2::new(150.0, 40.0),
        anchor: Rect::new(50.0, 20.0, 200.0, 400.0),
        attach_left: Rect::new(142.0, 280.0, 4.0, 4.0),
        attach_right: Rect::new(158.0, 280.0, 4.0, 4.0),
    }
}

#[test]
fn cords_hang_straight_when_attachments_are_below_starts() {
    let cords = project_cords(&geometry_at_rest(), 16.0);
    assert_eq!(cords.left.start, DVec2::new(92.0, 20.0));
    assert_eq!(cords.right.start, DVec2::new(108.0, 20.0));
    assert_eq!(cords.left.end, DVec2::new(92.0, 260.0));
    assert_eq!(cords.right.end, DVec2::new(108.0, 260.0));
    assert_eq!(cords.left.length, 240.0);
    assert_eq!(cords.left.angle_deg, 0.0);
    assert_eq!(cords.right.angle_deg, 0.0);
}

#[test]
fn cords_splay_towards_wider_attachments() {
    let mut g = geometry_at_rest();
    g.attach_left.left -= 40.0;
    g.attach_right.left += 40.0;
    let cords = project_cords(&g, 16.0);
    // left cord leans left (positive CSS rotation), right leans right
    assert!(cords.left.angle_deg > 0.0);
    assert!(cords.right.angle_deg < 0.0);
    assert!((cords.left.angle_deg + cords.right.angle_deg).abs() < 1e-12);
    assert!((cords.left.length - (240.0f64 * 240.0 + 40.0 * 40.0).sqrt()).abs() < 1e-9);
}

#[test]
fn cords_follow_layout_shift_without_state_change() {
    let g = geometry_at_rest();
    let shift = DVec2::new(0.0, -300.0);
    let scrolled = AnchorGeometry {
        pin_center: g.pin_center + shift,
        anchor: Rect::new(g.anchor.left, g.anchor.top + shift.y, g.anchor.width, g.anchor.height),
        attach_left: Rect::new(g.attach_left.left, g.attach_left.top + shift.y, 4.0, 4.0),
        attach_right: Rect::new(g.attach_right.left, g.attach_right.top + shift.y, 4.0, 4.0),
    };
    assert_eq!(project_cords(&g, 16.0), project_cords(&scrolled, 16.0));
}

#[test]
fn cord_transform_css() {
    let seg = CordSegment::between(DVec2::ZERO, DVec2::new(-10.0, 0.0));
    assert!((seg.angle_deg - 90.0).abs() < 1e-9);
    assert_eq!(
        seg.transform_css(),
        format!("translateX(-50%) rotate({}deg)", seg.angle_deg)
    );
    assert!(seg.transform_css().starts_with("translateX(-50%) rotate("));
}
