// Host-side tests for the spring-damper integrator.

use glam::DVec2;
use hanging_badge::core::*;

const L0: f64 = 240.0;

fn run_until_settled(state: &mut SimulationState, params: &PhysicsParams, dt: f64) -> Option<usize> {
    let max_steps = (20.0 / dt) as usize;
    for i in 0..max_steps {
        if step(state, params, L0, dt) == StepOutcome::Settled {
            return Some(i + 1);
        }
    }
    None
}

#[test]
fn converges_to_rest_across_dt_range() {
    let params = PhysicsParams::default();
    for dt in [0.001, 0.004, 1.0 / 60.0, 0.03, 0.05] {
        let mut s = SimulationState::at(DVec2::new(180.0, -60.0));
        let steps = run_until_settled(&mut s, &params, dt);
        assert!(steps.is_some(), "dt={} never settled", dt);
        assert_eq!(s.position, DVec2::new(0.0, L0));
        assert_eq!(s.velocity, DVec2::ZERO);
    }
}

#[test]
fn energy_decays_over_each_second() {
    let params = PhysicsParams::default();
    let dt = 1.0 / 60.0;
    let mut s = SimulationState::at(DVec2::new(-150.0, 400.0));
    let mut prev = s.energy(&params, L0);
    for _second in 0..3 {
        for _ in 0..60 {
            step(&mut s, &params, L0, dt);
        }
        let e = s.energy(&params, L0);
        assert!(e < prev, "energy rose from {} to {}", prev, e);
        prev = e;
    }
}

#[test]
fn rest_snap_is_idempotent() {
    let params = PhysicsParams::default();
    let mut s = SimulationState::at_rest(L0);
    for dt in [0.001, 0.016, 0.05, 10.0] {
        assert_eq!(step(&mut s, &params, L0, dt), StepOutcome::Settled);
        assert_eq!(s.position, DVec2::new(0.0, L0));
        assert_eq!(s.velocity, DVec2::ZERO);
    }
}

#[test]
fn snaps_when_inside_both_thresholds() {
    let params = PhysicsParams::default();
    let mut s = SimulationState::at(DVec2::new(0.01, L0 - 0.01));
    assert_eq!(step(&mut s, &params, L0, 0.001), StepOutcome::Settled);
    assert!(s.is_at_rest(L0));
}

#[test]
fn fast_badge_near_rest_keeps_moving() {
    let params = PhysicsParams::default();
    let mut s = SimulationState::at_rest(L0);
    s.velocity = DVec2::new(50.0, 0.0);
    assert_eq!(step(&mut s, &params, L0, 0.016), StepOutcome::Moving);
    assert!(s.position.x > 0.0);
}

#[test]
fn dragging_blocks_integration() {
    let params = PhysicsParams::default();
    let mut s = SimulationState::at(DVec2::new(30.0, 10.0));
    s.velocity = DVec2::new(5.0, -7.0);
    s.dragging = true;
    let before = s;
    for _ in 0..500 {
        assert_eq!(step(&mut s, &params, L0, 0.016), StepOutcome::Held);
    }
    assert_eq!(s, before);
}

#[test]
fn large_frame_gaps_are_clamped() {
    let params = PhysicsParams::default();
    let mut clamped = SimulationState::at(DVec2::new(100.0, 0.0));
    let mut reference = clamped;
    // a 5 s tab switch must behave like a single max_dt step
    step(&mut clamped, &params, L0, 5.0);
    step(&mut reference, &params, L0, params.max_dt);
    assert_eq!(clamped, reference);

    let mut tiny = SimulationState::at(DVec2::new(100.0, 0.0));
    let mut floor = tiny;
    step(&mut tiny, &params, L0, 0.0);
    step(&mut floor, &params, L0, params.min_dt);
    assert_eq!(tiny, floor);
}

#[test]
fn semi_implicit_update_order() {
    let params = PhysicsParams::default();
    let mut s = SimulationState::at(DVec2::new(10.0, L0));
    let dt = 0.01;
    step(&mut s, &params, L0, dt);
    // v = a·dt first, then x uses the new v
    let v = -params.stiffness * 10.0 / params.mass * dt;
    assert!((s.velocity.x - v).abs() < 1e-12);
    assert!((s.position.x - (10.0 + v * dt)).abs() < 1e-12);
    assert_eq!(s.position.y, L0);
}
