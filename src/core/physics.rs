//! Semi-implicit Euler integration of a 2D mass-spring-damper.

use super::config::PhysicsParams;
use glam::DVec2;

/// Live simulation state shared by the frame loop and the drag handlers.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SimulationState {
    /// Pin to badge attachment point, in pixels.
    pub position: DVec2,
    /// Pixels per second.
    pub velocity: DVec2,
    /// While set the pointer owns `position`/`velocity` and the integrator
    /// leaves them alone.
    pub dragging: bool,
    pub active_pointer: Option<i32>,
}

impl SimulationState {
    pub fn at_rest(rest_length: f64) -> Self {
        Self::at(rest_position(rest_length))
    }

    pub fn at(position: DVec2) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    #[inline]
    pub fn displacement(&self, rest_length: f64) -> DVec2 {
        self.position - rest_position(rest_length)
    }

    /// `½m|v|² + ½k|x|²`
    pub fn energy(&self, params: &PhysicsParams, rest_length: f64) -> f64 {
        let d = self.displacement(rest_length);
        0.5 * params.mass * self.velocity.length_squared()
            + 0.5 * params.stiffness * d.length_squared()
    }

    pub fn is_at_rest(&self, rest_length: f64) -> bool {
        self.position == rest_position(rest_length) && self.velocity == DVec2::ZERO
    }
}

/// Equilibrium: straight down from the pin.
#[inline]
pub fn rest_position(rest_length: f64) -> DVec2 {
    DVec2::new(0.0, rest_length)
}

/// Outcome of one [`step`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// Pointer owns the state; nothing changed.
    Held,
    Moving,
    /// Snapped exactly onto the rest position this step (or already there).
    Settled,
}

/// Advance `state` by `dt` seconds (clamped to the params' stable range).
pub fn step(
    state: &mut SimulationState,
    params: &PhysicsParams,
    rest_length: f64,
    dt: f64,
) -> StepOutcome {
    if state.dragging {
        return StepOutcome::Held;
    }
    let dt = params.clamp_dt(dt);
    let rest = rest_position(rest_length);

    let displacement = state.position - rest;
    let accel = (-params.stiffness * displacement - params.damping * state.velocity) / params.mass;
    state.velocity += accel * dt;
    state.position += state.velocity * dt;

    let d = state.position - rest;
    let near_rest = d.x.abs() < params.stop_threshold_pos
        && d.y.abs() < params.stop_threshold_pos
        && state.velocity.length() < params.stop_threshold_vel;

    if near_rest {
        state.position = rest;
        state.velocity = DVec2::ZERO;
        StepOutcome::Settled
    } else {
        StepOutcome::Moving
    }
}
