//! Single-pointer drag state machine.
//!
//! `Idle --down--> Dragging --move--> Dragging --up/cancel/blur--> Idle`.
//! Events from any pointer other than the captured one are no-ops.

use super::config::PhysicsParams;
use super::geometry::pointer_to_vector;
use super::physics::{rest_position, SimulationState};
use glam::DVec2;

/// Floor for the interval between two pointer samples, in milliseconds.
pub const MIN_SAMPLE_INTERVAL_MS: f64 = 1.0;

/// One pointer event reduced to what the simulation needs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerSample {
    pub pointer_id: i32,
    pub client: DVec2,
    /// Event timestamp in milliseconds.
    pub time_ms: f64,
}

impl PointerSample {
    pub fn new(pointer_id: i32, client_x: f64, client_y: f64, time_ms: f64) -> Self {
        Self {
            pointer_id,
            client: DVec2::new(client_x, client_y),
            time_ms,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DragPhase {
    #[default]
    Idle,
    Dragging {
        pointer_id: i32,
    },
}

/// What a handler call did, so the DOM layer knows which side effects to run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    Ignored,
    Started { pointer_id: i32 },
    Moved,
    Released { pointer_id: i32, kicked: bool },
}

#[derive(Clone, Copy, Debug, Default)]
struct Sample {
    vector: DVec2,
    time_ms: f64,
}

#[derive(Clone, Debug, Default)]
pub struct DragMachine {
    phase: DragPhase,
    last: Option<Sample>,
}

impl DragMachine {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, DragPhase::Dragging { .. })
    }

    fn owns(&self, pointer_id: i32) -> bool {
        matches!(self.phase, DragPhase::Dragging { pointer_id: id } if id == pointer_id)
    }

    /// Primary-button press on the badge. `button` is `None` when the event
    /// carries no button information, which counts as primary.
    pub fn pointer_down(
        &mut self,
        state: &mut SimulationState,
        sample: PointerSample,
        button: Option<i16>,
        pin_center: DVec2,
    ) -> Transition {
        if button.is_some_and(|b| b != 0) || self.is_dragging() {
            return Transition::Ignored;
        }
        let v = pointer_to_vector(sample.client, pin_center);
        state.position = v;
        state.velocity = DVec2::ZERO;
        state.dragging = true;
        state.active_pointer = Some(sample.pointer_id);

        self.phase = DragPhase::Dragging {
            pointer_id: sample.pointer_id,
        };
        self.last = Some(Sample {
            vector: v,
            time_ms: sample.time_ms,
        });
        Transition::Started {
            pointer_id: sample.pointer_id,
        }
    }

    /// Follow the pointer and estimate velocity from the previous sample.
    pub fn pointer_move(
        &mut self,
        state: &mut SimulationState,
        sample: PointerSample,
        pin_center: DVec2,
    ) -> Transition {
        if !self.owns(sample.pointer_id) {
            return Transition::Ignored;
        }
        let v = pointer_to_vector(sample.client, pin_center);
        let prev = self.last.unwrap_or(Sample {
            vector: v,
            time_ms: sample.time_ms,
        });
        let dt_sec = (sample.time_ms - prev.time_ms).max(MIN_SAMPLE_INTERVAL_MS) / 1000.0;

        state.velocity = (v - prev.vector) / dt_sec;
        state.position = v;
        self.last = Some(Sample {
            vector: v,
            time_ms: sample.time_ms,
        });
        Transition::Moved
    }

    /// Pointer up, pointer cancel or window blur. `pointer_id` is `None` for
    /// blur, which ends any drag in progress.
    pub fn release(
        &mut self,
        state: &mut SimulationState,
        pointer_id: Option<i32>,
        params: &PhysicsParams,
        rest_length: f64,
    ) -> Transition {
        let DragPhase::Dragging { pointer_id: owner } = self.phase else {
            return Transition::Ignored;
        };
        if pointer_id.is_some_and(|id| id != owner) {
            return Transition::Ignored;
        }

        self.phase = DragPhase::Idle;
        self.last = None;
        state.dragging = false;
        state.active_pointer = None;
        state.velocity *= params.release_boost;

        let d = state.position - rest_position(rest_length);
        let kicked = state.velocity.length() < params.drop_speed_floor
            && d.x.abs() < params.drop_rest_tolerance
            && d.y.abs() < params.drop_rest_tolerance;
        if kicked {
            state.velocity.y += params.drop_impulse;
        }
        Transition::Released {
            pointer_id: owner,
            kicked,
        }
    }
}
