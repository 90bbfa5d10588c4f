//! Frame clock and the badge aggregate the animation loop drives.

use super::config::BadgeConfig;
use super::entrance::{initial_state, Entrance};
use super::geometry::Rect;
use super::input::{DragMachine, PointerSample, Transition};
use super::physics::{self, SimulationState, StepOutcome};
use super::projector::{project_cords, project_hanger, AnchorGeometry, CordPair, HangerVisual};
use glam::DVec2;

/// Turns animation-frame timestamps into integrator time steps.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameClock {
    last_ts_ms: Option<f64>,
}

impl FrameClock {
    /// Raw elapsed seconds since the previous frame; zero on the first.
    /// Clamping is left to the integrator.
    pub fn advance(&mut self, ts_ms: f64) -> f64 {
        let last = self.last_ts_ms.replace(ts_ms).unwrap_or(ts_ms);
        (ts_ms - last) / 1000.0
    }

    pub fn reset(&mut self) {
        self.last_ts_ms = None;
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum LoopState {
    #[default]
    Stopped,
    Running,
}

/// Owns the whole simulation. The DOM layer shares one of these behind
/// `Rc<RefCell<_>>` between the frame callback and the event listeners.
#[derive(Clone, Debug)]
pub struct BadgeSim {
    pub config: BadgeConfig,
    pub state: SimulationState,
    pub pin_center: DVec2,
    drag: DragMachine,
    clock: FrameClock,
    loop_state: LoopState,
}

impl BadgeSim {
    pub fn new(config: BadgeConfig, state: SimulationState, pin_center: DVec2) -> Self {
        Self {
            config,
            state,
            pin_center,
            drag: DragMachine::new(),
            clock: FrameClock::default(),
            loop_state: LoopState::Stopped,
        }
    }

    /// Entrance sequencing: pick the initial state from the motion preference.
    pub fn with_entrance(
        config: BadgeConfig,
        prefers_reduced_motion: bool,
        anchor: &Rect,
        pin_center: DVec2,
    ) -> (Self, Entrance) {
        let entrance = Entrance::choose(&config, prefers_reduced_motion);
        let state = initial_state(entrance, &config, anchor, pin_center);
        (Self::new(config, state, pin_center), entrance)
    }

    /// Marks the loop running. Returns `true` if the caller must schedule the
    /// first frame.
    pub fn ensure_running(&mut self) -> bool {
        match self.loop_state {
            LoopState::Running => false,
            LoopState::Stopped => {
                self.loop_state = LoopState::Running;
                self.clock.reset();
                true
            }
        }
    }

    pub fn pointer_down(&mut self, sample: PointerSample, button: Option<i16>) -> Transition {
        self.drag
            .pointer_down(&mut self.state, sample, button, self.pin_center)
    }

    pub fn pointer_move(&mut self, sample: PointerSample) -> Transition {
        self.drag
            .pointer_move(&mut self.state, sample, self.pin_center)
    }

    pub fn pointer_release(&mut self, pointer_id: Option<i32>) -> Transition {
        self.drag.release(
            &mut self.state,
            pointer_id,
            &self.config.physics,
            self.config.rest_length,
        )
    }

    /// One integrator step of `dt` seconds (a no-op while dragging).
    pub fn step(&mut self, dt: f64) -> StepOutcome {
        physics::step(
            &mut self.state,
            &self.config.physics,
            self.config.rest_length,
            dt,
        )
    }

    /// Integrator half of a frame; projection happens when painting.
    pub fn tick(&mut self, ts_ms: f64) -> StepOutcome {
        let dt = self.clock.advance(ts_ms);
        self.step(dt)
    }

    #[inline]
    pub fn hanger_visual(&self) -> HangerVisual {
        project_hanger(self.state.position)
    }

    /// Project the cords onto a fresh layout read. The pin centre used for
    /// pointer conversion is taken from the same read.
    pub fn follow_layout(&mut self, geom: &AnchorGeometry) -> CordPair {
        self.pin_center = geom.pin_center;
        project_cords(geom, self.config.cord_split)
    }
}
