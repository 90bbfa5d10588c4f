//! One-shot choice of the initial state: drop in from off-screen, or start
//! at rest when motion is unwanted.

use super::config::BadgeConfig;
use super::constants::{ENTRANCE_MARGIN_FRACTION, ENTRANCE_MIN_MARGIN};
use super::geometry::{pointer_to_vector, Rect};
use super::physics::SimulationState;
use glam::DVec2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Entrance {
    /// Seeded off-screen; the spring pulls it in.
    Drop,
    AtRest,
}

impl Entrance {
    pub fn choose(cfg: &BadgeConfig, prefers_reduced_motion: bool) -> Self {
        if cfg.entrance_enabled && !prefers_reduced_motion {
            Entrance::Drop
        } else {
            Entrance::AtRest
        }
    }
}

/// Up and to the right of the anchor, by a margin that grows with its size.
pub fn offscreen_start(anchor: &Rect, pin_center: DVec2) -> DVec2 {
    let margin = ENTRANCE_MIN_MARGIN.max(anchor.width.min(anchor.height) * ENTRANCE_MARGIN_FRACTION);
    let screen = DVec2::new(anchor.right() + margin, anchor.top - margin);
    pointer_to_vector(screen, pin_center)
}

pub fn initial_state(
    entrance: Entrance,
    cfg: &BadgeConfig,
    anchor: &Rect,
    pin_center: DVec2,
) -> SimulationState {
    match entrance {
        Entrance::Drop => SimulationState::at(offscreen_start(anchor, pin_center)),
        Entrance::AtRest => SimulationState::at_rest(cfg.rest_length),
    }
}
