//! Tuning and layout configuration, populated once at start-up.

use super::constants::*;
use thiserror::Error;

/// Rejected physics tuning.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("mass must be positive and finite, got {0}")]
    InvalidMass(f64),
    #[error("stiffness must be positive and finite, got {0}")]
    InvalidStiffness(f64),
    #[error("damping must be non-negative and finite, got {0}")]
    InvalidDamping(f64),
    #[error("release boost must be at least 1.0, got {0}")]
    InvalidReleaseBoost(f64),
    #[error("time step clamp [{min}, {max}] is empty or non-positive")]
    InvalidTimeStep { min: f64, max: f64 },
    #[error("rest length must be positive and finite, got {0}")]
    InvalidRestLength(f64),
}

/// Integrator and release tuning.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhysicsParams {
    pub mass: f64,
    pub stiffness: f64,
    /// Keep below [`critical_damping`](Self::critical_damping) for a swingy feel.
    pub damping: f64,
    /// Multiplier applied to the drag velocity on release.
    pub release_boost: f64,
    pub stop_threshold_pos: f64,
    pub stop_threshold_vel: f64,
    pub min_dt: f64,
    pub max_dt: f64,
    pub drop_speed_floor: f64,
    pub drop_rest_tolerance: f64,
    pub drop_impulse: f64,
}

impl Default for PhysicsParams {
    fn default() -> Self {
        Self {
            mass: DEFAULT_MASS,
            stiffness: DEFAULT_STIFFNESS,
            damping: DEFAULT_DAMPING,
            release_boost: DEFAULT_RELEASE_BOOST,
            stop_threshold_pos: STOP_THRESHOLD_POS,
            stop_threshold_vel: STOP_THRESHOLD_VEL,
            min_dt: MIN_DT_SEC,
            max_dt: MAX_DT_SEC,
            drop_speed_floor: DROP_SPEED_FLOOR,
            drop_rest_tolerance: DROP_REST_TOLERANCE,
            drop_impulse: DROP_IMPULSE,
        }
    }
}

impl PhysicsParams {
    pub fn with_mass(mut self, mass: f64) -> Self {
        self.mass = mass;
        self
    }

    pub fn with_stiffness(mut self, stiffness: f64) -> Self {
        self.stiffness = stiffness;
        self
    }

    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    pub fn with_release_boost(mut self, boost: f64) -> Self {
        self.release_boost = boost;
        self
    }

    pub fn with_drop_impulse(mut self, impulse: f64) -> Self {
        self.drop_impulse = impulse;
        self
    }

    /// `2·sqrt(k·m)`
    #[inline]
    pub fn critical_damping(&self) -> f64 {
        2.0 * (self.stiffness * self.mass).sqrt()
    }

    #[inline]
    pub fn is_underdamped(&self) -> bool {
        self.damping < self.critical_damping()
    }

    /// Clamp a raw frame interval into the stable integration range.
    #[inline]
    pub fn clamp_dt(&self, dt: f64) -> f64 {
        if dt.is_nan() {
            return self.min_dt;
        }
        dt.clamp(self.min_dt, self.max_dt)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.mass.is_finite() && self.mass > 0.0) {
            return Err(ConfigError::InvalidMass(self.mass));
        }
        if !(self.stiffness.is_finite() && self.stiffness > 0.0) {
            return Err(ConfigError::InvalidStiffness(self.stiffness));
        }
        if !(self.damping.is_finite() && self.damping >= 0.0) {
            return Err(ConfigError::InvalidDamping(self.damping));
        }
        if !(self.release_boost.is_finite() && self.release_boost >= 1.0) {
            return Err(ConfigError::InvalidReleaseBoost(self.release_boost));
        }
        if !(self.min_dt > 0.0 && self.min_dt <= self.max_dt && self.max_dt.is_finite()) {
            return Err(ConfigError::InvalidTimeStep {
                min: self.min_dt,
                max: self.max_dt,
            });
        }
        Ok(())
    }
}

/// Everything the badge needs to know before the first frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BadgeConfig {
    /// Equilibrium distance from pin to badge (`--string-length`).
    pub rest_length: f64,
    /// Horizontal separation of the two cord starts at the pin (`--lanyard-split`).
    pub cord_split: f64,
    /// Play the drop-in entrance when reduced motion is not requested.
    pub entrance_enabled: bool,
    pub physics: PhysicsParams,
}

impl Default for BadgeConfig {
    fn default() -> Self {
        Self {
            rest_length: DEFAULT_REST_LENGTH,
            cord_split: DEFAULT_CORD_SPLIT,
            entrance_enabled: true,
            physics: PhysicsParams::default(),
        }
    }
}

impl BadgeConfig {
    /// Build from a style-property lookup (e.g. computed style of `<html>`).
    /// Missing or malformed values keep their defaults; a rest length must be
    /// positive and a cord split non-negative to count as well-formed.
    pub fn from_lookup<F>(mut lookup: F) -> Self
    where
        F: FnMut(&str) -> Option<String>,
    {
        let mut cfg = Self::default();
        cfg.rest_length = lookup(REST_LENGTH_VAR)
            .map(|raw| parse_css_number(&raw, DEFAULT_REST_LENGTH))
            .filter(|&n| n > 0.0)
            .unwrap_or(DEFAULT_REST_LENGTH);
        cfg.cord_split = lookup(CORD_SPLIT_VAR)
            .map(|raw| parse_css_number(&raw, DEFAULT_CORD_SPLIT))
            .filter(|&n| n >= 0.0)
            .unwrap_or(DEFAULT_CORD_SPLIT);
        cfg
    }

    pub fn with_entrance(mut self, enabled: bool) -> Self {
        self.entrance_enabled = enabled;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.rest_length.is_finite() && self.rest_length > 0.0) {
            return Err(ConfigError::InvalidRestLength(self.rest_length));
        }
        self.physics.validate()
    }
}

/// Parse the leading number of a CSS value such as `"240px"` or `" 1.5e1 "`.
///
/// Mirrors `parseFloat`: surrounding whitespace and any trailing unit are
/// ignored. Empty, non-numeric and non-finite input returns `fallback`.
pub fn parse_css_number(raw: &str, fallback: f64) -> f64 {
    let s = raw.trim();
    let bytes = s.as_bytes();
    let mut end = 0;
    let mut seen_digit = false;
    let mut seen_dot = false;
    let mut seen_exp = false;

    if end < bytes.len() && (bytes[end] == b'+' || bytes[end] == b'-') {
        end += 1;
    }
    while end < bytes.len() {
        match bytes[end] {
            b'0'..=b'9' => {
                seen_digit = true;
                end += 1;
            }
            b'.' if !seen_dot && !seen_exp => {
                seen_dot = true;
                end += 1;
            }
            b'e' | b'E' if seen_digit && !seen_exp => {
                // only an exponent if digits follow
                let mut j = end + 1;
                if j < bytes.len() && (bytes[j] == b'+' || bytes[j] == b'-') {
                    j += 1;
                }
                if j < bytes.len() && bytes[j].is_ascii_digit() {
                    seen_exp = true;
                    end = j;
                } else {
                    break;
                }
            }
            _ => break,
        }
    }
    if !seen_digit {
        return fallback;
    }
    match s[..end].parse::<f64>() {
        Ok(n) if n.is_finite() => n,
        _ => fallback,
    }
}
