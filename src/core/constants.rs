/// Default tuning for the badge simulation.
///
/// Distances are CSS pixels, velocities pixels per second, times seconds
/// unless the name says otherwise.
// Spring-damper feel
pub const DEFAULT_MASS: f64 = 1.0;
pub const DEFAULT_STIFFNESS: f64 = 120.0;
pub const DEFAULT_DAMPING: f64 = 6.5; // critical ~ 2*sqrt(k*m) ~ 21.9

// Release behaviour
pub const DEFAULT_RELEASE_BOOST: f64 = 1.6;
pub const DROP_SPEED_FLOOR: f64 = 0.05; // below this a release counts as a gentle drop
pub const DROP_REST_TOLERANCE: f64 = 0.5; // px from rest on both axes
pub const DROP_IMPULSE: f64 = 12.0; // downward kick (+y) for a gentle drop at rest

// Rest detection
pub const STOP_THRESHOLD_POS: f64 = 0.05;
pub const STOP_THRESHOLD_VEL: f64 = 0.2;

// Time step clamp
pub const MIN_DT_SEC: f64 = 0.001;
pub const MAX_DT_SEC: f64 = 0.05;

// Layout defaults, overridable from CSS custom properties
pub const DEFAULT_REST_LENGTH: f64 = 240.0;
pub const DEFAULT_CORD_SPLIT: f64 = 16.0;
pub const REST_LENGTH_VAR: &str = "--string-length";
pub const CORD_SPLIT_VAR: &str = "--lanyard-split";

// Entrance
pub const ENTRANCE_MIN_MARGIN: f64 = 120.0;
pub const ENTRANCE_MARGIN_FRACTION: f64 = 0.18; // of the anchor's shorter side
