// --- Simulation Constants ---
pub const DEFAULT_DRIFTER_COUNT: usize = 12;
pub const DRIFTER_SPEED: f64 = 0.4;
pub const DRIFTER_TURN_JITTER: f64 = 0.15; // Max heading change per frame, radians

pub const SEEKER_MAX_SPEED: f64 = 0.7;
pub const SEEKER_STEERING_GAIN: f64 = 0.08;
pub const CATCH_RADIUS: f64 = 1.5;

pub const FRAME_DURATION_MS: u64 = 50;
pub const DEFAULT_HEADLESS_FRAMES: u64 = 10;

pub const DEFAULT_HEADLESS_WIDTH: u16 = 80;
pub const DEFAULT_HEADLESS_HEIGHT: u16 = 24;

pub const LOG_FILE: &str = "vector2d-drift.log";
