// Starfield tuning
pub const STAR_COUNT: usize = 50;
pub const STAR_RADIUS: f64 = 1.5;
pub const MIN_INCREMENT: f64 = 0.01;
pub const MAX_INCREMENT: f64 = 0.05;

// Cursor lines
pub const LINE_DISTANCE: f64 = 200.0;
pub const LINE_WIDTH: f64 = 2.0;

// Timing
pub const TIME_STEP: f64 = 0.01; // phase advance per tick
pub const FRAME_INTERVAL_MS: u32 = 20; // ~50 Hz

// DOM
pub const CANVAS_ID: &str = "starCanvas";

/// Bundles the constants above so the renderer can be built with different
/// values in tests.
#[derive(Debug, Clone, PartialEq)]
pub struct StarfieldConfig {
    pub star_count: usize,
    pub star_radius: f64,
    pub min_increment: f64,
    pub max_increment: f64,
    pub line_distance: f64,
    pub line_width: f64,
    pub time_step: f64,
}

impl Default for StarfieldConfig {
    fn default() -> Self {
        Self {
            star_count: STAR_COUNT,
            star_radius: STAR_RADIUS,
            min_increment: MIN_INCREMENT,
            max_increment: MAX_INCREMENT,
            line_distance: LINE_DISTANCE,
            line_width: LINE_WIDTH,
            time_step: TIME_STEP,
        }
    }
}
