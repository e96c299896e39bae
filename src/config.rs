// All tunable animation constants in one place.

// Spawner
pub const SPAWN_PERIOD: f64 = 0.3;
pub const SPAWN_Y_OFFSET: f32 = 20.0;

// Hearts
pub const HEART_SIZE_MIN: f32 = 20.0;
pub const HEART_SIZE_MAX: f32 = 50.0;
pub const HEART_RISE_SPEED_MIN: f32 = 0.3;
pub const HEART_RISE_SPEED_MAX: f32 = 1.3;
pub const HEART_DRIFT_SPEED_MAX: f32 = 0.6;
pub const HEART_DRIFT_JITTER: f32 = 0.05;
pub const HEART_EXPLODE_CHANCE: f64 = 0.1;
pub const TARGET_HEIGHT_MIN_FRAC: f32 = 0.1;
pub const TARGET_HEIGHT_MAX_FRAC: f32 = 0.6;
pub const HEART_ALPHA_FLOOR: f32 = 0.2;
pub const HEART_ALPHA_RANGE: f32 = 0.8;

// Confetti bursts
pub const BURST_COUNT_MIN: usize = 20;
pub const BURST_COUNT_MAX: usize = 60;
pub const BURST_SPEED_MIN: f32 = 1.0;
pub const BURST_SPEED_MAX: f32 = 6.0;
pub const CONFETTO_SIZE_MIN: f32 = 3.0;
pub const CONFETTO_SIZE_MAX: f32 = 9.0;
pub const CONFETTO_ALPHA_MIN: f32 = 0.5;
pub const CONFETTO_FADE_PER_FRAME: f32 = 0.01;

// Palette: three weighted hue bands (degrees)
pub const HUE_BAND_RED: (f32, f32) = (0.0, 30.0);
pub const HUE_BAND_CYAN: (f32, f32) = (180.0, 240.0);
pub const HUE_BAND_PINK: (f32, f32) = (330.0, 360.0);
pub const HUE_WEIGHT_RED: f64 = 0.3;
pub const HUE_WEIGHT_CYAN: f64 = 0.3;
pub const SATURATION_MIN: f32 = 70.0;
pub const SATURATION_MAX: f32 = 100.0;
pub const LIGHTNESS_MIN: f32 = 40.0;
pub const LIGHTNESS_MAX: f32 = 100.0;

// Window
pub const WINDOW_WIDTH: i32 = 1280;
pub const WINDOW_HEIGHT: i32 = 800;
