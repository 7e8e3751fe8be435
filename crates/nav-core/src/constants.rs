/// Shared tuning constants for the navigation experience.
///
/// These express intended behavior (speeds, delays, envelope times) and keep
/// magic numbers out of the simulation and front-end code.
// Star field
pub const STAR_COUNT: usize = 800;
pub const DRIFT_SPEED: f32 = 2.0; // depth units per frame while idle
pub const WARP_SPEED: f32 = 200.0; // depth units per frame while warping
pub const MIN_STAR_RADIUS: f32 = 0.1;
pub const DRIFT_MAX_RADIUS: f32 = 1.5; // nearest-star dot radius while idle
pub const WARP_MAX_RADIUS: f32 = 3.0; // nearest-star streak width while warping

// Warp countdown
pub const WARP_TRAVEL_MS: u64 = 4500;

// Typewriter
pub const TYPE_INTERVAL_MS: f64 = 20.0;
pub const TYPE_TICK_EVERY: u32 = 2; // data-stream blip cadence, in revealed chars

// Audio mix
pub const MASTER_GAIN: f32 = 0.3;
pub const AMBIENT_GAIN: f32 = 0.15;

// Ambient drone: near-unison pair plus an octave-ish partial for slow beating
pub const AMBIENT_FREQS: [f32; 3] = [50.0, 52.0, 110.0];
pub const AMBIENT_LFO_RATE_BASE: f32 = 0.1; // Hz, randomized upward per oscillator
pub const AMBIENT_LFO_RATE_SPAN: f32 = 0.2;
pub const AMBIENT_LFO_DEPTH: f32 = 5.0; // Hz of frequency wobble

// Warp/arrival pitch bends applied to the ambient oscillators
pub const WARP_PITCH_MULT: f32 = 4.0;
pub const WARP_BEND_SEC: f64 = 2.0;
pub const ARRIVAL_SETTLE_SEC: f64 = 2.0;

// Narrative log service
pub const LOG_ENDPOINT: &str = "/api/arrival-log";
pub const LOG_FALLBACK: &str = "错误：通信阵列离线。无法获取详细遥测数据。";
