/// Visual and tempo tuning constants.
///
/// These express intended behavior (pulse gains, shading weights, clamp
/// limits) and keep magic numbers out of the render path.
// Field limits
pub const MAX_RINGS: usize = 12;
pub const MIN_RING_POINTS: usize = 3;
pub const MIN_RING_RADIUS: f32 = 0.08;
pub const MAX_RING_RADIUS: f32 = 2.0;
pub const INNER_RADIUS_FACTOR: f32 = 0.78; // each appended inner ring shrinks by this
pub const OUTER_RADIUS_FACTOR: f32 = 1.22; // each appended outer ring grows by this

// Default ring layout (outermost first, normalized scene units)
pub const DEFAULT_RING_RADII: [f32; 4] = [1.06, 0.84, 0.62, 0.44];
pub const POINTS_PER_UNIT_RADIUS: f32 = 360.0;
pub const MIN_DEFAULT_POINTS: usize = 160;

// Jitter applied to ring centers (scaled by ring radius)
pub const OFFSET_JITTER: f32 = 0.06;
pub const OFFSET_JITTER_Y_SCALE: f32 = 0.6;

// Glyph accent ticks
pub const GLYPH_STRIDES: [usize; 3] = [9, 11, 13];
pub const GLYPH_DEPTH_MIN: f32 = 0.35; // ticks on the far side are suppressed
pub const GLYPH_WIDTH_RATIO: f32 = 0.7;
pub const GLYPH_ALPHA_BONUS: f32 = 0.2;
pub const GLYPH_BRIGHTEN: f32 = 0.06;

// Tempo defaults
pub const DEFAULT_RESET_PERIOD: f64 = 10.0; // seconds per full realignment
pub const DEFAULT_BPM: f64 = 96.0;
pub const DEFAULT_BEATS_PER_MEASURE: u32 = 8;
pub const BPM_SMOOTHING_PER_SEC: f64 = 4.0; // cur += (target - cur) * min(1, rate * dt)

// Alignment pulse envelope
pub const ALIGN_WIDTH_FRAC: f64 = 0.05; // half-width of the flash window, in cycles
pub const ALIGN_SHARPNESS: f64 = 3.2;

// Beat/measure pulse shaping
pub const BEAT_PULSE_SHARPNESS: f64 = 3.5;
pub const MEASURE_PULSE_SHARPNESS: f64 = 2.5;

// Pulse-driven scale gains
pub const THICKNESS_MEASURE_GAIN: f64 = 0.25;
pub const THICKNESS_ALIGN_GAIN: f64 = 1.1;
pub const ALPHA_BEAT_GAIN: f64 = 0.06;
pub const ALPHA_MEASURE_GAIN: f64 = 0.12;
pub const ALPHA_ALIGN_GAIN: f64 = 0.9;
pub const GLOW_ALIGN_GAIN: f64 = 3.2;

// Camera
pub const CAMERA_DISTANCE: f32 = 3.5;
pub const FOCAL_LENGTH: f32 = 1.0;
pub const MIN_CAMERA_DEPTH: f32 = 0.1; // lower clamp on the perspective denominator

// Stroke styling
pub const BASE_THICKNESS: f32 = 3.2;
pub const BACK_ALPHA: f32 = 0.35;
pub const FRONT_ALPHA: f32 = 0.98;
pub const GLOW_ALPHA: f32 = 0.14;
pub const GLOW_WIDTH_RATIO: f32 = 2.2;

// Depth/light shading weights
pub const SHADE_BASE: f32 = 0.7;
pub const SHADE_DEPTH_GAIN: f32 = 0.2;
pub const SHADE_LIGHT_GAIN: f32 = 0.25;
pub const GLYPH_SHADE_BASE: f32 = 0.9;
pub const GLYPH_SHADE_DEPTH_GAIN: f32 = 0.2;
pub const GLYPH_SHADE_LIGHT_GAIN: f32 = 0.2;
pub const LIGHT_DIR: [f32; 3] = [0.2, 0.35, 1.0];

// Palette (Helios / orbital sun core)
pub const RING_GOLD: [f32; 3] = [0.93, 0.76, 0.30];
pub const CORE_COLOR: [f32; 3] = [0.98, 0.99, 1.0];
pub const CORE_GLOW: [f32; 3] = [0.62, 0.8, 1.0];
pub const ACCENT_TEAL: [f32; 3] = [0.18, 0.74, 0.7];
pub const TONE_STEP: f32 = 0.04; // per-ring darkening of the base tone
pub const TONE_CYCLE: usize = 4;

// Center core disc stack (normalized image-plane units)
pub const CORE_RADIUS: f32 = 0.145;
pub const CORE_RADIUS_MIN: f32 = 0.02;
pub const CORE_INNER_FIT: f32 = 0.55; // cap against the projected innermost ring
pub const CORE_LAYERS: usize = 6;
pub const CORE_LAYER_SHRINK: f32 = 0.09;
pub const CORE_BODY_ALPHA: f32 = 0.96;
pub const CORE_HIGHLIGHT_OFFSET: f32 = 0.58;
pub const CORE_HIGHLIGHT_RADIUS: f32 = 0.32;
pub const CORE_HIGHLIGHT_ALPHA: f32 = 0.59;
pub const CORE_HALO: [(f32, f32); 3] = [(1.6, 0.63), (2.2, 0.35), (2.9, 0.2)];

// Orbiter node
pub const ORBITER_SPEED: f64 = 0.22; // radians per second around the field
pub const ORBITER_RADIUS_FACTOR: f32 = 0.9; // orbit radius relative to the outer ring
pub const ORBITER_RADIUS: f32 = 0.025;
pub const ORBITER_HALO: [(f32, f32); 2] = [(2.8, 0.2), (1.6, 0.35)];
pub const ORBITER_ALPHA: f32 = 0.78;
