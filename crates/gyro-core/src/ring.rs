//! Ring state model: construction specs, the field container, and the
//! deterministic reindex rule.

use std::f32::consts::TAU;

use glam::Vec3;
use rand::prelude::*;

use crate::color::Rgba;
use crate::constants::*;
use crate::error::ConfigError;
use crate::math::{rotate_x, rotate_y, rotate_z};
use crate::tempo::{TempoMode, TempoState};

/// Construction parameters for one ring.
///
/// `offset`, `glyph_stride`, and `glyph_phase` default to values drawn from
/// the field's seeded RNG when left unset, which keeps a configured field
/// fully reproducible from `(specs, seed)`.
#[derive(Clone, Debug)]
pub struct RingSpec {
    pub radius: f32,
    pub color: [f32; 3],
    pub spin_ratio: i32,
    pub tilt_x_ratio: i32,
    pub tilt_y_ratio: i32,
    pub point_count: usize,
    pub offset: Option<Vec3>,
    pub glyph_stride: Option<usize>,
    pub glyph_phase: Option<usize>,
}

impl RingSpec {
    pub fn new(
        radius: f32,
        color: [f32; 3],
        spin_ratio: i32,
        tilt_x_ratio: i32,
        tilt_y_ratio: i32,
        point_count: usize,
    ) -> Self {
        Self {
            radius,
            color,
            spin_ratio,
            tilt_x_ratio,
            tilt_y_ratio,
            point_count,
            offset: None,
            glyph_stride: None,
            glyph_phase: None,
        }
    }
}

/// One rotating circular band of sample points.
///
/// Orientation is never stored: [`Ring::angles`] recomputes it from the
/// shared clock each frame, so no drift accumulates across long runs.
#[derive(Clone, Debug)]
pub struct Ring {
    pub radius: f32,
    pub point_count: usize,
    pub spin_ratio: i32,
    pub tilt_x_ratio: i32,
    pub tilt_y_ratio: i32,
    pub color: Rgba,
    pub offset: Vec3,
    pub glyph_stride: usize,
    pub glyph_phase: usize,
    pub speed_scale: f32,
}

impl Ring {
    /// Instantaneous `(spin, tilt_x, tilt_y)` for the given clock and mode.
    ///
    /// Computed in `f64` from absolute elapsed time and wrapped to `[0, 2π)`
    /// before narrowing, so orientations at `t = k·T` match `t = 0` to
    /// floating-point tolerance even for large `k`.
    pub fn angles(&self, tempo: &TempoState, mode: TempoMode) -> (f32, f32, f32) {
        let phase = tempo.base_phase();
        let speed = self.speed_scale as f64;
        let spin = match mode {
            TempoMode::TempoLock => self.spin_ratio as f64 * phase,
            TempoMode::RatioLock { denominator } => {
                self.spin_ratio as f64 / denominator.max(1) as f64 * phase
            }
            TempoMode::BeatLock => {
                (tempo.base_omega() + self.spin_ratio as f64 * tempo.beat_omega())
                    * tempo.elapsed()
            }
        };
        (
            wrap_angle(spin * speed),
            wrap_angle(self.tilt_x_ratio as f64 * phase * speed),
            wrap_angle(self.tilt_y_ratio as f64 * phase * speed),
        )
    }

    /// Sample the ring's circle in scene space with the current orientation
    /// and center offset applied.
    pub fn points(&self, tempo: &TempoState, mode: TempoMode) -> Vec<Vec3> {
        let (spin, tilt_x, tilt_y) = self.angles(tempo, mode);
        let n = self.point_count;
        let mut pts = Vec::with_capacity(n);
        for i in 0..n {
            let t = TAU * i as f32 / n as f32;
            let p = Vec3::new(self.radius * t.cos(), self.radius * t.sin(), 0.0);
            let p = rotate_z(p, spin);
            let p = rotate_x(p, tilt_x);
            let p = rotate_y(p, tilt_y);
            pts.push(p + self.offset);
        }
        pts
    }
}

#[inline]
fn wrap_angle(a: f64) -> f32 {
    a.rem_euclid(std::f64::consts::TAU) as f32
}

/// The set of concentric rings plus the seeded RNG that fills in jitter and
/// glyph defaults.
#[derive(Clone, Debug)]
pub struct RingField {
    rings: Vec<Ring>,
    palette_base: [f32; 3],
    rng: StdRng,
}

impl RingField {
    /// Build a field from validated specs. All validation happens here;
    /// rendering a configured field is total.
    pub fn configure(specs: &[RingSpec], seed: u64) -> Result<Self, ConfigError> {
        if specs.is_empty() {
            return Err(ConfigError::EmptyField);
        }
        let mut rng = StdRng::seed_from_u64(seed);
        let mut rings = Vec::with_capacity(specs.len());
        for spec in specs {
            rings.push(build_ring(spec, &mut rng)?);
        }
        log::debug!("[field] configured rings={}", rings.len());
        Ok(Self {
            rings,
            palette_base: RING_GOLD,
            rng,
        })
    }

    pub fn rings(&self) -> &[Ring] {
        &self.rings
    }

    /// Base color the reindex rule tones per ring.
    pub fn set_palette_base(&mut self, rgb: [f32; 3]) -> Result<(), ConfigError> {
        Rgba::opaque(rgb)?;
        self.palette_base = rgb;
        self.reindex();
        Ok(())
    }

    /// Append a ring inside the current innermost one. No-op at the ring cap.
    pub fn add_inner_ring(&mut self) {
        if self.rings.len() >= MAX_RINGS {
            log::debug!("[field] ring cap reached, ignoring add");
            return;
        }
        let innermost = self.rings.last().map(|r| r.radius).unwrap_or(1.0);
        let radius = (innermost * INNER_RADIUS_FACTOR).max(MIN_RING_RADIUS);
        let index = self.rings.len();
        let ring = self.derive_ring(index, radius);
        self.rings.push(ring);
        self.reindex();
    }

    /// Append a ring outside the current outermost one. No-op at the ring cap.
    pub fn add_outer_ring(&mut self) {
        if self.rings.len() >= MAX_RINGS {
            log::debug!("[field] ring cap reached, ignoring add");
            return;
        }
        let outermost = self.rings.first().map(|r| r.radius).unwrap_or(1.0);
        let radius = (outermost * OUTER_RADIUS_FACTOR).min(MAX_RING_RADIUS);
        let index = self.rings.len();
        let ring = self.derive_ring(index, radius);
        self.rings.push(ring);
        self.reindex();
    }

    /// Remove the innermost ring; the last ring is never removed.
    pub fn remove_ring(&mut self) {
        if self.rings.len() > 1 {
            self.rings.pop();
            self.reindex();
        }
    }

    /// Reassign ratios and palette tones after any mutation: rings sort
    /// outermost to innermost, and ring `k` gets alternating-sign integer
    /// ratios `(k+1, k+1, k+2)`. Keeps every ratio an integer, so the
    /// realignment invariant survives adds and removes.
    fn reindex(&mut self) {
        self.rings
            .sort_by(|a, b| b.radius.partial_cmp(&a.radius).unwrap_or(std::cmp::Ordering::Equal));
        for (idx, ring) in self.rings.iter_mut().enumerate() {
            let (spin, tilt_x, tilt_y) = ratios_for_index(idx);
            ring.spin_ratio = spin;
            ring.tilt_x_ratio = tilt_x;
            ring.tilt_y_ratio = tilt_y;
            ring.color = toned(self.palette_base, idx);
            ring.speed_scale = 1.0;
        }
        log::debug!("[field] reindexed rings={}", self.rings.len());
    }

    /// A ring derived from the field palette and the seeded RNG, as the
    /// default specs are.
    fn derive_ring(&mut self, index: usize, radius: f32) -> Ring {
        let (spin, tilt_x, tilt_y) = ratios_for_index(index);
        let stride = *GLYPH_STRIDES.choose(&mut self.rng).unwrap_or(&GLYPH_STRIDES[0]);
        Ring {
            radius,
            point_count: default_point_count(radius),
            spin_ratio: spin,
            tilt_x_ratio: tilt_x,
            tilt_y_ratio: tilt_y,
            color: toned(self.palette_base, index),
            offset: jitter_offset(&mut self.rng, radius),
            glyph_stride: stride,
            glyph_phase: self.rng.gen_range(0..stride),
            speed_scale: 1.0,
        }
    }
}

fn build_ring(spec: &RingSpec, rng: &mut StdRng) -> Result<Ring, ConfigError> {
    if !(spec.radius > 0.0) || !spec.radius.is_finite() {
        return Err(ConfigError::InvalidRadius(spec.radius));
    }
    if spec.point_count < MIN_RING_POINTS {
        return Err(ConfigError::TooFewPoints {
            got: spec.point_count,
            min: MIN_RING_POINTS,
        });
    }
    if spec.glyph_stride == Some(0) {
        return Err(ConfigError::InvalidGlyphStride);
    }
    let color = Rgba::opaque(spec.color)?;
    let stride = spec
        .glyph_stride
        .unwrap_or_else(|| *GLYPH_STRIDES.choose(rng).unwrap_or(&GLYPH_STRIDES[0]));
    let phase = spec
        .glyph_phase
        .map(|p| p % stride)
        .unwrap_or_else(|| rng.gen_range(0..stride));
    let offset = spec
        .offset
        .unwrap_or_else(|| jitter_offset(rng, spec.radius));
    Ok(Ring {
        radius: spec.radius,
        point_count: spec.point_count,
        spin_ratio: spec.spin_ratio,
        tilt_x_ratio: spec.tilt_x_ratio,
        tilt_y_ratio: spec.tilt_y_ratio,
        color,
        offset,
        glyph_stride: stride,
        glyph_phase: phase,
        speed_scale: 1.0,
    })
}

/// Alternating-sign integer ratios for ring `index`.
pub fn ratios_for_index(index: usize) -> (i32, i32, i32) {
    let sign = if index % 2 == 0 { 1 } else { -1 };
    let k = index as i32;
    (sign * (k + 1), sign * (k + 1), sign * (k + 2))
}

fn toned(base: [f32; 3], index: usize) -> Rgba {
    let tone = 0.98 - TONE_STEP * (index % TONE_CYCLE) as f32;
    Rgba {
        r: (base[0] * tone).clamp(0.0, 1.0),
        g: (base[1] * tone).clamp(0.0, 1.0),
        b: (base[2] * tone).clamp(0.0, 1.0),
        a: 1.0,
    }
}

fn default_point_count(radius: f32) -> usize {
    ((POINTS_PER_UNIT_RADIUS * radius) as usize).max(MIN_DEFAULT_POINTS)
}

fn jitter_offset(rng: &mut StdRng, radius: f32) -> Vec3 {
    let j = OFFSET_JITTER;
    Vec3::new(
        rng.gen_range(-j..=j) * radius,
        rng.gen_range(-j * OFFSET_JITTER_Y_SCALE..=j * OFFSET_JITTER_Y_SCALE) * radius,
        rng.gen_range(-j..=j) * radius,
    )
}

/// The stock four-ring layout, outermost first.
pub fn default_ring_specs() -> Vec<RingSpec> {
    DEFAULT_RING_RADII
        .iter()
        .enumerate()
        .map(|(idx, &radius)| {
            let (spin, tilt_x, tilt_y) = ratios_for_index(idx);
            let toned = toned(RING_GOLD, idx);
            RingSpec::new(
                radius,
                [toned.r, toned.g, toned.b],
                spin,
                tilt_x,
                tilt_y,
                default_point_count(radius),
            )
        })
        .collect()
}
