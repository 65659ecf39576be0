//! Segment generation, depth sorting, shading, and primitive emission.
//!
//! `render` is the whole per-frame pipeline: sample every ring, project,
//! depth-sort across the full field, and emit strokes (glow, core, glyph
//! ticks) followed by the filled-shape extras (orbiter, center core). It is
//! pure computation over a configured field; nothing here can fail.

use glam::{Vec2, Vec3};
use smallvec::{smallvec, SmallVec};

use crate::color::Rgba;
use crate::constants::*;
use crate::error::ConfigError;
use crate::math::{normalize_or_z, project, Camera};
use crate::ring::RingField;
use crate::tempo::{align_pulse, cosine_pulse, TempoMode, TempoState};

/// Everything the render pass needs beyond the field and clock.
#[derive(Clone, Debug)]
pub struct RenderConfig {
    pub camera: Camera,
    pub mode: TempoMode,
    pub base_thickness: f32,
    pub back_alpha: f32,
    pub front_alpha: f32,
    pub glow: bool,
    pub glow_alpha: f32,
    pub align_width: f64,
    pub align_sharpness: f64,
    pub light_dir: Vec3,
    pub show_core: bool,
    pub show_orbiter: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            camera: Camera::default(),
            mode: TempoMode::TempoLock,
            base_thickness: BASE_THICKNESS,
            back_alpha: BACK_ALPHA,
            front_alpha: FRONT_ALPHA,
            glow: true,
            glow_alpha: GLOW_ALPHA,
            align_width: ALIGN_WIDTH_FRAC,
            align_sharpness: ALIGN_SHARPNESS,
            light_dir: Vec3::from(LIGHT_DIR),
            show_core: true,
            show_orbiter: true,
        }
    }
}

impl RenderConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.mode.validate()
    }
}

/// One drawing-backend instruction, emitted in paint order.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawPrimitive {
    Stroke {
        points: SmallVec<[Vec2; 2]>,
        color: Rgba,
        width: f32,
    },
    Disc {
        center: Vec2,
        radius: f32,
        color: Rgba,
    },
}

impl DrawPrimitive {
    pub fn is_stroke(&self) -> bool {
        matches!(self, DrawPrimitive::Stroke { .. })
    }
}

/// Per-frame visual multipliers derived from the beat, measure, and
/// alignment pulses. All three sit at their baseline when every pulse is
/// zero and grow monotonically with pulse strength.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PulseScales {
    pub thickness: f32,
    pub alpha_boost: f32,
    pub glow: f32,
}

pub fn pulse_scales(tempo: &TempoState, config: &RenderConfig) -> PulseScales {
    let beat = cosine_pulse(tempo.beat_phase(), BEAT_PULSE_SHARPNESS);
    let measure = cosine_pulse(tempo.measure_phase(), MEASURE_PULSE_SHARPNESS);
    let align = align_pulse(
        tempo.align_phase(),
        config.align_width,
        config.align_sharpness,
    );
    PulseScales {
        thickness: (1.0 + THICKNESS_MEASURE_GAIN * measure + THICKNESS_ALIGN_GAIN * align) as f32,
        alpha_boost: (ALPHA_BEAT_GAIN * beat + ALPHA_MEASURE_GAIN * measure + ALPHA_ALIGN_GAIN * align)
            as f32,
        glow: (1.0 + GLOW_ALIGN_GAIN * align) as f32,
    }
}

struct Segment {
    ring: usize,
    index: usize,
    mid: Vec3,
    a: Vec2,
    b: Vec2,
}

impl Segment {
    /// Camera-relative depth folded into `[0, 1]`; 1 is nearest.
    fn depth_mix(&self) -> f32 {
        0.5 + 0.5 * self.mid.z.clamp(-1.0, 1.0)
    }
}

/// Produce the frame's ordered primitive list for a drawing backend.
pub fn render(field: &RingField, tempo: &TempoState, config: &RenderConfig) -> Vec<DrawPrimitive> {
    let scales = pulse_scales(tempo, config);
    let light_dir = normalize_or_z(config.light_dir);

    let mut segments = Vec::new();
    for (ri, ring) in field.rings().iter().enumerate() {
        let pts = ring.points(tempo, config.mode);
        let n = pts.len();
        for i in 0..n {
            let p0 = pts[i];
            let p1 = pts[(i + 1) % n];
            segments.push(Segment {
                ring: ri,
                index: i,
                mid: (p0 + p1) * 0.5,
                a: project(p0, &config.camera),
                b: project(p1, &config.camera),
            });
        }
    }
    // Painter's algorithm across the whole field, not per ring.
    segments.sort_by(|a, b| a.mid.z.total_cmp(&b.mid.z));

    let core_width = config.base_thickness * scales.thickness;
    let mut out = Vec::with_capacity(segments.len() * 2 + 16);

    if config.glow {
        let glow_width = core_width * GLOW_WIDTH_RATIO;
        for seg in &segments {
            let ring = &field.rings()[seg.ring];
            let dm = seg.depth_mix();
            let light = normalize_or_z(seg.mid).dot(light_dir).max(0.0);
            let shade = SHADE_BASE + SHADE_DEPTH_GAIN * dm + SHADE_LIGHT_GAIN * light;
            let alpha = (config.glow_alpha * (0.8 + 0.6 * dm) * scales.glow).min(1.0);
            out.push(DrawPrimitive::Stroke {
                points: smallvec![seg.a, seg.b],
                color: ring.color.scaled(shade).with_alpha(alpha),
                width: glow_width,
            });
        }
    }

    for seg in &segments {
        let ring = &field.rings()[seg.ring];
        let dm = seg.depth_mix();
        let light = normalize_or_z(seg.mid).dot(light_dir).max(0.0);
        let shade = SHADE_BASE + SHADE_DEPTH_GAIN * dm + SHADE_LIGHT_GAIN * light;
        let alpha = config.back_alpha + (config.front_alpha - config.back_alpha) * dm
            + scales.alpha_boost;
        out.push(DrawPrimitive::Stroke {
            points: smallvec![seg.a, seg.b],
            color: ring.color.scaled(shade).with_alpha(alpha.clamp(0.0, 1.0)),
            width: core_width,
        });
    }

    let glyph_width = core_width * GLYPH_WIDTH_RATIO;
    for seg in &segments {
        let ring = &field.rings()[seg.ring];
        if (seg.index + ring.glyph_phase) % ring.glyph_stride != 0 {
            continue;
        }
        let dm = seg.depth_mix();
        if dm < GLYPH_DEPTH_MIN {
            continue;
        }
        let light = normalize_or_z(seg.mid).dot(light_dir).max(0.0);
        let shade = GLYPH_SHADE_BASE + GLYPH_SHADE_DEPTH_GAIN * dm + GLYPH_SHADE_LIGHT_GAIN * light;
        let alpha = (config.front_alpha + scales.alpha_boost + GLYPH_ALPHA_BONUS).min(1.0);
        out.push(DrawPrimitive::Stroke {
            points: smallvec![seg.a, seg.b],
            color: ring
                .color
                .scaled(shade)
                .brightened(GLYPH_BRIGHTEN)
                .with_alpha(alpha),
            width: glyph_width,
        });
    }

    if config.show_orbiter {
        emit_orbiter(field, tempo, config, &mut out);
    }
    if config.show_core {
        emit_core(field, config, &mut out);
    }
    out
}

/// Small accent node circling the outer ring; position is a pure function
/// of elapsed time.
fn emit_orbiter(
    field: &RingField,
    tempo: &TempoState,
    config: &RenderConfig,
    out: &mut Vec<DrawPrimitive>,
) {
    let Some(outer) = field.rings().first() else {
        return;
    };
    let t = tempo.elapsed() * ORBITER_SPEED;
    let orbit_r = outer.radius * ORBITER_RADIUS_FACTOR;
    let pos = Vec3::new(
        orbit_r * t.cos() as f32,
        orbit_r * 0.35 * (t * 0.7).sin() as f32,
        orbit_r * 0.6 * t.sin() as f32,
    );
    let center = project(pos, &config.camera);
    let teal = Rgba {
        r: ACCENT_TEAL[0],
        g: ACCENT_TEAL[1],
        b: ACCENT_TEAL[2],
        a: 1.0,
    };
    for &(scale, alpha) in &ORBITER_HALO {
        out.push(DrawPrimitive::Disc {
            center,
            radius: ORBITER_RADIUS * scale,
            color: teal.with_alpha(alpha),
        });
    }
    out.push(DrawPrimitive::Disc {
        center,
        radius: ORBITER_RADIUS,
        color: teal.with_alpha(ORBITER_ALPHA),
    });
}

/// Layered white-hot disc stack at the field center, with halo and a
/// specular highlight, sized to clear the innermost ring.
fn emit_core(field: &RingField, config: &RenderConfig, out: &mut Vec<DrawPrimitive>) {
    let center = project(Vec3::ZERO, &config.camera);
    let radius = match field.rings().last() {
        Some(inner) => {
            let inner_x = project(Vec3::new(inner.radius, 0.0, 0.0), &config.camera).x;
            CORE_RADIUS.min((inner_x.abs() * CORE_INNER_FIT).max(CORE_RADIUS_MIN))
        }
        None => CORE_RADIUS,
    };
    let glow = Rgba {
        r: CORE_GLOW[0],
        g: CORE_GLOW[1],
        b: CORE_GLOW[2],
        a: 1.0,
    };
    for &(scale, alpha) in &CORE_HALO {
        out.push(DrawPrimitive::Disc {
            center,
            radius: radius * scale,
            color: glow.with_alpha(alpha),
        });
    }
    let base = Rgba {
        r: CORE_COLOR[0],
        g: CORE_COLOR[1],
        b: CORE_COLOR[2],
        a: 1.0,
    };
    for i in 0..CORE_LAYERS {
        let t = i as f32 / (CORE_LAYERS - 1) as f32;
        let alpha = CORE_BODY_ALPHA * (1.0 - t).powf(1.5);
        out.push(DrawPrimitive::Disc {
            center,
            radius: radius * (1.0 - CORE_LAYER_SHRINK * i as f32),
            color: base.lerp(Rgba::WHITE, t).with_alpha(alpha),
        });
    }
    out.push(DrawPrimitive::Disc {
        center: center - Vec2::splat(radius * CORE_HIGHLIGHT_OFFSET),
        radius: radius * CORE_HIGHLIGHT_RADIUS,
        color: Rgba::WHITE.with_alpha(CORE_HIGHLIGHT_ALPHA),
    });
}
