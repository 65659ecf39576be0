//! Tempo-locked gyroscopic ring field: state, projection math, and
//! draw-primitive emission for a host frame loop.

pub mod color;
pub mod constants;
pub mod error;
pub mod math;
pub mod render;
pub mod ring;
pub mod tempo;

pub use color::Rgba;
pub use error::ConfigError;
pub use math::{project, rotate_about_axis, rotate_x, rotate_y, rotate_z, Camera};
pub use render::{pulse_scales, render, DrawPrimitive, PulseScales, RenderConfig};
pub use ring::{default_ring_specs, Ring, RingField, RingSpec};
pub use tempo::{align_pulse, cosine_pulse, TempoMode, TempoState};

/// Build a ring field and its tempo clock in one step.
///
/// All configuration validation happens here; `render` on the result is
/// total.
pub fn configure(
    specs: &[RingSpec],
    reset_period: f64,
    seed: u64,
) -> Result<(RingField, TempoState), ConfigError> {
    let tempo = TempoState::new(reset_period)?;
    let field = RingField::configure(specs, seed)?;
    log::info!(
        "[field] rings={} period={:.1}s seed={}",
        field.rings().len(),
        reset_period,
        seed
    );
    Ok((field, tempo))
}
