use thiserror::Error;

/// Construction-time validation failures.
///
/// Everything here is raised by [`crate::configure`] or the field mutation
/// helpers; the render path itself is total and never errors.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("ring radius must be positive (got {0})")]
    InvalidRadius(f32),

    #[error("ring needs at least {min} sample points (got {got})")]
    TooFewPoints { got: usize, min: usize },

    #[error("reset period must be positive (got {0})")]
    InvalidResetPeriod(f64),

    #[error("glyph stride must be at least 1")]
    InvalidGlyphStride,

    #[error("ratio-lock denominator must be at least 1")]
    InvalidRatioDenominator,

    #[error("color component must lie in [0, 1] (got {0})")]
    InvalidColorComponent(f32),

    #[error("a ring field needs at least one ring")]
    EmptyField,
}
