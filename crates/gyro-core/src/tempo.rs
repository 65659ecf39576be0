//! Shared tempo clock and pulse envelopes.
//!
//! The clock is an absolute-time accumulator: every phase exposed here is a
//! pure function of `elapsed`, never an integrated angle, so realignment at
//! period boundaries is exact no matter how long the host loop has run.

use std::f64::consts::TAU;
use std::time::Duration;

use crate::constants::{
    BPM_SMOOTHING_PER_SEC, DEFAULT_BEATS_PER_MEASURE, DEFAULT_BPM,
};
use crate::error::ConfigError;

/// How ring angular velocities derive from the shared clock.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TempoMode {
    /// Angles are integer multiples of the base phase; every ring realigns
    /// once per reset period.
    TempoLock,
    /// Spin multipliers become `ratio / denominator`; the field realigns
    /// every `denominator` reset periods. Tilts stay integer-locked.
    RatioLock { denominator: u32 },
    /// Spin rates are offset from the base rate by integer multiples of the
    /// beat frequency `2π·BPM/60`. Tilts stay integer-locked.
    BeatLock,
}

impl TempoMode {
    /// Reset periods per full realignment cycle under this mode.
    pub fn cycle_periods(self) -> u32 {
        match self {
            TempoMode::RatioLock { denominator } => denominator.max(1),
            _ => 1,
        }
    }

    pub fn validate(self) -> Result<(), ConfigError> {
        if let TempoMode::RatioLock { denominator: 0 } = self {
            return Err(ConfigError::InvalidRatioDenominator);
        }
        Ok(())
    }
}

/// Shared scalar tempo state: elapsed time, reset period, and the eased BPM.
///
/// The host owns one instance and advances it per frame; pausing is simply
/// not advancing.
#[derive(Clone, Debug)]
pub struct TempoState {
    elapsed: f64,
    reset_period: f64,
    current_bpm: f64,
    target_bpm: f64,
    beats_per_measure: u32,
}

impl TempoState {
    pub fn new(reset_period: f64) -> Result<Self, ConfigError> {
        if !(reset_period > 0.0) || !reset_period.is_finite() {
            return Err(ConfigError::InvalidResetPeriod(reset_period));
        }
        Ok(Self {
            elapsed: 0.0,
            reset_period,
            current_bpm: DEFAULT_BPM,
            target_bpm: DEFAULT_BPM,
            beats_per_measure: DEFAULT_BEATS_PER_MEASURE,
        })
    }

    /// Advance the clock by one frame delta and ease the BPM toward target.
    pub fn advance(&mut self, dt: Duration) {
        let dt = dt.as_secs_f64();
        self.elapsed += dt;
        self.current_bpm +=
            (self.target_bpm - self.current_bpm) * (BPM_SMOOTHING_PER_SEC * dt).min(1.0);
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Jump the clock to an absolute time. Hosts replaying or seeking use
    /// this; the frame loop uses [`TempoState::advance`].
    pub fn set_elapsed(&mut self, elapsed: f64) {
        self.elapsed = elapsed.max(0.0);
    }

    pub fn reset_period(&self) -> f64 {
        self.reset_period
    }

    pub fn set_reset_period(&mut self, reset_period: f64) -> Result<(), ConfigError> {
        if !(reset_period > 0.0) || !reset_period.is_finite() {
            return Err(ConfigError::InvalidResetPeriod(reset_period));
        }
        self.reset_period = reset_period;
        Ok(())
    }

    pub fn current_bpm(&self) -> f64 {
        self.current_bpm
    }

    pub fn set_target_bpm(&mut self, bpm: f64) {
        self.target_bpm = bpm.max(1.0);
    }

    /// Snap the eased BPM straight to `bpm` (no transition).
    pub fn set_bpm(&mut self, bpm: f64) {
        self.target_bpm = bpm.max(1.0);
        self.current_bpm = self.target_bpm;
    }

    pub fn beats_per_measure(&self) -> u32 {
        self.beats_per_measure
    }

    pub fn set_beats_per_measure(&mut self, beats: u32) {
        self.beats_per_measure = beats.max(1);
    }

    /// Base angular frequency: one full turn per reset period.
    pub fn base_omega(&self) -> f64 {
        TAU / self.reset_period
    }

    /// Beat angular frequency from the eased BPM.
    pub fn beat_omega(&self) -> f64 {
        TAU * self.current_bpm / 60.0
    }

    /// Shared phase in radians. Integer-ratio multiples of this land back on
    /// their starting orientation whenever `elapsed` is a multiple of the
    /// reset period.
    pub fn base_phase(&self) -> f64 {
        self.base_omega() * self.elapsed
    }

    /// Position within the current beat, in `[0, 1)`.
    pub fn beat_phase(&self) -> f64 {
        (self.elapsed * self.current_bpm / 60.0).fract()
    }

    /// Position within the current measure, in `[0, 1)`.
    pub fn measure_phase(&self) -> f64 {
        (self.elapsed * self.current_bpm / 60.0 / self.beats_per_measure as f64).fract()
    }

    /// Position within the current realignment cycle, in `[0, 1)`.
    pub fn align_phase(&self) -> f64 {
        self.elapsed.rem_euclid(self.reset_period) / self.reset_period
    }
}

/// Folded distance from a cycle phase to the nearest boundary.
#[inline]
pub fn align_distance(phase: f64) -> f64 {
    phase.min(1.0 - phase)
}

/// Envelope that peaks at 1 on each cycle boundary and decays to zero over
/// `width` (in cycles). Continuous at the window edge: the `max(0, ..)` term
/// reaches zero exactly at `align_distance == width`.
pub fn align_pulse(phase: f64, width: f64, sharpness: f64) -> f64 {
    let d = align_distance(phase);
    (1.0 - d / width.max(1e-4)).max(0.0).powf(sharpness)
}

/// Raised-cosine pulse over a unit phase, sharpened; peaks at phase 0.
pub fn cosine_pulse(phase: f64, sharpness: f64) -> f64 {
    (0.5 * (1.0 + (TAU * phase).cos()))
        .clamp(0.0, 1.0)
        .powf(sharpness)
}
