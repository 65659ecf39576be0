// Tempo clock and pulse envelope properties.

use std::time::Duration;

use gyro_core::{align_pulse, cosine_pulse, ConfigError, TempoState};

#[test]
fn tempo_state_rejects_bad_periods() {
    assert!(matches!(
        TempoState::new(0.0),
        Err(ConfigError::InvalidResetPeriod(_))
    ));
    assert!(matches!(
        TempoState::new(-5.0),
        Err(ConfigError::InvalidResetPeriod(_))
    ));
    assert!(matches!(
        TempoState::new(f64::NAN),
        Err(ConfigError::InvalidResetPeriod(_))
    ));
    assert!(TempoState::new(10.0).is_ok());
}

#[test]
fn advance_accumulates_elapsed_time() {
    let mut tempo = TempoState::new(10.0).unwrap();
    for _ in 0..10 {
        tempo.advance(Duration::from_millis(100));
    }
    assert!((tempo.elapsed() - 1.0).abs() < 1e-9);
}

#[test]
fn align_phase_wraps_exactly_at_period_multiples() {
    let mut tempo = TempoState::new(10.0).unwrap();
    for k in [1u32, 3, 100, 1000] {
        tempo.set_elapsed(k as f64 * 10.0);
        assert!(
            tempo.align_phase() < 1e-12,
            "phase nonzero at k={k}: {}",
            tempo.align_phase()
        );
    }
    tempo.set_elapsed(25.0);
    assert!((tempo.align_phase() - 0.5).abs() < 1e-12);
}

#[test]
fn bpm_eases_toward_target_and_clamps_large_steps() {
    let mut tempo = TempoState::new(10.0).unwrap();
    tempo.set_target_bpm(120.0);
    for _ in 0..600 {
        tempo.advance(Duration::from_millis(16));
    }
    assert!((tempo.current_bpm() - 120.0).abs() < 0.1);

    // A delta large enough to saturate the blend lands on the target exactly.
    let mut tempo = TempoState::new(10.0).unwrap();
    tempo.set_target_bpm(150.0);
    tempo.advance(Duration::from_secs(1));
    assert!((tempo.current_bpm() - 150.0).abs() < 1e-9);
}

#[test]
fn beat_and_measure_phases_wrap_on_their_grids() {
    let mut tempo = TempoState::new(10.0).unwrap();
    tempo.set_bpm(120.0); // 2 beats per second
    tempo.set_elapsed(0.5);
    assert!(tempo.beat_phase() < 1e-9, "one full beat should wrap");
    tempo.set_elapsed(0.25);
    assert!((tempo.beat_phase() - 0.5).abs() < 1e-9);

    tempo.set_beats_per_measure(8);
    tempo.set_elapsed(4.0); // 8 beats = 1 measure
    assert!(tempo.measure_phase() < 1e-9);
    tempo.set_elapsed(2.0);
    assert!((tempo.measure_phase() - 0.5).abs() < 1e-9);
}

#[test]
fn align_pulse_bounds_and_peak() {
    for i in 0..1000 {
        let phase = i as f64 / 1000.0;
        let v = align_pulse(phase, 0.05, 3.2);
        assert!((0.0..=1.0).contains(&v), "out of bounds at phase={phase}");
    }
    assert!((align_pulse(0.0, 0.05, 3.2) - 1.0).abs() < 1e-12);
}

#[test]
fn align_pulse_is_zero_outside_the_window() {
    for phase in [0.05, 0.2, 0.5, 0.8, 0.95] {
        assert_eq!(align_pulse(phase, 0.05, 3.2), 0.0, "phase={phase}");
    }
    // Approaches the boundary from both sides of the cycle.
    assert!(align_pulse(0.999, 0.05, 3.2) > 0.0);
    assert!(align_pulse(0.001, 0.05, 3.2) > 0.0);
}

#[test]
fn align_pulse_ties_continuously_to_zero_at_the_window_edge() {
    let just_inside = align_pulse(0.05 - 1e-6, 0.05, 3.2);
    assert!(just_inside > 0.0);
    assert!(
        just_inside < 1e-4,
        "no jump at the window edge: {just_inside}"
    );
}

#[test]
fn cosine_pulse_peaks_at_zero_phase() {
    assert!((cosine_pulse(0.0, 2.5) - 1.0).abs() < 1e-12);
    assert!(cosine_pulse(0.5, 2.5) < 1e-12);
    for i in 0..100 {
        let v = cosine_pulse(i as f64 / 100.0, 3.5);
        assert!((0.0..=1.0).contains(&v));
    }
}
