//! Headless host for the ring field renderer.
//!
//! Builds a field from CLI flags, drives the frame loop in fixed-step or
//! wall-clock time, and logs each realignment pulse plus a run summary.
//! Rasterization belongs to a drawing backend; this host only consumes the
//! primitive list.

use std::time::{Duration, Instant};

use clap::Parser;
use gyro_core::{
    configure, default_ring_specs, render, DrawPrimitive, RenderConfig, TempoMode,
};

#[derive(Parser, Debug)]
#[command(name = "gyro-native", about = "Drive the tempo-locked ring field headlessly")]
struct Args {
    /// Seconds between full realignments
    #[arg(long, default_value_t = 10.0)]
    period: f64,

    /// Number of rings (1..=12)
    #[arg(long, default_value_t = 4)]
    rings: usize,

    /// Seconds to run before exiting
    #[arg(long, default_value_t = 30.0)]
    duration: f64,

    /// Fixed timestep rate; 0 runs against the wall clock
    #[arg(long, default_value_t = 60.0)]
    fps: f64,

    /// Tempo mode: "tempo", "ratio:<denominator>", or "beat"
    #[arg(long, default_value = "tempo")]
    mode: String,

    /// Target BPM for the beat/measure pulses
    #[arg(long, default_value_t = 96.0)]
    bpm: f64,

    /// Seed for jitter offsets and glyph placement
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

fn parse_mode(s: &str) -> anyhow::Result<TempoMode> {
    match s {
        "tempo" => Ok(TempoMode::TempoLock),
        "beat" => Ok(TempoMode::BeatLock),
        _ => {
            if let Some(den) = s.strip_prefix("ratio:") {
                let denominator: u32 = den
                    .parse()
                    .map_err(|_| anyhow::anyhow!("bad ratio denominator: {den:?}"))?;
                Ok(TempoMode::RatioLock { denominator })
            } else if s == "ratio" {
                Ok(TempoMode::RatioLock { denominator: 4 })
            } else {
                anyhow::bail!("unknown tempo mode: {s:?}")
            }
        }
    }
}

fn stroke_count(primitives: &[DrawPrimitive]) -> usize {
    primitives.iter().filter(|p| p.is_stroke()).count()
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();
    let args = Args::parse();

    let mode = parse_mode(&args.mode)?;
    let (mut field, mut tempo) = configure(&default_ring_specs(), args.period, args.seed)?;
    tempo.set_bpm(args.bpm);

    let target_rings = args.rings.clamp(1, 12);
    while field.rings().len() > target_rings {
        field.remove_ring();
    }
    while field.rings().len() < target_rings {
        field.add_inner_ring();
    }

    let config = RenderConfig {
        mode,
        ..RenderConfig::default()
    };
    config.validate()?;

    let fixed_dt = (args.fps > 0.0).then(|| Duration::from_secs_f64(1.0 / args.fps));
    let started = Instant::now();
    let mut last_tick = started;
    let mut frames: u64 = 0;
    let mut realignments: u64 = 0;
    let mut prev_align_phase = tempo.align_phase();
    let mut total_primitives: u64 = 0;

    while tempo.elapsed() < args.duration {
        let dt = match fixed_dt {
            Some(dt) => dt,
            None => {
                std::thread::sleep(Duration::from_millis(16));
                let now = Instant::now();
                let dt = now - last_tick;
                last_tick = now;
                dt
            }
        };
        tempo.advance(dt);
        frames += 1;

        let primitives = render(&field, &tempo, &config);
        total_primitives += primitives.len() as u64;

        let align_phase = tempo.align_phase();
        if align_phase < prev_align_phase {
            realignments += 1;
            log::info!(
                "[pulse] realignment #{realignments} at t={:.2}s frame={frames} strokes={}",
                tempo.elapsed(),
                stroke_count(&primitives),
            );
        }
        prev_align_phase = align_phase;
    }

    log::info!(
        "[run] frames={frames} realignments={realignments} avg_primitives={:.0} wall={:.2}s",
        total_primitives as f64 / frames.max(1) as f64,
        started.elapsed().as_secs_f64(),
    );
    Ok(())
}
