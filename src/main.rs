//! Headless driver: steps a particle field through the galaxy phase and
//! logs a summary per frame.

#![cfg_attr(test, allow(clippy::unwrap_used))]

use std::ops::RangeInclusive;
use std::path::Path;
use std::process::ExitCode;

use galaxy_field::galaxy::{FieldStats, ParticleField};
use galaxy_field::options::Options;
use galaxy_field::util::frame_timing::FrameClock;
use galaxy_field::GalaxyError;

const DEFAULT_FRAMES: u32 = 60;

struct Args {
    options_path: Option<String>,
    frames: u32,
}

fn parse_args(
    mut args: impl Iterator<Item = String>,
) -> Result<Args, String> {
    let mut options_path = None;
    let mut frames = DEFAULT_FRAMES;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--frames" => {
                let value = args
                    .next()
                    .ok_or_else(|| "--frames needs a value".to_owned())?;
                frames = value
                    .parse()
                    .map_err(|e| format!("invalid frame count {value}: {e}"))?;
            }
            _ if options_path.is_none() => options_path = Some(arg),
            _ => return Err(format!("unexpected argument: {arg}")),
        }
    }

    Ok(Args {
        options_path,
        frames: frames.max(1),
    })
}

/// Frame indices covering `frames` steps plus the margin frames.
fn frame_range(frames: u32) -> RangeInclusive<u32> {
    0..=frames.saturating_add(2)
}

/// Step a fixed clock across the phase window, logging a summary per frame.
fn run(args: &Args) -> Result<(), GalaxyError> {
    let options = match &args.options_path {
        Some(path) => Options::load(Path::new(path))?,
        None => {
            let options = Options::default();
            options.validate()?;
            options
        }
    };

    let field = ParticleField::generate(&options.field)?;
    let evaluator = options.evaluator();
    log::info!(
        "{} particles, phase window [{}, {}], {} frames",
        field.len(),
        options.phase.env_start,
        options.phase.duration,
        args.frames
    );

    // Cover the window plus one frame either side.
    let lo = options.phase.env_start.min(options.phase.duration);
    let span = (options.phase.duration - options.phase.env_start).abs();
    let step = span / args.frames as f32;
    let mut clock = FrameClock::fixed_step(step).starting_at(lo - 2.0 * step);

    let mut outputs = Vec::with_capacity(field.len());
    for frame in frame_range(args.frames) {
        let time = clock.tick();
        field.evaluate_into(&evaluator, time, &mut outputs);
        let stats = FieldStats::collect(&outputs);
        log::info!("frame {frame:>4} t={time:>8.3}  {stats}");
    }

    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .init();

    let args = match parse_args(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(e) => {
            log::error!("{e}");
            log::error!("Usage: galaxy [options.toml] [--frames N]");
            return ExitCode::FAILURE;
        }
    };

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Args, String> {
        parse_args(args.iter().map(|a| (*a).to_owned()))
    }

    #[test]
    fn test_parse_defaults() {
        let args = parse(&[]).unwrap();
        assert!(args.options_path.is_none());
        assert_eq!(args.frames, DEFAULT_FRAMES);
    }

    #[test]
    fn test_parse_path_and_frames() {
        let args = parse(&["slow.toml", "--frames", "0"]).unwrap();
        assert_eq!(args.options_path.as_deref(), Some("slow.toml"));
        assert_eq!(args.frames, 1);
        assert!(parse(&["--frames"]).is_err());
        assert!(parse(&["--frames", "many"]).is_err());
        assert!(parse(&["a.toml", "b.toml"]).is_err());
    }

    #[test]
    fn test_frame_range_saturates() {
        assert_eq!(frame_range(60), 0..=62);
        assert_eq!(frame_range(u32::MAX), 0..=u32::MAX);
        let args = parse(&["--frames", "4294967295"]).unwrap();
        assert_eq!(*frame_range(args.frames).end(), u32::MAX);
    }
}
