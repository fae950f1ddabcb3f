// luminary-snapshot - Run the sphere headless and save a frame
//
// Pipeline:
//   1. Parse options, build Params (bounded or original)
//   2. Press "add energy" / "add pressure" the requested number of times
//   3. Advance frames at 60 Hz timestamps, printing a trace
//   4. Composite sphere over noise at 1000x500 and write a PNG
//
// Usage: cargo run --bin luminary-snapshot -- [--frames N] [--energy N] [--pressure N]
//        [--seed S] [--fixed-step MS] [--original] [--every N] [--out FILE]

mod export;

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{bail, Context, Result};
use luminary_engine::config::{Params, StepMode};
use luminary_engine::input::Action;
use luminary_engine::scene::{SPHERE_HEIGHT, SPHERE_WIDTH};
use luminary_engine::Luminary;

const FRAME_MS: f64 = 1000.0 / 60.0;

struct Options {
    frames: u64,
    energy: u32,
    pressure: u32,
    seed: u64,
    fixed_step: Option<f64>,
    original: bool,
    every: u64,
    out: PathBuf,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            frames: 600,
            energy: 1,
            pressure: 0,
            seed: 0x5EED,
            fixed_step: None,
            original: false,
            every: 60,
            out: PathBuf::from("luminary.png"),
        }
    }
}

fn value<T: FromStr>(args: &[String], i: usize) -> Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let flag = &args[i];
    let raw = args.get(i + 1).with_context(|| format!("{flag} needs a value"))?;
    raw.parse().with_context(|| format!("bad value for {flag}: {raw}"))
}

fn parse(args: &[String]) -> Result<Options> {
    let mut o = Options::default();
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--frames" => { o.frames = value(args, i)?; i += 2; }
            "--energy" => { o.energy = value(args, i)?; i += 2; }
            "--pressure" => { o.pressure = value(args, i)?; i += 2; }
            "--seed" => { o.seed = value(args, i)?; i += 2; }
            "--fixed-step" => { o.fixed_step = Some(value(args, i)?); i += 2; }
            "--every" => { o.every = value::<u64>(args, i)?.max(1); i += 2; }
            "--out" => { o.out = value(args, i)?; i += 2; }
            "--original" => { o.original = true; i += 1; }
            other => bail!("unknown argument: {other}"),
        }
    }
    Ok(o)
}

fn params(o: &Options) -> Params {
    let base = if o.original { Params::original() } else { Params::default() };
    match o.fixed_step {
        Some(step_ms) => base.with_step_mode(StepMode::Fixed { step_ms, max_steps: 8 }),
        None => base,
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = env::args().collect();
    let o = parse(&args)?;

    let mut world = Luminary::with_params(params(&o), SPHERE_WIDTH, SPHERE_HEIGHT, o.seed)
        .context("invalid simulation parameters")?;

    for _ in 0..o.energy {
        world.apply(Action::AddEnergy)?;
    }
    for _ in 0..o.pressure {
        world.apply(Action::AddPressure)?;
    }
    log::info!(
        "start: T = {:.2} K, P = {:.4}, r = {:.3}",
        world.temperature(),
        world.pressure(),
        world.radius()
    );

    export::print_header();
    for frame in 0..o.frames {
        world.tick(frame as f64 * FRAME_MS);
        if frame % o.every == 0 || frame + 1 == o.frames {
            export::print_row(frame, &world);
        }
    }

    let e = world.state().kinetic_energy();
    if !(e > 0.0) || !e.is_finite() {
        log::warn!("kinetic energy left the valid range: {e:e}");
    }

    export::write_png(&o.out, &world)?;
    log::info!("wrote {}", o.out.display());
    Ok(())
}
