//! Terminal driver for the step-by-step closest-pair search.
//!
//! Builds a point set from the command line, hands it to a
//! [`pair_core::driver::Driver`] in play mode and prints one line per
//! checkpoint until the run ends.

mod report;

use anyhow::{Context, bail};
use clap::Parser;
use log::info;
use pair_core::{
    brute::brute_force,
    config::Config,
    driver::{Driver, Playback},
    geometry::Point,
    point_set::PointSet,
};
use rand::{SeedableRng, rngs::StdRng};
use std::{thread, time::Duration};

/// Trace the divide-and-conquer closest-pair search checkpoint by checkpoint.
#[derive(Parser, Debug)]
#[command(name = "pair-trace", version)]
struct Args {
    /// A point as `x,y`. Repeat for more points.
    #[arg(short, long = "point", value_parser = parse_point)]
    points: Vec<Point>,

    /// Generate this many random points instead.
    #[arg(short, long, conflicts_with = "points")]
    random: Option<usize>,

    /// Seed for `--random`.
    #[arg(long, requires = "random")]
    seed: Option<u64>,

    /// Seconds to wait between checkpoints. `0` prints as fast as possible.
    #[arg(short, long, default_value_t = 0.0)]
    interval: f64,

    /// Check the final pair against an exhaustive search.
    #[arg(long)]
    verify: bool,
}

fn parse_point(s: &str) -> Result<Point, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected `x,y`, got `{s}`"))?;
    let x: f64 = x.trim().parse().map_err(|e| format!("bad x in `{s}`: {e}"))?;
    let y: f64 = y.trim().parse().map_err(|e| format!("bad y in `{s}`: {e}"))?;
    Ok(Point::new(x, y))
}

/// Turns the `--interval` value into the real-time pause between checkpoints.
fn pacing(interval: f64) -> anyhow::Result<Duration> {
    if !interval.is_finite() || interval < 0.0 {
        bail!("--interval must be a finite, non-negative number of seconds, got {interval}");
    }
    Duration::try_from_secs_f64(interval)
        .with_context(|| format!("--interval {interval} is too large"))
}

fn build_points(args: &Args, cfg: &Config) -> PointSet {
    if args.random.is_some() {
        let mut rng = match args.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        return PointSet::random_in_rect(
            cfg.spawn_center,
            cfg.spawn_half_extents,
            cfg.spawn_count,
            &mut rng,
        );
    }
    if args.points.is_empty() {
        return PointSet::demo();
    }
    PointSet::from_points(args.points.clone())
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let pause = pacing(args.interval)?;
    let cfg = Config {
        step_interval: args.interval,
        spawn_count: args.random.unwrap_or(Config::default().spawn_count),
        ..Config::default()
    };

    let points = build_points(&args, &cfg);
    info!("tracing {} points", points.len());
    let mut driver = Driver::new(points, cfg);

    // The driver is paced on a simulated clock so output does not depend on
    // scheduling; real sleeping only slows the printing down.
    let mut now = 0.0;
    driver.play(now).context("cannot start the search")?;
    while driver.state() == Playback::Playing {
        now += driver.config().step_interval;
        if let Some(s) = driver.tick(now) {
            println!("{}", report::describe(s));
            if !pause.is_zero() {
                thread::sleep(pause);
            }
        }
    }

    match driver.result() {
        Some(pair) => println!("closest pair: {pair} at distance {:.6}", pair.distance()),
        None => println!("closest pair: none (a single point)"),
    }

    if args.verify {
        let expected = brute_force(driver.points().as_slice());
        let found = driver.result();
        match (found, expected) {
            (Some(f), Some(e)) if (f.distance() - e.distance()).abs() <= 1e-9 => {
                println!("verified against exhaustive search");
            }
            (None, None) => println!("verified against exhaustive search"),
            _ => bail!("mismatch: engine found {found:?}, exhaustive search found {expected:?}"),
        }
    }
    Ok(())
}
