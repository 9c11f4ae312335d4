//! Integrate a synthetic constant-rate turn and print the heading trace.
//!
//! # Usage
//!
//! ```bash
//! RUST_LOG=debug cargo run -p disha --example constant_turn -- --rate-deg 45 --seconds 4
//! cargo run -p disha --example constant_turn -- --config configs/disha.yaml
//! ```

use std::path::PathBuf;

use clap::Parser;
use disha::{AngularVelocity, DishaConfig};

#[derive(Parser, Debug)]
#[command(about = "Integrate a constant-rate gyro stream into a heading")]
struct Args {
    /// Yaw rate in degrees per second
    #[arg(long, default_value_t = 30.0)]
    rate_deg: f32,

    /// Roll rate in degrees per second (tilts the body while turning)
    #[arg(long, default_value_t = 0.0)]
    roll_deg: f32,

    /// Sample rate in Hz
    #[arg(long, default_value_t = 100.0)]
    hz: f32,

    /// Duration in seconds
    #[arg(long, default_value_t = 6.0)]
    seconds: f32,

    /// Print every Nth sample
    #[arg(long, default_value_t = 50)]
    every: usize,

    /// YAML configuration file (defaults to configs/disha.yaml if present)
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => DishaConfig::load(path)?,
        None => DishaConfig::load_default()?,
    };
    let mut integrator = config.build_integrator()?;

    let dt = 1.0 / args.hz;
    let rate = [args.roll_deg.to_radians(), 0.0, args.rate_deg.to_radians()];
    let sample = AngularVelocity::from_rate(rate, dt);
    let steps = (args.seconds * args.hz).round() as usize;
    let every = args.every.max(1);

    println!("{:>8} {:>10} {:>12}", "sample", "time_s", "heading_deg");
    for i in 1..=steps {
        let heading = integrator.integrate_sample(&sample)?;
        if i % every == 0 || i == steps {
            println!("{:>8} {:>10.3} {:>12.3}", i, i as f32 * dt, heading.to_degrees());
        }
    }

    let orientation = integrator.orientation();
    println!();
    println!("row norms: {:?}", orientation.row_norms());
    println!("orthonormality error: {:.3e}", orientation.orthonormality_error());

    Ok(())
}
