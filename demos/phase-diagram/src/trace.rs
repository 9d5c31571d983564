//! trace — per-step density and velocity of one S-OV run.
//!
//! Runs α = 0.2, β = 0.6 for 20 000 steps from an empty road, with no
//! warm-up and no averaging, and writes `Step,Density,Velocity` rows to
//! `output/trace/data.csv`.  Useful for judging how many warm-up steps the
//! sweep needs.

use std::path::Path;
use std::time::Instant;

use anyhow::Result;

use sov_core::ModelConfig;
use sov_model::SovModel;
use sov_output::{TraceCsvWriter, TraceOutputObserver};
use sov_sim::trace;

const ALPHA:      f64 = 0.2;
const BETA:       f64 = 0.6;
const STEPS:      u64 = 20_000;
const SEED:       u64 = 42;
const OUTPUT_DIR: &str = "output/trace";

fn main() -> Result<()> {
    println!("=== trace — S-OV single run ===");
    println!("α = {ALPHA}  |  β = {BETA}  |  Steps: {STEPS}  |  Seed: {SEED}");

    let mut model = SovModel::seeded(ModelConfig::new(ALPHA, BETA), SEED)?;

    std::fs::create_dir_all(OUTPUT_DIR)?;
    let target = Path::new(OUTPUT_DIR).join("data.csv");
    let mut obs = TraceOutputObserver::new(TraceCsvWriter::create(&target)?);

    let t0 = Instant::now();
    trace(&mut model, STEPS, &mut obs);
    let elapsed = t0.elapsed();

    if let Some(e) = obs.take_error() {
        return Err(e.into());
    }

    println!("Run complete in {:.3} s", elapsed.as_secs_f64());
    println!("  {} : {} rows", target.display(), obs.writer().rows());
    println!();
    println!("Final state ({} vehicles, density {:.3}):", model.register().len(), model.density());
    println!("{model}");
    Ok(())
}
