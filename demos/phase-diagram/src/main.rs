//! phase_diagram — density/flux phase diagram of the open-boundary S-OV model.
//!
//! Sweeps the injection rate α and the ejection rate β over `[0, 1)` in
//! 0.05 steps, runs 10 independent samples per point (100 warm-up steps,
//! 2000 sampled steps each) and writes one `Alpha,Beta,Density,Flux` row per
//! sample to `output/phase_diagram/data.csv`.

use std::path::Path;
use std::time::Instant;

use anyhow::Result;

use sov_core::{ModelConfig, RunConfig, SweepConfig};
use sov_output::{OutputWriter, SweepCsvWriter, SweepOutputObserver, SweepRow};
use sov_sim::{SweepObserver, SweepRecord, run_sweep_observed};

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:         u64 = 42;
const STEP:         f64 = 0.05;
const SAMPLES:      u32 = 10;
const IGNORE_STEPS: u64 = 100;
const SAMPLE_STEPS: u64 = 2_000;
const OUTPUT_DIR:   &str = "output/phase_diagram";

// ── Observer wrapper echoing rows to stdout ───────────────────────────────────

struct EchoObserver<W: OutputWriter<Row = SweepRow>> {
    inner: SweepOutputObserver<W>,
    rows:  usize,
}

impl<W: OutputWriter<Row = SweepRow>> SweepObserver for EchoObserver<W> {
    fn on_record(&mut self, record: &SweepRecord) {
        let row = SweepRow::from(record);
        println!("{}, {}, {}, {}", row.alpha, row.beta, row.density, row.flux);
        self.rows += 1;
        self.inner.on_record(record);
    }

    fn on_sweep_end(&mut self, records: usize) {
        self.inner.on_sweep_end(records);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let config = SweepConfig {
        model:       ModelConfig::default(),
        run:         RunConfig::new(IGNORE_STEPS, SAMPLE_STEPS),
        alpha_start: 0.0,
        alpha_end:   1.0,
        beta_start:  0.0,
        beta_end:    1.0,
        step:        STEP,
        samples:     SAMPLES,
        seed:        SEED,
        num_threads: None, // all logical cores
    };

    println!("=== phase_diagram — S-OV open boundary sweep ===");
    println!(
        "Cells: {}  |  a = {}  |  c = {}  |  Seed: {SEED}",
        config.model.cells, config.model.relaxation, config.model.shape
    );
    println!(
        "Grid: {} α × {} β × {SAMPLES} samples = {} runs ({IGNORE_STEPS} + {SAMPLE_STEPS} steps each)",
        config.alphas().len(),
        config.betas().len(),
        config.run_count()
    );
    println!();

    std::fs::create_dir_all(OUTPUT_DIR)?;
    let target = Path::new(OUTPUT_DIR).join("data.csv");
    let writer = SweepCsvWriter::create(&target)?;
    let mut obs = EchoObserver { inner: SweepOutputObserver::new(writer), rows: 0 };

    println!("Alpha, Beta, Density, Flux");
    let t0 = Instant::now();
    run_sweep_observed(&config, &mut obs)?;
    let elapsed = t0.elapsed();

    if let Some(e) = obs.inner.take_error() {
        return Err(e.into());
    }

    println!();
    println!("Sweep complete in {:.3} s", elapsed.as_secs_f64());
    println!("  {} : {} rows", target.display(), obs.rows);
    Ok(())
}
