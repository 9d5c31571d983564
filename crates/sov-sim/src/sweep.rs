//! The α × β × sample phase-diagram sweep.
//!
//! Every grid point is an independent run with its own model and its own
//! seed, derived from the sweep seed and the run's position in the grid.
//! With the `parallel` feature the runs of one α row execute on Rayon's
//! thread pool; rows are delivered to the observer in order as they finish.

use log::info;
use sov_core::{SimRng, SweepConfig};
use sov_model::SovModel;

use crate::driver::{Observables, simulate_with};
use crate::{SimResult, SweepObserver};

/// One sampled run of the sweep.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SweepRecord {
    pub alpha:       f64,
    pub beta:        f64,
    /// Sample index within this (α, β) point.
    pub sample:      u32,
    pub observables: Observables,
}

/// A grid point waiting to be run.
struct GridPoint {
    run:    u64,
    alpha:  f64,
    beta:   f64,
    sample: u32,
}

fn run_point(config: &SweepConfig, point: &GridPoint) -> SimResult<SweepRecord> {
    let model_config = config.model.with_boundary(point.alpha, point.beta);
    let mut model = SovModel::from_config(model_config, SimRng::for_run(config.seed, point.run))?;
    let observables = simulate_with(&mut model, &config.run)?;
    Ok(SweepRecord {
        alpha: point.alpha,
        beta: point.beta,
        sample: point.sample,
        observables,
    })
}

/// The runs of one α row, in (β, sample) order.
fn row_points(config: &SweepConfig, alpha_index: usize, alpha: f64, betas: &[f64]) -> Vec<GridPoint> {
    let samples = config.samples as u64;
    let row_base = (alpha_index * betas.len()) as u64 * samples;
    betas
        .iter()
        .enumerate()
        .flat_map(|(bi, &beta)| {
            (0..config.samples).map(move |s| GridPoint {
                run:    row_base + bi as u64 * samples + s as u64,
                alpha,
                beta,
                sample: s,
            })
        })
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn run_row(config: &SweepConfig, points: &[GridPoint]) -> SimResult<Vec<SweepRecord>> {
    points.iter().map(|p| run_point(config, p)).collect()
}

#[cfg(feature = "parallel")]
fn run_row(
    config: &SweepConfig,
    points: &[GridPoint],
    pool:   &rayon::ThreadPool,
) -> SimResult<Vec<SweepRecord>> {
    use rayon::prelude::*;

    // `collect` on an indexed parallel iterator preserves input order.
    pool.install(|| points.par_iter().map(|p| run_point(config, p)).collect())
}

/// Run the full sweep, handing each record to `observer` in grid order.
///
/// Returns the number of records produced.
///
/// # Errors
///
/// Fails before any run starts if `config` does not validate.
pub fn run_sweep_observed<O>(config: &SweepConfig, observer: &mut O) -> SimResult<usize>
where
    O: SweepObserver + ?Sized,
{
    config.validate()?;

    let alphas = config.alphas();
    let betas = config.betas();
    let total = config.run_count();
    info!(
        "sweep: {} α × {} β × {} samples = {total} runs ({} warm-up + {} sampled steps each)",
        alphas.len(),
        betas.len(),
        config.samples,
        config.run.ignore_steps,
        config.run.sample_steps
    );

    #[cfg(feature = "parallel")]
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.num_threads.unwrap_or(0))
        .build()?;

    let mut done = 0usize;
    for (ai, &alpha) in alphas.iter().enumerate() {
        let points = row_points(config, ai, alpha, &betas);

        #[cfg(not(feature = "parallel"))]
        let records = run_row(config, &points)?;
        #[cfg(feature = "parallel")]
        let records = run_row(config, &points, &pool)?;

        for record in &records {
            observer.on_record(record);
        }
        done += records.len();
        info!("sweep: α={alpha:.2} done ({done}/{total} runs)");
    }

    observer.on_sweep_end(done);
    Ok(done)
}

/// Run the full sweep and collect every record in grid order.
pub fn run_sweep(config: &SweepConfig) -> SimResult<Vec<SweepRecord>> {
    struct Collect(Vec<SweepRecord>);

    impl SweepObserver for Collect {
        fn on_record(&mut self, record: &SweepRecord) {
            self.0.push(*record);
        }
    }

    config.validate()?;
    let mut collect = Collect(Vec::with_capacity(config.run_count()));
    run_sweep_observed(config, &mut collect)?;
    Ok(collect.0)
}
