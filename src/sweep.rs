use std::io::Write;
use std::time::Instant;

use tracing::{debug, info};

use crate::config::BenchConfig;
use crate::error::BenchError;
use crate::midpoint::estimate_pi;
use crate::report::{TrialRecord, HEADER};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Trial {
    pub steps: u64,
    pub threads: usize,
    pub repetition: u32,
}

/// The trials of a sweep in the order they must run: thread counts as listed,
/// repetitions 1..=n inside each.
pub fn plan(config: &BenchConfig) -> Vec<Trial> {
    let mut trials = Vec::with_capacity(config.total_trials());
    for &threads in &config.thread_counts {
        for repetition in 1..=config.repetitions {
            trials.push(Trial {
                steps: config.steps,
                threads,
                repetition,
            });
        }
    }
    trials
}

pub fn run_trial(trial: Trial, reference_pi: f64) -> Result<TrialRecord, BenchError> {
    let start = Instant::now();
    let pi = estimate_pi(trial.steps, trial.threads)?;
    let elapsed = start.elapsed();

    Ok(TrialRecord {
        threads: trial.threads,
        repetition: trial.repetition,
        elapsed_secs: elapsed.as_secs_f64(),
        pi,
        error: (pi - reference_pi).abs(),
    })
}

/// Runs every trial of `config` back to back, writing the header and one TSV
/// line per trial to `results` and a readable line per trial to `console`.
///
/// `results` is not flushed here; the caller decides when buffered output
/// reaches its destination.
pub fn run_sweep<R, C>(
    config: &BenchConfig,
    results: &mut R,
    console: &mut C,
) -> Result<Vec<TrialRecord>, BenchError>
where
    R: Write,
    C: Write,
{
    config.validate()?;

    info!(
        steps = config.steps,
        repetitions = config.repetitions,
        threads = ?config.thread_counts,
        "starting sweep"
    );

    results.write_all(HEADER.as_bytes())?;

    let mut records = Vec::with_capacity(config.total_trials());
    let mut block_secs = 0.0;

    for trial in plan(config) {
        if trial.repetition == 1 {
            info!(threads = trial.threads, "starting block");
            block_secs = 0.0;
        }

        let record = run_trial(trial, config.reference_pi)?;
        debug!(
            threads = record.threads,
            repetition = record.repetition,
            elapsed = record.elapsed_secs,
            "trial done"
        );

        record.write_tsv(results)?;
        record.write_console(console)?;
        block_secs += record.elapsed_secs;

        if trial.repetition == config.repetitions {
            info!(
                threads = trial.threads,
                mean_secs = block_secs / config.repetitions as f64,
                "block done"
            );
        }

        records.push(record);
    }

    info!(trials = records.len(), "sweep finished");
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn small_config() -> BenchConfig {
        BenchConfig {
            steps: 10_000,
            output_path: PathBuf::from("unused.txt"),
            ..BenchConfig::default()
        }
    }

    #[test]
    fn plan_follows_sweep_order() {
        let config = BenchConfig {
            repetitions: 3,
            thread_counts: vec![1, 2, 4],
            ..small_config()
        };
        let trials = plan(&config);
        let order: Vec<(usize, u32)> = trials.iter().map(|t| (t.threads, t.repetition)).collect();
        assert_eq!(
            order,
            vec![
                (1, 1),
                (1, 2),
                (1, 3),
                (2, 1),
                (2, 2),
                (2, 3),
                (4, 1),
                (4, 2),
                (4, 3)
            ]
        );
        assert!(trials.iter().all(|t| t.steps == 10_000));
    }

    #[test]
    fn trial_record_fields() {
        let trial = Trial {
            steps: 1_000,
            threads: 2,
            repetition: 7,
        };
        let record = run_trial(trial, std::f64::consts::PI).unwrap();
        assert_eq!(record.threads, 2);
        assert_eq!(record.repetition, 7);
        assert!(record.elapsed_secs >= 0.0);
        assert_eq!(record.error, (record.pi - std::f64::consts::PI).abs());
        assert!(record.error < 1e-6);
    }

    #[test]
    fn full_sweep_layout() {
        let config = small_config();
        let mut results: Vec<u8> = Vec::new();
        let mut console: Vec<u8> = Vec::new();

        let records = run_sweep(&config, &mut results, &mut console).unwrap();
        assert_eq!(records.len(), 150);

        let text = String::from_utf8(results).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 151);
        assert_eq!(format!("{}\n", lines[0]), HEADER);

        for (block, &threads) in [1usize, 2, 4, 8, 16].iter().enumerate() {
            for rep in 0..30 {
                let line = lines[1 + block * 30 + rep];
                let fields: Vec<&str> = line.split('\t').collect();
                assert_eq!(fields.len(), 5);
                assert_eq!(fields[0], threads.to_string());
                assert_eq!(fields[1], (rep + 1).to_string());
            }
        }

        let console = String::from_utf8(console).unwrap();
        assert_eq!(console.lines().count(), 150);
        assert!(console.lines().all(|l| l.starts_with("Hilos: ")));
    }

    #[test]
    fn results_are_stable_within_a_thread_count() {
        let config = BenchConfig {
            repetitions: 4,
            ..small_config()
        };
        let records = run_sweep(&config, &mut Vec::<u8>::new(), &mut Vec::<u8>::new()).unwrap();
        for block in records.chunks(4) {
            let first = block[0].pi.to_bits();
            assert!(block.iter().all(|r| r.pi.to_bits() == first));
        }
    }

    #[test]
    fn invalid_config_writes_nothing() {
        let config = BenchConfig {
            thread_counts: vec![],
            ..small_config()
        };
        let mut results: Vec<u8> = Vec::new();
        let err = run_sweep(&config, &mut results, &mut Vec::<u8>::new()).unwrap_err();
        assert!(matches!(err, BenchError::InvalidConfig(_)));
        assert!(results.is_empty());
    }
}
