use std::path::PathBuf;

use crate::error::BenchError;

pub const STEPS: u64 = 2_000_000_000;
pub const REPETITIONS: u32 = 30;
pub const THREAD_COUNTS: [usize; 5] = [1, 2, 4, 8, 16];
pub const RESULTS_PATH: &str = "resultados.txt";

// Kept exactly as the historical reference literal; error columns depend on it.
#[allow(clippy::excessive_precision)]
pub const REFERENCE_PI: f64 = 3.141592653589793238462643;

/// Everything the benchmark driver needs to run a sweep.
///
/// `Default` gives the full production sweep; tests shrink `steps` and
/// `repetitions` to keep runs short.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchConfig {
    pub steps: u64,
    pub repetitions: u32,
    pub thread_counts: Vec<usize>,
    pub reference_pi: f64,
    pub output_path: PathBuf,
}

impl Default for BenchConfig {
    fn default() -> Self {
        BenchConfig {
            steps: STEPS,
            repetitions: REPETITIONS,
            thread_counts: THREAD_COUNTS.to_vec(),
            reference_pi: REFERENCE_PI,
            output_path: PathBuf::from(RESULTS_PATH),
        }
    }
}

impl BenchConfig {
    pub fn total_trials(&self) -> usize {
        self.repetitions as usize * self.thread_counts.len()
    }

    pub fn validate(&self) -> Result<(), BenchError> {
        if self.steps == 0 {
            return Err(BenchError::InvalidConfig("steps must be > 0".into()));
        }
        if self.repetitions == 0 {
            return Err(BenchError::InvalidConfig("repetitions must be > 0".into()));
        }
        if self.thread_counts.is_empty() {
            return Err(BenchError::InvalidConfig(
                "thread sweep must not be empty".into(),
            ));
        }
        if self.thread_counts.contains(&0) {
            return Err(BenchError::InvalidConfig(
                "thread counts must be > 0".into(),
            ));
        }
        Ok(())
    }
}
