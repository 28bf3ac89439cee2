use std::thread;

use tracing::debug;

use crate::error::BenchError;

// Midpoint of sample `index`, evaluated in 4 / (1 + x^2)
pub fn sample(index: u64, width: f64) -> f64 {
    let x = width * (index as f64 + 0.5);
    4.0 / (1.0 + x * x)
}

/// What a single worker needs to know. Moved into the thread by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkerInput {
    pub worker: usize,
    pub steps: u64,
    pub workers: usize,
}

impl WorkerInput {
    pub fn width(&self) -> f64 {
        1.0 / self.steps as f64
    }

    /// Indices owned by this worker: `worker`, `worker + workers`, ...
    pub fn indices(&self) -> impl Iterator<Item = u64> {
        (self.worker as u64..self.steps).step_by(self.workers)
    }
}

pub fn strided_sum<F>(input: WorkerInput, f: F) -> f64
where
    F: Fn(u64) -> f64,
{
    let mut local_sum = 0.0;
    for i in input.indices() {
        local_sum += f(i);
    }
    local_sum
}

pub fn partial_sum(worker: usize, steps: u64, workers: usize) -> f64 {
    let input = WorkerInput {
        worker,
        steps,
        workers,
    };
    let width = input.width();
    strided_sum(input, |i| sample(i, width))
}

/// Integrates 4/(1+x^2) over [0, 1] with `steps` midpoint samples split across
/// `workers` freshly spawned threads.
///
/// Partial sums are added in ascending worker order after every thread has
/// been joined, so the result is bit-for-bit reproducible for a given
/// `(steps, workers)` pair.
pub fn estimate_pi(steps: u64, workers: usize) -> Result<f64, BenchError> {
    let width = 1.0 / steps as f64;

    let mut handles = Vec::with_capacity(workers);

    for worker in 0..workers {
        let input = WorkerInput {
            worker,
            steps,
            workers,
        };

        let handle = thread::Builder::new()
            .name(format!("pi-worker-{}", worker))
            .spawn(move || partial_sum(input.worker, input.steps, input.workers))
            .map_err(|source| BenchError::Spawn { worker, source })?;

        handles.push(handle);
    }

    let mut total_sum = 0.0;
    for (worker, handle) in handles.into_iter().enumerate() {
        let partial = handle
            .join()
            .map_err(|_| BenchError::WorkerPanicked { worker })?;
        debug!(worker, partial, "worker joined");
        total_sum += partial;
    }

    Ok(width * total_sum)
}
