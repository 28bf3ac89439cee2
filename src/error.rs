use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BenchError {
    #[error("Error al abrir archivo '{}'", path.display())]
    OpenResults {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write results")]
    Write(#[from] std::io::Error),

    #[error("Failed to spawn worker {worker}")]
    Spawn {
        worker: usize,
        #[source]
        source: std::io::Error,
    },

    #[error("Worker {worker} panicked")]
    WorkerPanicked { worker: usize },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
