use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::BenchError;

pub const HEADER: &str = "Hilos\tIteracion\tTiempo(s)\tPi\tError\n";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrialRecord {
    pub threads: usize,
    pub repetition: u32,
    pub elapsed_secs: f64,
    pub pi: f64,
    pub error: f64,
}

impl TrialRecord {
    pub fn write_tsv<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        writeln!(
            out,
            "{}\t{}\t{:.20}\t{:.20}\t{:.20}",
            self.threads, self.repetition, self.elapsed_secs, self.pi, self.error
        )
    }

    pub fn write_console<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        writeln!(
            out,
            "Hilos: {:2} | Iteracion: {:2} | Tiempo: {:.20} s | Pi \u{2248} {:.20} | Error: {:.20}",
            self.threads, self.repetition, self.elapsed_secs, self.pi, self.error
        )
    }
}

/// Opens the results file in truncate mode. Nothing reaches disk until the
/// writer is flushed or dropped.
pub fn create_results_file(path: &Path) -> Result<BufWriter<File>, BenchError> {
    let file = File::create(path).map_err(|source| BenchError::OpenResults {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufWriter::new(file))
}
