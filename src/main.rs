mod config;
mod error;
mod midpoint;
mod report;
mod sweep;

use std::io::{self, Write};

use anyhow::Context;
use tracing::info;

use config::BenchConfig;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("rust_pi=info")
        .with_writer(io::stderr)
        .init();

    let config = BenchConfig::default();

    let mut results = report::create_results_file(&config.output_path)?;

    let stdout = io::stdout();
    let mut console = stdout.lock();

    let records = sweep::run_sweep(&config, &mut results, &mut console)?;

    results
        .flush()
        .with_context(|| format!("Failed to flush {}", config.output_path.display()))?;

    writeln!(
        console,
        "\nResultados guardados en '{}'",
        config.output_path.display()
    )?;

    info!(trials = records.len(), "done");
    Ok(())
}
