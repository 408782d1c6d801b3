use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;
use workers::WorkerConfig;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_thread_names(true)
        .init();

    let config = WorkerConfig::from_env()?;
    let report = workers::run(&config)?;
    info!(
        workers = report.workers.len(),
        iterations = report.total_iterations(),
        "done"
    );
    Ok(())
}
