use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use flowdedup::Config;

#[derive(Parser)]
#[command(name = "flowdedup")]
#[command(version)]
#[command(about = "Deduplicate network flow records from *.log files in the current directory")]
#[command(
    long_about = "Reads every *.log file in the current directory, keeps the first record seen \
for each (source identity, destination identity, destination port) and writes them to \
unique-flows-YYYYMMDD-HHMMSS.json.\n\nSet RUST_LOG=debug for per-run statistics."
)]
struct Cli {}

/// Route internal logs to stderr; quiet unless RUST_LOG asks for more.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let _cli = Cli::parse();
    init_tracing();

    let summary = flowdedup::run(&Config::default())?;
    tracing::debug!(
        unique = summary.unique_flows,
        output = %summary.output.path.display(),
        "run complete"
    );

    Ok(())
}
