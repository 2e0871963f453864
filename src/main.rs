use std::io;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;

use cinelist::cli::{build_services, run_headless, Cli};
use cinelist::config::Config;
use cinelist::logging::{init_tracing, LogSink};

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let interactive = cli.is_interactive();
    let config = cli.load_config()?;

    let sink = log_sink(interactive, &config);
    init_tracing(&config.logging.level, sink).context("failed to initialize logging")?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;

    let services = build_services(&config)?;
    tracing::debug!(base_url = %config.api.base_url, "Services ready");

    match cli.command {
        Some(command) if !interactive => {
            let mut stdout = io::stdout().lock();
            runtime.block_on(run_headless(command, &services, &mut stdout))
        }
        _ => {
            let tick_rate = Duration::from_millis(config.ui.tick_rate_ms);
            cinelist::ui::run(services, runtime.handle(), tick_rate)?;
            runtime.shutdown_timeout(Duration::from_secs(2));
            Ok(())
        }
    }
}

/// The terminal UI owns the screen, so it only logs to a file.
fn log_sink(interactive: bool, config: &Config) -> LogSink {
    if !interactive {
        return LogSink::Stderr;
    }
    match config.logging.file_path() {
        Some(path) => LogSink::File(path),
        None => LogSink::Disabled,
    }
}
