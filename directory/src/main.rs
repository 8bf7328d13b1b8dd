//! Headless directory driver.
//!
//! Runs one directory session against the configured endpoint, replays any
//! configured search and facet selections, and prints the resulting snapshot
//! as JSON on stdout. Logs go to stderr. A failed load still prints its
//! snapshot, then exits with a failure status.

use std::io::{self, Write};
use std::process::ExitCode;

use color_eyre::eyre::{Context, Result};
use tokio::runtime::Builder;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use user_directory::driver::run_session;
use user_directory::settings::load_settings;

fn main() -> Result<ExitCode> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = load_settings().wrap_err("failed to load directory settings")?;
    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .wrap_err("failed to build directory runtime")?;
    let report = runtime.block_on(run_session(&settings))?;

    writeln!(io::stdout().lock(), "{}", report.json).wrap_err("failed to write snapshot")?;

    Ok(if report.succeeded() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
