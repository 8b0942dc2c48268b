//! mega CLI - binary entry point for the encode/decode round trip.
//!
//! # Flow
//!
//! ```text
//! main() -> init_tracing() -> load_settings() -> Driver::stdio(settings).run(&Transform)
//!                                                       |
//!                                                       v
//!                    encode -> send -> decode -> output (stdout)
//! ```
//!
//! Takes no arguments. Values go to stdout; matrix dumps and logs go to
//! stderr. Any failure along the chain ends the process with a non-zero
//! exit code.

use std::io;

use anyhow::{Context, Result};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use mega_engine::{Driver, MegaConfig, RunSettings, Transform};

fn init_tracing() {
    // Quiet by default: stderr also carries the matrix dumps.
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("warn"))
        .unwrap_or_else(|_| EnvFilter::new("off"));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_ansi(false)
                .with_target(false)
                .with_writer(io::stderr),
        )
        .with(env_filter)
        .init();
}

/// Config file overrides when present and valid, fixture defaults otherwise.
fn load_settings() -> RunSettings {
    // Read and parse failures are already logged by `load`.
    let Some(config) = MegaConfig::load().ok().flatten() else {
        return RunSettings::default();
    };

    match config.settings() {
        Ok(settings) => settings,
        Err(err) => {
            tracing::warn!("Ignoring config: {err}");
            RunSettings::default()
        }
    }
}

fn main() -> Result<()> {
    init_tracing();

    let settings = load_settings();
    let mut driver = Driver::stdio(settings);
    driver.run(&Transform).context("round trip failed")?;

    Ok(())
}
