//! # fingerbox
//!
//! Parametric finger-joint box generator. Given box dimensions, material
//! thickness, an open or closed top and finger counts per edge, it builds
//! interlocking panel outlines and writes them out for laser cutting.
//!
//! ## Architecture
//!
//! fingerbox is organized as a workspace with multiple crates:
//!
//! 1. **fingerbox-core** - 2D points, bounds and closed outlines
//! 2. **fingerbox-joinery** - finger patterns, panel outlines, box assembly, solidifier and exporters
//! 3. **fingerbox-settings** - TOML/JSON job files
//! 4. **fingerbox** - command line binary tying the crates together

pub mod job;

pub use fingerbox_joinery as joinery;
pub use fingerbox_settings::{Config, SettingsError};
pub use job::{run_job, BoxOverrides, JobOutcome, Outputs};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging
///
/// - `RUST_LOG` is honoured; otherwise the level is `info`, or `debug`
///   with `verbose`
/// - `json` switches the console formatter to JSON lines
pub fn init_logging(verbose: bool, json: bool) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    let env_filter = EnvFilter::from_default_env().add_directive(level.into());

    let result = if json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().with_writer(std::io::stderr).json())
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_level(true)
                    .with_line_number(verbose),
            )
            .try_init()
    };

    result.map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))
}
