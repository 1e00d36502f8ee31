//! Al-Noor CLI Library
//!
//! Command implementations behind the `alnoor` binary, exposed as a library
//! so they can be driven from tests.
//!
//! # Modules
//!
//! - [`cmd`] - Command implementations (build, check, render, serve)
//! - [`server`] - Static file server over the build output
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! use alnoor::cmd;
//!
//! cmd::build::run(Path::new("config.toml"), None).unwrap();
//! ```

pub mod cmd;
pub mod server;

pub use alnoor_core::{Config, ContentStore};
pub use alnoor_generator::{BuildStats, Builder, HtmlGenerator};

/// Initialize tracing with the specified verbosity level.
///
/// `verbose` maps 0 to WARN, 1 to INFO, 2 to DEBUG and anything higher to
/// TRACE. `RUST_LOG` directives are applied on top.
pub fn init_tracing(verbose: u8) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();
}
