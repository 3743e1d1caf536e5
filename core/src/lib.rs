//! # LLM Council Core
//!
//! Core library for LLM Council - a panel of language models whose answers
//! are synthesized by a designated chairman model.
//!
//! This library owns the council configuration: which models sit on the
//! council, which one chairs it, where conversations are stored, and how a
//! local `.env` definitions file is merged into the process environment
//! before any of that is read.

// Core modules
pub mod config;
pub mod error;

// Re-export commonly used types
pub use config::{ApiSettings, CouncilConfig, EnvFileLoader, EnvFileReport};
pub use error::{ConfigError, Error, Result};

/// Current version of the council-core library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize tracing for the library, filtered by `RUST_LOG`
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}

/// Initialize tracing with a specific debug mode
pub fn init_tracing_with_debug(debug: bool) {
    let filter = if debug { "debug" } else { "info" };

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .init();
}
