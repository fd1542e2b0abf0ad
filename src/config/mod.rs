//! Explorer Configuration Module
//!
//! Provides deployment configuration loaded from TOML files, replacing the
//! values the original frontend hardcoded (backend URL, default radius,
//! debounce window).
//!
//! ## Loading Order
//!
//! 1. `TR_EXPLORER_CONFIG` environment variable (path to TOML file)
//! 2. `explorer.toml` in the current working directory
//! 3. Built-in defaults
//!
//! ## Usage
//!
//! Call `config::init()` once at startup, then `config::get()` anywhere:
//!
//! ```ignore
//! // In main():
//! config::init(ExplorerConfig::load());
//!
//! // Anywhere in the codebase:
//! let debounce = config::get().production.debounce_ms;
//! ```

mod app_config;

pub use app_config::*;

use std::sync::OnceLock;

/// Process-wide explorer configuration, set once during startup.
static EXPLORER_CONFIG: OnceLock<ExplorerConfig> = OnceLock::new();

/// Install the process-wide configuration.
///
/// Expected to run exactly once, before anything calls `get()`. A repeat
/// call keeps the first value and logs the attempt.
pub fn init(config: ExplorerConfig) {
    if EXPLORER_CONFIG.set(config).is_err() {
        tracing::warn!("Explorer config was already initialized; keeping the first value");
    }
}

/// The process-wide configuration.
///
/// Panics when no `init()` has run yet: every entry point installs the
/// config before touching the store, so reaching this without one is a
/// wiring mistake, not a runtime condition to recover from.
pub fn get() -> &'static ExplorerConfig {
    EXPLORER_CONFIG
        .get()
        .expect("explorer config read before init() — call config::init() at startup")
}

/// Whether `init()` has run. Lets tests and optional paths avoid the panic
/// in `get()`.
pub fn is_initialized() -> bool {
    EXPLORER_CONFIG.get().is_some()
}
