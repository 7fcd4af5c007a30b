// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Logging setup shared by the devconf crates.
//!
//! Usage:
//! - `DEVCONF_LOG=off` - no logs
//! - `DEVCONF_LOG=info` - page writes, asset copies
//! - `DEVCONF_LOG=debug` - per-section and per-shortcode detail
//!
//! Nothing is logged until [`init_with_level`] runs. The `devconf` binary
//! picks the level from its `--quiet` / `--debug` flags, falling back to
//! [`level_from_env`].

use std::sync::Once;

// Re-export emit so macros can use it
pub use emit;

/// Environment variable consulted by [`level_from_env`].
pub const LOG_ENV: &str = "DEVCONF_LOG";

static INIT: Once = Once::new();

/// Logging threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
}

impl LogLevel {
    /// Parse a level name. Unknown names yield `None`.
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "off" => Some(LogLevel::Off),
            "error" => Some(LogLevel::Error),
            "warn" | "warning" => Some(LogLevel::Warn),
            "info" => Some(LogLevel::Info),
            "debug" => Some(LogLevel::Debug),
            _ => None,
        }
    }

    fn emit_level(self) -> Option<emit::Level> {
        match self {
            LogLevel::Off => None,
            LogLevel::Error => Some(emit::Level::Error),
            LogLevel::Warn => Some(emit::Level::Warn),
            LogLevel::Info => Some(emit::Level::Info),
            LogLevel::Debug => Some(emit::Level::Debug),
        }
    }
}

/// Resolve the level from `DEVCONF_LOG`, falling back to `default`.
///
/// Returns the level and, when the variable held an unrecognised value,
/// that value so the caller can report it once logging is up.
pub fn level_from_env(default: LogLevel) -> (LogLevel, Option<String>) {
    match std::env::var(LOG_ENV) {
        Ok(val) => match LogLevel::parse(&val) {
            Some(level) => (level, None),
            None => (default, Some(val)),
        },
        Err(_) => (default, None),
    }
}

/// Initialize diagnostics at an explicit level, writing to stderr.
///
/// Safe to call multiple times; only the first call has an effect.
pub fn init_with_level(level: LogLevel) {
    INIT.call_once(|| {
        let Some(min) = level.emit_level() else {
            return;
        };

        let rt = emit::setup()
            .emit_to(emit_term::stderr())
            .emit_when(emit::level::min_filter(min))
            .init();

        // The runtime must outlive every emitter for the rest of the process.
        std::mem::forget(rt);
    });
}

/// Log basic operations users want to see: pages written, assets copied.
#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        $crate::emit::info!($($arg)*)
    };
}

/// Log detailed diagnostics: section composition, shortcode expansion.
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {
        $crate::emit::debug!($($arg)*)
    };
}

/// Log recoverable problems (existing static paths, missing partials).
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        $crate::emit::warn!($($arg)*)
    };
}

/// Log failures that abort a build.
#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        $crate::emit::error!($($arg)*)
    };
}
