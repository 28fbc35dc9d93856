// SPDX-License-Identifier: MPL-2.0
//! Console logging through the `log` facade, backed by `env_logger`.
//!
//! `RUST_LOG` takes precedence when set. Otherwise this crate logs at debug
//! level in debug builds and at warn level in release builds, and other
//! crates only report errors.

use env_logger::fmt::Formatter;
use log::{LevelFilter, Record};
use std::io::Write;

const CRATE_TARGET: &str = env!("CARGO_CRATE_NAME");

/// Level of this crate's logs when `RUST_LOG` is not set.
#[must_use]
pub fn default_level() -> LevelFilter {
    if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    }
}

/// Installs the global logger. Calling it twice only logs a warning.
pub fn setup_logger() {
    let mut builder = env_logger::Builder::new();

    if std::env::var("RUST_LOG").is_ok() {
        builder.parse_env("RUST_LOG");
    } else {
        builder.filter(None, LevelFilter::Error);
        builder.filter(Some(CRATE_TARGET), default_level());
    }

    builder.format(|buf: &mut Formatter, record: &Record| {
        let location = match (record.module_path(), record.line()) {
            (Some(module), Some(line)) => format!("{module}:{line}"),
            (Some(module), None) => module.to_string(),
            _ => "unknown".to_string(),
        };
        writeln!(
            buf,
            "{} {:<5} {} {}",
            buf.timestamp_millis(),
            record.level(),
            location,
            record.args()
        )
    });

    if let Err(err) = builder.try_init() {
        log::warn!("logger already initialized: {err}");
    }
}
