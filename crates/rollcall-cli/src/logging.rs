// Logging setup, powered by tracing-subscriber.
//
// One-shot commands log to stderr so stdout stays clean for tables and JSON.
// `browse` owns the terminal, so it only logs when given a file.

use anyhow::{Context, Result};
use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, Layer};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::args::LogLevel;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File(PathBuf),
    Off,
}

/// Base level plus quieter defaults for the HTTP stack.
pub fn build_env_filter(level: LogLevel) -> Result<EnvFilter> {
    let mut directives = vec![level.as_str().to_string()];

    let noisy: &[(&str, &str)] = &[
        ("hyper", "warn"),
        ("hyper_util", "warn"),
        ("reqwest", "warn"),
        ("rustls", "warn"),
        ("h2", "warn"),
    ];
    for (target, lvl) in noisy {
        directives.push(format!("{}={}", target, lvl));
    }

    let filter_str = directives.join(",");
    EnvFilter::try_new(&filter_str)
        .map_err(|e| anyhow::anyhow!("Invalid tracing filter '{}': {}", filter_str, e))
}

/// `RUST_LOG` wins over `--log-level` when set.
fn resolve_filter(level: LogLevel) -> Result<EnvFilter> {
    match std::env::var("RUST_LOG") {
        Ok(value) if !value.trim().is_empty() => EnvFilter::try_new(&value)
            .map_err(|e| anyhow::anyhow!("Invalid RUST_LOG '{}': {}", value, e)),
        _ => build_env_filter(level),
    }
}

pub fn init(level: LogLevel, target: LogTarget) -> Result<()> {
    match target {
        LogTarget::Off => {}
        LogTarget::Stderr => {
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .compact();
            tracing_subscriber::registry()
                .with(layer.with_filter(resolve_filter(level)?))
                .try_init()
                .ok();
        }
        LogTarget::File(path) => {
            if let Some(parent) = path.parent()
                && !parent.as_os_str().is_empty()
            {
                fs::create_dir_all(parent)?;
            }
            let log_file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;

            let layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(log_file)
                .with_target(true)
                .with_thread_names(true);
            tracing_subscriber::registry()
                .with(layer.with_filter(resolve_filter(level)?))
                .try_init()
                .ok();
        }
    }

    tracing::debug!(level = %level, "logging initialized");
    Ok(())
}
