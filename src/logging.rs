// Copyright (c) 2025 Nicholas D. Crosbie
//! Diagnostics go to stderr; stdout carries nothing but the JSON report.
use std::fmt;
use std::io;
use std::sync::Once;

use chrono::Local;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::EnvFilter;

type InitResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

struct LocalClock;

impl FormatTime for LocalClock {
    fn format_time(&self, w: &mut Writer<'_>) -> fmt::Result {
        write!(w, "{}", Local::now().format("%Y-%m-%d %H:%M:%S"))
    }
}

/// Installs the stderr subscriber.
///
/// `RUST_LOG` is honoured; without it only warnings are shown, and
/// `verbose` raises this crate to `debug`.
pub fn init_logging(verbose: bool) -> InitResult {
    let filter = if verbose {
        EnvFilter::try_new("warn,objpath=debug")?
    } else {
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("warn"))?
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_timer(LocalClock)
        .with_target(false)
        .with_ansi(false)
        .try_init()
}

static TEST_LOGGING_INIT: Once = Once::new();

/// Console logging for tests, initialised at most once per process.
pub fn ensure_test_logging() {
    TEST_LOGGING_INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("objpath=debug"));
        // Another subscriber may already be installed.
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}
