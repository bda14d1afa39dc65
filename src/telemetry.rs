//! Trace log for theme selection and config loading.
//!
//! The rendered status line owns stdout, so with `--logs` the decisions made
//! along the way (unknown-theme fallback, a skipped or loaded `config.toml`,
//! theme replacement in the registry) are written as JSON lines to a file.

use crate::config::AppConfig;
use std::env;
use std::fs::{File, OpenOptions};
use std::io;
use std::path::PathBuf;
use std::sync::OnceLock;
use tracing_subscriber::fmt::time::UtcTime;

pub const TRACE_LOG_ENV: &str = "CC_STATUSLINE_TRACE_LOG";
const DEFAULT_TRACE_FILE: &str = "cc_statusline_trace.jsonl";

static TRACING_INIT: OnceLock<()> = OnceLock::new();

/// Where trace events go for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceSink {
    pub path: PathBuf,
}

impl TraceSink {
    /// `None` unless `--logs` is set and `--no-logs` is not.
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Option<Self> {
        (config.logs && !config.no_logs).then(|| Self {
            path: env::var_os(TRACE_LOG_ENV)
                .map(PathBuf::from)
                .unwrap_or_else(|| env::temp_dir().join(DEFAULT_TRACE_FILE)),
        })
    }

    fn open(&self) -> io::Result<File> {
        OpenOptions::new().create(true).append(true).open(&self.path)
    }
}

/// Returns whether a subscriber was installed by this call.
fn install(sink: &TraceSink, once: &OnceLock<()>) -> bool {
    if once.get().is_some() {
        return false;
    }
    // Tracing is optional; an unwritable path skips it.
    let Ok(file) = sink.open() else {
        return false;
    };
    once.get_or_init(|| {
        let subscriber = tracing_subscriber::fmt()
            .json()
            .with_timer(UtcTime::rfc_3339())
            .with_writer(file)
            .with_current_span(false)
            .with_span_list(false)
            .finish();
        let _ = tracing::subscriber::set_global_default(subscriber);
    });
    true
}

pub fn init_tracing(config: &AppConfig) {
    if let Some(sink) = TraceSink::from_config(config) {
        install(&sink, &TRACING_INIT);
    }
}
