//! Debug logging sink.
//!
//! Diagnostics must never take down the surface: every write failure is
//! silently dropped.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use crate::config::EnvConfig;

/// Append-only line logger enabled by `PROMPT_PANE_WRITE_LOG`.
#[derive(Debug, Default)]
pub struct DebugLogger {
    sink: Option<PathBuf>,
}

impl DebugLogger {
    pub fn new(config: &EnvConfig) -> Self {
        Self {
            sink: config.write_log.as_ref().map(PathBuf::from),
        }
    }

    pub fn from_env() -> Self {
        Self::new(&EnvConfig::from_env())
    }

    pub fn disabled() -> Self {
        Self { sink: None }
    }

    pub fn is_enabled(&self) -> bool {
        self.sink.is_some()
    }

    pub fn log(&self, message: &str) {
        let Some(path) = self.sink.as_ref() else {
            return;
        };
        let Ok(mut file) = OpenOptions::new().create(true).append(true).open(path) else {
            return;
        };
        let _ = writeln!(file, "{message}");
    }
}
