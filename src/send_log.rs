use crate::errors::*;
use snafu::ResultExt;
use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Append-only log of send outcomes for one queue.
///
/// Bound to a queue name once at startup and passed to whatever needs
/// to record an outcome, rather than configured as global logger state.
/// The file is `<queue>_producer_file.log`, opened in append mode so
/// entries from earlier runs are kept; one plain-text info line per
/// entry, no rotation.
pub struct SendLog {
    path: PathBuf,
    file: File,
}

impl SendLog {
    /// Open (or create) the log for `queue_name` in the working
    /// directory.
    pub fn open(queue_name: &str) -> Result<SendLog> {
        SendLog::open_in(Path::new("."), queue_name)
    }

    /// Open (or create) the log for `queue_name` under `dir`.
    pub fn open_in(dir: &Path, queue_name: &str) -> Result<SendLog> {
        let path = dir.join(format!("{}_producer_file.log", queue_name));
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .context(OpenSendLogSnafu { path: &path })?;
        Ok(SendLog { path, file })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Record a successful send. Mirrors the console line.
    pub fn sent(&mut self, message: &str) -> Result<()> {
        self.info(&format!(" [x] Sent {}", message))
    }

    /// Record a failed connection attempt with its detail.
    pub fn connection_failed<D: fmt::Display>(&mut self, detail: D) -> Result<()> {
        self.info(&format!("Error: {}", detail))
    }

    /// Record that the operator interrupted the task-reading loop.
    pub fn interrupted(&mut self) -> Result<()> {
        self.info("Error: reading tasks interrupted")
    }

    fn info(&mut self, line: &str) -> Result<()> {
        writeln!(self.file, "INFO:{}", line).context(WriteSendLogSnafu { path: &self.path })
    }
}
