use crate::errors::*;
use crate::producer::send_message;
use crate::send_log::SendLog;
use csv::{ReaderBuilder, StringRecord};
use log::info;
use snafu::ResultExt;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// How a driver run ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Every row in the file was sent.
    Completed { sent: usize },
    /// The operator interrupted the loop. Rows sent before the
    /// interrupt stay sent; no partial row went out.
    Interrupted { sent: usize },
}

/// Reader over a task file, one message per CSV row.
pub struct TaskReader {
    path: PathBuf,
    inner: csv::Reader<File>,
}

impl TaskReader {
    /// Open a task file. No header row is assumed and rows may carry
    /// any number of fields.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<TaskReader> {
        let path = path.as_ref().to_path_buf();
        let inner = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(&path)
            .context(ReadTasksSnafu { path: &path })?;
        Ok(TaskReader { path, inner })
    }

    /// Iterate messages in file order, each row's fields joined by
    /// single spaces.
    pub fn messages(&mut self) -> impl Iterator<Item = Result<String>> + '_ {
        let path = self.path.clone();
        self.inner.records().map(move |record| {
            record
                .map(|r| row_message(&r))
                .context(ReadTasksSnafu { path: &path })
        })
    }
}

fn row_message(record: &StringRecord) -> String {
    record.iter().collect::<Vec<_>>().join(" ")
}

/// Install a Ctrl+C handler that raises the returned stop flag. The
/// handler does nothing else; [`emit_tasks`] polls the flag between
/// rows.
pub fn interrupt_flag() -> Result<Arc<AtomicBool>> {
    let stop = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&stop);
    ctrlc::set_handler(move || flag.store(true, Ordering::SeqCst))
        .context(InstallInterruptHandlerSnafu)?;
    Ok(stop)
}

/// Read `path` and send one message per row to `queue_name` on `host`,
/// strictly in file order. Each send completes before the next row is
/// read. When `stop` is raised the loop records the interruption and
/// returns without reading further rows; messages already sent are not
/// rolled back.
pub fn emit_tasks(
    path: &Path,
    host: &str,
    queue_name: &str,
    log: &mut SendLog,
    stop: &AtomicBool,
) -> Result<Outcome> {
    let mut reader = TaskReader::open(path)?;
    let mut sent = 0;
    for message in reader.messages() {
        if stop.load(Ordering::SeqCst) {
            info!("interrupted after {} tasks", sent);
            log.interrupted()?;
            return Ok(Outcome::Interrupted { sent });
        }
        let message = message?;
        send_message(host, queue_name, &message, log)?;
        sent += 1;
    }
    Ok(Outcome::Completed { sent })
}
