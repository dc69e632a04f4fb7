use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Local;

pub const LOG_TIMESTAMP_FORMAT: &str = "%y-%m-%d %H:%M:%S";

/// Append-only activity log living inside the working folder.
#[derive(Debug, Clone)]
pub struct ActivityLog {
    path: PathBuf,
}

impl ActivityLog {
    pub fn new(folder: &Path, file_name: &str) -> Self {
        Self {
            path: folder.join(file_name),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes one `[timestamp] message` line. A failed write is reported on
    /// stderr and otherwise ignored.
    pub fn append(&self, message: &str) {
        if let Err(err) = self.try_append(message) {
            tracing::warn!(path = %self.path.display(), error = %err, "activity log write failed");
            eprintln!("ERROR: could not write to log file: {err}");
        }
    }

    fn try_append(&self, message: &str) -> std::io::Result<()> {
        let timestamp = Local::now().format(LOG_TIMESTAMP_FORMAT);
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "[{timestamp}] {message}")
    }
}
