//! Append-only run log mirroring classification and error events.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Local;

/// Best-effort, timestamped line log.
///
/// Write failures are reported to stderr and never escalate; a broken log
/// must not abort classification.
#[derive(Debug)]
pub struct RunLog {
    path: Option<PathBuf>,
}

impl RunLog {
    /// A log that appends to `path`.
    pub fn to_file(path: &Path) -> RunLog {
        RunLog {
            path: Some(path.to_path_buf()),
        }
    }

    /// A log that discards every message.
    pub fn disabled() -> RunLog {
        RunLog { path: None }
    }

    /// Append one `[YYYY-MM-DD HH:MM:SS] message` line.
    pub fn write(&self, message: &str) {
        let Some(path) = &self.path else {
            return;
        };
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        let result = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .and_then(|mut file| writeln!(file, "[{timestamp}] {message}"));
        if let Err(e) = result {
            eprintln!("[ERROR] cannot write run log '{}': {e}", path.display());
        }
    }
}
