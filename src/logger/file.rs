/// Daily log file output
///
/// One file per day under the logs directory. Writes are buffered and
/// flushed on `flush_file_logging` (called at shutdown) or when the buffer fills.
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use chrono::Local;
use once_cell::sync::Lazy;
use parking_lot::Mutex;

use crate::paths;

static LOG_FILE: Lazy<Mutex<Option<BufWriter<File>>>> = Lazy::new(|| Mutex::new(None));

pub fn log_file_path() -> PathBuf {
    paths::get_logs_directory().join(format!(
        "token_directory_{}.log",
        Local::now().format("%Y-%m-%d")
    ))
}

/// Open (or append to) today's log file
///
/// Failure to open is reported on stderr and leaves file logging disabled.
pub fn init_file_logging() {
    let path = log_file_path();
    match OpenOptions::new().create(true).append(true).open(&path) {
        Ok(file) => {
            *LOG_FILE.lock() = Some(BufWriter::new(file));
        }
        Err(e) => {
            eprintln!("⚠️  Failed to open log file '{}': {}", path.display(), e);
        }
    }
}

/// Append a line to the log file (no-op before `init_file_logging`)
pub fn write_to_file(line: &str) {
    if let Some(writer) = LOG_FILE.lock().as_mut() {
        let _ = writeln!(writer, "{}", line);
    }
}

pub fn flush_file_logging() {
    if let Some(writer) = LOG_FILE.lock().as_mut() {
        let _ = writer.flush();
    }
}
