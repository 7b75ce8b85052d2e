//! Opt-in file logging.
//!
//! The game owns the terminal while it runs, so log lines go to a file.
//! Nothing is written until a file is opened and logging is enabled.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

static LOGGING: AtomicBool = AtomicBool::new(false);

static LOG_FILE: Mutex<Option<File>> = Mutex::new(None);

/// Open (and truncate) the log file.
pub fn init_log_file(path: &Path) -> std::io::Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)?;

    if let Ok(mut slot) = LOG_FILE.lock() {
        *slot = Some(file);
    }
    Ok(())
}

/// Append one line to the log file, if one is open.
pub fn write_log(message: String) {
    if let Ok(mut slot) = LOG_FILE.lock() {
        if let Some(file) = slot.as_mut() {
            let _ = writeln!(file, "{}", message);
            let _ = file.flush();
        }
    }
}

pub fn enable_logging() {
    LOGGING.store(true, Ordering::Relaxed);
}

pub fn is_enabled() -> bool {
    LOGGING.load(Ordering::Relaxed)
}

/// Log a formatted line to the log file when logging is enabled.
///
/// The arguments are not evaluated otherwise.
#[macro_export]
macro_rules! vlog {
    ($($arg:tt)*) => {
        if $crate::logging::is_enabled() {
            let message = format!($($arg)*);
            $crate::logging::write_log(message);
        }
    };
}
