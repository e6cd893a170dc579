// src/log.rs
//
// Diagnostic logging. Everything the user never sees (per-source failures,
// swallowed lookup errors, cache activity) lands here.
// GUI writes to a file next to the working dir; the CLI writes to stderr.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, OnceLock};

use tracing_subscriber::{fmt, EnvFilter};

use crate::config::consts::DEFAULT_LOG_FILTER;

static INIT: OnceLock<()> = OnceLock::new();

// Current log file for the File sink. Empty means stderr.
static FILE: Mutex<Option<File>> = Mutex::new(None);

pub enum Sink {
    File(PathBuf),
    Stderr,
}

/// Install the global subscriber. Only the first call has any effect.
pub fn init(sink: Sink) {
    INIT.get_or_init(|| install(sink));
}

fn filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

fn install(sink: Sink) {
    let builder = fmt().with_env_filter(filter()).with_target(false);

    let res = match sink {
        Sink::Stderr => builder.with_writer(io::stderr).try_init(),
        Sink::File(path) => {
            if let Err(e) = redirect(&path) {
                eprintln!("Log file {} unavailable ({e}); logging to stderr", path.display());
            }
            builder.with_ansi(false).with_writer(|| FileWriter).try_init()
        }
    };

    // Another subscriber (e.g. a test harness) got there first.
    if let Err(e) = res {
        eprintln!("Logging not installed: {e}");
    }
}

/// Point the File sink at `path`. Used once config names a log file other
/// than the one logging started with. On error the previous target stays.
pub fn redirect(path: &Path) -> io::Result<()> {
    let file = open_log(path)?;
    *file_slot() = Some(file);
    Ok(())
}

fn file_slot() -> MutexGuard<'static, Option<File>> {
    FILE.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

struct FileWriter;

impl Write for FileWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match file_slot().as_mut() {
            Some(f) => f.write(buf),
            None => io::stderr().write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match file_slot().as_mut() {
            Some(f) => f.flush(),
            None => io::stderr().flush(),
        }
    }
}

fn open_log(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        ::tracing::info!($($arg)*)
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        ::tracing::debug!($($arg)*)
    };
}

/// Warn-level logging
#[macro_export]
macro_rules! logw {
    ($($arg:tt)*) => {
        ::tracing::warn!($($arg)*)
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        ::tracing::error!($($arg)*)
    };
}
