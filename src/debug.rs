//! Debug logging bridge for par-term-quick.
//!
//! Routes every `log::info!()`/`log::debug!()` call to a log file so debug
//! output never lands in a terminal the user is typing into:
//! `/tmp/par_term_quick_debug.log` on Unix/macOS, `%TEMP%\par_term_quick_debug.log`
//! on Windows.
//!
//! The level is taken from, in order of precedence:
//! - the explicit level passed to [`init_log_bridge`] (e.g. a CLI flag)
//! - `RUST_LOG` (a plain level name such as `debug`); output is then also
//!   mirrored to stderr
//! - `DEBUG_LEVEL` (0 = off, 1 = error, 2 = info, 3 = debug, 4 = trace)

use log::{LevelFilter, Log, Metadata, Record};
use parking_lot::Mutex;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::OnceLock;
use std::time::{SystemTime, UNIX_EPOCH};

/// Debug level configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum DebugLevel {
    Off = 0,
    Error = 1,
    Info = 2,
    Debug = 3,
    Trace = 4,
}

impl DebugLevel {
    /// Parse a `DEBUG_LEVEL` value; anything unrecognised is `Off`
    pub fn parse(value: &str) -> Self {
        match value.trim().parse::<u8>() {
            Ok(1) => DebugLevel::Error,
            Ok(2) => DebugLevel::Info,
            Ok(3) => DebugLevel::Debug,
            Ok(4) => DebugLevel::Trace,
            _ => DebugLevel::Off,
        }
    }

    fn from_env() -> Self {
        std::env::var("DEBUG_LEVEL")
            .map(|val| Self::parse(&val))
            .unwrap_or(DebugLevel::Off)
    }

    pub fn to_level_filter(self) -> LevelFilter {
        match self {
            DebugLevel::Off => LevelFilter::Off,
            DebugLevel::Error => LevelFilter::Error,
            DebugLevel::Info => LevelFilter::Info,
            DebugLevel::Debug => LevelFilter::Debug,
            DebugLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// `log` backend writing to the debug log file
struct LogBridge {
    level: LevelFilter,
    file: Mutex<Option<File>>,
    mirror_stderr: bool,
}

impl Log for LogBridge {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format!(
            "[{}] [{:<5}] [{}] {}\n",
            get_timestamp(),
            record.level(),
            record.target(),
            record.args()
        );
        if let Some(file) = self.file.lock().as_mut() {
            let _ = file.write_all(line.as_bytes());
        }
        if self.mirror_stderr {
            eprint!("{line}");
        }
    }

    fn flush(&self) {
        if let Some(file) = self.file.lock().as_mut() {
            let _ = file.flush();
        }
    }
}

static BRIDGE: OnceLock<LogBridge> = OnceLock::new();

fn get_timestamp() -> String {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    format!("{}.{:06}", now.as_secs(), now.subsec_micros())
}

/// Path of the debug log file
pub fn log_path() -> PathBuf {
    #[cfg(unix)]
    {
        PathBuf::from("/tmp/par_term_quick_debug.log")
    }
    #[cfg(not(unix))]
    {
        std::env::temp_dir().join("par_term_quick_debug.log")
    }
}

/// Resolve the effective level from an explicit override and the environment
pub fn resolve_level(level_override: Option<LevelFilter>) -> (LevelFilter, bool) {
    if let Some(level) = level_override {
        return (level, false);
    }
    if let Ok(rust_log) = std::env::var("RUST_LOG")
        && let Ok(level) = rust_log.trim().parse::<LevelFilter>()
    {
        return (level, true);
    }
    (DebugLevel::from_env().to_level_filter(), false)
}

/// Install the log bridge as the global `log` backend.
///
/// Safe to call more than once; only the first call takes effect.
pub fn init_log_bridge(level_override: Option<LevelFilter>) {
    let (level, mirror_stderr) = resolve_level(level_override);

    let bridge = BRIDGE.get_or_init(|| {
        let file = if level != LevelFilter::Off {
            // Silently run without a file if it can't be opened
            OpenOptions::new()
                .write(true)
                .truncate(true)
                .create(true)
                .open(log_path())
                .ok()
        } else {
            None
        };
        LogBridge {
            level,
            file: Mutex::new(file),
            mirror_stderr,
        }
    });

    if log::set_logger(bridge).is_ok() {
        log::set_max_level(bridge.level);
        log::info!(
            "par-term-quick debug session started (level={})",
            bridge.level
        );
    }
}
