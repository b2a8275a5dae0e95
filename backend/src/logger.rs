use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, OnceLock};

use tracing_subscriber::EnvFilter;

use crate::get_create_wikiday_dir;

/// Log levels representing increasing verbosity.
///
/// Setting a level enables that level and all less verbose levels below it.
/// The level can be set via the `LOG_LEVEL` environment variable or at
/// runtime with `set_log_level()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Silent = 0,
    Error = 1,
    Warn = 2,
    Info = 3,
    Debug = 4,
}

impl Level {
    /// Parse a log level from a string (case insensitive).
    ///
    /// Valid values: "silent", "error", "warn", "info", "debug".
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "silent" => Some(Level::Silent),
            "error" => Some(Level::Error),
            "warn" => Some(Level::Warn),
            "info" => Some(Level::Info),
            "debug" => Some(Level::Debug),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Silent => "Silent",
            Level::Error => "Error",
            Level::Warn => "Warn",
            Level::Info => "Info",
            Level::Debug => "Debug",
        }
    }
}

pub struct Logger {
    log_file: PathBuf,
    disable_log: bool,
    enable_print_log: bool,
    level: Arc<Mutex<Level>>,
}

impl Logger {
    pub fn new() -> Result<Self, Box<dyn std::error::Error>> {
        let data_dir = get_create_wikiday_dir()
            .map_err(|e| format!("Failed to get wikiday dir: {}", e))?;

        std::fs::create_dir_all(&data_dir)?;
        let log_file = data_dir.join("log.txt");

        let disable_log = std::env::var("DISABLE_LOG")
            .map(|v| v.to_lowercase() == "true")
            .unwrap_or(false);

        let enable_print_log = std::env::var("ENABLE_PRINT_LOG")
            .map(|v| v.to_lowercase() == "true")
            .unwrap_or(false);

        // Read LOG_LEVEL from environment variable, default to Info
        let level = std::env::var("LOG_LEVEL")
            .ok()
            .and_then(|v| Level::from_str(&v))
            .unwrap_or(Level::Info);

        Ok(Logger {
            log_file,
            disable_log,
            enable_print_log,
            level: Arc::new(Mutex::new(level)),
        })
    }

    pub fn init_tracing() -> Result<(), Box<dyn std::error::Error>> {
        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("info"));

        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .with_file(false)
            .with_line_number(false)
            .finish();

        tracing::subscriber::set_global_default(subscriber)?;

        Ok(())
    }

    fn write_to_file(&self, message: &str) -> Result<(), Box<dyn std::error::Error>> {
        if self.disable_log {
            return Ok(());
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_file)?;

        let timestamp = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S%.3fZ");
        let log_line = format!("[{}] {}\n", timestamp, message);

        file.write_all(log_line.as_bytes())?;

        Ok(())
    }

    fn enabled(&self, min_level: Level) -> bool {
        self.level.lock().map(|l| *l >= min_level).unwrap_or(true)
    }

    /// Log a debug message (most verbose level).
    pub fn debug(&self, msg: &str) {
        if !self.enabled(Level::Debug) {
            return;
        }

        if self.enable_print_log {
            tracing::debug!("{}", msg);
        }

        if let Err(e) = self.write_to_file(&format!("DEBUG: {}", msg)) {
            eprintln!("Failed to write to log file: {}", e);
        }
    }

    /// Log an informational message.
    pub fn info(&self, msg: &str) {
        if !self.enabled(Level::Info) {
            return;
        }

        if self.enable_print_log {
            tracing::info!("{}", msg);
        }

        if let Err(e) = self.write_to_file(&format!("INFO: {}", msg)) {
            eprintln!("Failed to write to log file: {}", e);
        }
    }

    /// Log a warning message.
    pub fn warn(&self, msg: &str) {
        if !self.enabled(Level::Warn) {
            return;
        }

        if self.enable_print_log {
            tracing::warn!("{}", msg);
        }

        if let Err(e) = self.write_to_file(&format!("WARN: {}", msg)) {
            eprintln!("Failed to write to log file: {}", e);
        }
    }

    /// Log an error message.
    pub fn error(&self, msg: &str) {
        if !self.enabled(Level::Error) {
            return;
        }

        if self.enable_print_log {
            tracing::error!("{}", msg);
        }

        if let Err(e) = self.write_to_file(&format!("ERROR: {}", msg)) {
            eprintln!("Failed to write to log file: {}", e);
        }
    }

    /// Get the current log level. If the lock cannot be acquired, returns
    /// Level::Info as a safe default.
    pub fn get_level(&self) -> Level {
        self.level.lock().map(|l| *l).unwrap_or(Level::Info)
    }

    /// Set the log level at runtime.
    pub fn set_level(&self, new_level: Level) {
        if let Ok(mut level) = self.level.lock() {
            *level = new_level;
        }
    }
}

// Global logger instance using OnceLock for thread-safe initialization
static LOGGER: OnceLock<Logger> = OnceLock::new();
static TRACING_INITIALIZED: OnceLock<()> = OnceLock::new();

fn with_logger<F, R>(f: F) -> R
where
    F: FnOnce(&Logger) -> R,
{
    // Initialize tracing once, globally
    TRACING_INITIALIZED.get_or_init(|| {
        if let Err(e) = Logger::init_tracing() {
            eprintln!("Failed to initialize tracing: {}", e);
        }
    });

    let logger = LOGGER.get_or_init(|| {
        match Logger::new() {
            Ok(logger) => logger,
            Err(e) => {
                eprintln!("Failed to create logger: {}", e);
                // Return a disabled logger that will silently do nothing
                Logger {
                    log_file: PathBuf::new(),
                    disable_log: true,
                    enable_print_log: false,
                    level: Arc::new(Mutex::new(Level::Info)),
                }
            }
        }
    });

    f(logger)
}

pub fn debug(msg: &str) {
    with_logger(|logger| logger.debug(msg));
}

pub fn info(msg: &str) {
    with_logger(|logger| logger.info(msg));
}

pub fn warn(msg: &str) {
    with_logger(|logger| logger.warn(msg));
}

pub fn error(msg: &str) {
    with_logger(|logger| logger.error(msg));
}

pub fn get_log_level() -> Level {
    with_logger(|logger| logger.get_level())
}

pub fn set_log_level(level: Level) {
    with_logger(|logger| logger.set_level(level));
}

/// Set the log level from a string (case insensitive).
///
/// Returns true if successful, false if the string is not a valid level.
pub fn set_log_level_str(level_str: &str) -> bool {
    if let Some(level) = Level::from_str(level_str) {
        set_log_level(level);
        true
    } else {
        false
    }
}
