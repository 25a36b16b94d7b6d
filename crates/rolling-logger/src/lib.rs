//! Rolling Logger
//!
//! `log` backend that keeps the most recent records in a circular buffer
//! and forwards every record to the browser console (stderr off-wasm).

use std::collections::VecDeque;
use std::sync::{Mutex, OnceLock};

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Logger settings
#[derive(Debug, Clone)]
pub struct LoggerConfig {
    pub level: LevelFilter,
    /// How many formatted records to keep around
    pub capacity: usize,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: LevelFilter::Info,
            capacity: 500,
        }
    }
}

pub struct RollingLogger {
    level: LevelFilter,
    capacity: usize,
    buffer: Mutex<VecDeque<String>>,
}

impl RollingLogger {
    pub fn new(config: LoggerConfig) -> Self {
        Self {
            level: config.level,
            capacity: config.capacity.max(1),
            buffer: Mutex::new(VecDeque::with_capacity(config.capacity.max(1))),
        }
    }

    /// Buffered records, oldest first
    pub fn recent(&self) -> Vec<String> {
        match self.buffer.lock() {
            Ok(buf) => buf.iter().cloned().collect(),
            Err(poisoned) => poisoned.into_inner().iter().cloned().collect(),
        }
    }

    fn push(&self, line: String) {
        let mut buf = match self.buffer.lock() {
            Ok(buf) => buf,
            Err(poisoned) => poisoned.into_inner(),
        };
        while buf.len() >= self.capacity {
            buf.pop_front();
        }
        buf.push_back(line);
    }
}

/// `2024-01-01T10:00:00.000Z WARN voto_ui::api: message`
pub fn format_record(record: &Record) -> String {
    format!(
        "{} {:<5} {}: {}",
        chrono::Utc::now().format("%Y-%m-%dT%H:%M:%S%.3fZ"),
        record.level(),
        record.target(),
        record.args()
    )
}

#[cfg(target_arch = "wasm32")]
fn emit(level: Level, line: &str) {
    match level {
        Level::Error => web_sys::console::error_1(&line.into()),
        Level::Warn => web_sys::console::warn_1(&line.into()),
        Level::Info => web_sys::console::log_1(&line.into()),
        Level::Debug | Level::Trace => web_sys::console::debug_1(&line.into()),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: Level, line: &str) {
    eprintln!("{}", line);
}

impl Log for RollingLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_record(record);
        emit(record.level(), &line);
        self.push(line);
    }

    fn flush(&self) {}
}

static LOGGER: OnceLock<RollingLogger> = OnceLock::new();

/// Install the global logger; a second call returns the `log` error
pub fn init(config: LoggerConfig) -> Result<&'static RollingLogger, SetLoggerError> {
    let level = config.level;
    let logger = LOGGER.get_or_init(|| RollingLogger::new(config));
    log::set_logger(logger)?;
    log::set_max_level(level);
    Ok(logger)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_at(logger: &RollingLogger, level: Level, msg: &str) {
        logger.log(
            &Record::builder()
                .args(format_args!("{}", msg))
                .level(level)
                .target("test")
                .build(),
        );
    }

    #[test]
    fn test_buffer_rolls_over() {
        let logger = RollingLogger::new(LoggerConfig { level: LevelFilter::Trace, capacity: 3 });
        for i in 0..5 {
            record_at(&logger, Level::Info, &format!("line {}", i));
        }
        let recent = logger.recent();
        assert_eq!(recent.len(), 3);
        assert!(recent[0].ends_with("test: line 2"));
        assert!(recent[2].ends_with("test: line 4"));
    }

    #[test]
    fn test_level_filter() {
        let logger = RollingLogger::new(LoggerConfig { level: LevelFilter::Warn, capacity: 10 });
        record_at(&logger, Level::Info, "quiet");
        record_at(&logger, Level::Error, "loud");
        let recent = logger.recent();
        assert_eq!(recent.len(), 1);
        assert!(recent[0].contains("ERROR"));
        assert!(recent[0].ends_with("loud"));
    }

    #[test]
    fn test_zero_capacity_keeps_one() {
        let logger = RollingLogger::new(LoggerConfig { level: LevelFilter::Info, capacity: 0 });
        record_at(&logger, Level::Info, "a");
        record_at(&logger, Level::Info, "b");
        assert_eq!(logger.recent().len(), 1);
    }
}
