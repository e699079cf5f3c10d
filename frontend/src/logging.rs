//! Browser console backend for the `log` facade
//!
//! `shared` reports storage failures and sidebar transitions through `log`;
//! this forwards them to the console via zoon, warnings and errors on stderr.

use log::{Level, LevelFilter, Log, Metadata, Record};

struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_record(record);
        if record.level() <= Level::Warn {
            zoon::eprintln!("{}", line);
        } else {
            zoon::println!("{}", line);
        }
    }

    fn flush(&self) {}
}

/// Install the console logger. Later calls keep the first logger.
pub fn init_logging(level: LevelFilter) {
    match log::set_logger(&LOGGER) {
        Ok(()) => log::set_max_level(level),
        Err(_) => zoon::eprintln!("⚠️ Logger already installed - keeping existing one"),
    }
}

/// Debug output in development builds, info and above in release.
pub fn default_level() -> LevelFilter {
    if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

fn format_record(record: &Record) -> String {
    format!("[{}] {}: {}", record.level(), record.target(), record.args())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_warnings_reach_installed_logger() {
        init_logging(LevelFilter::Info);

        assert_eq!(log::max_level(), LevelFilter::Info);
        assert!(log::log_enabled!(target: "shared::storage", Level::Warn));
        assert!(log::log_enabled!(target: "shared::sidebar", Level::Info));
        assert!(!log::log_enabled!(target: "shared::sidebar", Level::Debug));
    }

    #[test]
    fn test_record_format() {
        assert_eq!(
            format_record(
                &Record::builder()
                    .level(Level::Warn)
                    .target("shared::storage")
                    .args(format_args!("Sidebar preference not saved"))
                    .build()
            ),
            "[WARN] shared::storage: Sidebar preference not saved"
        );
    }

    #[test]
    fn test_default_level_includes_warnings() {
        assert!(default_level() >= LevelFilter::Info);
    }
}
