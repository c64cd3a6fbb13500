//! Lets a [`Logger`] serve as the backend for the `log` crate, so libraries
//! using `log::warn!` and friends end up in the same owner-tagged output.

use log::{LevelFilter, Metadata, Record, SetLoggerError};

use crate::level::Level;
use crate::logger::Logger;

impl From<log::Level> for Level {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Error => Level::Severe,
            log::Level::Warn => Level::Warn,
            log::Level::Info => Level::Info,
            log::Level::Debug | log::Level::Trace => Level::Debug,
        }
    }
}

impl log::Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        let level = Level::from(metadata.level());

        !self.is_quiet() && !(self.production_mode() && level == Level::Debug)
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            self.emit(record.args(), record.level().into());
        }
    }

    fn flush(&self) {}
}

/// Installs `logger` as the global `log` backend.
///
/// Fails if another backend has already been installed.
pub fn install(logger: Logger) -> Result<(), SetLoggerError> {
    let max_level = if logger.production_mode() {
        LevelFilter::Info
    } else {
        LevelFilter::Trace
    };

    log::set_boxed_logger(Box::new(logger))?;
    log::set_max_level(max_level);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logger::LoggerOptions;
    use crate::target::OutputTarget;
    use log::Log;

    #[test]
    fn test_level_mapping() {
        assert_eq!(Level::from(log::Level::Error), Level::Severe);
        assert_eq!(Level::from(log::Level::Warn), Level::Warn);
        assert_eq!(Level::from(log::Level::Info), Level::Info);
        assert_eq!(Level::from(log::Level::Debug), Level::Debug);
        assert_eq!(Level::from(log::Level::Trace), Level::Debug);
    }

    #[test]
    fn test_enabled() {
        let options = LoggerOptions::default().output_target(OutputTarget::PlainConsole);
        let debug = Metadata::builder().level(log::Level::Debug).build();
        let error = Metadata::builder().level(log::Level::Error).build();

        let logger = Logger::with_options("App", options);
        assert!(logger.enabled(&debug));
        assert!(logger.enabled(&error));

        let production = Logger::with_options("App", options.production_mode(true));
        assert!(!production.enabled(&debug));
        assert!(production.enabled(&error));

        logger.set_quiet(true);
        assert!(!logger.enabled(&error));
    }
}
