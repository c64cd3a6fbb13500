//! Owner-tagged console logging.
//!
//! Every line is prefixed with `<owner>`, optionally preceded by a bracketed
//! timestamp, and colored by [`Level`] when stdout is a terminal.

pub mod bridge;
mod level;
mod logger;
mod target;

pub use crate::bridge::install;
pub use crate::level::{Level, ParseLevelError};
pub use crate::logger::{Logger, LoggerOptions};
pub use crate::target::OutputTarget;

/// Formats its arguments and prints them through [`Logger::call`], i.e. at
/// info level.
///
/// ```
/// use ownerlog::{say, Logger};
///
/// let logger = Logger::new("App");
/// say!(logger, "listening on port {}", 8080);
/// ```
#[macro_export]
macro_rules! say {
    ($logger:expr, $($arg:tt)+) => {
        $logger.call(::std::format_args!($($arg)+))
    };
}
