use chrono::Local;
use std::fmt::Display;
use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};

use crate::level::Level;
use crate::target::OutputTarget;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

#[cfg(test)]
thread_local! {
    static EMITTED: std::cell::RefCell<Vec<String>> = const { std::cell::RefCell::new(Vec::new()) };
}

/// Construction flags for a [`Logger`]. Everything is off by default and the
/// output target is detected from stdout unless set here.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoggerOptions {
    pub include_timestamp: bool,
    pub production_mode: bool,
    pub quiet_mode: bool,
    pub output_target: Option<OutputTarget>,
}

impl LoggerOptions {
    pub fn include_timestamp(mut self, value: bool) -> Self {
        self.include_timestamp = value;
        self
    }

    pub fn production_mode(mut self, value: bool) -> Self {
        self.production_mode = value;
        self
    }

    pub fn quiet_mode(mut self, value: bool) -> Self {
        self.quiet_mode = value;
        self
    }

    pub fn output_target(mut self, target: OutputTarget) -> Self {
        self.output_target = Some(target);
        self
    }
}

/// Prints `<owner> message` lines to stdout, colored by level on a terminal.
///
/// ```
/// use ownerlog::{Logger, LoggerOptions, OutputTarget};
///
/// let logger = Logger::with_options(
///     "App",
///     LoggerOptions::default().output_target(OutputTarget::PlainConsole),
/// );
///
/// assert_eq!(logger.format("Hello"), "<App> Hello");
/// logger.info("Hello");
/// ```
#[derive(Debug)]
pub struct Logger {
    owner: String,
    production_mode: bool,
    quiet: AtomicBool,
    include_timestamp: bool,
    target: OutputTarget,
}

impl Logger {
    pub fn new(owner: impl Into<String>) -> Self {
        Self::with_options(owner, LoggerOptions::default())
    }

    pub fn with_options(owner: impl Into<String>, options: LoggerOptions) -> Self {
        Logger {
            owner: owner.into(),
            production_mode: options.production_mode,
            quiet: AtomicBool::new(options.quiet_mode),
            include_timestamp: options.include_timestamp,
            target: options.output_target.unwrap_or_else(OutputTarget::detect),
        }
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn production_mode(&self) -> bool {
        self.production_mode
    }

    pub fn include_timestamp(&self) -> bool {
        self.include_timestamp
    }

    pub fn output_target(&self) -> OutputTarget {
        self.target
    }

    pub fn is_quiet(&self) -> bool {
        self.quiet.load(Ordering::Relaxed)
    }

    /// Takes effect on the next emitted message.
    pub fn set_quiet(&self, quiet: bool) {
        self.quiet.store(quiet, Ordering::Relaxed);
    }

    /// Prefixes the owner tag (and timestamp, if enabled) and indents
    /// continuation lines so they line up after the tag.
    ///
    /// The indent is one space per `char` of the owner, so wide or combining
    /// characters in the owner will not line up exactly.
    pub fn format(&self, message: &str) -> String {
        let timestamp = if self.include_timestamp {
            format!("[{}] ", Local::now().format(TIMESTAMP_FORMAT))
        } else {
            String::new()
        };

        let indent = " ".repeat(self.owner.chars().count() + 3);
        let message = message.replace('\n', &format!("\n{indent}"));

        format!("{timestamp}<{}> {message}", self.owner)
    }

    /// The exact line `emit` would print, without the trailing newline.
    /// `None` when the message is suppressed.
    pub fn render(&self, message: impl Display, level: Level) -> Option<String> {
        if self.is_suppressed(level) {
            return None;
        }

        let formatted = self.format(&message.to_string());

        Some(self.target.decorate(&formatted, level))
    }

    pub fn write_to<W: Write>(
        &self,
        writer: &mut W,
        message: impl Display,
        level: Level,
    ) -> io::Result<()> {
        match self.render(message, level) {
            Some(line) => writeln!(writer, "{line}"),
            None => Ok(()),
        }
    }

    pub fn emit(&self, message: impl Display, level: Level) {
        if let Some(line) = self.render(message, level) {
            #[cfg(test)]
            EMITTED.with(|emitted| emitted.borrow_mut().push(line.clone()));

            println!("{line}");
        }
    }

    fn is_suppressed(&self, level: Level) -> bool {
        self.is_quiet() || (self.production_mode && level == Level::Debug)
    }

    /// Same as [`Logger::info`]; the closest thing to calling the logger itself.
    pub fn call(&self, message: impl Display) {
        self.info(message);
    }

    pub fn debug(&self, message: impl Display) {
        self.emit(message, Level::Debug);
    }

    pub fn d(&self, message: impl Display) {
        self.debug(message);
    }

    pub fn success(&self, message: impl Display) {
        self.emit(message, Level::Success);
    }

    pub fn s(&self, message: impl Display) {
        self.success(message);
    }

    pub fn info(&self, message: impl Display) {
        self.emit(message, Level::Info);
    }

    pub fn information(&self, message: impl Display) {
        self.info(message);
    }

    pub fn i(&self, message: impl Display) {
        self.info(message);
    }

    pub fn warn(&self, message: impl Display) {
        self.emit(message, Level::Warn);
    }

    pub fn warning(&self, message: impl Display) {
        self.warn(message);
    }

    pub fn w(&self, message: impl Display) {
        self.warn(message);
    }

    pub fn severe(&self, message: impl Display) {
        self.emit(message, Level::Severe);
    }

    pub fn sv(&self, message: impl Display) {
        self.severe(message);
    }

    pub fn fatal(&self, message: impl Display) {
        self.emit(message, Level::Fatal);
    }

    pub fn f(&self, message: impl Display) {
        self.fatal(message);
    }
}

#[cfg(test)]
fn plain(owner: &str) -> Logger {
    Logger::with_options(
        owner,
        LoggerOptions::default().output_target(OutputTarget::PlainConsole),
    )
}

#[cfg(test)]
fn terminal(owner: &str) -> Logger {
    Logger::with_options(
        owner,
        LoggerOptions::default().output_target(OutputTarget::Terminal),
    )
}

/// Runs `f` and returns every line `emit` printed on this thread meanwhile.
#[cfg(test)]
fn emitted(f: impl FnOnce()) -> Vec<String> {
    EMITTED.with(|emitted| emitted.borrow_mut().clear());
    f();
    EMITTED.with(|emitted| emitted.borrow_mut().drain(..).collect())
}

#[test]
fn test_format() {
    let logger = plain("App");

    assert_eq!(logger.format("Hello"), "<App> Hello");
    assert_eq!(logger.format("Line1\nLine2"), "<App> Line1\n      Line2");
    assert_eq!(logger.format("a\n\nb"), "<App> a\n      \n      b");
    assert_eq!(logger.format(""), "<App> ");
    assert_eq!(logger.format("x"), logger.format("x"));
    assert_eq!(plain("").format("a\nb"), "<> a\n   b");
    assert_eq!(
        plain("Düsseldorf").format("a\nb"),
        format!("<Düsseldorf> a\n{}b", " ".repeat(13))
    );
}

#[test]
fn test_format_with_timestamp() {
    let logger = Logger::with_options(
        "App",
        LoggerOptions::default()
            .include_timestamp(true)
            .output_target(OutputTarget::PlainConsole),
    );
    let pattern =
        regex::Regex::new(r"^\[\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2}\.\d{6}\] <App> Hi\n {6}there$")
            .unwrap();

    assert!(pattern.is_match(&logger.format("Hi\nthere")));
}

#[test]
fn test_render_plain() {
    let logger = plain("App");

    for level in Level::ALL {
        let line = logger.render("Hello", level).unwrap();
        assert_eq!(line, "<App> Hello");
        assert!(!line.contains('\x1b'));
    }

    assert_eq!(logger.render(42, Level::Info).unwrap(), "<App> 42");
    assert_eq!(
        logger.render(format!("{:?}", None::<u8>), Level::Info).unwrap(),
        "<App> None"
    );
}

#[test]
fn test_render_terminal_colors() {
    let logger = terminal("App");

    let fatal = logger.render("x", Level::Fatal).unwrap();
    assert!(fatal.contains("<App> x"));
    assert!(fatal.starts_with(&Level::Fatal.style().prefix().to_string()));
    assert!(fatal.contains("31"));
    assert!(fatal.contains("43"));

    let debug = logger.render("x", Level::Debug).unwrap();
    assert!(debug.starts_with("\x1b[90m"));

    let info = logger.render("x", Level::Info).unwrap();
    assert!(info.starts_with("\x1b[36m"));
    assert!(info.ends_with("\x1b[0m"));
}

#[test]
fn test_quiet_mode() {
    let logger = Logger::with_options(
        "App",
        LoggerOptions::default()
            .quiet_mode(true)
            .output_target(OutputTarget::PlainConsole),
    );

    assert!(logger.is_quiet());
    assert!(Level::ALL.iter().all(|level| logger.render("x", *level).is_none()));

    let mut out = Vec::new();
    logger.write_to(&mut out, "x", Level::Fatal).unwrap();
    assert!(out.is_empty());

    logger.set_quiet(false);
    logger.write_to(&mut out, "x", Level::Fatal).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "<App> x\n");
}

#[test]
fn test_production_mode_drops_debug() {
    let logger = Logger::with_options(
        "App",
        LoggerOptions::default()
            .production_mode(true)
            .output_target(OutputTarget::PlainConsole),
    );

    assert!(logger.render("x", Level::Debug).is_none());
    assert!(logger.render("x", Level::Success).is_some());
    assert!(logger.render("x", Level::Fatal).is_some());
    assert!(plain("App").render("x", Level::Debug).is_some());
}

#[test]
fn test_write_to_propagates_errors() {
    struct Broken;

    impl Write for Broken {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    let error = plain("App").write_to(&mut Broken, "x", Level::Info).unwrap_err();
    assert_eq!(error.kind(), io::ErrorKind::BrokenPipe);
}

#[test]
fn test_defaults() {
    let logger = Logger::new("App");

    assert_eq!(logger.owner(), "App");
    assert!(!logger.is_quiet());
    assert!(!logger.production_mode());
    assert!(!logger.include_timestamp());
    assert_eq!(logger.output_target(), OutputTarget::detect());
}

#[test]
fn test_aliases_match_long_forms() {
    let logger = terminal("App");
    let long_forms = emitted(|| {
        logger.debug("x");
        logger.success("x");
        logger.info("x");
        logger.info("x");
        logger.warn("x");
        logger.warn("x");
        logger.severe("x");
        logger.fatal("x");
    });
    let aliases = emitted(|| {
        logger.d("x");
        logger.s("x");
        logger.i("x");
        logger.information("x");
        logger.w("x");
        logger.warning("x");
        logger.sv("x");
        logger.f("x");
    });

    assert_eq!(long_forms.len(), 8);
    assert_eq!(aliases, long_forms);
    assert_eq!(long_forms[0], logger.render("x", Level::Debug).unwrap());
    assert_eq!(long_forms[1], logger.render("x", Level::Success).unwrap());
    assert_eq!(long_forms[2], logger.render("x", Level::Info).unwrap());
    assert_eq!(long_forms[4], logger.render("x", Level::Warn).unwrap());
    assert_eq!(long_forms[6], logger.render("x", Level::Severe).unwrap());
    assert_eq!(long_forms[7], logger.render("x", Level::Fatal).unwrap());
}

#[test]
fn test_call_and_say_match_info() {
    let logger = terminal("App");
    let info = emitted(|| logger.info("port 8080"));
    let called = emitted(|| logger.call("port 8080"));
    let said = emitted(|| crate::say!(logger, "port {}", 8080));

    assert_eq!(info, vec![logger.render("port 8080", Level::Info).unwrap()]);
    assert_eq!(called, info);
    assert_eq!(said, info);
}

#[test]
fn test_quiet_emits_nothing() {
    let logger = terminal("App");
    logger.set_quiet(true);

    let lines = emitted(|| {
        logger.debug("x");
        logger.call("x");
        logger.fatal("x");
    });

    assert!(lines.is_empty());
}

#[test]
fn test_logger_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}

    assert_send_sync::<Logger>();
}
