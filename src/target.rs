use std::io::IsTerminal;

use crate::level::Level;

/// Where formatted lines end up, and therefore whether they get colored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputTarget {
    /// ANSI-capable terminal.
    Terminal,
    /// Anything else: pipes, files, captured output.
    PlainConsole,
}

impl OutputTarget {
    /// Checks stdout once. Callers are expected to keep the result.
    pub fn detect() -> Self {
        if std::io::stdout().is_terminal() {
            OutputTarget::Terminal
        } else {
            OutputTarget::PlainConsole
        }
    }

    pub fn is_terminal(self) -> bool {
        self == OutputTarget::Terminal
    }

    /// Wraps an already formatted message for this target.
    pub fn decorate(self, formatted: &str, level: Level) -> String {
        match self {
            OutputTarget::Terminal => level.style().paint(formatted).to_string(),
            OutputTarget::PlainConsole => formatted.to_string(),
        }
    }
}

#[test]
fn test_plain_console_is_untouched() {
    for level in Level::ALL {
        assert_eq!(
            OutputTarget::PlainConsole.decorate("<App> hi", level),
            "<App> hi"
        );
    }
}

#[test]
fn test_terminal_wraps_in_level_style() {
    let decorated = OutputTarget::Terminal.decorate("<App> hi", Level::Warn);
    let style = Level::Warn.style();

    assert!(decorated.starts_with(&style.prefix().to_string()));
    assert!(decorated.ends_with(&style.suffix().to_string()));
    assert!(decorated.contains("<App> hi"));
}

#[test]
fn test_is_terminal() {
    assert!(OutputTarget::Terminal.is_terminal());
    assert!(!OutputTarget::PlainConsole.is_terminal());
}
