use nu_ansi_term::{Color, Style};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Severity of a message. Only affects rendering on a terminal, plus `Debug`
/// being dropped in production mode.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    Debug,
    Success,
    #[default]
    Info,
    Warn,
    Severe,
    Fatal,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown log level: {0:?}")]
pub struct ParseLevelError(pub String);

impl Level {
    pub const ALL: [Level; 6] = [
        Level::Debug,
        Level::Success,
        Level::Info,
        Level::Warn,
        Level::Severe,
        Level::Fatal,
    ];

    /// The terminal style used for this level.
    pub fn style(self) -> Style {
        match self {
            Level::Debug => Style::new().fg(Color::DarkGray),
            Level::Success => Style::new().fg(Color::Green),
            Level::Info => Style::new().fg(Color::Cyan),
            Level::Warn => Style::new().fg(Color::Yellow),
            Level::Severe => Style::new().fg(Color::Red),
            Level::Fatal => Style::new().fg(Color::Red).on(Color::Yellow),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Level::Debug => "debug",
            Level::Success => "success",
            Level::Info => "info",
            Level::Warn => "warn",
            Level::Severe => "severe",
            Level::Fatal => "fatal",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "debug" | "d" => Ok(Level::Debug),
            "success" | "s" => Ok(Level::Success),
            "info" | "information" | "i" => Ok(Level::Info),
            "warn" | "warning" | "w" => Ok(Level::Warn),
            "severe" | "sv" => Ok(Level::Severe),
            "fatal" | "f" => Ok(Level::Fatal),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}

#[test]
fn test_level_styles() {
    assert_eq!(Level::Debug.style().foreground, Some(Color::DarkGray));
    assert_eq!(Level::Success.style().foreground, Some(Color::Green));
    assert_eq!(Level::Info.style().foreground, Some(Color::Cyan));
    assert_eq!(Level::Warn.style().foreground, Some(Color::Yellow));
    assert_eq!(Level::Severe.style().foreground, Some(Color::Red));
    assert_eq!(Level::Severe.style().background, None);
    assert_eq!(Level::Fatal.style().foreground, Some(Color::Red));
    assert_eq!(Level::Fatal.style().background, Some(Color::Yellow));
    assert!(Level::ALL.iter().all(|level| !level.style().is_plain()));
}

#[test]
fn test_level_from_str() {
    assert_eq!("debug".parse(), Ok(Level::Debug));
    assert_eq!("D".parse(), Ok(Level::Debug));
    assert_eq!("information".parse(), Ok(Level::Info));
    assert_eq!(" Warning ".parse(), Ok(Level::Warn));
    assert_eq!("sv".parse(), Ok(Level::Severe));
    assert_eq!("f".parse(), Ok(Level::Fatal));
    assert_eq!(
        "loud".parse::<Level>(),
        Err(ParseLevelError("loud".to_string()))
    );

    for level in Level::ALL {
        assert_eq!(level.to_string().parse(), Ok(level));
    }
}

#[test]
fn test_level_order() {
    assert!(Level::Debug < Level::Info);
    assert!(Level::Severe < Level::Fatal);
    assert_eq!(Level::default(), Level::Info);
}
