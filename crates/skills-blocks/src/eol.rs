//! Line-ending detection

use std::fmt;

/// Line-ending convention of a text document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EndOfLineStyle {
    /// Windows-style `\r\n`
    Crlf,
    /// Unix-style `\n`
    #[default]
    Lf,
}

impl EndOfLineStyle {
    /// Detect the convention used by existing text.
    ///
    /// Any `\r\n` pair makes the whole document CRLF. Text without one,
    /// including the empty string, is LF.
    pub fn detect(text: &str) -> Self {
        if text.contains("\r\n") {
            Self::Crlf
        } else {
            Self::Lf
        }
    }

    /// The literal line break sequence.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Crlf => "\r\n",
            Self::Lf => "\n",
        }
    }
}

impl fmt::Display for EndOfLineStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Crlf => write!(f, "CRLF"),
            Self::Lf => write!(f, "LF"),
        }
    }
}
