//! Block parse error types

use thiserror::Error;

/// Why a fenced block could not become a widget
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub message: String,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        Self::new(ParseErrorKind::Malformed, message)
    }

    pub fn unknown_kind(message: impl Into<String>) -> Self {
        Self::new(ParseErrorKind::UnknownKind, message)
    }

    pub fn invalid_payload(message: impl Into<String>) -> Self {
        Self::new(ParseErrorKind::InvalidPayload, message)
    }
}

/// Error classification; every kind degrades the block to plain text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Inner text is not valid JSON
    Malformed,
    /// JSON parsed but `type` is missing or not a known widget
    UnknownKind,
    /// Known widget, but required fields are missing or mistyped
    InvalidPayload,
}

impl ParseErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Malformed => "malformed",
            Self::UnknownKind => "unknown_kind",
            Self::InvalidPayload => "invalid_payload",
        }
    }
}

impl std::fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
