//! Error types for parsing persisted preferences and colour strings.
//!
//! None of these ever reach the user: callers fall back to defaults and log.

use std::fmt;
use std::num::{ParseFloatError, ParseIntError};

/// Errors produced when parsing textual configuration values.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
	/// Theme name was not one of the known themes.
	UnknownTheme(String),
	/// Brightness was not an integer.
	Brightness(ParseIntError),
	/// Colour string did not have exactly three comma-separated channels.
	ChannelCount(usize),
	/// A colour channel was not numeric.
	Channel(ParseFloatError),
}

impl fmt::Display for ParseError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			ParseError::UnknownTheme(name) => write!(f, "unknown theme '{}'", name),
			ParseError::Brightness(e) => write!(f, "invalid brightness: {}", e),
			ParseError::ChannelCount(n) => {
				write!(f, "expected 3 colour channels, found {}", n)
			}
			ParseError::Channel(e) => write!(f, "invalid colour channel: {}", e),
		}
	}
}

impl std::error::Error for ParseError {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self {
			ParseError::Brightness(e) => Some(e),
			ParseError::Channel(e) => Some(e),
			_ => None,
		}
	}
}

impl From<ParseIntError> for ParseError {
	fn from(e: ParseIntError) -> Self {
		ParseError::Brightness(e)
	}
}

impl From<ParseFloatError> for ParseError {
	fn from(e: ParseFloatError) -> Self {
		ParseError::Channel(e)
	}
}
