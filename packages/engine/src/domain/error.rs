//! Error types for engine setup.
//!
//! Gameplay paths never fail: stray keys are ignored and missing images only
//! degrade visuals. The only fallible surface is configuration.

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum LetterfallError {
    /// Config JSON could not be parsed.
    ConfigParse(String),
    /// A config value is outside its accepted range.
    InvalidConfig { field: &'static str, reason: &'static str },
}

impl fmt::Display for LetterfallError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LetterfallError::ConfigParse(msg) => write!(f, "config parse error: {}", msg),
            LetterfallError::InvalidConfig { field, reason } => {
                write!(f, "invalid config field `{}`: {}", field, reason)
            }
        }
    }
}

impl std::error::Error for LetterfallError {}
