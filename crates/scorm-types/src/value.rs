use std::fmt;

use serde::{Deserialize, Serialize};

/// A CMI value as it travels on the wire.
///
/// SCORM carries all values as strings, but the tracker answers score reads
/// with JSON numbers and the score shortcut submits them the same way. The
/// untagged representation round-trips both without loss.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WireValue {
    Text(String),
    Number(f64),
}

impl WireValue {
    /// The empty string, the fallback for unknown elements.
    pub fn empty() -> Self {
        Self::Text(String::new())
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Number(_) => None,
        }
    }

    /// Numeric reading: numbers directly, text through a parse.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(s) => s.trim().parse().ok(),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Text(s) if s.is_empty())
    }
}

impl Default for WireValue {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Display for WireValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Number(n) => write!(f, "{n}"),
        }
    }
}

impl From<&str> for WireValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for WireValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<f64> for WireValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}
