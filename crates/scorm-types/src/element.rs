use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Well-known CMI element names used by the bridge and the tracker.
pub mod elements {
    pub const LESSON_STATUS: &str = "cmi.core.lesson_status";
    pub const COMPLETION_STATUS: &str = "cmi.completion_status";
    pub const SUCCESS_STATUS: &str = "cmi.success_status";
    pub const SCORE_RAW_12: &str = "cmi.core.score.raw";
    pub const SCORE_RAW_2004: &str = "cmi.score.raw";
    pub const PROGRESS_MEASURE: &str = "cmi.progress_measure";
}

/// Elements whose authoritative value can change server-side (status
/// denormalization, grading policy), so reads must bypass the local cache.
pub const VOLATILE_ELEMENTS: [&str; 5] = [
    elements::LESSON_STATUS,
    elements::COMPLETION_STATUS,
    elements::SUCCESS_STATUS,
    elements::SCORE_RAW_12,
    elements::SCORE_RAW_2004,
];

/// A dot-namespaced CMI data model key, e.g. `cmi.core.lesson_status`.
///
/// Opaque identifier: the bridge never parses a key's internal structure,
/// and unknown keys are tolerated everywhere.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CmiElement(String);

impl CmiElement {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// Whether reads of this element must bypass any local cache.
    pub fn is_volatile(&self) -> bool {
        VOLATILE_ELEMENTS.contains(&self.0.as_str())
    }
}

impl fmt::Display for CmiElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CmiElement {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl From<String> for CmiElement {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl Borrow<str> for CmiElement {
    fn borrow(&self) -> &str {
        &self.0
    }
}
