use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::element::{elements, CmiElement};
use crate::error::TypeError;

/// SCORM runtime version, fixed for the lifetime of one session.
///
/// Selects which API shape the hosting page sees and which element name
/// means "raw score".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScormVersion {
    #[default]
    #[serde(rename = "SCORM_12")]
    Scorm12,
    #[serde(rename = "SCORM_2004")]
    Scorm2004,
}

impl ScormVersion {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Scorm12 => "SCORM_12",
            Self::Scorm2004 => "SCORM_2004",
        }
    }

    /// The version-dependent alias for the raw score element.
    pub fn score_element(&self) -> CmiElement {
        match self {
            Self::Scorm12 => CmiElement::from(elements::SCORE_RAW_12),
            Self::Scorm2004 => CmiElement::from(elements::SCORE_RAW_2004),
        }
    }

    /// Name of the global API object the hosted package looks up.
    pub fn api_object_name(&self) -> &'static str {
        match self {
            Self::Scorm12 => "API",
            Self::Scorm2004 => "API_1484_11",
        }
    }
}

impl fmt::Display for ScormVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScormVersion {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SCORM_12" => Ok(Self::Scorm12),
            "SCORM_2004" => Ok(Self::Scorm2004),
            other => Err(TypeError::UnknownVersion(other.to_string())),
        }
    }
}
