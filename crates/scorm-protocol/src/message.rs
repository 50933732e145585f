use serde::{Deserialize, Serialize};

use scorm_types::{CmiElement, WireValue};

pub const PROTOCOL_VERSION: u32 = 1;

/// Read endpoint request: one element, answered synchronously.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GetValueRequest {
    pub name: CmiElement,
}

impl GetValueRequest {
    pub fn new(name: impl Into<CmiElement>) -> Self {
        Self { name: name.into() }
    }
}

/// Read endpoint response.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GetValueResponse {
    pub value: WireValue,
}

impl GetValueResponse {
    pub fn new(value: impl Into<WireValue>) -> Self {
        Self { value: value.into() }
    }
}

/// One pending write as it appears in a batch.
///
/// A write batch is a plain JSON array of these; order within the batch is
/// submission order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SetValueEntry {
    pub name: CmiElement,
    pub value: WireValue,
}

impl SetValueEntry {
    pub fn new(name: impl Into<CmiElement>, value: impl Into<WireValue>) -> Self {
        Self { name: name.into(), value: value.into() }
    }
}

/// Per-entry result in a write batch response.
///
/// `grade` and `completion_status` are present only when the corresponding
/// state was recomputed by that entry; absent fields are omitted from the
/// JSON entirely.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SetValueResult {
    pub result: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grade: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completion_status: Option<String>,
}

impl SetValueResult {
    pub fn success() -> Self {
        Self {
            result: "success".into(),
            grade: None,
            completion_status: None,
        }
    }

    pub fn with_grade(mut self, grade: f64) -> Self {
        self.grade = Some(grade);
        self
    }

    pub fn with_completion_status(mut self, status: impl Into<String>) -> Self {
        self.completion_status = Some(status.into());
        self
    }
}
