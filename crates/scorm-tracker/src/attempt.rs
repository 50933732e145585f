use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use scorm_protocol::{SetValueEntry, SetValueResult};
use scorm_types::{elements, status, CmiElement, WireValue};

use crate::error::{TrackerError, TrackerResult};
use crate::events::{NullSink, ProgressSink};

/// Persisted per-attempt learner state.
///
/// SCORM 1.2's single `lesson_status` is denormalized into the two 2004
/// dimensions: `lesson_status` holds the completion side, `success_status`
/// the passed/failed side.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AttemptState {
    #[serde(default = "default_lesson_status")]
    pub lesson_status: String,

    #[serde(default = "default_success_status")]
    pub success_status: String,

    /// Raw score scaled to the 0..=1 range.
    #[serde(default)]
    pub lesson_score: f64,

    /// Weight / maximum grade.
    #[serde(default = "default_weight")]
    pub weight: f64,

    /// Whether this attempt receives a numerical score at all.
    #[serde(default = "default_has_score")]
    pub has_score: bool,

    /// Everything the package stores that the tracker does not interpret.
    #[serde(default)]
    pub cmi_data: BTreeMap<CmiElement, WireValue>,
}

fn default_lesson_status() -> String {
    status::NOT_ATTEMPTED.to_string()
}

fn default_success_status() -> String {
    status::UNKNOWN.to_string()
}

fn default_weight() -> f64 {
    1.0
}

fn default_has_score() -> bool {
    true
}

impl Default for AttemptState {
    fn default() -> Self {
        Self {
            lesson_status: default_lesson_status(),
            success_status: default_success_status(),
            lesson_score: 0.0,
            weight: default_weight(),
            has_score: default_has_score(),
            cmi_data: BTreeMap::new(),
        }
    }
}

/// Applies CMI reads and writes to one attempt's state and publishes
/// completion/grade events when an entry finishes the attempt.
pub struct AttemptTracker {
    state: AttemptState,
    sink: Arc<dyn ProgressSink>,
}

impl AttemptTracker {
    pub fn new() -> Self {
        Self::from_state(AttemptState::default())
    }

    pub fn from_state(state: AttemptState) -> Self {
        Self {
            state,
            sink: Arc::new(NullSink),
        }
    }

    pub fn with_sink(state: AttemptState, sink: Arc<dyn ProgressSink>) -> Self {
        Self { state, sink }
    }

    pub fn state(&self) -> &AttemptState {
        &self.state
    }

    /// Resolve one element the way the read endpoint answers it.
    ///
    /// Both lesson-status aliases reflect the denormalized completion
    /// dimension; score aliases report the raw score rescaled to 0..=100.
    /// Unknown elements read as the empty string.
    pub fn get_value(&self, name: &CmiElement) -> WireValue {
        match name.as_str() {
            elements::LESSON_STATUS | elements::COMPLETION_STATUS => {
                WireValue::from(self.state.lesson_status.clone())
            }
            elements::SUCCESS_STATUS => WireValue::from(self.state.success_status.clone()),
            elements::SCORE_RAW_12 | elements::SCORE_RAW_2004 => {
                WireValue::from(self.state.lesson_score * 100.0)
            }
            _ => self
                .state
                .cmi_data
                .get(name)
                .cloned()
                .unwrap_or_else(WireValue::empty),
        }
    }

    /// Apply one write. The result echoes a recomputed grade when the
    /// entry changed the score, and the new completion status when the
    /// entry changed it.
    pub fn set_value(&mut self, entry: &SetValueEntry) -> TrackerResult<SetValueResult> {
        let mut success_status: Option<String> = None;
        let mut completion_status: Option<String> = None;
        let mut lesson_score: Option<f64> = None;

        match entry.name.as_str() {
            elements::LESSON_STATUS => {
                if let Some(value) = entry.value.as_text() {
                    match value {
                        status::PASSED | status::FAILED => {
                            success_status = Some(value.to_string());
                        }
                        status::COMPLETED | status::INCOMPLETE => {
                            completion_status = Some(value.to_string());
                        }
                        // "browsed", "not attempted" and anything else
                        // leave both dimensions untouched.
                        _ => {}
                    }
                }
            }
            elements::SUCCESS_STATUS => {
                if let Some(value) = entry.value.as_text() {
                    success_status = Some(value.to_string());
                }
            }
            elements::COMPLETION_STATUS => {
                if let Some(value) = entry.value.as_text() {
                    completion_status = Some(value.to_string());
                }
            }
            elements::SCORE_RAW_12 | elements::SCORE_RAW_2004 if self.state.has_score => {
                let raw = entry.value.as_f64().ok_or_else(|| TrackerError::InvalidNumeric {
                    element: entry.name.to_string(),
                    value: entry.value.to_string(),
                })?;
                lesson_score = Some(raw / 100.0);
            }
            elements::PROGRESS_MEASURE => {
                // Tolerated but unused: completion only moves on an
                // explicit status write.
                let _ = entry.value.as_f64();
            }
            // Score writes on an unscored attempt fall through here too.
            _ => {
                self.state
                    .cmi_data
                    .insert(entry.name.clone(), entry.value.clone());
            }
        }

        let mut result = SetValueResult::success();
        if let Some(score) = lesson_score {
            self.state.lesson_score = score;
            result.grade = Some(self.grade());
        }
        if let Some(completion) = completion_status.clone() {
            self.state.lesson_status = completion.clone();
            result.completion_status = Some(completion);
        }
        if let Some(success) = success_status.clone() {
            self.state.success_status = success;
        }
        if success_status.as_deref() == Some(status::PASSED)
            || completion_status.as_deref() == Some(status::COMPLETED)
        {
            self.publish_completion();
            if self.state.has_score {
                self.publish_grade();
            }
        }
        Ok(result)
    }

    /// Apply an ordered batch; results come back in the same order.
    pub fn set_values(&mut self, entries: &[SetValueEntry]) -> TrackerResult<Vec<SetValueResult>> {
        entries.iter().map(|entry| self.set_value(entry)).collect()
    }

    /// Current grade.
    ///
    /// A failed attempt's score reads as zero, and a zero score is floored
    /// to a full score before weighting: packages that report completion
    /// before their score must still register a grade.
    pub fn grade(&self) -> f64 {
        let mut score = if self.is_failed() {
            0.0
        } else {
            self.state.lesson_score
        };
        if score == 0.0 {
            score = 1.0;
        }
        score * self.state.weight
    }

    pub fn is_failed(&self) -> bool {
        self.state.success_status == status::FAILED
    }

    /// Maximum grade, or `None` when the attempt is unscored.
    pub fn max_score(&self) -> Option<f64> {
        self.state.has_score.then_some(self.state.weight)
    }

    /// Rescoring hook: map an externally earned raw grade back onto the
    /// 0..=1 score scale.
    pub fn rescore(&mut self, raw_earned: f64) {
        self.state.lesson_score = raw_earned / self.state.weight;
    }

    fn publish_completion(&self) {
        self.sink.completion(1.0);
    }

    fn publish_grade(&self) {
        self.sink.grade(self.grade(), self.state.weight);
    }
}

impl Default for AttemptTracker {
    fn default() -> Self {
        Self::new()
    }
}
