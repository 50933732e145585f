//! Attempt-state tracker for the SCORM runtime bridge.
//!
//! The backend half of the wire contract: holds one learner attempt's CMI
//! state, applies write batches element by element, denormalizes SCORM 1.2
//! and 2004 status vocabulary into completion/success dimensions, and
//! computes the weighted grade that the bridge displays.

pub mod attempt;
pub mod error;
pub mod events;

pub use attempt::{AttemptState, AttemptTracker};
pub use error::{TrackerError, TrackerResult};
pub use events::{NullSink, ProgressEvent, ProgressSink, RecordingSink};
