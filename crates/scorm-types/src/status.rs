//! Lesson status vocabulary.
//!
//! SCORM 1.2 carries a single `cmi.core.lesson_status`; SCORM 2004 splits
//! status into completion (`completed`/`incomplete`) and success
//! (`passed`/`failed`). The tracker denormalizes 1.2 statuses into the two
//! 2004 dimensions.

pub const PASSED: &str = "passed";
pub const FAILED: &str = "failed";
pub const COMPLETED: &str = "completed";
pub const INCOMPLETE: &str = "incomplete";
pub const BROWSED: &str = "browsed";
pub const NOT_ATTEMPTED: &str = "not attempted";
pub const UNKNOWN: &str = "unknown";
