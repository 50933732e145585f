/// Receives the page-facing side effects of a drained batch.
///
/// The backend's batch response can carry a recomputed grade and a new
/// completion status; the host wires this to whatever surface displays
/// them.
pub trait ProgressView: Send + Sync {
    /// A recomputed grade, already rounded for display.
    fn grade_updated(&self, grade: f64);

    /// A new completion status, forwarded verbatim.
    fn completion_updated(&self, status: &str);
}

/// Ignores everything. The default view for headless hosts.
pub struct NullView;

impl ProgressView for NullView {
    fn grade_updated(&self, _grade: f64) {}
    fn completion_updated(&self, _status: &str) {}
}

/// Round a grade to at most two decimals for display.
pub fn round_grade(grade: f64) -> f64 {
    (grade * 100.0).round() / 100.0
}
