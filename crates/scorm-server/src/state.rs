use std::sync::{Arc, Mutex};

use scorm_tracker::AttemptTracker;

/// Shared handler state: one attempt tracker behind a mutex.
#[derive(Clone)]
pub struct AppState {
    tracker: Arc<Mutex<AttemptTracker>>,
}

impl AppState {
    pub fn new(tracker: AttemptTracker) -> Self {
        Self {
            tracker: Arc::new(Mutex::new(tracker)),
        }
    }

    /// Run `f` with the tracker locked.
    pub fn with_tracker<T>(&self, f: impl FnOnce(&mut AttemptTracker) -> T) -> T {
        f(&mut self.tracker.lock().expect("lock poisoned"))
    }
}
