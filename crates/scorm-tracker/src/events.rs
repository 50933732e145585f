use std::sync::Mutex;

/// Receives attempt-level progress publications — the tracker-side mirror
/// of the host runtime's completion and grade channels.
pub trait ProgressSink: Send + Sync {
    fn completion(&self, percent: f64);
    fn grade(&self, value: f64, max_value: f64);
}

/// Discards all publications.
pub struct NullSink;

impl ProgressSink for NullSink {
    fn completion(&self, _percent: f64) {}
    fn grade(&self, _value: f64, _max_value: f64) {}
}

/// One published progress event.
#[derive(Clone, Debug, PartialEq)]
pub enum ProgressEvent {
    Completion { percent: f64 },
    Grade { value: f64, max_value: f64 },
}

/// Records publications in arrival order. Intended for tests and embedding.
#[derive(Default)]
pub struct RecordingSink {
    events: Mutex<Vec<ProgressEvent>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<ProgressEvent> {
        self.events.lock().expect("lock poisoned").clone()
    }
}

impl ProgressSink for RecordingSink {
    fn completion(&self, percent: f64) {
        self.events
            .lock()
            .expect("lock poisoned")
            .push(ProgressEvent::Completion { percent });
    }

    fn grade(&self, value: f64, max_value: f64) {
        self.events
            .lock()
            .expect("lock poisoned")
            .push(ProgressEvent::Grade { value, max_value });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_sink_keeps_order() {
        let sink = RecordingSink::new();
        sink.completion(1.0);
        sink.grade(0.85, 1.0);
        assert_eq!(
            sink.events(),
            vec![
                ProgressEvent::Completion { percent: 1.0 },
                ProgressEvent::Grade { value: 0.85, max_value: 1.0 },
            ]
        );
    }

    #[test]
    fn null_sink_discards() {
        let sink = NullSink;
        sink.completion(1.0);
        sink.grade(1.0, 1.0);
    }
}
