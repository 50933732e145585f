use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use scorm_protocol::SetValueEntry;

/// FIFO buffer of pending writes plus the single drain-ownership flag.
///
/// Writes are appended in submission order and removed wholesale: each
/// drain cycle swaps the entire buffer out as one batch, so a key written
/// twice produces two entries and both go on the wire. At most one caller
/// owns the drain flag at a time, which is what keeps at most one batch
/// request in flight.
pub struct WriteQueue {
    pending: Mutex<Vec<SetValueEntry>>,
    draining: AtomicBool,
}

impl WriteQueue {
    pub fn new() -> Self {
        Self {
            pending: Mutex::new(Vec::new()),
            draining: AtomicBool::new(false),
        }
    }

    /// Append one write. Returns the queue length after the push.
    pub fn push(&self, entry: SetValueEntry) -> usize {
        let mut pending = self.pending.lock().expect("lock poisoned");
        pending.push(entry);
        pending.len()
    }

    /// Try to take ownership of the drain. Succeeds for exactly one caller
    /// until ownership is given back through [`release`](Self::release).
    pub fn begin_drain(&self) -> bool {
        self.draining
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    /// Swap the whole buffer out as one batch. Entries pushed after the
    /// swap belong to a later batch.
    pub fn take_batch(&self) -> Vec<SetValueEntry> {
        std::mem::take(&mut *self.pending.lock().expect("lock poisoned"))
    }

    /// Give drain ownership back, then re-check for writes that raced in
    /// between the last swap and the release. Returns `true` when the
    /// caller has re-won ownership and must keep draining.
    pub fn release(&self) -> bool {
        self.draining.store(false, Ordering::Release);
        if self.pending.lock().expect("lock poisoned").is_empty() {
            return false;
        }
        // A push that lost the flag race leaves its entry behind; whoever
        // wins this CAS picks it up.
        self.begin_drain()
    }

    pub fn is_draining(&self) -> bool {
        self.draining.load(Ordering::Acquire)
    }

    pub fn pending_len(&self) -> usize {
        self.pending.lock().expect("lock poisoned").len()
    }
}

impl Default for WriteQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, value: &str) -> SetValueEntry {
        SetValueEntry::new(name, value)
    }

    #[test]
    fn take_batch_preserves_fifo_order() {
        let queue = WriteQueue::new();
        queue.push(entry("cmi.core.lesson_location", "1"));
        queue.push(entry("cmi.suspend_data", "blob"));
        queue.push(entry("cmi.core.lesson_location", "2"));
        let batch = queue.take_batch();
        assert_eq!(batch.len(), 3);
        assert_eq!(batch[0].value, "1".into());
        assert_eq!(batch[1].name.as_str(), "cmi.suspend_data");
        assert_eq!(batch[2].value, "2".into());
    }

    #[test]
    fn duplicate_keys_are_not_coalesced() {
        let queue = WriteQueue::new();
        queue.push(entry("cmi.core.exit", "a"));
        queue.push(entry("cmi.core.exit", "b"));
        assert_eq!(queue.take_batch().len(), 2);
    }

    #[test]
    fn take_batch_empties_the_queue() {
        let queue = WriteQueue::new();
        queue.push(entry("cmi.core.exit", "suspend"));
        assert_eq!(queue.take_batch().len(), 1);
        assert!(queue.take_batch().is_empty());
        assert_eq!(queue.pending_len(), 0);
    }

    #[test]
    fn drain_ownership_is_exclusive() {
        let queue = WriteQueue::new();
        assert!(queue.begin_drain());
        assert!(!queue.begin_drain());
        assert!(queue.is_draining());
    }

    #[test]
    fn release_with_empty_queue_exits() {
        let queue = WriteQueue::new();
        assert!(queue.begin_drain());
        assert!(!queue.release());
        assert!(!queue.is_draining());
    }

    #[test]
    fn release_resumes_when_writes_raced_in() {
        let queue = WriteQueue::new();
        assert!(queue.begin_drain());
        assert!(queue.take_batch().is_empty());
        queue.push(entry("cmi.core.exit", "suspend"));
        // The racing push is still pending, so the releasing drain re-wins
        // ownership instead of stranding it.
        assert!(queue.release());
        assert!(queue.is_draining());
        assert_eq!(queue.take_batch().len(), 1);
    }
}
