use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Condvar, Mutex};
use std::time::{Duration, Instant};

use async_trait::async_trait;

use scorm_protocol::{GetValueRequest, GetValueResponse, SetValueEntry, SetValueResult};
use scorm_types::{CmiElement, WireValue};

use crate::config::TransportConfig;
use crate::error::BridgeResult;

/// Transport seam between the bridge and the progress-tracking backend.
///
/// The bridge never constructs URLs or speaks HTTP itself; everything it
/// needs from the backend goes through this interface.
#[async_trait]
pub trait LmsTransport: Send + Sync {
    /// Fetch the authoritative value of one element.
    async fn fetch_value(&self, request: &GetValueRequest) -> BridgeResult<GetValueResponse>;

    /// Submit one ordered write batch. The response carries one result per
    /// applied entry, in the order the backend applied them.
    async fn submit_batch(&self, batch: &[SetValueEntry]) -> BridgeResult<Vec<SetValueResult>>;
}

/// JSON-over-HTTP transport against the two resolved handler URLs.
pub struct HttpTransport {
    client: reqwest::Client,
    config: TransportConfig,
}

impl HttpTransport {
    pub fn new(config: TransportConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Use a preconfigured client (timeouts, proxies, default headers).
    pub fn with_client(client: reqwest::Client, config: TransportConfig) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &TransportConfig {
        &self.config
    }
}

#[async_trait]
impl LmsTransport for HttpTransport {
    async fn fetch_value(&self, request: &GetValueRequest) -> BridgeResult<GetValueResponse> {
        let response = self
            .client
            .post(&self.config.get_value_url)
            .json(request)
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }

    async fn submit_batch(&self, batch: &[SetValueEntry]) -> BridgeResult<Vec<SetValueResult>> {
        let response = self
            .client
            .post(&self.config.set_values_url)
            .json(&batch)
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }
}

/// In-memory transport backed by a plain element map.
///
/// Intended for tests and embedding. Reads are served from the map; write
/// batches are applied to it and recorded in arrival order. A configurable
/// latency holds each flush open, and the `wait_for_*` methods let a
/// synchronous caller line up with the asynchronous drain.
pub struct MemoryTransport {
    values: Mutex<BTreeMap<CmiElement, WireValue>>,
    batches: Mutex<Vec<Vec<SetValueEntry>>>,
    batch_arrived: Condvar,
    latency: Option<Duration>,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

impl MemoryTransport {
    pub fn new() -> Self {
        Self {
            values: Mutex::new(BTreeMap::new()),
            batches: Mutex::new(Vec::new()),
            batch_arrived: Condvar::new(),
            latency: None,
            in_flight: AtomicUsize::new(0),
            max_in_flight: AtomicUsize::new(0),
        }
    }

    /// Hold every batch submission open for `latency` before applying it.
    pub fn with_latency(latency: Duration) -> Self {
        Self {
            latency: Some(latency),
            ..Self::new()
        }
    }

    /// Preload a backend-side value.
    pub fn set(&self, element: impl Into<CmiElement>, value: impl Into<WireValue>) {
        self.values
            .lock()
            .expect("lock poisoned")
            .insert(element.into(), value.into());
    }

    pub fn value_of(&self, element: &CmiElement) -> Option<WireValue> {
        self.values
            .lock()
            .expect("lock poisoned")
            .get(element)
            .cloned()
    }

    /// All batches received so far, in arrival order.
    pub fn batches(&self) -> Vec<Vec<SetValueEntry>> {
        self.batches.lock().expect("lock poisoned").clone()
    }

    /// Batch submissions currently being processed.
    pub fn in_flight(&self) -> usize {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Highest number of concurrently in-flight batch submissions observed.
    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::Acquire)
    }

    /// Block until at least `count` batches have arrived.
    pub fn wait_for_batches(&self, count: usize, timeout: Duration) -> bool {
        self.wait_until(timeout, |batches| batches.len() >= count)
    }

    /// Block until the entries across all batches total at least `count`.
    pub fn wait_for_entries(&self, count: usize, timeout: Duration) -> bool {
        self.wait_until(timeout, |batches| {
            batches.iter().map(Vec::len).sum::<usize>() >= count
        })
    }

    fn wait_until(
        &self,
        timeout: Duration,
        done: impl Fn(&Vec<Vec<SetValueEntry>>) -> bool,
    ) -> bool {
        let deadline = Instant::now() + timeout;
        let mut batches = self.batches.lock().expect("lock poisoned");
        while !done(&batches) {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                return false;
            }
            let (guard, _result) = self
                .batch_arrived
                .wait_timeout(batches, remaining)
                .expect("lock poisoned");
            batches = guard;
        }
        true
    }
}

impl Default for MemoryTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LmsTransport for MemoryTransport {
    async fn fetch_value(&self, request: &GetValueRequest) -> BridgeResult<GetValueResponse> {
        let value = self
            .value_of(&request.name)
            .unwrap_or_else(WireValue::empty);
        Ok(GetValueResponse { value })
    }

    async fn submit_batch(&self, batch: &[SetValueEntry]) -> BridgeResult<Vec<SetValueResult>> {
        let in_flight = self.in_flight.fetch_add(1, Ordering::AcqRel) + 1;
        self.max_in_flight.fetch_max(in_flight, Ordering::AcqRel);

        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }

        {
            let mut values = self.values.lock().expect("lock poisoned");
            for entry in batch {
                values.insert(entry.name.clone(), entry.value.clone());
            }
        }
        let results = batch.iter().map(|_| SetValueResult::success()).collect();
        self.batches
            .lock()
            .expect("lock poisoned")
            .push(batch.to_vec());
        self.batch_arrived.notify_all();

        self.in_flight.fetch_sub(1, Ordering::AcqRel);
        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn memory_transport_serves_preloaded_values() {
        let transport = MemoryTransport::new();
        transport.set("cmi.core.lesson_status", "completed");
        let response = transport
            .fetch_value(&GetValueRequest::new("cmi.core.lesson_status"))
            .await
            .unwrap();
        assert_eq!(response.value, WireValue::from("completed"));
    }

    #[tokio::test]
    async fn memory_transport_reads_unknown_as_empty() {
        let transport = MemoryTransport::new();
        let response = transport
            .fetch_value(&GetValueRequest::new("cmi.nonexistent"))
            .await
            .unwrap();
        assert!(response.value.is_empty());
    }

    #[tokio::test]
    async fn memory_transport_applies_and_records_batches() {
        let transport = MemoryTransport::new();
        let batch = vec![
            SetValueEntry::new("cmi.core.exit", "suspend"),
            SetValueEntry::new("cmi.core.score.raw", 85.0),
        ];
        let results = transport.submit_batch(&batch).await.unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(
            transport.value_of(&CmiElement::from("cmi.core.exit")),
            Some(WireValue::from("suspend"))
        );
        assert_eq!(transport.batches(), vec![batch]);
    }

    #[tokio::test]
    async fn wait_for_batches_sees_arrivals() {
        let transport = MemoryTransport::new();
        transport
            .submit_batch(&[SetValueEntry::new("cmi.core.exit", "")])
            .await
            .unwrap();
        assert!(transport.wait_for_batches(1, Duration::from_millis(10)));
        assert!(!transport.wait_for_batches(2, Duration::from_millis(10)));
    }
}
