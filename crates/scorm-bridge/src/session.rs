use std::sync::Arc;

use tokio::runtime::{Builder, Handle, Runtime};

use scorm_protocol::{GetValueRequest, SetValueEntry};
use scorm_types::{CmiElement, ScormVersion, WireValue};

use crate::cache::CmiCache;
use crate::config::BridgeConfig;
use crate::display::{round_grade, NullView, ProgressView};
use crate::error::BridgeResult;
use crate::queue::WriteQueue;
use crate::transport::LmsTransport;

/// Fixed acknowledgement string of the SCORM calling convention.
pub const SCORM_TRUE: &str = "true";

struct SessionInner {
    version: ScormVersion,
    cache: CmiCache,
    queue: WriteQueue,
    transport: Arc<dyn LmsTransport>,
    view: Arc<dyn ProgressView>,
    handle: Handle,
}

/// One SCORM attempt's bridge context: cache, write queue, drain state and
/// transport behind a single `Arc`, cheap to clone.
///
/// All methods follow the synchronous SCORM calling convention: reads and
/// writes return plain strings, never futures. A volatile read blocks the
/// calling thread for one round-trip, so methods must not be called from
/// inside the session's own async context.
#[derive(Clone)]
pub struct BridgeSession {
    inner: Arc<SessionInner>,
    // Keeps a session-owned runtime alive for as long as any clone exists.
    // Dropped on the caller's thread; in-flight work is abandoned with it.
    _runtime: Option<Arc<Runtime>>,
}

impl BridgeSession {
    /// Create a session with its own single-worker runtime for drains and
    /// blocking reads.
    pub fn connect(
        config: BridgeConfig,
        transport: Arc<dyn LmsTransport>,
    ) -> BridgeResult<Self> {
        Self::connect_with_view(config, transport, Arc::new(NullView))
    }

    /// Like [`connect`](Self::connect), with a display hook receiving grade
    /// and completion updates from drained batches.
    pub fn connect_with_view(
        config: BridgeConfig,
        transport: Arc<dyn LmsTransport>,
        view: Arc<dyn ProgressView>,
    ) -> BridgeResult<Self> {
        let runtime = Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("scorm-bridge")
            .enable_all()
            .build()?;
        let handle = runtime.handle().clone();
        Ok(Self::build(config, transport, view, handle, Some(Arc::new(runtime))))
    }

    /// Embed into an existing runtime instead of owning one.
    pub fn with_handle(
        config: BridgeConfig,
        transport: Arc<dyn LmsTransport>,
        view: Arc<dyn ProgressView>,
        handle: Handle,
    ) -> Self {
        Self::build(config, transport, view, handle, None)
    }

    fn build(
        config: BridgeConfig,
        transport: Arc<dyn LmsTransport>,
        view: Arc<dyn ProgressView>,
        handle: Handle,
        runtime: Option<Arc<Runtime>>,
    ) -> Self {
        Self {
            inner: Arc::new(SessionInner {
                version: config.version,
                cache: CmiCache::new(config.initial_data),
                queue: WriteQueue::new(),
                transport,
                view,
                handle,
            }),
            _runtime: runtime,
        }
    }

    pub fn version(&self) -> ScormVersion {
        self.inner.version
    }

    /// Resolve one element.
    ///
    /// Volatile elements always round-trip to the backend and return
    /// exactly the response value; everything else is served from the
    /// cache, and an element never written or seeded reads as the empty
    /// string rather than an error.
    pub fn get_value(&self, element: &CmiElement) -> BridgeResult<String> {
        if element.is_volatile() {
            let request = GetValueRequest {
                name: element.clone(),
            };
            let transport = Arc::clone(&self.inner.transport);
            let response = self
                .inner
                .handle
                .block_on(async move { transport.fetch_value(&request).await })?;
            return Ok(response.value.to_string());
        }
        Ok(self
            .inner
            .cache
            .get(element)
            .map(|value| value.to_string())
            .unwrap_or_default())
    }

    /// Queue one write and acknowledge immediately.
    ///
    /// Non-volatile elements hit the cache before this returns, so a
    /// subsequent [`get_value`](Self::get_value) observes the write without
    /// waiting for the wire. The entry itself goes out with the next
    /// drained batch; if no drain is running, one is started here.
    pub fn set_value(
        &self,
        element: impl Into<CmiElement>,
        value: impl Into<WireValue>,
    ) -> &'static str {
        let element = element.into();
        let value = value.into();
        if !element.is_volatile() {
            self.inner.cache.insert(element.clone(), value.clone());
        }
        self.inner.queue.push(SetValueEntry {
            name: element,
            value,
        });
        if self.inner.queue.begin_drain() {
            let inner = Arc::clone(&self.inner);
            self.inner.handle.spawn(drain(inner));
        }
        SCORM_TRUE
    }

    /// Version-aware score write.
    ///
    /// `max` and `min` are accepted for symmetry with the wider
    /// score-reporting convention but are not transmitted.
    pub fn set_score(&self, score: f64, _max: f64, _min: f64) -> &'static str {
        self.set_value(self.inner.version.score_element(), score)
    }

    /// Version-aware score read. The score element is volatile, so this
    /// always round-trips.
    pub fn get_score(&self) -> BridgeResult<String> {
        self.get_value(&self.inner.version.score_element())
    }

    /// Writes persist continuously through the drain loop; an explicit
    /// commit has nothing left to flush synchronously.
    pub fn commit_data(&self) -> &'static str {
        SCORM_TRUE
    }
}

/// The drain loop: one owner at a time, one batch request in flight.
///
/// Each cycle swaps the whole queue out, sends it as a single request, and
/// forwards any grade/completion results to the display hook. A failed
/// request is logged and dropped — no retry, no cache rollback — and the
/// loop moves on to whatever queued up in the meantime. Exit goes through
/// `WriteQueue::release`, which re-checks for writes that raced the
/// shutdown.
async fn drain(inner: Arc<SessionInner>) {
    loop {
        let batch = inner.queue.take_batch();
        if batch.is_empty() {
            if inner.queue.release() {
                continue;
            }
            return;
        }
        match inner.transport.submit_batch(&batch).await {
            Ok(results) => {
                for result in &results {
                    if let Some(grade) = result.grade {
                        inner.view.grade_updated(round_grade(grade));
                    }
                    if let Some(status) = &result.completion_status {
                        inner.view.completion_updated(status);
                    }
                }
            }
            Err(err) => {
                tracing::warn!("write batch of {} entries failed: {err}", batch.len());
            }
        }
    }
}
