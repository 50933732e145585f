//! The SCORM runtime bridge core.
//!
//! Maps SCORM's synchronous get/set contract onto an asynchronous batched
//! wire protocol: a local CMI cache answers read-mostly elements, a
//! blocking read path keeps the volatile ones authoritative, and a FIFO
//! write queue is drained one batch at a time by a background task.
//!
//! A [`BridgeSession`] is created once per attempt from host-supplied
//! configuration; [`RuntimeApi`] wraps it in whichever API object shape the
//! hosted package expects.

pub mod api;
pub mod cache;
pub mod config;
pub mod display;
pub mod error;
pub mod queue;
pub mod session;
pub mod transport;

pub use api::{RuntimeApi, Scorm12Api, Scorm2004Api, DIAGNOSTIC, ERROR_STRING, NO_ERROR};
pub use config::{BridgeConfig, TransportConfig};
pub use display::{round_grade, NullView, ProgressView};
pub use error::{BridgeError, BridgeResult};
pub use session::{BridgeSession, SCORM_TRUE};
pub use transport::{HttpTransport, LmsTransport, MemoryTransport};
