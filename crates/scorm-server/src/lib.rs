//! HTTP server for the SCORM runtime bridge.
//!
//! Exposes one attempt tracker behind the bridge's wire protocol: a
//! blocking-read endpoint for volatile elements and a batched write
//! endpoint that answers with recomputed grade and completion state.

pub mod config;
pub mod error;
pub mod handler;
pub mod router;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use server::ScormServer;
pub use state::AppState;
