use std::sync::Arc;

use tokio::net::TcpListener;

use scorm_tracker::{AttemptState, AttemptTracker, ProgressSink};

use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use crate::router::build_router;
use crate::state::AppState;

/// SCORM attempt tracker server.
pub struct ScormServer {
    config: ServerConfig,
    state: AppState,
}

impl ScormServer {
    pub fn new(config: ServerConfig) -> Self {
        let state = AppState::new(AttemptTracker::from_state(Self::seed_attempt(&config)));
        Self { config, state }
    }

    /// Publish the tracker's completion/grade events through `sink`.
    pub fn with_sink(config: ServerConfig, sink: Arc<dyn ProgressSink>) -> Self {
        let state = AppState::new(AttemptTracker::with_sink(Self::seed_attempt(&config), sink));
        Self { config, state }
    }

    fn seed_attempt(config: &ServerConfig) -> AttemptState {
        AttemptState {
            weight: config.weight,
            has_score: config.has_score,
            ..AttemptState::default()
        }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Build the router (useful for testing).
    pub fn router(&self) -> axum::Router {
        build_router(self.state.clone())
    }

    /// Start serving requests.
    pub async fn serve(self) -> ServerResult<()> {
        let app = self.router();
        let listener = TcpListener::bind(&self.config.bind_addr).await?;
        tracing::info!("SCORM tracker listening on {}", self.config.bind_addr);
        axum::serve(listener, app)
            .await
            .map_err(|e| ServerError::Internal(e.to_string()))
    }
}
