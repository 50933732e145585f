use std::net::SocketAddr;

use serde::{Deserialize, Serialize};

/// Server configuration. `weight` and `has_score` seed the attempt tracker.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub weight: f64,
    pub has_score: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:1484".parse().unwrap(),
            weight: 1.0,
            has_score: true,
        }
    }
}
