/// HTTP endpoint paths for the bridge protocol.
pub mod endpoints {
    pub const GET_VALUE: &str = "/v1/get_value";
    pub const SET_VALUES: &str = "/v1/set_values";
    pub const SET_VALUE: &str = "/v1/set_value";
    pub const HEALTH: &str = "/v1/health";
    pub const INFO: &str = "/v1/info";
}

/// Health check response.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub protocol_version: u32,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "ok".into(),
            version: env!("CARGO_PKG_VERSION").into(),
            protocol_version: super::message::PROTOCOL_VERSION,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_response_defaults() {
        let h = HealthResponse::default();
        assert_eq!(h.status, "ok");
        assert_eq!(h.protocol_version, 1);
    }

    #[test]
    fn endpoint_paths() {
        assert_eq!(endpoints::GET_VALUE, "/v1/get_value");
        assert_eq!(endpoints::SET_VALUES, "/v1/set_values");
        assert_eq!(endpoints::SET_VALUE, "/v1/set_value");
        assert_eq!(endpoints::HEALTH, "/v1/health");
    }
}
