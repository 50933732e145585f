use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use scorm_protocol::endpoints;
use scorm_types::{CmiElement, ScormVersion, WireValue};

/// Host-supplied session configuration.
///
/// Field names match the initialization payload the hosting page passes to
/// the bridge, so the whole struct deserializes straight from it.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct BridgeConfig {
    #[serde(rename = "scorm_version", default)]
    pub version: ScormVersion,

    /// Snapshot of the attempt's CMI data, used to seed the local cache.
    #[serde(rename = "scorm_data", default)]
    pub initial_data: BTreeMap<CmiElement, WireValue>,
}

impl BridgeConfig {
    pub fn new(version: ScormVersion) -> Self {
        Self {
            version,
            initial_data: BTreeMap::new(),
        }
    }

    pub fn with_data(
        version: ScormVersion,
        initial_data: BTreeMap<CmiElement, WireValue>,
    ) -> Self {
        Self {
            version,
            initial_data,
        }
    }
}

/// Fully resolved handler URLs for the HTTP transport.
///
/// URL resolution belongs to the host; the bridge only ever sees the final
/// pair.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TransportConfig {
    pub get_value_url: String,
    pub set_values_url: String,
}

impl TransportConfig {
    /// Derive both handler URLs from a server base URL.
    pub fn for_base_url(base: &str) -> Self {
        let base = base.trim_end_matches('/');
        Self {
            get_value_url: format!("{base}{}", endpoints::GET_VALUE),
            set_values_url: format!("{base}{}", endpoints::SET_VALUES),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_host_payload() {
        let json = r#"{
            "scorm_version": "SCORM_2004",
            "scorm_data": {
                "cmi.location": "page-7",
                "cmi.score.raw": 40
            }
        }"#;
        let config: BridgeConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.version, ScormVersion::Scorm2004);
        assert_eq!(
            config.initial_data.get("cmi.location"),
            Some(&WireValue::from("page-7"))
        );
        assert_eq!(
            config.initial_data.get("cmi.score.raw"),
            Some(&WireValue::from(40.0))
        );
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: BridgeConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.version, ScormVersion::Scorm12);
        assert!(config.initial_data.is_empty());
    }

    #[test]
    fn base_url_expansion() {
        let config = TransportConfig::for_base_url("http://127.0.0.1:1484/");
        assert_eq!(config.get_value_url, "http://127.0.0.1:1484/v1/get_value");
        assert_eq!(config.set_values_url, "http://127.0.0.1:1484/v1/set_values");
    }
}
