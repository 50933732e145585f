//! Wire protocol for the SCORM runtime bridge.
//!
//! Defines the JSON payloads exchanged between the bridge and the tracker
//! server: the single-element read endpoint and the batched write endpoint,
//! plus the endpoint paths and the health/info surface.

pub mod endpoint;
pub mod message;

pub use endpoint::{endpoints, HealthResponse};
pub use message::{
    GetValueRequest, GetValueResponse, SetValueEntry, SetValueResult, PROTOCOL_VERSION,
};
