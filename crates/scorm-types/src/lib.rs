//! Foundation types for the SCORM runtime bridge.
//!
//! This crate provides the data-model vocabulary shared by the bridge, the
//! attempt tracker, and the server. Every other crate in the workspace
//! depends on `scorm-types`.
//!
//! # Key Types
//!
//! - [`CmiElement`] — Opaque dot-namespaced CMI data model key
//! - [`WireValue`] — A CMI value as it travels on the wire (string or number)
//! - [`ScormVersion`] — Runtime version selecting API shape and score alias
//! - [`VOLATILE_ELEMENTS`] — Elements that must never be served from cache

pub mod element;
pub mod error;
pub mod status;
pub mod value;
pub mod version;

pub use element::{elements, CmiElement, VOLATILE_ELEMENTS};
pub use error::TypeError;
pub use value::WireValue;
pub use version::ScormVersion;
