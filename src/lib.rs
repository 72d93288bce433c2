//! Classify provider-namespaced resource type identifiers (`aws:lambda`,
//! `kubernetes:apps`, ...) into a fixed set of display categories.
//!
//! Classification normalizes case and provider aliases, refuses providers the
//! registry does not cover, and then searches the registry from the most to the
//! least specific prefix of the type string.
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod json_output;
pub mod kind;
pub mod lint;
pub mod registry;
pub mod resolve;

pub use kind::ResourceKind;
pub use registry::{Registry, Resolution};

/// Classify `resource_type` against the embedded registry.
pub fn classify(resource_type: &str) -> ResourceKind {
    Registry::embedded().classify(resource_type)
}

/// Same as [`classify`] but also reports the normalized input and matched key.
pub fn resolve(resource_type: &str) -> Resolution {
    Registry::embedded().resolve(resource_type)
}
