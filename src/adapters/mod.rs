// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapters layer containing format backend implementations.
//!
//! This module contains concrete implementations of the traits defined in the ports
//! layer. Each backend implements `FormatBackend` for one text format.

#[cfg(feature = "yaml")]
pub mod yaml_file;

// Re-export adapters based on feature flags
#[cfg(feature = "yaml")]
pub use yaml_file::{YamlBackend, YamlFile, MAX_YAML_FILE_SIZE};
