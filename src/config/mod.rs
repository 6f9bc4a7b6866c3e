//! Configuration module for lookups
//!
//! This module provides the `LexiconConfig` struct, its builder and the
//! `PipelineConfig` that selects the extraction policy of a call site.

// Sub-modules
pub mod builder;
pub mod getters;
pub mod methods;
pub mod types;

// Re-exports for public API
pub use builder::{LexiconConfigBuilder, validate_pipeline};
pub use types::{LexiconConfig, PipelineConfig};
