//! Page processing: turns a rendered wiki page into displayable content.
//!
//! This module wires the section extractor, the link rewriter and the table
//! reshaper into one [`PagePipeline`], parameterized by
//! [`PipelineConfig`](crate::config::PipelineConfig).

// Sub-modules
pub mod cleanup;
pub mod pipeline;
pub mod schema;

// Re-exports for public API
pub use cleanup::remove_chrome;
pub use pipeline::PagePipeline;
pub use schema::ProcessedPage;
