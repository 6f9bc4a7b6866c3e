//! Core configuration types for lookups
//!
//! This module contains the `LexiconConfig` struct and the `PipelineConfig`
//! that parameterizes section extraction and link rewriting.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::utils::{
    DEFAULT_API_ENDPOINT, DEFAULT_HISTORY_CAPACITY, DEFAULT_PAGE_CACHE_CAPACITY,
    DEFAULT_REQUEST_TIMEOUT_SECS, DEFAULT_SECTION_HEADING_LEVEL, DEFAULT_SITE_ORIGIN,
    DEFAULT_SUBSECTION_HEADING_LEVEL, DEFAULT_TARGET_LABEL,
};

/// Policy knobs of the extraction pipeline
///
/// Entry pages and appendix pages run through the same pipeline; only these
/// fields differ between call sites.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Heading text of the section to extract
    pub target_label: String,

    /// Level of the headings that delimit sections
    pub section_heading_level: u8,

    /// Level of the headings that open a new subsection
    ///
    /// **INVARIANT:** strictly greater than `section_heading_level`, at most 6.
    pub subsection_heading_level: u8,

    /// Render subsection headings as collapsible toggles instead of inert content
    pub collapsible_headings: bool,

    /// Rewrite `/wiki/Appendix:*` links into appendix actions
    ///
    /// When disabled those links fall through to the absolute-rewrite rule.
    pub enable_cross_reference_appendix: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            target_label: DEFAULT_TARGET_LABEL.to_string(),
            section_heading_level: DEFAULT_SECTION_HEADING_LEVEL,
            subsection_heading_level: DEFAULT_SUBSECTION_HEADING_LEVEL,
            collapsible_headings: false,
            enable_cross_reference_appendix: true,
        }
    }
}

/// Main configuration struct for the lexicon service
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LexiconConfig {
    pub(crate) api_endpoint: String,

    /// Origin used to absolutize site-relative links
    pub(crate) site_origin: String,

    pub(crate) pipeline: PipelineConfig,

    /// Maximum number of search history entries
    pub(crate) history_capacity: usize,

    /// Number of fetched pages kept in the in-memory LRU cache
    pub(crate) cache_capacity: usize,

    pub(crate) request_timeout_secs: u64,

    /// File holding favourites, history and the last query
    ///
    /// `None` resolves to the platform data directory.
    pub(crate) state_path: Option<PathBuf>,
}

impl Default for LexiconConfig {
    fn default() -> Self {
        Self {
            api_endpoint: DEFAULT_API_ENDPOINT.to_string(),
            site_origin: DEFAULT_SITE_ORIGIN.to_string(),
            pipeline: PipelineConfig::default(),
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            cache_capacity: DEFAULT_PAGE_CACHE_CAPACITY,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            state_path: None,
        }
    }
}
