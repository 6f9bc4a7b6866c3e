//! Builder for `LexiconConfig`
//!
//! Every field has a default, so `LexiconConfig::builder().build()` yields
//! the stock Wiktionary setup. `build()` validates the combination.

use anyhow::{Result, anyhow};
use std::path::Path;
use url::Url;

use super::types::{LexiconConfig, PipelineConfig};

#[derive(Debug, Clone, Default)]
pub struct LexiconConfigBuilder {
    pub(crate) config: LexiconConfig,
}

impl LexiconConfig {
    /// Create a builder for configuring a `LexiconConfig` with a fluent interface
    #[must_use]
    pub fn builder() -> LexiconConfigBuilder {
        LexiconConfigBuilder::default()
    }

    /// Load a configuration from a JSON file
    ///
    /// Missing fields take their defaults. The result is validated the same
    /// way as a builder-made configuration.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow!("Failed to read config {}: {e}", path.display()))?;
        let config: LexiconConfig = serde_json::from_str(&raw)
            .map_err(|e| anyhow!("Invalid config {}: {e}", path.display()))?;
        LexiconConfigBuilder { config }.build()
    }

    /// Reopen a configuration for further changes
    #[must_use]
    pub fn into_builder(self) -> LexiconConfigBuilder {
        LexiconConfigBuilder { config: self }
    }
}

impl LexiconConfigBuilder {
    /// Validate and produce the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint or origin are not absolute URLs, if
    /// the heading levels are inconsistent, or if a capacity is zero.
    pub fn build(self) -> Result<LexiconConfig> {
        let config = self.config;

        Url::parse(&config.api_endpoint)
            .map_err(|e| anyhow!("Invalid API endpoint '{}': {e}", config.api_endpoint))?;
        Url::parse(&config.site_origin)
            .map_err(|e| anyhow!("Invalid site origin '{}': {e}", config.site_origin))?;

        validate_pipeline(&config.pipeline)?;

        if config.history_capacity == 0 {
            return Err(anyhow!("history_capacity must be at least 1"));
        }
        if config.cache_capacity == 0 {
            return Err(anyhow!("cache_capacity must be at least 1"));
        }

        Ok(config)
    }
}

/// Check the heading levels and label of a pipeline configuration
pub fn validate_pipeline(pipeline: &PipelineConfig) -> Result<()> {
    if pipeline.target_label.trim().is_empty() {
        return Err(anyhow!("target_label must not be empty"));
    }
    if !(1..=6).contains(&pipeline.section_heading_level) {
        return Err(anyhow!(
            "section_heading_level must be between 1 and 6, got {}",
            pipeline.section_heading_level
        ));
    }
    if pipeline.subsection_heading_level <= pipeline.section_heading_level
        || pipeline.subsection_heading_level > 6
    {
        return Err(anyhow!(
            "subsection_heading_level must be between {} and 6, got {}",
            pipeline.section_heading_level + 1,
            pipeline.subsection_heading_level
        ));
    }
    Ok(())
}

