//! Setter methods of `LexiconConfigBuilder`

use std::path::PathBuf;

use super::builder::LexiconConfigBuilder;

impl LexiconConfigBuilder {
    #[must_use]
    pub fn api_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.config.api_endpoint = endpoint.into();
        self
    }

    #[must_use]
    pub fn site_origin(mut self, origin: impl Into<String>) -> Self {
        self.config.site_origin = origin.into();
        self
    }

    /// Set the heading text of the extracted section (default `"Latin"`)
    #[must_use]
    pub fn target_label(mut self, label: impl Into<String>) -> Self {
        self.config.pipeline.target_label = label.into();
        self
    }

    /// Set the heading level that opens subsections
    ///
    /// Wiktionary puts parts of speech at level 3 and declension tables at
    /// level 4; choose 4 to keep each part of speech in one subsection.
    #[must_use]
    pub fn subsection_heading_level(mut self, level: u8) -> Self {
        self.config.pipeline.subsection_heading_level = level;
        self
    }

    #[must_use]
    pub fn collapsible_headings(mut self, collapsible: bool) -> Self {
        self.config.pipeline.collapsible_headings = collapsible;
        self
    }

    #[must_use]
    pub fn enable_cross_reference_appendix(mut self, enable: bool) -> Self {
        self.config.pipeline.enable_cross_reference_appendix = enable;
        self
    }

    #[must_use]
    pub fn history_capacity(mut self, capacity: usize) -> Self {
        self.config.history_capacity = capacity;
        self
    }

    #[must_use]
    pub fn cache_capacity(mut self, capacity: usize) -> Self {
        self.config.cache_capacity = capacity;
        self
    }

    #[must_use]
    pub fn request_timeout_secs(mut self, secs: u64) -> Self {
        self.config.request_timeout_secs = secs;
        self
    }

    #[must_use]
    pub fn state_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.state_path = Some(path.into());
        self
    }
}
