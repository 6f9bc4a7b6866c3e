//! Getter methods for `LexiconConfig`

use std::path::PathBuf;
use std::time::Duration;

use super::types::{LexiconConfig, PipelineConfig};

impl LexiconConfig {
    #[must_use]
    pub fn api_endpoint(&self) -> &str {
        &self.api_endpoint
    }

    #[must_use]
    pub fn site_origin(&self) -> &str {
        &self.site_origin
    }

    #[must_use]
    pub fn pipeline(&self) -> &PipelineConfig {
        &self.pipeline
    }

    #[must_use]
    pub fn history_capacity(&self) -> usize {
        self.history_capacity
    }

    #[must_use]
    pub fn cache_capacity(&self) -> usize {
        self.cache_capacity
    }

    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Resolved location of the persisted user state
    ///
    /// Falls back to `<data dir>/latin-lexicon/state.json`, or a file in the
    /// working directory when the platform has no data directory.
    #[must_use]
    pub fn state_path(&self) -> PathBuf {
        if let Some(path) = &self.state_path {
            return path.clone();
        }
        dirs::data_dir()
            .map(|dir| dir.join("latin-lexicon").join("state.json"))
            .unwrap_or_else(|| PathBuf::from("latin-lexicon-state.json"))
    }
}
