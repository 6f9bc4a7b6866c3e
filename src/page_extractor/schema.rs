//! Output of a pipeline run.

use serde::Serialize;

use crate::link_rewriter::{LinkAction, RewriteResult};
use crate::table_reshaper::ReshapeResult;

/// A page reduced to the content that gets displayed
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProcessedPage {
    /// Serialized detached tree
    pub html: String,
    /// Element children across all extracted subsections
    pub element_count: usize,
    pub subsection_count: usize,
    /// Chrome elements removed during cleanup
    pub removed_chrome: usize,
    pub links: RewriteResult,
    pub tables: ReshapeResult,
}

impl ProcessedPage {
    /// No displayable content; callers report this as "not found"
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.element_count == 0
    }

    /// Deferred link actions, deduplicated, in document order
    #[must_use]
    pub fn actions(&self) -> Vec<LinkAction> {
        self.links.actions()
    }
}
