//! Section extraction from a flat run of sibling nodes.
//!
//! Walks the children of the page container, finds the level-2 heading whose
//! label equals the target (first match wins), and collects the following
//! siblings up to the next heading of the same or higher level. Subsection
//! headings split the collected run into [`Subsection`]s.
//!
//! The walk is generic over [`TreeNode`]; [`materialize`] turns an
//! extraction over kuchiki nodes into a detached output tree.

pub mod materialize;
pub mod state;

pub use materialize::materialize;
pub use state::{ExtractState, HeadingPolicy, NodeKind, Step, transition};

use crate::config::PipelineConfig;
use crate::dom::TreeNode;

/// A run of section content opened by a subsection heading
///
/// The first subsection of a section has no heading: it holds whatever sits
/// between the section heading and the first subsection heading.
#[derive(Debug, Clone)]
pub struct Subsection<N> {
    pub heading: Option<N>,
    pub body: Vec<N>,
}

impl<N> Subsection<N> {
    fn new(heading: Option<N>) -> Self {
        Self {
            heading,
            body: Vec::new(),
        }
    }

    /// Number of element children this subsection contributes to the output
    ///
    /// A collapsible heading renders outside the subsection body, so only the
    /// body counts in that mode.
    #[must_use]
    pub fn element_count(&self, collapsible_headings: bool) -> usize {
        let heading = usize::from(self.heading.is_some() && !collapsible_headings);
        heading + self.body.len()
    }
}

/// Result of one extraction run
#[derive(Debug, Clone)]
pub struct Extraction<N> {
    /// Whether the target heading was found at all
    pub matched: bool,
    /// Non-empty subsections in document order
    pub subsections: Vec<Subsection<N>>,
    collapsible_headings: bool,
}

impl<N> Extraction<N> {
    /// Total element children across all subsections
    ///
    /// Zero means "no matching section" to callers, even when the heading
    /// itself was present.
    #[must_use]
    pub fn element_count(&self) -> usize {
        self.subsections
            .iter()
            .map(|subsection| subsection.element_count(self.collapsible_headings))
            .sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.element_count() == 0
    }

    #[must_use]
    pub fn collapsible_headings(&self) -> bool {
        self.collapsible_headings
    }
}

/// Section extractor configured for one call site
#[derive(Debug, Clone)]
pub struct SectionExtractor {
    policy: HeadingPolicy,
    collapsible_headings: bool,
}

impl SectionExtractor {
    #[must_use]
    pub fn new(policy: HeadingPolicy, collapsible_headings: bool) -> Self {
        Self {
            policy,
            collapsible_headings,
        }
    }

    #[must_use]
    pub fn from_config(config: &PipelineConfig) -> Self {
        Self::new(
            HeadingPolicy {
                target_label: config.target_label.clone(),
                section_level: config.section_heading_level,
                subsection_level: config.subsection_heading_level,
            },
            config.collapsible_headings,
        )
    }

    /// Extract the target section from the children of `container`
    pub fn extract_from<N: TreeNode>(&self, container: &N) -> Extraction<N> {
        self.extract(container.child_nodes())
    }

    /// Extract the target section from a sequence of siblings
    pub fn extract<N: TreeNode>(&self, siblings: impl IntoIterator<Item = N>) -> Extraction<N> {
        let mut state = ExtractState::Before;
        let mut matched = false;
        let mut subsections = Vec::new();
        let mut current = Subsection::new(None);

        for node in siblings {
            let kind = self.policy.classify(&node);
            let (next, step) = transition(state, &kind);
            state = next;

            match step {
                Step::Ignore | Step::Drop => {}
                Step::Begin => matched = true,
                Step::StartSubsection => {
                    if current.element_count(self.collapsible_headings) > 0 {
                        subsections.push(std::mem::replace(
                            &mut current,
                            Subsection::new(Some(node)),
                        ));
                    } else {
                        current.heading = Some(node);
                    }
                }
                Step::Copy => current.body.push(node),
                Step::Finish => break,
            }
        }

        if current.element_count(self.collapsible_headings) > 0 {
            subsections.push(current);
        }

        log::debug!(
            "Extracted section '{}': matched={matched}, {} subsections",
            self.policy.target_label,
            subsections.len()
        );

        Extraction {
            matched,
            subsections,
            collapsible_headings: self.collapsible_headings,
        }
    }
}
