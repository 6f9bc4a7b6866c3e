//! Sibling-walk state machine.
//!
//! Each sibling is reduced to a [`NodeKind`]; the pair (state, kind) selects
//! the next state and a [`Step`] for the extractor to perform.

use crate::dom::TreeNode;

/// Where the walk is relative to the target section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractState {
    /// Target heading not seen yet
    Before,
    /// Copying the target section's siblings
    InSection,
    /// Hit the next section boundary; everything after is ignored
    Done,
}

/// What a sibling node means to the walk
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// Text, comments and other non-element nodes
    NonElement,
    /// Heading at or above the section level; `matches` only for the target
    SectionHeading { matches: bool },
    /// Heading at the subsection level
    SubsectionHeading,
    /// `<hr>`
    Rule,
    /// Any other element, including headings between the two levels
    Content,
}

/// Action the extractor performs for one sibling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Ignore,
    /// Target heading found; the heading itself is not copied
    Begin,
    StartSubsection,
    /// Node is dropped unconditionally
    Drop,
    Copy,
    /// Section boundary; flush and stop
    Finish,
}

/// Heading matching parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadingPolicy {
    pub target_label: String,
    pub section_level: u8,
    pub subsection_level: u8,
}

impl HeadingPolicy {
    /// Reduce a sibling to the kind the transition table is keyed on
    pub fn classify<N: TreeNode>(&self, node: &N) -> NodeKind {
        if !node.is_element() {
            return NodeKind::NonElement;
        }
        if node.is_tag("hr") {
            return NodeKind::Rule;
        }
        match node.heading_level() {
            Some(level) if level <= self.section_level => {
                // An unreadable label never matches
                let matches = level == self.section_level
                    && node
                        .heading_label()
                        .is_some_and(|label| label == self.target_label);
                NodeKind::SectionHeading { matches }
            }
            Some(level) if level == self.subsection_level => NodeKind::SubsectionHeading,
            _ => NodeKind::Content,
        }
    }
}

/// Transition table
#[must_use]
pub fn transition(state: ExtractState, kind: &NodeKind) -> (ExtractState, Step) {
    use ExtractState::{Before, Done, InSection};

    match (state, kind) {
        (Before, NodeKind::SectionHeading { matches: true }) => (InSection, Step::Begin),
        (Before, _) => (Before, Step::Ignore),
        (InSection, NodeKind::NonElement) => (InSection, Step::Ignore),
        (InSection, NodeKind::SectionHeading { .. }) => (Done, Step::Finish),
        (InSection, NodeKind::SubsectionHeading) => (InSection, Step::StartSubsection),
        (InSection, NodeKind::Rule) => (InSection, Step::Drop),
        (InSection, NodeKind::Content) => (InSection, Step::Copy),
        (Done, _) => (Done, Step::Ignore),
    }
}
