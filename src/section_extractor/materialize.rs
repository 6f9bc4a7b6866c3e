//! Build the detached output tree for an extraction.
//!
//! Inert headings (the default) become the first child of their subsection:
//!
//! ```html
//! <div class="entry">
//!   <div class="subsection"><p>...</p></div>
//!   <div class="subsection"><h3>Noun</h3><p>...</p></div>
//! </div>
//! ```
//!
//! Collapsible headings become the `<summary>` of a `<details>` element so
//! the body can be toggled without script.

use kuchiki::NodeRef;

use super::{Extraction, Subsection};
use crate::dom::{deep_clone, new_element_with};

/// Deep-copy the extracted nodes into a new `<div class="entry">`
#[must_use]
pub fn materialize(extraction: &Extraction<NodeRef>) -> NodeRef {
    let root = new_element_with("div", &[("class", "entry")]);
    for subsection in &extraction.subsections {
        let rendered = if extraction.collapsible_headings() {
            collapsible_subsection(subsection)
        } else {
            inert_subsection(subsection)
        };
        root.append(rendered);
    }
    root
}

fn inert_subsection(subsection: &Subsection<NodeRef>) -> NodeRef {
    let container = new_element_with("div", &[("class", "subsection")]);
    if let Some(heading) = subsection.heading.as_ref().and_then(deep_clone) {
        container.append(heading);
    }
    append_copies(&container, &subsection.body);
    container
}

fn collapsible_subsection(subsection: &Subsection<NodeRef>) -> NodeRef {
    let body = new_element_with("div", &[("class", "subsection-body")]);
    append_copies(&body, &subsection.body);

    let Some(heading) = subsection.heading.as_ref().and_then(deep_clone) else {
        let container = new_element_with("div", &[("class", "subsection")]);
        container.append(body);
        return container;
    };

    let details = new_element_with("details", &[("class", "subsection"), ("open", "")]);
    let summary = new_element_with("summary", &[("class", "subsection-toggle")]);
    summary.append(heading);
    details.append(summary);
    details.append(body);
    details
}

fn append_copies(parent: &NodeRef, nodes: &[NodeRef]) {
    for node in nodes {
        if let Some(copy) = deep_clone(node) {
            parent.append(copy);
        }
    }
}
