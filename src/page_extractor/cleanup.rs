//! Removal of wiki chrome from extracted content.

use kuchiki::NodeRef;

use crate::dom::select_all;

/// Elements that never belong in the inline display
///
/// `.mw-editsection` holds the "[edit]" links next to headings; template
/// styles and scripts would leak into the host page.
const REMOVE_SELECTORS: &[&str] = &[
    ".mw-editsection",
    "script",
    "style",
    "link[rel=\"mw-deduplicated-inline-style\"]",
];

/// Detach chrome elements below `root`, returning how many were removed
pub fn remove_chrome(root: &NodeRef) -> usize {
    let mut removed = 0;
    for selector in REMOVE_SELECTORS {
        for node in select_all(root, selector) {
            node.detach();
            removed += 1;
        }
    }
    removed
}
