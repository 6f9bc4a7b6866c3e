//! Link classification and in-place rewriting.
//!
//! Every `<a>` in an extracted subtree is classified by [`classify_href`] and
//! rewritten according to its class. Links that should trigger a later lookup
//! get a [`LinkAction`] captured by value at rewrite time; the same payload is
//! written to a `data-*` attribute so a front end can dispatch clicks.

pub mod classify;

pub use classify::{LinkClass, LinkRules, classify_href};

use kuchiki::NodeRef;
use serde::Serialize;

use crate::dom::{
    add_class, get_attribute, move_children, new_element, replace_node, select_all, set_attribute,
};
use crate::utils::NOOP_HREF;

/// Deferred behaviour attached to a rewritten link
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum LinkAction {
    /// Run a fresh lookup for another entry
    Lookup { word: String },
    /// Show an appendix page in a secondary surface
    OpenAppendix { name: String },
}

/// What happened to one link
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkRewrite {
    /// href before rewriting (empty when the attribute was missing)
    pub original_href: String,
    pub class: LinkClass,
}

impl LinkRewrite {
    /// Deferred action for this link, if its class carries one
    #[must_use]
    pub fn action(&self) -> Option<LinkAction> {
        match &self.class {
            LinkClass::CrossReference { word } => Some(LinkAction::Lookup { word: word.clone() }),
            LinkClass::Appendix { name } => Some(LinkAction::OpenAppendix { name: name.clone() }),
            _ => None,
        }
    }
}

/// Result of a link rewriting pass
#[derive(Debug, Clone, Default, Serialize)]
pub struct RewriteResult {
    /// One record per `<a>` in document order
    pub rewrites: Vec<LinkRewrite>,
}

impl RewriteResult {
    /// Actions of all rewritten links, in document order, without duplicates
    #[must_use]
    pub fn actions(&self) -> Vec<LinkAction> {
        let mut actions: Vec<LinkAction> = Vec::new();
        for action in self.rewrites.iter().filter_map(LinkRewrite::action) {
            if !actions.contains(&action) {
                actions.push(action);
            }
        }
        actions
    }

    #[must_use]
    pub fn count(&self, predicate: impl Fn(&LinkClass) -> bool) -> usize {
        self.rewrites.iter().filter(|r| predicate(&r.class)).count()
    }
}

/// Rewrites links of a subtree according to a rule set
#[derive(Debug, Clone)]
pub struct LinkRewriter {
    rules: LinkRules,
}

impl LinkRewriter {
    #[must_use]
    pub fn new(rules: LinkRules) -> Self {
        Self { rules }
    }

    /// Rewrite every `<a>` below `root` in place
    pub fn rewrite_links(&self, root: &NodeRef) -> RewriteResult {
        let mut result = RewriteResult::default();

        for link in select_all(root, "a") {
            let href = get_attribute(&link, "href").unwrap_or_default();
            let class = classify_href(&href, &self.rules);
            apply(&link, &class);
            result.rewrites.push(LinkRewrite {
                original_href: href,
                class,
            });
        }

        log::debug!(
            "Rewrote {} links ({} lookups, {} downgraded)",
            result.rewrites.len(),
            result.count(|c| matches!(c, LinkClass::CrossReference { .. })),
            result.count(|c| matches!(c, LinkClass::Downgrade)),
        );
        result
    }
}

fn apply(link: &NodeRef, class: &LinkClass) {
    match class {
        LinkClass::External => mark_external(link),
        LinkClass::SiteRelative { absolute } => {
            set_attribute(link, "href", absolute);
            mark_external(link);
        }
        LinkClass::CrossReference { word } => {
            set_attribute(link, "href", NOOP_HREF);
            add_class(link, "searchable");
            set_attribute(link, "data-lookup", word);
        }
        LinkClass::Appendix { name } => {
            set_attribute(link, "href", NOOP_HREF);
            add_class(link, "information");
            set_attribute(link, "data-appendix", name);
        }
        LinkClass::Ignored => {}
        LinkClass::Downgrade => {
            let span = new_element("span");
            move_children(link, &span);
            replace_node(link, span);
        }
    }
}

fn mark_external(link: &NodeRef) {
    set_attribute(link, "target", "_blank");
    set_attribute(link, "rel", "noopener noreferrer");
    add_class(link, "external");
}
