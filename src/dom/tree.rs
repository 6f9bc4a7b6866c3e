//! Abstract tree-node capability set.
//!
//! Section extraction only needs to ask a node for its tag, text, children and
//! attributes. Keeping that behind [`TreeNode`] lets the state machine run over
//! kuchiki trees in production and over plain structs in tests.

use kuchiki::NodeRef;

/// Read-only view of a document node
pub trait TreeNode: Clone {
    /// Whether this node is an element (as opposed to text, comment, ...)
    fn is_element(&self) -> bool;

    /// Lowercase tag name for elements, `None` otherwise
    fn tag(&self) -> Option<String>;

    /// Concatenated text of the node and all its descendants
    fn text_content(&self) -> String;

    /// Children in document order
    fn child_nodes(&self) -> Vec<Self>;

    /// Attribute value, `None` when absent or when the node is not an element
    fn attribute(&self, name: &str) -> Option<String>;

    fn element_children(&self) -> Vec<Self> {
        self.child_nodes()
            .into_iter()
            .filter(TreeNode::is_element)
            .collect()
    }

    fn is_tag(&self, tag: &str) -> bool {
        self.tag().is_some_and(|t| t == tag)
    }

    fn has_class(&self, class: &str) -> bool {
        self.attribute("class")
            .is_some_and(|value| value.split_ascii_whitespace().any(|c| c == class))
    }

    /// The `<hN>` element this node represents
    ///
    /// Either the node itself, or the `<hN>` inside a
    /// `<div class="mw-heading">` wrapper.
    fn heading_element(&self) -> Option<Self> {
        let tag = self.tag()?;
        if heading_level_of_tag(&tag).is_some() {
            return Some(self.clone());
        }
        if tag == "div" && self.has_class("mw-heading") {
            return self
                .element_children()
                .into_iter()
                .find(|child| child.tag().as_deref().and_then(heading_level_of_tag).is_some());
        }
        None
    }

    fn heading_level(&self) -> Option<u8> {
        let heading = self.heading_element()?;
        heading.tag().as_deref().and_then(heading_level_of_tag)
    }

    /// Trimmed heading text, `None` for non-headings and empty headings
    ///
    /// Prefers a `.mw-headline` child so edit-section links inside legacy
    /// headings never leak into the label.
    fn heading_label(&self) -> Option<String> {
        let heading = self.heading_element()?;
        let raw = match heading
            .element_children()
            .into_iter()
            .find(|child| child.has_class("mw-headline"))
        {
            Some(headline) => headline.text_content(),
            None => heading.text_content(),
        };
        let label = raw.trim();
        if label.is_empty() {
            None
        } else {
            Some(label.to_string())
        }
    }
}

/// Level of an `h1`..`h6` tag
#[must_use]
pub fn heading_level_of_tag(tag: &str) -> Option<u8> {
    match tag {
        "h1" => Some(1),
        "h2" => Some(2),
        "h3" => Some(3),
        "h4" => Some(4),
        "h5" => Some(5),
        "h6" => Some(6),
        _ => None,
    }
}

impl TreeNode for NodeRef {
    fn is_element(&self) -> bool {
        self.as_element().is_some()
    }

    fn tag(&self) -> Option<String> {
        self.as_element()
            .map(|element| element.name.local.to_ascii_lowercase().to_string())
    }

    fn text_content(&self) -> String {
        self.text_contents()
    }

    fn child_nodes(&self) -> Vec<Self> {
        self.children().collect()
    }

    fn attribute(&self, name: &str) -> Option<String> {
        let element = self.as_element()?;
        let attributes = element.attributes.borrow();
        attributes.get(name).map(ToString::to_string)
    }
}
