//! Construction and mutation helpers for kuchiki trees.

use kuchiki::traits::TendrilSink;
use kuchiki::{NodeData, NodeRef};

/// Parse an HTML string into a document tree
#[must_use]
pub fn parse_document(html: &str) -> NodeRef {
    kuchiki::parse_html().one(html)
}

/// Create a detached, empty element
///
/// Elements are produced by the HTML parser so they carry the proper HTML
/// namespace; `tag` must be a tag that may appear inside `<body>`.
#[must_use]
pub fn new_element(tag: &'static str) -> NodeRef {
    let fragment = kuchiki::parse_html().one(format!("<{tag}></{tag}>"));
    let element = fragment
        .select_first(tag)
        .map(|found| found.as_node().clone())
        .unwrap_or_else(|()| panic!("BUG: hardcoded element tag '{tag}' must parse inside <body>"));
    element.detach();
    element
}

/// Create a detached element with the given attributes
#[must_use]
pub fn new_element_with(tag: &'static str, attributes: &[(&str, &str)]) -> NodeRef {
    let element = new_element(tag);
    for (name, value) in attributes {
        set_attribute(&element, name, value);
    }
    element
}

/// Deep-copy a node and its descendants into a detached tree
///
/// Elements, text and comments are copied; other node kinds (doctype,
/// processing instructions) never occur inside page content and are skipped.
#[must_use]
pub fn deep_clone(node: &NodeRef) -> Option<NodeRef> {
    let copy = match node.data() {
        NodeData::Element(element) => NodeRef::new_element(
            element.name.clone(),
            element.attributes.borrow().map.clone(),
        ),
        NodeData::Text(text) => NodeRef::new_text(text.borrow().clone()),
        NodeData::Comment(comment) => NodeRef::new_comment(comment.borrow().clone()),
        _ => return None,
    };
    for child in node.children() {
        if let Some(child_copy) = deep_clone(&child) {
            copy.append(child_copy);
        }
    }
    Some(copy)
}

pub fn get_attribute(node: &NodeRef, name: &str) -> Option<String> {
    let element = node.as_element()?;
    let attributes = element.attributes.borrow();
    attributes.get(name).map(ToString::to_string)
}

pub fn set_attribute(node: &NodeRef, name: &str, value: &str) {
    if let Some(element) = node.as_element() {
        element
            .attributes
            .borrow_mut()
            .insert(name, value.to_string());
    }
}

/// Append a class unless it is already present
pub fn add_class(node: &NodeRef, class: &str) {
    let current = get_attribute(node, "class").unwrap_or_default();
    if current.split_ascii_whitespace().any(|c| c == class) {
        return;
    }
    let updated = if current.trim().is_empty() {
        class.to_string()
    } else {
        format!("{} {class}", current.trim())
    };
    set_attribute(node, "class", &updated);
}

/// Collect all descendants matching a CSS selector
///
/// Nodes are collected up front so callers may detach or move them while
/// iterating.
pub fn select_all(root: &NodeRef, selector: &str) -> Vec<NodeRef> {
    match root.select(selector) {
        Ok(matches) => matches.map(|found| found.as_node().clone()).collect(),
        Err(()) => {
            log::warn!("Failed to parse selector '{selector}'");
            Vec::new()
        }
    }
}

/// Put `replacement` where `node` was and detach `node`
pub fn replace_node(node: &NodeRef, replacement: NodeRef) {
    node.insert_before(replacement);
    node.detach();
}

/// Move every child of `from` to the end of `to`
pub fn move_children(from: &NodeRef, to: &NodeRef) {
    let children: Vec<NodeRef> = from.children().collect();
    for child in children {
        to.append(child);
    }
}

/// Serialize a node (including itself) to HTML
#[must_use]
pub fn serialize_node(node: &NodeRef) -> String {
    let mut output = Vec::new();
    if let Err(e) = node.serialize(&mut output) {
        log::warn!("Failed to serialize node: {e}");
        return String::new();
    }
    String::from_utf8_lossy(&output).into_owned()
}

/// Serialize only the children of a node
#[must_use]
pub fn serialize_children(node: &NodeRef) -> String {
    node.children().map(|child| serialize_node(&child)).collect()
}
