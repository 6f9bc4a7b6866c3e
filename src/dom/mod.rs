//! Shared document-tree primitives.
//!
//! - [`TreeNode`]: the capability set (tag, text, children, attributes) the
//!   section state machine is written against
//! - `node_util`: construction, cloning and serialization of kuchiki nodes
//! - [`InlineStyle`]: `style` attribute parsing for colour remapping

pub mod node_util;
pub mod style;
pub mod tree;

pub use node_util::{
    add_class, deep_clone, get_attribute, move_children, new_element, new_element_with,
    parse_document, replace_node, select_all, serialize_children,
    serialize_node, set_attribute,
};
pub use style::InlineStyle;
pub use tree::{TreeNode, heading_level_of_tag};
