//! Table restructuring for inline display.
//!
//! Every table is wrapped in a horizontal-scroll container. Tables carrying
//! the `inflection-table` class additionally get:
//! - case rows reordered to nominative, accusative, vocative
//! - `<br>` inside cells replaced with `", "`
//! - the two Wiktionary header colours remapped to neutral greys

pub mod case_rows;
pub mod color;

pub use case_rows::{find_case_row, reorder_case_rows};
pub use color::{parse_rgb, remap_background};

use kuchiki::NodeRef;
use serde::Serialize;

use crate::dom::{
    InlineStyle, TreeNode, get_attribute, new_element_with, replace_node, select_all,
    set_attribute,
};
use crate::utils::{CELL_LINE_SEPARATOR, INFLECTION_TABLE_CLASS, TABLE_SCROLL_CLASS};

/// Style properties that may carry a cell background
const BACKGROUND_PROPERTIES: [&str; 2] = ["background", "background-color"];

/// Statistics of a reshaping pass
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReshapeResult {
    pub tables_wrapped: usize,
    pub inflection_tables: usize,
    pub tables_reordered: usize,
    pub line_breaks_replaced: usize,
    pub colors_remapped: usize,
}

/// Reshape every table below `root` in place
pub fn reshape_tables(root: &NodeRef) -> ReshapeResult {
    let mut result = ReshapeResult::default();

    for table in select_all(root, "table") {
        if wrap_for_scroll(&table) {
            result.tables_wrapped += 1;
        }

        if !table.has_class(INFLECTION_TABLE_CLASS) {
            continue;
        }
        result.inflection_tables += 1;

        if reorder_case_rows(&table) {
            result.tables_reordered += 1;
        }

        for row in select_all(&table, "tr") {
            for cell in row.element_children() {
                if !(cell.is_tag("td") || cell.is_tag("th")) {
                    continue;
                }
                result.line_breaks_replaced += replace_line_breaks(&cell);
                result.colors_remapped += remap_cell_background(&cell);
            }
        }
    }

    log::debug!(
        "Reshaped {} tables ({} inflection, {} reordered)",
        result.tables_wrapped,
        result.inflection_tables,
        result.tables_reordered
    );
    result
}

/// Put `table` inside a horizontally scrollable `<div>`
///
/// Detached tables have no position to wrap at and are skipped.
fn wrap_for_scroll(table: &NodeRef) -> bool {
    if table.parent().is_none() {
        return false;
    }
    let wrapper = new_element_with(
        "div",
        &[("class", TABLE_SCROLL_CLASS), ("style", "overflow-x: auto;")],
    );
    table.insert_before(wrapper.clone());
    wrapper.append(table.clone());
    true
}

/// Replace each `<br>` in a cell with a literal separator
fn replace_line_breaks(cell: &NodeRef) -> usize {
    let breaks = select_all(cell, "br");
    for line_break in &breaks {
        replace_node(line_break, NodeRef::new_text(CELL_LINE_SEPARATOR));
    }
    breaks.len()
}

/// Remap the cell's inline background colour if it is one of the known ones
fn remap_cell_background(cell: &NodeRef) -> usize {
    let Some(raw) = get_attribute(cell, "style") else {
        return 0;
    };
    let mut style = InlineStyle::parse(&raw);
    let mut remapped = 0;
    for property in BACKGROUND_PROPERTIES {
        if let Some(replacement) = style.get(property).and_then(remap_background) {
            style.set(property, replacement);
            remapped += 1;
        }
    }
    if remapped > 0 {
        set_attribute(cell, "style", &style.to_string());
    }
    remapped
}
