//! Grammatical-case row ordering.
//!
//! Wiktionary declension tables list cases as nominative, genitive, dative,
//! accusative, ablative, vocative. Readers of Latin grammars expect the
//! vocative and accusative next to the nominative, so those two rows are
//! moved directly below it as nominative, accusative, vocative.

use kuchiki::NodeRef;

use crate::dom::{TreeNode, select_all};

pub const NOMINATIVE: &str = "nominative case";
pub const ACCUSATIVE: &str = "accusative case";
pub const VOCATIVE: &str = "vocative case";

/// Whether a cell holds exactly one element whose `title` is `label`
fn is_case_cell(cell: &NodeRef, label: &str) -> bool {
    let has_loose_text = cell
        .child_nodes()
        .iter()
        .any(|child| !child.is_element() && !child.text_content().trim().is_empty());
    if has_loose_text {
        return false;
    }
    match cell.element_children().as_slice() {
        [only] => only.attribute("title").is_some_and(|title| title == label),
        _ => false,
    }
}

/// Whether `row` belongs to `table` itself rather than a nested table
fn is_own_row(table: &NodeRef, row: &NodeRef) -> bool {
    row.ancestors()
        .find(|node| node.is_tag("table"))
        .is_some_and(|nearest| nearest == *table)
}

/// First row of `table` with a cell marked with the given case
///
/// Rows of tables nested inside `table` are never considered.
#[must_use]
pub fn find_case_row(table: &NodeRef, label: &str) -> Option<NodeRef> {
    select_all(table, "tr").into_iter().find(|row| {
        is_own_row(table, row)
            && row
                .element_children()
                .iter()
                .filter(|cell| cell.is_tag("td") || cell.is_tag("th"))
                .any(|cell| is_case_cell(cell, label))
    })
}

/// Move the accusative and vocative rows directly after the nominative row
///
/// Returns `false` and leaves the table untouched when it has no nominative row.
pub fn reorder_case_rows(table: &NodeRef) -> bool {
    let Some(nominative) = find_case_row(table, NOMINATIVE) else {
        return false;
    };
    let accusative = find_case_row(table, ACCUSATIVE);
    let vocative = find_case_row(table, VOCATIVE);

    let mut anchor = nominative;
    for row in [accusative, vocative].into_iter().flatten() {
        if row != anchor {
            anchor.insert_after(row.clone());
        }
        anchor = row;
    }
    true
}
