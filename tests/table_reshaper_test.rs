use latin_lexicon::dom::{TreeNode, get_attribute, parse_document, select_all, serialize_node};
use latin_lexicon::table_reshaper::reshape_tables;

fn case_row(label: &str) -> String {
    format!(r#"<tr><th><span title="{label} case">{label}</span></th><td>{label}-form</td></tr>"#)
}

fn row_labels(html: &str) -> Vec<String> {
    let document = parse_document(html);
    select_all(&document, "tr")
        .iter()
        .map(|row| {
            row.element_children()
                .first()
                .map(TreeNode::text_content)
                .unwrap_or_default()
        })
        .collect()
}

fn reshape(table_html: &str) -> String {
    let document = parse_document(&format!(r#"<div id="root">{table_html}</div>"#));
    let root = document.select_first("#root").unwrap().as_node().clone();
    reshape_tables(&root);
    serialize_node(&root)
}

#[test]
fn test_case_rows_reordered() {
    let table = format!(
        r#"<table class="inflection-table">{}{}{}<tr><th>other</th><td>x</td></tr></table>"#,
        case_row("vocative"),
        case_row("nominative"),
        case_row("accusative"),
    );

    let html = reshape(&table);
    assert_eq!(
        row_labels(&html),
        ["nominative", "accusative", "vocative", "other"]
    );
}

#[test]
fn test_case_rows_follow_nominative_in_place() {
    let table = format!(
        r#"<table class="inflection-table"><tr><th>Case</th><td>sg</td></tr>{}{}{}{}{}{}</table>"#,
        case_row("nominative"),
        case_row("genitive"),
        case_row("dative"),
        case_row("accusative"),
        case_row("ablative"),
        case_row("vocative"),
    );

    let html = reshape(&table);
    assert_eq!(
        row_labels(&html),
        ["Case", "nominative", "accusative", "vocative", "genitive", "dative", "ablative"]
    );
}

#[test]
fn test_no_nominative_keeps_order() {
    let table = format!(
        r#"<table class="inflection-table">{}{}<tr><th>other</th><td>x</td></tr></table>"#,
        case_row("vocative"),
        case_row("accusative"),
    );

    let html = reshape(&table);
    assert_eq!(row_labels(&html), ["vocative", "accusative", "other"]);
}

#[test]
fn test_case_cell_with_extra_text_is_not_a_marker() {
    let table = format!(
        r#"<table class="inflection-table">{}<tr><th>see <span title="nominative case">nom</span></th><td>x</td></tr>{}</table>"#,
        case_row("vocative"),
        case_row("accusative"),
    );

    let html = reshape(&table);
    assert_eq!(row_labels(&html), ["vocative", "see nom", "accusative"]);
}

#[test]
fn test_background_colours_remapped() {
    let html = reshape(
        r#"<table class="inflection-table"><tr>
<th style="background: rgb(84,158,160)">a</th>
<th style="background-color:rgb(64,224,208); color: black">b</th>
<td style="background-color: rgb(1,2,3)">c</td>
<td style="font-weight: bold">d</td>
</tr></table>"#,
    );

    let document = parse_document(&html);
    let styles: Vec<Option<String>> = select_all(&document, "th, td")
        .iter()
        .map(|cell| get_attribute(cell, "style"))
        .collect();
    assert_eq!(
        styles,
        vec![
            Some("background: #aaa;".to_string()),
            Some("background-color: #ccc; color: black;".to_string()),
            Some("background-color: rgb(1,2,3)".to_string()),
            Some("font-weight: bold".to_string()),
        ]
    );
}

#[test]
fn test_line_breaks_become_separators() {
    let html = reshape(
        r#"<table class="inflection-table"><tr><td>rosam<br>rosām<br/>rosā</td></tr></table>"#,
    );
    assert!(html.contains("<td>rosam, rosām, rosā</td>"));
    assert!(!html.contains("<br"));
}

#[test]
fn test_every_table_is_wrapped_but_only_inflection_tables_reshaped() {
    let html = reshape(
        r#"<table class="wikitable"><tr><td>a<br>b</td></tr></table><table class="inflection-table"><tr><td>c</td></tr></table>"#,
    );

    assert_eq!(html.matches(r#"<div class="table-scroll""#).count(), 2);
    assert!(html.contains("a<br>b"));

    let document = parse_document(&html);
    for table in select_all(&document, "table") {
        let parent = table.parent().unwrap();
        assert!(parent.has_class("table-scroll"));
        assert_eq!(get_attribute(&parent, "style").as_deref(), Some("overflow-x: auto;"));
    }
}

#[test]
fn test_remap_keeps_other_declarations_intact() {
    let html = reshape(
        r#"<table class="inflection-table"><tr><th style="background-image: url(data:image/png;base64,AAAA); background: rgb(84,158,160)">a</th></tr></table>"#,
    );

    let document = parse_document(&html);
    let cell = document.select_first("th").unwrap().as_node().clone();
    assert_eq!(
        get_attribute(&cell, "style").as_deref(),
        Some("background-image: url(data:image/png;base64,AAAA); background: #aaa;")
    );
}

#[test]
fn test_nested_table_rows_stay_in_place() {
    let nested = format!(
        r#"<table class="inner">{}</table>"#,
        case_row("accusative")
    );
    let table = format!(
        r#"<table class="inflection-table">{}{}<tr><td>{nested}</td></tr></table>"#,
        case_row("vocative"),
        case_row("nominative"),
    );

    let html = reshape(&table);
    let document = parse_document(&html);
    let outer = document
        .select_first("table.inflection-table")
        .unwrap()
        .as_node()
        .clone();
    let inner = document.select_first("table.inner").unwrap().as_node().clone();

    // The accusative row belongs to the inner table and is not pulled out
    assert_eq!(select_all(&inner, "tr").len(), 1);
    let outer_rows: Vec<String> = select_all(&outer, "tr")
        .iter()
        .filter(|row| {
            row.ancestors()
                .find(|node| node.is_tag("table"))
                .is_some_and(|table| table == outer)
        })
        .map(|row| {
            row.element_children()
                .first()
                .map(TreeNode::text_content)
                .unwrap_or_default()
        })
        .collect();
    assert_eq!(outer_rows[..2], ["nominative", "vocative"]);
}
