use latin_lexicon::dom::{parse_document, select_all, serialize_node};
use latin_lexicon::link_rewriter::{
    LinkAction, LinkClass, LinkRewriter, LinkRules, classify_href,
};
use latin_lexicon::PipelineConfig;

const ORIGIN: &str = "https://en.wiktionary.org";

fn entry_rules() -> LinkRules {
    LinkRules::for_entries(&PipelineConfig::default(), ORIGIN)
}

fn expected_classes() -> Vec<(&'static str, LinkClass)> {
    vec![
        ("https://example.org/x", LinkClass::External),
        (
            "/wiki/Puella#Latin",
            LinkClass::CrossReference {
                word: "Puella".to_string(),
            },
        ),
        (
            "/wiki/Appendix:Latin_nouns",
            LinkClass::Appendix {
                name: "Latin nouns".to_string(),
            },
        ),
        (
            "/wiki/Other_page",
            LinkClass::SiteRelative {
                absolute: "https://en.wiktionary.org/wiki/Other_page".to_string(),
            },
        ),
        ("#note1", LinkClass::Ignored),
        ("javascript:void(0)", LinkClass::Ignored),
        ("relative/no-slash", LinkClass::Downgrade),
        ("", LinkClass::Downgrade),
    ]
}

#[test]
fn test_representative_hrefs_classify_by_table() {
    let rules = entry_rules();
    for (href, expected) in expected_classes() {
        assert_eq!(classify_href(href, &rules), expected, "href {href:?}");
    }
}

#[test]
fn test_classification_ignores_traversal_order() {
    let rules = entry_rules();
    let forward: Vec<LinkClass> = expected_classes()
        .iter()
        .map(|(href, _)| classify_href(href, &rules))
        .collect();
    let mut backward: Vec<LinkClass> = expected_classes()
        .iter()
        .rev()
        .map(|(href, _)| classify_href(href, &rules))
        .collect();
    backward.reverse();
    assert_eq!(forward, backward);
}

#[test]
fn test_cross_reference_needs_matching_label() {
    let rules = entry_rules();
    assert!(matches!(
        classify_href("/wiki/puella#Italian", &rules),
        LinkClass::SiteRelative { .. }
    ));
    assert!(matches!(
        classify_href("/wiki/Category:Latin_nouns#Latin", &rules),
        LinkClass::SiteRelative { .. }
    ));
    assert_eq!(
        classify_href("/wiki/r%C5%8Dsa#Latin", &rules),
        LinkClass::CrossReference {
            word: "rōsa".to_string()
        }
    );
}

#[test]
fn test_appendix_rule_follows_config() {
    let config = PipelineConfig {
        enable_cross_reference_appendix: false,
        ..PipelineConfig::default()
    };
    let rules = LinkRules::for_entries(&config, ORIGIN);
    assert!(matches!(
        classify_href("/wiki/Appendix:Latin_nouns", &rules),
        LinkClass::SiteRelative { .. }
    ));
}

#[test]
fn test_reduced_rules_never_downgrade() {
    let rules = LinkRules::for_appendix(ORIGIN);
    assert_eq!(classify_href("relative/no-slash", &rules), LinkClass::Ignored);
    assert!(matches!(
        classify_href("/wiki/Puella#Latin", &rules),
        LinkClass::SiteRelative { .. }
    ));
    assert_eq!(classify_href("http://example.org", &rules), LinkClass::External);
}

#[test]
fn test_rewrite_applies_each_class() {
    let document = parse_document(
        r##"<div id="root">
<a href="https://example.org/x">ext</a>
<a href="/wiki/Puella#Latin">puella</a>
<a href="/wiki/Appendix:Latin_nouns">nouns</a>
<a href="/wiki/Other_page">other</a>
<a href="#note1">note</a>
<a>no <i>href</i></a>
</div>"##,
    );
    let root = document.select_first("#root").unwrap().as_node().clone();

    let result = LinkRewriter::new(entry_rules()).rewrite_links(&root);
    assert_eq!(result.rewrites.len(), 6);
    assert_eq!(
        result.actions(),
        vec![
            LinkAction::Lookup {
                word: "Puella".to_string()
            },
            LinkAction::OpenAppendix {
                name: "Latin nouns".to_string()
            },
        ]
    );

    let external = root.select_first(r#"a[href="https://example.org/x"]"#).unwrap();
    {
        let attributes = external.attributes.borrow();
        assert_eq!(attributes.get("target"), Some("_blank"));
        assert_eq!(attributes.get("rel"), Some("noopener noreferrer"));
        assert_eq!(attributes.get("class"), Some("external"));
    }

    let html = serialize_node(&root);
    assert!(html.contains(r#"data-lookup="Puella""#));
    assert!(html.contains(r#"data-appendix="Latin nouns""#));
    assert!(html.contains(r#"href="https://en.wiktionary.org/wiki/Other_page""#));
    assert!(html.contains(r##"href="#note1""##));
    // The href-less link is replaced by a span carrying the same content
    assert!(html.contains("<span>no <i>href</i></span>"));

    let links = select_all(&root, "a");
    assert_eq!(links.len(), 5);
    let searchable = select_all(&root, "a.searchable");
    assert_eq!(searchable.len(), 1);
    let information = select_all(&root, "a.information");
    assert_eq!(information.len(), 1);
}

#[test]
fn test_actions_are_captured_per_link() {
    let document = parse_document(
        r#"<div id="root">
<a href="/wiki/rosa#Latin">rosa</a>
<a href="/wiki/rosae#Latin">rosae</a>
<a href="/wiki/rosa#Latin">rosa again</a>
</div>"#,
    );
    let root = document.select_first("#root").unwrap().as_node().clone();
    let result = LinkRewriter::new(entry_rules()).rewrite_links(&root);

    let words: Vec<Option<LinkAction>> = result.rewrites.iter().map(|r| r.action()).collect();
    assert_eq!(
        words,
        vec![
            Some(LinkAction::Lookup { word: "rosa".to_string() }),
            Some(LinkAction::Lookup { word: "rosae".to_string() }),
            Some(LinkAction::Lookup { word: "rosa".to_string() }),
        ]
    );
    assert_eq!(result.actions().len(), 2);
}
