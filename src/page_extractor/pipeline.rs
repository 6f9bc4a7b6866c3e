//! Single-pass extraction pipeline.
//!
//! raw HTML → document → container → section extraction → cleanup →
//! link rewriting → table reshaping → serialized tree.

use kuchiki::NodeRef;

use super::cleanup::remove_chrome;
use super::schema::ProcessedPage;
use crate::config::PipelineConfig;
use crate::dom::{TreeNode, deep_clone, new_element_with, parse_document, serialize_node};
use crate::link_rewriter::{LinkRewriter, LinkRules};
use crate::section_extractor::{SectionExtractor, materialize};
use crate::table_reshaper::reshape_tables;

/// Parameterized pipeline shared by entry and appendix call sites
#[derive(Debug, Clone)]
pub struct PagePipeline {
    config: PipelineConfig,
    extractor: SectionExtractor,
    entry_links: LinkRewriter,
    appendix_links: LinkRewriter,
}

impl PagePipeline {
    #[must_use]
    pub fn new(config: PipelineConfig, site_origin: &str) -> Self {
        Self {
            extractor: SectionExtractor::from_config(&config),
            entry_links: LinkRewriter::new(LinkRules::for_entries(&config, site_origin)),
            appendix_links: LinkRewriter::new(LinkRules::for_appendix(site_origin)),
            config,
        }
    }

    #[must_use]
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Extract and clean the target-language section of an entry page
    ///
    /// An empty result means the page has no such section.
    pub fn process_entry(&self, html: &str) -> ProcessedPage {
        let document = parse_document(html);
        let container = find_container(&document);

        let extraction = self.extractor.extract_from(&container);
        if extraction.is_empty() {
            log::debug!(
                "No '{}' content (heading matched: {})",
                self.config.target_label,
                extraction.matched
            );
            return ProcessedPage::default();
        }

        let tree = materialize(&extraction);
        let removed_chrome = remove_chrome(&tree);
        let links = self.entry_links.rewrite_links(&tree);
        let tables = reshape_tables(&tree);

        ProcessedPage {
            html: serialize_node(&tree),
            element_count: extraction.element_count(),
            subsection_count: extraction.subsections.len(),
            removed_chrome,
            links,
            tables,
        }
    }

    /// Clean a whole appendix page with the reduced link rules
    pub fn process_appendix(&self, html: &str) -> ProcessedPage {
        let document = parse_document(html);
        let container = find_container(&document);

        let tree = new_element_with("div", &[("class", "appendix")]);
        let mut element_count = 0;
        for child in container.child_nodes() {
            if !child.is_element() || child.is_tag("hr") {
                continue;
            }
            if let Some(copy) = deep_clone(&child) {
                tree.append(copy);
                element_count += 1;
            }
        }
        if element_count == 0 {
            return ProcessedPage::default();
        }

        let removed_chrome = remove_chrome(&tree);
        let links = self.appendix_links.rewrite_links(&tree);
        let tables = reshape_tables(&tree);

        ProcessedPage {
            html: serialize_node(&tree),
            element_count,
            subsection_count: 1,
            removed_chrome,
            links,
            tables,
        }
    }
}

/// Node whose children are the page's flat section run
///
/// The API wraps rendered pages in `.mw-parser-output`; bare fragments fall
/// back to `<body>`.
fn find_container(document: &NodeRef) -> NodeRef {
    if let Ok(output) = document.select_first(".mw-parser-output") {
        return output.as_node().clone();
    }
    match document.select_first("body") {
        Ok(body) => body.as_node().clone(),
        Err(()) => document.clone(),
    }
}
