//! Test utilities and fixtures shared by the integration tests

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use latin_lexicon::dom::TreeNode;
use latin_lexicon::fetch::{FetchFuture, PageResponse, PageSource, WikiPage};
use latin_lexicon::LexiconError;
use tokio::sync::Notify;

/// Rendered `rosa` entry in the current Wiktionary markup
///
/// Italian comes before Latin and Portuguese after it; the `*_MARKER` strings
/// must never reach the extracted output.
#[allow(dead_code)]
pub const ROSA_PAGE: &str = r##"<div class="mw-content-ltr mw-parser-output" lang="en" dir="ltr">
<div class="mw-heading mw-heading2"><h2 id="Italian">Italian</h2><span class="mw-editsection"><a href="/w/index.php?title=rosa&amp;action=edit&amp;section=1">edit</a></span></div>
<p>ITALIAN_MARKER <a href="/wiki/rosa#Italian">rosa</a></p>
<hr>
<div class="mw-heading mw-heading2"><h2 id="Latin">Latin</h2><span class="mw-editsection"><a href="/w/index.php?title=rosa&amp;action=edit&amp;section=5">edit</a></span></div>
<div class="mw-heading mw-heading3"><h3 id="Etymology">Etymology</h3><span class="mw-editsection"><a href="/w/index.php?title=rosa&amp;action=edit&amp;section=6">edit</a></span></div>
<p>Probably via Etruscan from <a href="/wiki/Ancient_Greek">Ancient Greek</a> <a href="/wiki/%E1%BF%A5%CF%8C%CE%B4%CE%BF%CE%BD#Ancient_Greek">ῥόδον</a>; compare <a href="/wiki/rhodon#Latin">rhodon</a>.</p>
<div class="mw-heading mw-heading3"><h3 id="Noun">Noun</h3></div>
<p><strong class="Latn headword" lang="la">rosa</strong> f (<i>genitive</i> <b><a href="/wiki/rosae#Latin">rosae</a></b>); <a href="/wiki/Appendix:Latin_first_declension">first declension</a></p>
<ol><li><a href="https://example.org/rose">rose</a> <a href="#cite_note-1">[1]</a> <a href="Special:Search">search</a></li></ol>
<div class="mw-heading mw-heading4"><h4 id="Declension">Declension</h4></div>
<table class="inflection-table">
<tr><th style="background:rgb(84,158,160)">Case</th><th style="background-color: #40E0D0">Singular</th><th>Plural</th></tr>
<tr><th><span title="vocative case">vocative</span></th><td>rosa</td><td>rosae</td></tr>
<tr><th><span title="nominative case">nominative</span></th><td>rosa</td><td>rosae</td></tr>
<tr><th><span title="genitive case">genitive</span></th><td>rosae</td><td>rosārum</td></tr>
<tr><th><span title="accusative case">accusative</span></th><td>rosam<br>rosām</td><td>rosās</td></tr>
</table>
<hr>
<div class="mw-heading mw-heading2"><h2 id="Portuguese">Portuguese</h2></div>
<p>PORTUGUESE_MARKER</p>
</div>"##;

/// Page with no Latin section at all
#[allow(dead_code)]
pub const ENGLISH_ONLY_PAGE: &str = r#"<div class="mw-parser-output">
<h2><span class="mw-headline" id="English">English</span></h2>
<p>An English word.</p>
<h3><span class="mw-headline" id="Noun">Noun</span></h3>
<p>thing</p>
</div>"#;

/// Appendix page body
#[allow(dead_code)]
pub const APPENDIX_PAGE: &str = r#"<div class="mw-parser-output">
<p>Nouns of the <b>first declension</b> end in <i>-a</i>. See <a href="/wiki/rosa#Latin">rosa</a> or <a href="https://en.wikipedia.org/wiki/Latin_declension">Wikipedia</a>.</p>
<hr>
<table class="inflection-table"><tr><th><span title="nominative case">nom</span></th><td>-a</td></tr></table>
</div>"#;

/// Build the JSON body the parse API returns for a page
#[allow(dead_code)]
pub fn parse_response(title: &str, html: &str) -> String {
    serde_json::json!({
        "parse": {
            "title": title,
            "pageid": 1,
            "revid": 100,
            "text": { "*": html }
        }
    })
    .to_string()
}

#[allow(dead_code)]
pub fn missing_response() -> String {
    serde_json::json!({
        "error": {
            "code": "missingtitle",
            "info": "The page you specified doesn't exist.",
            "*": "See https://en.wiktionary.org/w/api.php for API usage."
        },
        "servedby": "mw-api-ext"
    })
    .to_string()
}

/// Canned answer for one title
#[derive(Debug, Clone)]
#[allow(dead_code)]
pub enum Canned {
    Page(String),
    Missing,
    Status(u16, String),
    /// JSON without either `parse` or `error`
    Malformed,
}

/// In-memory page source with optional gates to control completion order
#[derive(Default)]
#[allow(dead_code)]
pub struct StaticSource {
    pages: HashMap<String, Canned>,
    gates: HashMap<String, Arc<Notify>>,
    calls: AtomicUsize,
}

#[allow(dead_code)]
impl StaticSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, title: &str, canned: Canned) -> Self {
        self.pages.insert(title.to_string(), canned);
        self
    }

    /// Make fetches of `title` wait until the returned handle is notified
    pub fn gate(&mut self, title: &str) -> Arc<Notify> {
        let notify = Arc::new(Notify::new());
        self.gates.insert(title.to_string(), notify.clone());
        notify
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl PageSource for StaticSource {
    fn fetch_page<'a>(&'a self, title: &'a str) -> FetchFuture<'a> {
        Box::pin(async move {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if let Some(gate) = self.gates.get(title) {
                gate.notified().await;
            }
            match self.pages.get(title) {
                Some(Canned::Page(html)) => Ok(PageResponse::Found(WikiPage {
                    title: title.to_string(),
                    revid: Some(1),
                    html: html.clone(),
                })),
                Some(Canned::Status(status, body)) => Err(LexiconError::Transport {
                    status: *status,
                    body: body.clone(),
                }),
                Some(Canned::Malformed) => Err(LexiconError::MalformedResponse(
                    "response has neither parse nor error".to_string(),
                )),
                Some(Canned::Missing) | None => Ok(PageResponse::Missing {
                    code: "missingtitle".to_string(),
                    info: String::new(),
                }),
            }
        })
    }
}

/// Browser-free tree node for driving the section extractor directly
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(dead_code)]
pub enum MockNode {
    Text(String),
    Element {
        tag: String,
        attributes: Vec<(String, String)>,
        children: Vec<MockNode>,
    },
}

#[allow(dead_code)]
impl MockNode {
    pub fn text(content: &str) -> Self {
        Self::Text(content.to_string())
    }

    pub fn element(tag: &str, children: Vec<MockNode>) -> Self {
        Self::Element {
            tag: tag.to_string(),
            attributes: Vec::new(),
            children,
        }
    }

    pub fn heading(level: u8, label: &str) -> Self {
        Self::element(&format!("h{level}"), vec![Self::text(label)])
    }

    pub fn paragraph(content: &str) -> Self {
        Self::element("p", vec![Self::text(content)])
    }
}

impl TreeNode for MockNode {
    fn is_element(&self) -> bool {
        matches!(self, Self::Element { .. })
    }

    fn tag(&self) -> Option<String> {
        match self {
            Self::Element { tag, .. } => Some(tag.clone()),
            Self::Text(_) => None,
        }
    }

    fn text_content(&self) -> String {
        match self {
            Self::Text(content) => content.clone(),
            Self::Element { children, .. } => children.iter().map(TreeNode::text_content).collect(),
        }
    }

    fn child_nodes(&self) -> Vec<Self> {
        match self {
            Self::Element { children, .. } => children.clone(),
            Self::Text(_) => Vec::new(),
        }
    }

    fn attribute(&self, name: &str) -> Option<String> {
        match self {
            Self::Element { attributes, .. } => attributes
                .iter()
                .find(|(key, _)| key == name)
                .map(|(_, value)| value.clone()),
            Self::Text(_) => None,
        }
    }
}
