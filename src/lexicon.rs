//! Lookup service tying together fetching, processing, persistence and display.
//!
//! A [`Lexicon`] owns a [`PageSource`], a [`KeyValueStore`] and the shared
//! [`OutputRegion`]. User actions (search submissions, history clicks and
//! cross-reference clicks) all go through [`Lexicon::search`] or
//! [`Lexicon::activate`]; each takes a ticket from the output region before
//! fetching so overlapping requests resolve in issue order.

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::LexiconConfig;
use crate::display::{OutputRegion, Rendering, Ticket};
use crate::error::{LexiconError, LexiconResult};
use crate::fetch::{CachedSource, PageResponse, PageSource, WikiPage, WiktionaryClient};
use crate::link_rewriter::LinkAction;
use crate::page_extractor::{PagePipeline, ProcessedPage};
use crate::storage::{self, Favourites, FileStore, KeyValueStore, SearchHistory};

/// Prefix of appendix page titles
const APPENDIX_NAMESPACE: &str = "Appendix:";

/// A successfully processed page
#[derive(Debug, Clone, Serialize)]
pub struct Entry {
    /// What the user asked for; shown as the entry heading
    pub label: String,
    /// Page title reported by the API
    pub title: String,
    pub revid: Option<u64>,
    pub page: ProcessedPage,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum LookupOutcome {
    Found(Entry),
    /// The page is missing or has no target-language content
    NotFound { query: String },
    /// Nothing was requested
    Idle,
}

impl LookupOutcome {
    #[must_use]
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// Rendering shown for this outcome
    #[must_use]
    pub fn rendering(&self, target_label: &str) -> Rendering {
        match self {
            Self::Found(entry) => Rendering::Entry {
                label: entry.label.clone(),
                html: entry.page.html.clone(),
            },
            Self::NotFound { query } => Rendering::NotFound {
                query: query.clone(),
                target_label: target_label.to_string(),
            },
            Self::Idle => Rendering::Idle,
        }
    }
}

/// Production lexicon: cached HTTP client and on-disk state
pub type DefaultLexicon = Lexicon<CachedSource<WiktionaryClient>, FileStore>;

pub struct Lexicon<S, K> {
    source: S,
    store: K,
    pipeline: PagePipeline,
    output: OutputRegion,
    history_capacity: usize,
}

impl DefaultLexicon {
    /// Build the production stack described by `config`
    pub fn from_config(config: &LexiconConfig) -> LexiconResult<Self> {
        let client = WiktionaryClient::from_config(config)?;
        let source = CachedSource::new(client, config.cache_capacity());
        let store = FileStore::open(config.state_path())?;
        Ok(Self::new(source, store, config))
    }
}

impl<S: PageSource, K: KeyValueStore> Lexicon<S, K> {
    pub fn new(source: S, store: K, config: &LexiconConfig) -> Self {
        Self {
            source,
            store,
            pipeline: PagePipeline::new(config.pipeline().clone(), config.site_origin()),
            output: OutputRegion::new(),
            history_capacity: config.history_capacity(),
        }
    }

    #[must_use]
    pub fn output(&self) -> &OutputRegion {
        &self.output
    }

    #[must_use]
    pub fn pipeline(&self) -> &PagePipeline {
        &self.pipeline
    }

    pub fn store(&self) -> &K {
        &self.store
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn history(&self) -> SearchHistory<'_, K> {
        SearchHistory::new(&self.store, self.history_capacity)
    }

    pub fn favourites(&self) -> Favourites<'_, K> {
        Favourites::new(&self.store)
    }

    fn target_label(&self) -> &str {
        &self.pipeline.config().target_label
    }

    /// Look up `query` and show the result
    ///
    /// Fetch and decode failures are shown in the output region and also
    /// returned as errors. Failing to persist the query or history only logs
    /// a warning.
    pub async fn search(&self, query: &str) -> LexiconResult<LookupOutcome> {
        let ticket = self.output.begin();
        let query = query.trim();
        if query.is_empty() {
            self.output.present(ticket, Rendering::Idle);
            return Ok(LookupOutcome::Idle);
        }

        info!(query, ticket = ticket.sequence(), "Looking up entry");
        if let Err(e) = storage::set_last_query(&self.store, query) {
            warn!("Failed to save last query '{query}': {e}");
        }

        let page = match self.fetch(ticket, query).await? {
            Some(page) => page,
            None => return Ok(self.not_found(ticket, query)),
        };

        let processed = self.pipeline.process_entry(&page.html);
        if processed.is_empty() {
            return Ok(self.not_found(ticket, query));
        }

        if let Err(e) = self.history().push(query) {
            warn!("Failed to record '{query}' in history: {e}");
        }

        debug!(
            query,
            elements = processed.element_count,
            links = processed.links.rewrites.len(),
            "Entry processed"
        );
        let outcome = LookupOutcome::Found(Entry {
            label: query.to_string(),
            title: page.title,
            revid: page.revid,
            page: processed,
        });
        self.output.present(ticket, outcome.rendering(self.target_label()));
        Ok(outcome)
    }

    /// Fetch and clean an appendix page
    ///
    /// Appendix pages go to a secondary surface, so the output region is
    /// left untouched.
    pub async fn open_appendix(&self, name: &str) -> LexiconResult<LookupOutcome> {
        let name = name.trim();
        if name.is_empty() {
            return Ok(LookupOutcome::Idle);
        }

        let title = format!("{APPENDIX_NAMESPACE}{name}");
        info!(title = %title, "Opening appendix");

        let page = match self.source.fetch_page(&title).await? {
            PageResponse::Found(page) => page,
            PageResponse::Missing { code, .. } => {
                debug!(title = %title, code = %code, "Appendix not found");
                return Ok(LookupOutcome::NotFound {
                    query: name.to_string(),
                });
            }
        };

        let processed = self.pipeline.process_appendix(&page.html);
        if processed.is_empty() {
            return Ok(LookupOutcome::NotFound {
                query: name.to_string(),
            });
        }

        Ok(LookupOutcome::Found(Entry {
            label: name.to_string(),
            title: page.title,
            revid: page.revid,
            page: processed,
        }))
    }

    /// Run an action captured from a rewritten link
    pub async fn activate(&self, action: &LinkAction) -> LexiconResult<LookupOutcome> {
        match action {
            LinkAction::Lookup { word } => self.search(word).await,
            LinkAction::OpenAppendix { name } => self.open_appendix(name).await,
        }
    }

    /// Startup behaviour: repeat the last lookup, or show the idle message
    pub async fn restore(&self) -> LexiconResult<LookupOutcome> {
        match storage::last_query(&self.store)? {
            Some(query) => self.search(&query).await,
            None => {
                let ticket = self.output.begin();
                self.output.present(ticket, Rendering::Idle);
                Ok(LookupOutcome::Idle)
            }
        }
    }

    /// `Ok(None)` when the API reports the page as missing
    async fn fetch(&self, ticket: Ticket, query: &str) -> LexiconResult<Option<WikiPage>> {
        match self.source.fetch_page(query).await {
            Ok(PageResponse::Found(page)) => Ok(Some(page)),
            Ok(PageResponse::Missing { code, info }) => {
                debug!(query, code = %code, info = %info, "API reported missing page");
                Ok(None)
            }
            Err(e) => {
                self.output.present(ticket, error_rendering(&e));
                Err(e)
            }
        }
    }

    fn not_found(&self, ticket: Ticket, query: &str) -> LookupOutcome {
        info!(query, "No entry found");
        let outcome = LookupOutcome::NotFound {
            query: query.to_string(),
        };
        self.output.present(ticket, outcome.rendering(self.target_label()));
        outcome
    }
}

fn error_rendering(err: &LexiconError) -> Rendering {
    let body = match err.response_body() {
        Some(body) => body.to_string(),
        None => err.to_string(),
    };
    Rendering::RequestError { body }
}
