//! Latin dictionary lookups against Wiktionary.
//!
//! Fetches rendered entry pages, extracts the Latin section, rewrites its
//! links and reshapes its inflection tables for inline display, and keeps a
//! small amount of user state (last query, history, favourites).

pub mod config;
pub mod display;
pub mod dom;
pub mod error;
pub mod fetch;
pub mod lexicon;
pub mod link_rewriter;
pub mod page_extractor;
pub mod section_extractor;
pub mod storage;
pub mod table_reshaper;
pub mod utils;

pub use config::{LexiconConfig, PipelineConfig};
pub use display::{OutputRegion, Rendering, Ticket};
pub use error::{LexiconError, LexiconResult};
pub use fetch::{CachedSource, PageResponse, PageSource, WikiPage, WiktionaryClient};
pub use lexicon::{DefaultLexicon, Entry, Lexicon, LookupOutcome};
pub use link_rewriter::{LinkAction, LinkClass, LinkRewriter, LinkRules};
pub use page_extractor::{PagePipeline, ProcessedPage};
pub use section_extractor::{Extraction, SectionExtractor};
pub use storage::{Favourites, FileStore, KeyValueStore, MemoryStore, SearchHistory};
pub use table_reshaper::{ReshapeResult, reshape_tables};
