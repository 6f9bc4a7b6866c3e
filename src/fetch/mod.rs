//! Page fetching.
//!
//! [`PageSource`] is the seam between the lexicon and the network: the
//! production [`WiktionaryClient`] talks to the action API, tests plug in
//! canned pages, and [`CachedSource`] adds an LRU cache in front of either.

pub mod cache;
pub mod client;
pub mod response;

pub use cache::CachedSource;
pub use client::WiktionaryClient;
pub use response::{PageResponse, WikiPage};

use futures::future::BoxFuture;

use crate::error::LexiconResult;

/// Boxed future returned by [`PageSource::fetch_page`]
pub type FetchFuture<'a> = BoxFuture<'a, LexiconResult<PageResponse>>;

/// Anything that can produce the rendered HTML of a wiki page by title
pub trait PageSource: Send + Sync {
    fn fetch_page<'a>(&'a self, title: &'a str) -> FetchFuture<'a>;
}

impl<S: PageSource + ?Sized> PageSource for std::sync::Arc<S> {
    fn fetch_page<'a>(&'a self, title: &'a str) -> FetchFuture<'a> {
        (**self).fetch_page(title)
    }
}
