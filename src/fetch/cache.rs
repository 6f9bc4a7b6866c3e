//! LRU cache in front of a page source.

use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::Arc;
use tokio::sync::Mutex;

use super::response::{PageResponse, WikiPage};
use super::{FetchFuture, PageSource};

/// Keeps recently fetched pages so history clicks and repeated
/// cross-references do not hit the network again
///
/// Only found pages are cached; misses and failures are always re-requested.
pub struct CachedSource<S> {
    inner: S,
    /// Requested title → page
    pages: Arc<Mutex<LruCache<String, WikiPage>>>,
}

impl<S: PageSource> CachedSource<S> {
    pub fn new(inner: S, capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            inner,
            pages: Arc::new(Mutex::new(LruCache::new(capacity))),
        }
    }

    pub async fn len(&self) -> usize {
        self.pages.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.pages.lock().await.is_empty()
    }

    pub async fn clear(&self) {
        self.pages.lock().await.clear();
    }
}

impl<S: PageSource> PageSource for CachedSource<S> {
    fn fetch_page<'a>(&'a self, title: &'a str) -> FetchFuture<'a> {
        Box::pin(async move {
            // LruCache::get needs mutable access to update LRU order
            if let Some(page) = self.pages.lock().await.get(title).cloned() {
                log::trace!("Page cache hit for '{title}'");
                return Ok(PageResponse::Found(page));
            }

            let response = self.inner.fetch_page(title).await?;
            if let PageResponse::Found(page) = &response {
                let evicted = self.pages.lock().await.put(title.to_string(), page.clone());
                if evicted.is_some() {
                    log::trace!("Page cache at capacity, evicted an older page");
                }
            }
            Ok(response)
        })
    }
}
