//! Persisted user state: last query, search history and favourites.

pub mod favourites;
pub mod history;
pub mod store;

pub use favourites::Favourites;
pub use history::{SearchHistory, push_bounded};
pub use store::{FileStore, KeyValueStore, MemoryStore};

use crate::error::LexiconResult;
use crate::utils::LAST_QUERY_KEY;

pub fn last_query<K: KeyValueStore + ?Sized>(store: &K) -> LexiconResult<Option<String>> {
    Ok(store.get(LAST_QUERY_KEY)?.filter(|q| !q.trim().is_empty()))
}

pub fn set_last_query<K: KeyValueStore + ?Sized>(store: &K, query: &str) -> LexiconResult<()> {
    store.set(LAST_QUERY_KEY, query)
}
