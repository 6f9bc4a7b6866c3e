//! Bounded search history.

use super::store::{KeyValueStore, read_list, write_list};
use crate::error::LexiconResult;
use crate::utils::HISTORY_KEY;

/// Append `entry`, moving it to the end if already present and evicting
/// from the front once `capacity` is exceeded
pub fn push_bounded(entries: &mut Vec<String>, entry: &str, capacity: usize) {
    entries.retain(|existing| existing != entry);
    entries.push(entry.to_string());
    if entries.len() > capacity {
        let overflow = entries.len() - capacity;
        entries.drain(..overflow);
    }
}

/// Recently searched entries, most recent last
pub struct SearchHistory<'a, K: ?Sized> {
    store: &'a K,
    capacity: usize,
}

impl<'a, K: KeyValueStore + ?Sized> SearchHistory<'a, K> {
    pub fn new(store: &'a K, capacity: usize) -> Self {
        Self { store, capacity }
    }

    pub fn list(&self) -> LexiconResult<Vec<String>> {
        let mut entries = read_list(self.store, HISTORY_KEY)?;
        // A smaller capacity may have been configured since the list was written
        if entries.len() > self.capacity {
            let overflow = entries.len() - self.capacity;
            entries.drain(..overflow);
        }
        Ok(entries)
    }

    pub fn push(&self, entry: &str) -> LexiconResult<()> {
        let mut entries = self.list()?;
        push_bounded(&mut entries, entry, self.capacity);
        write_list(self.store, HISTORY_KEY, &entries)
    }

    /// Returns whether the entry was present
    pub fn remove(&self, entry: &str) -> LexiconResult<bool> {
        let mut entries = self.list()?;
        let before = entries.len();
        entries.retain(|existing| existing != entry);
        if entries.len() == before {
            return Ok(false);
        }
        write_list(self.store, HISTORY_KEY, &entries)?;
        Ok(true)
    }

    pub fn clear(&self) -> LexiconResult<()> {
        self.store.remove(HISTORY_KEY)
    }
}
