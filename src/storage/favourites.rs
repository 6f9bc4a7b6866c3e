//! Favourite entries, kept sorted and unique.

use std::collections::BTreeSet;

use super::store::{KeyValueStore, read_list, write_list};
use crate::error::LexiconResult;
use crate::utils::FAVOURITES_KEY;

pub struct Favourites<'a, K: ?Sized> {
    store: &'a K,
}

impl<'a, K: KeyValueStore + ?Sized> Favourites<'a, K> {
    pub fn new(store: &'a K) -> Self {
        Self { store }
    }

    fn load(&self) -> LexiconResult<BTreeSet<String>> {
        Ok(read_list(self.store, FAVOURITES_KEY)?.into_iter().collect())
    }

    fn save(&self, set: &BTreeSet<String>) -> LexiconResult<()> {
        let list: Vec<String> = set.iter().cloned().collect();
        write_list(self.store, FAVOURITES_KEY, &list)
    }

    pub fn list(&self) -> LexiconResult<Vec<String>> {
        Ok(self.load()?.into_iter().collect())
    }

    pub fn contains(&self, entry: &str) -> LexiconResult<bool> {
        Ok(self.load()?.contains(entry))
    }

    /// Returns whether the entry was newly added
    pub fn add(&self, entry: &str) -> LexiconResult<bool> {
        let mut set = self.load()?;
        if !set.insert(entry.to_string()) {
            return Ok(false);
        }
        self.save(&set)?;
        Ok(true)
    }

    /// Returns whether the entry was present
    pub fn remove(&self, entry: &str) -> LexiconResult<bool> {
        let mut set = self.load()?;
        if !set.remove(entry) {
            return Ok(false);
        }
        self.save(&set)?;
        Ok(true)
    }

    pub fn clear(&self) -> LexiconResult<()> {
        self.store.remove(FAVOURITES_KEY)
    }
}
