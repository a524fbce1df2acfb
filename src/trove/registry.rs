//! # Collection Registry
//!
//! The set of collections for a session. The registry owns every
//! [`Collection`] record; callers get clones back from mutations rather than
//! references into shared state, so a view never holds a stale alias.
//!
//! Collections are looked up by name: the exact display name first, then the
//! sanitized key, ignoring case. Duplicate detection is case-insensitive and
//! also catches names that would land in the same directory
//! (`"My Coins!"` and `"My Coins?"` both map to `My_Coins_`).
//!
//! The registry does no I/O; `commands` keeps it in sync with the store.

use crate::error::{Result, TroveError};
use crate::model::{names_match, sanitize_name, Collection};

#[derive(Debug, Default)]
pub struct Registry {
    collections: Vec<Collection>,
}

impl Registry {
    /// Builds the registry from freshly loaded collections, moving sold
    /// items to the end of each one.
    pub fn new(mut collections: Vec<Collection>) -> Self {
        for collection in &mut collections {
            collection.order_sold_last();
        }
        Self { collections }
    }

    pub fn collections(&self) -> &[Collection] {
        &self.collections
    }

    pub fn len(&self) -> usize {
        self.collections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.collections.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Collection> {
        self.position(name).map(|i| &self.collections[i])
    }

    /// The existing collection that `name` would clash with, if any.
    pub fn find_duplicate(&self, name: &str) -> Option<&Collection> {
        self.duplicates(name).into_iter().next()
    }

    /// Every existing collection that `name` would clash with.
    ///
    /// Usually one at most, but a data directory holding both `Coins/` and
    /// `coins/` loads as two collections that clash with each other.
    pub fn duplicates(&self, name: &str) -> Vec<&Collection> {
        let key = sanitize_name(name);
        self.collections
            .iter()
            .filter(|c| names_match(&c.name, name) || c.key().eq_ignore_ascii_case(&key))
            .collect()
    }

    /// Adds a collection, refusing names that clash with an existing one.
    pub fn insert(&mut self, collection: Collection) -> Result<Collection> {
        if let Some(existing) = self.find_duplicate(&collection.name) {
            return Err(TroveError::DuplicateName(existing.name.clone()));
        }
        self.collections.push(collection.clone());
        Ok(collection)
    }

    pub fn remove(&mut self, name: &str) -> Option<Collection> {
        self.position(name).map(|i| self.collections.remove(i))
    }

    /// Applies `change` to the named collection and returns the updated record.
    ///
    /// When `change` fails the collection is left as it was.
    pub fn update<F>(&mut self, name: &str, change: F) -> Result<Collection>
    where
        F: FnOnce(&mut Collection) -> Result<()>,
    {
        let i = self
            .position(name)
            .ok_or_else(|| TroveError::CollectionNotFound(name.to_string()))?;

        let mut draft = self.collections[i].clone();
        change(&mut draft)?;
        self.collections[i] = draft.clone();
        Ok(draft)
    }

    fn position(&self, name: &str) -> Option<usize> {
        if let Some(i) = self.collections.iter().position(|c| c.name == name) {
            return Some(i);
        }
        let key = sanitize_name(name);
        if key.is_empty() {
            return None;
        }
        self.collections
            .iter()
            .position(|c| c.key().eq_ignore_ascii_case(&key))
    }
}
