use super::{storage_key, CollectionStore, ITEMS_FILENAME};
use crate::error::Result;
use crate::model::Collection;
use std::path::PathBuf;

/// In-memory storage for testing.
///
/// Mirrors what a reload from `FileStore` would give back: collections come
/// back under their sanitized key and items without a name are not kept.
#[derive(Default)]
pub struct InMemoryStore {
    collections: Vec<Collection>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CollectionStore for InMemoryStore {
    fn load_all(&self) -> Result<Vec<Collection>> {
        Ok(self.collections.clone())
    }

    fn save(&mut self, collection: &Collection) -> Result<()> {
        let key = storage_key(&collection.name)?;
        let items = collection
            .items
            .iter()
            .filter(|i| i.has_name())
            .cloned()
            .collect();
        let stored = Collection::with_items(key.clone(), items);

        match self.collections.iter_mut().find(|c| c.name == key) {
            Some(existing) => *existing = stored,
            None => self.collections.push(stored),
        }
        Ok(())
    }

    fn delete(&mut self, name: &str) -> Result<()> {
        let key = storage_key(name)?;
        self.collections.retain(|c| c.name != key);
        Ok(())
    }

    fn collection_path(&self, name: &str) -> Result<PathBuf> {
        Ok(PathBuf::from("memory")
            .join(storage_key(name)?)
            .join(ITEMS_FILENAME))
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::Item;
    use rust_decimal::Decimal;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_collection(mut self, name: &str, item_names: &[&str]) -> Self {
            let items = item_names.iter().map(|n| Item::named(*n)).collect();
            self.store
                .save(&Collection::with_items(name, items))
                .unwrap();
            self
        }

        pub fn with_priced_items(mut self, name: &str, count: usize) -> Self {
            let items = (1..=count)
                .map(|i| Item {
                    price: Decimal::new(i as i64 * 100, 2),
                    status: Some("new".to_string()),
                    satisfaction: 5,
                    ..Item::named(format!("Item {}", i))
                })
                .collect();
            self.store
                .save(&Collection::with_items(name, items))
                .unwrap();
            self
        }
    }
}
