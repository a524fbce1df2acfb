//! # Storage Layer
//!
//! The [`CollectionStore`] trait maps between persisted collections and the
//! in-memory [`Collection`] type.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage, one directory per collection
//! - [`memory::InMemoryStore`]: no persistence, used by tests
//!
//! ## Storage Format
//!
//! For `FileStore`:
//! ```text
//! CollectionsData/
//! ├── config.json
//! ├── My_Coins_/
//! │   └── items.txt      # one item per line, see `format`
//! └── Stamps/
//!     └── items.txt
//! ```
//!
//! The directory name is the sanitized collection name, and on load it is used
//! as the display name as-is. A collection named `"My Coins!"` therefore comes
//! back as `"My_Coins_"`.
//!
//! Every write replaces the whole `items.txt`. There is no locking and no
//! partial-write recovery: last write wins.
//!
//! Export and import work on arbitrary paths with the same line format and
//! are shared by every backend through default methods.

use crate::error::{Result, TroveError};
use crate::format::{format_items, parse_items};
use crate::model::{sanitize_name, Collection};
use std::path::{Path, PathBuf};

pub mod fs;
pub mod memory;

pub const ITEMS_FILENAME: &str = "items.txt";

/// Abstract interface for collection storage.
pub trait CollectionStore {
    /// Every stored collection, in backend enumeration order
    fn load_all(&self) -> Result<Vec<Collection>>;

    /// Replace the stored items of a collection, creating it if needed
    fn save(&mut self, collection: &Collection) -> Result<()>;

    /// Remove a collection and everything stored for it. Missing is not an error.
    fn delete(&mut self, name: &str) -> Result<()>;

    /// The items file of a collection (for file-based stores)
    fn collection_path(&self, name: &str) -> Result<PathBuf>;

    /// Write a collection to an arbitrary file using the storage line format
    fn export_to(&self, collection: &Collection, path: &Path) -> Result<()> {
        storage_key(&collection.name)?;
        std::fs::write(path, format_items(&collection.items))?;
        log::debug!(
            "exported {} items of {:?} to {}",
            collection.items.len(),
            collection.name,
            path.display()
        );
        Ok(())
    }

    /// Read a collection from an arbitrary file
    ///
    /// The result is named after the sanitized `name`. Fails when the file
    /// can't be read or when no line in it parses.
    fn import_from(&self, path: &Path, name: &str) -> Result<Collection> {
        let key = storage_key(name)?;
        let content = std::fs::read_to_string(path)?;
        let parsed = parse_items(&content, &path.display().to_string());
        if parsed.items.is_empty() {
            return Err(TroveError::NothingToImport(path.display().to_string()));
        }
        log::debug!(
            "parsed {} items from {} ({} skipped)",
            parsed.items.len(),
            path.display(),
            parsed.skipped
        );
        Ok(Collection::with_items(key, parsed.items))
    }
}

/// The sanitized key for `name`, or `InvalidName` when there is none.
pub fn storage_key(name: &str) -> Result<String> {
    let key = sanitize_name(name);
    if key.is_empty() {
        return Err(TroveError::InvalidName(name.to_string()));
    }
    Ok(key)
}

#[cfg(test)]
mod tests {
    use super::memory::InMemoryStore;
    use super::*;
    use crate::model::Item;
    use tempfile::TempDir;

    #[test]
    fn storage_key_rejects_blank() {
        assert!(matches!(storage_key("  "), Err(TroveError::InvalidName(_))));
        assert_eq!(storage_key("My Coins!").unwrap(), "My_Coins_");
    }

    #[test]
    fn export_then_import_keeps_items() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.txt");
        let store = InMemoryStore::new();
        let collection = Collection::with_items(
            "Coins",
            vec![
                Item::named("Penny"),
                Item {
                    sold: true,
                    ..Item::named("Dime")
                },
            ],
        );

        store.export_to(&collection, &path).unwrap();
        let imported = store.import_from(&path, "Coins").unwrap();

        assert_eq!(imported, collection);
    }

    #[test]
    fn import_uses_sanitized_name() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("in.txt");
        std::fs::write(&path, "Penny\n").unwrap();

        let imported = InMemoryStore::new()
            .import_from(&path, "Old Coins!")
            .unwrap();
        assert_eq!(imported.name, "Old_Coins_");
    }

    #[test]
    fn import_missing_file_fails() {
        let dir = TempDir::new().unwrap();
        let result = InMemoryStore::new().import_from(&dir.path().join("nope.txt"), "x");
        assert!(matches!(result, Err(TroveError::Io(_))));
    }

    #[test]
    fn import_without_valid_lines_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.txt");
        std::fs::write(&path, "a||b\n\nc||d||e\n").unwrap();

        let result = InMemoryStore::new().import_from(&path, "x");
        assert!(matches!(result, Err(TroveError::NothingToImport(_))));
    }

    #[test]
    fn import_blank_name_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("in.txt");
        std::fs::write(&path, "Penny\n").unwrap();

        let result = InMemoryStore::new().import_from(&path, " ");
        assert!(matches!(result, Err(TroveError::InvalidName(_))));
    }

    #[test]
    fn export_blank_name_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.txt");
        let result = InMemoryStore::new().export_to(&Collection::new(""), &path);
        assert!(matches!(result, Err(TroveError::InvalidName(_))));
        assert!(!path.exists());
    }
}
