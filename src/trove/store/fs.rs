use super::{storage_key, CollectionStore, ITEMS_FILENAME};
use crate::error::Result;
use crate::format::{format_items, parse_items};
use crate::model::Collection;
use std::fs;
use std::path::{Path, PathBuf};

pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn collection_dir(&self, name: &str) -> Result<PathBuf> {
        Ok(self.root.join(storage_key(name)?))
    }

    fn load_collection(&self, dir: &Path, name: String) -> Collection {
        let items_file = dir.join(ITEMS_FILENAME);
        if !items_file.exists() {
            return Collection::new(name);
        }

        match fs::read_to_string(&items_file) {
            Ok(content) => {
                let parsed = parse_items(&content, &items_file.display().to_string());
                Collection::with_items(name, parsed.items)
            }
            Err(e) => {
                log::error!("failed to read {}: {}", items_file.display(), e);
                Collection::new(name)
            }
        }
    }
}

impl CollectionStore for FileStore {
    fn load_all(&self) -> Result<Vec<Collection>> {
        if !self.root.exists() {
            return Ok(Vec::new());
        }

        let mut collections = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    log::warn!("skipping unreadable entry in {}: {}", self.root.display(), e);
                    continue;
                }
            };
            let path = entry.path();
            if !path.is_dir() {
                continue;
            }

            let name = match entry.file_name().to_str() {
                Some(name) if !name.trim().is_empty() => name.to_string(),
                _ => {
                    log::warn!("skipping directory without a valid name: {}", path.display());
                    continue;
                }
            };

            collections.push(self.load_collection(&path, name));
        }

        Ok(collections)
    }

    fn save(&mut self, collection: &Collection) -> Result<()> {
        let dir = self.collection_dir(&collection.name)?;
        fs::create_dir_all(&dir)?;
        fs::write(dir.join(ITEMS_FILENAME), format_items(&collection.items))?;
        log::debug!(
            "saved {:?} ({} items) to {}",
            collection.name,
            collection.items.len(),
            dir.display()
        );
        Ok(())
    }

    fn delete(&mut self, name: &str) -> Result<()> {
        let dir = self.collection_dir(name)?;
        if dir.exists() {
            fs::remove_dir_all(&dir)?;
            log::debug!("removed {}", dir.display());
        }
        Ok(())
    }

    fn collection_path(&self, name: &str) -> Result<PathBuf> {
        Ok(self.collection_dir(name)?.join(ITEMS_FILENAME))
    }
}
