use crate::commands::{CmdMessage, CmdResult, Confirm};
use crate::error::Result;
use crate::registry::Registry;
use crate::store::CollectionStore;
use std::path::Path;

use super::helpers::{discard, persist};

/// Reads `path` into a new collection named `name`.
///
/// When the name is taken the user is asked once whether to overwrite. Every
/// collection the name clashes with is removed before the imported one is
/// written; a refusal leaves all of them in place. A file that
/// can't be read or holds no valid line leaves everything untouched and is
/// reported as an error message.
pub fn run<S: CollectionStore>(
    registry: &mut Registry,
    store: &mut S,
    confirm: &mut dyn Confirm,
    path: &Path,
    name: &str,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    let imported = match store.import_from(path, name) {
        Ok(collection) => collection,
        Err(e) => {
            log::warn!("import of {} as {:?} failed: {}", path.display(), name, e);
            result.add_message(CmdMessage::error(format!(
                "Failed to import {}: {}",
                path.display(),
                e
            )));
            return Ok(result);
        }
    };

    let clashes: Vec<String> = registry
        .duplicates(&imported.name)
        .into_iter()
        .map(|c| c.name.clone())
        .collect();
    if !clashes.is_empty() {
        let question = if clashes.len() == 1 {
            format!("Collection \"{}\" already exists. Overwrite it?", clashes[0])
        } else {
            format!(
                "Collections {} already exist. Overwrite all of them?",
                quoted_list(&clashes)
            )
        };
        if !confirm.confirm(&question) {
            result.add_message(CmdMessage::info("Import cancelled."));
            return Ok(result);
        }
        for name in &clashes {
            registry.remove(name);
            discard(store, name, &mut result);
        }
    }

    let collection = registry.insert(imported)?;
    if persist(store, &collection, &mut result) {
        result.add_message(CmdMessage::success(format!(
            "Imported {} items into {}",
            collection.items.len(),
            collection.name
        )));
    }
    Ok(result.with_affected_collection(collection))
}

fn quoted_list(names: &[String]) -> String {
    names
        .iter()
        .map(|n| format!("\"{}\"", n))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{create, AssumeNo, AssumeYes};
    use crate::model::{Collection, Item};
    use crate::store::memory::InMemoryStore;
    use std::fs;
    use tempfile::TempDir;

    fn source(dir: &TempDir, content: &str) -> std::path::PathBuf {
        let path = dir.path().join("import.txt");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn imports_valid_lines_only() {
        let dir = TempDir::new().unwrap();
        let path = source(
            &dir,
            "Penny||0.01||used||6||old||false\nbad||line||x\nDime\n",
        );
        let mut registry = Registry::default();
        let mut store = InMemoryStore::new();

        let result = run(&mut registry, &mut store, &mut AssumeNo, &path, "Coins").unwrap();

        assert!(result.succeeded());
        let coins = registry.get("Coins").unwrap();
        let names: Vec<_> = coins.items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Penny", "Dime"]);
        assert_eq!(store.load_all().unwrap()[0].items.len(), 2);
    }

    #[test]
    fn name_is_sanitized() {
        let dir = TempDir::new().unwrap();
        let path = source(&dir, "Penny\n");
        let mut registry = Registry::default();
        let mut store = InMemoryStore::new();

        run(&mut registry, &mut store, &mut AssumeNo, &path, "Old Coins!").unwrap();

        assert_eq!(registry.collections()[0].name, "Old_Coins_");
    }

    #[test]
    fn overwrite_when_confirmed() {
        let dir = TempDir::new().unwrap();
        let path = source(&dir, "Nickel\n");
        let mut store = InMemoryStore::new();
        store
            .save(&Collection::with_items("Coins", vec![Item::named("Penny")]))
            .unwrap();
        let mut registry = Registry::new(store.load_all().unwrap());

        run(&mut registry, &mut store, &mut AssumeYes, &path, "coins").unwrap();

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("coins").unwrap().items, vec![Item::named("Nickel")]);
        assert_eq!(store.load_all().unwrap()[0].items, vec![Item::named("Nickel")]);
    }

    #[test]
    fn overwrite_replaces_every_clash() {
        let dir = TempDir::new().unwrap();
        let path = source(&dir, "Nickel\n");
        let mut registry = Registry::new(vec![
            Collection::with_items("Coins", vec![Item::named("Penny")]),
            Collection::with_items("coins", vec![Item::named("Dime")]),
        ]);
        let mut store = InMemoryStore::new();

        let result = run(&mut registry, &mut store, &mut AssumeYes, &path, "COINS").unwrap();

        assert!(result.succeeded());
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.collections()[0].name, "COINS");
        assert_eq!(registry.collections()[0].items, vec![Item::named("Nickel")]);
    }

    #[test]
    fn declined_overwrite_changes_nothing() {
        let dir = TempDir::new().unwrap();
        let path = source(&dir, "Nickel\n");
        let mut registry = Registry::default();
        let mut store = InMemoryStore::new();
        create::run(&mut registry, &mut store, "Coins").unwrap();

        let result = run(&mut registry, &mut store, &mut AssumeNo, &path, "Coins").unwrap();

        assert!(result.affected_collections.is_empty());
        assert!(registry.get("Coins").unwrap().items.is_empty());
    }

    #[test]
    fn missing_file_reports_failure() {
        let dir = TempDir::new().unwrap();
        let mut registry = Registry::default();
        let mut store = InMemoryStore::new();

        let result = run(
            &mut registry,
            &mut store,
            &mut AssumeYes,
            &dir.path().join("missing.txt"),
            "Coins",
        )
        .unwrap();

        assert!(!result.succeeded());
        assert!(registry.is_empty());
    }

    #[test]
    fn file_without_valid_lines_reports_failure() {
        let dir = TempDir::new().unwrap();
        let path = source(&dir, "a||b||c\n\n");
        let mut registry = Registry::default();
        let mut store = InMemoryStore::new();

        let result = run(&mut registry, &mut store, &mut AssumeYes, &path, "Coins").unwrap();

        assert!(!result.succeeded());
        assert!(registry.is_empty());
        assert!(store.load_all().unwrap().is_empty());
    }
}
