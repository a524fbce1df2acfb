use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Collection;
use crate::registry::Registry;
use crate::store::CollectionStore;
use chrono::Local;
use std::path::PathBuf;

use super::helpers::require;

/// Writes a collection to `target`, or to `<key>-<date>.txt` in the working
/// directory when no target is given.
pub fn run<S: CollectionStore>(
    registry: &Registry,
    store: &S,
    name: &str,
    target: Option<PathBuf>,
) -> Result<CmdResult> {
    let collection = require(registry, name)?;
    let path = target.unwrap_or_else(|| default_export_path(collection));

    let mut result = CmdResult::default();
    match store.export_to(collection, &path) {
        Ok(()) => result.add_message(CmdMessage::success(format!(
            "Exported {} items to {}",
            collection.items.len(),
            path.display()
        ))),
        Err(e) => {
            log::error!("export of {:?} to {} failed: {}", collection.name, path.display(), e);
            result.add_message(CmdMessage::error(format!(
                "Failed to export to {}: {}",
                path.display(),
                e
            )));
        }
    }
    Ok(result.with_paths(vec![path]))
}

fn default_export_path(collection: &Collection) -> PathBuf {
    PathBuf::from(format!(
        "{}-{}.txt",
        collection.key(),
        Local::now().format("%Y-%m-%d")
    ))
}
