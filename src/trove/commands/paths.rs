use crate::commands::CmdResult;
use crate::error::Result;
use crate::registry::Registry;
use crate::store::CollectionStore;
use std::path::Path;

use super::helpers::require;

/// The data root, or the items file of `collection` when one is named.
pub fn run<S: CollectionStore>(
    registry: &Registry,
    store: &S,
    data_root: &Path,
    collection: Option<&str>,
) -> Result<CmdResult> {
    let path = match collection {
        None => data_root.to_path_buf(),
        Some(name) => {
            let collection = require(registry, name)?;
            store.collection_path(&collection.name)?
        }
    };
    Ok(CmdResult::default().with_paths(vec![path]))
}
