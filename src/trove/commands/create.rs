use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Collection;
use crate::registry::Registry;
use crate::store::{storage_key, CollectionStore};

use super::helpers::persist;

/// Creates an empty collection and writes it out right away.
pub fn run<S: CollectionStore>(
    registry: &mut Registry,
    store: &mut S,
    name: &str,
) -> Result<CmdResult> {
    storage_key(name)?;
    let collection = registry.insert(Collection::new(name.trim()))?;

    let mut result = CmdResult::default();
    if persist(store, &collection, &mut result) {
        result.add_message(CmdMessage::success(format!(
            "Collection created: {}",
            collection.name
        )));
    }
    Ok(result.with_affected_collection(collection))
}
