use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::ItemIndex;
use crate::registry::Registry;
use crate::store::CollectionStore;

use super::helpers::persist;

/// Marks an item sold and rewrites the collection.
///
/// The item keeps its place for now; it moves behind the unsold items the
/// next time the collection is loaded.
pub fn run<S: CollectionStore>(
    registry: &mut Registry,
    store: &mut S,
    name: &str,
    index: ItemIndex,
) -> Result<CmdResult> {
    let mut item_name = String::new();
    let updated = registry.update(name, |c| {
        let position = index.position(c.items.len())?;
        let item = &mut c.items[position];
        item.sold = true;
        item_name = item.name.clone();
        Ok(())
    })?;

    let mut result = CmdResult::default();
    if persist(store, &updated, &mut result) {
        result.add_message(CmdMessage::success(format!(
            "Item sold ({}): {}",
            index, item_name
        )));
    }
    Ok(result.with_affected_collection(updated))
}
