use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::ItemIndex;
use crate::registry::Registry;
use crate::store::CollectionStore;

use super::helpers::persist;

pub fn run<S: CollectionStore>(
    registry: &mut Registry,
    store: &mut S,
    name: &str,
    index: ItemIndex,
) -> Result<CmdResult> {
    let mut removed = None;
    let updated = registry.update(name, |c| {
        let position = index.position(c.items.len())?;
        removed = Some(c.items.remove(position));
        Ok(())
    })?;

    let mut result = CmdResult::default();
    if persist(store, &updated, &mut result) {
        if let Some(item) = removed {
            result.add_message(CmdMessage::success(format!(
                "Item deleted ({}): {}",
                index, item.name
            )));
        }
    }
    Ok(result.with_affected_collection(updated))
}
