use crate::commands::{CmdMessage, CmdResult};
use crate::editor::ItemDraft;
use crate::error::Result;
use crate::index::ItemIndex;
use crate::registry::Registry;
use crate::store::CollectionStore;

use super::helpers::{item_name_taken, note_unlisted_status, persist, require};

/// The draft an edit of `index` starts from.
pub fn draft_for(registry: &Registry, name: &str, index: ItemIndex) -> Result<ItemDraft> {
    let collection = require(registry, name)?;
    let position = index.position(collection.items.len())?;
    Ok(ItemDraft::from_item(&collection.items[position]))
}

/// Overwrites the item at `index` with the fields of `draft`.
///
/// Renaming onto a name another item already uses is allowed, with a warning.
/// So is changing the status to one outside `status_options`.
pub fn run<S: CollectionStore>(
    registry: &mut Registry,
    store: &mut S,
    name: &str,
    index: ItemIndex,
    draft: &ItemDraft,
    status_options: &[String],
) -> Result<CmdResult> {
    let mut position = 0;
    let mut previous_status = None;
    let updated = registry.update(name, |c| {
        position = index.position(c.items.len())?;
        previous_status = c.items[position].status.clone();
        draft.apply_to(&mut c.items[position])
    })?;

    let mut result = CmdResult::default();
    if draft.status() != previous_status.as_deref() {
        note_unlisted_status(draft.status(), status_options, &mut result);
    }
    let new_name = &updated.items[position].name;
    if item_name_taken(&updated.items, new_name, Some(position)) {
        result.add_message(CmdMessage::warning(format!(
            "{} now has more than one item named \"{}\"",
            updated.name, new_name
        )));
    }
    if persist(store, &updated, &mut result) {
        result.add_message(CmdMessage::success(format!(
            "Item updated ({}): {}",
            index, updated.items[position].name
        )));
    }
    Ok(result.with_affected_collection(updated))
}
