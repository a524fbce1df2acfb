use crate::commands::{CmdMessage, CmdResult, Confirm};
use crate::editor::ItemDraft;
use crate::error::Result;
use crate::registry::Registry;
use crate::store::CollectionStore;

use super::helpers::{item_name_taken, note_unlisted_status, persist, require};

/// Appends a new item built from `draft`.
///
/// Adding a name that is already in the collection needs confirmation. A
/// status outside `status_options` is kept, with a warning.
pub fn run<S: CollectionStore>(
    registry: &mut Registry,
    store: &mut S,
    confirm: &mut dyn Confirm,
    name: &str,
    draft: &ItemDraft,
    status_options: &[String],
) -> Result<CmdResult> {
    let item = draft.to_item()?;
    let collection = require(registry, name)?;

    let mut result = CmdResult::default();
    if item_name_taken(&collection.items, &item.name, None) {
        let question = format!(
            "\"{}\" already has an item named \"{}\". Add it anyway?",
            collection.name, item.name
        );
        if !confirm.confirm(&question) {
            result.add_message(CmdMessage::info("Operation cancelled."));
            return Ok(result);
        }
    }

    note_unlisted_status(item.status.as_deref(), status_options, &mut result);
    let item_name = item.name.clone();
    let updated = registry.update(name, |c| {
        c.items.push(item);
        Ok(())
    })?;

    if persist(store, &updated, &mut result) {
        result.add_message(CmdMessage::success(format!(
            "Item added ({}): {}",
            updated.items.len(),
            item_name
        )));
    }
    Ok(result.with_affected_collection(updated))
}
