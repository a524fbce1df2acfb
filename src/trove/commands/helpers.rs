use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, TroveError};
use crate::model::{names_match, Collection, Item};
use crate::registry::Registry;
use crate::store::CollectionStore;

/// Writes `collection` to the store, reporting failure instead of raising it.
pub fn persist<S: CollectionStore>(
    store: &mut S,
    collection: &Collection,
    result: &mut CmdResult,
) -> bool {
    match store.save(collection) {
        Ok(()) => true,
        Err(e) => {
            log::error!("failed to save collection {:?}: {}", collection.name, e);
            result.add_message(CmdMessage::error(format!(
                "Could not save \"{}\": {}",
                collection.name, e
            )));
            false
        }
    }
}

/// Removes the stored copy of a collection, reporting failure instead of raising it.
pub fn discard<S: CollectionStore>(store: &mut S, name: &str, result: &mut CmdResult) -> bool {
    match store.delete(name) {
        Ok(()) => true,
        Err(e) => {
            log::error!("failed to delete collection {:?}: {}", name, e);
            result.add_message(CmdMessage::error(format!(
                "Could not delete \"{}\": {}",
                name, e
            )));
            false
        }
    }
}

pub fn require<'a>(registry: &'a Registry, name: &str) -> Result<&'a Collection> {
    registry
        .get(name)
        .ok_or_else(|| TroveError::CollectionNotFound(name.to_string()))
}

/// Warns when `status` is not one of the configured suggestions.
///
/// An empty suggestion list means any status goes.
pub fn note_unlisted_status(status: Option<&str>, options: &[String], result: &mut CmdResult) {
    let status = match status {
        Some(status) if !options.is_empty() => status,
        _ => return,
    };
    if !options.iter().any(|o| o.eq_ignore_ascii_case(status)) {
        result.add_message(CmdMessage::warning(format!(
            "Status \"{}\" is not one of: {}",
            status,
            options.join(", ")
        )));
    }
}

/// Whether another item (ignoring `skip`) already uses `name`.
pub fn item_name_taken(items: &[Item], name: &str, skip: Option<usize>) -> bool {
    items
        .iter()
        .enumerate()
        .filter(|(i, _)| Some(*i) != skip)
        .any(|(_, item)| names_match(&item.name, name))
}
