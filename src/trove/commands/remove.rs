use crate::commands::{CmdMessage, CmdResult, Confirm};
use crate::error::Result;
use crate::registry::Registry;
use crate::store::CollectionStore;

use super::helpers::{discard, require};

/// Removes a collection from the session and deletes its stored files.
pub fn run<S: CollectionStore>(
    registry: &mut Registry,
    store: &mut S,
    confirm: &mut dyn Confirm,
    name: &str,
) -> Result<CmdResult> {
    let target = require(registry, name)?;
    let question = format!(
        "Delete collection \"{}\" and its {} items?",
        target.name,
        target.items.len()
    );

    let mut result = CmdResult::default();
    if !confirm.confirm(&question) {
        result.add_message(CmdMessage::info("Operation cancelled."));
        return Ok(result);
    }

    let Some(removed) = registry.remove(name) else {
        return Ok(result);
    };
    if discard(store, &removed.name, &mut result) {
        result.add_message(CmdMessage::success(format!(
            "Collection deleted: {}",
            removed.name
        )));
    }
    Ok(result.with_affected_collection(removed))
}
