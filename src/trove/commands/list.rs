use crate::commands::{CmdMessage, CmdResult};
use crate::registry::Registry;

pub fn run(registry: &Registry) -> CmdResult {
    let mut result = CmdResult::default().with_listed_collections(registry.collections().to_vec());
    if registry.is_empty() {
        result.add_message(CmdMessage::info(
            "No collections yet. Create one with `trove new <name>`.",
        ));
    }
    result
}
