use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::index_items;
use crate::registry::Registry;

use super::helpers::require;

pub fn run(registry: &Registry, name: &str) -> Result<CmdResult> {
    let collection = require(registry, name)?;
    let mut result = CmdResult::default()
        .with_listed_items(index_items(&collection.items))
        .with_listed_collections(vec![collection.clone()]);

    if collection.items.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "{} has no items yet.",
            collection.name
        )));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::ItemIndex;
    use crate::model::{Collection, Item};

    #[test]
    fn lists_items_with_indexes() {
        let registry = Registry::new(vec![Collection::with_items(
            "Coins",
            vec![
                Item {
                    sold: true,
                    ..Item::named("Penny")
                },
                Item::named("Dime"),
            ],
        )]);

        let result = run(&registry, "coins").unwrap();

        assert_eq!(result.listed_items.len(), 2);
        assert_eq!(result.listed_items[0].index, ItemIndex(1));
        assert_eq!(result.listed_items[0].item.name, "Dime");
        assert_eq!(result.listed_items[1].item.name, "Penny");
    }

    #[test]
    fn empty_collection_says_so() {
        let registry = Registry::new(vec![Collection::new("Coins")]);
        let result = run(&registry, "Coins").unwrap();
        assert!(result.listed_items.is_empty());
        assert_eq!(result.messages.len(), 1);
    }
}
