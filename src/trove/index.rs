//! # Item Indexes
//!
//! Items are addressed by their 1-based position in a collection, as listed.
//! Because sold items are moved to the end whenever a collection is loaded,
//! indexes are only stable between two loads: marking an item sold keeps its
//! index for the rest of the session, but it moves once the data is reloaded.

use crate::error::{Result, TroveError};
use crate::model::Item;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ItemIndex(pub usize);

impl ItemIndex {
    /// Zero-based position, if the index falls inside `len` items.
    pub fn position(self, len: usize) -> Result<usize> {
        if self.0 == 0 || self.0 > len {
            return Err(TroveError::ItemNotFound(self.0));
        }
        Ok(self.0 - 1)
    }
}

impl fmt::Display for ItemIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ItemIndex {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().parse::<usize>() {
            Ok(n) if n > 0 => Ok(ItemIndex(n)),
            _ => Err(format!("Invalid item index: {}", s)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct DisplayItem {
    pub index: ItemIndex,
    pub item: Item,
}

pub fn index_items(items: &[Item]) -> Vec<DisplayItem> {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| DisplayItem {
            index: ItemIndex(i + 1),
            item: item.clone(),
        })
        .collect()
}
