use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;
use std::fmt;
use std::ops::RangeInclusive;

/// Satisfaction values the editor accepts. Loading from disk does not enforce this.
pub const SATISFACTION_RANGE: RangeInclusive<i32> = 0..=10;

static UNSAFE_RUNS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^A-Za-z0-9_]+").expect("sanitize pattern is valid"));

/// Maps a free-text collection name to its filesystem key.
///
/// Every run of characters outside `[A-Za-z0-9_]` collapses into a single `_`,
/// so `"My Coins!"` becomes `"My_Coins_"`. Blank input yields an empty key.
pub fn sanitize_name(name: &str) -> String {
    if name.trim().is_empty() {
        return String::new();
    }
    UNSAFE_RUNS.replace_all(name, "_").into_owned()
}

/// Case-insensitive name comparison used for duplicate detection.
pub fn names_match(a: &str, b: &str) -> bool {
    a.trim().to_lowercase() == b.trim().to_lowercase()
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Item {
    pub name: String,
    pub price: Decimal,
    pub status: Option<String>,
    pub satisfaction: i32,
    pub comment: Option<String>,
    pub sold: bool,
}

impl Item {
    /// A bare item with every field but the name at its default.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn has_name(&self) -> bool {
        !self.name.trim().is_empty()
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (price: {}, status: {})",
            self.name,
            self.price,
            self.status.as_deref().unwrap_or("-")
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Collection {
    pub name: String,
    pub items: Vec<Item>,
}

impl Collection {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            items: Vec::new(),
        }
    }

    pub fn with_items(name: impl Into<String>, items: Vec<Item>) -> Self {
        Self {
            name: name.into(),
            items,
        }
    }

    /// The sanitized key this collection is stored under.
    pub fn key(&self) -> String {
        sanitize_name(&self.name)
    }

    /// Moves sold items behind unsold ones, keeping relative order otherwise.
    pub fn order_sold_last(&mut self) {
        self.items.sort_by_key(|item| item.sold);
    }

    pub fn summary(&self) -> CollectionSummary {
        let sold = self.items.iter().filter(|i| i.sold).count();
        let unsold_value = self
            .items
            .iter()
            .filter(|i| !i.sold)
            .map(|i| i.price)
            .sum();
        CollectionSummary {
            items: self.items.len(),
            sold,
            unsold_value,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollectionSummary {
    pub items: usize,
    pub sold: usize,
    pub unsold_value: Decimal,
}
