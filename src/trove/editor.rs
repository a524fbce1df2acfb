//! # Item Editor
//!
//! An [`ItemDraft`] holds the fields a user is filling in before an item is
//! created or updated. Setters validate their input and leave the previous
//! value in place when they reject it.
//!
//! A draft carries no notion of "edit mode": the caller decides whether it
//! becomes a new item (`commands::add`) or overwrites an existing one
//! (`commands::update`).

use crate::config::TroveConfig;
use crate::error::{Result, TroveError};
use crate::format::is_storable;
use crate::model::{Item, SATISFACTION_RANGE};
use rust_decimal::Decimal;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemDraft {
    name: String,
    price: Decimal,
    status: Option<String>,
    satisfaction: i32,
    comment: Option<String>,
}

impl ItemDraft {
    /// An empty draft using the configured defaults.
    pub fn new(config: &TroveConfig) -> Self {
        Self {
            name: String::new(),
            price: Decimal::ZERO,
            status: non_blank(&config.default_status),
            satisfaction: config.default_satisfaction,
            comment: None,
        }
    }

    /// A draft holding the current values of `item`.
    ///
    /// Values loaded from disk are taken as they are, even when the setters
    /// would reject them.
    pub fn from_item(item: &Item) -> Self {
        Self {
            name: item.name.clone(),
            price: item.price,
            status: item.status.clone(),
            satisfaction: item.satisfaction,
            comment: item.comment.clone(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Decimal {
        self.price
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn satisfaction(&self) -> i32 {
        self.satisfaction
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    /// Blank names are accepted here and refused when the draft is used.
    pub fn set_name(&mut self, name: impl Into<String>) -> Result<()> {
        let name = name.into();
        check_storable("Name", &name)?;
        self.name = name;
        Ok(())
    }

    pub fn set_price(&mut self, price: Decimal) -> Result<()> {
        if price.is_sign_negative() && !price.is_zero() {
            return Err(TroveError::Validation(format!(
                "Price cannot be negative: {}",
                price
            )));
        }
        self.price = price;
        Ok(())
    }

    pub fn set_status(&mut self, status: &str) -> Result<()> {
        check_storable("Status", status)?;
        self.status = non_blank(status);
        Ok(())
    }

    pub fn set_satisfaction(&mut self, satisfaction: i32) -> Result<()> {
        if !SATISFACTION_RANGE.contains(&satisfaction) {
            return Err(TroveError::Validation(format!(
                "Satisfaction must be between {} and {}, got {}",
                SATISFACTION_RANGE.start(),
                SATISFACTION_RANGE.end(),
                satisfaction
            )));
        }
        self.satisfaction = satisfaction;
        Ok(())
    }

    pub fn set_comment(&mut self, comment: &str) -> Result<()> {
        check_storable("Comment", comment)?;
        self.comment = non_blank(comment);
        Ok(())
    }

    /// Builds a new, unsold item.
    pub fn to_item(&self) -> Result<Item> {
        self.check_name()?;
        Ok(Item {
            name: self.name.trim().to_string(),
            price: self.price,
            status: self.status.clone(),
            satisfaction: self.satisfaction,
            comment: self.comment.clone(),
            sold: false,
        })
    }

    /// Overwrites the fields of `item`. The sold flag is left alone.
    pub fn apply_to(&self, item: &mut Item) -> Result<()> {
        self.check_name()?;
        item.name = self.name.trim().to_string();
        item.price = self.price;
        item.status = self.status.clone();
        item.satisfaction = self.satisfaction;
        item.comment = self.comment.clone();
        Ok(())
    }

    fn check_name(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(TroveError::Validation("Item name cannot be empty".into()));
        }
        Ok(())
    }
}

fn check_storable(field: &str, value: &str) -> Result<()> {
    if !is_storable(value) {
        return Err(TroveError::Validation(format!(
            "{} can't contain \"||\" or line breaks, or start or end with \"|\": {:?}",
            field, value
        )));
    }
    Ok(())
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> ItemDraft {
        ItemDraft::new(&TroveConfig::default())
    }

    #[test]
    fn new_draft_uses_config_defaults() {
        let d = draft();
        assert_eq!(d.name(), "");
        assert_eq!(d.price(), Decimal::ZERO);
        assert_eq!(d.status(), Some("new"));
        assert_eq!(d.satisfaction(), 5);
        assert_eq!(d.comment(), None);
    }

    #[test]
    fn satisfaction_out_of_range_keeps_previous() {
        let mut d = draft();
        d.set_satisfaction(8).unwrap();

        assert!(matches!(
            d.set_satisfaction(11),
            Err(TroveError::Validation(_))
        ));
        assert!(d.set_satisfaction(-1).is_err());
        assert_eq!(d.satisfaction(), 8);

        d.set_satisfaction(0).unwrap();
        d.set_satisfaction(10).unwrap();
        assert_eq!(d.satisfaction(), 10);
    }

    #[test]
    fn negative_price_is_rejected() {
        let mut d = draft();
        d.set_price(Decimal::new(1999, 2)).unwrap();
        assert!(d.set_price(Decimal::new(-1, 0)).is_err());
        assert_eq!(d.price(), Decimal::new(1999, 2));
    }

    #[test]
    fn blank_name_cannot_become_item() {
        let mut d = draft();
        d.set_name("   ").unwrap();
        assert!(matches!(d.to_item(), Err(TroveError::Validation(_))));
    }

    #[test]
    fn to_item_is_unsold_and_trimmed() {
        let mut d = draft();
        d.set_name("  Penny ").unwrap();
        d.set_comment("  ").unwrap();
        let item = d.to_item().unwrap();
        assert_eq!(item.name, "Penny");
        assert_eq!(item.comment, None);
        assert!(!item.sold);
    }

    #[test]
    fn apply_to_keeps_sold_flag() {
        let mut item = Item {
            sold: true,
            satisfaction: 2,
            ..Item::named("Old")
        };
        let mut d = ItemDraft::from_item(&item);
        d.set_name("New").unwrap();
        d.set_status("used").unwrap();
        d.apply_to(&mut item).unwrap();

        assert_eq!(item.name, "New");
        assert_eq!(item.status.as_deref(), Some("used"));
        assert_eq!(item.satisfaction, 2);
        assert!(item.sold);
    }

    #[test]
    fn separator_in_text_keeps_previous() {
        let mut d = draft();
        d.set_name("Penny").unwrap();
        d.set_comment("mint").unwrap();

        assert!(matches!(
            d.set_comment("mint||boxed"),
            Err(TroveError::Validation(_))
        ));
        assert!(d.set_comment("chipped|").is_err());
        assert!(d.set_status("|used").is_err());
        assert!(d.set_name("Pen||ny").is_err());
        assert!(d.set_name("Pen\nny").is_err());

        assert_eq!(d.name(), "Penny");
        assert_eq!(d.comment(), Some("mint"));
        assert_eq!(d.status(), Some("new"));

        d.set_comment("mint | boxed").unwrap();
        assert_eq!(d.comment(), Some("mint | boxed"));
    }

    #[test]
    fn from_item_keeps_out_of_range_values() {
        let item = Item {
            satisfaction: 42,
            ..Item::named("Loaded")
        };
        let d = ItemDraft::from_item(&item);
        assert_eq!(d.satisfaction(), 42);
    }
}
