//! # Line Format
//!
//! Each collection is stored as newline-separated records, one item per line:
//!
//! ```text
//! name||price||status||satisfaction||comment||sold
//! ```
//!
//! The separator is the literal two-character `||`, so free-text fields may
//! still contain a single pipe, as long as it is not at either end of the
//! field. [`is_storable`] tells whether a value survives a save and reload.
//!
//! Two shorter layouts from earlier versions are still read, picked by field
//! count:
//!
//! | fields | layout                                         |
//! |--------|------------------------------------------------|
//! | >= 6   | current format                                 |
//! | 5      | no sold flag (defaults to `false`)             |
//! | 1      | bare name, everything else at its default      |
//! | 2..=4  | malformed, skipped                             |
//!
//! Writing always produces the 6-field layout.

use crate::model::Item;
use rust_decimal::Decimal;
use std::str::FromStr;
use thiserror::Error;

pub const SEPARATOR: &str = "||";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LineError {
    #[error("unexpected field count {0}")]
    FieldCount(usize),

    #[error("invalid price {0:?}")]
    Price(String),

    #[error("invalid satisfaction {0:?}")]
    Satisfaction(String),

    #[error("invalid sold flag {0:?}")]
    Sold(String),
}

/// Items read from a file, plus how many lines had to be dropped.
#[derive(Debug, Default)]
pub struct ParsedItems {
    pub items: Vec<Item>,
    pub skipped: usize,
}

pub fn parse_line(line: &str) -> Result<Item, LineError> {
    let fields: Vec<&str> = line.split(SEPARATOR).map(str::trim).collect();

    match fields.len() {
        n if n >= 6 => Ok(Item {
            name: fields[0].to_string(),
            price: parse_price(fields[1])?,
            status: optional(fields[2]),
            satisfaction: parse_satisfaction(fields[3])?,
            comment: optional(fields[4]),
            sold: parse_sold(fields[5])?,
        }),
        5 => Ok(Item {
            name: fields[0].to_string(),
            price: parse_price(fields[1])?,
            status: optional(fields[2]),
            satisfaction: parse_satisfaction(fields[3])?,
            comment: optional(fields[4]),
            sold: false,
        }),
        1 => Ok(Item::named(fields[0])),
        n => Err(LineError::FieldCount(n)),
    }
}

/// Parses every non-blank line, logging and skipping the ones that fail.
///
/// `source` only appears in log output.
pub fn parse_items(content: &str, source: &str) -> ParsedItems {
    let mut parsed = ParsedItems::default();

    for (number, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match parse_line(line) {
            Ok(item) => parsed.items.push(item),
            Err(e) => {
                log::warn!("{}:{}: skipping line ({}): {}", source, number + 1, e, line);
                parsed.skipped += 1;
            }
        }
    }

    parsed
}

/// Whether `value` can be written as a field and read back unchanged.
pub fn is_storable(value: &str) -> bool {
    let value = value.trim();
    !(value.contains(SEPARATOR)
        || value.starts_with('|')
        || value.ends_with('|')
        || value.contains(|c: char| c == '\n' || c == '\r'))
}

pub fn format_item(item: &Item) -> String {
    [
        item.name.trim().to_string(),
        item.price.to_string(),
        item.status.as_deref().unwrap_or_default().trim().to_string(),
        item.satisfaction.to_string(),
        item.comment.as_deref().unwrap_or_default().trim().to_string(),
        item.sold.to_string(),
    ]
    .join(SEPARATOR)
}

/// Serializes the items that have a name, one per line, each newline-terminated.
pub fn format_items(items: &[Item]) -> String {
    let mut out = String::new();
    for item in items.iter().filter(|i| i.has_name()) {
        out.push_str(&format_item(item));
        out.push('\n');
    }
    out
}

fn optional(field: &str) -> Option<String> {
    if field.is_empty() {
        None
    } else {
        Some(field.to_string())
    }
}

fn parse_price(field: &str) -> Result<Decimal, LineError> {
    Decimal::from_str(field).map_err(|_| LineError::Price(field.to_string()))
}

fn parse_satisfaction(field: &str) -> Result<i32, LineError> {
    field
        .parse()
        .map_err(|_| LineError::Satisfaction(field.to_string()))
}

fn parse_sold(field: &str) -> Result<bool, LineError> {
    if field.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if field.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(LineError::Sold(field.to_string()))
    }
}
