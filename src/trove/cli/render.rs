use colored::Colorize;
use std::path::PathBuf;
use trove::api::{CmdMessage, MessageLevel};
use trove::config::TroveConfig;
use trove::index::DisplayItem;
use trove::model::Collection;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const NAME_WIDTH: usize = 32;
const STATUS_WIDTH: usize = 12;
const PRICE_WIDTH: usize = 10;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => eprintln!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_collections(collections: &[Collection]) {
    for collection in collections {
        println!("{}", collection_line(collection));
    }
}

fn collection_line(collection: &Collection) -> String {
    let summary = collection.summary();
    let name = pad_to_width(&truncate_to_width(&collection.name, NAME_WIDTH), NAME_WIDTH);
    let counts = format!(
        "{} items, {} sold, {} unsold value",
        summary.items, summary.sold, summary.unsold_value
    );
    format!("  {} {}", name.bold(), counts.dimmed())
}

pub(super) fn print_items(collection: &Collection, items: &[DisplayItem]) {
    println!("{}", collection.name.bold());
    for di in items {
        let line = item_line(di);
        if di.item.sold {
            println!("{}", line.dimmed());
        } else {
            println!("{}", line);
        }
    }
}

fn item_line(di: &DisplayItem) -> String {
    let item = &di.item;
    let idx = format!("{:>4}. ", di.index.0);
    let name = pad_to_width(&truncate_to_width(&item.name, NAME_WIDTH), NAME_WIDTH);
    let status = pad_to_width(
        &truncate_to_width(item.status.as_deref().unwrap_or("-"), STATUS_WIDTH),
        STATUS_WIDTH,
    );
    let price = format!("{:>width$}", item.price.to_string(), width = PRICE_WIDTH);
    let sold = if item.sold { "  sold" } else { "" };

    let mut line = format!(
        "{}{} {} {}  {:>2}/10{}",
        idx, name, status, price, item.satisfaction, sold
    );
    if let Some(comment) = &item.comment {
        line.push_str(&format!("  {}", comment));
    }
    line
}

pub(super) fn print_config(config: &TroveConfig) {
    for key in TroveConfig::KEYS {
        if let Some(value) = config.get(key) {
            println!("{} = {}", key.bold(), value);
        }
    }
}

pub(super) fn print_paths(paths: &[PathBuf]) {
    for path in paths {
        println!("{}", path.display());
    }
}

fn pad_to_width(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}
