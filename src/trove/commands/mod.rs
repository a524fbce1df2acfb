//! # Command Layer
//!
//! One module per operation. Every command takes the registry and the store
//! explicitly and returns a [`CmdResult`]; nothing here prints or exits.
//!
//! ## Failure Reporting
//!
//! Commands distinguish two kinds of failure:
//!
//! - **Rejected requests** return `Err`: unknown collection or index, a name
//!   that is blank or already taken, a value the editor refuses. Nothing has
//!   changed when this happens.
//! - **Persistence failures** are logged and reported as an error-level
//!   [`CmdMessage`] inside an `Ok` result. The in-memory change stands, the
//!   file on disk may be stale. [`CmdResult::succeeded`] is the failure
//!   indicator for callers that only need a yes/no.
//!
//! Questions that need a user decision (overwrite on import, duplicate item
//! names, deleting a collection) go through the [`Confirm`] trait so the same
//! logic serves interactive and scripted clients.

use crate::config::TroveConfig;
use crate::index::DisplayItem;
use crate::model::Collection;
use std::path::PathBuf;

pub mod add;
pub mod config;
pub mod create;
pub mod delete;
pub mod export;
pub mod helpers;
pub mod import;
pub mod list;
pub mod paths;
pub mod remove;
pub mod sold;
pub mod update;
pub mod view;

/// Asks the user a yes/no question.
pub trait Confirm {
    fn confirm(&mut self, question: &str) -> bool;
}

/// Answers yes to everything (`--yes`).
pub struct AssumeYes;

impl Confirm for AssumeYes {
    fn confirm(&mut self, _question: &str) -> bool {
        true
    }
}

/// Answers no to everything.
pub struct AssumeNo;

impl Confirm for AssumeNo {
    fn confirm(&mut self, _question: &str) -> bool {
        false
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_collections: Vec<Collection>,
    pub listed_collections: Vec<Collection>,
    pub listed_items: Vec<DisplayItem>,
    pub paths: Vec<PathBuf>,
    pub config: Option<TroveConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    /// False when any error-level message was reported.
    pub fn succeeded(&self) -> bool {
        !self
            .messages
            .iter()
            .any(|m| m.level == MessageLevel::Error)
    }

    pub fn with_affected_collection(mut self, collection: Collection) -> Self {
        self.affected_collections.push(collection);
        self
    }

    pub fn with_listed_collections(mut self, collections: Vec<Collection>) -> Self {
        self.listed_collections = collections;
        self
    }

    pub fn with_listed_items(mut self, items: Vec<DisplayItem>) -> Self {
        self.listed_items = items;
        self
    }

    pub fn with_paths(mut self, paths: Vec<PathBuf>) -> Self {
        self.paths = paths;
        self
    }

    pub fn with_config(mut self, config: TroveConfig) -> Self {
        self.config = Some(config);
        self
    }
}
