//! # API Facade
//!
//! The API layer is a thin facade over the command layer and the single entry
//! point for all trove operations, whatever the UI.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Owns the session state**: the store, the [`Registry`] loaded from it and
//!   the [`TroveConfig`] read from the data root
//! - **Dispatches** to the appropriate command function
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It does no business logic, no printing and no formatting.
//!
//! ## Generic Over CollectionStore
//!
//! `TroveApi<S: CollectionStore>` is generic over the storage backend:
//! - Production: `TroveApi<FileStore>`
//! - Testing: `TroveApi<InMemoryStore>`
//!
//! ## Testing Strategy
//!
//! API tests check dispatch and that session state follows the store. Command
//! logic is tested in the command modules.

use crate::commands::{self, Confirm};
use crate::config::TroveConfig;
use crate::editor::ItemDraft;
use crate::error::Result;
use crate::index::ItemIndex;
use crate::model::Collection;
use crate::registry::Registry;
use crate::store::CollectionStore;
use std::path::{Path, PathBuf};

/// The main API facade for trove operations.
pub struct TroveApi<S: CollectionStore> {
    store: S,
    registry: Registry,
    config: TroveConfig,
    data_root: PathBuf,
}

impl<S: CollectionStore> TroveApi<S> {
    /// Opens a session, loading every collection and the configuration.
    ///
    /// A store that can't be read gives an empty session; a config file that
    /// can't be read gives the defaults. Both are logged.
    pub fn new(store: S, data_root: impl Into<PathBuf>) -> Self {
        let data_root = data_root.into();
        let config = TroveConfig::load(&data_root).unwrap_or_else(|e| {
            log::warn!("ignoring config in {}: {}", data_root.display(), e);
            TroveConfig::default()
        });
        let mut api = Self {
            store,
            registry: Registry::default(),
            config,
            data_root,
        };
        if let Err(e) = api.reload() {
            log::error!("failed to load collections: {}", e);
        }
        api
    }

    /// Replaces the in-memory collections with what the store holds now.
    ///
    /// Returns the number of collections loaded. On failure the previous
    /// session state is kept.
    pub fn reload(&mut self) -> Result<usize> {
        let collections = self.store.load_all()?;
        log::debug!("loaded {} collections", collections.len());
        self.registry = Registry::new(collections);
        Ok(self.registry.len())
    }

    pub fn list_collections(&self) -> commands::CmdResult {
        commands::list::run(&self.registry)
    }

    pub fn create_collection(&mut self, name: &str) -> Result<commands::CmdResult> {
        commands::create::run(&mut self.registry, &mut self.store, name)
    }

    pub fn remove_collection(
        &mut self,
        name: &str,
        confirm: &mut dyn Confirm,
    ) -> Result<commands::CmdResult> {
        commands::remove::run(&mut self.registry, &mut self.store, confirm, name)
    }

    pub fn view_collection(&self, name: &str) -> Result<commands::CmdResult> {
        commands::view::run(&self.registry, name)
    }

    pub fn import_collection(
        &mut self,
        path: &Path,
        name: &str,
        confirm: &mut dyn Confirm,
    ) -> Result<commands::CmdResult> {
        commands::import::run(&mut self.registry, &mut self.store, confirm, path, name)
    }

    pub fn export_collection(
        &self,
        name: &str,
        target: Option<PathBuf>,
    ) -> Result<commands::CmdResult> {
        commands::export::run(&self.registry, &self.store, name, target)
    }

    /// An empty draft carrying the configured defaults.
    pub fn new_draft(&self) -> ItemDraft {
        ItemDraft::new(&self.config)
    }

    /// A draft seeded from the item at `index`.
    pub fn draft_for(&self, name: &str, index: ItemIndex) -> Result<ItemDraft> {
        commands::update::draft_for(&self.registry, name, index)
    }

    pub fn create_item(
        &mut self,
        name: &str,
        draft: &ItemDraft,
        confirm: &mut dyn Confirm,
    ) -> Result<commands::CmdResult> {
        commands::add::run(
            &mut self.registry,
            &mut self.store,
            confirm,
            name,
            draft,
            &self.config.status_options,
        )
    }

    pub fn update_item(
        &mut self,
        name: &str,
        index: ItemIndex,
        draft: &ItemDraft,
    ) -> Result<commands::CmdResult> {
        commands::update::run(
            &mut self.registry,
            &mut self.store,
            name,
            index,
            draft,
            &self.config.status_options,
        )
    }

    pub fn delete_item(&mut self, name: &str, index: ItemIndex) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.registry, &mut self.store, name, index)
    }

    pub fn mark_sold(&mut self, name: &str, index: ItemIndex) -> Result<commands::CmdResult> {
        commands::sold::run(&mut self.registry, &mut self.store, name, index)
    }

    pub fn config(&mut self, action: ConfigAction) -> Result<commands::CmdResult> {
        let result = commands::config::run(&self.data_root, action)?;
        if let Some(config) = &result.config {
            self.config = config.clone();
        }
        Ok(result)
    }

    pub fn paths(&self, collection: Option<&str>) -> Result<commands::CmdResult> {
        commands::paths::run(&self.registry, &self.store, &self.data_root, collection)
    }

    pub fn collection(&self, name: &str) -> Option<&Collection> {
        self.registry.get(name)
    }

    pub fn collections(&self) -> &[Collection] {
        self.registry.collections()
    }

    pub fn current_config(&self) -> &TroveConfig {
        &self.config
    }

    pub fn data_root(&self) -> &Path {
        &self.data_root
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{AssumeNo, AssumeYes, CmdMessage, CmdResult, MessageLevel};
