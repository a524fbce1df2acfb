//! # CLI Layer
//!
//! This module is one possible UI client for trove, not the application
//! itself. It is the only place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr, stdin)
//! - Sets up logging
//! - Handles argument parsing
//! - Formats output for humans
//!
//! ## Structure
//!
//! - `run()`: Main dispatch logic (called by `main.rs`)
//! - `init_context()`: Resolves the data directory and builds the API
//! - `handle_*()`: Per-command handlers that call the API and print the result
//!
//! Every handler returns whether the command succeeded, so that `main.rs` can
//! pick the exit code.

use super::render::{print_collections, print_config, print_items, print_messages, print_paths};
use super::setup::{Cli, Commands, ItemFields};
use clap::Parser;
use directories::ProjectDirs;
use env_logger::Env;
use std::io::{self, Write};
use std::path::PathBuf;
use trove::api::{AssumeYes, CmdResult, ConfigAction, TroveApi};
use trove::commands::Confirm;
use trove::editor::ItemDraft;
use trove::error::{Result, TroveError};
use trove::index::ItemIndex;
use trove::store::fs::FileStore;

const DATA_DIR_NAME: &str = "CollectionsData";

struct AppContext {
    api: TroveApi<FileStore>,
}

/// Asks on stdin. Anything but "y" or "yes" is a no.
struct StdinConfirm;

impl Confirm for StdinConfirm {
    fn confirm(&mut self, question: &str) -> bool {
        print!("{} [y/N]: ", question);
        if io::stdout().flush().is_err() {
            return false;
        }

        let mut input = String::new();
        match io::stdin().read_line(&mut input) {
            Ok(_) => matches!(input.trim().to_lowercase().as_str(), "y" | "yes"),
            Err(e) => {
                log::warn!("could not read answer: {}", e);
                false
            }
        }
    }
}

fn confirmer(yes: bool) -> Box<dyn Confirm> {
    if yes {
        Box::new(AssumeYes)
    } else {
        Box::new(StdinConfirm)
    }
}

pub fn run() -> Result<bool> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut ctx = init_context(&cli)?;

    match cli.command {
        None | Some(Commands::List) => handle_list(&ctx),
        Some(Commands::New { name }) => handle_new(&mut ctx, &name),
        Some(Commands::Remove { name, yes }) => handle_remove(&mut ctx, &name, yes),
        Some(Commands::Show { collection }) => handle_show(&ctx, &collection),
        Some(Commands::Add {
            collection,
            name,
            fields,
            yes,
        }) => handle_add(&mut ctx, &collection, &name, &fields, yes),
        Some(Commands::Edit {
            collection,
            index,
            name,
            fields,
        }) => handle_edit(&mut ctx, &collection, index, name, &fields),
        Some(Commands::Delete { collection, index }) => handle_delete(&mut ctx, &collection, index),
        Some(Commands::Sold { collection, index }) => handle_sold(&mut ctx, &collection, index),
        Some(Commands::Export { collection, path }) => handle_export(&ctx, &collection, path),
        Some(Commands::Import { path, name, yes }) => handle_import(&mut ctx, path, name, yes),
        Some(Commands::Config { key, value }) => handle_config(&mut ctx, key, value),
        Some(Commands::Path { collection }) => handle_path(&ctx, collection),
    }
}

/// `warn` by default, `debug` with `--verbose`. `RUST_LOG` wins over both.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or(level))
        .format_timestamp(None)
        .try_init();
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_root = match &cli.data_dir {
        Some(dir) => dir.clone(),
        None => default_data_root()?,
    };
    log::debug!("data root: {}", data_root.display());

    let store = FileStore::new(data_root.clone());
    Ok(AppContext {
        api: TroveApi::new(store, data_root),
    })
}

fn default_data_root() -> Result<PathBuf> {
    let dirs = ProjectDirs::from("com", "trove", "trove")
        .ok_or_else(|| TroveError::Api("Could not determine a data directory".into()))?;
    Ok(dirs.data_local_dir().join(DATA_DIR_NAME))
}

fn finish(result: &CmdResult) -> Result<bool> {
    print_messages(&result.messages);
    Ok(result.succeeded())
}

fn handle_list(ctx: &AppContext) -> Result<bool> {
    let result = ctx.api.list_collections();
    print_collections(&result.listed_collections);
    finish(&result)
}

fn handle_new(ctx: &mut AppContext, name: &str) -> Result<bool> {
    let result = ctx.api.create_collection(name)?;
    finish(&result)
}

fn handle_remove(ctx: &mut AppContext, name: &str, yes: bool) -> Result<bool> {
    let result = ctx.api.remove_collection(name, &mut *confirmer(yes))?;
    finish(&result)
}

fn handle_show(ctx: &AppContext, collection: &str) -> Result<bool> {
    let result = ctx.api.view_collection(collection)?;
    if let Some(shown) = result.listed_collections.first() {
        print_items(shown, &result.listed_items);
    }
    finish(&result)
}

fn apply_fields(draft: &mut ItemDraft, fields: &ItemFields) -> Result<()> {
    if let Some(price) = fields.price {
        draft.set_price(price)?;
    }
    if let Some(status) = &fields.status {
        draft.set_status(status)?;
    }
    if let Some(satisfaction) = fields.satisfaction {
        draft.set_satisfaction(satisfaction)?;
    }
    if let Some(comment) = &fields.comment {
        draft.set_comment(comment)?;
    }
    Ok(())
}

fn handle_add(
    ctx: &mut AppContext,
    collection: &str,
    name: &str,
    fields: &ItemFields,
    yes: bool,
) -> Result<bool> {
    let mut draft = ctx.api.new_draft();
    draft.set_name(name)?;
    apply_fields(&mut draft, fields)?;

    let result = ctx
        .api
        .create_item(collection, &draft, &mut *confirmer(yes))?;
    finish(&result)
}

fn handle_edit(
    ctx: &mut AppContext,
    collection: &str,
    index: ItemIndex,
    name: Option<String>,
    fields: &ItemFields,
) -> Result<bool> {
    let mut draft = ctx.api.draft_for(collection, index)?;
    if let Some(name) = name {
        draft.set_name(name)?;
    }
    apply_fields(&mut draft, fields)?;

    let result = ctx.api.update_item(collection, index, &draft)?;
    finish(&result)
}

fn handle_delete(ctx: &mut AppContext, collection: &str, index: ItemIndex) -> Result<bool> {
    let result = ctx.api.delete_item(collection, index)?;
    finish(&result)
}

fn handle_sold(ctx: &mut AppContext, collection: &str, index: ItemIndex) -> Result<bool> {
    let result = ctx.api.mark_sold(collection, index)?;
    finish(&result)
}

fn handle_export(ctx: &AppContext, collection: &str, path: Option<PathBuf>) -> Result<bool> {
    let result = ctx.api.export_collection(collection, path)?;
    finish(&result)
}

fn handle_import(
    ctx: &mut AppContext,
    path: PathBuf,
    name: Option<String>,
    yes: bool,
) -> Result<bool> {
    let name = match name {
        Some(name) => name,
        None => path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .ok_or_else(|| {
                TroveError::Api(format!("Can't derive a name from {}", path.display()))
            })?,
    };

    let result = ctx
        .api
        .import_collection(&path, &name, &mut *confirmer(yes))?;
    finish(&result)
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<bool> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };
    let show_all = matches!(action, ConfigAction::ShowAll);

    let result = ctx.api.config(action)?;
    if show_all {
        if let Some(config) = &result.config {
            print_config(config);
        }
    }
    finish(&result)
}

fn handle_path(ctx: &AppContext, collection: Option<String>) -> Result<bool> {
    let result = ctx.api.paths(collection.as_deref())?;
    print_paths(&result.paths);
    finish(&result)
}
