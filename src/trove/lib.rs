//! # Trove Architecture
//!
//! Trove keeps track of personal collections (coins, stamps, records) and the
//! items in them: what each cost, what state it is in, how happy its owner is
//! with it and whether it has been sold. Everything lives in plain text files
//! under one data directory.
//!
//! Trove is a library that happens to have a CLI client.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, formats output, asks questions         │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, owns the session state        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Business logic over the registry and the item editor     │
//! │  - Keeps the store in sync after every change               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/, format.rs)                          │
//! │  - Abstract CollectionStore trait                           │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code never writes to stdout/stderr, never exits the
//! process and never reads from the terminal. Questions for the user go
//! through [`commands::Confirm`].
//!
//! ## Testing Strategy
//!
//! 1. **Commands** (`commands/*.rs`): most of the testing lives here, run
//!    against `InMemoryStore`.
//! 2. **Storage** (`store/`, `format.rs`): line parsing and the on-disk layout,
//!    with `tempfile` directories.
//! 3. **CLI** (`tests/`): the built binary, driven with `assert_cmd`.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`registry`]: The loaded collections, owned in memory
//! - [`editor`]: Validated drafts for new and edited items
//! - [`store`]: Storage abstraction and implementations
//! - [`format`]: The `||`-delimited line format
//! - [`model`]: Core data types (`Collection`, `Item`) and name sanitizing
//! - [`index`]: 1-based item indexes
//! - [`config`]: Configuration management
//! - [`error`]: Error types
//! - `cli`: Argument parsing and terminal output for the binary (not part of the lib API)

pub mod api;
pub mod commands;
pub mod config;
pub mod editor;
pub mod error;
pub mod format;
pub mod index;
pub mod model;
pub mod registry;
pub mod store;
