use clap::{Args, Parser, Subcommand};
use rust_decimal::Decimal;
use std::path::PathBuf;
use trove::index::ItemIndex;

#[derive(Parser, Debug)]
#[command(name = "trove", bin_name = "trove", version)]
#[command(about = "Keep track of your collections and what they are worth", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Where collections are stored
    #[arg(long, global = true, env = "TROVE_HOME", value_name = "DIR")]
    pub data_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List collections (default)
    #[command(alias = "ls")]
    List,

    /// Create a collection
    New { name: String },

    /// Delete a collection and its items
    #[command(alias = "rm")]
    Remove {
        name: String,

        /// Don't ask for confirmation
        #[arg(short, long)]
        yes: bool,
    },

    /// List the items of a collection
    #[command(alias = "v")]
    Show { collection: String },

    /// Add an item to a collection
    Add {
        collection: String,
        name: String,

        #[command(flatten)]
        fields: ItemFields,

        /// Add even if an item with that name exists
        #[arg(short, long)]
        yes: bool,
    },

    /// Change fields of an item
    #[command(alias = "e")]
    Edit {
        collection: String,
        index: ItemIndex,

        /// New name
        #[arg(long)]
        name: Option<String>,

        #[command(flatten)]
        fields: ItemFields,
    },

    /// Delete an item
    Delete {
        collection: String,
        index: ItemIndex,
    },

    /// Mark an item as sold
    Sold {
        collection: String,
        index: ItemIndex,
    },

    /// Write a collection to a text file
    Export {
        collection: String,

        /// Target file (default: <name>-<date>.txt)
        path: Option<PathBuf>,
    },

    /// Read a collection from a text file
    Import {
        path: PathBuf,

        /// Collection name (default: the file name without extension)
        name: Option<String>,

        /// Overwrite an existing collection without asking
        #[arg(short, long)]
        yes: bool,
    },

    /// Get or set configuration
    Config {
        /// default-status, default-satisfaction or status-options
        key: Option<String>,
        value: Option<String>,
    },

    /// Print the data directory, or the items file of a collection
    Path { collection: Option<String> },
}

/// Item fields shared by `add` and `edit`.
#[derive(Args, Debug, Default, Clone)]
pub struct ItemFields {
    /// Price paid
    #[arg(long, allow_hyphen_values = true)]
    pub price: Option<Decimal>,

    /// Condition. Statuses outside `trove config status-options` get a warning
    #[arg(long)]
    pub status: Option<String>,

    /// How happy you are with it, 0 to 10
    #[arg(long, allow_hyphen_values = true)]
    pub satisfaction: Option<i32>,

    #[arg(long)]
    pub comment: Option<String>,
}
