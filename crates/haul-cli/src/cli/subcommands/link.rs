use clap::{Args, Subcommand};

use crate::commands::shared::parse::parse_stage;

/// Product link commands.
#[derive(Clone, Debug, Subcommand)]
pub enum LinkCommands {
    /// List every link row.
    List {
        #[arg(long)]
        limit: Option<u32>,
    },
    /// List products waiting for a classification.
    Unlinked,
    /// Show the product, link, and classification for a SKU.
    Lookup { sku: String },
    /// Select unlinked products, stage classification IDs, and submit them as one batch.
    Apply(LinkApplyArgs),
}

#[derive(Clone, Debug, Args)]
pub struct LinkApplyArgs {
    /// Product ID to select (repeatable).
    #[arg(long)]
    pub select: Vec<i64>,
    /// Select every listed product.
    #[arg(long)]
    pub select_all: bool,
    /// Stage a classification ID for a product, as PRODUCT=TEXT (repeatable).
    #[arg(long, value_parser = parse_stage)]
    pub stage: Vec<(i64, String)>,
    /// Print the batch that would be sent without submitting it.
    #[arg(long)]
    pub dry_run: bool,
}
