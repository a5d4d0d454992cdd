use clap::{Args, Subcommand};

use crate::cli::subcommands::{BookCommands, ClassCommands, LinkCommands, ProductCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Initialize haul for a project.
    Init(InitArgs),
    /// Freight classification table.
    Class {
        #[command(subcommand)]
        action: ClassCommands,
    },
    /// Products.
    Product {
        #[command(subcommand)]
        action: ProductCommands,
    },
    /// Product-to-classification links.
    Link {
        #[command(subcommand)]
        action: LinkCommands,
    },
    /// Freight booking.
    Book {
        #[command(subcommand)]
        action: BookCommands,
    },
}

#[derive(Clone, Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing .haul/config.toml with the template.
    #[arg(long)]
    pub force: bool,
}
