use clap::Subcommand;

/// Product commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ProductCommands {
    /// List products.
    List {
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Create a product unless the SKU already exists.
    Ensure {
        sku: String,
        name: String,
        /// Also create an unlinked link row so the product shows up for linking.
        #[arg(long)]
        with_link: bool,
    },
}
