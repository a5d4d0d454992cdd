use clap::{Args, Subcommand};

/// Freight classification commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ClassCommands {
    /// List classifications.
    List,
    /// Get a classification by ID.
    Get { id: i64 },
    /// Add a classification. A duplicate (description, NMFC, sub) is skipped.
    Add(ClassAddArgs),
    /// Update a classification. Omitted fields keep their value; pass "" to clear.
    Update(ClassUpdateArgs),
    /// Delete classifications by ID. Unknown IDs are ignored.
    Delete {
        #[arg(required = true, num_args = 1..)]
        ids: Vec<i64>,
    },
}

#[derive(Clone, Debug, Args)]
pub struct ClassAddArgs {
    #[arg(long)]
    pub freight_class: String,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long)]
    pub nmfc: Option<String>,
    #[arg(long)]
    pub hazardous: Option<bool>,
    #[arg(long)]
    pub hazard_id: Option<String>,
    #[arg(long)]
    pub packing_group: Option<String>,
    #[arg(long)]
    pub sub: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct ClassUpdateArgs {
    pub id: i64,
    #[arg(long)]
    pub freight_class: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long)]
    pub nmfc: Option<String>,
    #[arg(long, conflicts_with = "clear_hazardous")]
    pub hazardous: Option<bool>,
    /// Set hazardous back to unknown.
    #[arg(long)]
    pub clear_hazardous: bool,
    #[arg(long)]
    pub hazard_id: Option<String>,
    #[arg(long)]
    pub packing_group: Option<String>,
    #[arg(long)]
    pub sub: Option<String>,
}
