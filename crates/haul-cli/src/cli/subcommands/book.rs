use clap::{Args, Subcommand};

/// Freight booking commands.
#[derive(Clone, Debug, Subcommand)]
pub enum BookCommands {
    /// Build the rate request for one order without sending it.
    Plan(BookPlanArgs),
}

#[derive(Clone, Debug, Args)]
pub struct BookPlanArgs {
    /// JSON file with the booking request (orders plus delivery flags).
    #[arg(long)]
    pub request: String,
    /// Require a liftgate at delivery.
    #[arg(long)]
    pub liftgate: bool,
    /// Delivery to a limited-access site.
    #[arg(long)]
    pub limited_access: bool,
    /// Pickup date as YYYY-MM-DD (defaults to today).
    #[arg(long)]
    pub date: Option<chrono::NaiveDate>,
}
