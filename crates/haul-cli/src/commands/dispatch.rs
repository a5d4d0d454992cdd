use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Class { action } => commands::class::handle(&action, ctx, flags).await,
        Commands::Product { action } => commands::product::handle(&action, ctx, flags).await,
        Commands::Link { action } => commands::link::handle(&action, ctx, flags).await,
        Commands::Book { action } => commands::book::handle(&action, ctx, flags).await,
        Commands::Init(_) => unreachable!("init is pre-dispatched in main"),
    }
}
