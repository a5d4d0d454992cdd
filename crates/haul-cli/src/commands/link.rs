use anyhow::bail;
use haul_core::errors::CoreError;
use haul_link::{LinkStore, LinkingSession, SubmitOutcome};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::{LinkApplyArgs, LinkCommands};
use crate::commands::shared::limit::effective_limit;
use crate::context::AppContext;
use crate::output::output;

/// Handle `haul link`.
pub async fn handle(action: &LinkCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        LinkCommands::List { limit } => {
            let mut links = ctx.service.list_links().await?;
            links.truncate(effective_limit(
                *limit,
                flags.limit,
                ctx.config.general.default_limit,
            ));
            output(&links, flags.format)
        }
        LinkCommands::Unlinked => {
            let mut session = LinkingSession::new(&ctx.service);
            session.refresh().await?;
            output(&session.rows(), flags.format)
        }
        LinkCommands::Lookup { sku } => {
            let Some(data) = ctx.service.freight_data_for_sku(sku).await? else {
                return Err(CoreError::not_found("linked SKU", sku).into());
            };
            output(&data, flags.format)
        }
        LinkCommands::Apply(args) => apply(args, ctx, flags).await,
    }
}

async fn apply(args: &LinkApplyArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut session = LinkingSession::new(&ctx.service);
    session.refresh().await?;
    select_and_stage(&mut session, args)?;

    if args.dry_run {
        return output(&session.prepare(), flags.format);
    }

    let outcome = session.submit().await;
    output(&outcome, flags.format)?;
    if let SubmitOutcome::Failed { error, .. } = outcome {
        bail!("link batch refused: {error}");
    }
    Ok(())
}

/// Apply `--select-all`, `--select`, and `--stage` to a freshly loaded session.
/// Explicit selections add to the selection; they never deselect.
fn select_and_stage<S: LinkStore + ?Sized>(
    session: &mut LinkingSession<'_, S>,
    args: &LinkApplyArgs,
) -> anyhow::Result<()> {
    if args.select_all {
        session.toggle_all();
    }
    for product_id in &args.select {
        if !session.is_selected(*product_id) {
            session.toggle(*product_id)?;
        }
    }
    for (product_id, text) in &args.stage {
        session.stage(*product_id, text.as_str())?;
    }
    Ok(())
}
