use anyhow::Context;
use haul_booking::{BookingRequest, plan_booking};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::{BookCommands, BookPlanArgs};
use crate::context::AppContext;
use crate::output::output;

/// Handle `haul book`.
pub async fn handle(action: &BookCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        BookCommands::Plan(args) => plan(args, ctx, flags).await,
    }
}

async fn plan(args: &BookPlanArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let raw = std::fs::read_to_string(&args.request)
        .with_context(|| format!("failed to read booking request '{}'", args.request))?;
    let mut request: BookingRequest = serde_json::from_str(&raw)
        .with_context(|| format!("invalid booking request JSON in '{}'", args.request))?;
    request.liftgate |= args.liftgate;
    request.limited_access |= args.limited_access;

    let today = args
        .date
        .unwrap_or_else(|| chrono::Local::now().date_naive());
    let plan = plan_booking(&ctx.service, &request, &ctx.config.origin, today).await?;
    output(&plan, flags.format)
}
