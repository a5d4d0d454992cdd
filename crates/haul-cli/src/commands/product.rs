use haul_core::entities::{LinkRecord, ProductRecord};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ProductCommands;
use crate::commands::shared::limit::effective_limit;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct EnsureResponse {
    created: bool,
    product: ProductRecord,
    link: Option<LinkRecord>,
}

/// Handle `haul product`.
pub async fn handle(
    action: &ProductCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ProductCommands::List { limit } => {
            let mut products = ctx.service.list_products().await?;
            products.truncate(effective_limit(
                *limit,
                flags.limit,
                ctx.config.general.default_limit,
            ));
            output(&products, flags.format)
        }
        ProductCommands::Ensure {
            sku,
            name,
            with_link,
        } => {
            let outcome = ctx.service.ensure_product(sku, name).await?;
            let created = outcome.was_created();
            let product = outcome.into_product();
            let link = if *with_link {
                Some(ctx.service.ensure_link(product.product_id).await?)
            } else {
                None
            };
            output(
                &EnsureResponse {
                    created,
                    product,
                    link,
                },
                flags.format,
            )
        }
    }
}
