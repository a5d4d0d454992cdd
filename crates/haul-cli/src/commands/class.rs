use anyhow::bail;
use haul_core::entities::{ClassificationRecord, NewClassification};
use haul_core::errors::CoreError;
use haul_db::repos::classification::InsertOutcome;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::{ClassAddArgs, ClassCommands, ClassUpdateArgs};
use crate::commands::shared::limit::effective_limit;
use crate::commands::shared::parse::{canonical_freight_class, canonical_packing_group};
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct AddResponse {
    inserted: bool,
    classification_id: Option<i64>,
}

#[derive(Debug, Serialize)]
struct DeleteResponse {
    requested: usize,
    deleted: u64,
}

/// Handle `haul class`.
pub async fn handle(action: &ClassCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        ClassCommands::List => {
            let mut records = ctx.service.list_classifications().await?;
            records.truncate(effective_limit(
                None,
                flags.limit,
                ctx.config.general.default_limit,
            ));
            output(&records, flags.format)
        }
        ClassCommands::Get { id } => {
            let Some(record) = ctx.service.get_classification(*id).await? else {
                return Err(CoreError::not_found("classification", id).into());
            };
            output(&record, flags.format)
        }
        ClassCommands::Add(args) => {
            let new = new_classification(args)?;
            let response = match ctx.service.insert_classification(&new).await? {
                InsertOutcome::Inserted(id) => AddResponse {
                    inserted: true,
                    classification_id: Some(id),
                },
                InsertOutcome::Duplicate => AddResponse {
                    inserted: false,
                    classification_id: None,
                },
            };
            output(&response, flags.format)
        }
        ClassCommands::Update(args) => {
            let Some(current) = ctx.service.get_classification(args.id).await? else {
                return Err(CoreError::not_found("classification", args.id).into());
            };
            let updated = apply_update(current, args)?;
            if !ctx.service.update_classification(&updated).await? {
                bail!("classification {} was removed before the update", args.id);
            }
            output(&updated, flags.format)
        }
        ClassCommands::Delete { ids } => {
            let deleted = ctx.service.delete_classifications(ids).await?;
            output(
                &DeleteResponse {
                    requested: ids.len(),
                    deleted,
                },
                flags.format,
            )
        }
    }
}

fn new_classification(args: &ClassAddArgs) -> anyhow::Result<NewClassification> {
    Ok(NewClassification {
        description: args.description.clone(),
        nmfc: args.nmfc.clone(),
        freight_class: canonical_freight_class(&args.freight_class)?,
        hazardous: args.hazardous,
        hazard_id: args.hazard_id.clone(),
        packing_group: args
            .packing_group
            .as_deref()
            .map(canonical_packing_group)
            .transpose()?,
        sub: args.sub.clone(),
    })
}

/// Overlay the provided flags on the stored record. An empty string clears a
/// text field.
fn apply_update(
    mut record: ClassificationRecord,
    args: &ClassUpdateArgs,
) -> anyhow::Result<ClassificationRecord> {
    fn overlay(current: Option<String>, arg: Option<&String>) -> Option<String> {
        match arg {
            None => current,
            Some(value) if value.is_empty() => None,
            Some(value) => Some(value.clone()),
        }
    }

    if let Some(raw) = &args.freight_class {
        record.freight_class = canonical_freight_class(raw)?;
    }
    if let Some(raw) = &args.packing_group {
        let group = canonical_packing_group(raw)?;
        record.packing_group = overlay(record.packing_group, Some(&group));
    }
    if args.clear_hazardous {
        record.hazardous = None;
    } else if args.hazardous.is_some() {
        record.hazardous = args.hazardous;
    }
    record.description = overlay(record.description, args.description.as_ref());
    record.nmfc = overlay(record.nmfc, args.nmfc.as_ref());
    record.hazard_id = overlay(record.hazard_id, args.hazard_id.as_ref());
    record.sub = overlay(record.sub, args.sub.as_ref());
    Ok(record)
}
