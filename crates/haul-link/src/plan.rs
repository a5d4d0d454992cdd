//! Parsing staged text into a link batch.

use std::collections::{HashMap, HashSet};

use haul_core::entities::{LinkUpdate, UnlinkedProduct};
use haul_core::errors::ValidationError;
use serde::Serialize;

/// A selected row that was left out of the batch, and why.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RejectedRow {
    pub product_id: i64,
    pub link_id: i64,
    pub reason: ValidationError,
}

/// What a submit would send: the accepted updates in list order, plus every
/// selected row that failed validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SubmissionPlan {
    pub updates: Vec<LinkUpdate>,
    pub rejected: Vec<RejectedRow>,
}

impl SubmissionPlan {
    /// Build the plan from the listed rows, the selected product ids, and the
    /// staged text keyed by product id. Unselected rows are ignored even when
    /// they have staged text.
    #[must_use]
    pub fn build(
        rows: &[UnlinkedProduct],
        selected: &HashSet<i64>,
        staged: &HashMap<i64, String>,
    ) -> Self {
        let mut plan = Self::default();
        for row in rows.iter().filter(|row| selected.contains(&row.product_id)) {
            let text = staged.get(&row.product_id).map(String::as_str);
            match parse_classification_id(text) {
                Ok(classification_id) => plan.updates.push(LinkUpdate {
                    link_id: row.link_id,
                    classification_id,
                }),
                Err(reason) => plan.rejected.push(RejectedRow {
                    product_id: row.product_id,
                    link_id: row.link_id,
                    reason,
                }),
            }
        }
        plan
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.updates.is_empty()
    }
}

/// Parse staged text as a classification id. Surrounding whitespace is
/// ignored; the value must be a positive integer.
///
/// # Errors
///
/// Returns the `ValidationError` describing why the text was refused.
pub fn parse_classification_id(text: Option<&str>) -> Result<i64, ValidationError> {
    let trimmed = text.map(str::trim).unwrap_or_default();
    if trimmed.is_empty() {
        return Err(ValidationError::Missing);
    }
    let value: i64 = trimmed.parse().map_err(|_| ValidationError::NotANumber {
        text: trimmed.to_string(),
    })?;
    if value <= 0 {
        return Err(ValidationError::NotPositive { value });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(Some("7"), Ok(7))]
    #[case(Some("  42 "), Ok(42))]
    #[case(None, Err(ValidationError::Missing))]
    #[case(Some("   "), Err(ValidationError::Missing))]
    #[case(Some("abc"), Err(ValidationError::NotANumber { text: "abc".into() }))]
    #[case(Some("7.5"), Err(ValidationError::NotANumber { text: "7.5".into() }))]
    #[case(Some("0"), Err(ValidationError::NotPositive { value: 0 }))]
    #[case(Some("-3"), Err(ValidationError::NotPositive { value: -3 }))]
    fn parse_staged_text(#[case] text: Option<&str>, #[case] expected: Result<i64, ValidationError>) {
        assert_eq!(parse_classification_id(text), expected);
    }

    fn row(link_id: i64, product_id: i64) -> UnlinkedProduct {
        UnlinkedProduct {
            link_id,
            product_id,
            sku: format!("SKU{product_id}"),
            name: format!("Product {product_id}"),
        }
    }

    #[test]
    fn build_keeps_list_order_and_reports_rejects() {
        let rows = vec![row(10, 100), row(11, 101), row(12, 102), row(13, 103)];
        let selected: HashSet<i64> = [103, 100, 101].into_iter().collect();
        let staged: HashMap<i64, String> = [
            (100, "7".to_string()),
            (101, "abc".to_string()),
            (102, "9".to_string()),
            (103, "8".to_string()),
        ]
        .into_iter()
        .collect();

        let plan = SubmissionPlan::build(&rows, &selected, &staged);

        assert_eq!(
            plan.updates,
            vec![
                LinkUpdate {
                    link_id: 10,
                    classification_id: 7
                },
                LinkUpdate {
                    link_id: 13,
                    classification_id: 8
                },
            ]
        );
        assert_eq!(
            plan.rejected,
            vec![RejectedRow {
                product_id: 101,
                link_id: 11,
                reason: ValidationError::NotANumber { text: "abc".into() },
            }]
        );
    }

    #[test]
    fn selected_row_without_staged_text_is_missing() {
        let rows = vec![row(10, 100)];
        let selected: HashSet<i64> = [100].into_iter().collect();
        let plan = SubmissionPlan::build(&rows, &selected, &HashMap::new());
        assert!(plan.is_empty());
        assert_eq!(plan.rejected[0].reason, ValidationError::Missing);
    }

    #[test]
    fn rejected_row_serializes_reason_kind() {
        let rejected = RejectedRow {
            product_id: 1,
            link_id: 2,
            reason: ValidationError::NotPositive { value: 0 },
        };
        let json = serde_json::to_value(&rejected).unwrap();
        assert_eq!(json["reason"]["kind"], "not_positive");
        assert_eq!(json["reason"]["value"], 0);
    }
}
