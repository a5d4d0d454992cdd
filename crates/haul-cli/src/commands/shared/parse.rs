use haul_core::enums::PackingGroup;
use haul_core::freight_class::FreightClass;

/// Parse a `--stage PRODUCT=TEXT` value. The text is kept raw; the linking
/// workflow validates it at submit time.
pub fn parse_stage(raw: &str) -> Result<(i64, String), String> {
    let (product, text) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected PRODUCT=TEXT, got '{raw}'"))?;
    let product_id = product
        .trim()
        .parse::<i64>()
        .map_err(|_| format!("invalid product id '{product}'"))?;
    Ok((product_id, text.to_string()))
}

/// Normalize a freight class to its canonical text (`"077.50"` -> `"77.5"`).
pub fn canonical_freight_class(raw: &str) -> anyhow::Result<String> {
    let class: FreightClass = raw.parse()?;
    Ok(class.to_string())
}

/// Normalize a packing group to `I`/`II`/`III`. Blank input clears the field.
pub fn canonical_packing_group(raw: &str) -> anyhow::Result<String> {
    if raw.trim().is_empty() {
        return Ok(String::new());
    }
    let group: PackingGroup = raw.parse()?;
    Ok(group.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn stage_splits_on_first_equals() {
        assert_eq!(parse_stage("100=7").unwrap(), (100, "7".to_string()));
        assert_eq!(parse_stage("100=a=b").unwrap(), (100, "a=b".to_string()));
        assert_eq!(parse_stage("100=").unwrap(), (100, String::new()));
    }

    #[test]
    fn stage_rejects_bad_product() {
        assert!(parse_stage("7").is_err());
        assert!(parse_stage("abc=7").is_err());
    }

    #[test]
    fn freight_class_is_canonicalized() {
        assert_eq!(canonical_freight_class(" 77.50 ").unwrap(), "77.5");
        assert_eq!(canonical_freight_class("100.0").unwrap(), "100");
        assert!(canonical_freight_class("80").is_err());
    }

    #[test]
    fn packing_group_is_canonicalized() {
        assert_eq!(canonical_packing_group("pg 2").unwrap(), "II");
        assert_eq!(canonical_packing_group("  ").unwrap(), "");
        assert!(canonical_packing_group("IV").is_err());
    }
}
