/// Compute effective limit with precedence: local arg -> global flag -> configured default.
#[must_use]
pub fn effective_limit(local: Option<u32>, global: Option<u32>, configured: u32) -> usize {
    let limit = local.or(global).unwrap_or(configured);
    usize::try_from(limit).unwrap_or(usize::MAX)
}
