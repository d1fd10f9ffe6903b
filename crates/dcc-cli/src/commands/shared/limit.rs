/// Compute effective limit with precedence: global flag -> configured default.
#[must_use]
pub fn effective_limit(global: Option<u32>, fallback: u32) -> u32 {
    global.unwrap_or(fallback)
}

/// Convert a configured count to a slice length.
pub fn as_len(value: u32) -> anyhow::Result<usize> {
    Ok(usize::try_from(value)?)
}
