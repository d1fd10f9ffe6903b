use std::str::FromStr;

use anyhow::bail;
use dcc_core::enums::ProfileTab;

/// Parse a snake_case enum value, accepting hyphens and any case.
pub fn parse_enum<T>(raw: &str) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let normalized = raw.trim().to_ascii_lowercase().replace('-', "_");
    Ok(normalized.parse::<T>()?)
}

/// Parse `--tab`: `all`, one tab, or a comma-separated list in the given order.
pub fn parse_tabs(raw: &str) -> anyhow::Result<Vec<ProfileTab>> {
    if raw.trim().eq_ignore_ascii_case("all") {
        return Ok(ProfileTab::ALL.to_vec());
    }
    let tabs = raw
        .split(',')
        .filter(|part| !part.trim().is_empty())
        .map(parse_enum::<ProfileTab>)
        .collect::<anyhow::Result<Vec<_>>>()?;
    if tabs.is_empty() {
        bail!("--tab needs at least one tab name or 'all'");
    }
    Ok(tabs)
}
