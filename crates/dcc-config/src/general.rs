//! Display limits shared by every page.

use serde::{Deserialize, Serialize};

const fn default_limit() -> u32 {
    20
}

const fn default_dashboard_top() -> u32 {
    5
}

const fn default_recent_limit() -> u32 {
    5
}

const fn default_tech_stack_top() -> u32 {
    10
}

const fn default_category_chip_limit() -> u32 {
    5
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Default result limit for list commands.
    #[serde(default = "default_limit")]
    pub default_limit: u32,

    /// Buckets shown on each dashboard distribution card.
    #[serde(default = "default_dashboard_top")]
    pub dashboard_top: u32,

    /// Companies shown on the "Recently Added" card.
    #[serde(default = "default_recent_limit")]
    pub recent_limit: u32,

    /// Buckets kept in the tech stack frequency table.
    #[serde(default = "default_tech_stack_top")]
    pub tech_stack_top: u32,

    /// Category chips offered in the company list filter row.
    #[serde(default = "default_category_chip_limit")]
    pub category_chip_limit: u32,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            dashboard_top: default_dashboard_top(),
            recent_limit: default_recent_limit(),
            tech_stack_top: default_tech_stack_top(),
            category_chip_limit: default_category_chip_limit(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = GeneralConfig::default();
        assert_eq!(config.default_limit, 20);
        assert_eq!(config.dashboard_top, 5);
        assert_eq!(config.recent_limit, 5);
        assert_eq!(config.tech_stack_top, 10);
        assert_eq!(config.category_chip_limit, 5);
    }
}
