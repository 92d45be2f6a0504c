//! Rule selection configuration.

use serde::{Deserialize, Serialize};

/// Which catalogue rules to run. Empty `select` means all rules.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RulesConfig {
    pub select: Vec<String>,
    pub ignore: Vec<String>,
}

impl RulesConfig {
    /// Split a comma-separated code list, trimming blanks.
    pub fn parse_codes(list: &str) -> Vec<String> {
        list.split(',')
            .map(str::trim)
            .filter(|code| !code.is_empty())
            .map(str::to_string)
            .collect()
    }
}
