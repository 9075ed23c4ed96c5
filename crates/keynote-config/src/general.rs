//! Settings shared by every command.

use serde::{Deserialize, Serialize};

const fn default_list_limit() -> u32 {
    20
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Rows returned by list commands when neither `--limit` flag is given.
    #[serde(default = "default_list_limit")]
    pub default_limit: u32,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_limit: default_list_limit(),
        }
    }
}
