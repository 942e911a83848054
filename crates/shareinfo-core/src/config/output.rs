//! Inspection output configuration.

use serde::{Deserialize, Serialize};

/// Defaults for how share summaries are rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Output format: `"table"` or `"json"`.
    #[serde(default = "default_format")]
    pub format: String,
    /// Also print keys that no typed accessor covers.
    #[serde(default)]
    pub include_unknown: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            include_unknown: false,
        }
    }
}

fn default_format() -> String {
    "table".to_string()
}
