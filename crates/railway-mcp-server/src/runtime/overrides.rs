use schemars::JsonSchema;
use serde::Deserialize;

/// Overridable flags
#[derive(Debug, Deserialize, Default, JsonSchema)]
#[serde(default)]
pub struct Overrides {
    /// Only expose tools backed by queries, hiding every tool that changes Railway resources
    pub read_only: bool,
}
