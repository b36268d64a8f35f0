use std::str::FromStr;

use serde::{Deserialize, Deserializer};
use tracing::Level;

/// Parse a tracing level from its name, in any case
pub(super) fn level<'de, D>(deserializer: D) -> Result<Level, D::Error>
where
    D: Deserializer<'de>,
{
    let name = String::deserialize(deserializer)?;

    Level::from_str(&name)
        .map_err(|_| serde::de::Error::custom(format!("invalid log level `{name}`")))
}
