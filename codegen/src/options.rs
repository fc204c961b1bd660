//! Run-command configuration.

use serde::Deserialize;

/// Options controlling the generated `run` commands.
///
/// Deserializable from a configuration file with camelCase keys; missing keys
/// take their default values.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct TransformOptions {
    /// Default scope of every run command.
    pub scope: u32,
    /// Integer bitwidth.
    pub int_bitwidth: u32,
    /// Number of worlds in the `multipleWorlds` run.
    pub worlds: u32,
}

impl Default for TransformOptions {
    fn default() -> Self {
        Self {
            scope: 10,
            int_bitwidth: 7,
            worlds: 3,
        }
    }
}
