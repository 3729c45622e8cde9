//! Value-system configuration.
//!
//! Owned by the embedding engine and usually loaded from its own config
//! file; every field has a default so a partial document deserializes.

use serde::{Deserialize, Serialize};

use crate::format::{self, Written};
use crate::model::Value;

/// Separator used by the joins when none is configured.
pub const DEFAULT_SEPARATOR: char = ',';

/// Knobs for parsing and formatting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValueConfig {
    /// Separator placed between values by the `concat` family.
    pub separator: char,
    /// Strict `BOOL` parsing also accepts `1` and `0`.
    pub bool_digits: bool,
}

impl Default for ValueConfig {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR,
            bool_digits: true,
        }
    }
}

impl ValueConfig {
    /// [`format::concat_len`] with the configured separator.
    pub fn concat_len(&self, values: &[Value<'_>]) -> usize {
        format::concat_len(values, self.separator)
    }

    /// [`format::concat_into`] with the configured separator.
    pub fn concat_into(&self, values: &[Value<'_>], buf: &mut [u8]) -> Written {
        format::concat_into(values, self.separator, buf)
    }

    /// [`format::concat`] with the configured separator.
    pub fn concat(&self, values: &[Value<'_>]) -> String {
        format::concat(values, self.separator)
    }
}
