//! Engine configuration.
//!
//! ```
//! use souffle::config::{ArrayHandling, EngineConfig};
//! use souffle::rules::LengthMode;
//!
//! let config: EngineConfig = serde_json::from_str(
//!     r#"{ "length_mode": "bytes", "arrays": "recurse" }"#,
//! ).unwrap();
//!
//! assert_eq!(config.length_mode, LengthMode::Bytes);
//! assert_eq!(config.arrays, ArrayHandling::Recurse);
//! assert_eq!(config.max_depth, EngineConfig::DEFAULT_MAX_DEPTH);
//! ```

use serde::{Deserialize, Serialize};

use crate::rules::LengthMode;

/// How Tree Mode treats array-valued fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArrayHandling {
    /// Arrays are validated by the leaf rule set for their key
    /// (`isArray`, `contains`, `minLength`, ...).
    #[default]
    Leaf,
    /// Arrays are walked like objects keyed by index (`"0"`, `"1"`, ...).
    Recurse,
}

/// Tunables for rule evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// How string lengths are measured by the length rules.
    pub length_mode: LengthMode,
    /// How Tree Mode treats array-valued fields.
    pub arrays: ArrayHandling,
    /// Maximum nesting of the value tree before Tree Mode gives up.
    pub max_depth: usize,
}

impl EngineConfig {
    /// Default nesting limit.
    pub const DEFAULT_MAX_DEPTH: usize = 64;

    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the length counting mode.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_length_mode(mut self, mode: LengthMode) -> Self {
        self.length_mode = mode;
        self
    }

    /// Sets the array handling policy.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_arrays(mut self, arrays: ArrayHandling) -> Self {
        self.arrays = arrays;
        self
    }

    /// Sets the nesting limit.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            length_mode: LengthMode::Chars,
            arrays: ArrayHandling::Leaf,
            max_depth: Self::DEFAULT_MAX_DEPTH,
        }
    }
}
