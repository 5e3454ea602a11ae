//! Convenience re-exports for common validation use.
//!
//! ```
//! use souffle::prelude::*;
//! use serde_json::json;
//!
//! let errors = Souffle::value("a@b.com").is_email().exec().unwrap();
//! assert!(errors.is_empty());
//!
//! let errors = Souffle::validate(&json!({}), &json!({})).unwrap();
//! assert!(errors.is_empty());
//! ```

pub use crate::config::{ArrayHandling, EngineConfig};
pub use crate::engine::{Session, validate_tree};
pub use crate::foundation::{
    Expectation, FnRule, Rule, RuleFault, SouffleError, ValidationError, ValidationErrors,
    ValidationResult,
};
pub use crate::registry::RuleRegistry;
pub use crate::rules::LengthMode;
pub use crate::{Souffle, Validation};
