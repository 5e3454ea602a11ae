//! Rule evaluation engines
//!
//! - [`tree`]: validates an object against a mirrored rule tree.
//! - [`session`]: validates one value against a fluent chain of rules.
//!
//! Both go through [`evaluate`], the fault boundary around a single
//! predicate call. Faults raised inside a predicate stop there; everything
//! else (unknown rules, malformed trees) propagates as [`SouffleError`].
//!
//! [`SouffleError`]: crate::foundation::SouffleError

pub mod session;
pub mod tree;

pub use session::Session;
pub use tree::validate_tree;

use serde_json::Value;

use crate::foundation::Rule;

/// Runs one predicate.
///
/// Returns `None` when the predicate faulted; the fault is logged and the
/// caller records it as a failure of `name`.
pub(crate) fn evaluate(
    name: &str,
    rule: &dyn Rule,
    value: &Value,
    params: &[Value],
    field: Option<&str>,
) -> Option<bool> {
    match rule.check(value, params) {
        Ok(passed) => {
            tracing::trace!(rule = name, field, passed, "evaluated rule");
            Some(passed)
        }
        Err(fault) => {
            tracing::debug!(rule = name, field, %fault, "rule predicate faulted, recording failure");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::{FnRule, RuleFault, ValidationError};
    use serde_json::json;

    #[test]
    fn test_evaluate_passes_through_result() {
        let rule = FnRule::new(
            |value, _| Ok(value.is_null()),
            |_, _| ValidationError::new("isNull", "Not null"),
        );
        assert_eq!(evaluate("isNull", &rule, &json!(null), &[], None), Some(true));
        assert_eq!(evaluate("isNull", &rule, &json!(1), &[], Some("a")), Some(false));
    }

    #[test]
    fn test_evaluate_swallows_fault() {
        let rule = FnRule::new(
            |_, _| Err(RuleFault::custom("boom")),
            |_, _| ValidationError::new("boom", "Boom"),
        );
        assert_eq!(evaluate("boom", &rule, &json!(1), &[], None), None);
    }
}
