//! Tree Mode: validate an object against a mirrored rule tree.
//!
//! For every key of the rule tree, in order:
//!
//! 1. Look up the same key in the value tree (a missing key reads as `null`).
//! 2. If that value is an object, recurse with the nested rule tree. The
//!    nested rules are not also applied as a leaf rule set.
//! 3. Otherwise apply the rule tree entry as a leaf rule set: a map from
//!    rule name to either a boolean (the predicate result must equal it) or
//!    a parameter (the predicate must pass with it).
//!
//! Arrays are leaves unless [`ArrayHandling::Recurse`] is configured.

use serde_json::{Map, Value};

use crate::config::{ArrayHandling, EngineConfig};
use crate::engine::evaluate;
use crate::foundation::{
    Expectation, SouffleError, ValidationError, ValidationErrors, ValidationResult, value_kind,
};
use crate::registry::RuleRegistry;

static MISSING: Value = Value::Null;

/// Validates `values` against `rules`.
///
/// Returns every failure in evaluation order: rule-tree key order, then rule
/// order within each leaf rule set. An empty vector means every rule passed.
///
/// # Errors
///
/// - [`SouffleError::NotAnObject`] if either argument is not an object.
/// - [`SouffleError::UnknownRule`] if a leaf names an unregistered rule.
/// - [`SouffleError::MalformedRules`] if a rule tree node is not an object.
/// - [`SouffleError::DepthExceeded`] past [`EngineConfig::max_depth`].
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use souffle::config::EngineConfig;
/// use souffle::engine::validate_tree;
/// use souffle::registry::RuleRegistry;
///
/// let errors = validate_tree(
///     RuleRegistry::global(),
///     &EngineConfig::default(),
///     &json!({ "age": 15 }),
///     &json!({ "age": { "isNumber": false } }),
/// )
/// .unwrap();
///
/// assert_eq!(errors.len(), 1);
/// assert_eq!(errors[0].message, "Not a number");
/// assert_eq!(errors[0].field.as_deref(), Some("age"));
/// ```
pub fn validate_tree(
    registry: &RuleRegistry,
    config: &EngineConfig,
    values: &Value,
    rules: &Value,
) -> ValidationResult {
    let values = values.as_object().ok_or(SouffleError::NotAnObject {
        what: "values",
        actual: value_kind(values),
    })?;
    let rules = rules.as_object().ok_or(SouffleError::NotAnObject {
        what: "rules",
        actual: value_kind(rules),
    })?;

    let mut walker = TreeWalker {
        registry,
        config,
        errors: ValidationErrors::new(),
    };
    walker.walk(Node::Object(values), rules, "", 0)?;

    tracing::debug!(failures = walker.errors.len(), "validated rule tree");
    Ok(walker.errors.into_vec())
}

/// A value-tree node that can be descended into.
#[derive(Clone, Copy)]
enum Node<'v> {
    Object(&'v Map<String, Value>),
    Array(&'v [Value]),
}

impl<'v> Node<'v> {
    fn get(self, key: &str) -> Option<&'v Value> {
        match self {
            Node::Object(map) => map.get(key),
            Node::Array(items) => key.parse::<usize>().ok().and_then(|i| items.get(i)),
        }
    }
}

struct TreeWalker<'a> {
    registry: &'a RuleRegistry,
    config: &'a EngineConfig,
    errors: ValidationErrors,
}

impl TreeWalker<'_> {
    fn walk(
        &mut self,
        node: Node<'_>,
        rules: &Map<String, Value>,
        path: &str,
        depth: usize,
    ) -> Result<(), SouffleError> {
        for (key, entry) in rules {
            let field = join(path, key);
            let value = node.get(key).unwrap_or(&MISSING);

            match self.descend(value) {
                Some(child) => {
                    if depth >= self.config.max_depth {
                        return Err(SouffleError::DepthExceeded {
                            limit: self.config.max_depth,
                            path: field,
                        });
                    }
                    let nested = entry.as_object().ok_or_else(|| SouffleError::MalformedRules {
                        path: field.clone(),
                        reason: format!(
                            "value is {}, so a nested rule tree is expected, got {}",
                            value_kind(value),
                            value_kind(entry)
                        ),
                    })?;
                    self.walk(child, nested, &field, depth + 1)?;
                }
                None => self.apply_leaf(value, entry, &field)?,
            }
        }
        Ok(())
    }

    /// Returns the node to recurse into, or `None` if `value` is a leaf.
    fn descend<'v>(&self, value: &'v Value) -> Option<Node<'v>> {
        match value {
            Value::Object(map) => Some(Node::Object(map)),
            Value::Array(items) if self.config.arrays == ArrayHandling::Recurse => {
                Some(Node::Array(items))
            }
            _ => None,
        }
    }

    fn apply_leaf(&mut self, value: &Value, leaf: &Value, field: &str) -> Result<(), SouffleError> {
        let leaf = leaf.as_object().ok_or_else(|| SouffleError::MalformedRules {
            path: field.to_owned(),
            reason: format!("expected a leaf rule set, got {}", value_kind(leaf)),
        })?;

        let registry = self.registry;
        for (name, raw) in leaf {
            let rule = registry.get(name)?;

            let failure = match Expectation::from(raw) {
                Expectation::Flag(expected) => {
                    let outcome = evaluate(name, rule, value, &[], Some(field));
                    (outcome != Some(expected)).then(|| rule.error(value, &[]))
                }
                Expectation::Param(param) => {
                    let params = std::slice::from_ref(param);
                    let outcome = evaluate(name, rule, value, params, Some(field));
                    (outcome != Some(true)).then(|| rule.error(value, params))
                }
            };

            if let Some(error) = failure {
                self.errors.add(with_field(error, field));
            }
        }
        Ok(())
    }
}

fn join(path: &str, key: &str) -> String {
    if path.is_empty() {
        key.to_owned()
    } else {
        format!("{path}.{key}")
    }
}

fn with_field(error: ValidationError, field: &str) -> ValidationError {
    if error.field.is_some() {
        error
    } else {
        error.with_field(field.to_owned())
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn run(values: Value, rules: Value) -> ValidationResult {
        validate_tree(RuleRegistry::global(), &EngineConfig::default(), &values, &rules)
    }

    fn messages(result: ValidationResult) -> Vec<(String, String)> {
        result
            .unwrap()
            .into_iter()
            .map(|e| (e.field.unwrap_or_default().into_owned(), e.message.into_owned()))
            .collect()
    }

    #[test]
    fn test_empty_trees() {
        assert!(run(json!({}), json!({})).unwrap().is_empty());
    }

    #[test]
    fn test_nested_pass() {
        let values = json!({ "owner": { "firstName": "Magic", "lastName": "Dave" } });
        let rules = json!({
            "owner": {
                "firstName": { "isNotBlank": true },
                "lastName": { "isNotBlank": true }
            }
        });
        assert!(run(values, rules).unwrap().is_empty());
    }

    #[test]
    fn test_flag_mismatch() {
        let errors = run(json!({ "age": 15 }), json!({ "age": { "isNumber": false } })).unwrap();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].code, "isNumber");
        assert_eq!(errors[0].message, "Not a number");
    }

    #[test]
    fn test_param_failure() {
        let errors = run(
            json!({ "name": "Magical Donkey" }),
            json!({ "name": { "isString": true, "minLength": 10, "maxLength": 12 } }),
        )
        .unwrap();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].code, "maxLength");
        assert_eq!(errors[0].param("expected"), Some("12"));
        assert_eq!(errors[0].param("actual"), Some("14"));
    }

    #[test]
    fn test_order_and_no_dedup() {
        let values = json!({ "b": "", "a": 5, "c": { "d": "  " } });
        let rules = json!({
            "a": { "isString": true, "isNotBlank": true },
            "b": { "isNotBlank": true, "minLength": 1 },
            "c": { "d": { "isNotBlank": true } }
        });
        assert_eq!(
            messages(run(values, rules)),
            vec![
                ("a".to_owned(), "Not a string".to_owned()),
                ("a".to_owned(), "Cannot be blank".to_owned()),
                ("b".to_owned(), "Cannot be blank".to_owned()),
                ("b".to_owned(), "Length must be at least 1".to_owned()),
                ("c.d".to_owned(), "Cannot be blank".to_owned()),
            ]
        );
    }

    #[test]
    fn test_missing_key_is_null() {
        let errors = run(
            json!({}),
            json!({ "name": { "isNotBlank": true, "isString": true } }),
        )
        .unwrap();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].field.as_deref(), Some("name"));
    }

    #[test]
    fn test_fault_counts_as_failure_even_for_false_flag() {
        // isNotBlank faults on a number; the fault is a failure regardless of the flag.
        let errors = run(json!({ "age": 15 }), json!({ "age": { "isNotBlank": false } })).unwrap();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message, "Cannot be blank");
    }

    #[test]
    fn test_unknown_rule_is_fatal() {
        let err = run(json!({ "a": 1 }), json!({ "a": { "isPrime": true } })).unwrap_err();
        assert_eq!(
            err,
            SouffleError::UnknownRule {
                name: "isPrime".into()
            }
        );
    }

    #[test]
    fn test_object_value_with_leaf_rules_is_malformed() {
        let err = run(json!({ "owner": { "name": "x" } }), json!({ "owner": true })).unwrap_err();
        assert!(matches!(err, SouffleError::MalformedRules { ref path, .. } if path == "owner"));
    }

    #[test]
    fn test_leaf_not_an_object_is_malformed() {
        let err = run(json!({ "age": 1 }), json!({ "age": "isNumber" })).unwrap_err();
        assert!(matches!(err, SouffleError::MalformedRules { .. }));
    }

    #[test]
    fn test_top_level_must_be_objects() {
        assert!(matches!(
            run(json!("x"), json!({})),
            Err(SouffleError::NotAnObject { what: "values", actual: "string" })
        ));
        assert!(matches!(
            run(json!({}), json!([])),
            Err(SouffleError::NotAnObject { what: "rules", actual: "array" })
        ));
    }

    #[test]
    fn test_array_is_leaf_by_default() {
        let errors = run(
            json!({ "tags": ["rust", "json"] }),
            json!({ "tags": { "isArray": true, "contains": "rust", "minLength": 3 } }),
        )
        .unwrap();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].code, "minLength");
    }

    #[test]
    fn test_array_recurse() {
        let config = EngineConfig::default().with_arrays(ArrayHandling::Recurse);
        let errors = validate_tree(
            RuleRegistry::global(),
            &config,
            &json!({ "tags": ["rust", ""] }),
            &json!({ "tags": { "0": { "isNotBlank": true }, "1": { "isNotBlank": true } } }),
        )
        .unwrap();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field.as_deref(), Some("tags.1"));
    }

    #[test]
    fn test_depth_limit() {
        let config = EngineConfig::default().with_max_depth(1);
        let err = validate_tree(
            RuleRegistry::global(),
            &config,
            &json!({ "a": { "b": { "c": 1 } } }),
            &json!({ "a": { "b": { "c": { "isNumber": true } } } }),
        )
        .unwrap_err();
        assert_eq!(
            err,
            SouffleError::DepthExceeded {
                limit: 1,
                path: "a.b".into()
            }
        );
    }

    #[test]
    fn test_idempotent() {
        let values = json!({ "name": "", "owner": { "email": "nope" } });
        let rules = json!({
            "name": { "isNotBlank": true },
            "owner": { "email": { "isEmail": true } }
        });
        assert_eq!(
            run(values.clone(), rules.clone()).unwrap(),
            run(values, rules).unwrap()
        );
    }
}
