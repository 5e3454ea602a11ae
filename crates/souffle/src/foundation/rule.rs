//! The `Rule` trait and helpers shared by rule implementations.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::foundation::{RuleFault, ValidationError};

// ============================================================================
// RULE TRAIT
// ============================================================================

/// A named validation: a predicate paired with an error factory.
///
/// Both methods receive the same `(value, params)` arguments. A predicate
/// does not need to type-check defensively: returning a [`RuleFault`] is
/// equivalent to returning `Ok(false)` from the caller's point of view.
///
/// # Examples
///
/// ```
/// use serde_json::{Value, json};
/// use souffle::foundation::{Rule, RuleFault, ValidationError, expect_arity, value_kind};
///
/// struct IsEven;
///
/// impl Rule for IsEven {
///     fn check(&self, value: &Value, params: &[Value]) -> Result<bool, RuleFault> {
///         expect_arity(params, 0, "0")?;
///         let n = value.as_i64().ok_or(RuleFault::TypeMismatch {
///             expected: "integer",
///             actual: value_kind(value),
///         })?;
///         Ok(n % 2 == 0)
///     }
///
///     fn error(&self, _value: &Value, _params: &[Value]) -> ValidationError {
///         ValidationError::new("isEven", "Not an even number")
///     }
/// }
///
/// assert_eq!(IsEven.check(&json!(4), &[]), Ok(true));
/// assert!(IsEven.check(&json!("4"), &[]).is_err());
/// ```
pub trait Rule: Send + Sync {
    /// Returns whether `value` satisfies the rule given `params`.
    fn check(&self, value: &Value, params: &[Value]) -> Result<bool, RuleFault>;

    /// Builds the failure record for the same arguments the predicate got.
    fn error(&self, value: &Value, params: &[Value]) -> ValidationError;
}

impl<R: Rule + ?Sized> Rule for Arc<R> {
    fn check(&self, value: &Value, params: &[Value]) -> Result<bool, RuleFault> {
        (**self).check(value, params)
    }

    fn error(&self, value: &Value, params: &[Value]) -> ValidationError {
        (**self).error(value, params)
    }
}

// ============================================================================
// CLOSURE RULE
// ============================================================================

type Predicate = dyn Fn(&Value, &[Value]) -> Result<bool, RuleFault> + Send + Sync;
type ErrorFactory = dyn Fn(&Value, &[Value]) -> ValidationError + Send + Sync;

/// A rule built from a predicate closure and an error-factory closure.
///
/// This is the extension point for callers adding their own rules to a
/// [`RuleRegistry`](crate::registry::RuleRegistry).
///
/// ```
/// use souffle::foundation::{FnRule, Rule, ValidationError};
/// use serde_json::json;
///
/// let positive = FnRule::new(
///     |value, _| Ok(value.as_f64().is_some_and(|n| n > 0.0)),
///     |_, _| ValidationError::new("isPositive", "Must be positive"),
/// );
/// assert_eq!(positive.check(&json!(3), &[]), Ok(true));
/// assert_eq!(positive.check(&json!(-3), &[]), Ok(false));
/// ```
#[derive(Clone)]
pub struct FnRule {
    predicate: Arc<Predicate>,
    error: Arc<ErrorFactory>,
}

impl FnRule {
    /// Creates a rule from a predicate and an error factory.
    pub fn new<P, E>(predicate: P, error: E) -> Self
    where
        P: Fn(&Value, &[Value]) -> Result<bool, RuleFault> + Send + Sync + 'static,
        E: Fn(&Value, &[Value]) -> ValidationError + Send + Sync + 'static,
    {
        Self {
            predicate: Arc::new(predicate),
            error: Arc::new(error),
        }
    }
}

impl Rule for FnRule {
    fn check(&self, value: &Value, params: &[Value]) -> Result<bool, RuleFault> {
        (self.predicate)(value, params)
    }

    fn error(&self, value: &Value, params: &[Value]) -> ValidationError {
        (self.error)(value, params)
    }
}

impl fmt::Debug for FnRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnRule")
            .field("predicate", &"<function>")
            .field("error", &"<function>")
            .finish()
    }
}

// ============================================================================
// EXPECTATION
// ============================================================================

/// How a leaf entry of a rule tree is applied.
///
/// `{"isString": true}` is a [`Flag`](Expectation::Flag): the predicate is
/// called with the value only and its result must equal the flag.
/// `{"minLength": 5}` is a [`Param`](Expectation::Param): the predicate is
/// called with the value and the parameter and must pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Expectation<'a> {
    /// Predicate result must equal this boolean.
    Flag(bool),
    /// Predicate must pass when given this parameter.
    Param(&'a Value),
}

impl<'a> From<&'a Value> for Expectation<'a> {
    fn from(value: &'a Value) -> Self {
        match value {
            Value::Bool(b) => Self::Flag(*b),
            other => Self::Param(other),
        }
    }
}

// ============================================================================
// PARAMETER HELPERS
// ============================================================================

/// Returns the JSON type name of a value, for fault messages.
#[must_use]
pub fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Fails unless exactly `count` parameters were supplied.
pub fn expect_arity(params: &[Value], count: usize, label: &'static str) -> Result<(), RuleFault> {
    if params.len() == count {
        Ok(())
    } else {
        Err(RuleFault::Arity {
            expected: label,
            actual: params.len(),
        })
    }
}

/// Returns parameter `index` or an arity fault.
pub fn param_at<'a>(
    params: &'a [Value],
    index: usize,
    label: &'static str,
) -> Result<&'a Value, RuleFault> {
    params.get(index).ok_or(RuleFault::Arity {
        expected: label,
        actual: params.len(),
    })
}

/// Reads parameter `index` as a non-negative integer.
///
/// Whole-number floats such as `5.0` are accepted.
pub fn usize_param(params: &[Value], index: usize, label: &'static str) -> Result<usize, RuleFault> {
    let param = param_at(params, index, label)?;
    param
        .as_u64()
        .or_else(|| {
            param
                .as_f64()
                .filter(|n| n.fract() == 0.0 && *n >= 0.0)
                .map(|n| n as u64)
        })
        .map(|n| n as usize)
        .ok_or(RuleFault::BadParam {
            index,
            expected: "a non-negative integer",
            actual: value_kind(param),
        })
}

/// Reads parameter `index` as a string.
pub fn str_param<'a>(
    params: &'a [Value],
    index: usize,
    label: &'static str,
) -> Result<&'a str, RuleFault> {
    let param = param_at(params, index, label)?;
    param.as_str().ok_or(RuleFault::BadParam {
        index,
        expected: "a string",
        actual: value_kind(param),
    })
}

/// Reads the value as a string.
pub fn expect_str(value: &Value) -> Result<&str, RuleFault> {
    value.as_str().ok_or(RuleFault::TypeMismatch {
        expected: "string",
        actual: value_kind(value),
    })
}

/// Renders a parameter for an error message without JSON quoting of strings.
#[must_use]
pub fn display_param(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

// ============================================================================
// TESTS
// ============================================================================
