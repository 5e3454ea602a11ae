//! Error types for validation
//!
//! Three layers live here:
//!
//! - [`ValidationError`]: a data-driven rule failure. Never raised, always
//!   collected into the result sequence.
//! - [`RuleFault`]: a fault inside a predicate (wrong value type, missing
//!   parameter). Engines convert it into a [`ValidationError`] for that rule.
//! - [`SouffleError`]: programmer misuse (unknown rule, malformed rule tree,
//!   missing input). Fatal to the call that produced it.
//!
//! All string fields of [`ValidationError`] use `Cow<'static, str>` so static
//! codes and messages do not allocate.

use std::borrow::Cow;
use std::fmt;

use serde::Serialize;
use smallvec::SmallVec;

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// Ordered key/value parameters attached to an error (typically 0-2).
pub type ErrorParams = SmallVec<[(Cow<'static, str>, Cow<'static, str>); 2]>;

/// A single rule failure.
///
/// # Examples
///
/// ```
/// use souffle::foundation::ValidationError;
///
/// let error = ValidationError::new("minLength", "Must be at least 5 long")
///     .with_field("name")
///     .with_param("expected", "5");
///
/// assert_eq!(error.message, "Must be at least 5 long");
/// assert_eq!(error.param("expected"), Some("5"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    /// Name of the rule that failed, e.g. `"isNotBlank"`.
    pub code: Cow<'static, str>,

    /// Human-readable message produced by the rule's error factory.
    pub message: Cow<'static, str>,

    /// Dotted path of the field in Tree Mode (`"owner.firstName"`).
    ///
    /// Chain Mode errors have no field.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<Cow<'static, str>>,

    /// Parameters for the message, in insertion order.
    #[serde(skip_serializing_if = "SmallVec::is_empty", serialize_with = "serialize_params")]
    pub params: ErrorParams,
}

fn serialize_params<S>(params: &ErrorParams, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    use serde::ser::SerializeMap;

    let mut map = serializer.serialize_map(Some(params.len()))?;
    for (k, v) in params {
        map.serialize_entry(k, v)?;
    }
    map.end()
}

impl ValidationError {
    /// Creates a new error with a code and message.
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            field: None,
            params: SmallVec::new(),
        }
    }

    /// Sets the field path for this error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_field(mut self, field: impl Into<Cow<'static, str>>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Adds a parameter to the error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }

}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(field) = &self.field {
            write!(f, "[{}] {}: {}", field, self.code, self.message)?;
        } else {
            write!(f, "{}: {}", self.code, self.message)?;
        }

        if !self.params.is_empty() {
            write!(f, " (params: [")?;
            for (i, (k, v)) in self.params.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{k}={v}")?;
            }
            write!(f, "])")?;
        }

        Ok(())
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// ERROR COLLECTION
// ============================================================================

/// An append-only, order-preserving collection of rule failures.
///
/// No deduplication: a field failing two rules yields two entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    /// Creates a new empty error collection.
    #[must_use]
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Appends an error.
    pub fn add(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Returns the number of errors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns true if empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns all errors.
    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Consumes the collection and returns the errors in order.
    #[must_use]
    pub fn into_vec(self) -> Vec<ValidationError> {
        self.errors
    }
}

// ============================================================================
// PREDICATE FAULT
// ============================================================================

/// A fault raised while evaluating a predicate.
///
/// Engines never propagate this; it is logged and recorded as a failure of
/// the rule that raised it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuleFault {
    /// The value has a type the rule cannot inspect.
    #[error("expected {expected}, got {actual}")]
    TypeMismatch {
        /// Type the rule operates on.
        expected: &'static str,
        /// JSON type of the value.
        actual: &'static str,
    },

    /// Wrong number of parameters.
    #[error("expected {expected} parameter(s), got {actual}")]
    Arity {
        /// Accepted arities, e.g. `"1 or 2"`.
        expected: &'static str,
        /// Number of parameters supplied.
        actual: usize,
    },

    /// A parameter has the wrong type.
    #[error("parameter {index} must be {expected}, got {actual}")]
    BadParam {
        /// Zero-based parameter position.
        index: usize,
        /// What the rule wanted.
        expected: &'static str,
        /// JSON type of the parameter.
        actual: &'static str,
    },

    /// A pattern parameter failed to compile.
    #[error("invalid pattern: {0}")]
    Pattern(String),

    /// Free-form fault from a custom rule.
    #[error("{0}")]
    Custom(String),
}

impl RuleFault {
    /// Creates a free-form fault.
    pub fn custom(message: impl Into<String>) -> Self {
        Self::Custom(message.into())
    }
}

impl From<regex::Error> for RuleFault {
    fn from(error: regex::Error) -> Self {
        Self::Pattern(error.to_string())
    }
}

// ============================================================================
// FATAL ERRORS
// ============================================================================

/// Programmer misuse of the engine.
///
/// Unlike rule failures these are never collected; they abort the call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SouffleError {
    /// Neither a value nor a rule tree was supplied.
    #[error(
        "please either provide an object and corresponding ruleset, or a value: \
         use `Souffle::validate(values, rules)` or `Souffle::value(value)`"
    )]
    MissingInput,

    /// A rule name was used that the registry does not know.
    #[error("unknown rule: {name}")]
    UnknownRule {
        /// The name that was looked up.
        name: String,
    },

    /// A rule tree node is not shaped as expected.
    #[error("malformed rule tree at `{path}`: {reason}")]
    MalformedRules {
        /// Dotted path of the offending node (empty for the root).
        path: String,
        /// What was wrong.
        reason: String,
    },

    /// Tree Mode requires object-shaped input.
    #[error("{what} must be an object, got {actual}")]
    NotAnObject {
        /// `"values"` or `"rules"`.
        what: &'static str,
        /// JSON type that was supplied.
        actual: &'static str,
    },

    /// The value tree nests deeper than the configured limit.
    #[error("nesting deeper than {limit} levels at `{path}`")]
    DepthExceeded {
        /// Configured maximum depth.
        limit: usize,
        /// Dotted path where the limit was hit.
        path: String,
    },
}

// ============================================================================
// TESTS
// ============================================================================
