//! Chain Mode: validate a single value against a fluent sequence of rules.
//!
//! ```
//! use souffle::Souffle;
//!
//! let errors = Souffle::value("Donkey")
//!     .is_string()
//!     .length_between(5, 10)
//!     .exec()
//!     .unwrap();
//!
//! assert!(errors.is_empty());
//! ```

use serde_json::Value;
use smallvec::SmallVec;

use crate::engine::evaluate;
use crate::foundation::{SouffleError, ValidationError, ValidationErrors, ValidationResult};
use crate::registry::RuleRegistry;
use crate::rules::{
    Contains, IsArray, IsEmail, IsNotBlank, IsNumber, IsString, IsUrl, Length, Matches, MaxLength,
    MinKeys, MinLength,
};

/// Parameters of one chained call; most rules take zero or one.
type Params = SmallVec<[Value; 2]>;

/// A validation session over one value.
///
/// Each rule method runs the named predicate with `(value, params)` and, if
/// it does not pass, appends the rule's error. Predicate faults count as
/// failures. Calling a rule the registry does not know poisons the session:
/// later calls are skipped and [`exec`](Session::exec) returns the error.
#[derive(Debug, Clone)]
pub struct Session<'r> {
    registry: &'r RuleRegistry,
    value: Value,
    errors: ValidationErrors,
    poisoned: Option<SouffleError>,
}

impl<'r> Session<'r> {
    /// Starts a session for `value` against `registry`.
    pub fn new(registry: &'r RuleRegistry, value: impl Into<Value>) -> Self {
        Self {
            registry,
            value: value.into(),
            errors: ValidationErrors::new(),
            poisoned: None,
        }
    }

    /// Runs the rule registered under `name` with the given parameters.
    ///
    /// ```
    /// use souffle::Souffle;
    ///
    /// let errors = Souffle::value(42)
    ///     .apply("minLength", [3])
    ///     .exec()
    ///     .unwrap();
    ///
    /// // minLength cannot measure a number: the fault is a failure.
    /// assert_eq!(errors.len(), 1);
    /// ```
    pub fn apply<I>(mut self, name: &str, params: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        if self.poisoned.is_some() {
            return self;
        }

        let registry = self.registry;
        let rule = match registry.get(name) {
            Ok(rule) => rule,
            Err(err) => {
                tracing::warn!(rule = name, "unknown rule in validation chain");
                self.poisoned = Some(err);
                return self;
            }
        };

        let params: Params = params.into_iter().map(Into::into).collect();
        if evaluate(name, rule, &self.value, &params, None) != Some(true) {
            self.errors.add(rule.error(&self.value, &params));
        }
        self
    }

    /// Runs the rule registered under `name` without parameters.
    pub fn call(self, name: &str) -> Self {
        self.apply(name, std::iter::empty::<Value>())
    }

    /// `isNumber`
    pub fn is_number(self) -> Self {
        self.call(IsNumber::NAME)
    }

    /// `isString`
    pub fn is_string(self) -> Self {
        self.call(IsString::NAME)
    }

    /// `isArray`
    pub fn is_array(self) -> Self {
        self.call(IsArray::NAME)
    }

    /// `isEmail`
    pub fn is_email(self) -> Self {
        self.call(IsEmail::NAME)
    }

    /// `isURL`
    pub fn is_url(self) -> Self {
        self.call(IsUrl::NAME)
    }

    /// `matches` against a regular expression.
    pub fn matches(self, pattern: &str) -> Self {
        self.apply(Matches::NAME, [pattern])
    }

    /// `isNotBlank`
    pub fn is_not_blank(self) -> Self {
        self.call(IsNotBlank::NAME)
    }

    /// `length` equal to `length`.
    pub fn length(self, length: usize) -> Self {
        self.apply(Length::NAME, [length])
    }

    /// `length` within `min..=max`.
    pub fn length_between(self, min: usize, max: usize) -> Self {
        self.apply(Length::NAME, [min, max])
    }

    /// `minLength`
    pub fn min_length(self, min: usize) -> Self {
        self.apply(MinLength::NAME, [min])
    }

    /// `maxLength`
    pub fn max_length(self, max: usize) -> Self {
        self.apply(MaxLength::NAME, [max])
    }

    /// `minKeys`
    pub fn min_keys(self, min: usize) -> Self {
        self.apply(MinKeys::NAME, [min])
    }

    /// `contains` an array element or substring.
    pub fn contains(self, needle: impl Into<Value>) -> Self {
        self.apply(Contains::NAME, [needle.into()])
    }

    /// The value under test.
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Errors accumulated so far.
    pub fn errors(&self) -> &[ValidationError] {
        self.errors.errors()
    }

    /// Whether an unknown rule was called.
    pub fn is_poisoned(&self) -> bool {
        self.poisoned.is_some()
    }

    /// Ends the session and returns the accumulated errors in call order.
    ///
    /// # Errors
    ///
    /// [`SouffleError::UnknownRule`] if any chained call named an
    /// unregistered rule.
    pub fn exec(self) -> ValidationResult {
        match self.poisoned {
            Some(err) => Err(err),
            None => Ok(self.errors.into_vec()),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
