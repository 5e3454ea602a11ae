//! # souffle
//!
//! Declarative validation of JSON values against named rules.
//!
//! Two ways in:
//!
//! - **Tree Mode**: validate an object against a rule tree whose keys mirror
//!   the object's keys. Returns every failure at once.
//! - **Chain Mode**: validate one value against a fluent sequence of rules,
//!   then call [`exec`](engine::Session::exec).
//!
//! ## Quick Start
//!
//! ```
//! use serde_json::json;
//! use souffle::Souffle;
//!
//! let errors = Souffle::validate(
//!     &json!({
//!         "name": "Magical Donkey",
//!         "age": 15,
//!         "owner": { "firstName": "Magic", "lastName": "" }
//!     }),
//!     &json!({
//!         "name": { "isString": true, "minLength": 10, "maxLength": 20 },
//!         "age": { "isNumber": true },
//!         "owner": {
//!             "firstName": { "isNotBlank": true },
//!             "lastName": { "isNotBlank": true }
//!         }
//!     }),
//! )
//! .unwrap();
//!
//! assert_eq!(errors.len(), 1);
//! assert_eq!(errors[0].field.as_deref(), Some("owner.lastName"));
//! assert_eq!(errors[0].message, "Cannot be blank");
//!
//! let errors = Souffle::value("Donkey").is_string().length(6).exec().unwrap();
//! assert!(errors.is_empty());
//! ```
//!
//! ## Custom rules
//!
//! Build a [`RuleRegistry`](registry::RuleRegistry) with extra entries and
//! hand it to [`Souffle::new`]. See [`FnRule`](foundation::FnRule) and the
//! [`rule!`] macro.

pub mod config;
pub mod engine;
pub mod foundation;
mod macros;
pub mod prelude;
pub mod registry;
pub mod rules;

use std::sync::LazyLock;

use serde_json::Value;

use crate::config::EngineConfig;
use crate::engine::Session;
use crate::foundation::{SouffleError, ValidationError, ValidationResult};
use crate::registry::RuleRegistry;

static DEFAULT: LazyLock<Souffle> = LazyLock::new(Souffle::default);

/// A rule registry paired with engine configuration.
///
/// The associated functions [`Souffle::validate`], [`Souffle::value`] and
/// [`Souffle::from_args`] use a process-wide default instance holding the
/// built-in rules. Construct your own instance to add rules or change
/// configuration.
///
/// ```
/// use serde_json::json;
/// use souffle::Souffle;
/// use souffle::config::EngineConfig;
/// use souffle::foundation::{FnRule, ValidationError};
/// use souffle::registry::RuleRegistry;
///
/// let config = EngineConfig::default();
/// let registry = RuleRegistry::builtin_with(&config).with_rule(
///     "isAdult",
///     FnRule::new(
///         |value, _| Ok(value.as_u64().is_some_and(|age| age >= 18)),
///         |_, _| ValidationError::new("isAdult", "Must be an adult"),
///     ),
/// );
/// let souffle = Souffle::new(registry, config);
///
/// let errors = souffle
///     .validate_tree(&json!({ "age": 15 }), &json!({ "age": { "isAdult": true } }))
///     .unwrap();
/// assert_eq!(errors[0].message, "Must be an adult");
/// ```
#[derive(Debug, Clone)]
pub struct Souffle {
    registry: RuleRegistry,
    config: EngineConfig,
}

/// Result of [`Souffle::from_args`]: errors for Tree Mode, a session for
/// Chain Mode.
#[derive(Debug)]
pub enum Validation<'r> {
    /// Both arguments were objects; validation already ran.
    Errors(Vec<ValidationError>),
    /// A single value was supplied; chain rules onto the session.
    Session(Session<'r>),
}

impl Souffle {
    /// Creates an instance from a registry and configuration.
    ///
    /// Length rules measure with the [`LengthMode`](rules::LengthMode) their
    /// registry was built with, so `config.length_mode` has no effect on
    /// `registry`. Use [`Souffle::with_config`] or
    /// [`RuleRegistry::builtin_with`] to keep the two in step.
    pub fn new(registry: RuleRegistry, config: EngineConfig) -> Self {
        Self { registry, config }
    }

    /// Creates an instance with the built-in rules configured by `config`.
    pub fn with_config(config: EngineConfig) -> Self {
        Self::new(RuleRegistry::builtin_with(&config), config)
    }

    /// The rule registry.
    pub fn registry(&self) -> &RuleRegistry {
        &self.registry
    }

    /// The engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Tree Mode against this instance's rules.
    pub fn validate_tree(&self, values: &Value, rules: &Value) -> ValidationResult {
        engine::validate_tree(&self.registry, &self.config, values, rules)
    }

    /// Chain Mode against this instance's rules.
    pub fn session(&self, value: impl Into<Value>) -> Session<'_> {
        Session::new(&self.registry, value)
    }

    /// Dispatches on the shape of the arguments.
    ///
    /// - Both `values` and `rules` are objects: runs Tree Mode and returns
    ///   [`Validation::Errors`].
    /// - Otherwise: starts a session for `values` (or `null` when absent) and
    ///   returns [`Validation::Session`].
    ///
    /// # Errors
    ///
    /// [`SouffleError::MissingInput`] when neither argument is supplied;
    /// `null` counts as not supplied. Tree Mode errors propagate.
    pub fn dispatch(
        &self,
        values: Option<&Value>,
        rules: Option<&Value>,
    ) -> Result<Validation<'_>, SouffleError> {
        let values = values.filter(|v| !v.is_null());
        let rules = rules.filter(|r| !r.is_null());

        match (values, rules) {
            (None, None) => Err(SouffleError::MissingInput),
            (Some(values @ Value::Object(_)), Some(rules @ Value::Object(_))) => {
                self.validate_tree(values, rules).map(Validation::Errors)
            }
            (values, _) => Ok(Validation::Session(
                self.session(values.cloned().unwrap_or(Value::Null)),
            )),
        }
    }

    /// Tree Mode with the built-in rules.
    pub fn validate(values: &Value, rules: &Value) -> ValidationResult {
        DEFAULT.validate_tree(values, rules)
    }

    /// Chain Mode with the built-in rules.
    pub fn value(value: impl Into<Value>) -> Session<'static> {
        DEFAULT.session(value)
    }

    /// [`Souffle::dispatch`] with the built-in rules.
    pub fn from_args(
        values: Option<&Value>,
        rules: Option<&Value>,
    ) -> Result<Validation<'static>, SouffleError> {
        DEFAULT.dispatch(values, rules)
    }
}

impl Default for Souffle {
    fn default() -> Self {
        Self::with_config(EngineConfig::default())
    }
}
