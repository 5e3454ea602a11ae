//! Rule registry for looking up rules by name.

use std::borrow::Cow;
use std::fmt;
use std::sync::{Arc, LazyLock};

use indexmap::IndexMap;

use crate::config::EngineConfig;
use crate::foundation::{Rule, SouffleError};
use crate::rules::{
    Contains, IsArray, IsEmail, IsNotBlank, IsNumber, IsString, IsUrl, Length, MaxLength,
    Matches, MinKeys, MinLength,
};

static GLOBAL: LazyLock<RuleRegistry> = LazyLock::new(RuleRegistry::builtin);

/// Mapping from rule name to rule.
///
/// A registry is built once and then only read. Extending it yields a new
/// registry with the extra entries merged in; cloning is cheap because rules
/// are shared behind `Arc`.
///
/// # Examples
///
/// ```
/// use souffle::foundation::{FnRule, ValidationError};
/// use souffle::registry::RuleRegistry;
///
/// let registry = RuleRegistry::builtin().with_rule(
///     "isPositive",
///     FnRule::new(
///         |value, _| Ok(value.as_f64().is_some_and(|n| n > 0.0)),
///         |_, _| ValidationError::new("isPositive", "Must be positive"),
///     ),
/// );
///
/// assert!(registry.contains("isPositive"));
/// assert!(registry.contains("isEmail"));
/// assert!(registry.get("isPrime").is_err());
/// ```
#[derive(Clone, Default)]
pub struct RuleRegistry {
    rules: IndexMap<Cow<'static, str>, Arc<dyn Rule>>,
}

impl RuleRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rules: IndexMap::new(),
        }
    }

    /// Creates a registry holding the twelve built-in rules.
    #[must_use]
    pub fn builtin() -> Self {
        Self::builtin_with(&EngineConfig::default())
    }

    /// Creates a registry holding the built-in rules, configured by `config`.
    #[must_use]
    pub fn builtin_with(config: &EngineConfig) -> Self {
        let mode = config.length_mode;
        Self::new()
            .with_rule(IsNumber::NAME, IsNumber)
            .with_rule(IsString::NAME, IsString)
            .with_rule(IsArray::NAME, IsArray)
            .with_rule(IsEmail::NAME, IsEmail)
            .with_rule(IsUrl::NAME, IsUrl)
            .with_rule(Matches::NAME, Matches)
            .with_rule(IsNotBlank::NAME, IsNotBlank)
            .with_rule(Length::NAME, Length::new(mode))
            .with_rule(MinLength::NAME, MinLength::new(mode))
            .with_rule(MaxLength::NAME, MaxLength::new(mode))
            .with_rule(MinKeys::NAME, MinKeys)
            .with_rule(Contains::NAME, Contains)
    }

    /// Returns the process-wide built-in registry.
    ///
    /// Initialized on first use and never mutated afterwards.
    pub fn global() -> &'static RuleRegistry {
        &GLOBAL
    }

    /// Registers a rule in place, replacing any rule with the same name.
    pub fn register(&mut self, name: impl Into<Cow<'static, str>>, rule: impl Rule + 'static) {
        self.register_shared(name, Arc::new(rule));
    }

    /// Registers an already shared rule in place.
    pub fn register_shared(&mut self, name: impl Into<Cow<'static, str>>, rule: Arc<dyn Rule>) {
        let name = name.into();
        tracing::debug!(rule = %name, "registered validation rule");
        self.rules.insert(name, rule);
    }

    /// Returns this registry with `rule` added under `name`.
    #[must_use]
    pub fn with_rule(mut self, name: impl Into<Cow<'static, str>>, rule: impl Rule + 'static) -> Self {
        self.register(name, rule);
        self
    }

    /// Returns this registry with every entry of `other` merged in.
    ///
    /// Entries of `other` win on name clashes.
    #[must_use]
    pub fn merge(mut self, other: &RuleRegistry) -> Self {
        for (name, rule) in &other.rules {
            self.register_shared(name.clone(), Arc::clone(rule));
        }
        self
    }

    /// Looks up a rule by name.
    pub fn get(&self, name: &str) -> Result<&dyn Rule, SouffleError> {
        self.rules
            .get(name)
            .map(|rule| &**rule as &dyn Rule)
            .ok_or_else(|| SouffleError::UnknownRule {
                name: name.to_owned(),
            })
    }

    /// Check if a rule is registered under the given name.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.rules.contains_key(name)
    }

    /// Number of registered rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Registered names, in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(|name| &**name)
    }
}

impl fmt::Debug for RuleRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleRegistry")
            .field("rules", &self.rules.keys().collect::<Vec<_>>())
            .finish()
    }
}
