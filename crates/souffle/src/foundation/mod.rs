//! Core validation types and traits
//!
//! This module contains the fundamental building blocks shared by the rule
//! registry and both engines:
//!
//! - **Traits**: [`Rule`]
//! - **Rules from closures**: [`FnRule`]
//! - **Errors**: [`ValidationError`], [`ValidationErrors`], [`RuleFault`], [`SouffleError`]
//! - **Leaf entries**: [`Expectation`]
//!
//! # Error layers
//!
//! A value failing a rule is data, not an exception: it becomes a
//! [`ValidationError`] in the returned sequence. A predicate that cannot
//! evaluate its input returns a [`RuleFault`], which the engine records as a
//! failure of that rule. Misuse of the engine itself (unknown rule names,
//! malformed rule trees) is a [`SouffleError`] and aborts the call.

pub mod error;
pub mod rule;

pub use error::{ErrorParams, RuleFault, SouffleError, ValidationError, ValidationErrors};
pub use rule::{
    Expectation, FnRule, Rule, display_param, expect_arity, expect_str, param_at, str_param,
    usize_param, value_kind,
};

/// A validation result that can contain multiple errors.
pub type ValidationResult = Result<Vec<ValidationError>, SouffleError>;
