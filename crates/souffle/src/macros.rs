//! Macros for defining rules with minimal boilerplate.
//!
//! # Available Macros
//!
//! - [`rule!`]: create a complete rule (struct + `NAME` constant + `Rule` impl)
//!
//! # Examples
//!
//! ```rust,ignore
//! use souffle::rule;
//! use souffle::foundation::{ValidationError, expect_str};
//!
//! // Unit rule (no fields)
//! rule! {
//!     pub IsUppercase = "isUppercase";
//!     check(value, params) {
//!         let s = expect_str(value)?;
//!         Ok(s.chars().all(|c| !c.is_alphabetic() || c.is_uppercase()))
//!     }
//!     error(value, params) { ValidationError::new(Self::NAME, "Not uppercase") }
//! }
//!
//! // Struct with fields
//! rule! {
//!     #[derive(Copy, PartialEq, Eq)]
//!     pub MaxWords { limit: usize } = "maxWords";
//!     check(self, value, params) {
//!         Ok(expect_str(value)?.split_whitespace().count() <= self.limit)
//!     }
//!     error(self, value, params) {
//!         ValidationError::new(Self::NAME, format!("At most {} words", self.limit))
//!     }
//!     new(limit: usize) { Self { limit } }
//! }
//! ```

// ============================================================================
// RULE MACRO
// ============================================================================

/// Creates a complete rule: struct definition, a `NAME` constant holding the
/// registry key, and a [`Rule`](crate::foundation::Rule) implementation.
///
/// The `check` block must evaluate to `Result<bool, RuleFault>` so that `?`
/// can be used to raise faults. The `error` block evaluates to a
/// `ValidationError`.
///
/// Unit rules always derive `Debug, Clone, Copy, PartialEq, Eq, Hash, Default`;
/// do not repeat those. Rules with fields always derive `Debug, Clone`; add
/// extra derives via `#[derive(...)]`.
///
/// # Variants
///
/// **Unit rule** (zero-sized, no fields):
/// ```rust,ignore
/// rule! {
///     pub IsString = "isString";
///     check(value, params) { Ok(value.is_string()) }
///     error(value, params) { ValidationError::new(Self::NAME, "Not a string") }
/// }
/// ```
///
/// **Struct with fields** (custom `new`):
/// ```rust,ignore
/// rule! {
///     pub MinLength { mode: LengthMode } = "minLength";
///     check(self, value, params) { ... }
///     error(self, value, params) { ... }
///     new(mode: LengthMode) { Self { mode } }
/// }
/// ```
#[macro_export]
macro_rules! rule {
    // ── Variant 1: Unit rule (no fields) ─────────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident = $key:literal;
        check($val:ident, $params:ident) $check:block
        error($eval:ident, $eparams:ident) $err:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        $vis struct $name;

        impl $name {
            /// Registry key of this rule.
            pub const NAME: &'static str = $key;
        }

        impl $crate::foundation::Rule for $name {
            #[allow(unused_variables)]
            fn check(
                &self,
                $val: &::serde_json::Value,
                $params: &[::serde_json::Value],
            ) -> ::std::result::Result<bool, $crate::foundation::RuleFault> $check

            #[allow(unused_variables)]
            fn error(
                &self,
                $eval: &::serde_json::Value,
                $eparams: &[::serde_json::Value],
            ) -> $crate::foundation::ValidationError $err
        }
    };

    // ── Variant 2: Struct with fields + custom new ───────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } = $key:literal;
        check($self_:ident, $val:ident, $params:ident) $check:block
        error($self2:ident, $eval:ident, $eparams:ident) $err:block
        new($($narg:ident: $naty:ty),* $(,)?) $new_body:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        impl $name {
            /// Registry key of this rule.
            pub const NAME: &'static str = $key;

            #[must_use]
            pub fn new($($narg: $naty),*) -> Self $new_body
        }

        impl $crate::foundation::Rule for $name {
            #[allow(unused_variables)]
            fn check(
                &$self_,
                $val: &::serde_json::Value,
                $params: &[::serde_json::Value],
            ) -> ::std::result::Result<bool, $crate::foundation::RuleFault> $check

            #[allow(unused_variables)]
            fn error(
                &$self2,
                $eval: &::serde_json::Value,
                $eparams: &[::serde_json::Value],
            ) -> $crate::foundation::ValidationError $err
        }
    };
}
