//! Length rules
//!
//! Strings are measured in Unicode scalar values by default. Use
//! [`LengthMode::Bytes`] for byte-length counting when the input is known
//! to be ASCII. Arrays are always measured by element count.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::foundation::{
    RuleFault, ValidationError, display_param, expect_str, usize_param, value_kind,
};

// ============================================================================
// LENGTH MODE
// ============================================================================

/// How to count string length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LengthMode {
    /// Count bytes (fastest, ASCII-only correct).
    Bytes,
    /// Count Unicode scalar values (correct for all text).
    #[default]
    Chars,
}

impl LengthMode {
    /// Measures a string or array according to this mode.
    pub fn measure(self, value: &Value) -> Result<usize, RuleFault> {
        match value {
            Value::String(s) => Ok(match self {
                LengthMode::Bytes => s.len(),
                LengthMode::Chars => s.chars().count(),
            }),
            Value::Array(items) => Ok(items.len()),
            other => Err(RuleFault::TypeMismatch {
                expected: "string or array",
                actual: value_kind(other),
            }),
        }
    }
}

/// Attaches `actual` when the value is measurable.
fn with_actual(error: ValidationError, mode: LengthMode, value: &Value) -> ValidationError {
    match mode.measure(value) {
        Ok(len) => error.with_param("actual", len.to_string()),
        Err(_) => error,
    }
}

// ============================================================================
// NOT BLANK
// ============================================================================

crate::rule! {
    /// Value is a string that is not empty after trimming whitespace.
    pub IsNotBlank = "isNotBlank";
    check(value, params) { Ok(!expect_str(value)?.trim().is_empty()) }
    error(value, params) { ValidationError::new(Self::NAME, "Cannot be blank") }
}

// ============================================================================
// LENGTH
// ============================================================================

crate::rule! {
    /// Value length equals the parameter.
    ///
    /// Given two parameters the length must lie in the inclusive range
    /// `[min, max]`. Any other number of parameters is a fault.
    #[derive(Copy, PartialEq, Eq, Hash, Default)]
    pub Length { mode: LengthMode } = "length";
    check(self, value, params) {
        let len = self.mode.measure(value)?;
        match params.len() {
            1 => Ok(len == usize_param(params, 0, "1 or 2")?),
            2 => {
                let min = usize_param(params, 0, "1 or 2")?;
                let max = usize_param(params, 1, "1 or 2")?;
                Ok((min..=max).contains(&len))
            }
            actual => Err(RuleFault::Arity { expected: "1 or 2", actual }),
        }
    }
    error(self, value, params) {
        let error = match params {
            [min, max] => {
                let (min, max) = (display_param(min), display_param(max));
                ValidationError::new(
                    Self::NAME,
                    format!("Length must be between {min} and {max}"),
                )
                .with_param("min", min)
                .with_param("max", max)
            }
            [expected, ..] => {
                let expected = display_param(expected);
                ValidationError::new(Self::NAME, format!("Length must be exactly {expected}"))
                    .with_param("expected", expected)
            }
            [] => ValidationError::new(Self::NAME, "Length is not as expected"),
        };
        with_actual(error, self.mode, value)
    }
    new(mode: LengthMode) { Self { mode } }
}

// ============================================================================
// MIN LENGTH
// ============================================================================

crate::rule! {
    /// Value length is at least the parameter.
    #[derive(Copy, PartialEq, Eq, Hash, Default)]
    pub MinLength { mode: LengthMode } = "minLength";
    check(self, value, params) {
        let min = usize_param(params, 0, "1")?;
        Ok(self.mode.measure(value)? >= min)
    }
    error(self, value, params) {
        let error = match params.first().map(display_param) {
            Some(min) => ValidationError::new(Self::NAME, format!("Length must be at least {min}"))
                .with_param("expected", min),
            None => ValidationError::new(Self::NAME, "Length is too short"),
        };
        with_actual(error, self.mode, value)
    }
    new(mode: LengthMode) { Self { mode } }
}

// ============================================================================
// MAX LENGTH
// ============================================================================

crate::rule! {
    /// Value length is at most the parameter.
    #[derive(Copy, PartialEq, Eq, Hash, Default)]
    pub MaxLength { mode: LengthMode } = "maxLength";
    check(self, value, params) {
        let max = usize_param(params, 0, "1")?;
        Ok(self.mode.measure(value)? <= max)
    }
    error(self, value, params) {
        let error = match params.first().map(display_param) {
            Some(max) => ValidationError::new(Self::NAME, format!("Length must be at most {max}"))
                .with_param("expected", max),
            None => ValidationError::new(Self::NAME, "Length is too long"),
        };
        with_actual(error, self.mode, value)
    }
    new(mode: LengthMode) { Self { mode } }
}

// ============================================================================
// TESTS
// ============================================================================
