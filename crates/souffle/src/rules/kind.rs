//! Runtime type rules
//!
//! These rules ignore parameters: `{"isString": true}` and `.is_string()` both
//! call the predicate with the value alone.

use crate::foundation::ValidationError;

crate::rule! {
    /// Value is a JSON number.
    pub IsNumber = "isNumber";
    check(value, params) { Ok(value.is_number()) }
    error(value, params) { ValidationError::new(Self::NAME, "Not a number") }
}

crate::rule! {
    /// Value is a JSON string.
    pub IsString = "isString";
    check(value, params) { Ok(value.is_string()) }
    error(value, params) { ValidationError::new(Self::NAME, "Not a string") }
}

crate::rule! {
    /// Value is a JSON array.
    pub IsArray = "isArray";
    check(value, params) { Ok(value.is_array()) }
    error(value, params) { ValidationError::new(Self::NAME, "Not an array") }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Rule;
    use rstest::rstest;
    use serde_json::{Value, json};

    #[rstest]
    #[case(json!(15), true)]
    #[case(json!(1.5), true)]
    #[case(json!(-3), true)]
    #[case(json!("15"), false)]
    #[case(json!(null), false)]
    #[case(json!([1]), false)]
    fn test_is_number(#[case] value: Value, #[case] expected: bool) {
        assert_eq!(IsNumber.check(&value, &[]), Ok(expected));
    }

    #[rstest]
    #[case(json!("Donkey"), true)]
    #[case(json!(""), true)]
    #[case(json!(5), false)]
    #[case(json!(null), false)]
    #[case(json!({"a": "b"}), false)]
    fn test_is_string(#[case] value: Value, #[case] expected: bool) {
        assert_eq!(IsString.check(&value, &[]), Ok(expected));
    }

    #[rstest]
    #[case(json!([]), true)]
    #[case(json!([1, "two", null]), true)]
    #[case(json!("[1]"), false)]
    #[case(json!({"0": 1}), false)]
    fn test_is_array(#[case] value: Value, #[case] expected: bool) {
        assert_eq!(IsArray.check(&value, &[]), Ok(expected));
    }

    #[test]
    fn test_params_ignored() {
        assert_eq!(IsString.check(&json!("x"), &[json!(1), json!(2)]), Ok(true));
    }

    #[test]
    fn test_messages() {
        assert_eq!(IsNumber.error(&json!("x"), &[]).message, "Not a number");
        assert_eq!(IsString.error(&json!(1), &[]).message, "Not a string");
        assert_eq!(IsArray.error(&json!(1), &[]).message, "Not an array");
        assert_eq!(IsArray.error(&json!(1), &[]).code, "isArray");
    }
}
