//! Structure rules: object key counts and membership.

use serde_json::Value;

use crate::foundation::{
    RuleFault, ValidationError, display_param, expect_arity, param_at, usize_param, value_kind,
};

crate::rule! {
    /// Value is an object with at least the given number of keys.
    pub MinKeys = "minKeys";
    check(value, params) {
        let min = usize_param(params, 0, "1")?;
        let object = value.as_object().ok_or(RuleFault::TypeMismatch {
            expected: "object",
            actual: value_kind(value),
        })?;
        Ok(object.len() >= min)
    }
    error(value, params) {
        let error = match params.first().map(display_param) {
            Some(min) => ValidationError::new(Self::NAME, format!("Must have at least {min} keys"))
                .with_param("expected", min),
            None => ValidationError::new(Self::NAME, "Not enough keys"),
        };
        match value.as_object() {
            Some(object) => error.with_param("actual", object.len().to_string()),
            None => error,
        }
    }
}

crate::rule! {
    /// Value is an array containing the parameter, or a string containing it
    /// as a substring.
    pub Contains = "contains";
    check(value, params) {
        expect_arity(params, 1, "1")?;
        let needle = param_at(params, 0, "1")?;
        match value {
            Value::Array(items) => Ok(items.contains(needle)),
            Value::String(haystack) => match needle {
                Value::String(needle) => Ok(haystack.contains(needle.as_str())),
                other => Err(RuleFault::BadParam {
                    index: 0,
                    expected: "a string",
                    actual: value_kind(other),
                }),
            },
            other => Err(RuleFault::TypeMismatch {
                expected: "string or array",
                actual: value_kind(other),
            }),
        }
    }
    error(value, params) {
        match params.first().map(display_param) {
            Some(needle) => ValidationError::new(Self::NAME, format!("Must contain {needle}"))
                .with_param("expected", needle),
            None => ValidationError::new(Self::NAME, "Does not contain the expected element"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Rule;
    use serde_json::json;

    #[test]
    fn test_min_keys() {
        let owner = json!({"firstName": "Magic", "lastName": "Dave"});
        assert_eq!(MinKeys.check(&owner, &[json!(2)]), Ok(true));
        assert_eq!(MinKeys.check(&owner, &[json!(3)]), Ok(false));
        assert_eq!(MinKeys.check(&json!({}), &[json!(0)]), Ok(true));
    }

    #[test]
    fn test_min_keys_faults() {
        assert!(MinKeys.check(&json!([1, 2]), &[json!(1)]).is_err());
        assert!(MinKeys.check(&json!({}), &[]).is_err());
    }

    #[test]
    fn test_min_keys_error() {
        let error = MinKeys.error(&json!({"a": 1}), &[json!(3)]);
        assert_eq!(error.message, "Must have at least 3 keys");
        assert_eq!(error.param("actual"), Some("1"));
    }

    #[test]
    fn test_contains_array() {
        let tags = json!(["rust", "json", 7]);
        assert_eq!(Contains.check(&tags, &[json!("rust")]), Ok(true));
        assert_eq!(Contains.check(&tags, &[json!(7)]), Ok(true));
        assert_eq!(Contains.check(&tags, &[json!("go")]), Ok(false));
    }

    #[test]
    fn test_contains_string() {
        assert_eq!(Contains.check(&json!("Magical Donkey"), &[json!("Don")]), Ok(true));
        assert_eq!(Contains.check(&json!("Magical Donkey"), &[json!("cat")]), Ok(false));
    }

    #[test]
    fn test_contains_faults() {
        assert!(Contains.check(&json!("abc"), &[json!(1)]).is_err());
        assert!(Contains.check(&json!(123), &[json!(1)]).is_err());
        assert!(Contains.check(&json!("abc"), &[]).is_err());
    }

    #[test]
    fn test_contains_error() {
        let error = Contains.error(&json!("abc"), &[json!("z")]);
        assert_eq!(error.message, "Must contain z");
        assert_eq!(error.code, "contains");
    }
}
