//! String format rules
//!
//! Email and URL shapes are fixed patterns; `matches` compiles the pattern it
//! is given on every call.

use std::sync::LazyLock;

use crate::foundation::{ValidationError, display_param, expect_arity, expect_str, str_param};

/// `local@domain.tld` where the TLD is 2-6 letters.
static EMAIL_REGEX: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(r"^[A-Za-z0-9._%+-]+@(?:[A-Za-z0-9-]+\.)+[A-Za-z]{2,6}$").unwrap()
});

/// `http://`, `http://www.` or `www.` followed by a host with a 2-6 letter TLD.
static URL_REGEX: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(
        r"^(?:http://(?:www\.)?|www\.)(?:[A-Za-z0-9-]+\.)+[A-Za-z]{2,6}(?::\d{1,5})?(?:[/?#]\S*)?$",
    )
    .unwrap()
});

// ============================================================================
// EMAIL
// ============================================================================

crate::rule! {
    /// Value is a string shaped like an email address.
    pub IsEmail = "isEmail";
    check(value, params) { Ok(EMAIL_REGEX.is_match(expect_str(value)?)) }
    error(value, params) {
        ValidationError::new(Self::NAME, "Not a valid email address")
    }
}

// ============================================================================
// URL
// ============================================================================

crate::rule! {
    /// Value is a string shaped like a web address.
    pub IsUrl = "isURL";
    check(value, params) { Ok(URL_REGEX.is_match(expect_str(value)?)) }
    error(value, params) { ValidationError::new(Self::NAME, "Not a valid URL") }
}

// ============================================================================
// MATCHES
// ============================================================================

crate::rule! {
    /// Value is a string matching the regular expression given as parameter.
    pub Matches = "matches";
    check(value, params) {
        expect_arity(params, 1, "1")?;
        let pattern = regex::Regex::new(str_param(params, 0, "1")?)?;
        Ok(pattern.is_match(expect_str(value)?))
    }
    error(value, params) {
        match params.first() {
            Some(pattern) => {
                let pattern = display_param(pattern);
                ValidationError::new(Self::NAME, format!("Does not match pattern {pattern}"))
                    .with_param("pattern", pattern)
            }
            None => ValidationError::new(Self::NAME, "Does not match pattern"),
        }
    }
}
