//! Built-in rules
//!
//! | name         | passes when                                                |
//! |--------------|------------------------------------------------------------|
//! | `isNumber`   | value is a number                                          |
//! | `isString`   | value is a string                                          |
//! | `isArray`    | value is an array                                          |
//! | `isEmail`    | value is shaped like `local@domain.tld`                    |
//! | `isURL`      | value starts with `http://`, `http://www.` or `www.`       |
//! | `matches`    | value matches the regular expression parameter             |
//! | `isNotBlank` | value is non-empty after trimming whitespace               |
//! | `length`     | value length equals the parameter                          |
//! | `minLength`  | value length is at least the parameter                     |
//! | `maxLength`  | value length is at most the parameter                      |
//! | `minKeys`    | value is an object with at least that many keys            |
//! | `contains`   | value (array or string) contains the parameter             |
//!
//! Every rule is a plain struct implementing [`Rule`](crate::foundation::Rule)
//! with a `NAME` constant holding its registry key.

pub mod format;
pub mod kind;
pub mod length;
pub mod structure;

pub use format::{IsEmail, IsUrl, Matches};
pub use kind::{IsArray, IsNumber, IsString};
pub use length::{IsNotBlank, Length, LengthMode, MaxLength, MinLength};
pub use structure::{Contains, MinKeys};

/// Registry keys of all built-in rules, in registration order.
pub const BUILTIN_NAMES: [&str; 12] = [
    IsNumber::NAME,
    IsString::NAME,
    IsArray::NAME,
    IsEmail::NAME,
    IsUrl::NAME,
    Matches::NAME,
    IsNotBlank::NAME,
    Length::NAME,
    MinLength::NAME,
    MaxLength::NAME,
    MinKeys::NAME,
    Contains::NAME,
];
