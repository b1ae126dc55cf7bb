//! Built-in value kinds.
//!
//! Each kind is a pure function from a single token to a typed value (or an [`InvalidValue`] diagnostic).
//! Custom kinds follow the same shape and can be handed to [`ValueFlag::new`](crate::ValueFlag::new).
use std::str::FromStr;

use crate::api::InvalidValue;

/// Accepts precisely the literals `true` and `false` (case-sensitive).
///
/// ### Example
/// ```
/// # use argmark_builder as argmark;
/// use argmark::value;
///
/// assert_eq!(value::boolean("true"), Ok(true));
/// assert!(value::boolean("True").is_err());
/// ```
pub fn boolean(token: &str) -> Result<bool, InvalidValue> {
    match token {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(InvalidValue::new("Expected 'true' or 'false'", token)),
    }
}

/// Accepts a signed integer in the range of `i64`.
pub fn integer(token: &str) -> Result<i64, InvalidValue> {
    i64::from_str(token).map_err(|_| InvalidValue::new("Expected an integer number", token))
}

/// Accepts decimal or exponential floating point syntax.
pub fn float(token: &str) -> Result<f64, InvalidValue> {
    f64::from_str(token)
        .map_err(|_| InvalidValue::new("Expected a floating point number", token))
}

/// Accepts any token, unmodified.
pub fn string(token: &str) -> Result<String, InvalidValue> {
    Ok(token.to_string())
}

/// Accepts anything `T` can parse via [`std::str::FromStr`].
///
/// ### Example
/// ```
/// # use argmark_builder as argmark;
/// use argmark::value;
///
/// assert_eq!(value::parsed::<u8>("255"), Ok(255));
/// assert_eq!(
///     value::parsed::<u8>("256").unwrap_err().to_string(),
///     "Expected a value of type u8, got '256'"
/// );
/// ```
pub fn parsed<T: FromStr>(token: &str) -> Result<T, InvalidValue> {
    T::from_str(token).map_err(|_| {
        InvalidValue::new(
            format!("Expected a value of type {}", std::any::type_name::<T>()),
            token,
        )
    })
}
