use std::any::Any;
use thiserror::Error;

/// The diagnostic produced when a value token cannot be converted by a value kind.
///
/// Displays as `"{expected}, got '{token}'"`, for example: `Expected 'true' or 'false', got 'maybe'`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{expected}, got '{token}'")]
pub struct InvalidValue {
    expected: String,
    token: String,
}

impl InvalidValue {
    /// Describe a failed conversion of `token`.
    ///
    /// `expected` should read as a sentence fragment, ex: `"Expected an integer number"`.
    pub fn new(expected: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            expected: expected.into(),
            token: token.into(),
        }
    }

    /// What the value kind expected to receive.
    pub fn expected(&self) -> &str {
        &self.expected
    }

    /// The raw token that failed to convert.
    pub fn token(&self) -> &str {
        &self.token
    }
}

pub(crate) type AnonymousValue = Box<dyn Any + Send + Sync>;

pub(crate) type ParseFn<T> = Box<dyn Fn(&str) -> Result<T, InvalidValue> + Send + Sync>;

/// Behaviour to parse an implicit generic type T from an input `&str`.
///
/// The descriptors keep their types T at the bottom of the object graph, but the registry needs to work across all T.
pub(crate) trait AnonymousParsable: Send + Sync {
    fn parse(&self, token: &str) -> Result<AnonymousValue, InvalidValue>;
}

pub(crate) struct AnonymousParse<T> {
    parse_fn: ParseFn<T>,
}

impl<T> AnonymousParse<T> {
    pub(crate) fn bind(parse_fn: ParseFn<T>) -> Self {
        Self { parse_fn }
    }
}

impl<T> AnonymousParsable for AnonymousParse<T>
where
    T: Any + Send + Sync,
{
    fn parse(&self, token: &str) -> Result<AnonymousValue, InvalidValue> {
        let value = (self.parse_fn)(token)?;
        Ok(Box::new(value))
    }
}
