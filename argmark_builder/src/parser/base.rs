use thiserror::Error;

use crate::api::InvalidValue;

/// A malformed descriptor, or a descriptor which conflicts with the registry.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A descriptor was declared without any forms.
    #[error("Argument must have at least one form.")]
    NoForms,

    /// A descriptor was declared with an empty string as a form.
    #[error("Argument cannot have an empty form.")]
    EmptyForm,

    /// A descriptor was declared with the same form more than once.
    #[error("Argument cannot repeat the form {0}.")]
    RepeatedForm(String),

    /// A descriptor shares a form with one already registered.
    #[error("An argument with form {0} has already been added.")]
    DuplicateForm(String),
}

/// A failure to match the tokens against the registry.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    /// The token is not a registered form.
    #[error("Unknown argument {0}.")]
    UnknownArgument(String),

    /// The value flag (named by the token) was the final token.
    #[error("Expected value for argument {0}, but no value was given.")]
    MissingValue(String),

    /// The value token could not be converted by the value flag (named by its first form).
    #[error("Could not parse value for argument {form}. {source}.")]
    InvalidValue {
        /// The first form of the value flag.
        form: String,
        /// The conversion diagnostic.
        source: InvalidValue,
    },

    /// The required descriptors (named by their first forms) were never matched.
    #[error("Expected the following non-optional arguments: {}.", .0.join(", "))]
    MissingRequired(Vec<String>),
}

/// A failure to query a [`ParseResult`](crate::ParseResult).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum QueryError {
    /// The descriptor (named by its first form) was not matched.
    #[error("The argument {0} was not matched.")]
    NotMatched(String),

    /// The handle was issued by a different registry.
    #[error("The argument does not belong to the parsed registry.")]
    ForeignHandle,
}
