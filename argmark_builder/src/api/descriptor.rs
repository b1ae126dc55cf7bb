use std::any::Any;
use std::collections::HashSet;

use crate::api::{value, AnonymousParse, InvalidValue, ParseFn, Registry};
use crate::matcher::{Entry, Kind};
use crate::model::{FlagHandle, ValueHandle};
use crate::parser::ConfigError;

/// An argument definition which may be added to a [`Registry`].
///
/// This trait is sealed: the two kinds of descriptors are [`Flag`] and [`ValueFlag`].
/// Each registers through [`Registry::add`] and hands back its own kind of handle, so a value-bearing descriptor can never be mistaken for a flag (or vice versa).
pub trait Descriptor: private::Sealed {
    /// The handle returned upon registration.
    type Handle;

    #[doc(hidden)]
    fn register(self, registry: &mut Registry) -> Result<Self::Handle, ConfigError>;
}

mod private {
    pub trait Sealed {}

    impl Sealed for super::Flag {}
    impl<T> Sealed for super::ValueFlag<T> {}
}

fn validate_forms<I, S>(forms: I) -> Result<Vec<String>, ConfigError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let forms: Vec<String> = forms.into_iter().map(Into::into).collect();

    if forms.is_empty() {
        return Err(ConfigError::NoForms);
    }

    let mut seen = HashSet::new();

    for form in &forms {
        if form.is_empty() {
            return Err(ConfigError::EmptyForm);
        }

        if !seen.insert(form.as_str()) {
            return Err(ConfigError::RepeatedForm(form.clone()));
        }
    }

    Ok(forms)
}

/// A value-less argument, matched by its presence alone (ex: `--verbose`).
///
/// Flags are optional unless marked [`Flag::required`].
///
/// ### Example
/// ```
/// # use argmark_builder as argmark;
/// use argmark::{Flag, Registry};
///
/// let mut registry = Registry::new();
/// let verbose = registry
///     .add(Flag::new(["-v", "--verbose"], "Log verbosely.").unwrap())
///     .unwrap();
///
/// let result = registry.parse(vec!["--verbose"].as_slice()).unwrap();
/// assert!(result.has(&verbose));
/// ```
#[derive(Debug, Clone)]
pub struct Flag {
    forms: Vec<String>,
    help: String,
    optional: bool,
}

impl Flag {
    /// Create a flag matched by any of its `forms`.
    ///
    /// Fails when `forms` is empty, contains an empty string, or repeats a form.
    pub fn new<I, S>(forms: I, help: impl Into<String>) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Ok(Self {
            forms: validate_forms(forms)?,
            help: help.into(),
            optional: true,
        })
    }

    /// Require this flag to be matched at least once.
    pub fn required(mut self) -> Self {
        self.optional = false;
        self
    }

    /// The forms, in their declared order.
    pub fn forms(&self) -> &[String] {
        &self.forms
    }

    /// The help text.
    pub fn help(&self) -> &str {
        &self.help
    }

    /// Whether this flag may be absent from the tokens.
    pub fn is_optional(&self) -> bool {
        self.optional
    }
}

impl Descriptor for Flag {
    type Handle = FlagHandle;

    fn register(self, registry: &mut Registry) -> Result<FlagHandle, ConfigError> {
        let Flag {
            forms,
            help,
            optional,
        } = self;
        let id = registry.insert(Entry::new(forms, help, optional, Kind::Flag))?;
        Ok(FlagHandle::new(id))
    }
}

/// A value-bearing argument: the token following any of its forms is parsed into a `T` (ex: `--input <path>`).
///
/// Value flags are optional unless marked [`ValueFlag::required`].
///
/// ### Example
/// ```
/// # use argmark_builder as argmark;
/// use argmark::{Registry, ValueFlag};
///
/// let mut registry = Registry::new();
/// let count = registry
///     .add(ValueFlag::integer(["-c", "--count"], "How many.", "<n>").unwrap().required())
///     .unwrap();
///
/// let result = registry.parse(vec!["-c", "12"].as_slice()).unwrap();
/// assert_eq!(result.value(&count), Ok(&12));
/// ```
pub struct ValueFlag<T> {
    forms: Vec<String>,
    help: String,
    optional: bool,
    value_help: String,
    parse_fn: ParseFn<T>,
}

impl<T> ValueFlag<T> {
    /// Create a value flag matched by any of its `forms`, using `parse_fn` to convert the value token.
    ///
    /// The `value_help` label (ex: `"<path>"`) is displayed after each form in the help listing; it may be empty.
    /// Fails when `forms` is empty, contains an empty string, or repeats a form.
    ///
    /// ### Example
    /// ```
    /// # use argmark_builder as argmark;
    /// use argmark::{InvalidValue, ValueFlag};
    ///
    /// let port = ValueFlag::new(["-p"], "The port.", "<port>", |token: &str| {
    ///     token
    ///         .parse::<u16>()
    ///         .map_err(|_| InvalidValue::new("Expected a port number", token))
    /// })
    /// .unwrap();
    ///
    /// assert_eq!(port.parse("8080"), Ok(8080));
    /// ```
    pub fn new<I, S, F>(
        forms: I,
        help: impl Into<String>,
        value_help: impl Into<String>,
        parse_fn: F,
    ) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
        F: Fn(&str) -> Result<T, InvalidValue> + Send + Sync + 'static,
    {
        Ok(Self {
            forms: validate_forms(forms)?,
            help: help.into(),
            optional: true,
            value_help: value_help.into(),
            parse_fn: Box::new(parse_fn),
        })
    }

    /// Require this value flag to be matched at least once.
    pub fn required(mut self) -> Self {
        self.optional = false;
        self
    }

    /// The forms, in their declared order.
    pub fn forms(&self) -> &[String] {
        &self.forms
    }

    /// The help text.
    pub fn help(&self) -> &str {
        &self.help
    }

    /// The label describing the value in the help listing.
    pub fn value_help(&self) -> &str {
        &self.value_help
    }

    /// Whether this value flag may be absent from the tokens.
    pub fn is_optional(&self) -> bool {
        self.optional
    }

    /// Convert a value token with this flag's value kind.
    pub fn parse(&self, token: &str) -> Result<T, InvalidValue> {
        (self.parse_fn)(token)
    }
}

impl ValueFlag<bool> {
    /// A value flag accepting `true` or `false`.
    pub fn boolean<I, S>(
        forms: I,
        help: impl Into<String>,
        value_help: impl Into<String>,
    ) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(forms, help, value_help, value::boolean)
    }
}

impl ValueFlag<i64> {
    /// A value flag accepting a signed integer.
    pub fn integer<I, S>(
        forms: I,
        help: impl Into<String>,
        value_help: impl Into<String>,
    ) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(forms, help, value_help, value::integer)
    }
}

impl ValueFlag<f64> {
    /// A value flag accepting a floating point number.
    pub fn float<I, S>(
        forms: I,
        help: impl Into<String>,
        value_help: impl Into<String>,
    ) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(forms, help, value_help, value::float)
    }
}

impl ValueFlag<String> {
    /// A value flag accepting any token.
    pub fn string<I, S>(
        forms: I,
        help: impl Into<String>,
        value_help: impl Into<String>,
    ) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(forms, help, value_help, value::string)
    }
}

impl<T: std::str::FromStr + 'static> ValueFlag<T> {
    /// A value flag accepting anything `T` can parse via [`std::str::FromStr`].
    pub fn parsed<I, S>(
        forms: I,
        help: impl Into<String>,
        value_help: impl Into<String>,
    ) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(forms, help, value_help, value::parsed::<T>)
    }
}

impl<T> std::fmt::Debug for ValueFlag<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValueFlag")
            .field("type", &std::any::type_name::<T>())
            .field("forms", &self.forms)
            .field("value_help", &self.value_help)
            .field("optional", &self.optional)
            .finish()
    }
}

impl<T> Descriptor for ValueFlag<T>
where
    T: Any + Send + Sync,
{
    type Handle = ValueHandle<T>;

    fn register(self, registry: &mut Registry) -> Result<ValueHandle<T>, ConfigError> {
        let ValueFlag {
            forms,
            help,
            optional,
            value_help,
            parse_fn,
        } = self;
        let kind = Kind::Value {
            value_help,
            parser: Box::new(AnonymousParse::bind(parse_fn)),
        };
        let id = registry.insert(Entry::new(forms, help, optional, kind))?;
        Ok(ValueHandle::new(id))
    }
}
