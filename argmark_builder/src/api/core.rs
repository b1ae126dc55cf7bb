use std::sync::atomic::{AtomicUsize, Ordering};

use crate::api::Descriptor;
use crate::matcher::{Entry, TokenMatcher};
use crate::model::DescriptorId;
use crate::parser::{ConfigError, HelpPrinter, ParseError, ParseResult};
use crate::prelude::Handle;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

static NEXT_REGISTRY: AtomicUsize = AtomicUsize::new(0);

/// The ordered collection of argument descriptors.
///
/// Descriptors are registered via [`Registry::add`], after which the registry may be used to [`Registry::parse`] tokens or render its [`Registry::help`].
/// Once registration is complete, a registry may be shared across threads for parsing and rendering.
///
/// ### Example
/// ```
/// # use argmark_builder as argmark;
/// use argmark::{Flag, Registry, ValueFlag};
///
/// let mut registry = Registry::new();
/// let verbose = registry.add(Flag::new(["-v", "--verbose"], "Log verbosely.").unwrap()).unwrap();
/// let input = registry
///     .add(ValueFlag::string(["-i", "--input"], "The input file.", "<path>").unwrap().required())
///     .unwrap();
///
/// let result = registry.parse(vec!["--input", "in.txt"].as_slice()).unwrap();
///
/// assert!(!result.has(&verbose));
/// assert_eq!(result.value(&input).unwrap(), "in.txt");
/// ```
pub struct Registry {
    id: usize,
    entries: Vec<Entry>,
}

impl Default for Registry {
    fn default() -> Self {
        Self {
            id: NEXT_REGISTRY.fetch_add(1, Ordering::Relaxed),
            entries: Vec::default(),
        }
    }
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("id", &self.id)
            .field("entries", &self.entries)
            .finish()
    }
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a [`Flag`](crate::Flag) or [`ValueFlag`](crate::ValueFlag), returning the handle with which to query a [`ParseResult`].
    ///
    /// The order of registration is the order of the help listing.
    /// If any form of the descriptor is already registered, this fails with [`ConfigError::DuplicateForm`] and the registry is left unchanged.
    ///
    /// ### Example
    /// ```
    /// # use argmark_builder as argmark;
    /// use argmark::{ConfigError, Flag, Registry, ValueFlag};
    ///
    /// let mut registry = Registry::new();
    /// registry.add(Flag::new(["-v", "--verbose"], "Log verbosely.").unwrap()).unwrap();
    ///
    /// let result = registry.add(ValueFlag::integer(["--level", "-v"], "Log level.", "<n>").unwrap());
    ///
    /// assert_eq!(result.unwrap_err(), ConfigError::DuplicateForm("-v".to_string()));
    /// assert_eq!(registry.len(), 1);
    /// ```
    pub fn add<D: Descriptor>(&mut self, descriptor: D) -> Result<D::Handle, ConfigError> {
        descriptor.register(self)
    }

    pub(crate) fn insert(&mut self, entry: Entry) -> Result<DescriptorId, ConfigError> {
        for other in &self.entries {
            for form in entry.forms() {
                if other.matches(form) {
                    #[cfg(feature = "tracing_debug")]
                    {
                        debug!("Rejecting {entry:?}: the form '{form}' belongs to {other:?}.");
                    }

                    return Err(ConfigError::DuplicateForm(form.clone()));
                }
            }
        }

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Registering {entry:?} at index {}.", self.entries.len());
        }

        let id = DescriptorId::new(self.id, self.entries.len());
        self.entries.push(entry);
        Ok(id)
    }

    /// The number of registered descriptors.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The forms of the descriptor behind `handle`, or `None` if the handle belongs to another registry.
    pub fn forms(&self, handle: &impl Handle) -> Option<&[String]> {
        self.entry(handle.id()).map(Entry::forms)
    }

    pub(crate) fn entry(&self, id: DescriptorId) -> Option<&Entry> {
        if id.registry() == self.id {
            self.entries.get(id.index())
        } else {
            None
        }
    }

    pub(crate) fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub(crate) fn id(&self) -> usize {
        self.id
    }

    /// Match the tokens against the registered descriptors.
    ///
    /// Tokens are scanned left to right.
    /// Each token must precisely equal a registered form; a value flag additionally consumes the following token as its value.
    /// Parsing fails on the first problem encountered, with nothing partially matched:
    /// * [`ParseError::UnknownArgument`] when a token is not a registered form.
    /// * [`ParseError::MissingValue`] when a value flag is the final token.
    /// * [`ParseError::InvalidValue`] when a value token cannot be converted.
    /// * [`ParseError::MissingRequired`] when required descriptors were never matched (checked after all tokens).
    pub fn parse(&self, tokens: &[&str]) -> Result<ParseResult<'_>, ParseError> {
        let mut token_matcher = TokenMatcher::new(&self.entries);

        for token in tokens {
            token_matcher.feed(token).map_err(|error| {
                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Failed to match '{token}': {error}");
                }

                error
            })?;
        }

        let matches = token_matcher.close()?;
        Ok(ParseResult::new(self, matches))
    }

    /// Render the help listing with the default [`HelpPrinter`].
    pub fn help(&self) -> String {
        HelpPrinter::default().render(self)
    }
}
