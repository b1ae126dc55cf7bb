use std::any::Any;
use std::env;

use crate::api::Registry;
use crate::constant::*;
use crate::matcher::Match;
use crate::model::{DescriptorId, ValueHandle};
use crate::parser::{ConsoleInterface, ParseError, QueryError, UserInterface};
use crate::prelude::Handle;

/// The matches of a successful [`Registry::parse`].
///
/// Every occurrence of a descriptor in the tokens is kept, in token order.
/// When a descriptor is matched multiple times, choose which value(s) to use via [`ParseResult::value`] (the first), [`ParseResult::last_value`], or [`ParseResult::values`].
///
/// ### Example
/// ```
/// # use argmark_builder as argmark;
/// use argmark::{Registry, ValueFlag};
///
/// let mut registry = Registry::new();
/// let level = registry.add(ValueFlag::integer(["-l"], "Level.", "<n>").unwrap()).unwrap();
///
/// let result = registry.parse(vec!["-l", "1", "-l", "2"].as_slice()).unwrap();
///
/// assert_eq!(result.count(&level), 2);
/// assert_eq!(result.value(&level), Ok(&1));
/// assert_eq!(result.last_value(&level), Ok(&2));
/// assert_eq!(result.values(&level), Ok(vec![&1, &2]));
/// ```
pub struct ParseResult<'r> {
    registry: &'r Registry,
    matches: Vec<Match>,
}

impl<'r> std::fmt::Debug for ParseResult<'r> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParseResult")
            .field("matches", &self.matches)
            .finish()
    }
}

impl<'r> ParseResult<'r> {
    pub(crate) fn new(registry: &'r Registry, matches: Vec<Match>) -> Self {
        Self { registry, matches }
    }

    /// The number of matches (counting repeated occurrences).
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    /// Whether nothing was matched.
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// The descriptors matched, in token order (including repeated occurrences).
    pub fn matched(&self) -> impl Iterator<Item = DescriptorId> + '_ {
        let registry = self.registry.id();
        self.matches
            .iter()
            .map(move |m| DescriptorId::new(registry, m.index))
    }

    /// Whether the descriptor was matched at least once.
    pub fn has(&self, handle: &impl Handle) -> bool {
        self.count(handle) > 0
    }

    /// The number of times the descriptor was matched.
    pub fn count(&self, handle: &impl Handle) -> usize {
        self.occurrences(handle.id()).count()
    }

    /// The value of the first match for the descriptor.
    pub fn value<T: Any>(&self, handle: &ValueHandle<T>) -> Result<&T, QueryError> {
        self.values(handle)?
            .into_iter()
            .next()
            .ok_or_else(|| self.not_matched(handle.id()))
    }

    /// The value of the final match for the descriptor.
    pub fn last_value<T: Any>(&self, handle: &ValueHandle<T>) -> Result<&T, QueryError> {
        self.values(handle)?
            .pop()
            .ok_or_else(|| self.not_matched(handle.id()))
    }

    /// The values of every match for the descriptor, in token order.
    /// Empty when the descriptor was not matched.
    pub fn values<T: Any>(&self, handle: &ValueHandle<T>) -> Result<Vec<&T>, QueryError> {
        let id = handle.id();

        if self.registry.entry(id).is_none() {
            return Err(QueryError::ForeignHandle);
        }

        self.occurrences(id)
            .map(|m| {
                m.value
                    .as_ref()
                    .and_then(|value| value.downcast_ref::<T>())
                    .ok_or(QueryError::ForeignHandle)
            })
            .collect()
    }

    fn occurrences(&self, id: DescriptorId) -> impl Iterator<Item = &Match> + '_ {
        let same_registry = id.registry() == self.registry.id();
        self.matches
            .iter()
            .filter(move |m| same_registry && m.index == id.index())
    }

    fn not_matched(&self, id: DescriptorId) -> QueryError {
        match self.registry.entry(id) {
            Some(entry) => QueryError::NotMatched(entry.primary_form().to_string()),
            None => QueryError::ForeignHandle,
        }
    }
}

impl Registry {
    /// Parse the tokens, reporting any failure to the `user_interface`.
    ///
    /// On failure, the error is printed followed by the help listing, and `Err(1)` is returned (suitable as a process exit code).
    pub fn parse_or_report(
        &self,
        tokens: &[&str],
        user_interface: &(impl UserInterface + ?Sized),
    ) -> Result<ParseResult<'_>, i32> {
        self.parse(tokens).map_err(|error| {
            report(self, error, user_interface);
            FAILURE_EXIT_CODE
        })
    }

    /// Parse the command line arguments ([`env::args`], excluding the program name).
    ///
    /// If an error is encountered, prints the error and help listing then exits with error code `1` (via [`std::process::exit`]).
    pub fn parse_env(&self) -> ParseResult<'_> {
        let tokens: Vec<String> = env::args().skip(1).collect();
        let tokens: Vec<&str> = tokens.iter().map(AsRef::as_ref).collect();

        match self.parse(&tokens) {
            Ok(result) => result,
            Err(error) => {
                report(self, error, &ConsoleInterface::default());
                std::process::exit(FAILURE_EXIT_CODE);
            }
        }
    }
}

fn report(registry: &Registry, error: ParseError, user_interface: &(impl UserInterface + ?Sized)) {
    user_interface.print_error(error);
    user_interface.print(registry.help());
}
