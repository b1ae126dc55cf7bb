use std::collections::BTreeSet;

use crate::matcher::model::*;
use crate::parser::ParseError;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// Matches tokens, one at a time, against the registered entries.
///
/// Matching is a single greedy pass: once a token is consumed as a value it is never reconsidered as a form.
#[derive(Debug)]
pub(crate) struct TokenMatcher<'r> {
    entries: &'r [Entry],
    // Indices of the required entries not yet matched.
    // Ordered, so that errors list them by registration order.
    pending: BTreeSet<usize>,
    // The value flag awaiting its value token, along with the token that named it.
    buffer: Option<(usize, String)>,
    matches: Vec<Match>,
}

impl<'r> TokenMatcher<'r> {
    pub(crate) fn new(entries: &'r [Entry]) -> Self {
        let pending = entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| !entry.is_optional())
            .map(|(index, _)| index)
            .collect();

        Self {
            entries,
            pending,
            buffer: None,
            matches: Vec::default(),
        }
    }

    pub(crate) fn feed(&mut self, token: &str) -> Result<(), ParseError> {
        match self.buffer.take() {
            Some((index, _)) => self.capture(index, token),
            None => self.match_form(token),
        }
    }

    fn match_form(&mut self, token: &str) -> Result<(), ParseError> {
        let index = self
            .entries
            .iter()
            .position(|entry| entry.matches(token))
            .ok_or_else(|| ParseError::UnknownArgument(token.to_string()))?;
        self.pending.remove(&index);

        match self.entries[index].kind() {
            Kind::Flag => {
                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Matched '{token}' to flag {:?}.", self.entries[index]);
                }

                self.matches.push(Match::flag(index));
            }
            Kind::Value { .. } => {
                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Matched '{token}' to value flag {:?}; awaiting its value.", self.entries[index]);
                }

                if self.buffer.replace((index, token.to_string())).is_some() {
                    unreachable!("internal error - the buffer is expected to be None");
                }
            }
        };

        Ok(())
    }

    fn capture(&mut self, index: usize, token: &str) -> Result<(), ParseError> {
        let entries = self.entries;
        let entry = &entries[index];

        match entry.kind() {
            Kind::Value { parser, .. } => {
                let value = parser
                    .parse(token)
                    .map_err(|source| ParseError::InvalidValue {
                        form: entry.primary_form().to_string(),
                        source,
                    })?;

                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Captured '{token}' for value flag {entry:?}.");
                }

                self.matches.push(Match::value(index, value));
                Ok(())
            }
            Kind::Flag => unreachable!("internal error - a flag cannot await a value"),
        }
    }

    pub(crate) fn close(self) -> Result<Vec<Match>, ParseError> {
        let TokenMatcher {
            entries,
            pending,
            buffer,
            matches,
        } = self;

        if let Some((_, token)) = buffer {
            return Err(ParseError::MissingValue(token));
        }

        if !pending.is_empty() {
            return Err(ParseError::MissingRequired(
                pending
                    .into_iter()
                    .map(|index| entries[index].primary_form().to_string())
                    .collect(),
            ));
        }

        Ok(matches)
    }
}
