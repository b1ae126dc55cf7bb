//! Builder module for `argmark`.
//! See [documentation root](https://docs.rs/argmark/latest/argmark/index.html) for full details.
#![deny(missing_docs)]
mod api;
mod constant;
mod matcher;
mod model;
mod parser;
#[allow(missing_docs)]
pub mod prelude;

pub use api::*;
pub use model::*;
pub use parser::{
    ConfigError, ConsoleInterface, HelpPrinter, ParseError, ParseResult, QueryError, UserInterface,
};

#[cfg(test)]
#[macro_use]
extern crate assert_matches;
