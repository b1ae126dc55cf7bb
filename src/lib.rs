//! `argmark` is a declarative command line argument parser for Rust.
//!
//! Arguments are declared up front as *descriptors*, each with one or more *forms* (ex: `-v` and `--verbose`), a help text, and an optionality.
//! The command line tokens are then matched against these forms.
//! `argmark` deliberately keeps the matching rules small:
//! * Every token must precisely equal a registered form; there is no prefix matching, no abbreviation, and no `--key=value` syntax.
//! * A [`ValueFlag`] consumes the single token that follows it as its value, converting it into a type `T`.
//! * A [`Flag`] carries no value, and is matched by presence alone.
//! * Matching is a single left-to-right pass, without backtracking.
//! * Positional arguments, sub-commands, and automatic `-h/--help` handling are not supported.
//!
//! # Usage
//! ```no_run
#![doc = include_str!("../demos/copier.rs")]
//! ```
//!
//! ```console
//! $ copier
//! Parse error: Expected the following non-optional arguments: -i.
//! -i <path>         The file to copy.
//! --input <path>
//!
//! -o <path>         Where to copy to. Defaults to
//! --output <path>   the input, suffixed with '.copy'.
//!
//! -n <count>        How many copies to make.
//! --copies <count>
//!
//! -v                Log verbosely.
//! --verbose
//! ```
//!
//! # Registry
//! Start with a [`Registry`] and [`Registry::add`] descriptors.
//! Each addition is validated: a form may belong to only one descriptor in the registry (see [`ConfigError::DuplicateForm`]).
//! Adding returns a handle: a [`FlagHandle`] for a `Flag`, or a [`ValueHandle<T>`] for a `ValueFlag<T>`.
//! The handle is how the outcome of parsing is queried, so that values are retrieved by their type `T` (without any string based lookup).
//!
//! ### Value kinds
//! The built-in value kinds live in [`value`]:
//! * [`value::boolean`]: precisely `true` or `false`.
//! * [`value::integer`]: an `i64`.
//! * [`value::float`]: an `f64`.
//! * [`value::string`]: any token, unmodified.
//! * [`value::parsed`]: any `T` that implements [`std::str::FromStr`].
//!
//! A custom kind is any `Fn(&str) -> Result<T, InvalidValue>`, handed to [`ValueFlag::new`].
//!
//! # Parsing
//! [`Registry::parse`] either produces a [`ParseResult`], or fails with a [`ParseError`] describing the first problem encountered.
//! Failures are all-or-nothing: nothing is partially matched.
//!
//! A descriptor may be matched more than once, in which case every occurrence is kept.
//! [`ParseResult::value`] gives the first value, [`ParseResult::last_value`] the final value, and [`ParseResult::values`] all of them.
//!
//! For a typical program, [`Registry::parse_env`] parses the process arguments, and upon failure prints the error along with the help listing before exiting with status `1`.
//!
//! # Help
//! [`Registry::help`] renders the descriptors, in registration order, into two columns.
//! See [`HelpPrinter`] for the layout rules.
//!
//! # Features
//! * `tracing_debug`: Log registration & matching via `tracing::debug!`.
pub use argmark_builder::*;
