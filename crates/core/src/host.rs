//! Glue between expansion and a `clap` parser.
//!
//! Expansion runs on the raw argument list first; the flattened list is then
//! handed to clap. Expansion failures are turned into `clap::Error`s built
//! from the parser's own command, so they render and exit like any other
//! argument error.

use clap::error::ErrorKind as ClapErrorKind;
use clap::{CommandFactory, Parser};

use crate::error::{ArgfileError, ErrorKind};
use crate::expand::{expand, os_args_to_strings};

/// Expand `args` and parse the result as `P`.
pub fn try_parse_from<P, I, S, F>(args: I, prefix_chars: &str, resolver: F) -> Result<P, clap::Error>
where
    P: Parser,
    I: IntoIterator<Item = S>,
    S: Into<String>,
    F: FnMut(&str) -> Result<Vec<String>, ArgfileError>,
{
    let expanded = expand(args, prefix_chars, resolver).map_err(|e| to_clap_error::<P>(&e))?;
    P::try_parse_from(expanded)
}

/// Like [`try_parse_from`], but prints the error and exits on failure.
pub fn parse_from<P, I, S, F>(args: I, prefix_chars: &str, resolver: F) -> P
where
    P: Parser,
    I: IntoIterator<Item = S>,
    S: Into<String>,
    F: FnMut(&str) -> Result<Vec<String>, ArgfileError>,
{
    try_parse_from(args, prefix_chars, resolver).unwrap_or_else(|e| e.exit())
}

/// Expand and parse the process arguments, exiting on failure.
pub fn parse<P, F>(prefix_chars: &str, resolver: F) -> P
where
    P: Parser,
    F: FnMut(&str) -> Result<Vec<String>, ArgfileError>,
{
    let args = os_args_to_strings(std::env::args_os()).unwrap_or_else(|e| to_clap_error::<P>(&e).exit());
    parse_from(args, prefix_chars, resolver)
}

/// Render an expansion failure as an error of `P`'s command.
pub fn to_clap_error<P: CommandFactory>(err: &ArgfileError) -> clap::Error {
    let kind = match err.kind() {
        ErrorKind::FileAccess => ClapErrorKind::Io,
        ErrorKind::InvalidUtf8 => ClapErrorKind::InvalidUtf8,
        _ => ClapErrorKind::ValueValidation,
    };
    P::command().error(kind, err)
}
