//! sectargs-core: argument-file expansion with selectable sections.
//!
//! A command-line token such as `@train.txt@gpu@fast` names a file whose
//! contents are spliced into the argument list in place of the token,
//! keeping only the unsectioned content and the selected sections. Spliced
//! content is expanded again, so files may reference further files.
//!
//! # Public API
//!
//! - [`expand()`] -- expand every reference in a token list through any resolver
//! - [`Resolver`] -- the stock resolver (plain text, JSON or flat files)
//! - [`ArgfileError`] -- expansion error type
//! - [`checkers`] -- value checkers usable as `clap` value parsers
//! - [`host`] -- expand-then-parse helpers for `clap` (feature `clap`)

pub mod checkers;
pub mod error;
pub mod expand;
#[cfg(feature = "clap")]
pub mod host;
pub mod parser;
pub mod reference;
pub mod resolver;
pub mod sections;
pub mod source;
pub mod tokenizer;

/// Conventional marker for file references.
pub const PREFIX: char = '@';

// ── Convenience re-exports ───────────────────────────────────────────

pub use error::{ArgfileError, CheckError, ErrorKind};
pub use expand::{expand, expand_args, expand_args_from, is_reference};
pub use parser::FileFormat;
pub use reference::FileReference;
pub use resolver::Resolver;
pub use sections::{SectionState, DEFAULT_SECTION};
pub use source::{FileSystemProvider, InMemoryProvider, SourceProvider};
