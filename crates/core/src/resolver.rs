//! Resolution of a single reference token into the tokens its file yields.

use std::path::Path;

use crate::error::ArgfileError;
use crate::parser::{flat, json, text, FileFormat};
use crate::reference::FileReference;
use crate::sections::SectionState;
use crate::source::{FileSystemProvider, SourceProvider};

static FILE_SYSTEM: FileSystemProvider = FileSystemProvider;

/// Reads the file a reference names with the configured parser and checks
/// that every requested section was present.
///
/// A `Resolver` holds no per-call state; every [`resolve`](Self::resolve)
/// builds its own [`SectionState`].
#[derive(Clone, Copy)]
pub struct Resolver<'a> {
    provider: &'a dyn SourceProvider,
    format: FileFormat,
    trigger: Option<char>,
}

impl Resolver<'static> {
    /// Filesystem-backed resolver picking the parser from the file extension.
    pub fn new() -> Self {
        Resolver {
            provider: &FILE_SYSTEM,
            format: FileFormat::Auto,
            trigger: None,
        }
    }
}

impl Default for Resolver<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> Resolver<'a> {
    /// Read files through `provider` instead of the local filesystem.
    pub fn with_provider<'b>(self, provider: &'b dyn SourceProvider) -> Resolver<'b> {
        Resolver {
            provider,
            format: self.format,
            trigger: self.trigger,
        }
    }

    pub fn with_format(mut self, format: FileFormat) -> Self {
        self.format = format;
        self
    }

    /// Use `trigger` as the section marker instead of each token's own first
    /// character.
    pub fn with_trigger(mut self, trigger: char) -> Self {
        self.trigger = Some(trigger);
        self
    }

    pub fn format(&self) -> FileFormat {
        self.format
    }

    pub fn trigger(&self) -> Option<char> {
        self.trigger
    }

    /// Resolve `token` (its first character being the host's reference
    /// marker) to the tokens of the selected parts of its file.
    pub fn resolve(&self, token: &str) -> Result<Vec<String>, ArgfileError> {
        let reference = FileReference::parse(token, self.trigger)?;
        let format = self.format.for_file(&reference.filename);
        tracing::debug!(
            file = %reference.filename,
            sections = ?reference.sections,
            format = format.as_str(),
            "reading arguments from file"
        );

        let src = self.read(&reference.filename)?;
        let mut state = SectionState::new(reference.sections.iter().cloned());
        let tokens = match format {
            FileFormat::Flat => flat::parse(&src),
            FileFormat::Json => {
                json::parse(&src, &reference.filename, reference.trigger, &mut state)?
            }
            FileFormat::Text | FileFormat::Auto => text::parse(&src, reference.trigger, &mut state),
        };

        state.validate(&reference.filename)?;
        Ok(tokens)
    }

    /// Section names `filename` declares when `trigger` marks sections (or
    /// the configured override, if any). Flat files declare none.
    pub fn declared_sections(&self, filename: &str, trigger: char) -> Result<Vec<String>, ArgfileError> {
        let trigger = self.trigger.unwrap_or(trigger);
        let src = self.read(filename)?;
        match self.format.for_file(filename) {
            FileFormat::Flat => Ok(Vec::new()),
            FileFormat::Json => json::declared_sections(&src, filename, trigger),
            FileFormat::Text | FileFormat::Auto => Ok(text::declared_sections(&src, trigger)),
        }
    }

    /// Expand every reference in `tokens` (see [`crate::expand`]) through this
    /// resolver.
    pub fn expand<I, S>(&self, tokens: I, prefix_chars: &str) -> Result<Vec<String>, ArgfileError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        crate::expand::expand(tokens, prefix_chars, |token: &str| self.resolve(token))
    }

    fn read(&self, filename: &str) -> Result<String, ArgfileError> {
        self.provider
            .read_source(Path::new(filename))
            .map_err(|e| ArgfileError::file_access(filename, e))
    }
}

impl std::fmt::Debug for Resolver<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Resolver")
            .field("format", &self.format)
            .field("trigger", &self.trigger)
            .finish_non_exhaustive()
    }
}
