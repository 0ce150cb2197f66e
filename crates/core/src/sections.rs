//! Bookkeeping of which requested sections a parser has actually consumed.

use crate::error::ArgfileError;

/// Name of the section that is read implicitly when a reference selects none.
pub const DEFAULT_SECTION: &str = "default";

/// Requested section names mapped to whether the file contained them.
///
/// Entries are only ever added at construction and only ever flip from
/// not-found to found. The implicit `default` section is not an entry: it is
/// readable when nothing was requested but never validated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionState {
    entries: Vec<(String, bool)>,
}

impl SectionState {
    pub fn new<I, S>(requested: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut entries: Vec<(String, bool)> = Vec::new();
        for name in requested {
            let name = name.into();
            if !entries.iter().any(|(n, _)| *n == name) {
                entries.push((name, false));
            }
        }
        SectionState { entries }
    }

    /// No explicit selection: validation is vacuous.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether content under the section `name` belongs in the output.
    pub fn includes(&self, name: &str) -> bool {
        if self.entries.is_empty() {
            return name == DEFAULT_SECTION;
        }
        self.entries.iter().any(|(n, _)| n == name)
    }

    /// Record that the section `name` appeared. Unrequested names are ignored.
    pub fn mark_found(&mut self, name: &str) {
        if let Some(entry) = self.entries.iter_mut().find(|(n, _)| n == name) {
            entry.1 = true;
        }
    }

    pub fn is_found(&self, name: &str) -> bool {
        self.entries.iter().any(|(n, found)| n == name && *found)
    }

    /// Requested sections not yet seen, in request order.
    pub fn missing(&self) -> Vec<String> {
        self.entries
            .iter()
            .filter(|(_, found)| !found)
            .map(|(n, _)| n.clone())
            .collect()
    }

    /// Fail with `MissingSection` for `path` if any requested section was
    /// never seen.
    pub fn validate(&self, path: &str) -> Result<(), ArgfileError> {
        let missing = self.missing();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(ArgfileError::MissingSection {
                path: path.to_string(),
                missing,
            })
        }
    }
}
