//! Parsing of file-reference tokens: `<t><file>` or `<t><file><t><section>...`.

use crate::error::ArgfileError;

/// A reference token split into the file it names and the sections it selects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReference {
    /// Character that separates sections in the token and marks section
    /// headers inside the file.
    pub trigger: char,
    pub filename: String,
    /// Requested sections in the order given, without duplicates. Empty means
    /// "no selection": only unsectioned content (and `default`) is read.
    pub sections: Vec<String>,
}

impl FileReference {
    /// Parse `token`, whose first character is the marker that made the host
    /// treat it as a reference. The trigger is `trigger_override` when given,
    /// otherwise the marker itself.
    pub fn parse(token: &str, trigger_override: Option<char>) -> Result<Self, ArgfileError> {
        let mut chars = token.chars();
        let marker = chars
            .next()
            .ok_or_else(|| ArgfileError::Resolver("empty file reference".to_string()))?;
        let trigger = trigger_override.unwrap_or(marker);
        let remainder = chars.as_str();

        let mut pieces = remainder.split(trigger);
        let filename = pieces.next().unwrap_or_default().to_string();

        let mut sections: Vec<String> = Vec::new();
        for piece in pieces {
            let name = piece.trim().to_string();
            if !sections.contains(&name) {
                sections.push(name);
            }
        }

        Ok(FileReference {
            trigger,
            filename,
            sections,
        })
    }

    /// Whether the reference selects any sections explicitly.
    pub fn has_selection(&self) -> bool {
        !self.sections.is_empty()
    }
}
