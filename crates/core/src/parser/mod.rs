//! Argument file parsers.
//!
//! Each parser turns the contents of one file into a flat token list.
//! The section-aware parsers ([`text`] and [`json`]) additionally consult and
//! update a [`SectionState`](crate::sections::SectionState) so the caller can
//! validate the selection once the whole file has been read.

pub mod flat;
pub mod json;
pub mod text;

// ──────────────────────────────────────────────
// Format selection
// ──────────────────────────────────────────────

/// Which parser reads a referenced file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FileFormat {
    /// Whitespace-separated tokens, no comments, no sections.
    Flat,
    /// Line-oriented text with `#` comments and section header lines.
    Text,
    /// A JSON document whose trigger-prefixed keys are sections.
    Json,
    /// `Json` for a `.json` extension, `Text` otherwise.
    #[default]
    Auto,
}

impl FileFormat {
    /// Resolve `Auto` against a file name; every other format is returned as is.
    pub fn for_file(self, filename: &str) -> FileFormat {
        match self {
            FileFormat::Auto => {
                let is_json = std::path::Path::new(filename)
                    .extension()
                    .map_or(false, |e| e.eq_ignore_ascii_case("json"));
                if is_json {
                    FileFormat::Json
                } else {
                    FileFormat::Text
                }
            }
            other => other,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FileFormat::Flat => "flat",
            FileFormat::Text => "text",
            FileFormat::Json => "json",
            FileFormat::Auto => "auto",
        }
    }
}

/// Push `name` onto `names` unless already present.
pub(crate) fn push_unique(names: &mut Vec<String>, name: &str) {
    if !names.iter().any(|n| n == name) {
        names.push(name.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auto_detects_json_by_extension() {
        assert_eq!(FileFormat::Auto.for_file("conf.json"), FileFormat::Json);
        assert_eq!(FileFormat::Auto.for_file("dir/conf.JSON"), FileFormat::Json);
        assert_eq!(FileFormat::Auto.for_file("conf.txt"), FileFormat::Text);
        assert_eq!(FileFormat::Auto.for_file("json"), FileFormat::Text);
    }

    #[test]
    fn explicit_formats_are_kept() {
        assert_eq!(FileFormat::Flat.for_file("conf.json"), FileFormat::Flat);
        assert_eq!(FileFormat::Text.for_file("conf.json"), FileFormat::Text);
    }
}
