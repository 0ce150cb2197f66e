//! Structured (JSON) argument files.
//!
//! ```json
//! {
//!     "--verbose": null,
//!     "--size": [3, 4],
//!     "@train": { "--epochs": 10 }
//! }
//! ```
//!
//! Keys starting with the trigger character are sections: their value is
//! read only when the section is selected. Any other key is emitted as a
//! token followed by the tokens of its value. Arrays contribute their
//! elements, scalars their text.

use serde_json::Value;

use crate::error::ArgfileError;
use crate::parser::push_unique;
use crate::sections::SectionState;

/// Parse the JSON document in `src` and walk it. `path` only labels errors.
pub fn parse(
    src: &str,
    path: &str,
    trigger: char,
    state: &mut SectionState,
) -> Result<Vec<String>, ArgfileError> {
    let doc = parse_document(src, path)?;
    let mut out = Vec::new();
    walk(&doc, trigger, state, &mut out);
    Ok(out)
}

pub(crate) fn parse_document(src: &str, path: &str) -> Result<Value, ArgfileError> {
    serde_json::from_str(src).map_err(|e| ArgfileError::malformed(path, e.to_string()))
}

/// Append the tokens of `value` to `out`.
pub fn walk(value: &Value, trigger: char, state: &mut SectionState, out: &mut Vec<String>) {
    match value {
        Value::Object(map) => {
            for (key, v) in map {
                match section_name(key, trigger) {
                    Some(name) => {
                        tracing::trace!(section = name, "section key");
                        if state.includes(name) {
                            walk(v, trigger, state, out);
                            state.mark_found(name);
                        }
                    }
                    None => {
                        out.push(key.clone());
                        walk(v, trigger, state, out);
                    }
                }
            }
        }
        Value::Array(items) => {
            for v in items {
                walk(v, trigger, state, out);
            }
        }
        scalar => out.push(scalar_text(scalar)),
    }
}

/// Section keys anywhere in the document, in first-seen order.
pub fn declared_sections(src: &str, path: &str, trigger: char) -> Result<Vec<String>, ArgfileError> {
    let doc = parse_document(src, path)?;
    let mut names = Vec::new();
    collect_sections(&doc, trigger, &mut names);
    Ok(names)
}

fn collect_sections(value: &Value, trigger: char, names: &mut Vec<String>) {
    match value {
        Value::Object(map) => {
            for (key, v) in map {
                if let Some(name) = section_name(key, trigger) {
                    push_unique(names, name);
                }
                collect_sections(v, trigger, names);
            }
        }
        Value::Array(items) => {
            for v in items {
                collect_sections(v, trigger, names);
            }
        }
        _ => {}
    }
}

fn section_name(key: &str, trigger: char) -> Option<&str> {
    key.strip_prefix(trigger).map(str::trim)
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
