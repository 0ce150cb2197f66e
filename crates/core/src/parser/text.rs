//! Line-oriented argument files with section headers.
//!
//! ```text
//! --verbose            # always read: appears before any header
//! @train --epochs 10   # header of section `train`, with inline arguments
//! --lr 0.1
//! @eval
//! --batch 64
//! ```
//!
//! A header line starts with the trigger character and names the section
//! that every following line belongs to, up to the next header. Lines are
//! emitted when no header has been seen yet or when the current section is
//! selected.

use crate::parser::push_unique;
use crate::sections::SectionState;
use crate::tokenizer::{strip_comment, tokenize};

/// Parse `src`, appending the tokens of every included line and marking
/// each selected section that appears as found.
pub fn parse(src: &str, trigger: char, state: &mut SectionState) -> Vec<String> {
    let mut out = Vec::new();
    let mut current: Option<String> = None;

    for raw in src.lines() {
        let stripped = strip_comment(raw);
        let line: &str = &stripped;
        if line.trim().is_empty() {
            continue;
        }

        let body = match split_header(line, trigger) {
            Some((name, rest)) => {
                tracing::trace!(section = name, "section header");
                state.mark_found(name);
                current = Some(name.to_string());
                rest
            }
            None => line,
        };

        let included = match &current {
            None => true,
            Some(name) => state.includes(name),
        };
        if included {
            out.extend(tokenize(body));
        }
    }

    out
}

/// Section names declared by header lines, in first-seen order.
pub fn declared_sections(src: &str, trigger: char) -> Vec<String> {
    let mut names = Vec::new();
    for raw in src.lines() {
        let line = strip_comment(raw);
        if let Some((name, _)) = split_header(&line, trigger) {
            push_unique(&mut names, name);
        }
    }
    names
}

/// Split a header line into `(section name, rest of line)`; `None` if the
/// line is not a header.
fn split_header(line: &str, trigger: char) -> Option<(&str, &str)> {
    let rest = line.strip_prefix(trigger)?;
    let (name, tail) = match rest.find(char::is_whitespace) {
        Some(i) => rest.split_at(i),
        None => (rest, ""),
    };
    Some((name.trim(), tail))
}
