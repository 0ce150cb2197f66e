//! Line tokenization shared by the line-oriented argument file parsers.

use std::borrow::Cow;

/// Split a line into its whitespace-separated, non-empty tokens.
pub fn tokenize(line: &str) -> Vec<String> {
    line.split_whitespace().map(str::to_owned).collect()
}

/// Drop everything from the first unescaped `#` to the end of the line.
///
/// `\#` stands for a literal `#` and is unescaped in the result; every other
/// backslash is kept as written. `\\` is not an escape, so `\\#` reads as a
/// kept `\` followed by a literal `#`; put a space before a comment that
/// follows a backslash.
pub fn strip_comment(line: &str) -> Cow<'_, str> {
    if !line.contains('#') {
        return Cow::Borrowed(line);
    }

    let mut out = String::with_capacity(line.len());
    let mut chars = line.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' if chars.peek() == Some(&'#') => {
                out.push('#');
                chars.next();
            }
            '#' => break,
            other => out.push(other),
        }
    }
    Cow::Owned(out)
}
