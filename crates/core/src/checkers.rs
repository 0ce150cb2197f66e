//! Value checkers for individual flags.
//!
//! Every checker returns its input on success, so they compose with parsing
//! and plug into `clap` value parsers:
//!
//! ```ignore
//! #[arg(long, value_parser = checkers::ranged::<u32>(1, 64))]
//! workers: u32,
//! #[arg(long, value_parser = checkers::check_is_file)]
//! input: PathBuf,
//! ```

use std::fmt::Display;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::CheckError;

fn out_of_range<T: Display>(value: &T, relation: &'static str, bound: &T) -> CheckError {
    CheckError::OutOfRange {
        value: value.to_string(),
        relation,
        bound: bound.to_string(),
    }
}

fn out_of_bounds<T: Display>(value: &T, relation: &'static str, lower: &T, upper: &T) -> CheckError {
    CheckError::OutOfBounds {
        value: value.to_string(),
        relation,
        lower: lower.to_string(),
        upper: upper.to_string(),
    }
}

// ──────────────────────────────────────────────
// Ranges
// ──────────────────────────────────────────────

/// `value >= min`
pub fn check_at_least<T: PartialOrd + Display>(value: T, min: T) -> Result<T, CheckError> {
    if value < min {
        return Err(out_of_range(&value, "at least", &min));
    }
    Ok(value)
}

/// `value <= max`
pub fn check_at_most<T: PartialOrd + Display>(value: T, max: T) -> Result<T, CheckError> {
    if value > max {
        return Err(out_of_range(&value, "at most", &max));
    }
    Ok(value)
}

/// `value > min`
pub fn check_greater_than<T: PartialOrd + Display>(value: T, min: T) -> Result<T, CheckError> {
    if value <= min {
        return Err(out_of_range(&value, "greater than", &min));
    }
    Ok(value)
}

/// `value < max`
pub fn check_less_than<T: PartialOrd + Display>(value: T, max: T) -> Result<T, CheckError> {
    if value >= max {
        return Err(out_of_range(&value, "less than", &max));
    }
    Ok(value)
}

/// `lower <= value <= upper`
pub fn check_between<T: PartialOrd + Display>(value: T, lower: T, upper: T) -> Result<T, CheckError> {
    if value < lower || value > upper {
        return Err(out_of_bounds(&value, "between", &lower, &upper));
    }
    Ok(value)
}

/// `lower < value < upper`
pub fn check_strictly_between<T: PartialOrd + Display>(
    value: T,
    lower: T,
    upper: T,
) -> Result<T, CheckError> {
    if value <= lower || value >= upper {
        return Err(out_of_bounds(&value, "strictly between", &lower, &upper));
    }
    Ok(value)
}

/// Parse `raw` as a `T`.
pub fn parse_value<T>(raw: &str) -> Result<T, CheckError>
where
    T: FromStr,
    T::Err: Display,
{
    raw.parse::<T>().map_err(|e| CheckError::Unparsable {
        value: raw.to_string(),
        message: e.to_string(),
    })
}

/// Value parser accepting `lower <= value <= upper`.
pub fn ranged<T>(lower: T, upper: T) -> impl Fn(&str) -> Result<T, CheckError> + Clone + Send + Sync + 'static
where
    T: FromStr + PartialOrd + Display + Clone + Send + Sync + 'static,
    T::Err: Display,
{
    move |raw: &str| check_between(parse_value(raw)?, lower.clone(), upper.clone())
}

/// Value parser accepting `value >= min`.
pub fn bounded_below<T>(min: T) -> impl Fn(&str) -> Result<T, CheckError> + Clone + Send + Sync + 'static
where
    T: FromStr + PartialOrd + Display + Clone + Send + Sync + 'static,
    T::Err: Display,
{
    move |raw: &str| check_at_least(parse_value(raw)?, min.clone())
}

// ──────────────────────────────────────────────
// Paths
// ──────────────────────────────────────────────

/// The path names an existing regular file.
pub fn check_is_file(path: &str) -> Result<PathBuf, CheckError> {
    if !Path::new(path).is_file() {
        return Err(CheckError::NoSuchFile(path.to_string()));
    }
    Ok(PathBuf::from(path))
}

/// The path names an existing directory.
pub fn check_is_dir(path: &str) -> Result<PathBuf, CheckError> {
    if !Path::new(path).is_dir() {
        return Err(CheckError::NoSuchDirectory(path.to_string()));
    }
    Ok(PathBuf::from(path))
}

/// The path's extension (without the dot) is exactly `ext`.
pub fn check_file_extension(path: &str, ext: &str) -> Result<String, CheckError> {
    let found = Path::new(path)
        .extension()
        .map(|e| e.to_string_lossy().into_owned())
        .unwrap_or_default();
    if found != ext {
        return Err(CheckError::WrongExtension {
            found,
            expected: ext.to_string(),
        });
    }
    Ok(path.to_string())
}

/// Append a trailing `/` unless already present.
pub fn dir_add_slash(path: &str) -> String {
    if path.ends_with('/') {
        path.to_string()
    } else {
        format!("{}/", path)
    }
}

// ──────────────────────────────────────────────
// Escapes
// ──────────────────────────────────────────────

/// Interpret backslash escapes (`\n`, `\t`, `\101`, `\x41`, `\u00e9`, ...) so
/// a command line can carry control characters. Octal escapes take up to
/// three digits; `\x`, `\u` and `\U` take exactly two, four and eight hex
/// digits. Unknown escapes are kept as written.
pub fn eval_string(raw: &str) -> Result<String, CheckError> {
    let invalid = |sequence: String| CheckError::InvalidEscape {
        value: raw.to_string(),
        sequence,
    };

    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        let Some(e) = chars.next() else {
            return Err(invalid("\\".to_string()));
        };
        match e {
            '\\' => out.push('\\'),
            '\'' => out.push('\''),
            '"' => out.push('"'),
            'n' => out.push('\n'),
            't' => out.push('\t'),
            'r' => out.push('\r'),
            'a' => out.push('\u{07}'),
            'b' => out.push('\u{08}'),
            'f' => out.push('\u{0c}'),
            'v' => out.push('\u{0b}'),
            'x' | 'u' | 'U' => {
                let width = match e {
                    'x' => 2,
                    'u' => 4,
                    _ => 8,
                };
                let digits: String = chars.by_ref().take(width).collect();
                let sequence = format!("\\{}{}", e, digits);
                if digits.len() != width || !digits.chars().all(|d| d.is_ascii_hexdigit()) {
                    return Err(invalid(sequence));
                }
                let decoded = u32::from_str_radix(&digits, 16)
                    .ok()
                    .and_then(char::from_u32)
                    .ok_or_else(|| invalid(sequence))?;
                out.push(decoded);
            }
            '0'..='7' => {
                let mut value = e.to_digit(8).unwrap_or(0);
                for _ in 0..2 {
                    match chars.peek().and_then(|d| d.to_digit(8)) {
                        Some(d) => {
                            value = value * 8 + d;
                            chars.next();
                        }
                        None => break,
                    }
                }
                // at most 0o777, always a valid scalar value
                out.extend(char::from_u32(value));
            }
            other => {
                out.push('\\');
                out.push(other);
            }
        }
    }
    Ok(out)
}
