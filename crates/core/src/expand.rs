//! Recursive splicing of file references into an argument list.

use std::ffi::OsString;

use crate::error::ArgfileError;

/// Expand every file reference in `tokens`.
///
/// A token is a reference when it is non-empty and its first character is
/// one of `prefix_chars`. Each reference is handed to `resolver`; the tokens
/// it returns are themselves expanded and then spliced in place of the
/// reference. Other tokens pass through unchanged and in order.
///
/// Any failure aborts the whole expansion. Resolver failures are tagged with
/// the reference that raised them. A reference that re-enters itself while
/// still being expanded fails with [`ArgfileError::ReferenceCycle`].
pub fn expand<I, S, F>(tokens: I, prefix_chars: &str, mut resolver: F) -> Result<Vec<String>, ArgfileError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
    F: FnMut(&str) -> Result<Vec<String>, ArgfileError>,
{
    let mut out = Vec::new();
    let mut stack = Vec::new();
    expand_into(
        tokens.into_iter().map(Into::into),
        prefix_chars,
        &mut resolver,
        &mut stack,
        &mut out,
    )?;
    Ok(out)
}

/// [`expand`] applied to the process arguments (including the program name).
pub fn expand_args<F>(prefix_chars: &str, resolver: F) -> Result<Vec<String>, ArgfileError>
where
    F: FnMut(&str) -> Result<Vec<String>, ArgfileError>,
{
    expand_args_from(std::env::args_os(), prefix_chars, resolver)
}

/// [`expand`] applied to OS strings; any argument that is not valid Unicode
/// fails with [`ArgfileError::InvalidUtf8`].
pub fn expand_args_from<I, F>(args: I, prefix_chars: &str, resolver: F) -> Result<Vec<String>, ArgfileError>
where
    I: IntoIterator<Item = OsString>,
    F: FnMut(&str) -> Result<Vec<String>, ArgfileError>,
{
    expand(os_args_to_strings(args)?, prefix_chars, resolver)
}

/// Convert OS arguments to `String`s, failing on the first non-Unicode one.
pub fn os_args_to_strings<I>(args: I) -> Result<Vec<String>, ArgfileError>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .map(|arg| {
            arg.into_string().map_err(|bad| ArgfileError::InvalidUtf8 {
                argument: bad.to_string_lossy().into_owned(),
            })
        })
        .collect()
}

/// Whether `token` would be treated as a file reference.
pub fn is_reference(token: &str, prefix_chars: &str) -> bool {
    token
        .chars()
        .next()
        .map_or(false, |c| prefix_chars.contains(c))
}

fn expand_into<I, F>(
    tokens: I,
    prefix_chars: &str,
    resolver: &mut F,
    stack: &mut Vec<String>,
    out: &mut Vec<String>,
) -> Result<(), ArgfileError>
where
    I: Iterator<Item = String>,
    F: FnMut(&str) -> Result<Vec<String>, ArgfileError>,
{
    for token in tokens {
        if !is_reference(&token, prefix_chars) {
            out.push(token);
            continue;
        }

        if stack.contains(&token) {
            let mut chain = stack.clone();
            chain.push(token);
            return Err(ArgfileError::ReferenceCycle { chain });
        }

        let resolved = resolver(&token).map_err(|e| e.in_reference(token.as_str()))?;
        tracing::debug!(reference = %token, tokens = resolved.len(), "expanding file reference");

        stack.push(token);
        expand_into(resolved.into_iter(), prefix_chars, resolver, stack, out)?;
        stack.pop();
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use std::collections::HashMap;

    /// Resolver over a fixed token-to-tokens table.
    fn table(entries: &[(&str, Vec<&str>)]) -> impl FnMut(&str) -> Result<Vec<String>, ArgfileError> {
        let map: HashMap<String, Vec<String>> = entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.iter().map(|s| s.to_string()).collect()))
            .collect();
        move |token: &str| {
            map.get(token)
                .cloned()
                .ok_or_else(|| ArgfileError::Resolver(format!("unknown reference {}", token)))
        }
    }

    #[test]
    fn process_arguments_pass_through_without_references() {
        let expected: Vec<String> = std::env::args().collect();
        let out = expand_args("\u{1}", table(&[])).unwrap();
        assert_eq!(out, expected);
    }

    #[test]
    fn os_arguments_are_expanded() {
        let args = ["prog", "@f", "--b"].map(OsString::from);
        let out = expand_args_from(args, "@", table(&[("@f", vec!["--a", "1"])])).unwrap();
        assert_eq!(out, vec!["prog", "--a", "1", "--b"]);
    }

    #[cfg(unix)]
    #[test]
    fn non_unicode_argument_is_an_error_not_a_panic() {
        use std::os::unix::ffi::OsStringExt;

        let args = vec![OsString::from("prog"), OsString::from_vec(vec![0xff])];
        let err = expand_args_from(args, "@", table(&[])).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidUtf8);
        assert!(err.to_string().contains("\u{fffd}"));
    }

    #[test]
    fn tokens_without_references_are_unchanged() {
        let args = vec!["prog", "--a", "1", "", "b@c"];
        let out = expand(args.clone(), "@", table(&[])).unwrap();
        assert_eq!(out, args);
    }

    #[test]
    fn reference_is_spliced_in_place() {
        let out = expand(
            ["--first", "@f", "--last"],
            "@",
            table(&[("@f", vec!["--a", "1"])]),
        )
        .unwrap();
        assert_eq!(out, vec!["--first", "--a", "1", "--last"]);
    }

    #[test]
    fn nested_references_are_fully_expanded() {
        let out = expand(
            ["@file1"],
            "@",
            table(&[("@file1", vec!["@file2"]), ("@file2", vec!["--z", "9"])]),
        )
        .unwrap();
        assert_eq!(out, vec!["--z", "9"]);
    }

    #[test]
    fn every_prefix_char_triggers() {
        let out = expand(
            ["@a", "+b", "-c"],
            "@+",
            table(&[("@a", vec!["1"]), ("+b", vec!["2"])]),
        )
        .unwrap();
        assert_eq!(out, vec!["1", "2", "-c"]);
    }

    #[test]
    fn same_reference_twice_in_sequence_is_not_a_cycle() {
        let out = expand(["@f", "@f"], "@", table(&[("@f", vec!["x"])])).unwrap();
        assert_eq!(out, vec!["x", "x"]);
    }

    #[test]
    fn self_reference_is_detected() {
        let err = expand(
            ["@a"],
            "@",
            table(&[("@a", vec!["--x", "@b"]), ("@b", vec!["@a"])]),
        )
        .unwrap_err();
        match err {
            ArgfileError::ReferenceCycle { chain } => assert_eq!(chain, vec!["@a", "@b", "@a"]),
            other => panic!("expected ReferenceCycle, got {:?}", other),
        }
    }

    #[test]
    fn failure_names_the_offending_reference() {
        let err = expand(
            ["--ok", "@outer"],
            "@",
            table(&[("@outer", vec!["@inner"])]),
        )
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Resolver);
        assert_eq!(err.reference(), Some("@inner"));
        assert!(err.to_string().starts_with("@inner: unknown reference"));
    }

    #[test]
    fn resolver_is_not_called_after_a_failure() {
        let mut calls = Vec::new();
        let result = expand(["@bad", "@good"], "@", |token: &str| {
            calls.push(token.to_string());
            if token == "@bad" {
                Err(ArgfileError::Resolver("boom".into()))
            } else {
                Ok(vec![])
            }
        });
        assert!(result.is_err());
        assert_eq!(calls, vec!["@bad"]);
    }

    #[test]
    fn is_reference_requires_leading_prefix() {
        assert!(is_reference("@f", "@"));
        assert!(!is_reference("", "@"));
        assert!(!is_reference("f@", "@"));
        assert!(!is_reference("@f", ""));
    }
}
