use sectargs_core::{FileFormat, Resolver};

use crate::OutputFormat;

pub(crate) struct ExpandArgs<'a> {
    pub prefix_chars: &'a str,
    pub trigger: Option<char>,
    pub format: FileFormat,
    pub args: &'a [String],
}

/// Expand `args.args` and print the flattened list. Returns false on error.
pub(crate) fn cmd_expand(args: &ExpandArgs<'_>, output: OutputFormat, quiet: bool) -> bool {
    let mut resolver = Resolver::new().with_format(args.format);
    if let Some(trigger) = args.trigger {
        resolver = resolver.with_trigger(trigger);
    }
    tracing::debug!(
        format = resolver.format().as_str(),
        trigger = ?resolver.trigger(),
        prefix_chars = args.prefix_chars,
        "expanding arguments"
    );

    match resolver.expand(args.args.iter().map(String::as_str), args.prefix_chars) {
        Ok(tokens) => {
            tracing::debug!(count = tokens.len(), "expansion finished");
            super::print_tokens(&tokens, output);
            true
        }
        Err(e) => {
            crate::report_error(&e, output, quiet);
            false
        }
    }
}
