use sectargs_core::{FileFormat, Resolver};

use crate::OutputFormat;

pub(crate) fn cmd_sections(
    file: &str,
    trigger: char,
    format: FileFormat,
    output: OutputFormat,
    quiet: bool,
) -> bool {
    let resolver = Resolver::new().with_format(format);
    match resolver.declared_sections(file, trigger) {
        Ok(names) => {
            super::print_tokens(&names, output);
            true
        }
        Err(e) => {
            crate::report_error(&e, output, quiet);
            false
        }
    }
}
