mod expand;
mod sections;

pub(crate) use expand::{cmd_expand, ExpandArgs};
pub(crate) use sections::cmd_sections;

use crate::OutputFormat;

/// Print `tokens` one per line, or as a JSON array.
pub(crate) fn print_tokens(tokens: &[String], output: OutputFormat) {
    match output {
        OutputFormat::Json => {
            let pretty = serde_json::to_string_pretty(tokens)
                .unwrap_or_else(|e| format!("serialization error: {}", e));
            println!("{}", pretty);
        }
        OutputFormat::Text => {
            for token in tokens {
                println!("{}", token);
            }
        }
    }
}
