mod commands;

use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use sectargs_core::FileFormat;
use tracing_subscriber::EnvFilter;

use commands::{cmd_expand, cmd_sections, ExpandArgs};

/// Output format for CLI responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Text,
    Json,
}

/// Parser used for referenced files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum FormatArg {
    /// JSON for `.json` files, sectioned text otherwise
    Auto,
    /// Whitespace-separated words, no comments or sections
    Flat,
    /// Line-oriented text with `#` comments and section headers
    Text,
    /// JSON document with section keys
    Json,
}

impl From<FormatArg> for FileFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Auto => FileFormat::Auto,
            FormatArg::Flat => FileFormat::Flat,
            FormatArg::Text => FileFormat::Text,
            FormatArg::Json => FileFormat::Json,
        }
    }
}

/// Expand argument files with selectable sections.
#[derive(Parser)]
#[command(
    name = "sectargs",
    version,
    about = "Expand argument files with selectable sections"
)]
struct Cli {
    /// Output format (text or json)
    #[arg(long, global = true, default_value = "text", value_enum)]
    output: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    quiet: bool,

    /// Log every file read and reference expanded to stderr
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Expand file references in an argument list and print the result
    Expand {
        /// Characters that mark a token as a file reference
        #[arg(long, default_value = "@")]
        prefix_chars: String,
        /// Section marker, if different from the reference's own first character
        #[arg(long)]
        trigger: Option<char>,
        /// Parser for referenced files
        #[arg(long, default_value = "auto", value_enum)]
        format: FormatArg,
        /// Arguments to expand (use `--` before arguments starting with `-`)
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },

    /// List the sections an argument file declares
    Sections {
        /// Path to the argument file
        file: String,
        /// Section marker character
        #[arg(long, default_value = "@")]
        trigger: char,
        /// Parser for the file
        #[arg(long, default_value = "auto", value_enum)]
        format: FormatArg,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let ok = match cli.command {
        Commands::Expand {
            prefix_chars,
            trigger,
            format,
            args,
        } => cmd_expand(
            &ExpandArgs {
                prefix_chars: &prefix_chars,
                trigger,
                format: format.into(),
                args: &args,
            },
            cli.output,
            cli.quiet,
        ),
        Commands::Sections {
            file,
            trigger,
            format,
        } => cmd_sections(&file, trigger, format.into(), cli.output, cli.quiet),
    };

    if !ok {
        process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose {
        "sectargs_core=debug,sectargs=debug"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

pub(crate) fn report_error(err: &sectargs_core::ArgfileError, output: OutputFormat, quiet: bool) {
    tracing::debug!(kind = err.kind().as_str(), "command failed");
    match output {
        OutputFormat::Json => {
            let err_json = serde_json::to_string_pretty(&err.to_json_value())
                .unwrap_or_else(|_| format!("{{\"error\": \"{:?}\"}}", err));
            eprintln!("{}", err_json);
        }
        OutputFormat::Text => {
            if !quiet {
                eprintln!("error: {}", err);
            }
        }
    }
}
