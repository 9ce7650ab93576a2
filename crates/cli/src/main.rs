mod calculate;

use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use heirship_eval::{ErrorEnvelope, Locale};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Output format for CLI responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Json,
    Text,
}

/// Language of labels, notes and error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LocaleArg {
    Ja,
    En,
}

impl From<LocaleArg> for Locale {
    fn from(arg: LocaleArg) -> Self {
        match arg {
            LocaleArg::Ja => Locale::Ja,
            LocaleArg::En => Locale::En,
        }
    }
}

/// Statutory inheritance calculator.
#[derive(Parser)]
#[command(
    name = "heirship",
    version,
    about = "Statutory inheritance calculator: legal heirs and their shares"
)]
struct Cli {
    /// Path to the inheritance record JSON file
    #[arg(required_unless_present = "stdin", conflicts_with = "stdin")]
    input: Option<PathBuf>,

    /// Read the inheritance record from standard input
    #[arg(long)]
    stdin: bool,

    /// Indent the JSON output
    #[arg(long)]
    pretty: bool,

    /// Language of labels and notes (ja or en)
    #[arg(long, default_value = "ja", value_enum)]
    locale: LocaleArg,

    /// Output format (json or text)
    #[arg(long, default_value = "json", value_enum)]
    output: OutputFormat,

    /// Suppress error output
    #[arg(long)]
    quiet: bool,
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let source = match cli.input {
        Some(path) => calculate::InputSource::File(path),
        None => calculate::InputSource::Stdin,
    };

    let code = calculate::cmd_calculate(calculate::CalculateOptions {
        source,
        locale: cli.locale.into(),
        output: cli.output,
        pretty: cli.pretty,
        quiet: cli.quiet,
    });
    process::exit(code);
}

/// Log to stderr so stdout carries only the result. `RUST_LOG` overrides
/// the default `warn` level.
fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_ansi(false).with_writer(std::io::stderr))
        .with(env_filter)
        .init();
}

/// Print an error envelope to stderr.
pub(crate) fn report_error(envelope: &ErrorEnvelope, quiet: bool) {
    if quiet {
        return;
    }
    match serde_json::to_string_pretty(envelope) {
        Ok(s) => eprintln!("{}", s),
        Err(_) => eprintln!("{}: {}", envelope.error, envelope.message),
    }
}
