use std::io::Read;
use std::path::PathBuf;

use heirship_eval::{ErrorEnvelope, EvalOptions, InheritanceResult, Locale};

use crate::{report_error, OutputFormat};

/// Where the inheritance record comes from.
pub(crate) enum InputSource {
    File(PathBuf),
    Stdin,
}

pub(crate) struct CalculateOptions {
    pub source: InputSource,
    pub locale: Locale,
    pub output: OutputFormat,
    pub pretty: bool,
    pub quiet: bool,
}

/// Read the record, evaluate it once and print the result.
///
/// Returns the process exit code: 0 on success, 1 on any failure.
pub(crate) fn cmd_calculate(opts: CalculateOptions) -> i32 {
    let record = match read_record(&opts.source, opts.locale) {
        Ok(r) => r,
        Err(envelope) => {
            report_error(&envelope, opts.quiet);
            return 1;
        }
    };

    let options = EvalOptions {
        locale: opts.locale,
    };
    let result = match heirship_eval::calculate_with(&record, &options) {
        Ok(r) => r,
        Err(e) => {
            tracing::debug!(error = %e, "evaluation failed");
            report_error(&e.envelope(opts.locale), opts.quiet);
            return 1;
        }
    };

    match opts.output {
        OutputFormat::Json => {
            let rendered = if opts.pretty {
                serde_json::to_string_pretty(&result)
            } else {
                serde_json::to_string(&result)
            };
            match rendered {
                Ok(s) => println!("{}", s),
                Err(e) => {
                    report_error(&calculation_error(opts.locale, e.to_string()), opts.quiet);
                    return 1;
                }
            }
        }
        OutputFormat::Text => print!("{}", render_text(&result)),
    }
    0
}

fn input_error(locale: Locale, message: String) -> ErrorEnvelope {
    ErrorEnvelope {
        error: locale.input_error_kind().to_string(),
        message,
        suggestion: locale.input_error_suggestion().to_string(),
    }
}

fn calculation_error(locale: Locale, message: String) -> ErrorEnvelope {
    ErrorEnvelope {
        error: locale.calculation_error_kind().to_string(),
        message,
        suggestion: locale.calculation_error_suggestion().to_string(),
    }
}

fn read_record(source: &InputSource, locale: Locale) -> Result<serde_json::Value, ErrorEnvelope> {
    let (text, origin) = match source {
        InputSource::File(path) => {
            let text = std::fs::read_to_string(path).map_err(|e| {
                input_error(
                    locale,
                    format!("cannot read input file '{}': {}", path.display(), e),
                )
            })?;
            (text, path.display().to_string())
        }
        InputSource::Stdin => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .map_err(|e| input_error(locale, format!("cannot read standard input: {}", e)))?;
            (text, "<stdin>".to_string())
        }
    };

    serde_json::from_str(&text)
        .map_err(|e| input_error(locale, format!("invalid JSON in {}: {}", origin, e)))
}

/// Plain-text rendering for terminals.
fn render_text(result: &InheritanceResult) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", result.deceased_name));
    if !result.note.is_empty() {
        out.push_str(&format!("{}\n", result.note.trim_end()));
    }

    for heir in &result.heirs {
        let mut line = format!(
            "  {}  {}  {} ({})",
            heir.name, heir.rank, heir.inheritance_share_fraction, heir.inheritance_share_percentage
        );
        if let Some(ref relation) = heir.blood_relation {
            line.push_str(&format!("  {}", relation));
        }
        if let Some(ref original) = heir.original_heir {
            line.push_str(&format!("  <- {}", original));
        }
        out.push_str(&line);
        out.push('\n');
    }

    if let Some(ref summary) = result.summary {
        out.push_str(&format!("{}\n", summary));
    }
    for note in &result.important_notes {
        out.push_str(&format!("* {}\n", note));
    }
    out
}
