//! Validate one source, stdin, or every Auto file below a directory.

use std::path::PathBuf;

use super::source_loader::load_sources;
use super::{CommandError, Limits, render_diagnostics};

pub struct CheckArgs {
    pub source_path: Option<PathBuf>,
    pub source_text: Option<String>,
    pub strict: bool,
    pub color: bool,
    pub limits: Limits,
}

#[derive(Debug, Default)]
pub struct CheckReport {
    pub checked: usize,
    pub failed: usize,
    /// Rendered diagnostics of every source that has any, in path order.
    pub output: String,
}

impl CheckReport {
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }
}

pub fn run(args: CheckArgs) {
    match check(&args) {
        Ok(report) if report.is_success() => {
            // Warnings still show; a clean run prints nothing.
            eprint!("{}", report.output);
            tracing::info!(files = report.checked, "all sources valid");
        }
        Ok(report) => {
            eprint!("{}", report.output);
            tracing::info!(
                files = report.checked,
                failed = report.failed,
                "check failed"
            );
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }
}

pub fn check(args: &CheckArgs) -> Result<CheckReport, CommandError> {
    let files = load_sources(args.source_path.as_deref(), args.source_text.as_deref())?;
    let mut report = CheckReport::default();

    for file in &files {
        let doc = args
            .limits
            .parse(&file.text)
            .map_err(|e| CommandError::parse(file, e))?;
        let diagnostics = doc.diagnostics().filtered();

        let failed = if args.strict {
            diagnostics.has_errors() || diagnostics.has_warnings()
        } else {
            diagnostics.has_errors()
        };
        tracing::debug!(
            file = file.display_name(),
            errors = diagnostics.error_count(),
            warnings = diagnostics.warning_count(),
            "checked"
        );

        report.checked += 1;
        if failed {
            report.failed += 1;
        }
        if !diagnostics.is_empty() {
            report
                .output
                .push_str(&render_diagnostics(&diagnostics, file, args.color));
            if !report.output.ends_with('\n') {
                report.output.push('\n');
            }
        }
    }

    Ok(report)
}
