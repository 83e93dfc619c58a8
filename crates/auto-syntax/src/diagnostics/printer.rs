//! Renders [`Diagnostics`] either as annotated source snippets or as plain lines.

use std::fmt::{self, Write};
use std::ops::Range;

use annotate_snippets::{AnnotationKind, Group, Level, Patch, Renderer, Snippet};
use rowan::TextRange;

use super::Diagnostics;
use super::message::{DiagnosticMessage, Severity};

/// Configures how diagnostics are rendered.
///
/// Without a source the output is one plain `Display` line per diagnostic.
pub struct DiagnosticsPrinter<'d, 's> {
    diagnostics: &'d Diagnostics,
    source: Option<&'s str>,
    path: Option<&'s str>,
    colored: bool,
}

impl<'d, 's> DiagnosticsPrinter<'d, 's> {
    pub fn new(diagnostics: &'d Diagnostics) -> Self {
        Self {
            diagnostics,
            source: None,
            path: None,
            colored: false,
        }
    }

    pub fn source(self, source: &'s str) -> Self {
        Self {
            source: Some(source),
            ..self
        }
    }

    /// File name shown in the snippet header.
    pub fn path(self, path: &'s str) -> Self {
        Self {
            path: Some(path),
            ..self
        }
    }

    pub fn colored(self, colored: bool) -> Self {
        Self { colored, ..self }
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.format(&mut out);
        out
    }

    pub fn format(&self, w: &mut impl Write) -> fmt::Result {
        let renderer = match (self.source, self.colored) {
            (None, _) => None,
            (Some(_), true) => Some(Renderer::styled()),
            (Some(_), false) => Some(Renderer::plain()),
        };

        for (i, diag) in self.diagnostics.iter().enumerate() {
            match (&renderer, self.source) {
                (Some(renderer), Some(source)) => {
                    // Snippet reports are separated by a blank line.
                    if i > 0 {
                        w.write_str("\n\n")?;
                    }
                    let report = self.report(diag, source);
                    write!(w, "{}", renderer.render(&report))?;
                }
                _ => {
                    if i > 0 {
                        w.write_char('\n')?;
                    }
                    write!(w, "{}", diag)?;
                }
            }
        }
        Ok(())
    }

    /// Title with the primary and related annotations, then one help group
    /// per hint, then the fix as a patch.
    fn report<'a>(&self, diag: &'a DiagnosticMessage, source: &'a str) -> Vec<Group<'a>>
    where
        's: 'a,
    {
        // The title already carries the message; the carets stay unlabeled.
        let mut snippet = Snippet::source(source)
            .line_start(1)
            .annotation(AnnotationKind::Primary.span(visible_span(diag.range, source.len())));
        if let Some(path) = self.path {
            snippet = snippet.path(path);
        }
        for related in &diag.related {
            snippet = snippet.annotation(
                AnnotationKind::Context
                    .span(visible_span(related.range, source.len()))
                    .label(&related.message),
            );
        }

        let title = level(diag.severity()).primary_title(&diag.message);
        let mut report = vec![title.element(snippet)];

        report.extend(
            diag.hints
                .iter()
                .map(|hint| Group::with_title(Level::HELP.secondary_title(hint))),
        );

        if let Some(fix) = &diag.fix {
            let edit = Patch::new(
                diag.range.start().into()..diag.range.end().into(),
                &fix.replacement,
            );
            report.push(
                Level::HELP
                    .secondary_title(&fix.description)
                    .element(Snippet::source(source).line_start(1).patch(edit)),
            );
        }

        report
    }
}

fn level(severity: Severity) -> Level<'static> {
    match severity {
        Severity::Error => Level::ERROR,
        Severity::Warning => Level::WARNING,
    }
}

/// An empty range (e.g. at end of input) is widened to one column.
fn visible_span(range: TextRange, len: usize) -> Range<usize> {
    let start = usize::from(range.start());
    let end = usize::from(range.end());
    if start < end {
        start..end
    } else {
        start..(start + 1).min(len)
    }
}
