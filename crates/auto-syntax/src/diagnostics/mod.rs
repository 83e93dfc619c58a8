//! Diagnostics produced while parsing and validating Auto sources.

mod message;
mod printer;


use rowan::TextRange;

pub use message::{DiagnosticKind, DiagnosticMessage, Fix, RelatedInfo, Severity};
pub use printer::DiagnosticsPrinter;

#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
    messages: Vec<DiagnosticMessage>,
}

#[must_use = "diagnostic not emitted, call .emit()"]
pub struct DiagnosticBuilder<'a> {
    diagnostics: &'a mut Diagnostics,
    message: DiagnosticMessage,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a diagnostic carrying the kind's fallback message and hint.
    pub fn report(&mut self, kind: DiagnosticKind, range: TextRange) -> DiagnosticBuilder<'_> {
        DiagnosticBuilder {
            diagnostics: self,
            message: DiagnosticMessage::with_default_message(kind, range),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DiagnosticMessage> {
        self.messages.iter()
    }

    pub fn has_errors(&self) -> bool {
        self.messages.iter().any(|d| d.is_error())
    }

    pub fn has_warnings(&self) -> bool {
        self.messages.iter().any(|d| d.is_warning())
    }

    pub fn error_count(&self) -> usize {
        self.count(DiagnosticMessage::is_error)
    }

    pub fn warning_count(&self) -> usize {
        self.count(DiagnosticMessage::is_warning)
    }

    fn count(&self, pred: impl Fn(&DiagnosticMessage) -> bool) -> usize {
        self.messages.iter().filter(|d| pred(d)).count()
    }

    /// Drops diagnostics that are likely fallout of another one.
    ///
    /// A diagnostic goes when a higher-priority one's suppression range
    /// strictly contains it, or when both start at the same offset and the
    /// other outranks it. A structural error never hides a missing-piece error.
    pub fn filtered(&self) -> Diagnostics {
        let mut keep = vec![true; self.messages.len()];

        for (i, cause) in self.messages.iter().enumerate() {
            for (j, effect) in self.messages.iter().enumerate() {
                if i != j && keep[i] && keep[j] && is_cascade(cause, effect) {
                    keep[j] = false;
                }
            }
        }

        let messages = self
            .messages
            .iter()
            .zip(keep)
            .filter_map(|(m, kept)| kept.then(|| m.clone()))
            .collect();
        Diagnostics { messages }
    }

    pub fn printer(&self) -> DiagnosticsPrinter<'_, '_> {
        DiagnosticsPrinter::new(self)
    }

    pub fn render(&self, source: &str) -> String {
        self.printer().source(source).render()
    }

    pub fn render_colored(&self, source: &str, colored: bool) -> String {
        self.printer().source(source).colored(colored).render()
    }

    pub fn extend(&mut self, other: Diagnostics) {
        self.messages.extend(other.messages);
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a DiagnosticMessage;
    type IntoIter = std::slice::Iter<'a, DiagnosticMessage>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.iter()
    }
}

impl DiagnosticBuilder<'_> {
    /// Folds `detail` into the kind's message.
    pub fn message(mut self, detail: impl AsRef<str>) -> Self {
        self.message.message = self.message.kind.message(Some(detail.as_ref()));
        self
    }

    pub fn related_to(mut self, msg: impl Into<String>, range: TextRange) -> Self {
        self.message.related.push(RelatedInfo::new(range, msg));
        self
    }

    pub fn suppression_range(mut self, range: TextRange) -> Self {
        self.message.suppression_range = range;
        self
    }

    pub fn fix(mut self, description: impl Into<String>, replacement: impl Into<String>) -> Self {
        self.message.fix = Some(Fix::new(replacement, description));
        self
    }

    pub fn hint(mut self, hint: impl Into<String>) -> Self {
        self.message.hints.push(hint.into());
        self
    }

    pub fn emit(self) {
        self.diagnostics.messages.push(self.message);
    }
}

fn is_cascade(cause: &DiagnosticMessage, effect: &DiagnosticMessage) -> bool {
    let outer = cause.suppression_range;
    let contained = outer.start() < effect.range.start() && effect.range.end() <= outer.end();
    if contained && cause.kind.suppresses(&effect.kind) {
        return true;
    }
    if cause.range.start() != effect.range.start() {
        return false;
    }
    match (cause.kind, effect.kind) {
        (c, e) if c.is_root_cause_error() && e.is_structural_error() => true,
        (c, e) if c.is_structural_error() && e.is_root_cause_error() => false,
        (c, e) => c.suppresses(&e),
    }
}
