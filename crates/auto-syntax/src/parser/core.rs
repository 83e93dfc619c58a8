//! Parser state: token cursor, green tree builder, fuel, and error reporting.

use rowan::{Checkpoint, GreenNodeBuilder, TextRange, TextSize};

use super::ast::Code;
use super::cst::{SyntaxKind, SyntaxNode, TokenSet};
use super::lexer::{Token, token_text};
use crate::Error;
use crate::diagnostics::{DiagnosticKind, Diagnostics};

/// Lookahead calls allowed between two consumed tokens before the parser is
/// considered stuck.
pub(super) const LOOKAHEAD_BUDGET: u32 = 256;

#[derive(Debug)]
pub struct ParseResult {
    pub root: Code,
    pub diagnostics: Diagnostics,
    pub exec_fuel_consumed: u32,
}

/// A `(`, `[`, `{` or template opener that has not been closed yet.
#[derive(Debug, Clone, Copy)]
pub(super) struct OpenDelimiter {
    pub kind: SyntaxKind,
    pub span: TextRange,
}

/// Context restrictions for expression parsing.
///
/// Conditions (`if x {`) and `when` subjects must not let a call swallow the
/// block that follows; `when` case patterns reserve `->` for the case arrow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(super) struct Restrictions {
    pub no_call_body: bool,
    pub no_trans: bool,
}

impl Restrictions {
    pub const NONE: Restrictions = Restrictions {
        no_call_body: false,
        no_trans: false,
    };

    pub const CONDITION: Restrictions = Restrictions {
        no_call_body: true,
        no_trans: false,
    };

    pub const CASE_PATTERN: Restrictions = Restrictions {
        no_call_body: true,
        no_trans: true,
    };
}

/// Execution and nesting budgets. `None` means unlimited.
///
/// Execution fuel is spent per consumed token and never comes back.
/// Nesting fuel is returned when a production is left.
#[derive(Debug, Clone, Copy, Default)]
struct Fuel {
    exec_limit: Option<u32>,
    exec_left: Option<u32>,
    depth_limit: Option<u32>,
    depth: u32,
}

impl Fuel {
    fn burn_token(&mut self) -> Result<(), Error> {
        match self.exec_left.as_mut() {
            Some(0) => Err(Error::ExecFuelExhausted),
            Some(left) => {
                *left -= 1;
                Ok(())
            }
            None => Ok(()),
        }
    }

    fn descend(&mut self) -> Result<(), Error> {
        if self.depth_limit.is_some_and(|limit| self.depth >= limit) {
            return Err(Error::RecursionLimitExceeded);
        }
        self.depth += 1;
        Ok(())
    }

    fn ascend(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    fn consumed(&self) -> u32 {
        match (self.exec_limit, self.exec_left) {
            (Some(limit), Some(left)) => limit - left,
            _ => 0,
        }
    }
}

/// Recursive descent parser over a pre-lexed token stream.
///
/// Trivia is never visible to the grammar: it is collected into
/// `pending_trivia` while looking ahead and written into the tree right
/// before the next node or token, so it always leads what follows it.
pub struct Parser<'src> {
    pub(super) source: &'src str,
    tokens: Vec<Token>,
    cursor: usize,
    pending_trivia: Vec<Token>,
    builder: GreenNodeBuilder<'static>,
    pub(super) diagnostics: Diagnostics,
    pub(super) open_delimiters: Vec<OpenDelimiter>,
    last_report_at: Option<TextSize>,
    pub(super) lookahead_left: std::cell::Cell<u32>,
    fuel: Fuel,
    aborted: Option<Error>,
}

impl<'src> Parser<'src> {
    pub fn new(source: &'src str, tokens: Vec<Token>) -> Self {
        Self {
            source,
            tokens,
            cursor: 0,
            pending_trivia: Vec::new(),
            builder: GreenNodeBuilder::new(),
            diagnostics: Diagnostics::new(),
            open_delimiters: Vec::new(),
            last_report_at: None,
            lookahead_left: std::cell::Cell::new(LOOKAHEAD_BUDGET),
            fuel: Fuel::default(),
            aborted: None,
        }
    }

    pub fn with_exec_fuel(mut self, limit: Option<u32>) -> Self {
        self.fuel.exec_limit = limit;
        self.fuel.exec_left = limit;
        self
    }

    pub fn with_recursion_fuel(mut self, limit: Option<u32>) -> Self {
        self.fuel.depth_limit = limit;
        self
    }

    pub fn parse(mut self) -> Result<ParseResult, Error> {
        tracing::trace!(tokens = self.tokens.len(), "parsing");
        self.parse_code();

        if let Some(err) = self.aborted {
            tracing::warn!(error = %err, "parse aborted");
            return Err(err);
        }

        let exec_fuel_consumed = self.fuel.consumed();
        let green = self.builder.finish();
        let root = Code::cast(SyntaxNode::new_root(green)).expect("parser always produces Code");
        tracing::debug!(
            diagnostics = self.diagnostics.len(),
            exec_fuel_consumed,
            "parsed"
        );
        Ok(ParseResult {
            root,
            diagnostics: self.diagnostics,
            exec_fuel_consumed,
        })
    }

    fn abort(&mut self, err: Error) {
        self.aborted.get_or_insert(err);
    }

    pub(super) fn has_fatal_error(&self) -> bool {
        self.aborted.is_some()
    }

    // Cursor

    pub(super) fn eof(&self) -> bool {
        self.cursor >= self.tokens.len()
    }

    pub(super) fn should_stop(&self) -> bool {
        self.eof() || self.has_fatal_error()
    }

    /// Moves leading trivia into the pending buffer so the cursor rests on a real token.
    pub(super) fn buffer_trivia(&mut self) {
        while let Some(token) = self.tokens.get(self.cursor)
            && token.kind.is_trivia()
        {
            self.pending_trivia.push(*token);
            self.cursor += 1;
        }
    }

    /// The kind `lookahead` raw tokens past the cursor, trivia included. `Error` past EOF.
    pub(super) fn nth_raw(&self, lookahead: usize) -> SyntaxKind {
        self.guard_lookahead();
        self.tokens
            .get(self.cursor + lookahead)
            .map_or(SyntaxKind::Error, |t| t.kind)
    }

    pub(super) fn current(&mut self) -> SyntaxKind {
        self.buffer_trivia();
        self.nth_raw(0)
    }

    pub(super) fn at(&mut self, kind: SyntaxKind) -> bool {
        self.current() == kind
    }

    pub(super) fn at_any(&mut self, set: TokenSet) -> bool {
        set.contains(self.current())
    }

    /// The `n`th non-trivia token from the cursor. `nth(0)` is [`current`](Self::current).
    pub(super) fn nth(&mut self, n: usize) -> SyntaxKind {
        self.buffer_trivia();
        self.tokens[self.cursor..]
            .iter()
            .filter(|t| !t.kind.is_trivia())
            .nth(n)
            .map_or(SyntaxKind::Error, |t| t.kind)
    }

    pub(super) fn peek_is(&mut self, kind: SyntaxKind) -> bool {
        self.nth(1) == kind
    }

    pub(super) fn span_here(&mut self) -> TextRange {
        self.buffer_trivia();
        match self.tokens.get(self.cursor) {
            Some(token) => token.span,
            None => TextRange::empty(self.eof_offset()),
        }
    }

    pub(super) fn current_text(&mut self) -> &'src str {
        self.buffer_trivia();
        let source = self.source;
        self.tokens
            .get(self.cursor)
            .map_or("", |t| token_text(source, t))
    }

    pub(super) fn eof_offset(&self) -> TextSize {
        TextSize::of(self.source)
    }

    /// Whether a line break sits between the previous real token and the cursor.
    ///
    /// Newlines are trivia, but statement and list separators accept them in place of `;`/`,`.
    pub(super) fn at_line_break(&mut self) -> bool {
        self.buffer_trivia();
        self.tokens[..self.cursor]
            .iter()
            .rev()
            .take_while(|t| t.kind.is_trivia())
            .any(|t| t.kind == SyntaxKind::Newline)
    }

    pub(super) fn last_non_trivia_end(&self) -> Option<TextSize> {
        self.tokens[..self.cursor]
            .iter()
            .rfind(|t| !t.kind.is_trivia())
            .map(|t| t.span.end())
    }

    // Tree building

    fn flush_trivia(&mut self) {
        for token in std::mem::take(&mut self.pending_trivia) {
            self.builder
                .token(token.kind.into(), token_text(self.source, &token));
        }
    }

    pub(super) fn eat_trivia(&mut self) {
        self.buffer_trivia();
        self.flush_trivia();
    }

    pub(super) fn start_node(&mut self, kind: SyntaxKind) {
        self.flush_trivia();
        self.builder.start_node(kind.into());
    }

    pub(super) fn start_node_at(&mut self, checkpoint: Checkpoint, kind: SyntaxKind) {
        self.builder.start_node_at(checkpoint, kind.into());
    }

    pub(super) fn finish_node(&mut self) {
        self.builder.finish_node();
    }

    pub(super) fn checkpoint(&mut self) -> Checkpoint {
        self.flush_trivia();
        self.builder.checkpoint()
    }

    /// Appends the current token to the open node. Panics at EOF.
    /// Consumes the next non-trivia token, writing the trivia before it first.
    pub(super) fn bump(&mut self) {
        self.buffer_trivia();
        assert!(!self.eof(), "bump called at EOF");
        self.lookahead_left.set(LOOKAHEAD_BUDGET);
        if let Err(err) = self.fuel.burn_token() {
            self.abort(err);
        }

        self.flush_trivia();
        let token = self.tokens[self.cursor];
        self.builder
            .token(token.kind.into(), token_text(self.source, &token));
        self.cursor += 1;
    }

    pub(super) fn eat(&mut self, kind: SyntaxKind) -> bool {
        let matched = self.at(kind);
        if matched {
            self.bump();
        }
        matched
    }

    /// On mismatch: emit diagnostic but don't consume.
    pub(super) fn expect(&mut self, kind: SyntaxKind, what: &str) -> bool {
        if self.eat(kind) {
            return true;
        }
        self.error_with(DiagnosticKind::UnexpectedToken, format!("expected {}", what));
        false
    }

    pub(super) fn skip_as_error(&mut self) {
        self.buffer_trivia();
        if self.eof() {
            return;
        }
        self.start_node(SyntaxKind::Error);
        self.bump();
        self.finish_node();
    }

    // Nesting

    pub(super) fn enter_recursion(&mut self) -> bool {
        self.lookahead_left.set(LOOKAHEAD_BUDGET);
        match self.fuel.descend() {
            Ok(()) => true,
            Err(err) => {
                self.abort(err);
                false
            }
        }
    }

    pub(super) fn exit_recursion(&mut self) {
        self.fuel.ascend();
        self.lookahead_left.set(LOOKAHEAD_BUDGET);
    }

    pub(super) fn push_delimiter(&mut self, kind: SyntaxKind) {
        let span = self.span_here();
        self.open_delimiters.push(OpenDelimiter { kind, span });
    }

    pub(super) fn pop_delimiter(&mut self) -> Option<OpenDelimiter> {
        self.open_delimiters.pop()
    }

    // Diagnostics

    /// One diagnostic per source offset: the first report at a position wins.
    fn claim_report_position(&mut self, pos: TextSize) -> bool {
        let fresh = self.last_report_at != Some(pos);
        self.last_report_at = Some(pos);
        fresh
    }

    /// Errors inside an open delimiter may suppress anything up to EOF; elsewhere only their own token.
    fn suppression_span(&mut self) -> TextRange {
        match self.open_delimiters.last() {
            Some(open) => TextRange::new(open.span.start(), self.eof_offset()),
            None => self.span_here(),
        }
    }

    fn report_here(&mut self, kind: DiagnosticKind, message: Option<String>) {
        let range = self.span_here();
        if !self.claim_report_position(range.start()) {
            return;
        }
        let suppression = self.suppression_span();
        let builder = self
            .diagnostics
            .report(kind, range)
            .suppression_range(suppression);
        match message {
            Some(message) => builder.message(message).emit(),
            None => builder.emit(),
        }
    }

    pub(super) fn error(&mut self, kind: DiagnosticKind) {
        self.report_here(kind, None);
    }

    pub(super) fn error_with(&mut self, kind: DiagnosticKind, message: impl Into<String>) {
        self.report_here(kind, Some(message.into()));
    }

    pub(super) fn error_skip(&mut self, kind: DiagnosticKind) {
        self.error(kind);
        self.skip_as_error();
    }

    pub(super) fn error_skip_with(&mut self, kind: DiagnosticKind, message: impl Into<String>) {
        self.error_with(kind, message);
        self.skip_as_error();
    }

    /// Reports, then wraps everything up to the recovery set in one `Error` node.
    pub(super) fn error_recover(&mut self, kind: DiagnosticKind, message: &str, recovery: TokenSet) {
        if self.at_any(recovery) || self.should_stop() {
            self.error_with(kind, message);
            return;
        }

        self.start_node(SyntaxKind::Error);
        self.error_with(kind, message);
        while !self.should_stop() && !self.at_any(recovery) {
            self.bump();
        }
        self.finish_node();
    }

    /// Spans from the opener to the current token, so nested errors fall inside it.
    pub(super) fn error_unclosed_delimiter(
        &mut self,
        kind: DiagnosticKind,
        related_msg: impl Into<String>,
        open_range: TextRange,
    ) {
        let current = self.span_here();
        if !self.claim_report_position(current.start()) {
            return;
        }
        self.diagnostics
            .report(kind, open_range.cover(current))
            .related_to(related_msg, open_range)
            .emit();
    }

    pub(super) fn report_fix(
        &mut self,
        kind: DiagnosticKind,
        range: TextRange,
        message: impl Into<String>,
        fix_description: impl Into<String>,
        fix_replacement: impl Into<String>,
    ) {
        if !self.claim_report_position(range.start()) {
            return;
        }
        self.diagnostics
            .report(kind, range)
            .message(message.into())
            .fix(fix_description, fix_replacement)
            .emit();
    }
}
