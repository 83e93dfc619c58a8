//! Lexer for the Auto language.
//!
//! Produces span-based tokens without storing text - text is sliced from source only when needed.
//!
//! ## Template strings
//!
//! Logos recognizes the opener of a template (`f"`, `f"""`, ``f` ``, ```` ``` ````) and
//! hands off to a small scanner that splits the body into `StrPart` runs and
//! interpolations. `$name` becomes `Dollar` + name tokens; `${ ... }` becomes
//! `Dollar` `BraceOpen`, the embedded code lexed normally, then the balancing `BraceClose`.
//!
//! ## Error handling
//!
//! The lexer coalesces consecutive error characters into single `Garbage` tokens rather
//! than producing one error per character. This keeps the token stream manageable for malformed input.

use logos::Logos;
use rowan::TextRange;
use std::ops::Range;

use super::cst::SyntaxKind;

/// Zero-copy token: kind + span, text retrieved via [`token_text`] when needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: SyntaxKind,
    pub span: TextRange,
}

impl Token {
    #[inline]
    pub fn new(kind: SyntaxKind, span: TextRange) -> Self {
        Self { kind, span }
    }
}

fn range_to_text_range(range: Range<usize>) -> TextRange {
    TextRange::new((range.start as u32).into(), (range.end as u32).into())
}

/// Tokenizes source into a vector of span-based tokens.
///
/// Lexing is total: every byte of `source` ends up in exactly one token.
pub fn lex(source: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    lex_code(source, 0, false, &mut tokens);
    tokens
}

/// Lexes code from `start`. When `nested` (inside `${ ... }`), stops after the
/// `BraceClose` balancing the already-consumed `{` and returns its end offset.
fn lex_code(source: &str, start: usize, nested: bool, tokens: &mut Vec<Token>) -> usize {
    let mut lexer = SyntaxKind::lexer(&source[start..]);
    let mut error_start: Option<usize> = None;
    let mut depth = 0u32;

    loop {
        match lexer.next() {
            Some(Ok(kind)) => {
                let span = lexer.span();
                let (lo, hi) = (start + span.start, start + span.end);
                flush_garbage(&mut error_start, lo, tokens);
                tokens.push(Token::new(kind, range_to_text_range(lo..hi)));

                match kind {
                    SyntaxKind::FStrOpen
                    | SyntaxKind::FStrTripleOpen
                    | SyntaxKind::FTickOpen
                    | SyntaxKind::MStrFence => {
                        let resume = lex_template(source, hi, kind, tokens);
                        lexer.bump(resume - hi);
                    }
                    SyntaxKind::BraceOpen if nested => depth += 1,
                    SyntaxKind::BraceClose if nested => {
                        if depth == 0 {
                            return hi;
                        }
                        depth -= 1;
                    }
                    _ => {}
                }
            }
            Some(Err(())) => {
                if error_start.is_none() {
                    error_start = Some(start + lexer.span().start);
                }
            }
            None => {
                flush_garbage(&mut error_start, source.len(), tokens);
                return source.len();
            }
        }
    }
}

fn flush_garbage(error_start: &mut Option<usize>, end: usize, tokens: &mut Vec<Token>) {
    if let Some(start) = error_start.take() {
        tokens.push(Token::new(
            SyntaxKind::Garbage,
            range_to_text_range(start..end),
        ));
    }
}

/// Closing delimiter text and kind for a template opener.
fn template_closer(opener: SyntaxKind) -> (&'static str, SyntaxKind) {
    match opener {
        SyntaxKind::FStrOpen => ("\"", SyntaxKind::DoubleQuote),
        SyntaxKind::FStrTripleOpen => ("\"\"\"", SyntaxKind::TripleQuote),
        SyntaxKind::FTickOpen => ("`", SyntaxKind::Backtick),
        SyntaxKind::MStrFence => ("```", SyntaxKind::MStrFence),
        _ => panic!("template_closer: {:?} does not open a template", opener),
    }
}

/// Scans a template body starting right after its opener.
/// Returns the offset just past the closing delimiter, or `source.len()` if unterminated.
fn lex_template(source: &str, start: usize, opener: SyntaxKind, tokens: &mut Vec<Token>) -> usize {
    let (closer, closer_kind) = template_closer(opener);
    let escapes = opener != SyntaxKind::MStrFence;
    let bytes = source.as_bytes();
    let mut pos = start;
    let mut part_start = start;

    let flush_part = |from: usize, to: usize, tokens: &mut Vec<Token>| {
        if to > from {
            tokens.push(Token::new(
                SyntaxKind::StrPart,
                range_to_text_range(from..to),
            ));
        }
    };

    while pos < bytes.len() {
        if source[pos..].starts_with(closer) {
            flush_part(part_start, pos, tokens);
            let end = pos + closer.len();
            tokens.push(Token::new(closer_kind, range_to_text_range(pos..end)));
            return end;
        }

        match bytes[pos] {
            b'\\' if escapes => {
                pos += 1;
                if let Some(c) = source[pos..].chars().next() {
                    pos += c.len_utf8();
                }
            }
            b'$' if bytes.get(pos + 1) == Some(&b'{') => {
                flush_part(part_start, pos, tokens);
                tokens.push(Token::new(
                    SyntaxKind::Dollar,
                    range_to_text_range(pos..pos + 1),
                ));
                tokens.push(Token::new(
                    SyntaxKind::BraceOpen,
                    range_to_text_range(pos + 1..pos + 2),
                ));
                pos = lex_code(source, pos + 2, true, tokens);
                part_start = pos;
            }
            b'$' if starts_interpolated_name(&bytes[pos + 1..]) => {
                flush_part(part_start, pos, tokens);
                tokens.push(Token::new(
                    SyntaxKind::Dollar,
                    range_to_text_range(pos..pos + 1),
                ));
                pos = lex_interpolated_name(bytes, pos + 1, tokens);
                part_start = pos;
            }
            _ => {
                let c = source[pos..]
                    .chars()
                    .next()
                    .expect("pos is on a char boundary below len");
                pos += c.len_utf8();
            }
        }
    }

    flush_part(part_start, bytes.len(), tokens);
    bytes.len()
}

fn is_ident_start(b: u8) -> bool {
    b == b'_' || b.is_ascii_alphabetic()
}

fn is_ident_continue(b: u8) -> bool {
    b == b'_' || b.is_ascii_alphanumeric()
}

/// `$name` or `$.name`. A `$` followed by anything else is literal text.
fn starts_interpolated_name(rest: &[u8]) -> bool {
    match rest {
        [b, ..] if is_ident_start(*b) => true,
        [b'.', b, ..] => is_ident_start(*b),
        _ => false,
    }
}

/// Lexes `.a.b` / `a.b` after `$`. A trailing dot not followed by a name stays in the text.
fn lex_interpolated_name(bytes: &[u8], mut pos: usize, tokens: &mut Vec<Token>) -> usize {
    loop {
        let segment_start = pos;
        if bytes.get(pos) == Some(&b'.') {
            match bytes.get(pos + 1) {
                Some(b) if is_ident_start(*b) => {
                    tokens.push(Token::new(
                        SyntaxKind::Dot,
                        range_to_text_range(pos..pos + 1),
                    ));
                    pos += 1;
                }
                _ => return segment_start,
            }
        }

        let ident_start = pos;
        match bytes.get(pos) {
            Some(b) if is_ident_start(*b) => pos += 1,
            _ => return segment_start,
        }
        while bytes.get(pos).is_some_and(|b| is_ident_continue(*b)) {
            pos += 1;
        }
        tokens.push(Token::new(
            SyntaxKind::Ident,
            range_to_text_range(ident_start..pos),
        ));

        if bytes.get(pos) != Some(&b'.') {
            return pos;
        }
    }
}

/// Retrieves the text slice for a token. O(1) slice into source.
#[inline]
pub fn token_text<'q>(source: &'q str, token: &Token) -> &'q str {
    &source[std::ops::Range::<usize>::from(token.span)]
}
