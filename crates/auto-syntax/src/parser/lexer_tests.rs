use crate::parser::lexer::{lex, token_text};

/// Format tokens without trivia (default for most tests)
fn snapshot(input: &str) -> String {
    format_tokens(input, false)
}

/// Format tokens with trivia included
fn snapshot_raw(input: &str) -> String {
    format_tokens(input, true)
}

fn format_tokens(input: &str, include_trivia: bool) -> String {
    let tokens = lex(input);
    let mut out = String::new();
    for token in tokens {
        if include_trivia || !token.kind.is_trivia() {
            out.push_str(&format!(
                "{:?} {:?}\n",
                token.kind,
                token_text(input, &token)
            ));
        }
    }
    out
}

#[test]
fn punctuation() {
    insta::assert_snapshot!(snapshot("( ) [ ] { } , ; : ."), @r#"
    ParenOpen "("
    ParenClose ")"
    BracketOpen "["
    BracketClose "]"
    BraceOpen "{"
    BraceClose "}"
    Comma ","
    Semicolon ";"
    Colon ":"
    Dot "."
    "#);
}

#[test]
fn operators() {
    insta::assert_snapshot!(snapshot("-> == != < <= > >= = + - * / !"), @r#"
    Arrow "->"
    EqEq "=="
    NotEq "!="
    Lt "<"
    LtEq "<="
    Gt ">"
    GtEq ">="
    Equals "="
    Plus "+"
    Minus "-"
    Star "*"
    Slash "/"
    Bang "!"
    "#);
}

#[test]
fn operators_without_spaces() {
    insta::assert_snapshot!(snapshot("a->b<=c"), @r#"
    Ident "a"
    Arrow "->"
    Ident "b"
    LtEq "<="
    Ident "c"
    "#);
}

#[test]
fn keywords() {
    insta::assert_snapshot!(snapshot("mod use import var fn node if else for in when is ui style null true false"), @r#"
    KwMod "mod"
    KwUse "use"
    KwImport "import"
    KwVar "var"
    KwFn "fn"
    KwNode "node"
    KwIf "if"
    KwElse "else"
    KwFor "for"
    KwIn "in"
    KwWhen "when"
    KwIs "is"
    KwUi "ui"
    KwStyle "style"
    KwNull "null"
    KwTrue "true"
    KwFalse "false"
    "#);
}

#[test]
fn keywords_only_on_exact_match() {
    insta::assert_snapshot!(snapshot("iffy elsewhere modal is_ok truthy"), @r#"
    Ident "iffy"
    Ident "elsewhere"
    Ident "modal"
    Ident "is_ok"
    Ident "truthy"
    "#);
}

#[test]
fn identifiers() {
    insta::assert_snapshot!(snapshot("x _private $var camelCase snake_case2"), @r#"
    Ident "x"
    Ident "_private"
    Ident "$var"
    Ident "camelCase"
    Ident "snake_case2"
    "#);
}

#[test]
fn lone_dollar_is_not_an_identifier() {
    insta::assert_snapshot!(snapshot("$ $x a $ b"), @r#"
    Dollar "$"
    Ident "$x"
    Ident "a"
    Dollar "$"
    Ident "b"
    "#);
}

#[test]
fn integers() {
    insta::assert_snapshot!(snapshot("0 42 1_000_000"), @r#"
    IntLit "0"
    IntLit "42"
    IntLit "1_000_000"
    "#);
}

#[test]
fn binary_and_hex() {
    insta::assert_snapshot!(snapshot("0b1010 0b1111_0000 0xFF 0xdead_beef"), @r#"
    BinLit "0b1010"
    BinLit "0b1111_0000"
    HexLit "0xFF"
    HexLit "0xdead_beef"
    "#);
}

#[test]
fn floats() {
    insta::assert_snapshot!(snapshot("1.5 1. .5 1e9 2.5E-3 0.25e+2"), @r#"
    FloatLit "1.5"
    FloatLit "1."
    FloatLit ".5"
    FloatLit "1e9"
    FloatLit "2.5E-3"
    FloatLit "0.25e+2"
    "#);
}

#[test]
fn strings() {
    insta::assert_snapshot!(snapshot(r#""hello" 'world' """#), @r#"
    StrLit "\"hello\""
    StrLit "'world'"
    StrLit "\"\""
    "#);
}

#[test]
fn string_with_escaped_quote() {
    let input = r#""say \"hi\"""#;
    let tokens = lex(input);
    assert_eq!(tokens.len(), 1);
    assert_eq!(token_text(input, &tokens[0]), input);
}

#[test]
fn fstring_with_name_interpolation() {
    insta::assert_snapshot!(snapshot(r#"f"hello $name!""#), @r#"
    FStrOpen "f\""
    StrPart "hello "
    Dollar "$"
    Ident "name"
    StrPart "!"
    DoubleQuote "\""
    "#);
}

#[test]
fn fstring_with_dotted_interpolation() {
    insta::assert_snapshot!(snapshot(r#"f"$user.name."#), @r#"
    FStrOpen "f\""
    Dollar "$"
    Ident "user"
    Dot "."
    Ident "name"
    StrPart "."
    "#);
}

#[test]
fn fstring_with_expression_interpolation() {
    insta::assert_snapshot!(snapshot(r#"f"a ${x + 1} b""#), @r#"
    FStrOpen "f\""
    StrPart "a "
    Dollar "$"
    BraceOpen "{"
    Ident "x"
    Plus "+"
    IntLit "1"
    BraceClose "}"
    StrPart " b"
    DoubleQuote "\""
    "#);
}

#[test]
fn fstring_interpolation_with_nested_braces() {
    insta::assert_snapshot!(snapshot(r#"f"${ {a: 1} }""#), @r#"
    FStrOpen "f\""
    Dollar "$"
    BraceOpen "{"
    BraceOpen "{"
    Ident "a"
    Colon ":"
    IntLit "1"
    BraceClose "}"
    BraceClose "}"
    DoubleQuote "\""
    "#);
}

#[test]
fn fstring_nested_in_interpolation() {
    insta::assert_snapshot!(snapshot(r#"f"${f"$x"}""#), @r#"
    FStrOpen "f\""
    Dollar "$"
    BraceOpen "{"
    FStrOpen "f\""
    Dollar "$"
    Ident "x"
    DoubleQuote "\""
    BraceClose "}"
    DoubleQuote "\""
    "#);
}

#[test]
fn fstring_dollar_without_name_is_text() {
    insta::assert_snapshot!(snapshot(r#"f"cost: $5""#), @r#"
    FStrOpen "f\""
    StrPart "cost: $5"
    DoubleQuote "\""
    "#);
}

#[test]
fn fstring_escapes_stay_in_text() {
    insta::assert_snapshot!(snapshot(r#"f"a\"b\$c""#), @r#"
    FStrOpen "f\""
    StrPart "a\\\"b\\$c"
    DoubleQuote "\""
    "#);
}

#[test]
fn triple_quoted_fstring() {
    insta::assert_snapshot!(snapshot("f\"\"\"say \"hi\" $x\"\"\""), @r#"
    FStrTripleOpen "f\"\"\""
    StrPart "say \"hi\" "
    Dollar "$"
    Ident "x"
    TripleQuote "\"\"\""
    "#);
}

#[test]
fn backtick_fstring() {
    insta::assert_snapshot!(snapshot("f`a \"b\"`"), @r#"
    FTickOpen "f`"
    StrPart "a \"b\""
    Backtick "`"
    "#);
}

#[test]
fn multiline_string() {
    insta::assert_snapshot!(snapshot("```\nline $x\n```"), @r#"
    MStrFence "```"
    StrPart "\nline "
    Dollar "$"
    Ident "x"
    StrPart "\n"
    MStrFence "```"
    "#);
}

#[test]
fn unterminated_fstring() {
    insta::assert_snapshot!(snapshot(r#"f"abc"#), @r#"
    FStrOpen "f\""
    StrPart "abc"
    "#);
}

#[test]
fn trivia() {
    insta::assert_snapshot!(snapshot_raw("a // note\n/* block */ b"), @r#"
    Ident "a"
    Whitespace " "
    LineComment "// note"
    Newline "\n"
    BlockComment "/* block */"
    Whitespace " "
    Ident "b"
    "#);
}

#[test]
fn block_comments_with_star_runs() {
    insta::assert_snapshot!(snapshot_raw("/***/ /** x **/ a /* b **/"), @r#"
    BlockComment "/***/"
    Whitespace " "
    BlockComment "/** x **/"
    Whitespace " "
    Ident "a"
    Whitespace " "
    BlockComment "/* b **/"
    "#);
}

#[test]
fn block_comment_ends_at_first_close() {
    insta::assert_snapshot!(snapshot_raw("/* a **/ y */"), @r#"
    BlockComment "/* a **/"
    Whitespace " "
    Ident "y"
    Whitespace " "
    Star "*"
    Slash "/"
    "#);
}

#[test]
fn crlf_is_one_newline() {
    insta::assert_snapshot!(snapshot_raw("a\r\nb"), @r#"
    Ident "a"
    Newline "\r\n"
    Ident "b"
    "#);
}

#[test]
fn garbage_is_coalesced() {
    insta::assert_snapshot!(snapshot("a @#% b"), @r#"
    Ident "a"
    Garbage "@#%"
    Ident "b"
    "#);
}

#[test]
fn garbage_at_end() {
    insta::assert_snapshot!(snapshot("x ^^"), @r#"
    Ident "x"
    Garbage "^^"
    "#);
}

#[test]
fn lexing_is_lossless() {
    let inputs = [
        "var x = 1",
        "fn f(a, b) = a + b\n",
        "f\"a ${ {b: [1, 2]} } c $d.e\"",
        "```\n$x ${y}\n```",
        "@@ \u{1F600} 'x",
        "f\"unterminated ${",
        "",
    ];
    for input in inputs {
        let text: String = lex(input).iter().map(|t| token_text(input, t)).collect();
        assert_eq!(text, input);
    }
}
