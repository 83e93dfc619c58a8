use crate::Document;
use indoc::indoc;

#[test]
fn missing_paren_in_args() {
    let res = Document::expect_invalid("f(1, 2");

    insta::assert_snapshot!(res, @"error at 1..6: missing closing `)` (related: arguments started here at 1..2)");
}

#[test]
fn missing_brace_in_block() {
    let input = indoc! {r#"
    if a {
      b"#};

    let res = Document::expect_invalid(input);

    insta::assert_snapshot!(res, @"error at 5..10: missing closing `}` (related: block started here at 5..6)");
}

#[test]
fn missing_bracket() {
    let res = Document::expect_invalid("[1, 2");

    insta::assert_snapshot!(res, @"error at 0..5: missing closing `]` (related: array started here at 0..1)");
}

#[test]
fn missing_brace_in_object() {
    let res = Document::expect_invalid("{ a: 1");

    insta::assert_snapshot!(res, @"error at 0..6: missing closing `}` (related: object started here at 0..1)");
}

#[test]
fn only_outer_delimiter_is_reported() {
    let res = Document::expect_invalid("f(g(1)");

    insta::assert_snapshot!(res, @"error at 1..6: missing closing `)` (related: arguments started here at 1..2)");
}

#[test]
fn unterminated_fstring() {
    let res = Document::expect_invalid(r#"f"abc"#);

    insta::assert_snapshot!(res, @"error at 0..5: unterminated string (related: string started here at 0..2)");
}
