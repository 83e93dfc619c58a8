use crate::Document;
use indoc::indoc;

#[test]
fn statements_on_one_line_need_semicolon() {
    let res = Document::expect_invalid("var a = 1 var b = 2");

    insta::assert_snapshot!(res, @"error at 9..9: missing separator: expected `;` or a line break before a statement (fix: insert `;`) (hint: a line break also works as a separator)");
}

#[test]
fn elements_on_one_line_need_comma() {
    let res = Document::expect_invalid("[1 2]");

    insta::assert_snapshot!(res, @"error at 2..2: missing separator: expected `,` or a line break before an element (fix: insert `,`) (hint: a line break also works as a separator)");
}

#[test]
fn semicolon_in_args() {
    let res = Document::expect_invalid("f(1; 2)");

    insta::assert_snapshot!(res, @"error at 3..4: unexpected separator: expected `,` (fix: use `,`)");
}

#[test]
fn doubled_comma() {
    let res = Document::expect_invalid("f(1,, 2)");

    insta::assert_snapshot!(res, @"error at 4..5: unexpected separator: `,` must follow an argument");
}

#[test]
fn leading_semicolon() {
    let res = Document::expect_invalid("; a");

    insta::assert_snapshot!(res, @"error at 0..1: unexpected separator: `;` must follow a statement");
}

#[test]
fn line_breaks_separate_elements() {
    let input = indoc! {r#"
    [
      1
      2
    ]
    "#};

    let res = Document::expect_valid_sexp(input);

    insta::assert_snapshot!(res, @r"
    (code
      (array
        (int)
        (int)))
    ");
}

#[test]
fn trailing_comma_is_allowed() {
    let res = Document::expect_valid_sexp("f(1, 2,)");

    insta::assert_snapshot!(res, @r"
    (code
      (call
        (name)
        (args
          (int)
          (int))))
    ");
}
