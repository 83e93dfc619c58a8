use crate::Document;
use indoc::indoc;

#[test]
fn empty_input() {
    insta::assert_snapshot!(Document::expect_valid_sexp(""), @"(code)");
}

#[test]
fn var_declaration() {
    let res = Document::expect_valid_sexp("var x = 1");

    insta::assert_snapshot!(res, @r"
    (code
      (var
        name: (name)
        value: (int)))
    ");
}

#[test]
fn var_declaration_cst() {
    let res = Document::expect_valid_cst("var x = 1");

    insta::assert_snapshot!(res, @r#"
    Code
      Var
        KwVar "var"
        Name
          Ident "x"
        Equals "="
        Int
          IntLit "1"
    "#);
}

#[test]
fn assignment_to_dotted_name() {
    let res = Document::expect_valid_cst("a.b = c");

    insta::assert_snapshot!(res, @r#"
    Code
      Asn
        Name
          Ident "a"
          Dot "."
          Ident "b"
        Equals "="
        Name
          Ident "c"
    "#);
}

#[test]
fn dotted_name_with_spaces_around_dot() {
    let res = Document::expect_valid_cst("x = a. b .c");

    insta::assert_snapshot!(res, @r#"
    Code
      Asn
        Name
          Ident "x"
        Equals "="
        Name
          Ident "a"
          Dot "."
          Ident "b"
          Dot "."
          Ident "c"
    "#);
}

#[test]
fn assignment_sexp() {
    let res = Document::expect_valid_sexp("count = count + 1");

    insta::assert_snapshot!(res, @r"
    (code
      (asn
        name: (name)
        value: (bina
          (name)
          (int))))
    ");
}

#[test]
fn fn_with_block_body() {
    let res = Document::expect_valid_sexp("fn add(a, b) { a + b }");

    insta::assert_snapshot!(res, @r"
    (code
      (fn
        name: (name)
        (params
          (name)
          (name))
        (body
          (bina
            (name)
            (name)))))
    ");
}

#[test]
fn fn_with_expression_body() {
    let res = Document::expect_valid_sexp("fn double(x) = x * 2");

    insta::assert_snapshot!(res, @r"
    (code
      (fn
        name: (name)
        (params
          (name))
        (body
          (bina
            (name)
            (int)))))
    ");
}

#[test]
fn fn_without_params() {
    let res = Document::expect_valid_sexp("fn noop() {}");

    insta::assert_snapshot!(res, @r"
    (code
      (fn
        name: (name)
        (params)
        (body)))
    ");
}

#[test]
fn use_with_subs() {
    let res = Document::expect_valid_sexp("use std.io: print, read");

    insta::assert_snapshot!(res, @r"
    (code
      (use
        (name)
        (subs
          (name)
          (name))))
    ");
}

#[test]
fn import_with_args() {
    let res = Document::expect_valid_sexp(r#"import theme("dark")"#);

    insta::assert_snapshot!(res, @r"
    (code
      (import
        (name)
        (args
          (str))))
    ");
}

#[test]
fn mod_with_body() {
    let res = Document::expect_valid_sexp("mod app { var a = 1 }");

    insta::assert_snapshot!(res, @r"
    (code
      (mod
        (name)
        (body
          (var
            name: (name)
            value: (int)))))
    ");
}

#[test]
fn semicolons_and_line_breaks_separate_statements() {
    let input = indoc! {r#"
    var a = 1; var b = 2
    print(a)
    "#};

    let res = Document::expect_valid_sexp(input);

    insta::assert_snapshot!(res, @r"
    (code
      (var
        name: (name)
        value: (int))
      (var
        name: (name)
        value: (int))
      (call
        (name)
        (args
          (name))))
    ");
}

#[test]
fn trailing_semicolon() {
    let res = Document::expect_valid_sexp("a;");

    insta::assert_snapshot!(res, @r"
    (code
      (name))
    ");
}

#[test]
fn comments_are_ignored() {
    let input = indoc! {r#"
    // leading
    var a = 1 /* inline */
    // trailing
    "#};

    let res = Document::expect_valid_sexp(input);

    insta::assert_snapshot!(res, @r"
    (code
      (var
        name: (name)
        value: (int)))
    ");
}
