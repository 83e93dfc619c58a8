use crate::Document;

#[test]
fn multiplication_binds_tighter_than_addition() {
    let res = Document::expect_valid_sexp("1 + 2 * 3");

    insta::assert_snapshot!(res, @r"
    (code
      (bina
        (int)
        (bina
          (int)
          (int))))
    ");
}

#[test]
fn same_precedence_is_left_associative() {
    let res = Document::expect_valid_sexp("1 - 2 - 3");

    insta::assert_snapshot!(res, @r"
    (code
      (bina
        (bina
          (int)
          (int))
        (int)))
    ");
}

#[test]
fn comparison_binds_loosest() {
    let res = Document::expect_valid_sexp("a + b == c * d");

    insta::assert_snapshot!(res, @r"
    (code
      (comp
        (bina
          (name)
          (name))
        (bina
          (name)
          (name))))
    ");
}

#[test]
fn unary_binds_tighter_than_binary() {
    let res = Document::expect_valid_sexp("-x * y");

    insta::assert_snapshot!(res, @r"
    (code
      (bina
        (una
          (name))
        (name)))
    ");
}

#[test]
fn call_binds_tighter_than_unary() {
    let res = Document::expect_valid_sexp("!f(x)");

    insta::assert_snapshot!(res, @r"
    (code
      (una
        (call
          (name)
          (args
            (name)))))
    ");
}

#[test]
fn group_overrides_precedence() {
    let res = Document::expect_valid_sexp("(a + b) * c");

    insta::assert_snapshot!(res, @r"
    (code
      (bina
        (group
          (bina
            (name)
            (name)))
        (name)))
    ");
}

#[test]
fn chained_calls() {
    let res = Document::expect_valid_sexp("f(1)(2)");

    insta::assert_snapshot!(res, @r"
    (code
      (call
        (call
          (name)
          (args
            (int)))
        (args
          (int))))
    ");
}

#[test]
fn call_with_trailing_block() {
    let res = Document::expect_valid_sexp(r#"button("ok") { text("x") }"#);

    insta::assert_snapshot!(res, @r"
    (code
      (call
        (name)
        (args
          (str))
        (body
          (call
            (name)
            (args
              (str))))))
    ");
}

#[test]
fn paren_after_line_break_starts_statement() {
    let res = Document::expect_valid_sexp("a\n(b)");

    insta::assert_snapshot!(res, @r"
    (code
      (name)
      (group
        (name)))
    ");
}

#[test]
fn minus_after_line_break_starts_statement() {
    let res = Document::expect_valid_sexp("a\n-b");

    insta::assert_snapshot!(res, @r"
    (code
      (name)
      (una
        (name)))
    ");
}

#[test]
fn operand_may_follow_line_break() {
    let res = Document::expect_valid_sexp("a +\n  b");

    insta::assert_snapshot!(res, @r"
    (code
      (bina
        (name)
        (name)))
    ");
}

#[test]
fn pair() {
    let res = Document::expect_valid_sexp("a: 1");

    insta::assert_snapshot!(res, @r"
    (code
      (pair
        key: (key)
        value: (int)))
    ");
}

#[test]
fn pair_cst_keeps_dotted_key() {
    let res = Document::expect_valid_cst("a.b: 1");

    insta::assert_snapshot!(res, @r#"
    Code
      Pair
        Key
          Ident "a"
          Dot "."
          Ident "b"
        Colon ":"
        Int
          IntLit "1"
    "#);
}

#[test]
fn object() {
    let res = Document::expect_valid_sexp("{ a: 1, b: [1, 2] }");

    insta::assert_snapshot!(res, @r"
    (code
      (obj
        (pair
          key: (key)
          value: (int))
        (pair
          key: (key)
          value: (array
            (int)
            (int)))))
    ");
}

#[test]
fn array_with_if_value() {
    let res = Document::expect_valid_sexp("[if a { 1 } else { 2 }]");

    insta::assert_snapshot!(res, @r"
    (code
      (array
        (if
          cond: (name)
          then: (then
            (int))
          else: (else
            (int)))))
    ");
}

#[test]
fn transition() {
    let res = Document::expect_valid_sexp("idle -> busy");

    insta::assert_snapshot!(res, @r"
    (code
      (trans
        src: (name)
        dst: (name)))
    ");
}

#[test]
fn relative_name() {
    let res = Document::expect_valid_cst(".x");

    insta::assert_snapshot!(res, @r#"
    Code
      Name
        Dot "."
        Ident "x"
    "#);
}

#[test]
fn literals() {
    let res = Document::expect_valid_sexp("null; true; false; 0b1; 0xF; 1.5");

    insta::assert_snapshot!(res, @r"
    (code
      (null)
      (true)
      (false)
      (bin)
      (hex)
      (float))
    ");
}
