use crate::Document;
use indoc::indoc;

#[test]
fn if_else_if_else_stays_flat() {
    let res = Document::expect_valid_sexp("if a { b } else if c { d } else { e }");

    insta::assert_snapshot!(res, @r"
    (code
      (if
        cond: (name)
        then: (then
          (name))
        cond: (name)
        then: (then
          (name))
        else: (else
          (name))))
    ");
}

#[test]
fn else_if_across_whitespace_and_comments() {
    let res = Document::expect_valid_sexp("if a { b } else /* c */\n  if c { d }");

    insta::assert_snapshot!(res, @r"
    (code
      (if
        cond: (name)
        then: (then
          (name))
        cond: (name)
        then: (then
          (name))))
    ");
}

#[test]
fn else_if_cst_keeps_both_keywords_in_one_if() {
    let res = Document::expect_valid_cst("if a {} else  if b {}");

    insta::assert_snapshot!(res, @r#"
    Code
      If
        KwIf "if"
        Name
          Ident "a"
        Then
          BraceOpen "{"
          BraceClose "}"
        KwElse "else"
        KwIf "if"
        Name
          Ident "b"
        Then
          BraceOpen "{"
          BraceClose "}"
    "#);
}

#[test]
fn if_condition_call_does_not_take_block() {
    let res = Document::expect_valid_sexp("if ready() { go() }");

    insta::assert_snapshot!(res, @r"
    (code
      (if
        cond: (call
          (name)
          (args))
        then: (then
          (call
            (name)
            (args)))))
    ");
}

#[test]
fn for_with_init_and_condition() {
    let res = Document::expect_valid_sexp("for var i = 0; i < n { i = i + 1 }");

    insta::assert_snapshot!(res, @r"
    (code
      (for
        init: (var
          name: (name)
          value: (int))
        cond: (comp
          (name)
          (name))
        loop: (body
          (asn
            name: (name)
            value: (bina
              (name)
              (int))))))
    ");
}

#[test]
fn for_in_with_index() {
    let res = Document::expect_valid_sexp("for i, x in xs { print(x) }");

    insta::assert_snapshot!(res, @r"
    (code
      (for
        (in
          (idx)
          (name)
          (name))
        body: (body
          (call
            (name)
            (args
              (name))))))
    ");
}

#[test]
fn for_in_with_spaced_comma() {
    let res = Document::expect_valid_sexp("for i , x in xs { }");

    insta::assert_snapshot!(res, @r"
    (code
      (for
        (in
          (idx)
          (name)
          (name))
        body: (body)))
    ");
}

#[test]
fn for_in_cst() {
    let res = Document::expect_valid_cst("for x in xs {}");

    insta::assert_snapshot!(res, @r#"
    Code
      For
        KwFor "for"
        In
          Name
            Ident "x"
          KwIn "in"
          Name
            Ident "xs"
        Body
          BraceOpen "{"
          BraceClose "}"
    "#);
}

#[test]
fn endless_for() {
    let res = Document::expect_valid_sexp("for { tick() }");

    insta::assert_snapshot!(res, @r"
    (code
      (for
        loop: (body
          (call
            (name)
            (args)))))
    ");
}

#[test]
fn when_with_cases_and_else() {
    let input = indoc! {r#"
    when x {
        is 1 -> a
        is 2 { b }
        else -> c
    }
    "#};

    let res = Document::expect_valid_sexp(input);

    insta::assert_snapshot!(res, @r"
    (code
      (when
        check: (name)
        (body
          (case
            (int)
            (name))
          (case
            (int)
            (body
              (name)))
          (else
            (name)))))
    ");
}

#[test]
fn when_with_init() {
    let res = Document::expect_valid_sexp("when var v = f(); v { is null -> a }");

    insta::assert_snapshot!(res, @r"
    (code
      (when
        init: (var
          name: (name)
          value: (call
            (name)
            (args)))
        check: (name)
        (body
          (case
            (null)
            (name)))))
    ");
}

#[test]
fn case_arrow_is_not_a_transition() {
    let res = Document::expect_valid_sexp("when s { is idle -> run() }");

    insta::assert_snapshot!(res, @r"
    (code
      (when
        check: (name)
        (body
          (case
            (name)
            (call
              (name)
              (args))))))
    ");
}

#[test]
fn when_as_value() {
    let res = Document::expect_valid_sexp("var label = when n { is 0 -> \"none\"; else -> \"some\" }");

    insta::assert_snapshot!(res, @r"
    (code
      (var
        name: (name)
        value: (when
          check: (name)
          (body
            (case
              (int)
              (str))
            (else
              (str))))))
    ");
}
