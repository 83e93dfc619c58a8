use crate::Document;

#[test]
fn plain_string() {
    let res = Document::expect_valid_sexp(r#""plain""#);

    insta::assert_snapshot!(res, @r"
    (code
      (str))
    ");
}

#[test]
fn fstring_with_name_interpolation() {
    let res = Document::expect_valid_sexp(r#"f"hi $name!""#);

    insta::assert_snapshot!(res, @r"
    (code
      (fstr
        (spart)
        (interpol
          (name))
        (spart)))
    ");
}

#[test]
fn fstring_with_expression_interpolation() {
    let res = Document::expect_valid_sexp(r#"f"${a + 1}""#);

    insta::assert_snapshot!(res, @r"
    (code
      (fstr
        (interpol
          (bina
            (name)
            (int)))))
    ");
}

#[test]
fn fstring_cst() {
    let res = Document::expect_valid_cst(r#"f"a $b.c""#);

    insta::assert_snapshot!(res, @r#"
    Code
      FStr
        FStrOpen "f\""
        SPart
          StrPart "a "
        Interpol
          Dollar "$"
          Name
            Ident "b"
            Dot "."
            Ident "c"
        DoubleQuote "\""
    "#);
}

#[test]
fn multiline_string_keeps_bare_parts() {
    let res = Document::expect_valid_cst("```\n$x\n```");

    insta::assert_snapshot!(res, @r#"
    Code
      MStr
        MStrFence "```"
        StrPart "\n"
        Interpol
          Dollar "$"
          Name
            Ident "x"
        StrPart "\n"
        MStrFence "```"
    "#);
}

#[test]
fn fstring_as_pair_key() {
    let res = Document::expect_valid_sexp(r#"f"k$x": 1"#);

    insta::assert_snapshot!(res, @r"
    (code
      (pair
        key: (fstr
          (spart)
          (interpol
            (name)))
        value: (int)))
    ");
}

#[test]
fn string_as_pair_key() {
    let res = Document::expect_valid_sexp(r#""content-type": "json""#);

    insta::assert_snapshot!(res, @r"
    (code
      (pair
        key: (key)
        value: (str)))
    ");
}

#[test]
fn interpolation_holds_if_value() {
    let res = Document::expect_valid_sexp(r#"f"${if a { 1 } else { 2 }}""#);

    insta::assert_snapshot!(res, @r"
    (code
      (fstr
        (interpol
          (if
            cond: (name)
            then: (then
              (int))
            else: (else
              (int))))))
    ");
}
