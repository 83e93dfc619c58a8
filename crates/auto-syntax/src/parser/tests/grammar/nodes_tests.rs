use crate::Document;
use indoc::indoc;

#[test]
fn node_declaration() {
    let input = indoc! {r#"
    node button(label str, on_click) {
        text: label
        if on_click { cursor: pointer }
    }
    "#};

    let res = Document::expect_valid_sexp(input);

    insta::assert_snapshot!(res, @r"
    (code
      (node
        name: (name)
        (prop
          prop: (name)
          type: (name))
        (prop
          prop: (name))
        (body
          (pair
            key: (key)
            value: (name))
          (if
            cond: (name)
            then: (then
              (pair
                key: (key)
                value: (name)))))))
    ");
}

#[test]
fn node_without_body() {
    let res = Document::expect_valid_cst("node spacer()");

    insta::assert_snapshot!(res, @r#"
    Code
      NodeDecl
        KwNode "node"
        Name
          Ident "spacer"
        ParenOpen "("
        ParenClose ")"
    "#);
}

#[test]
fn prop_type_must_share_the_line() {
    let input = indoc! {r#"
    node card(
        title
        body str
    )
    "#};

    let res = Document::expect_valid_sexp(input);

    insta::assert_snapshot!(res, @r"
    (code
      (node
        name: (name)
        (prop
          prop: (name))
        (prop
          prop: (name)
          type: (name))))
    ");
}

#[test]
fn ui_block() {
    let res = Document::expect_valid_sexp(r#"ui { button("go") }"#);

    insta::assert_snapshot!(res, @r"
    (code
      (ui
        (body
          (call
            (name)
            (args
              (str))))))
    ");
}

#[test]
fn style_block_holds_statements_directly() {
    let res = Document::expect_valid_sexp("style { color: red; size: 12 }");

    insta::assert_snapshot!(res, @r"
    (code
      (style
        (pair
          key: (key)
          value: (name))
        (pair
          key: (key)
          value: (int))))
    ");
}

#[test]
fn nested_ui_tree() {
    let input = indoc! {r#"
    ui {
        col() {
            text(f"Hello, $user!")
            button("ok") { on_click: submit }
        }
    }
    "#};

    let res = Document::expect_valid_sexp(input);

    insta::assert_snapshot!(res, @r"
    (code
      (ui
        (body
          (call
            (name)
            (args)
            (body
              (call
                (name)
                (args
                  (fstr
                    (spart)
                    (interpol
                      (name))
                    (spart))))
              (call
                (name)
                (args
                  (str))
                (body
                  (pair
                    key: (key)
                    value: (name)))))))))
    ");
}
