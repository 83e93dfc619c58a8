use crate::Document;

#[test]
fn missing_value_after_equals() {
    let res = Document::expect_invalid("var x =");

    insta::assert_snapshot!(res, @"error at 7..7: expected an expression: after `=`");
}

#[test]
fn var_without_equals() {
    let res = Document::expect_invalid("var x");

    insta::assert_snapshot!(res, @"error at 5..5: unexpected token: expected `=` after the variable name");
}

#[test]
fn lone_dollar() {
    let res = Document::expect_invalid("x = $");

    insta::assert_snapshot!(res, @"error at 4..5: `$` outside of a string (hint: `$name` and `${expr}` only work inside f-strings)");
}

#[test]
fn unmatched_closer() {
    let res = Document::expect_invalid("a }");

    insta::assert_snapshot!(res, @"error at 2..3: unexpected token: unmatched `}`");
}

#[test]
fn assignment_to_non_name() {
    let res = Document::expect_invalid("1 = 2");

    insta::assert_snapshot!(res, @"error at 0..1: unexpected token: only a name can be assigned");
}

#[test]
fn node_body_rejects_bare_expressions() {
    let res = Document::expect_invalid("node n() { 1 }");

    insta::assert_snapshot!(res, @"error at 11..12: invalid node body item (hint: node bodies hold `key: value` pairs and `if` blocks)");
}

#[test]
fn if_without_condition() {
    let res = Document::expect_invalid("if { a }");

    insta::assert_snapshot!(res, @"error at 3..4: expected an expression: condition before `{`");
}

#[test]
fn fn_without_params() {
    let res = Document::expect_invalid("fn f { }");

    insta::assert_snapshot!(res, @"error at 5..6: unexpected token: expected `(` after the function name");
}

#[test]
fn missing_operand() {
    let res = Document::expect_invalid("f(1 +)");

    insta::assert_snapshot!(res, @"error at 5..6: expected an expression: after `+`");
}

#[test]
fn mod_without_name() {
    let res = Document::expect_invalid("mod { }");

    insta::assert_snapshot!(res, @"error at 4..5: expected a name: after `mod`");
}

#[test]
fn ui_without_body() {
    let res = Document::expect_invalid("ui");

    insta::assert_snapshot!(res, @"error at 2..2: expected a `{ ... }` block: after `ui`");
}

#[test]
fn garbage_between_statements() {
    let res = Document::expect_invalid("a @ b");

    insta::assert_snapshot!(res, @"error at 2..3: unexpected token: expected a statement");
}

#[test]
fn when_body_item_is_not_a_case() {
    let res = Document::expect_invalid("when x { a }");

    insta::assert_snapshot!(res, @r"
    error at 9..10: unexpected token: expected an `is` case
    warning at 0..4: `when` has no cases
    ");
}

#[test]
fn error_nodes_keep_the_tree_whole() {
    let doc = Document::try_from("a @ b").unwrap();

    insta::assert_snapshot!(doc.printer().raw(true).dump(), @r#"
    Code
      Name
        Ident "a"
      Error
        Garbage "@"
      Name
        Ident "b"
    "#);
}
