use crate::{Document, Error};

#[test]
fn deeply_nested_groups_hit_recursion_limit() {
    let depth = 64;
    let mut input = String::new();
    for _ in 0..depth + 1 {
        input.push('(');
    }
    input.push('1');
    for _ in 0..depth + 1 {
        input.push(')');
    }

    let result = Document::new(&input)
        .with_recursion_fuel(Some(depth))
        .exec();

    assert!(
        matches!(result, Err(Error::RecursionLimitExceeded)),
        "expected RecursionLimitExceeded error, got {:?}",
        result
    );
}

#[test]
fn deeply_nested_blocks_hit_recursion_limit() {
    let depth = 64;
    let mut input = String::new();
    for _ in 0..depth {
        input.push_str("if a { ");
    }
    for _ in 0..depth {
        input.push('}');
    }

    let result = Document::new(&input)
        .with_recursion_fuel(Some(depth))
        .exec();

    assert!(
        matches!(result, Err(Error::RecursionLimitExceeded)),
        "expected RecursionLimitExceeded error, got {:?}",
        result
    );
}

#[test]
fn shallow_nesting_stays_within_limit() {
    let doc = Document::new("((((1))))")
        .with_recursion_fuel(Some(64))
        .exec()
        .unwrap();

    assert!(doc.is_valid());
}

#[test]
fn exhausted_exec_fuel_is_an_error() {
    let result = Document::new("var x = 1").with_exec_fuel(Some(2)).exec();

    assert!(
        matches!(result, Err(Error::ExecFuelExhausted)),
        "expected ExecFuelExhausted error, got {:?}",
        result
    );
}

#[test]
fn exec_fuel_counts_consumed_tokens() {
    let doc = Document::new("var x = 1 // trivia is free")
        .with_exec_fuel(Some(100))
        .exec()
        .unwrap();

    assert_eq!(doc.exec_fuel_consumed(), 4);
}

#[test]
fn unlimited_fuel() {
    let doc = Document::new("var x = [1, 2, 3]")
        .with_exec_fuel(None)
        .with_recursion_fuel(None)
        .exec()
        .unwrap();

    assert!(doc.is_valid());
    assert_eq!(doc.exec_fuel_consumed(), 0);
}

#[test]
fn tree_is_lossless_for_any_input() {
    let inputs = [
        "",
        "var x = 1\n",
        "fn f(a, b) = a + b",
        "if a { b } else if c { d } else { e }",
        "for i, x in xs { print(f\"$i: ${x}\") }",
        "when x { is 1 -> a; else { b } }",
        "node n(a str) { k: v, if c { d: e } }",
        "ui { col() { text(\"hi\") } }\r\n",
        "```\n$x\n```",
        // invalid input
        "f(1, 2",
        "var = ;; }",
        "a @#% b $ ]",
        "f\"${ {",
        "when { is }",
        "node (",
        ")))",
    ];

    for input in inputs {
        let doc = Document::try_from(input).unwrap();
        assert_eq!(doc.syntax().text().to_string(), input, "lost text of {:?}", input);
    }
}

#[test]
fn every_invalid_input_reports_something() {
    let inputs = ["f(1, 2", "var = ;; }", "a @#% b $ ]", "when { is }", "node (", ")))"];

    for input in inputs {
        let doc = Document::try_from(input).unwrap();
        assert!(!doc.is_valid(), "no diagnostics for {:?}", input);
        assert!(!doc.diagnostics().filtered().is_empty());
    }
}
