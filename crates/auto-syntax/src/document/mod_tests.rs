use crate::diagnostics::DiagnosticKind;
use crate::{DEFAULT_EXEC_FUEL, DEFAULT_RECURSION_FUEL, Document, Error, language};

#[test]
fn new_document_is_empty_until_exec() {
    let doc = Document::new("var x = 1");

    assert_eq!(doc.source(), "var x = 1");
    assert_eq!(doc.root().stmts().count(), 0);
    assert_eq!(doc.syntax().text().to_string(), "");
    assert_eq!(doc.exec_fuel_consumed(), 0);
}

#[test]
fn exec_builds_the_tree() {
    let doc = Document::new("var x = 1\nprint(x)").exec().unwrap();

    assert!(doc.is_valid());
    assert!(doc.diagnostics().is_empty());
    assert_eq!(doc.root().stmts().count(), 2);
    assert_eq!(doc.syntax().text().to_string(), "var x = 1\nprint(x)");
    assert!(doc.exec_fuel_consumed() > 0);
}

#[test]
fn default_fuel() {
    assert_eq!(DEFAULT_EXEC_FUEL, 1_000_000);
    assert_eq!(DEFAULT_RECURSION_FUEL, 1024);
}

#[test]
fn try_from_string() {
    let source = String::from("fn f() {}");
    let doc = Document::try_from(&source).unwrap();

    assert!(doc.is_valid());
    assert_eq!(doc.source(), "fn f() {}");
}

#[test]
fn language_parse_matches_document() {
    let source = "when x { is 1 -> a }";
    let from_language = language().parse(source).unwrap();
    let from_document = Document::try_from(source).unwrap();

    assert_eq!(
        from_language.printer().dump(),
        from_document.printer().dump()
    );
}

#[test]
fn warnings_keep_document_valid() {
    let doc = Document::try_from("when x {}").unwrap();

    assert!(doc.is_valid());
    assert!(doc.diagnostics().has_warnings());
    assert!(doc.into_valid().is_ok());
}

#[test]
fn diagnostics_combine_parse_and_validation() {
    let doc = Document::try_from("if \"s\" { a }\nf(1").unwrap();

    let kinds: Vec<_> = doc.diagnostics().iter().map(|d| d.kind()).collect();
    assert!(kinds.contains(&DiagnosticKind::UnclosedParen), "{:?}", kinds);
    assert!(kinds.contains(&DiagnosticKind::InvalidCondition), "{:?}", kinds);
}

#[test]
fn into_valid_passes_valid_documents_through() {
    let doc = Document::try_from("var x = 1").unwrap().into_valid().unwrap();
    assert_eq!(doc.root().stmts().count(), 1);
}

#[test]
fn into_valid_rejects_errors() {
    let result = Document::try_from("var = 1").unwrap().into_valid();

    let Err(Error::ParseError(diagnostics)) = result else {
        panic!("expected ParseError, got {:?}", result.map(|d| d.source()));
    };
    assert!(diagnostics.has_errors());
    insta::assert_snapshot!(
        Error::ParseError(diagnostics).to_string(),
        @"parsing failed with 1 errors"
    );
}

#[test]
fn fuel_errors_display() {
    insta::assert_snapshot!(Error::ExecFuelExhausted.to_string(), @"execution limit exceeded");
    insta::assert_snapshot!(Error::RecursionLimitExceeded.to_string(), @"recursion limit exceeded");
}
