//! Declaration, identifier and assignment tests.

mod common;
use common::{error_of, metrics_of};
use tally_core::{Error, VarType};

#[test]
fn test_declarations_count() {
    let metrics = metrics_of("num a; bool b; listnum c; listbool d;");
    assert_eq!(metrics.declarations, 4);
    assert_eq!(metrics.operators, 0);
}

#[test]
fn test_duplicate_declaration_same_type() {
    let error = error_of("num a; num a;");
    match error {
        Error::DuplicateDeclaration {
            name,
            span,
            previous,
        } => {
            assert_eq!(name, "a");
            assert_eq!(previous.start.offset, 4);
            assert_eq!(span.start.offset, 11);
        }
        other => panic!("expected duplicate declaration, got {other:?}"),
    }
}

#[test]
fn test_duplicate_declaration_across_kinds() {
    let error = error_of("listnum a; bool a;");
    assert!(matches!(error, Error::DuplicateDeclaration { .. }));

    let error = error_of("bool a; listbool a;");
    assert!(matches!(error, Error::DuplicateDeclaration { .. }));
}

#[test]
fn test_duplicate_declaration_in_nested_block() {
    // One flat namespace: blocks do not open scopes.
    let error = error_of("num a; { num a; }");
    assert!(matches!(error, Error::DuplicateDeclaration { .. }));
}

#[test]
fn test_block_declarations_stay_visible() {
    let metrics = metrics_of("{ num a; } a = 1;");
    assert_eq!(metrics.declarations, 1);
}

#[test]
fn test_undefined_identifier_in_value() {
    let error = error_of("num a; a = b;");
    match error {
        Error::UndefinedIdentifier { name, .. } => assert_eq!(name, "b"),
        other => panic!("expected undefined identifier, got {other:?}"),
    }
}

#[test]
fn test_undefined_assignment_target() {
    let error = error_of("x = 1;");
    assert!(matches!(error, Error::UndefinedIdentifier { ref name, .. } if name == "x"));
}

#[test]
fn test_use_before_declaration() {
    let error = error_of("num a; a = b; num b;");
    assert!(matches!(error, Error::UndefinedIdentifier { .. }));
}

#[test]
fn test_identifiers_are_case_sensitive() {
    let error = error_of("num count; Count = 1;");
    assert!(matches!(error, Error::UndefinedIdentifier { .. }));
}

#[test]
fn test_assignment_same_type() {
    let metrics = metrics_of("num a; bool b; a = 3; b = false;");
    assert_eq!(metrics.declarations, 2);
}

#[test]
fn test_assignment_bool_to_num() {
    let error = error_of("num a; bool b; a = b;");
    match error {
        Error::AssignmentTypeMismatch {
            name,
            expected,
            found,
            ..
        } => {
            assert_eq!(name, "a");
            assert_eq!(expected, VarType::Num);
            assert_eq!(found, VarType::Bool);
        }
        other => panic!("expected assignment mismatch, got {other:?}"),
    }
}

#[test]
fn test_assignment_num_to_bool() {
    let error = error_of("bool b; b = 1 + 2;");
    assert!(matches!(
        error,
        Error::AssignmentTypeMismatch {
            expected: VarType::Bool,
            found: VarType::Num,
            ..
        }
    ));
}

#[test]
fn test_assignment_to_list() {
    let error = error_of("listnum l; l = 1;");
    assert!(matches!(
        error,
        Error::AssignmentTypeMismatch {
            expected: VarType::ListNum,
            found: VarType::Num,
            ..
        }
    ));
}

#[test]
fn test_list_assignment_between_lists() {
    let metrics = metrics_of("listnum l; listnum m; l = m;");
    assert_eq!(metrics.declarations, 2);
}

#[test]
fn test_error_message() {
    let error = error_of("num a; a = true;");
    assert_eq!(
        error.to_string(),
        "Invalid type in assignation of Identifier a... was expecting num but got bool"
    );
}
