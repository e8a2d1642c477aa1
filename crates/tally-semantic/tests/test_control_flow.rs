//! Condition and loop tests.

mod common;
use common::{error_of, metrics_of};
use tally_core::{Error, VarType};

#[test]
fn test_if_bool_condition() {
    let metrics = metrics_of("bool c; if (c) { }");
    assert_eq!(metrics.if_statements, 1);
}

#[test]
fn test_if_num_condition() {
    let error = error_of("num n; if (n) { }");
    assert!(matches!(
        error,
        Error::InvalidConditionType {
            found: VarType::Num,
            ..
        }
    ));
    assert_eq!(error.to_string(), "Invalid type in condition");
}

#[test]
fn test_if_literal_condition() {
    assert_eq!(metrics_of("if (true) { }").if_statements, 1);
    assert!(matches!(
        error_of("if (1) { }"),
        Error::InvalidConditionType { .. }
    ));
}

#[test]
fn test_if_else_counts_once() {
    let metrics = metrics_of("bool c; num a; if (c) a = 1; else a = 2;");
    assert_eq!(metrics.if_statements, 1);
}

#[test]
fn test_while_conditions() {
    let metrics = metrics_of("num i; while (i < 10) { i = i + 1; }");
    assert_eq!(metrics.while_loops, 1);
    assert_eq!(metrics.operators, 2);

    let error = error_of("num i; while (i + 1) { }");
    assert!(matches!(error, Error::InvalidConditionType { .. }));
}

#[test]
fn test_for_conditions() {
    let metrics = metrics_of("num i; for (i = 0; i < 3; i = i + 1) { }");
    assert_eq!(metrics.for_loops, 1);
    assert_eq!(metrics.operators, 2);

    let error = error_of("num i; for (i = 0; i; i = i + 1) { }");
    assert!(matches!(
        error,
        Error::InvalidConditionType {
            found: VarType::Num,
            ..
        }
    ));
}

#[test]
fn test_branches_checked_before_condition() {
    // Both the body and the condition are wrong; the body is reached first.
    let error = error_of("num n; bool b; while (n) { n = b; }");
    assert!(matches!(error, Error::AssignmentTypeMismatch { .. }));

    let error = error_of("num n; if (n) { x = 1; }");
    assert!(matches!(error, Error::UndefinedIdentifier { .. }));
}

#[test]
fn test_for_update_checked_before_condition() {
    let error = error_of("num i; for (i = 0; i; i = true) { }");
    assert!(matches!(error, Error::AssignmentTypeMismatch { .. }));
}

#[test]
fn test_foreach_matching_element() {
    let metrics = metrics_of("listbool flags; foreach (bool f : flags) { f = !f; }");
    assert_eq!(metrics.for_loops, 1);
    // The loop variable is a declaration too.
    assert_eq!(metrics.declarations, 2);
    assert_eq!(metrics.operators, 1);

    let metrics = metrics_of("listnum values; foreach (num v : values) { }");
    assert_eq!(metrics.for_loops, 1);
}

#[test]
fn test_foreach_incompatible_element() {
    let error = error_of("listbool flags; foreach (num n : flags) { }");
    match error {
        Error::IncompatibleArrayType { array, element, .. } => {
            assert_eq!(array, VarType::ListBool);
            assert_eq!(element, VarType::Num);
        }
        other => panic!("expected incompatible array type, got {other:?}"),
    }

    let error = error_of("listnum values; foreach (bool b : values) { }");
    assert!(matches!(error, Error::IncompatibleArrayType { .. }));
}

#[test]
fn test_foreach_over_scalar() {
    let error = error_of("num n; foreach (num x : n) { }");
    assert!(matches!(
        error,
        Error::InvalidArrayType {
            found: VarType::Num,
            ..
        }
    ));
    assert_eq!(error.to_string(), "Array type is required here...");
}

#[test]
fn test_foreach_undefined_array() {
    let error = error_of("foreach (num x : missing) { }");
    assert!(matches!(error, Error::UndefinedIdentifier { ref name, .. } if name == "missing"));
}

#[test]
fn test_foreach_variable_is_global() {
    let error = error_of("listnum l; foreach (num x : l) { } num x;");
    assert!(matches!(error, Error::DuplicateDeclaration { .. }));

    let metrics = metrics_of("listnum l; foreach (num x : l) { } x = 4;");
    assert_eq!(metrics.declarations, 2);
}

#[test]
fn test_foreach_body_checked_after_array() {
    let error = error_of("num n; foreach (num x : n) { y = 1; }");
    assert!(matches!(error, Error::InvalidArrayType { .. }));
}

#[test]
fn test_nested_loops() {
    let source = r#"
        num i;
        num j;
        listnum values;
        for (i = 0; i < 10; i = i + 1) {
            while (j > 0) {
                foreach (num v : values) {
                    if (v == i) { j = j - 1; }
                }
            }
        }
    "#;
    let metrics = metrics_of(source);
    assert_eq!(metrics.declarations, 4);
    assert_eq!(metrics.for_loops, 2);
    assert_eq!(metrics.while_loops, 1);
    assert_eq!(metrics.if_statements, 1);
    // i < 10, i + 1, j > 0, v == i, j - 1
    assert_eq!(metrics.operators, 5);
}
