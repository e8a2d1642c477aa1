//! Operator typing and operator counting tests.

mod common;
use common::{error_of, metrics_of};
use tally_core::{Error, VarType};

#[test]
fn test_addition_counts_operators() {
    let metrics = metrics_of("num a; num b; num c; a = a + b + c;");
    assert_eq!(metrics.operators, 2);
}

#[test]
fn test_single_operand_counts_nothing() {
    let metrics = metrics_of("num a; a = a;");
    assert_eq!(metrics.operators, 0);
}

#[test]
fn test_mixed_arithmetic() {
    // a * b, c / 2, and the two additive operators
    let metrics = metrics_of("num a; num b; num c; a = a * b + c / 2 - 1;");
    assert_eq!(metrics.operators, 4);
}

#[test]
fn test_arithmetic_on_bool() {
    let error = error_of("num a; bool b; a = a + b;");
    assert!(matches!(
        error,
        Error::OperandTypeMismatch {
            expected: VarType::Num,
            found: VarType::Bool,
            ..
        }
    ));
    assert_eq!(error.to_string(), "Invalid type in expression");

    let error = error_of("bool b; num a; a = b * 2;");
    assert!(matches!(error, Error::OperandTypeMismatch { .. }));
}

#[test]
fn test_single_operand_chains_keep_type() {
    // A bool flows unchanged through single-operand arithmetic levels.
    let metrics = metrics_of("bool b; bool c; c = b;");
    assert_eq!(metrics.operators, 0);
}

#[test]
fn test_boolean_operators() {
    let metrics = metrics_of("bool a; bool b; a = a && b || true;");
    assert_eq!(metrics.operators, 2);

    let error = error_of("bool a; num n; a = a && n;");
    assert!(matches!(
        error,
        Error::OperandTypeMismatch {
            expected: VarType::Bool,
            found: VarType::Num,
            ..
        }
    ));
}

#[test]
fn test_comparison_of_numbers() {
    let metrics = metrics_of("num a; num b; bool c; c = a < b; c = a >= b;");
    assert_eq!(metrics.operators, 2);
}

#[test]
fn test_ordering_booleans() {
    let error = error_of("bool a; bool b; bool c; c = a < b;");
    match error {
        Error::InvalidComparisonOperand {
            operator, found, ..
        } => {
            assert_eq!(operator, "<");
            assert_eq!(found, VarType::Bool);
        }
        other => panic!("expected invalid comparison operand, got {other:?}"),
    }
}

#[test]
fn test_equality_of_booleans() {
    let metrics = metrics_of("bool a; bool b; bool c; c = a == b; c = a != b;");
    assert_eq!(metrics.operators, 2);

    // `a == b` is a bool, so it cannot be assigned to a num.
    let error = error_of("bool a; bool b; num n; n = a == b;");
    assert!(matches!(
        error,
        Error::AssignmentTypeMismatch {
            found: VarType::Bool,
            ..
        }
    ));
}

#[test]
fn test_comparison_mismatched_operands() {
    let error = error_of("num a; bool b; bool c; c = a == b;");
    assert!(matches!(
        error,
        Error::OperandTypeMismatch {
            expected: VarType::Num,
            found: VarType::Bool,
            ..
        }
    ));
}

#[test]
fn test_comparison_inside_boolean_chain() {
    let metrics = metrics_of("num a; bool c; c = a < 1 && a > 0;");
    assert_eq!(metrics.operators, 3);
}

#[test]
fn test_stacked_not() {
    let metrics = metrics_of("bool x; x = !!x;");
    assert_eq!(metrics.operators, 2);

    let error = error_of("num n; n = !!n;");
    match error {
        Error::InvalidUnaryOperand {
            operator, found, ..
        } => {
            assert_eq!(operator, "!");
            assert_eq!(found, VarType::Num);
        }
        other => panic!("expected invalid unary operand, got {other:?}"),
    }
}

#[test]
fn test_unary_minus() {
    let metrics = metrics_of("num n; n = -n; n = - - 3;");
    assert_eq!(metrics.operators, 3);

    let error = error_of("bool b; b = -b;");
    assert!(matches!(
        error,
        Error::InvalidUnaryOperand {
            found: VarType::Bool,
            ..
        }
    ));
}

#[test]
fn test_unary_on_parenthesized_expression() {
    let metrics = metrics_of("num a; bool c; c = !(a < 2);");
    assert_eq!(metrics.operators, 2);

    let error = error_of("num a; a = -(a < 2);");
    assert!(matches!(error, Error::InvalidUnaryOperand { .. }));
}

#[test]
fn test_parentheses_nest_expressions() {
    let metrics = metrics_of("num a; a = (a + 1) * (a - 1);");
    assert_eq!(metrics.operators, 3);
}
