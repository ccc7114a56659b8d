//! Dispatch of binary operations on untyped operands.

mod common;

use common::{assert_parts_close, EPS};
use complex_calc::prelude::*;
use pretty_assertions::assert_eq;

fn parse(json: &str) -> Value {
    serde_json::from_str(json).unwrap_or_else(|e| panic!("bad test JSON {json}: {e}"))
}

#[test]
fn test_every_operation_rejects_non_numbers() {
    let receiver = Rectangular::new(1.0, 1.0);
    let rejected = [
        (parse(r#""string""#), "String"),
        (parse(r#""1 + 2i""#), "String"),
        (parse("true"), "Bool"),
        (parse("null"), "Nothing"),
        (parse("[1, 2, 3]"), "Array"),
        (parse(r#"{"re": 1}"#), "Object"),
    ];
    for op in BinOp::ALL {
        for (value, type_name) in &rejected {
            let result = dynamic_binop(op, &receiver, value);
            assert_eq!(
                result,
                Err(ArithmeticError::InvalidOperand(type_name.to_string())),
                "{} with {}",
                op.name(),
                value
            );
        }
    }
}

#[test]
fn test_json_scalars_and_complex_operands() {
    let receiver = Trigonometric::new(3.0, 2.0);

    let sum = dynamic_binop(BinOp::Add, &receiver, &parse("5")).unwrap();
    assert_parts_close(&sum, 8.0, 2.0, EPS);

    let sum = dynamic_binop(BinOp::Add, &receiver, &parse(r#""5""#)).unwrap();
    assert_parts_close(&sum, 8.0, 2.0, EPS);

    let product =
        dynamic_binop(BinOp::Mul, &receiver, &parse(r#"{"real": 1, "imaginary": 4}"#)).unwrap();
    assert_parts_close(&product, -5.0, 14.0, EPS);

    let quotient = dynamic_binop(
        BinOp::Div,
        &receiver,
        &parse(r#"{"real": 4.0, "imaginary": -3.0}"#),
    )
    .unwrap();
    assert_parts_close(&quotient, 0.24, 0.68, EPS);
    assert_eq!(quotient.representation(), Representation::Trigonometric);
}

#[test]
fn test_dispatch_matches_typed_calls() {
    let a = Polar::new(-56.0, 3.0);
    let b = Polar::new(-84.0, -4.0);
    let rhs = Value::from(b);
    for op in BinOp::ALL {
        let dynamic = dynamic_binop(op, &a, &rhs).unwrap();
        let typed = match op {
            BinOp::Add => a.add(b),
            BinOp::Sub => a.subtract(b),
            BinOp::Mul => a.multiply(b),
            BinOp::Div => a.divide(b).unwrap(),
        };
        assert_eq!(dynamic, typed, "{}", op.name());
    }
}

#[test]
fn test_dispatch_by_name() {
    let a = Rectangular::new(4.0, 1.0);
    assert_eq!(
        dynamic_binop_by_name("divide", &a, &Value::Int(2)),
        Ok(Rectangular::new(2.0, 0.5))
    );
    assert_eq!(
        dynamic_binop_by_name("-", &a, &Value::Float(1.5)),
        Ok(Rectangular::new(2.5, 1.0))
    );
    assert_eq!(
        dynamic_binop_by_name("modulo", &a, &Value::Int(2)),
        Err(ArithmeticError::UnknownOperation("modulo".to_string()))
    );
}

#[test]
fn test_non_invertible_through_dispatch() {
    let a = Polar::new(2.0, 2.0);
    let zero = parse(r#"{"real": 0, "imaginary": 0}"#);
    assert_eq!(
        dynamic_binop(BinOp::Div, &a, &zero),
        Err(ArithmeticError::NonInvertible)
    );
}

#[test]
fn test_value_round_trips_through_json() {
    let value = Value::from(Rectangular::new(1.5, -2.0));
    let json = serde_json::to_string(&value).unwrap();
    assert_eq!(json, r#"{"real":1.5,"imaginary":-2.0}"#);
    assert_eq!(parse(&json), value);
}
