/// Expression evaluation: literals, symbols and the four operators
use crate::*;
use simpleui_ast::{Expression, Operator, ParamType};

fn ctx_with(bindings: &[(&str, Value)]) -> (BindingContext, BindingFrame) {
    let frame = BindingFrame::new(
        "Test",
        bindings
            .iter()
            .map(|(name, value)| Binding {
                name: name.to_string(),
                param_type: if value.is_number() {
                    ParamType::Number
                } else {
                    ParamType::String
                },
                value: value.clone(),
            })
            .collect(),
    );
    (BindingContext::new(), frame)
}

fn eval(expr: &Expression) -> EvalResult<Value> {
    evaluate(expr, &BindingContext::new())
}

fn op(left: Expression, operator: Operator, right: Expression) -> Expression {
    Expression::operation(left, operator, right)
}

#[test]
fn test_literals_are_identity() {
    assert_eq!(eval(&Expression::string("Hi")).unwrap(), Value::from("Hi"));
    assert_eq!(eval(&Expression::string("")).unwrap(), Value::from(""));
    assert_eq!(eval(&Expression::number(42.0)).unwrap(), Value::Number(42.0));
    assert_eq!(eval(&Expression::number(-1.5)).unwrap(), Value::Number(-1.5));
}

#[test]
fn test_numeric_arithmetic() {
    let n = Expression::number;
    assert_eq!(eval(&op(n(2.0), Operator::Add, n(3.0))).unwrap(), Value::Number(5.0));
    assert_eq!(eval(&op(n(2.0), Operator::Subtract, n(3.0))).unwrap(), Value::Number(-1.0));
    assert_eq!(eval(&op(n(2.0), Operator::Multiply, n(3.0))).unwrap(), Value::Number(6.0));
    assert_eq!(eval(&op(n(3.0), Operator::Divide, n(2.0))).unwrap(), Value::Number(1.5));
}

#[test]
fn test_nested_operations() {
    // (1 + 2) * 4
    let expr = op(
        op(Expression::number(1.0), Operator::Add, Expression::number(2.0)),
        Operator::Multiply,
        Expression::number(4.0),
    );
    assert_eq!(eval(&expr).unwrap(), Value::Number(12.0));
}

#[test]
fn test_plus_concatenates_in_either_order() {
    let left = op(Expression::string("a"), Operator::Add, Expression::number(3.0));
    let right = op(Expression::number(3.0), Operator::Add, Expression::string("a"));
    assert_eq!(eval(&left).unwrap(), Value::from("a3"));
    assert_eq!(eval(&right).unwrap(), Value::from("3a"));

    let strings = op(Expression::string("foo"), Operator::Add, Expression::string("bar"));
    assert_eq!(eval(&strings).unwrap(), Value::from("foobar"));
}

#[test]
fn test_concatenation_uses_number_text_form() {
    let expr = op(Expression::number(2.5), Operator::Add, Expression::string("em"));
    assert_eq!(eval(&expr).unwrap(), Value::from("2.5em"));

    // Numeric sub-result is summed before the string joins in
    let expr = op(
        op(Expression::number(1.0), Operator::Add, Expression::number(1.0)),
        Operator::Add,
        Expression::string("px"),
    );
    assert_eq!(eval(&expr).unwrap(), Value::from("2px"));
}

#[test]
fn test_numeric_only_operators_reject_strings() {
    for operator in [Operator::Subtract, Operator::Multiply, Operator::Divide] {
        let left_string = op(Expression::string("a"), operator, Expression::number(2.0));
        let right_string = op(Expression::number(2.0), operator, Expression::string("a"));

        match eval(&left_string) {
            Err(EvalError::InvalidOperation {
                left,
                operator: reported,
                right,
            }) => {
                assert_eq!(left, Value::from("a"));
                assert_eq!(reported, operator);
                assert_eq!(right, Value::Number(2.0));
            }
            other => panic!("Expected InvalidOperation, got {:?}", other),
        }
        assert!(matches!(
            eval(&right_string),
            Err(EvalError::InvalidOperation { .. })
        ));
    }
}

#[test]
fn test_string_typed_sub_expression_is_rejected() {
    // ("a" + 1) * 2: left side evaluates to a string at runtime
    let expr = op(
        op(Expression::string("a"), Operator::Add, Expression::number(1.0)),
        Operator::Multiply,
        Expression::number(2.0),
    );
    assert!(matches!(eval(&expr), Err(EvalError::InvalidOperation { .. })));
}

#[test]
fn test_division_by_zero_is_ieee() {
    let expr = op(Expression::number(1.0), Operator::Divide, Expression::number(0.0));
    let value = eval(&expr).unwrap();
    assert_eq!(value, Value::Number(f64::INFINITY));
    assert_eq!(value.to_string(), "Infinity");

    let expr = op(Expression::number(-1.0), Operator::Divide, Expression::number(0.0));
    assert_eq!(eval(&expr).unwrap().to_string(), "-Infinity");

    let expr = op(Expression::number(0.0), Operator::Divide, Expression::number(0.0));
    assert_eq!(eval(&expr).unwrap().to_string(), "NaN");
}

#[test]
fn test_unrecognized_expression() {
    let expr = Expression::Unrecognized {
        kind: "BooleanExpression".to_string(),
    };
    match eval(&expr) {
        Err(EvalError::UnhandledExpression { kind }) => assert_eq!(kind, "BooleanExpression"),
        other => panic!("Expected UnhandledExpression, got {:?}", other),
    }

    // Errors inside operands propagate
    let nested = op(Expression::number(1.0), Operator::Add, expr);
    assert!(matches!(eval(&nested), Err(EvalError::UnhandledExpression { .. })));
}

#[test]
fn test_symbol_resolves_bound_value() {
    let (mut ctx, frame) = ctx_with(&[("x", Value::Number(5.0)), ("name", Value::from("Ada"))]);
    ctx.scoped(frame, |ctx| {
        assert_eq!(evaluate(&Expression::symbol("x"), ctx).unwrap(), Value::Number(5.0));
        assert_eq!(evaluate(&Expression::symbol("name"), ctx).unwrap(), Value::from("Ada"));
    });
}

#[test]
fn test_unresolved_symbol_is_empty_string() {
    // No frame at all
    assert_eq!(eval(&Expression::symbol("missing")).unwrap(), Value::from(""));

    // Empty frame
    let (mut ctx, frame) = ctx_with(&[]);
    ctx.scoped(frame, |ctx| {
        assert_eq!(evaluate(&Expression::symbol("missing"), ctx).unwrap(), Value::from(""));
    });

    // Frame without a match
    let (mut ctx, frame) = ctx_with(&[("x", Value::Number(1.0))]);
    ctx.scoped(frame, |ctx| {
        assert_eq!(evaluate(&Expression::symbol("y"), ctx).unwrap(), Value::from(""));
    });
}

#[test]
fn test_bound_symbols_in_operations() {
    let (mut ctx, frame) = ctx_with(&[("x", Value::Number(5.0)), ("unit", Value::from("px"))]);
    ctx.scoped(frame, |ctx| {
        let doubled = op(Expression::symbol("x"), Operator::Multiply, Expression::number(2.0));
        assert_eq!(evaluate(&doubled, ctx).unwrap(), Value::Number(10.0));

        let sized = op(Expression::symbol("x"), Operator::Add, Expression::symbol("unit"));
        assert_eq!(evaluate(&sized, ctx).unwrap(), Value::from("5px"));

        let bad = op(Expression::symbol("unit"), Operator::Subtract, Expression::number(1.0));
        assert!(evaluate(&bad, ctx).is_err());
    });
}

#[test]
fn test_unresolved_symbol_is_string_typed() {
    let plus = op(Expression::symbol("missing"), Operator::Add, Expression::number(1.0));
    assert_eq!(eval(&plus).unwrap(), Value::from("1"));

    let minus = op(Expression::symbol("missing"), Operator::Subtract, Expression::number(1.0));
    assert!(matches!(eval(&minus), Err(EvalError::InvalidOperation { .. })));
}
