/// Parameter binding and component resolution
use crate::*;
use simpleui_ast::{load_document, Component, Expression, Operator, ParamType, Parameter};

fn component(name: &str, parameters: &[(&str, ParamType)]) -> Component {
    Component {
        name: name.to_string(),
        parameters: parameters
            .iter()
            .map(|(name, param_type)| Parameter {
                name: name.to_string(),
                param_type: *param_type,
            })
            .collect(),
        body: Vec::new(),
    }
}

#[test]
fn test_bind_pairs_parameters_in_order() {
    let card = component("Card", &[("title", ParamType::String), ("count", ParamType::Number)]);
    let frame = bind(
        &card,
        &[Expression::string("Hello"), Expression::number(3.0)],
        &BindingContext::new(),
    )
    .unwrap();

    assert_eq!(frame.component, "Card");
    assert_eq!(
        frame.bindings,
        vec![
            Binding {
                name: "title".to_string(),
                param_type: ParamType::String,
                value: Value::from("Hello"),
            },
            Binding {
                name: "count".to_string(),
                param_type: ParamType::Number,
                value: Value::Number(3.0),
            },
        ]
    );
}

#[test]
fn test_bind_evaluates_arguments() {
    let card = component("Card", &[("total", ParamType::Number)]);
    let args = [Expression::operation(
        Expression::number(2.0),
        Operator::Multiply,
        Expression::number(21.0),
    )];
    let frame = bind(&card, &args, &BindingContext::new()).unwrap();
    assert_eq!(frame.get("total"), Some(&Value::Number(42.0)));
}

#[test]
fn test_missing_argument_binds_empty_string() {
    let card = component("Card", &[("a", ParamType::String), ("b", ParamType::String)]);
    let frame = bind(&card, &[Expression::string("only")], &BindingContext::new()).unwrap();
    assert_eq!(frame.bindings.len(), 2);
    assert_eq!(frame.get("a"), Some(&Value::from("only")));
    assert_eq!(frame.get("b"), Some(&Value::from("")));
}

#[test]
fn test_surplus_arguments_are_not_evaluated() {
    let card = component("Card", &[("a", ParamType::Number)]);
    let args = [
        Expression::number(1.0),
        Expression::Unrecognized {
            kind: "Broken".to_string(),
        },
    ];
    let frame = bind(&card, &args, &BindingContext::new()).unwrap();
    assert_eq!(frame.bindings.len(), 1);
}

#[test]
fn test_arguments_see_caller_frame() {
    let inner = component("Inner", &[("y", ParamType::Number)]);
    let outer = BindingFrame::new(
        "Outer",
        vec![Binding {
            name: "x".to_string(),
            param_type: ParamType::Number,
            value: Value::Number(5.0),
        }],
    );

    let mut ctx = BindingContext::new();
    ctx.scoped(outer, |ctx| {
        let args = [Expression::operation(
            Expression::symbol("x"),
            Operator::Add,
            Expression::number(1.0),
        )];
        let frame = bind(&inner, &args, ctx).unwrap();
        assert_eq!(frame.get("y"), Some(&Value::Number(6.0)));
    });
}

#[test]
fn test_bind_error_propagates() {
    let card = component("Card", &[("a", ParamType::Number)]);
    let args = [Expression::operation(
        Expression::string("a"),
        Operator::Divide,
        Expression::number(2.0),
    )];
    assert!(matches!(
        bind(&card, &args, &BindingContext::new()),
        Err(EvalError::InvalidOperation { .. })
    ));
}

#[test]
fn test_resolve_component() {
    let doc = load_document(
        r#"{ "components": [ { "name": "Card", "parameters": [], "body": [] } ] }"#,
    )
    .unwrap();
    let ctx = BindingContext::new();

    assert_eq!(resolve_component(&doc, "Card", &ctx).unwrap().name, "Card");
    assert_eq!(
        resolve_component(&doc, "Nope", &ctx),
        Err(EvalError::ComponentNotFound {
            name: "Nope".to_string()
        })
    );
}

#[test]
fn test_resolve_detects_recursion() {
    let doc = load_document(
        r#"{ "components": [ { "name": "Card", "parameters": [], "body": [] } ] }"#,
    )
    .unwrap();
    let mut ctx = BindingContext::new();

    let result = ctx.scoped(BindingFrame::new("Card", Vec::new()), |ctx| {
        resolve_component(&doc, "Card", ctx).map(|c| c.name.clone())
    });

    match result {
        Err(EvalError::RecursiveComponent {
            component,
            call_stack,
        }) => {
            assert_eq!(component, "Card");
            assert_eq!(call_stack, vec!["Card", "Card"]);
        }
        other => panic!("Expected RecursiveComponent, got {:?}", other),
    }
    assert_eq!(ctx.depth(), 0);
}
