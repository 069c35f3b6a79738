use crate::context::{Binding, BindingContext, BindingFrame};
use crate::evaluator::{evaluate, EvalError, EvalResult, Value};
use simpleui_ast::{Component, Document, Expression};
use tracing::{debug, warn};

/// Look up the declaration a component use refers to.
///
/// Fails if the name is unknown or if the component is already on the
/// active stack, since emitting it again would never terminate.
pub fn resolve_component<'doc>(
    document: &'doc Document,
    name: &str,
    ctx: &BindingContext,
) -> EvalResult<&'doc Component> {
    if ctx.is_active(name) {
        let mut call_stack = ctx.call_stack();
        call_stack.push(name.to_string());
        return Err(EvalError::RecursiveComponent {
            component: name.to_string(),
            call_stack,
        });
    }

    document
        .component(name)
        .ok_or_else(|| EvalError::ComponentNotFound {
            name: name.to_string(),
        })
}

/// Pair each declared parameter with the argument at the same index.
///
/// Arguments are evaluated against `ctx` as it is before the new frame is
/// pushed, so they see the caller's bindings. A missing argument binds the
/// empty string and surplus arguments are dropped unevaluated.
pub fn bind(
    component: &Component,
    arguments: &[Expression],
    ctx: &BindingContext,
) -> EvalResult<BindingFrame> {
    if arguments.len() != component.parameters.len() {
        warn!(
            component = %component.name,
            expected = component.parameters.len(),
            received = arguments.len(),
            "Component argument count does not match its parameters"
        );
    }

    let bindings = component
        .parameters
        .iter()
        .enumerate()
        .map(|(index, parameter)| {
            let value = match arguments.get(index) {
                Some(argument) => evaluate(argument, ctx)?,
                None => Value::empty(),
            };
            Ok(Binding {
                name: parameter.name.clone(),
                param_type: parameter.param_type,
                value,
            })
        })
        .collect::<EvalResult<Vec<_>>>()?;

    debug!(
        component = %component.name,
        bindings = bindings.len(),
        depth = ctx.depth(),
        "Bound component arguments"
    );

    Ok(BindingFrame::new(component.name.clone(), bindings))
}
