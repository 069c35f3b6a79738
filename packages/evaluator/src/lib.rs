pub mod binder;
pub mod context;
pub mod evaluator;
pub mod style;

#[cfg(test)]
mod tests_expressions;

#[cfg(test)]
mod tests_binding;

pub use binder::{bind, resolve_component};
pub use context::{Binding, BindingContext, BindingFrame};
pub use evaluator::{evaluate, EvalError, EvalResult, Value};
pub use style::{resolve_inline_style, StyleProperty};
