use simpleui_evaluator::EvalError;
use thiserror::Error;

/// Errors shared by the HTML, CSS and JS compilers
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CompileError {
    #[error(transparent)]
    Eval(#[from] EvalError),

    #[error("Unsupported feature: {0}")]
    UnsupportedFeature(String),
}
