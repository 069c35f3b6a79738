use thiserror::Error;

pub type LoadResult<T> = Result<T, LoadError>;

/// Errors raised while reading a serialized AST
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Malformed AST at line {line}, column {column}: {message}")]
    Malformed {
        line: usize,
        column: usize,
        message: String,
    },

    #[error("Empty AST input")]
    Empty,
}

impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> Self {
        LoadError::Malformed {
            line: err.line(),
            column: err.column(),
            message: err.to_string(),
        }
    }
}
