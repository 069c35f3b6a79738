use crate::error::CompileError;

/// Common Result type alias
pub type CompileResult<T> = Result<T, CompileError>;
