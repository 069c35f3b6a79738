//! Typed AST for SimpleUI documents.
//!
//! The grammar and parser live outside this repository. The parser hands
//! documents over as JSON with a `$type` tag on every polymorphic node; this
//! crate only models that tree and reads it back.

pub mod ast;
pub mod error;


pub use ast::*;
pub use error::{LoadError, LoadResult};

/// Load a document from the parser's JSON serialization
pub fn load_document(source: &str) -> LoadResult<Document> {
    if source.trim().is_empty() {
        return Err(LoadError::Empty);
    }
    Ok(serde_json::from_str(source)?)
}
