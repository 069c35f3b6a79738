//! Generates the three output documents for one SimpleUI document.
//!
//! Each target is compiled independently with its own binding context. The
//! first error aborts the whole run and nothing is returned for any target.

use simpleui_ast::{load_document, Document, LoadError};
use simpleui_common::{CompileError, CompileOptions};
use simpleui_compiler_css::compile_to_css;
use simpleui_compiler_html::compile_to_html;
use simpleui_compiler_js::compile_to_js;
use thiserror::Error;
use tracing::{info, instrument};

pub use simpleui_common::{HTML_FILE_NAME, SCRIPT_FILE_NAME, STYLESHEET_FILE_NAME};

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("HTML generation failed: {0}")]
    Html(#[source] CompileError),

    #[error("CSS generation failed: {0}")]
    Css(#[source] CompileError),

    #[error("JS generation failed: {0}")]
    Js(#[source] CompileError),
}

/// In-memory output of one generation run
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedFiles {
    pub html: String,
    pub css: String,
    pub js: String,
    /// Node kinds met in the document that no target implements yet
    pub unsupported: Vec<&'static str>,
}

impl GeneratedFiles {
    /// (file name, content) pairs in write order
    pub fn files(&self) -> [(&'static str, &str); 3] {
        [
            (HTML_FILE_NAME, self.html.as_str()),
            (STYLESHEET_FILE_NAME, self.css.as_str()),
            (SCRIPT_FILE_NAME, self.js.as_str()),
        ]
    }
}

/// Generate HTML, CSS and JS for a document
#[instrument(skip_all, fields(components = document.components.len()))]
pub fn generate(document: &Document, options: &CompileOptions) -> Result<GeneratedFiles, GenerateError> {
    let html = compile_to_html(document, options.clone()).map_err(GenerateError::Html)?;
    let css = compile_to_css(document, options.clone()).map_err(GenerateError::Css)?;
    let js = compile_to_js(document, options.clone()).map_err(GenerateError::Js)?;

    let mut unsupported = Vec::new();
    for kind in html
        .unsupported
        .iter()
        .chain(&css.unsupported)
        .chain(&js.unsupported)
    {
        if !unsupported.contains(kind) {
            unsupported.push(*kind);
        }
    }

    info!(
        html = html.output.len(),
        css = css.output.len(),
        js = js.output.len(),
        unsupported = unsupported.len(),
        "Generation complete"
    );

    Ok(GeneratedFiles {
        html: html.output,
        css: css.output,
        js: js.output,
        unsupported,
    })
}

/// Load a JSON AST and generate from it
pub fn generate_from_json(source: &str, options: &CompileOptions) -> Result<GeneratedFiles, GenerateError> {
    let document = load_document(source)?;
    generate(&document, options)
}
