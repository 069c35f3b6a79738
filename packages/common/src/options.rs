/// Options shared by every target
#[derive(Debug, Clone, PartialEq)]
pub struct CompileOptions {
    /// Indentation string for nested output
    pub indent: String,
    /// Abort on node kinds that have no implementation yet instead of
    /// reporting them
    pub fail_on_unsupported: bool,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            indent: "  ".to_string(),
            fail_on_unsupported: false,
        }
    }
}

/// Names of the three generated files. The HTML document links the other two
/// by these names, so they must sit side by side.
pub const HTML_FILE_NAME: &str = "index.html";
pub const STYLESHEET_FILE_NAME: &str = "stylesheet.css";
pub const SCRIPT_FILE_NAME: &str = "script.js";
