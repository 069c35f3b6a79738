use crate::context::BindingContext;
use crate::evaluator::{evaluate, EvalResult};
use simpleui_ast::StyleDeclaration;
use tracing::trace;

/// Style properties that map to inline CSS
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleProperty {
    TextColor,
    FontSize,
    Height,
    Width,
    BackgroundColor,
}

impl StyleProperty {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "text-color" => Some(StyleProperty::TextColor),
            "font-size" => Some(StyleProperty::FontSize),
            "height" => Some(StyleProperty::Height),
            "width" => Some(StyleProperty::Width),
            "background-color" => Some(StyleProperty::BackgroundColor),
            _ => None,
        }
    }

    pub fn css_name(&self) -> &'static str {
        match self {
            StyleProperty::TextColor => "color",
            StyleProperty::FontSize => "font-size",
            StyleProperty::Height => "height",
            StyleProperty::Width => "width",
            StyleProperty::BackgroundColor => "background-color",
        }
    }
}

/// Build inline style text from a node's declarations, in declaration order.
/// Unknown properties are skipped.
pub fn resolve_inline_style(styles: &[StyleDeclaration], ctx: &BindingContext) -> EvalResult<String> {
    let mut css = String::new();

    for declaration in styles {
        let Some(property) = StyleProperty::from_name(&declaration.property) else {
            trace!(property = %declaration.property, "Skipping unknown style property");
            continue;
        };
        let value = evaluate(&declaration.value, ctx)?;
        css.push_str(&format!("{}:{}; ", property.css_name(), value));
    }

    Ok(css)
}
