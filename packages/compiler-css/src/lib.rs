//! Stylesheet generation.
//!
//! Per-element styling is inlined by the HTML compiler. The stylesheet only
//! carries the class rules that widgets rely on, each emitted once in the
//! order the widgets are first met.

use simpleui_ast::{Document, Node};
use simpleui_common::{CodeWriter, CompileOptions, CompileResult, Compiled, Emission, UnsupportedLog};
use simpleui_evaluator::{bind, resolve_component, BindingContext};
use tracing::{debug, info, instrument};

/// A class rule with fixed declarations
struct CssRule {
    selector: &'static str,
    declarations: &'static [(&'static str, &'static str)],
}

const TOPBAR_RULES: &[CssRule] = &[
    CssRule {
        selector: ".topbar",
        declarations: &[("background-color", "#333"), ("overflow", "hidden")],
    },
    CssRule {
        selector: ".topbar nav a",
        declarations: &[
            ("display", "block"),
            ("color", "#f2f2f2"),
            ("margin-left", "1%"),
            ("font-size", "17px"),
            ("text-decoration", "none"),
        ],
    },
];

const TOPBAR_FIXED_RULES: &[CssRule] = &[CssRule {
    selector: ".topbar--fixed",
    declarations: &[("position", "fixed"), ("top", "0"), ("left", "0"), ("width", "100%")],
}];

/// Compile a SimpleUI document to CSS
#[instrument(skip_all, fields(body = document.body_elements.len()))]
pub fn compile_to_css(document: &Document, options: CompileOptions) -> CompileResult<Compiled> {
    let mut compiler = CssCompiler::new(document, options);
    let mut ctx = BindingContext::new();

    let body = &document.body_elements;
    compiler.compile_elements(body, &mut ctx)?;

    info!(rules = compiler.emitted.len(), "CSS compilation complete");
    Ok(compiler.unsupported.finish(compiler.writer.into_output()))
}

struct CssCompiler<'doc> {
    document: &'doc Document,
    options: CompileOptions,
    writer: CodeWriter,
    unsupported: UnsupportedLog,
    emitted: Vec<&'static str>,
}

impl<'doc> CssCompiler<'doc> {
    fn new(document: &'doc Document, options: CompileOptions) -> Self {
        Self {
            document,
            writer: CodeWriter::new(options.indent.clone()),
            options,
            unsupported: UnsupportedLog::new(),
            emitted: Vec::new(),
        }
    }

    fn compile_elements(&mut self, nodes: &[Node], ctx: &mut BindingContext) -> CompileResult<()> {
        for node in nodes {
            let emission = self.compile_element(node, ctx)?;
            self.unsupported.record(emission, &self.options)?;
        }
        Ok(())
    }

    fn compile_element(&mut self, node: &Node, ctx: &mut BindingContext) -> CompileResult<Emission> {
        match node {
            Node::Topbar { fixed, .. } => {
                self.add_rules(TOPBAR_RULES);
                if *fixed {
                    self.add_rules(TOPBAR_FIXED_RULES);
                }
                Ok(Emission::Written)
            }

            Node::Div { children } => {
                self.compile_elements(children, ctx)?;
                Ok(Emission::Written)
            }

            Node::UseComponent {
                component,
                arguments,
            } => {
                let document = self.document;
                let declaration = resolve_component(document, component, ctx)?;
                let frame = bind(declaration, arguments, ctx)?;
                ctx.scoped(frame, |ctx| self.compile_elements(&declaration.body, ctx))?;
                Ok(Emission::Written)
            }

            Node::Import { .. } => Ok(Emission::Unsupported(node.kind())),

            Node::Title { .. }
            | Node::Icon { .. }
            | Node::Paragraph { .. }
            | Node::Button { .. }
            | Node::Link { .. }
            | Node::Textbox { .. }
            | Node::Linebreak
            | Node::Image { .. }
            | Node::Heading { .. }
            | Node::Popup { .. } => Ok(Emission::Skipped),
        }
    }

    fn add_rules(&mut self, rules: &[CssRule]) {
        for rule in rules {
            if self.emitted.contains(&rule.selector) {
                continue;
            }
            debug!(selector = rule.selector, "Adding rule");

            if !self.writer.is_empty() {
                self.writer.add_blank_line();
            }
            self.writer.add_line(&format!("{} {{", rule.selector));
            self.writer.indent();
            for (property, value) in rule.declarations {
                self.writer.add_line(&format!("{}: {};", property, value));
            }
            self.writer.dedent();
            self.writer.add_line("}");

            self.emitted.push(rule.selector);
        }
    }
}
