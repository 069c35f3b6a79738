use simpleui_ast::{Document, Expression, Node, StyleDeclaration};
use simpleui_common::{
    CodeWriter, CompileOptions, CompileResult, Compiled, Emission, UnsupportedLog,
    SCRIPT_FILE_NAME, STYLESHEET_FILE_NAME,
};
use simpleui_evaluator::{bind, evaluate, resolve_component, resolve_inline_style, BindingContext, Value};
use tracing::{debug, info, instrument};

/// Compile a SimpleUI document to an HTML page
#[instrument(skip_all, fields(head = document.head_elements.len(), body = document.body_elements.len()))]
pub fn compile_to_html(document: &Document, options: CompileOptions) -> CompileResult<Compiled> {
    let mut compiler = HtmlCompiler::new(document, options);
    let mut ctx = BindingContext::new();

    compiler.compile_document(&mut ctx)?;

    let compiled = compiler.finish();
    info!(bytes = compiled.output.len(), "HTML compilation complete");
    Ok(compiled)
}

struct HtmlCompiler<'doc> {
    document: &'doc Document,
    options: CompileOptions,
    writer: CodeWriter,
    unsupported: UnsupportedLog,
}

impl<'doc> HtmlCompiler<'doc> {
    fn new(document: &'doc Document, options: CompileOptions) -> Self {
        Self {
            document,
            writer: CodeWriter::new(options.indent.clone()),
            options,
            unsupported: UnsupportedLog::new(),
        }
    }

    fn finish(self) -> Compiled {
        self.unsupported.finish(self.writer.into_output())
    }

    fn compile_document(&mut self, ctx: &mut BindingContext) -> CompileResult<()> {
        let document = self.document;

        self.writer.add_line("<!DOCTYPE html>");
        self.writer.add_line("<html>");
        self.writer.indent();

        self.writer.add_line("<head>");
        self.writer.indent();
        for node in &document.head_elements {
            let emission = self.compile_head_element(node, ctx)?;
            self.unsupported.record(emission, &self.options)?;
        }
        self.writer.add_line(&format!(
            "<link rel=\"stylesheet\" href=\"{}\">",
            STYLESHEET_FILE_NAME
        ));
        self.writer
            .add_line(&format!("<script src=\"{}\"></script>", SCRIPT_FILE_NAME));
        self.writer.dedent();
        self.writer.add_line("</head>");

        self.writer.add_line("<body>");
        self.writer.indent();
        self.compile_elements(&document.body_elements, ctx)?;
        self.writer.dedent();
        self.writer.add_line("</body>");

        self.writer.dedent();
        self.writer.add_line("</html>");
        Ok(())
    }

    fn compile_head_element(&mut self, node: &Node, ctx: &mut BindingContext) -> CompileResult<Emission> {
        match node {
            Node::Title { text } => {
                let text = text_content(text, ctx)?;
                self.writer.add_line(&format!("<title>{}</title>", text));
            }

            Node::Icon { image_path } => {
                let href = text_content(image_path, ctx)?;
                self.writer
                    .add_line(&format!("<link rel=\"icon\" href=\"{}\">", href));
            }

            Node::Import { .. } => return Ok(Emission::Unsupported(node.kind())),

            Node::Div { .. }
            | Node::Paragraph { .. }
            | Node::Button { .. }
            | Node::Link { .. }
            | Node::Textbox { .. }
            | Node::Linebreak
            | Node::Image { .. }
            | Node::Heading { .. }
            | Node::UseComponent { .. }
            | Node::Topbar { .. }
            | Node::Popup { .. } => return Ok(Emission::Skipped),
        }
        Ok(Emission::Written)
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
            Node::Div { children } => {
                self.writer.add_line("<div>");
                self.writer.indent();
                self.compile_elements(children, ctx)?;
                self.writer.dedent();
                self.writer.add_line("</div>");
            }

            Node::Paragraph { text, styles } => {
                let style = style_attribute(styles, ctx)?;
                let text = text_content(text, ctx)?;
                self.writer.add_line(&format!("<p{}>{}</p>", style, text));
            }

            Node::Button {
                text,
                action,
                arguments,
            } => {
                let text = text_content(text, ctx)?;
                match action {
                    None => self.writer.add_line(&format!("<button>{}</button>", text)),
                    Some(action) => {
                        let call = format!("{}({})", action, call_arguments(arguments, ctx)?);
                        self.writer.add_line(&format!(
                            "<button onclick='{}'>{}</button>",
                            escape_single_quoted(&call),
                            text
                        ));
                    }
                }
            }

            Node::Link { url, text } => {
                let href = text_content(url, ctx)?;
                let label = match text {
                    Some(text) => text_content(text, ctx)?,
                    None => href.clone(),
                };
                self.writer
                    .add_line(&format!("<a href='{}'>{}</a>", href, label));
            }

            Node::Textbox {
                name,
                placeholder,
                label,
                label_after,
            } => {
                let id = escape_html(name);
                let input = match placeholder {
                    Some(placeholder) => format!(
                        "<input type='text' id='{}' placeholder='{}'>",
                        id,
                        text_content(placeholder, ctx)?
                    ),
                    None => format!("<input type='text' id='{}'>", id),
                };

                match label {
                    None => self.writer.add_line(&input),
                    Some(label) => {
                        let label = format!("<label for='{}'>{}</label>", id, text_content(label, ctx)?);
                        if *label_after {
                            self.writer.add_line(&input);
                            self.writer.add_line(&label);
                        } else {
                            self.writer.add_line(&label);
                            self.writer.add_line(&input);
                        }
                    }
                }
            }

            Node::Linebreak => self.writer.add_line("<br>"),

            Node::Image {
                image_path,
                alt_text,
                styles,
            } => {
                let src = text_content(image_path, ctx)?;
                let alt = escape_html(alt_text.as_deref().unwrap_or_default());
                let style = style_attribute(styles, ctx)?;
                self.writer
                    .add_line(&format!("<img src='{}' alt='{}'{}>", src, alt, style));
            }

            Node::Heading {
                level,
                text,
                styles,
            } => {
                let style = style_attribute(styles, ctx)?;
                let text = text_content(text, ctx)?;
                self.writer
                    .add_line(&format!("<h{level}{}>{}</h{level}>", style, text, level = level));
            }

            Node::UseComponent {
                component,
                arguments,
            } => {
                let document = self.document;
                let declaration = resolve_component(document, component, ctx)?;
                let frame = bind(declaration, arguments, ctx)?;
                debug!(component = %declaration.name, depth = ctx.depth(), "Inlining component");
                ctx.scoped(frame, |ctx| self.compile_elements(&declaration.body, ctx))?;
            }

            Node::Topbar {
                value,
                fixed,
                styles,
            } => {
                let style = style_attribute(styles, ctx)?;
                let class = if *fixed { "topbar topbar--fixed" } else { "topbar" };
                let text = text_content(value, ctx)?;

                self.writer
                    .add_line(&format!("<header class='{}'{}>", class, style));
                self.writer.indent();
                self.writer.add_line("<nav>");
                self.writer.indent();
                self.writer
                    .add_line(&format!("<a{} href='./'>{}</a>", style, text));
                self.writer.dedent();
                self.writer.add_line("</nav>");
                self.writer.dedent();
                self.writer.add_line("</header>");
            }

            Node::Import { .. } => return Ok(Emission::Unsupported(node.kind())),

            Node::Title { .. } | Node::Icon { .. } | Node::Popup { .. } => {
                return Ok(Emission::Skipped)
            }
        }
        Ok(Emission::Written)
    }
}

/// Evaluated and escaped text for element content or attribute values
fn text_content(expr: &Expression, ctx: &BindingContext) -> CompileResult<String> {
    Ok(escape_html(&evaluate(expr, ctx)?.to_string()))
}

/// ` style='...'`, or nothing when no recognized property is set
fn style_attribute(styles: &[StyleDeclaration], ctx: &BindingContext) -> CompileResult<String> {
    let style = resolve_inline_style(styles, ctx)?;
    if style.is_empty() {
        Ok(String::new())
    } else {
        Ok(format!(" style='{}'", escape_html(&style)))
    }
}

/// Arguments of an onclick call: numbers bare, everything else double-quoted.
///
/// Each argument is typed by its evaluated value, not its expression kind, so
/// `1 + 2` or a symbol bound to a number is also emitted bare.
fn call_arguments(arguments: &[Expression], ctx: &BindingContext) -> CompileResult<String> {
    let rendered = arguments
        .iter()
        .map(|argument| {
            Ok(match evaluate(argument, ctx)? {
                number @ Value::Number(_) => number.to_string(),
                Value::String(s) => format!("\"{}\"", escape_js_double_quoted(&s)),
            })
        })
        .collect::<CompileResult<Vec<_>>>()?;
    Ok(rendered.join(", "))
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Escape for a single-quoted attribute whose value is script
fn escape_single_quoted(text: &str) -> String {
    text.replace('&', "&amp;").replace('\'', "&#39;")
}

fn escape_js_double_quoted(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}
