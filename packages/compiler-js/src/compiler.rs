use simpleui_ast::{Document, Node, ScriptFunction};
use simpleui_common::{CodeWriter, CompileOptions, CompileResult, Compiled, Emission, UnsupportedLog};
use simpleui_evaluator::{evaluate, BindingContext};
use tracing::{debug, info, instrument};

/// Compile the script functions of a SimpleUI document to JavaScript
#[instrument(skip_all, fields(functions = document.script_functions.len()))]
pub fn compile_to_js(document: &Document, options: CompileOptions) -> CompileResult<Compiled> {
    let mut writer = CodeWriter::new(options.indent.clone());
    let mut unsupported = UnsupportedLog::new();
    let ctx = BindingContext::new();

    for (index, function) in document.script_functions.iter().enumerate() {
        if index > 0 {
            writer.add_blank_line();
        }
        compile_function(function, &mut writer, &mut unsupported, &options, &ctx)?;
    }

    info!("JS compilation complete");
    Ok(unsupported.finish(writer.into_output()))
}

fn compile_function(
    function: &ScriptFunction,
    writer: &mut CodeWriter,
    unsupported: &mut UnsupportedLog,
    options: &CompileOptions,
    ctx: &BindingContext,
) -> CompileResult<()> {
    debug!(function = %function.name, statements = function.body.len(), "Compiling script function");

    let parameters: Vec<&str> = function
        .parameters
        .iter()
        .map(|parameter| parameter.name.as_str())
        .collect();

    writer.add_line(&format!(
        "function {}({}) {{",
        function.name,
        parameters.join(", ")
    ));
    writer.indent();
    for statement in &function.body {
        let emission = compile_statement(statement, writer, ctx)?;
        unsupported.record(emission, options)?;
    }
    writer.dedent();
    writer.add_line("}");

    Ok(())
}

fn compile_statement(node: &Node, writer: &mut CodeWriter, ctx: &BindingContext) -> CompileResult<Emission> {
    match node {
        Node::Popup { text } => {
            let message = evaluate(text, ctx)?.to_string();
            writer.add_line(&format!("alert('{}');", escape_js_single_quoted(&message)));
            Ok(Emission::Written)
        }

        Node::Import { .. } => Ok(Emission::Unsupported(node.kind())),

        Node::Title { .. }
        | Node::Icon { .. }
        | Node::Div { .. }
        | Node::Paragraph { .. }
        | Node::Button { .. }
        | Node::Link { .. }
        | Node::Textbox { .. }
        | Node::Linebreak
        | Node::Image { .. }
        | Node::Heading { .. }
        | Node::UseComponent { .. }
        | Node::Topbar { .. } => Ok(Emission::Skipped),
    }
}

fn escape_js_single_quoted(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace('\'', "\\'")
        .replace('\n', "\\n")
        .replace("</", "<\\/")
}
