mod compiler;

pub use compiler::compile_to_js;
