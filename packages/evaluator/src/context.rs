use crate::evaluator::Value;
use simpleui_ast::ParamType;

/// One bound component parameter
#[derive(Debug, Clone, PartialEq)]
pub struct Binding {
    pub name: String,
    pub param_type: ParamType,
    pub value: Value,
}

/// Bindings for a single component instantiation, in parameter order
#[derive(Debug, Clone, PartialEq)]
pub struct BindingFrame {
    pub component: String,
    pub bindings: Vec<Binding>,
}

impl BindingFrame {
    pub fn new(component: impl Into<String>, bindings: Vec<Binding>) -> Self {
        Self {
            component: component.into(),
            bindings,
        }
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.bindings
            .iter()
            .find(|binding| binding.name == name)
            .map(|binding| &binding.value)
    }
}

/// Stack of active component invocations for one generation run.
///
/// Frames are only added through [`BindingContext::scoped`], which pops on
/// every exit path, so the depth after a component use always equals the
/// depth before it.
#[derive(Debug, Clone, Default)]
pub struct BindingContext {
    frames: Vec<BindingFrame>,
}

impl BindingContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Innermost frame
    pub fn current(&self) -> Option<&BindingFrame> {
        self.frames.last()
    }

    /// Resolve a name in the innermost frame. Outer frames are never consulted.
    pub fn lookup(&self, name: &str) -> Option<&Value> {
        self.current().and_then(|frame| frame.get(name))
    }

    /// Whether a component is somewhere on the active stack
    pub fn is_active(&self, component: &str) -> bool {
        self.frames.iter().any(|frame| frame.component == component)
    }

    /// Component names from outermost to innermost
    pub fn call_stack(&self) -> Vec<String> {
        self.frames.iter().map(|frame| frame.component.clone()).collect()
    }

    /// Run `f` with `frame` pushed, popping it again whatever `f` returns
    pub fn scoped<T>(&mut self, frame: BindingFrame, f: impl FnOnce(&mut Self) -> T) -> T {
        self.frames.push(frame);
        let result = f(self);
        self.frames.pop();
        result
    }
}
