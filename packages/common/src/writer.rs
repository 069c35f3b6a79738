/// Line-oriented text buffer with indentation tracking
#[derive(Debug)]
pub struct CodeWriter {
    indent: String,
    depth: usize,
    buffer: String,
}

impl CodeWriter {
    pub fn new(indent: impl Into<String>) -> Self {
        Self {
            indent: indent.into(),
            depth: 0,
            buffer: String::new(),
        }
    }

    /// Write one line at the current depth
    pub fn add_line(&mut self, text: &str) {
        self.add_indent();
        self.buffer.push_str(text);
        self.buffer.push('\n');
    }

    pub fn add_blank_line(&mut self) {
        self.buffer.push('\n');
    }

    fn add_indent(&mut self) {
        for _ in 0..self.depth {
            self.buffer.push_str(&self.indent);
        }
    }

    pub fn indent(&mut self) {
        self.depth += 1;
    }

    pub fn dedent(&mut self) {
        if self.depth > 0 {
            self.depth -= 1;
        }
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn into_output(self) -> String {
        self.buffer
    }
}
