/// Line-oriented output buffer with indentation
pub(crate) struct Context {
    indent: &'static str,
    depth: usize,
    buffer: String,
}

impl Context {
    pub fn new(indent: &'static str) -> Self {
        Self {
            indent,
            depth: 0,
            buffer: String::new(),
        }
    }

    pub fn add(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    /// Indented line; an empty line gets no trailing whitespace
    pub fn add_line(&mut self, line: &str) {
        if !line.is_empty() {
            self.add_indent();
            self.buffer.push_str(line);
        }
        self.buffer.push('\n');
    }

    /// Every line of a multi-line block at the current depth
    pub fn add_lines(&mut self, block: &str) {
        for line in block.lines() {
            self.add_line(line);
        }
    }

    pub fn blank_line(&mut self) {
        self.buffer.push('\n');
    }

    fn add_indent(&mut self) {
        for _ in 0..self.depth {
            self.buffer.push_str(self.indent);
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

    pub fn get_output(self) -> String {
        self.buffer
    }
}
