//! Output buffer with line and indentation tracking.

#[derive(Debug)]
pub struct SourceWriter {
    output: String,
    indent: u32,
    indent_width: usize,
    at_line_start: bool,
}

impl SourceWriter {
    pub fn new(indent_width: usize) -> Self {
        Self {
            output: String::new(),
            indent: 0,
            indent_width,
            at_line_start: true,
        }
    }

    pub fn with_capacity(capacity: usize, indent_width: usize) -> Self {
        Self {
            output: String::with_capacity(capacity),
            ..Self::new(indent_width)
        }
    }

    fn write_indent(&mut self) {
        if self.at_line_start {
            let width = self.indent as usize * self.indent_width;
            self.output.extend(std::iter::repeat_n(' ', width));
            self.at_line_start = false;
        }
    }

    pub fn write(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        self.write_indent();
        self.output.push_str(text);
    }

    pub fn write_char(&mut self, ch: char) {
        self.write_indent();
        self.output.push(ch);
    }

    pub fn write_space(&mut self) {
        self.write_char(' ');
    }

    /// End the current line. Consecutive calls do not produce blank lines.
    pub fn write_line(&mut self) {
        if !self.at_line_start {
            self.output.push('\n');
            self.at_line_start = true;
        }
    }

    pub fn increase_indent(&mut self) {
        self.indent += 1;
    }

    pub fn decrease_indent(&mut self) {
        self.indent = self.indent.saturating_sub(1);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.output.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.output.is_empty()
    }

    pub fn get_output(&self) -> &str {
        &self.output
    }

    pub fn take_output(self) -> String {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indents_only_at_line_start() {
        let mut writer = SourceWriter::new(2);
        writer.write("{");
        writer.write_line();
        writer.increase_indent();
        writer.write("a;");
        writer.write_space();
        writer.write("b;");
        writer.write_line();
        writer.write_line();
        writer.decrease_indent();
        writer.write_char('}');
        assert_eq!(writer.get_output(), "{\n  a; b;\n}");
    }
}
