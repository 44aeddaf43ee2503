use shimkit_ast::{NodeIndex, NodeList};

use super::Printer;

impl Printer<'_> {
    // =========================================================================
    // Output Helpers (delegate to SourceWriter)
    // =========================================================================

    pub(super) fn write(&mut self, text: &str) {
        self.writer.write(text);
    }

    pub(super) fn write_char(&mut self, ch: char) {
        self.writer.write_char(ch);
    }

    pub(super) fn write_line(&mut self) {
        self.writer.write_line();
    }

    pub(super) fn write_space(&mut self) {
        self.writer.write_space();
    }

    /// Write a semicolon (respecting options).
    pub(super) fn write_semicolon(&mut self) {
        if !self.options.omit_trailing_semicolon {
            self.write(";");
        }
    }

    pub(super) fn increase_indent(&mut self) {
        self.writer.increase_indent();
    }

    pub(super) fn decrease_indent(&mut self) {
        self.writer.decrease_indent();
    }

    // =========================================================================
    // Lists
    // =========================================================================

    /// Emit `list` separated by `", "`, each through `emit`.
    pub(super) fn emit_comma_list(&mut self, list: &NodeList, emit: fn(&mut Self, NodeIndex)) {
        for (i, &idx) in list.nodes.iter().enumerate() {
            if i > 0 {
                self.write(", ");
            }
            emit(self, idx);
        }
    }

    pub(super) fn write_identifier_text(&mut self, idx: NodeIndex) {
        if let Some(text) = self.arena.identifier_text(idx) {
            self.write(text);
        }
    }
}

/// Double-quoted JavaScript string literal for `value`.
pub(super) fn quote_string(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for ch in value.chars() {
        match ch {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            '\u{2028}' => quoted.push_str("\\u2028"),
            '\u{2029}' => quoted.push_str("\\u2029"),
            c if c.is_control() => quoted.push_str(&format!("\\u{:04x}", c as u32)),
            c => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}

/// Template quasi text, escaping what would end the chunk.
pub(super) fn escape_template(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace('`', "\\`")
        .replace("${", "\\${")
}

pub(super) fn format_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        let text = if value > 0.0 { "Infinity" } else { "-Infinity" };
        text.to_string()
    } else {
        format!("{value}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quotes_and_escapes() {
        assert_eq!(quote_string("core-js/es.array.at"), "\"core-js/es.array.at\"");
        assert_eq!(quote_string("a\"b\\c\n"), "\"a\\\"b\\\\c\\n\"");
    }

    #[test]
    fn numbers() {
        assert_eq!(format_number(1.0), "1");
        assert_eq!(format_number(1.5), "1.5");
        assert_eq!(format_number(f64::NAN), "NaN");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
    }

    #[test]
    fn template_chunks() {
        assert_eq!(escape_template("a`${b}"), "a\\`\\${b}");
    }
}
