//! Printer: renders a program graph back to JavaScript source text.
//!
//! Output is normalized: double-quoted strings, one statement per line,
//! and only the parentheses precedence requires.

use shimkit_ast::{NodeArena, NodeIndex, NodeKind};
use tracing::{Level, span};

use crate::source_writer::SourceWriter;

mod expressions;
mod helpers;
mod statements;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PrintOptions {
    pub indent_width: usize,
    pub omit_trailing_semicolon: bool,
}

impl Default for PrintOptions {
    fn default() -> Self {
        Self {
            indent_width: 4,
            omit_trailing_semicolon: false,
        }
    }
}

pub struct Printer<'a> {
    pub(super) arena: &'a NodeArena,
    pub(super) options: PrintOptions,
    pub(super) writer: SourceWriter,
}

impl<'a> Printer<'a> {
    pub fn new(arena: &'a NodeArena, options: PrintOptions) -> Self {
        Self {
            arena,
            options,
            writer: SourceWriter::with_capacity(1024, options.indent_width),
        }
    }

    /// Print a source file, statement, or expression.
    pub fn print(&mut self, idx: NodeIndex) {
        let _span = span!(Level::TRACE, "print", node = idx.0).entered();
        let Some(kind) = self.arena.kind(idx) else {
            return;
        };
        if is_statement(kind) {
            self.emit_statement(idx);
        } else {
            self.emit_expression(idx);
        }
    }

    pub fn get_output(&self) -> &str {
        self.writer.get_output()
    }

    pub fn take_output(self) -> String {
        self.writer.take_output()
    }
}

/// Render `root` with `options`.
pub fn print_to_string(arena: &NodeArena, root: NodeIndex, options: PrintOptions) -> String {
    let mut printer = Printer::new(arena, options);
    printer.print(root);
    printer.take_output()
}

pub(super) const fn is_statement(kind: &NodeKind) -> bool {
    matches!(
        kind,
        NodeKind::SourceFile(_)
            | NodeKind::Block(_)
            | NodeKind::VariableStatement(_)
            | NodeKind::FunctionDeclaration(_)
            | NodeKind::ClassDeclaration(_)
            | NodeKind::ExpressionStatement(_)
            | NodeKind::ReturnStatement(_)
            | NodeKind::ImportDeclaration(_)
    )
}
