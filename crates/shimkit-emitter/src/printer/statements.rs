use shimkit_ast::{NodeIndex, NodeKind};

use super::Printer;
use super::helpers::quote_string;

impl Printer<'_> {
    pub(super) fn emit_statement(&mut self, idx: NodeIndex) {
        let arena = self.arena;
        let Some(kind) = arena.kind(idx) else {
            return;
        };
        match kind {
            NodeKind::SourceFile(data) => {
                for &stmt in &data.statements.nodes {
                    self.emit_statement(stmt);
                    self.write_line();
                }
            }
            NodeKind::Block(data) => {
                if data.statements.is_empty() {
                    self.write("{}");
                    return;
                }
                self.write("{");
                self.write_line();
                self.increase_indent();
                for &stmt in &data.statements.nodes {
                    self.emit_statement(stmt);
                    self.write_line();
                }
                self.decrease_indent();
                self.write("}");
            }
            NodeKind::VariableStatement(data) => {
                self.write(data.kind.keyword());
                self.write_space();
                self.emit_comma_list(&data.declarations, Self::emit_expression);
                self.write_semicolon();
            }
            NodeKind::FunctionDeclaration(data) => self.emit_function(data, false),
            NodeKind::ClassDeclaration(data) => self.emit_class(data),
            NodeKind::ExpressionStatement(data) => {
                let leftmost = self.leftmost(data.expression);
                let needs_parens = matches!(
                    arena.kind(leftmost),
                    Some(
                        NodeKind::ObjectLiteral(_)
                            | NodeKind::ObjectPattern(_)
                            | NodeKind::FunctionExpression(_)
                            | NodeKind::ClassExpression(_)
                    )
                );
                if needs_parens {
                    self.write_char('(');
                    self.emit_expression(data.expression);
                    self.write_char(')');
                } else {
                    self.emit_expression(data.expression);
                }
                self.write_semicolon();
            }
            NodeKind::ReturnStatement(data) => {
                self.write("return");
                if data.expression.is_some() {
                    self.write_space();
                    self.emit_expression(data.expression);
                }
                self.write_semicolon();
            }
            NodeKind::ImportDeclaration(data) => {
                self.write("import ");
                if !data.specifiers.is_empty() {
                    self.emit_import_clause(&data.specifiers.nodes);
                    self.write(" from ");
                }
                if let Some(url) = arena.string_literal_value(data.source) {
                    self.write(&quote_string(url));
                }
                self.write_semicolon();
            }
            _ => self.emit_expression(idx),
        }
    }

    /// `def, * as ns` or `def, { a, b as c }`.
    fn emit_import_clause(&mut self, specifiers: &[NodeIndex]) {
        let arena = self.arena;
        let mut first = true;
        let mut named = Vec::new();
        for &spec in specifiers {
            match arena.kind(spec) {
                Some(NodeKind::ImportDefaultSpecifier(data)) => {
                    if !first {
                        self.write(", ");
                    }
                    self.write_identifier_text(data.local);
                    first = false;
                }
                Some(NodeKind::ImportNamespaceSpecifier(data)) => {
                    if !first {
                        self.write(", ");
                    }
                    self.write("* as ");
                    self.write_identifier_text(data.local);
                    first = false;
                }
                Some(NodeKind::ImportSpecifier(_)) => named.push(spec),
                _ => {}
            }
        }
        if named.is_empty() {
            return;
        }
        if !first {
            self.write(", ");
        }
        self.write("{ ");
        for (i, &spec) in named.iter().enumerate() {
            if i > 0 {
                self.write(", ");
            }
            self.emit_import_specifier(spec);
        }
        self.write(" }");
    }

    pub(super) fn emit_import_specifier(&mut self, spec: NodeIndex) {
        let arena = self.arena;
        let Some(NodeKind::ImportSpecifier(data)) = arena.kind(spec) else {
            return;
        };
        let local = arena.identifier_text(data.local);
        // `import { "to-string" as toString }`: a string name always needs a local.
        if let Some(name) = arena.string_literal_value(data.imported) {
            self.write(&quote_string(name));
            self.write(" as ");
            self.write(local.unwrap_or_default());
            return;
        }
        let imported = arena.identifier_text(data.imported);
        self.write(imported.unwrap_or_default());
        if local.is_some() && local != imported {
            self.write(" as ");
            self.write(local.unwrap_or_default());
        }
    }
}
