use shimkit_ast::node::{ClassData, FunctionData};
use shimkit_ast::{
    BinaryOperator, NodeIndex, NodeKind, UnaryOperator, UpdateOperator,
};

use super::helpers::{escape_template, format_number, quote_string};
use super::{Printer, is_statement};

/// Binding power of an expression; a child printed where a higher value is
/// required gets parentheses.
mod precedence {
    pub const COMMA: u8 = 0;
    pub const ASSIGNMENT: u8 = 2;
    pub const CONDITIONAL: u8 = 3;
    pub const NULLISH: u8 = 4;
    pub const LOGICAL_OR: u8 = 5;
    pub const LOGICAL_AND: u8 = 6;
    pub const EQUALITY: u8 = 10;
    pub const RELATIONAL: u8 = 11;
    pub const ADDITIVE: u8 = 13;
    pub const MULTIPLICATIVE: u8 = 14;
    pub const EXPONENT: u8 = 15;
    pub const UNARY: u8 = 16;
    pub const POSTFIX: u8 = 17;
    pub const MEMBER: u8 = 19;
    pub const PRIMARY: u8 = 20;
}

const fn binary_precedence(operator: BinaryOperator) -> u8 {
    match operator {
        BinaryOperator::Nullish => precedence::NULLISH,
        BinaryOperator::LogicalOr => precedence::LOGICAL_OR,
        BinaryOperator::LogicalAnd => precedence::LOGICAL_AND,
        BinaryOperator::StrictEq | BinaryOperator::StrictNotEq => precedence::EQUALITY,
        BinaryOperator::Lt
        | BinaryOperator::LtEq
        | BinaryOperator::Gt
        | BinaryOperator::GtEq
        | BinaryOperator::In
        | BinaryOperator::InstanceOf => precedence::RELATIONAL,
        BinaryOperator::Add | BinaryOperator::Sub => precedence::ADDITIVE,
        BinaryOperator::Mul | BinaryOperator::Div | BinaryOperator::Mod => {
            precedence::MULTIPLICATIVE
        }
        BinaryOperator::Exp => precedence::EXPONENT,
    }
}

impl Printer<'_> {
    pub(super) fn emit_expression(&mut self, idx: NodeIndex) {
        self.emit_with_precedence(idx, precedence::COMMA);
    }

    fn emit_with_precedence(&mut self, idx: NodeIndex, required: u8) {
        if self.precedence(idx) < required {
            self.write_char('(');
            self.emit_node(idx);
            self.write_char(')');
        } else {
            self.emit_node(idx);
        }
    }

    fn precedence(&self, idx: NodeIndex) -> u8 {
        match self.arena.kind(idx) {
            Some(NodeKind::AssignmentExpression(_) | NodeKind::ArrowFunction(_)) => {
                precedence::ASSIGNMENT
            }
            Some(NodeKind::ConditionalExpression(_)) => precedence::CONDITIONAL,
            Some(NodeKind::BinaryExpression(data)) => binary_precedence(data.operator),
            Some(NodeKind::UnaryExpression(_)) => precedence::UNARY,
            Some(NodeKind::UpdateExpression(data)) => {
                if data.prefix {
                    precedence::UNARY
                } else {
                    precedence::POSTFIX
                }
            }
            Some(NodeKind::NumericLiteral(value)) if value.is_sign_negative() => precedence::UNARY,
            Some(
                NodeKind::MemberExpression(_)
                | NodeKind::CallExpression(_)
                | NodeKind::NewExpression(_),
            ) => precedence::MEMBER,
            _ => precedence::PRIMARY,
        }
    }

    /// Node whose text starts the rendering of `idx`.
    pub(super) fn leftmost(&self, idx: NodeIndex) -> NodeIndex {
        let mut current = idx;
        loop {
            let next = match self.arena.kind(current) {
                Some(NodeKind::MemberExpression(data)) => data.object,
                Some(NodeKind::CallExpression(data)) => data.callee,
                Some(NodeKind::BinaryExpression(data)) => data.left,
                Some(NodeKind::ConditionalExpression(data)) => data.condition,
                Some(NodeKind::AssignmentExpression(data)) => data.target,
                Some(NodeKind::UpdateExpression(data)) if !data.prefix => data.operand,
                _ => return current,
            };
            if self.precedence(next) < self.precedence(current) {
                return current;
            }
            current = next;
        }
    }

    fn emit_node(&mut self, idx: NodeIndex) {
        let arena = self.arena;
        let Some(kind) = arena.kind(idx) else {
            return;
        };
        match kind {
            NodeKind::Identifier(data) => self.write(&data.escaped_text),
            NodeKind::StringLiteral(value) => self.write(&quote_string(value)),
            NodeKind::NumericLiteral(value) => self.write(&format_number(*value)),
            NodeKind::BooleanLiteral(value) => self.write(if *value { "true" } else { "false" }),
            NodeKind::NullLiteral => self.write("null"),
            NodeKind::ThisExpression => self.write("this"),
            NodeKind::RegExpLiteral(data) => {
                self.write_char('/');
                self.write(&data.pattern);
                self.write_char('/');
                self.write(&data.flags);
            }
            NodeKind::TemplateLiteral(data) => {
                self.write_char('`');
                for (i, quasi) in data.quasis.iter().enumerate() {
                    self.write(&escape_template(quasi));
                    if let Some(&expr) = data.expressions.nodes.get(i) {
                        self.write("${");
                        self.emit_expression(expr);
                        self.write_char('}');
                    }
                }
                self.write_char('`');
            }
            NodeKind::ObjectLiteral(list) | NodeKind::ObjectPattern(list) => {
                if list.is_empty() {
                    self.write("{}");
                } else {
                    self.write("{ ");
                    self.emit_comma_list(list, Self::emit_list_element);
                    self.write(" }");
                }
            }
            NodeKind::ArrayLiteral(list) | NodeKind::ArrayPattern(list) => {
                self.write_char('[');
                self.emit_comma_list(list, Self::emit_list_element);
                self.write_char(']');
            }
            NodeKind::PropertyAssignment(data) => {
                if data.computed {
                    self.write_char('[');
                    self.emit_with_precedence(data.key, precedence::ASSIGNMENT);
                    self.write_char(']');
                } else {
                    self.emit_node(data.key);
                }
                if !data.shorthand {
                    self.write(": ");
                    self.emit_with_precedence(data.value, precedence::ASSIGNMENT);
                }
            }
            NodeKind::SpreadElement(expr) => {
                self.write("...");
                self.emit_with_precedence(*expr, precedence::ASSIGNMENT);
            }
            NodeKind::FunctionExpression(data) => self.emit_function(data, false),
            NodeKind::ArrowFunction(data) => self.emit_function(data, true),
            NodeKind::ClassExpression(data) => self.emit_class(data),
            NodeKind::Parameter(data) => {
                self.emit_node(data.name);
                if data.initializer.is_some() {
                    self.write(" = ");
                    self.emit_with_precedence(data.initializer, precedence::ASSIGNMENT);
                }
            }
            NodeKind::VariableDeclarator(data) => {
                self.emit_node(data.name);
                if data.initializer.is_some() {
                    self.write(" = ");
                    self.emit_with_precedence(data.initializer, precedence::ASSIGNMENT);
                }
            }
            NodeKind::MemberExpression(data) => {
                if !data.computed && self.is_integer_literal(data.object) {
                    self.write_char('(');
                    self.emit_node(data.object);
                    self.write_char(')');
                } else {
                    self.emit_with_precedence(data.object, precedence::MEMBER);
                }
                if data.computed {
                    self.write_char('[');
                    self.emit_expression(data.property);
                    self.write_char(']');
                } else {
                    self.write_char('.');
                    self.write_identifier_text(data.property);
                }
            }
            NodeKind::CallExpression(data) => {
                self.emit_with_precedence(data.callee, precedence::MEMBER);
                self.write_char('(');
                self.emit_comma_list(&data.arguments, Self::emit_list_element);
                self.write_char(')');
            }
            NodeKind::NewExpression(data) => {
                self.write("new ");
                if self.has_call_in_chain(data.callee) {
                    self.write_char('(');
                    self.emit_expression(data.callee);
                    self.write_char(')');
                } else {
                    self.emit_with_precedence(data.callee, precedence::MEMBER);
                }
                self.write_char('(');
                self.emit_comma_list(&data.arguments, Self::emit_list_element);
                self.write_char(')');
            }
            NodeKind::AssignmentExpression(data) => {
                self.emit_with_precedence(data.target, precedence::POSTFIX);
                self.write_space();
                self.write(data.operator.text());
                self.write_space();
                self.emit_with_precedence(data.value, precedence::ASSIGNMENT);
            }
            NodeKind::UpdateExpression(data) => {
                let operator = match data.operator {
                    UpdateOperator::Increment => "++",
                    UpdateOperator::Decrement => "--",
                };
                if data.prefix {
                    self.write(operator);
                    self.emit_with_precedence(data.operand, precedence::UNARY);
                } else {
                    self.emit_with_precedence(data.operand, precedence::POSTFIX);
                    self.write(operator);
                }
            }
            NodeKind::UnaryExpression(data) => {
                self.write(data.operator.text());
                if self.operand_merges_with(data.operator, data.operand) {
                    self.write_space();
                }
                self.emit_with_precedence(data.operand, precedence::UNARY);
            }
            NodeKind::BinaryExpression(data) => {
                let own = binary_precedence(data.operator);
                let (left_min, right_min) = match data.operator {
                    // `**` is right-associative and rejects a unary left operand.
                    BinaryOperator::Exp => (precedence::POSTFIX, own),
                    // `??` cannot mix with `||`/`&&` without parentheses.
                    BinaryOperator::Nullish => {
                        let left = if self.is_nullish(data.left) {
                            own
                        } else {
                            precedence::LOGICAL_AND + 1
                        };
                        (left, precedence::LOGICAL_AND + 1)
                    }
                    _ => (own, own + 1),
                };
                self.emit_with_precedence(data.left, left_min);
                self.write_space();
                self.write(data.operator.text());
                self.write_space();
                self.emit_with_precedence(data.right, right_min);
            }
            NodeKind::ConditionalExpression(data) => {
                self.emit_with_precedence(data.condition, precedence::NULLISH);
                self.write(" ? ");
                self.emit_with_precedence(data.when_true, precedence::ASSIGNMENT);
                self.write(" : ");
                self.emit_with_precedence(data.when_false, precedence::ASSIGNMENT);
            }
            NodeKind::ImportSpecifier(_) => self.emit_import_specifier(idx),
            NodeKind::ImportDefaultSpecifier(data) => self.write_identifier_text(data.local),
            NodeKind::ImportNamespaceSpecifier(data) => {
                self.write("* as ");
                self.write_identifier_text(data.local);
            }
            _ if is_statement(kind) => self.emit_statement(idx),
            _ => {}
        }
    }

    fn emit_list_element(&mut self, idx: NodeIndex) {
        self.emit_with_precedence(idx, precedence::ASSIGNMENT);
    }

    pub(super) fn emit_function(&mut self, data: &FunctionData, arrow: bool) {
        let arena = self.arena;
        if !arrow {
            self.write("function");
            if data.name.is_some() {
                self.write_space();
                self.write_identifier_text(data.name);
            }
        }
        self.write_char('(');
        self.emit_comma_list(&data.parameters, Self::emit_node);
        self.write_char(')');
        if arrow {
            self.write(" =>");
        }
        self.write_space();
        match arena.kind(data.body) {
            Some(NodeKind::Block(_)) => self.emit_statement(data.body),
            Some(_) => {
                let leftmost = self.leftmost(data.body);
                if matches!(arena.kind(leftmost), Some(NodeKind::ObjectLiteral(_))) {
                    self.write_char('(');
                    self.emit_expression(data.body);
                    self.write_char(')');
                } else {
                    self.emit_with_precedence(data.body, precedence::ASSIGNMENT);
                }
            }
            None => self.write("{}"),
        }
    }

    pub(super) fn emit_class(&mut self, data: &ClassData) {
        self.write("class");
        if data.name.is_some() {
            self.write_space();
            self.write_identifier_text(data.name);
        }
        if data.heritage.is_some() {
            self.write(" extends ");
            self.emit_with_precedence(data.heritage, precedence::MEMBER);
        }
        self.write(" {}");
    }

    /// Whether `-x`/`+x` printed without a space would fuse into `--`/`++`.
    fn operand_merges_with(&self, operator: UnaryOperator, operand: NodeIndex) -> bool {
        let sign = match operator {
            UnaryOperator::Minus => UnaryOperator::Minus,
            UnaryOperator::Plus => UnaryOperator::Plus,
            _ => return false,
        };
        match self.arena.kind(operand) {
            Some(NodeKind::UnaryExpression(data)) => data.operator == sign,
            Some(NodeKind::UpdateExpression(data)) => {
                data.prefix
                    && matches!(
                        (sign, data.operator),
                        (UnaryOperator::Minus, UpdateOperator::Decrement)
                            | (UnaryOperator::Plus, UpdateOperator::Increment)
                    )
            }
            Some(NodeKind::NumericLiteral(value)) => {
                sign == UnaryOperator::Minus && value.is_sign_negative()
            }
            _ => false,
        }
    }

    /// `1.toString()` does not parse; `(1).toString()` does.
    fn is_integer_literal(&self, idx: NodeIndex) -> bool {
        let Some(NodeKind::NumericLiteral(value)) = self.arena.kind(idx) else {
            return false;
        };
        let text = format_number(*value);
        value.is_finite() && !text.contains('.') && !text.contains('e')
    }

    fn is_nullish(&self, idx: NodeIndex) -> bool {
        matches!(
            self.arena.kind(idx),
            Some(NodeKind::BinaryExpression(data)) if data.operator == BinaryOperator::Nullish
        )
    }

    /// Whether a `new` callee contains a call that would otherwise bind the
    /// `new` arguments.
    fn has_call_in_chain(&self, callee: NodeIndex) -> bool {
        let mut current = callee;
        loop {
            match self.arena.kind(current) {
                Some(NodeKind::CallExpression(_)) => return true,
                Some(NodeKind::MemberExpression(data)) => current = data.object,
                _ => return false,
            }
        }
    }
}
