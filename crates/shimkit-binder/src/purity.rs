//! Side-effect freedom of expressions.

use shimkit_ast::{NodeArena, NodeIndex, NodeKind, UnaryOperator};

use crate::state::BinderState;

impl BinderState {
    /// Whether evaluating `node` can have no observable side effect.
    ///
    /// Member reads are impure (getters), as are calls, assignments and
    /// updates. Identifiers are pure only when they have a binding in scope.
    pub fn is_pure(&self, arena: &NodeArena, node: NodeIndex) -> bool {
        let Some(kind) = arena.kind(node) else {
            return false;
        };
        match kind {
            NodeKind::StringLiteral(_)
            | NodeKind::NumericLiteral(_)
            | NodeKind::BooleanLiteral(_)
            | NodeKind::NullLiteral
            | NodeKind::RegExpLiteral(_)
            | NodeKind::ThisExpression
            | NodeKind::FunctionExpression(_)
            | NodeKind::ArrowFunction(_)
            | NodeKind::FunctionDeclaration(_) => true,
            NodeKind::Identifier(data) => self
                .lookup_binding_id(arena, node, &data.escaped_text)
                .is_some(),
            NodeKind::TemplateLiteral(data) => data
                .expressions
                .nodes
                .iter()
                .all(|&expr| self.is_pure(arena, expr)),
            NodeKind::ClassExpression(data) | NodeKind::ClassDeclaration(data) => {
                data.heritage.is_none() || self.is_pure(arena, data.heritage)
            }
            NodeKind::ArrayLiteral(list) => list.nodes.iter().all(|&element| {
                !matches!(arena.kind(element), Some(NodeKind::SpreadElement(_)))
                    && self.is_pure(arena, element)
            }),
            NodeKind::ObjectLiteral(list) => list.nodes.iter().all(|&prop| match arena.kind(prop) {
                Some(NodeKind::PropertyAssignment(data)) => {
                    (!data.computed || self.is_pure(arena, data.key))
                        && self.is_pure(arena, data.value)
                }
                _ => false,
            }),
            NodeKind::UnaryExpression(data) => {
                data.operator != UnaryOperator::Delete && self.is_pure(arena, data.operand)
            }
            NodeKind::BinaryExpression(data) => {
                self.is_pure(arena, data.left) && self.is_pure(arena, data.right)
            }
            NodeKind::ConditionalExpression(data) => {
                self.is_pure(arena, data.condition)
                    && self.is_pure(arena, data.when_true)
                    && self.is_pure(arena, data.when_false)
            }
            NodeKind::SourceFile(_)
            | NodeKind::Block(_)
            | NodeKind::VariableStatement(_)
            | NodeKind::VariableDeclarator(_)
            | NodeKind::ExpressionStatement(_)
            | NodeKind::ReturnStatement(_)
            | NodeKind::ImportDeclaration(_)
            | NodeKind::ImportSpecifier(_)
            | NodeKind::ImportDefaultSpecifier(_)
            | NodeKind::ImportNamespaceSpecifier(_)
            | NodeKind::Parameter(_)
            | NodeKind::PropertyAssignment(_)
            | NodeKind::SpreadElement(_)
            | NodeKind::MemberExpression(_)
            | NodeKind::CallExpression(_)
            | NodeKind::NewExpression(_)
            | NodeKind::AssignmentExpression(_)
            | NodeKind::UpdateExpression(_)
            | NodeKind::ObjectPattern(_)
            | NodeKind::ArrayPattern(_) => false,
        }
    }
}
