//! NodeArena access methods: typed getters, parent navigation, and the
//! referenced-identifier test.

use crate::base::{NodeIndex, NodeList};
use crate::node::*;
use shimkit_common::SourceType;
use smallvec::SmallVec;

/// Children of one node, in source order.
pub type Children = SmallVec<[NodeIndex; 4]>;

impl NodeArena {
    #[inline]
    pub fn get(&self, index: NodeIndex) -> Option<&Node> {
        if index.is_none() {
            None
        } else {
            self.nodes.get(index.as_usize())
        }
    }

    #[inline]
    pub fn get_mut(&mut self, index: NodeIndex) -> Option<&mut Node> {
        if index.is_none() {
            None
        } else {
            self.nodes.get_mut(index.as_usize())
        }
    }

    #[inline]
    pub fn kind(&self, index: NodeIndex) -> Option<&NodeKind> {
        self.get(index).map(|node| &node.kind)
    }

    /// Parent of `index`, or `NONE` for roots and detached nodes.
    #[inline]
    pub fn parent_of(&self, index: NodeIndex) -> NodeIndex {
        self.get(index).map_or(NodeIndex::NONE, Node::parent)
    }

    /// Strict ancestors of `index`, innermost first.
    pub fn ancestors(&self, index: NodeIndex) -> impl Iterator<Item = NodeIndex> + '_ {
        std::iter::successors(Some(self.parent_of(index)), |&current| {
            Some(self.parent_of(current))
        })
        .take_while(|idx| idx.is_some())
    }

    /// The `SourceFile` containing `index` (or `index` itself if it is one).
    pub fn enclosing_source_file(&self, index: NodeIndex) -> Option<NodeIndex> {
        std::iter::once(index)
            .chain(self.ancestors(index))
            .find(|&idx| matches!(self.kind(idx), Some(NodeKind::SourceFile(_))))
    }

    pub fn source_type_of(&self, source_file: NodeIndex) -> Option<SourceType> {
        match self.kind(source_file)? {
            NodeKind::SourceFile(data) => Some(data.source_type),
            _ => None,
        }
    }

    /// Statement list of a source file or block.
    pub fn statements_of(&self, container: NodeIndex) -> Option<&NodeList> {
        match self.kind(container)? {
            NodeKind::SourceFile(data) => Some(&data.statements),
            NodeKind::Block(data) => Some(&data.statements),
            _ => None,
        }
    }

    pub fn children(&self, index: NodeIndex) -> Children {
        self.kind(index)
            .map(Self::children_of_kind)
            .unwrap_or_default()
    }

    pub(crate) fn children_of_kind(kind: &NodeKind) -> Children {
        fn push(children: &mut Children, idx: NodeIndex) {
            if idx.is_some() {
                children.push(idx);
            }
        }

        let mut children = Children::new();
        match kind {
            NodeKind::SourceFile(data) => children.extend(data.statements.nodes.iter().copied()),
            NodeKind::Block(data) => children.extend(data.statements.nodes.iter().copied()),
            NodeKind::VariableStatement(data) => {
                children.extend(data.declarations.nodes.iter().copied());
            }
            NodeKind::VariableDeclarator(data) => {
                push(&mut children, data.name);
                push(&mut children, data.initializer);
            }
            NodeKind::FunctionDeclaration(data)
            | NodeKind::FunctionExpression(data)
            | NodeKind::ArrowFunction(data) => {
                push(&mut children, data.name);
                children.extend(data.parameters.nodes.iter().copied());
                push(&mut children, data.body);
            }
            NodeKind::ClassDeclaration(data) | NodeKind::ClassExpression(data) => {
                push(&mut children, data.name);
                push(&mut children, data.heritage);
            }
            NodeKind::Parameter(data) => {
                push(&mut children, data.name);
                push(&mut children, data.initializer);
            }
            NodeKind::ExpressionStatement(data) => push(&mut children, data.expression),
            NodeKind::ReturnStatement(data) => push(&mut children, data.expression),
            NodeKind::ImportDeclaration(data) => {
                children.extend(data.specifiers.nodes.iter().copied());
                push(&mut children, data.source);
            }
            NodeKind::ImportSpecifier(data) => {
                push(&mut children, data.imported);
                push(&mut children, data.local);
            }
            NodeKind::ImportDefaultSpecifier(data) | NodeKind::ImportNamespaceSpecifier(data) => {
                push(&mut children, data.local);
            }
            NodeKind::TemplateLiteral(data) => {
                children.extend(data.expressions.nodes.iter().copied());
            }
            NodeKind::ObjectLiteral(list)
            | NodeKind::ArrayLiteral(list)
            | NodeKind::ObjectPattern(list)
            | NodeKind::ArrayPattern(list) => children.extend(list.nodes.iter().copied()),
            NodeKind::PropertyAssignment(data) => {
                push(&mut children, data.key);
                push(&mut children, data.value);
            }
            NodeKind::SpreadElement(expr) => push(&mut children, *expr),
            NodeKind::MemberExpression(data) => {
                push(&mut children, data.object);
                push(&mut children, data.property);
            }
            NodeKind::CallExpression(data) | NodeKind::NewExpression(data) => {
                push(&mut children, data.callee);
                children.extend(data.arguments.nodes.iter().copied());
            }
            NodeKind::AssignmentExpression(data) => {
                push(&mut children, data.target);
                push(&mut children, data.value);
            }
            NodeKind::UpdateExpression(data) => push(&mut children, data.operand),
            NodeKind::BinaryExpression(data) => {
                push(&mut children, data.left);
                push(&mut children, data.right);
            }
            NodeKind::UnaryExpression(data) => push(&mut children, data.operand),
            NodeKind::ConditionalExpression(data) => {
                push(&mut children, data.condition);
                push(&mut children, data.when_true);
                push(&mut children, data.when_false);
            }
            NodeKind::Identifier(_)
            | NodeKind::StringLiteral(_)
            | NodeKind::NumericLiteral(_)
            | NodeKind::BooleanLiteral(_)
            | NodeKind::NullLiteral
            | NodeKind::RegExpLiteral(_)
            | NodeKind::ThisExpression => {}
        }
        children
    }

    // ============================================================================
    // Typed Getters
    // ============================================================================

    #[inline]
    pub fn get_identifier(&self, index: NodeIndex) -> Option<&IdentifierData> {
        match self.kind(index)? {
            NodeKind::Identifier(data) => Some(data),
            _ => None,
        }
    }

    /// Text of an identifier node.
    #[inline]
    pub fn identifier_text(&self, index: NodeIndex) -> Option<&str> {
        self.get_identifier(index)
            .map(|data| data.escaped_text.as_str())
    }

    #[inline]
    pub fn is_identifier(&self, index: NodeIndex) -> bool {
        self.get_identifier(index).is_some()
    }

    pub fn is_identifier_named(&self, index: NodeIndex, name: &str) -> bool {
        self.identifier_text(index) == Some(name)
    }

    pub fn string_literal_value(&self, index: NodeIndex) -> Option<&str> {
        match self.kind(index)? {
            NodeKind::StringLiteral(value) => Some(value),
            _ => None,
        }
    }

    pub fn get_member_expr(&self, index: NodeIndex) -> Option<&MemberExpressionData> {
        match self.kind(index)? {
            NodeKind::MemberExpression(data) => Some(data),
            _ => None,
        }
    }

    pub fn get_call_expr(&self, index: NodeIndex) -> Option<&CallExprData> {
        match self.kind(index)? {
            NodeKind::CallExpression(data) => Some(data),
            _ => None,
        }
    }

    pub fn get_variable_declarator(&self, index: NodeIndex) -> Option<&VariableDeclaratorData> {
        match self.kind(index)? {
            NodeKind::VariableDeclarator(data) => Some(data),
            _ => None,
        }
    }

    // ============================================================================
    // Reference Classification
    // ============================================================================

    /// Whether `index` is an identifier read as a value (as opposed to a
    /// property name, declaration name, or binding target).
    pub fn is_referenced_identifier(&self, index: NodeIndex) -> bool {
        if !self.is_identifier(index) {
            return false;
        }
        let parent = self.parent_of(index);
        let Some(parent_kind) = self.kind(parent) else {
            return true;
        };
        match parent_kind {
            NodeKind::MemberExpression(data) => data.computed || data.property != index,
            NodeKind::PropertyAssignment(data) => {
                if data.key == index {
                    return data.computed;
                }
                // Value position inside a destructuring pattern is a binding target.
                !matches!(self.kind(self.parent_of(parent)), Some(NodeKind::ObjectPattern(_)))
            }
            NodeKind::VariableDeclarator(data) => data.name != index,
            NodeKind::Parameter(data) => data.name != index,
            NodeKind::FunctionDeclaration(data)
            | NodeKind::FunctionExpression(data)
            | NodeKind::ArrowFunction(data) => data.name != index,
            NodeKind::ClassDeclaration(data) | NodeKind::ClassExpression(data) => {
                data.name != index
            }
            NodeKind::ArrayPattern(_)
            | NodeKind::ObjectPattern(_)
            | NodeKind::ImportSpecifier(_)
            | NodeKind::ImportDefaultSpecifier(_)
            | NodeKind::ImportNamespaceSpecifier(_) => false,
            _ => true,
        }
    }
}
