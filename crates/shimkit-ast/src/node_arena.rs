//! NodeArena creation methods (add_* methods).
//!
//! Children must exist before their parent is added; each method records the
//! new node as the parent of every child it is given.

use crate::base::{ArenaId, NodeIndex, NodeList};
use crate::node::*;
use shimkit_common::SourceType;

impl NodeArena {
    pub fn new() -> NodeArena {
        NodeArena::default()
    }

    pub fn with_capacity(capacity: usize) -> NodeArena {
        NodeArena {
            id: ArenaId::fresh(),
            nodes: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    #[must_use]
    pub const fn id(&self) -> ArenaId {
        self.id
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    // ============================================================================
    // Parent Mapping Helpers
    // ============================================================================

    #[inline]
    fn set_parent(&mut self, child: NodeIndex, parent: NodeIndex) {
        if let Some(node) = self.get_mut(child) {
            node.parent = parent;
        }
    }

    fn push(&mut self, kind: NodeKind) -> NodeIndex {
        let index = NodeIndex(self.nodes.len() as u32);
        let children = Self::children_of_kind(&kind);
        self.nodes.push(Node {
            kind,
            parent: NodeIndex::NONE,
        });
        for child in children {
            self.set_parent(child, index);
        }
        index
    }

    // ============================================================================
    // Units and Statements
    // ============================================================================

    pub fn add_source_file(&mut self, statements: Vec<NodeIndex>, source_type: SourceType) -> NodeIndex {
        self.push(NodeKind::SourceFile(SourceFileData {
            statements: NodeList::new(statements),
            source_type,
        }))
    }

    pub fn add_block(&mut self, statements: Vec<NodeIndex>) -> NodeIndex {
        self.push(NodeKind::Block(BlockData {
            statements: NodeList::new(statements),
        }))
    }

    pub fn add_variable_declarator(&mut self, name: NodeIndex, initializer: NodeIndex) -> NodeIndex {
        self.push(NodeKind::VariableDeclarator(VariableDeclaratorData { name, initializer }))
    }

    pub fn add_variable_statement(
        &mut self,
        kind: VariableKind,
        declarations: Vec<NodeIndex>,
    ) -> NodeIndex {
        self.push(NodeKind::VariableStatement(VariableStatementData {
            kind,
            declarations: NodeList::new(declarations),
        }))
    }

    pub fn add_function_declaration(
        &mut self,
        name: NodeIndex,
        parameters: Vec<NodeIndex>,
        body: NodeIndex,
    ) -> NodeIndex {
        self.push(NodeKind::FunctionDeclaration(FunctionData {
            name,
            parameters: NodeList::new(parameters),
            body,
        }))
    }

    pub fn add_class_declaration(&mut self, name: NodeIndex, heritage: NodeIndex) -> NodeIndex {
        self.push(NodeKind::ClassDeclaration(ClassData { name, heritage }))
    }

    pub fn add_parameter(&mut self, name: NodeIndex, initializer: NodeIndex) -> NodeIndex {
        self.push(NodeKind::Parameter(ParameterData { name, initializer }))
    }

    pub fn add_expression_statement(&mut self, expression: NodeIndex) -> NodeIndex {
        self.push(NodeKind::ExpressionStatement(ExpressionStatementData {
            expression,
        }))
    }

    pub fn add_return_statement(&mut self, expression: NodeIndex) -> NodeIndex {
        self.push(NodeKind::ReturnStatement(ReturnData { expression }))
    }

    pub fn add_import_declaration(&mut self, specifiers: Vec<NodeIndex>, source: NodeIndex) -> NodeIndex {
        self.push(NodeKind::ImportDeclaration(ImportDeclarationData {
            specifiers: NodeList::new(specifiers),
            source,
        }))
    }

    pub fn add_import_specifier(&mut self, imported: NodeIndex, local: NodeIndex) -> NodeIndex {
        self.push(NodeKind::ImportSpecifier(ImportSpecifierData { imported, local }))
    }

    pub fn add_import_default_specifier(&mut self, local: NodeIndex) -> NodeIndex {
        self.push(NodeKind::ImportDefaultSpecifier(ImportLocalData { local }))
    }

    pub fn add_import_namespace_specifier(&mut self, local: NodeIndex) -> NodeIndex {
        self.push(NodeKind::ImportNamespaceSpecifier(ImportLocalData { local }))
    }

    // ============================================================================
    // Expressions
    // ============================================================================

    pub fn add_identifier(&mut self, text: impl Into<String>) -> NodeIndex {
        self.push(NodeKind::Identifier(IdentifierData {
            escaped_text: text.into(),
        }))
    }

    pub fn add_string_literal(&mut self, value: impl Into<String>) -> NodeIndex {
        self.push(NodeKind::StringLiteral(value.into()))
    }

    pub fn add_numeric_literal(&mut self, value: f64) -> NodeIndex {
        self.push(NodeKind::NumericLiteral(value))
    }

    pub fn add_boolean_literal(&mut self, value: bool) -> NodeIndex {
        self.push(NodeKind::BooleanLiteral(value))
    }

    pub fn add_null_literal(&mut self) -> NodeIndex {
        self.push(NodeKind::NullLiteral)
    }

    pub fn add_regexp_literal(&mut self, pattern: impl Into<String>, flags: impl Into<String>) -> NodeIndex {
        self.push(NodeKind::RegExpLiteral(RegExpData {
            pattern: pattern.into(),
            flags: flags.into(),
        }))
    }

    pub fn add_template_literal(&mut self, quasis: Vec<String>, expressions: Vec<NodeIndex>) -> NodeIndex {
        debug_assert_eq!(quasis.len(), expressions.len() + 1);
        self.push(NodeKind::TemplateLiteral(TemplateData {
            quasis,
            expressions: NodeList::new(expressions),
        }))
    }

    pub fn add_object_literal(&mut self, properties: Vec<NodeIndex>) -> NodeIndex {
        self.push(NodeKind::ObjectLiteral(NodeList::new(properties)))
    }

    pub fn add_property_assignment(&mut self, key: NodeIndex, value: NodeIndex, computed: bool) -> NodeIndex {
        self.push(NodeKind::PropertyAssignment(PropertyData {
            key,
            value,
            computed,
            shorthand: false,
        }))
    }

    /// `{ name }`: the key and the value are distinct identifier nodes.
    pub fn add_shorthand_property(&mut self, name: &str) -> NodeIndex {
        let key = self.add_identifier(name);
        let value = self.add_identifier(name);
        self.push(NodeKind::PropertyAssignment(PropertyData {
            key,
            value,
            computed: false,
            shorthand: true,
        }))
    }

    pub fn add_spread_element(&mut self, expression: NodeIndex) -> NodeIndex {
        self.push(NodeKind::SpreadElement(expression))
    }

    pub fn add_array_literal(&mut self, elements: Vec<NodeIndex>) -> NodeIndex {
        self.push(NodeKind::ArrayLiteral(NodeList::new(elements)))
    }

    pub fn add_function_expression(
        &mut self,
        name: NodeIndex,
        parameters: Vec<NodeIndex>,
        body: NodeIndex,
    ) -> NodeIndex {
        self.push(NodeKind::FunctionExpression(FunctionData {
            name,
            parameters: NodeList::new(parameters),
            body,
        }))
    }

    pub fn add_arrow_function(&mut self, parameters: Vec<NodeIndex>, body: NodeIndex) -> NodeIndex {
        self.push(NodeKind::ArrowFunction(FunctionData {
            name: NodeIndex::NONE,
            parameters: NodeList::new(parameters),
            body,
        }))
    }

    pub fn add_class_expression(&mut self, name: NodeIndex, heritage: NodeIndex) -> NodeIndex {
        self.push(NodeKind::ClassExpression(ClassData { name, heritage }))
    }

    pub fn add_member_expression(&mut self, object: NodeIndex, property: NodeIndex, computed: bool) -> NodeIndex {
        self.push(NodeKind::MemberExpression(MemberExpressionData {
            object,
            property,
            computed,
        }))
    }

    /// `object.name`, creating the property identifier.
    pub fn add_property_access(&mut self, object: NodeIndex, name: &str) -> NodeIndex {
        let property = self.add_identifier(name);
        self.add_member_expression(object, property, false)
    }

    pub fn add_call_expression(&mut self, callee: NodeIndex, arguments: Vec<NodeIndex>) -> NodeIndex {
        self.push(NodeKind::CallExpression(CallExprData {
            callee,
            arguments: NodeList::new(arguments),
        }))
    }

    pub fn add_new_expression(&mut self, callee: NodeIndex, arguments: Vec<NodeIndex>) -> NodeIndex {
        self.push(NodeKind::NewExpression(CallExprData {
            callee,
            arguments: NodeList::new(arguments),
        }))
    }

    pub fn add_assignment(
        &mut self,
        operator: AssignmentOperator,
        target: NodeIndex,
        value: NodeIndex,
    ) -> NodeIndex {
        self.push(NodeKind::AssignmentExpression(AssignmentData {
            operator,
            target,
            value,
        }))
    }

    pub fn add_update_expression(&mut self, operator: UpdateOperator, prefix: bool, operand: NodeIndex) -> NodeIndex {
        self.push(NodeKind::UpdateExpression(UpdateData {
            operator,
            prefix,
            operand,
        }))
    }

    pub fn add_binary_expression(
        &mut self,
        operator: BinaryOperator,
        left: NodeIndex,
        right: NodeIndex,
    ) -> NodeIndex {
        self.push(NodeKind::BinaryExpression(BinaryExprData {
            operator,
            left,
            right,
        }))
    }

    pub fn add_unary_expression(&mut self, operator: UnaryOperator, operand: NodeIndex) -> NodeIndex {
        self.push(NodeKind::UnaryExpression(UnaryExprData { operator, operand }))
    }

    pub fn add_conditional_expression(
        &mut self,
        condition: NodeIndex,
        when_true: NodeIndex,
        when_false: NodeIndex,
    ) -> NodeIndex {
        self.push(NodeKind::ConditionalExpression(ConditionalExprData {
            condition,
            when_true,
            when_false,
        }))
    }

    pub fn add_this_expression(&mut self) -> NodeIndex {
        self.push(NodeKind::ThisExpression)
    }

    // ============================================================================
    // Binding Patterns
    // ============================================================================

    pub fn add_object_pattern(&mut self, properties: Vec<NodeIndex>) -> NodeIndex {
        self.push(NodeKind::ObjectPattern(NodeList::new(properties)))
    }

    pub fn add_array_pattern(&mut self, elements: Vec<NodeIndex>) -> NodeIndex {
        self.push(NodeKind::ArrayPattern(NodeList::new(elements)))
    }

    // ============================================================================
    // Statement List Editing
    // ============================================================================

    /// Replace the statements of a source file or block, re-parenting them.
    /// Returns `false` when `container` holds no statement list.
    pub fn set_statements(&mut self, container: NodeIndex, statements: Vec<NodeIndex>) -> bool {
        let Some(node) = self.get_mut(container) else {
            return false;
        };
        match &mut node.kind {
            NodeKind::SourceFile(SourceFileData { statements: list, .. })
            | NodeKind::Block(BlockData { statements: list }) => {
                list.nodes.clone_from(&statements);
            }
            _ => return false,
        }
        for stmt in statements {
            self.set_parent(stmt, container);
        }
        true
    }
}
