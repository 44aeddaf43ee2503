//! Node kinds and the arena that owns them.
//!
//! `NodeKind` is a closed tagged variant: every consumer matches it
//! exhaustively (or with an explicit wildcard), so adding a kind is a
//! compile-time change everywhere it matters.

use crate::base::{ArenaId, NodeIndex, NodeList};
use shimkit_common::SourceType;

/// A node in the program graph.
#[derive(Clone, Debug)]
pub struct Node {
    pub kind: NodeKind,
    pub(crate) parent: NodeIndex,
}

impl Node {
    #[inline]
    #[must_use]
    pub const fn parent(&self) -> NodeIndex {
        self.parent
    }
}

#[derive(Clone, Debug)]
pub enum NodeKind {
    // Units and statements
    SourceFile(SourceFileData),
    Block(BlockData),
    VariableStatement(VariableStatementData),
    VariableDeclarator(VariableDeclaratorData),
    FunctionDeclaration(FunctionData),
    ClassDeclaration(ClassData),
    ExpressionStatement(ExpressionStatementData),
    ReturnStatement(ReturnData),
    ImportDeclaration(ImportDeclarationData),
    ImportSpecifier(ImportSpecifierData),
    ImportDefaultSpecifier(ImportLocalData),
    ImportNamespaceSpecifier(ImportLocalData),
    Parameter(ParameterData),

    // Expressions
    Identifier(IdentifierData),
    StringLiteral(String),
    NumericLiteral(f64),
    BooleanLiteral(bool),
    NullLiteral,
    RegExpLiteral(RegExpData),
    TemplateLiteral(TemplateData),
    ObjectLiteral(NodeList),
    PropertyAssignment(PropertyData),
    SpreadElement(NodeIndex),
    ArrayLiteral(NodeList),
    FunctionExpression(FunctionData),
    ArrowFunction(FunctionData),
    ClassExpression(ClassData),
    MemberExpression(MemberExpressionData),
    CallExpression(CallExprData),
    NewExpression(CallExprData),
    AssignmentExpression(AssignmentData),
    UpdateExpression(UpdateData),
    BinaryExpression(BinaryExprData),
    UnaryExpression(UnaryExprData),
    ConditionalExpression(ConditionalExprData),
    ThisExpression,

    // Binding patterns
    ObjectPattern(NodeList),
    ArrayPattern(NodeList),
}

impl NodeKind {
    /// Stable kind name, used in logs and diagnostics.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::SourceFile(_) => "SourceFile",
            Self::Block(_) => "Block",
            Self::VariableStatement(_) => "VariableStatement",
            Self::VariableDeclarator(_) => "VariableDeclarator",
            Self::FunctionDeclaration(_) => "FunctionDeclaration",
            Self::ClassDeclaration(_) => "ClassDeclaration",
            Self::ExpressionStatement(_) => "ExpressionStatement",
            Self::ReturnStatement(_) => "ReturnStatement",
            Self::ImportDeclaration(_) => "ImportDeclaration",
            Self::ImportSpecifier(_) => "ImportSpecifier",
            Self::ImportDefaultSpecifier(_) => "ImportDefaultSpecifier",
            Self::ImportNamespaceSpecifier(_) => "ImportNamespaceSpecifier",
            Self::Parameter(_) => "Parameter",
            Self::Identifier(_) => "Identifier",
            Self::StringLiteral(_) => "StringLiteral",
            Self::NumericLiteral(_) => "NumericLiteral",
            Self::BooleanLiteral(_) => "BooleanLiteral",
            Self::NullLiteral => "NullLiteral",
            Self::RegExpLiteral(_) => "RegExpLiteral",
            Self::TemplateLiteral(_) => "TemplateLiteral",
            Self::ObjectLiteral(_) => "ObjectLiteral",
            Self::PropertyAssignment(_) => "PropertyAssignment",
            Self::SpreadElement(_) => "SpreadElement",
            Self::ArrayLiteral(_) => "ArrayLiteral",
            Self::FunctionExpression(_) => "FunctionExpression",
            Self::ArrowFunction(_) => "ArrowFunction",
            Self::ClassExpression(_) => "ClassExpression",
            Self::MemberExpression(_) => "MemberExpression",
            Self::CallExpression(_) => "CallExpression",
            Self::NewExpression(_) => "NewExpression",
            Self::AssignmentExpression(_) => "AssignmentExpression",
            Self::UpdateExpression(_) => "UpdateExpression",
            Self::BinaryExpression(_) => "BinaryExpression",
            Self::UnaryExpression(_) => "UnaryExpression",
            Self::ConditionalExpression(_) => "ConditionalExpression",
            Self::ThisExpression => "ThisExpression",
            Self::ObjectPattern(_) => "ObjectPattern",
            Self::ArrayPattern(_) => "ArrayPattern",
        }
    }

    #[must_use]
    pub const fn is_function_like(&self) -> bool {
        matches!(
            self,
            Self::FunctionDeclaration(_) | Self::FunctionExpression(_) | Self::ArrowFunction(_)
        )
    }
}

#[derive(Clone, Debug)]
pub struct SourceFileData {
    pub statements: NodeList,
    pub source_type: SourceType,
}

#[derive(Clone, Debug)]
pub struct BlockData {
    pub statements: NodeList,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VariableKind {
    Var,
    Let,
    Const,
}

impl VariableKind {
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Var => "var",
            Self::Let => "let",
            Self::Const => "const",
        }
    }
}

#[derive(Clone, Debug)]
pub struct VariableStatementData {
    pub kind: VariableKind,
    pub declarations: NodeList,
}

#[derive(Clone, Debug)]
pub struct VariableDeclaratorData {
    /// Identifier or binding pattern.
    pub name: NodeIndex,
    /// `NONE` when the declarator has no initializer.
    pub initializer: NodeIndex,
}

#[derive(Clone, Debug)]
pub struct FunctionData {
    /// `NONE` for anonymous functions and arrows.
    pub name: NodeIndex,
    pub parameters: NodeList,
    /// A `Block`, or an expression for concise arrow bodies.
    pub body: NodeIndex,
}

#[derive(Clone, Debug)]
pub struct ClassData {
    pub name: NodeIndex,
    pub heritage: NodeIndex,
}

#[derive(Clone, Debug)]
pub struct ParameterData {
    pub name: NodeIndex,
    pub initializer: NodeIndex,
}

#[derive(Clone, Debug)]
pub struct ExpressionStatementData {
    pub expression: NodeIndex,
}

#[derive(Clone, Debug)]
pub struct ReturnData {
    pub expression: NodeIndex,
}

#[derive(Clone, Debug)]
pub struct ImportDeclarationData {
    pub specifiers: NodeList,
    /// String literal holding the module URL.
    pub source: NodeIndex,
}

#[derive(Clone, Debug)]
pub struct ImportSpecifierData {
    pub imported: NodeIndex,
    pub local: NodeIndex,
}

#[derive(Clone, Debug)]
pub struct ImportLocalData {
    pub local: NodeIndex,
}

#[derive(Clone, Debug)]
pub struct IdentifierData {
    pub escaped_text: String,
}

#[derive(Clone, Debug)]
pub struct RegExpData {
    pub pattern: String,
    pub flags: String,
}

/// Template literal: `quasis.len() == expressions.len() + 1`.
#[derive(Clone, Debug)]
pub struct TemplateData {
    pub quasis: Vec<String>,
    pub expressions: NodeList,
}

#[derive(Clone, Debug)]
pub struct PropertyData {
    pub key: NodeIndex,
    pub value: NodeIndex,
    pub computed: bool,
    pub shorthand: bool,
}

#[derive(Clone, Debug)]
pub struct MemberExpressionData {
    pub object: NodeIndex,
    pub property: NodeIndex,
    pub computed: bool,
}

#[derive(Clone, Debug)]
pub struct CallExprData {
    pub callee: NodeIndex,
    pub arguments: NodeList,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AssignmentOperator {
    Assign,
    AddAssign,
    SubAssign,
    MulAssign,
    DivAssign,
    OrAssign,
    AndAssign,
    NullishAssign,
}

impl AssignmentOperator {
    #[must_use]
    pub const fn text(self) -> &'static str {
        match self {
            Self::Assign => "=",
            Self::AddAssign => "+=",
            Self::SubAssign => "-=",
            Self::MulAssign => "*=",
            Self::DivAssign => "/=",
            Self::OrAssign => "||=",
            Self::AndAssign => "&&=",
            Self::NullishAssign => "??=",
        }
    }
}

#[derive(Clone, Debug)]
pub struct AssignmentData {
    pub operator: AssignmentOperator,
    /// Identifier, member expression, or binding pattern.
    pub target: NodeIndex,
    pub value: NodeIndex,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UpdateOperator {
    Increment,
    Decrement,
}

#[derive(Clone, Debug)]
pub struct UpdateData {
    pub operator: UpdateOperator,
    pub prefix: bool,
    pub operand: NodeIndex,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BinaryOperator {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Exp,
    StrictEq,
    StrictNotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
    LogicalAnd,
    LogicalOr,
    Nullish,
    In,
    InstanceOf,
}

impl BinaryOperator {
    #[must_use]
    pub const fn text(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::Exp => "**",
            Self::StrictEq => "===",
            Self::StrictNotEq => "!==",
            Self::Lt => "<",
            Self::LtEq => "<=",
            Self::Gt => ">",
            Self::GtEq => ">=",
            Self::LogicalAnd => "&&",
            Self::LogicalOr => "||",
            Self::Nullish => "??",
            Self::In => "in",
            Self::InstanceOf => "instanceof",
        }
    }
}

#[derive(Clone, Debug)]
pub struct BinaryExprData {
    pub operator: BinaryOperator,
    pub left: NodeIndex,
    pub right: NodeIndex,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnaryOperator {
    Minus,
    Plus,
    Not,
    BitNot,
    TypeOf,
    Void,
    Delete,
}

impl UnaryOperator {
    #[must_use]
    pub const fn text(self) -> &'static str {
        match self {
            Self::Minus => "-",
            Self::Plus => "+",
            Self::Not => "!",
            Self::BitNot => "~",
            Self::TypeOf => "typeof ",
            Self::Void => "void ",
            Self::Delete => "delete ",
        }
    }
}

#[derive(Clone, Debug)]
pub struct UnaryExprData {
    pub operator: UnaryOperator,
    pub operand: NodeIndex,
}

#[derive(Clone, Debug)]
pub struct ConditionalExprData {
    pub condition: NodeIndex,
    pub when_true: NodeIndex,
    pub when_false: NodeIndex,
}

/// Owner of every node of one or more compilation units.
#[derive(Debug)]
pub struct NodeArena {
    pub(crate) id: ArenaId,
    pub(crate) nodes: Vec<Node>,
}

impl Default for NodeArena {
    fn default() -> Self {
        Self {
            id: ArenaId::fresh(),
            nodes: Vec::new(),
        }
    }
}
