//! Persistent scope and binding records.

use rustc_hash::FxHashMap;
use shimkit_ast::NodeIndex;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ScopeId(pub u32);

impl ScopeId {
    pub const NONE: ScopeId = ScopeId(u32::MAX);

    #[must_use]
    pub const fn is_none(self) -> bool {
        self.0 == u32::MAX
    }
}

impl Default for ScopeId {
    fn default() -> Self {
        Self::NONE
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BindingId(pub u32);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScopeKind {
    Program,
    Function,
    Block,
}

impl ScopeKind {
    /// Scopes that receive hoisted `var` declarations and parameters.
    #[must_use]
    pub const fn is_function_scope(self) -> bool {
        matches!(self, Self::Program | Self::Function)
    }
}

#[derive(Clone, Debug)]
pub struct Scope {
    pub parent: ScopeId,
    pub kind: ScopeKind,
    /// Node that created this scope.
    pub node: NodeIndex,
    pub bindings: FxHashMap<String, BindingId>,
}

impl Scope {
    #[must_use]
    pub fn new(parent: ScopeId, kind: ScopeKind, node: NodeIndex) -> Self {
        Self {
            parent,
            kind,
            node,
            bindings: FxHashMap::default(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BindingKind {
    Var,
    Let,
    Const,
    Function,
    Class,
    Param,
    /// Name of a function expression, visible only inside it.
    Local,
    /// Import specifier.
    Module,
}

/// A name declared in a scope.
#[derive(Clone, Debug)]
pub struct Binding {
    pub name: String,
    pub kind: BindingKind,
    /// Declaring node: the variable declarator, function, class, parameter,
    /// or import specifier.
    pub declaration: NodeIndex,
    /// The binding identifier inside `declaration`.
    pub identifier: NodeIndex,
    pub scope: ScopeId,
    /// Assignments, updates and redeclarations after the first declaration.
    pub constant_violations: Vec<NodeIndex>,
    pub references: Vec<NodeIndex>,
}

impl Binding {
    /// Assigned exactly once and never reassigned.
    #[must_use]
    pub fn is_constant(&self) -> bool {
        self.constant_violations.is_empty()
    }
}
