//! Binder state: persistent scopes, bindings, and lookups over them.

use rustc_hash::{FxHashMap, FxHashSet};
use shimkit_ast::{NodeArena, NodeIndex};
use tracing::{Level, debug, span};

use crate::globals::is_global_name;
use crate::scopes::{Binding, BindingId, Scope, ScopeId};

/// Scopes and bindings of one bound source file.
#[derive(Debug, Default)]
pub struct BinderState {
    /// Persistent scopes; `ScopeId(0)` is the program scope once bound.
    pub scopes: Vec<Scope>,
    pub bindings: Vec<Binding>,
    /// Map from AST node (that creates a scope) to its ScopeId
    pub node_scope_ids: FxHashMap<NodeIndex, ScopeId>,
    /// Binding identifier node to the binding it declares.
    pub node_bindings: FxHashMap<NodeIndex, BindingId>,
    /// Names read somewhere in the file without any binding in scope.
    pub unresolved_names: FxHashSet<String>,
    /// Every identifier text seen in the file.
    pub(crate) used_names: FxHashSet<String>,
    /// Names handed out by `generate_unique_name`.
    pub(crate) uids: FxHashSet<String>,
    pub(crate) current_scope_id: ScopeId,
    pub(crate) root: NodeIndex,
}

impl BinderState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `root` (a source file) from scratch.
    pub fn bind(arena: &NodeArena, root: NodeIndex) -> Self {
        let mut binder = Self::new();
        binder.bind_source_file(arena, root);
        binder
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Root source file this state was bound from.
    #[must_use]
    pub const fn root(&self) -> NodeIndex {
        self.root
    }

    pub fn get_scope(&self, id: ScopeId) -> Option<&Scope> {
        if id.is_none() {
            None
        } else {
            self.scopes.get(id.0 as usize)
        }
    }

    pub fn get_binding(&self, id: BindingId) -> Option<&Binding> {
        self.bindings.get(id.0 as usize)
    }

    pub(crate) fn get_binding_mut(&mut self, id: BindingId) -> Option<&mut Binding> {
        self.bindings.get_mut(id.0 as usize)
    }

    /// Find the enclosing scope for a given node by walking up the AST.
    /// Returns the ScopeId of the nearest scope-creating ancestor node.
    pub fn find_enclosing_scope(&self, arena: &NodeArena, node_idx: NodeIndex) -> Option<ScopeId> {
        std::iter::once(node_idx)
            .chain(arena.ancestors(node_idx))
            .find_map(|idx| self.node_scope_ids.get(&idx).copied())
    }

    pub(crate) fn lookup_binding_id(
        &self,
        arena: &NodeArena,
        at: NodeIndex,
        name: &str,
    ) -> Option<BindingId> {
        let mut scope_id = self.find_enclosing_scope(arena, at)?;
        while let Some(scope) = self.get_scope(scope_id) {
            if let Some(&binding) = scope.bindings.get(name) {
                return Some(binding);
            }
            scope_id = scope.parent;
        }
        None
    }

    /// Binding of `name` as seen from the lexical position of `at`.
    pub fn lookup_binding(&self, arena: &NodeArena, at: NodeIndex, name: &str) -> Option<&Binding> {
        let _span = span!(Level::TRACE, "lookup_binding", at = at.0, name).entered();
        let binding = self
            .lookup_binding_id(arena, at, name)
            .and_then(|id| self.get_binding(id));
        if binding.is_none() {
            debug!(name, "no lexical binding");
        }
        binding
    }

    /// Binding referenced by the identifier node `ident`.
    pub fn binding_of(&self, arena: &NodeArena, ident: NodeIndex) -> Option<&Binding> {
        if let Some(&id) = self.node_bindings.get(&ident) {
            return self.get_binding(id);
        }
        let name = arena.identifier_text(ident)?;
        self.lookup_binding(arena, ident, name)
    }

    /// Whether `name` is bound at `at`. Unless `no_globals` is set, built-in
    /// global names count as bound.
    pub fn has_binding(&self, arena: &NodeArena, at: NodeIndex, name: &str, no_globals: bool) -> bool {
        if self.lookup_binding_id(arena, at, name).is_some() {
            return true;
        }
        !no_globals && is_global_name(name)
    }
}
