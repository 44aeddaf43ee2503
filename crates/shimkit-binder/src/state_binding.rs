//! Binder passes: declaration binding, then references and constant violations.

use shimkit_ast::node::FunctionData;
use shimkit_ast::{NodeArena, NodeIndex, NodeKind, VariableKind};
use smallvec::SmallVec;
use tracing::{Level, debug, span, trace};

use crate::scopes::{Binding, BindingId, BindingKind, Scope, ScopeId, ScopeKind};
use crate::state::BinderState;

type BindingNames = SmallVec<[NodeIndex; 4]>;

impl BinderState {
    pub fn bind_source_file(&mut self, arena: &NodeArena, root: NodeIndex) {
        let _span = span!(Level::DEBUG, "bind_source_file", root = root.0).entered();
        self.reset();
        self.root = root;

        self.bind_node(arena, root);
        self.collect_references(arena, root);

        debug!(
            scopes = self.scopes.len(),
            bindings = self.bindings.len(),
            unresolved = self.unresolved_names.len(),
            "bound source file"
        );
    }

    // =========================================================================
    // Scope management
    // =========================================================================

    fn enter_scope(&mut self, kind: ScopeKind, node: NodeIndex) {
        let id = ScopeId(self.scopes.len() as u32);
        self.scopes.push(Scope::new(self.current_scope_id, kind, node));
        self.node_scope_ids.insert(node, id);
        self.current_scope_id = id;
    }

    fn exit_scope(&mut self) {
        if let Some(scope) = self.get_scope(self.current_scope_id) {
            self.current_scope_id = scope.parent;
        }
    }

    /// Nearest program or function scope, where `var` and parameters live.
    fn hoist_scope(&self) -> ScopeId {
        let mut id = self.current_scope_id;
        while let Some(scope) = self.get_scope(id) {
            if scope.kind.is_function_scope() {
                return id;
            }
            id = scope.parent;
        }
        self.current_scope_id
    }

    fn declare(
        &mut self,
        arena: &NodeArena,
        scope_id: ScopeId,
        identifier: NodeIndex,
        kind: BindingKind,
        declaration: NodeIndex,
    ) {
        let Some(name) = arena.identifier_text(identifier) else {
            return;
        };
        let existing = self
            .get_scope(scope_id)
            .and_then(|scope| scope.bindings.get(name).copied());

        if let Some(existing) = existing {
            // Redeclaration counts as a reassignment of the first binding.
            trace!(name, "redeclared binding");
            if let Some(binding) = self.get_binding_mut(existing) {
                binding.constant_violations.push(declaration);
            }
            self.node_bindings.insert(identifier, existing);
            return;
        }

        let id = BindingId(self.bindings.len() as u32);
        self.bindings.push(Binding {
            name: name.to_string(),
            kind,
            declaration,
            identifier,
            scope: scope_id,
            constant_violations: Vec::new(),
            references: Vec::new(),
        });
        if let Some(scope) = self.scopes.get_mut(scope_id.0 as usize) {
            scope.bindings.insert(name.to_string(), id);
        }
        self.node_bindings.insert(identifier, id);
        trace!(name, scope = scope_id.0, ?kind, "declared binding");
    }

    // =========================================================================
    // Declaration pass
    // =========================================================================

    pub(crate) fn bind_node(&mut self, arena: &NodeArena, idx: NodeIndex) {
        let Some(kind) = arena.kind(idx) else {
            return;
        };

        match kind {
            NodeKind::SourceFile(data) => {
                self.enter_scope(ScopeKind::Program, idx);
                for &stmt in &data.statements.nodes {
                    self.bind_node(arena, stmt);
                }
                self.exit_scope();
            }
            NodeKind::Block(data) => {
                // A function body shares the function's scope unless
                // `bind_function` already gave it one.
                let is_function_body = arena
                    .kind(arena.parent_of(idx))
                    .is_some_and(NodeKind::is_function_like);
                if !is_function_body {
                    self.enter_scope(ScopeKind::Block, idx);
                }
                for &stmt in &data.statements.nodes {
                    self.bind_node(arena, stmt);
                }
                if !is_function_body {
                    self.exit_scope();
                }
            }
            NodeKind::VariableStatement(data) => {
                for &decl in &data.declarations.nodes {
                    self.bind_variable_declaration(arena, decl, data.kind);
                }
            }
            NodeKind::FunctionDeclaration(data) => {
                let scope = self.current_scope_id;
                self.declare(arena, scope, data.name, BindingKind::Function, idx);
                self.bind_function(arena, idx, data, false);
            }
            NodeKind::FunctionExpression(data) => self.bind_function(arena, idx, data, true),
            NodeKind::ArrowFunction(data) => self.bind_function(arena, idx, data, false),
            NodeKind::ClassDeclaration(data) => {
                let scope = self.current_scope_id;
                self.declare(arena, scope, data.name, BindingKind::Class, idx);
                self.bind_node(arena, data.heritage);
            }
            NodeKind::ImportDeclaration(data) => {
                let program = ScopeId(0);
                for &specifier in &data.specifiers.nodes {
                    let local = match arena.kind(specifier) {
                        Some(NodeKind::ImportSpecifier(spec)) => spec.local,
                        Some(
                            NodeKind::ImportDefaultSpecifier(spec)
                            | NodeKind::ImportNamespaceSpecifier(spec),
                        ) => spec.local,
                        _ => continue,
                    };
                    self.declare(arena, program, local, BindingKind::Module, specifier);
                }
            }
            _ => {
                for child in arena.children(idx) {
                    self.bind_node(arena, child);
                }
            }
        }
    }

    fn bind_variable_declaration(&mut self, arena: &NodeArena, decl_idx: NodeIndex, kind: VariableKind) {
        let Some(decl) = arena.get_variable_declarator(decl_idx) else {
            return;
        };
        let (binding_kind, scope) = match kind {
            VariableKind::Var => (BindingKind::Var, self.hoist_scope()),
            VariableKind::Let => (BindingKind::Let, self.current_scope_id),
            VariableKind::Const => (BindingKind::Const, self.current_scope_id),
        };

        let mut names = BindingNames::new();
        collect_binding_identifiers(arena, decl.name, &mut names);
        for ident in names {
            self.declare(arena, scope, ident, binding_kind, decl_idx);
        }

        // Defaults and computed keys inside patterns may hold functions.
        self.bind_node(arena, decl.name);
        self.bind_node(arena, decl.initializer);
    }

    fn bind_function(&mut self, arena: &NodeArena, idx: NodeIndex, func: &FunctionData, binds_own_name: bool) {
        self.enter_scope(ScopeKind::Function, idx);
        if binds_own_name && func.name.is_some() {
            let scope = self.current_scope_id;
            self.declare(arena, scope, func.name, BindingKind::Local, idx);
        }

        for &param_idx in &func.parameters.nodes {
            let Some(NodeKind::Parameter(param)) = arena.kind(param_idx) else {
                continue;
            };
            let mut names = BindingNames::new();
            collect_binding_identifiers(arena, param.name, &mut names);
            let scope = self.current_scope_id;
            for ident in names {
                self.declare(arena, scope, ident, BindingKind::Param, param_idx);
            }
            self.bind_node(arena, param.initializer);
        }

        // With parameter expressions the body declarations live in their own
        // scope, so a default such as `(a = B) => { var B; }` sees the outer `B`.
        let separate_body = matches!(arena.kind(func.body), Some(NodeKind::Block(_)))
            && has_parameter_expressions(arena, func);
        if separate_body {
            self.enter_scope(ScopeKind::Function, func.body);
        }
        self.bind_node(arena, func.body);
        if separate_body {
            self.exit_scope();
        }
        self.exit_scope();
    }

    // =========================================================================
    // Reference pass
    // =========================================================================

    fn collect_references(&mut self, arena: &NodeArena, root: NodeIndex) {
        let mut stack = vec![root];
        while let Some(idx) = stack.pop() {
            let Some(kind) = arena.kind(idx) else {
                continue;
            };
            match kind {
                NodeKind::Identifier(data) => {
                    self.used_names.insert(data.escaped_text.clone());
                    if arena.is_referenced_identifier(idx) {
                        self.record_reference(arena, idx, &data.escaped_text);
                    }
                }
                NodeKind::AssignmentExpression(data) if !is_pattern_default(arena, idx) => {
                    let mut targets = BindingNames::new();
                    collect_binding_identifiers(arena, data.target, &mut targets);
                    for ident in targets {
                        self.record_violation(arena, ident, idx);
                    }
                }
                NodeKind::UpdateExpression(data) => {
                    if arena.is_identifier(data.operand) {
                        self.record_violation(arena, data.operand, idx);
                    }
                }
                _ => {}
            }
            let children = arena.children(idx);
            stack.extend(children.into_iter().rev());
        }
    }

    fn record_reference(&mut self, arena: &NodeArena, ident: NodeIndex, name: &str) {
        match self.lookup_binding_id(arena, ident, name) {
            Some(id) => {
                if let Some(binding) = self.get_binding_mut(id) {
                    binding.references.push(ident);
                }
            }
            None => {
                self.unresolved_names.insert(name.to_string());
            }
        }
    }

    fn record_violation(&mut self, arena: &NodeArena, ident: NodeIndex, violation: NodeIndex) {
        let Some(name) = arena.identifier_text(ident) else {
            return;
        };
        if let Some(id) = self.lookup_binding_id(arena, ident, name)
            && let Some(binding) = self.get_binding_mut(id)
        {
            trace!(name, violation = violation.0, "constant violation");
            binding.constant_violations.push(violation);
        }
    }
}

/// Whether any parameter has a default value or a destructuring pattern.
fn has_parameter_expressions(arena: &NodeArena, func: &FunctionData) -> bool {
    func.parameters.nodes.iter().any(|&param_idx| {
        matches!(
            arena.kind(param_idx),
            Some(NodeKind::Parameter(param))
                if param.initializer.is_some() || !arena.is_identifier(param.name)
        )
    })
}

/// `a = 1` inside a binding pattern is a default value, not an assignment.
fn is_pattern_default(arena: &NodeArena, idx: NodeIndex) -> bool {
    let parent = arena.parent_of(idx);
    match arena.kind(parent) {
        Some(NodeKind::ArrayPattern(_) | NodeKind::ObjectPattern(_)) => true,
        Some(NodeKind::PropertyAssignment(_)) => matches!(
            arena.kind(arena.parent_of(parent)),
            Some(NodeKind::ObjectPattern(_))
        ),
        _ => false,
    }
}

/// Identifiers bound by a declaration name or assignment target.
pub(crate) fn collect_binding_identifiers(arena: &NodeArena, idx: NodeIndex, out: &mut BindingNames) {
    let Some(kind) = arena.kind(idx) else {
        return;
    };
    match kind {
        NodeKind::Identifier(_) => out.push(idx),
        NodeKind::ObjectPattern(list)
        | NodeKind::ArrayPattern(list)
        | NodeKind::ObjectLiteral(list)
        | NodeKind::ArrayLiteral(list) => {
            for &element in &list.nodes {
                collect_binding_identifiers(arena, element, out);
            }
        }
        NodeKind::PropertyAssignment(prop) => collect_binding_identifiers(arena, prop.value, out),
        NodeKind::SpreadElement(inner) => collect_binding_identifiers(arena, *inner, out),
        // `[a = 1]`: the default's target is the bound name.
        NodeKind::AssignmentExpression(assign) => {
            collect_binding_identifiers(arena, assign.target, out);
        }
        _ => {}
    }
}
