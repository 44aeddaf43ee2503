//! Constant propagation through bindings.

use fixedbitset::FixedBitSet;
use shimkit_ast::{NodeIndex, NodeKind};
use shimkit_binder::ConstantEvaluator;
use tracing::{Level, debug, span, trace};

use crate::Resolver;

impl<'a, E: ConstantEvaluator> Resolver<'a, E> {
    /// Trace `node` through constant bindings to the expression that defines
    /// it.
    ///
    /// - A variable declarator with a plain identifier name resolves through
    ///   its initializer.
    /// - A referenced identifier with no binding is a free (global)
    ///   reference and resolves to itself.
    /// - A referenced identifier whose binding is reassigned anywhere is
    ///   undetermined; a constant binding resolves through its declaration.
    /// - Anything else resolves to itself.
    ///
    /// Self- and mutually-referential bindings are undetermined: each call
    /// visits a node at most once.
    pub fn resolve(&self, node: NodeIndex) -> Option<NodeIndex> {
        let _span = span!(Level::TRACE, "resolve", node = node.0).entered();
        let mut visited = FixedBitSet::with_capacity(self.arena.len());
        self.resolve_inner(node, &mut visited)
    }

    fn resolve_inner(&self, mut node: NodeIndex, visited: &mut FixedBitSet) -> Option<NodeIndex> {
        loop {
            let kind = self.arena.kind(node)?;
            if visited.put(node.as_usize()) {
                trace!(node = node.0, "cycle in binding chain");
                return None;
            }

            node = match kind {
                NodeKind::VariableDeclarator(decl) if self.arena.is_identifier(decl.name) => {
                    decl.initializer
                }
                NodeKind::Identifier(ident) if self.arena.is_referenced_identifier(node) => {
                    let Some(binding) = self.binder.binding_of(self.arena, node) else {
                        return Some(node);
                    };
                    if !binding.is_constant() {
                        debug!(
                            name = %ident.escaped_text,
                            violations = binding.constant_violations.len(),
                            "binding is reassigned"
                        );
                        return None;
                    }
                    binding.declaration
                }
                _ => return Some(node),
            };
        }
    }
}
