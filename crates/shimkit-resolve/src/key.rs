//! Compile-time property keys.

use shimkit_ast::{NodeIndex, NodeKind};
use shimkit_binder::{ConstantEvaluator, ConstantValue};
use tracing::trace;

use crate::Resolver;

impl<'a, E: ConstantEvaluator> Resolver<'a, E> {
    /// Key named by the property expression `node`; `computed` is set for
    /// `obj[node]` access.
    ///
    /// Well-known symbols are named `Symbol.<name>`, so `obj[Symbol.iterator]`
    /// yields `"Symbol.iterator"` as long as `Symbol` is not shadowed.
    pub fn resolve_key(&self, node: NodeIndex, computed: bool) -> Option<String> {
        let kind = self.arena.kind(node)?;
        if let NodeKind::StringLiteral(value) = kind {
            return Some(value.clone());
        }

        let name = self.arena.identifier_text(node);
        if let Some(name) = name
            && !computed
            && !self.in_computed_position(node)
        {
            return Some(name.to_string());
        }

        if computed
            && let NodeKind::MemberExpression(member) = kind
            && self.arena.is_identifier_named(member.object, "Symbol")
            && !self.binder.has_binding(self.arena, node, "Symbol", true)
            && let Some(symbol) = self.resolve_key(member.property, member.computed)
        {
            return Some(format!("Symbol.{symbol}"));
        }

        let attempt = match name {
            Some(name) => self.binder.has_binding(self.arena, node, name, true),
            None => self.binder.is_pure(self.arena, node),
        };
        if attempt && let Some(ConstantValue::String(value)) = self.evaluator.try_evaluate(node) {
            return Some(value);
        }

        trace!(node = node.0, kind = kind.name(), "key is undetermined");
        None
    }

    /// Whether `node` is the key of a computed member or property.
    fn in_computed_position(&self, node: NodeIndex) -> bool {
        match self.arena.kind(self.arena.parent_of(node)) {
            Some(NodeKind::MemberExpression(member)) => member.computed,
            Some(NodeKind::PropertyAssignment(prop)) => prop.computed,
            _ => false,
        }
    }
}
