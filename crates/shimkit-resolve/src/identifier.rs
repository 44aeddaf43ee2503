use shimkit_ast::NodeIndex;
use shimkit_binder::ConstantEvaluator;

use crate::Resolver;

impl<'a, E: ConstantEvaluator> Resolver<'a, E> {
    /// Plain name `node` stands for, when it is (or resolves to) an
    /// identifier.
    ///
    /// A bare identifier with no lexical binding answers its own name without
    /// resolving.
    pub fn resolve_id(&self, node: NodeIndex) -> Option<&'a str> {
        if let Some(name) = self.arena.identifier_text(node)
            && !self.binder.has_binding(self.arena, node, name, true)
        {
            return Some(name);
        }
        let resolved = self.resolve(node)?;
        self.arena.identifier_text(resolved)
    }
}
