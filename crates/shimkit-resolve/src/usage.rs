//! Walks a unit and reports the global names and member accesses a polyfill
//! transform reacts to.

use shimkit_ast::{NodeIndex, NodeKind};
use shimkit_binder::ConstantEvaluator;

use crate::Resolver;
use crate::source::SourceDescriptor;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Usage<'a> {
    /// A referenced identifier with no lexical binding.
    Global { node: NodeIndex, name: &'a str },
    /// A member access, with its classified object and resolved key.
    Member {
        node: NodeIndex,
        source: SourceDescriptor<'a>,
        key: Option<String>,
    },
}

impl Usage<'_> {
    #[must_use]
    pub const fn node(&self) -> NodeIndex {
        match self {
            Self::Global { node, .. } | Self::Member { node, .. } => *node,
        }
    }
}

impl<'a, E: ConstantEvaluator> Resolver<'a, E> {
    /// Usages under `root`, in source order.
    pub fn collect_usages(&self, root: NodeIndex) -> Vec<Usage<'a>> {
        let mut usages = Vec::new();
        let mut stack = vec![root];
        while let Some(idx) = stack.pop() {
            match self.arena.kind(idx) {
                Some(NodeKind::Identifier(data)) => {
                    if self.arena.is_referenced_identifier(idx)
                        && !self
                            .binder
                            .has_binding(self.arena, idx, &data.escaped_text, true)
                    {
                        usages.push(Usage::Global {
                            node: idx,
                            name: data.escaped_text.as_str(),
                        });
                    }
                }
                Some(NodeKind::MemberExpression(member)) => {
                    usages.push(Usage::Member {
                        node: idx,
                        source: self.resolve_source(member.object),
                        key: self.resolve_key(member.property, member.computed),
                    });
                }
                _ => {}
            }
            let children = self.arena.children(idx);
            stack.extend(children.into_iter().rev());
        }
        usages
    }
}
