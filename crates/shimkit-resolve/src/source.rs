//! Classification of the object side of a member access.

use shimkit_ast::{NodeIndex, NodeKind};
use shimkit_binder::ConstantEvaluator;
use tracing::trace;

use crate::Resolver;

/// Where a member is looked up on a named built-in or class.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Placement {
    /// `Array.prototype.includes`, or `[].includes` on an instance literal.
    Prototype,
    /// `Array.from`.
    Static,
}

impl Placement {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Prototype => "prototype",
            Self::Static => "static",
        }
    }
}

/// What the object of a member access refers to.
///
/// The id and the placement are either both known or both unknown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct SourceDescriptor<'a> {
    target: Option<(&'a str, Placement)>,
}

impl<'a> SourceDescriptor<'a> {
    pub const UNKNOWN: SourceDescriptor<'static> = SourceDescriptor { target: None };

    #[must_use]
    pub const fn new(id: &'a str, placement: Placement) -> Self {
        Self {
            target: Some((id, placement)),
        }
    }

    #[must_use]
    pub fn id(&self) -> Option<&'a str> {
        self.target.map(|(id, _)| id)
    }

    #[must_use]
    pub fn placement(&self) -> Option<Placement> {
        self.target.map(|(_, placement)| placement)
    }

    #[must_use]
    pub const fn is_known(&self) -> bool {
        self.target.is_some()
    }
}

impl<'a, E: ConstantEvaluator> Resolver<'a, E> {
    /// Classify `object`, the object-position expression of a member access.
    pub fn resolve_source(&self, object: NodeIndex) -> SourceDescriptor<'a> {
        if let Some(member) = self.arena.get_member_expr(object)
            && !member.computed
            && self.arena.is_identifier_named(member.property, "prototype")
        {
            // An unresolvable `X.prototype` is unknown, never static.
            return match self.resolve_id(member.object) {
                Some(id) => SourceDescriptor::new(id, Placement::Prototype),
                None => SourceDescriptor::UNKNOWN,
            };
        }

        if let Some(id) = self.resolve_id(object) {
            return SourceDescriptor::new(id, Placement::Static);
        }

        let instance_type = match self.resolve(object).and_then(|node| self.arena.kind(node)) {
            Some(NodeKind::RegExpLiteral(_)) => "RegExp",
            Some(
                NodeKind::FunctionExpression(_)
                | NodeKind::ArrowFunction(_)
                | NodeKind::FunctionDeclaration(_),
            ) => "Function",
            Some(NodeKind::StringLiteral(_)) => "String",
            Some(NodeKind::NumericLiteral(_)) => "Number",
            Some(NodeKind::BooleanLiteral(_)) => "Boolean",
            Some(NodeKind::ObjectLiteral(_)) => "Object",
            Some(NodeKind::ArrayLiteral(_)) => "Array",
            _ => {
                trace!(object = object.0, "source is unknown");
                return SourceDescriptor::UNKNOWN;
            }
        };
        SourceDescriptor::new(instance_type, Placement::Prototype)
    }
}
