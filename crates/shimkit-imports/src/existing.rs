//! Detection of inclusions a unit already carries.

use shimkit_ast::{NodeArena, NodeIndex, NodeKind};

/// Url of a side-effect-only `import "url";` statement.
pub fn import_source(arena: &NodeArena, statement: NodeIndex) -> Option<&str> {
    match arena.kind(statement)? {
        NodeKind::ImportDeclaration(data) if data.specifiers.is_empty() => {
            arena.string_literal_value(data.source)
        }
        _ => None,
    }
}

/// Url of a bare `require("url");` statement.
pub fn require_source(arena: &NodeArena, statement: NodeIndex) -> Option<&str> {
    let NodeKind::ExpressionStatement(data) = arena.kind(statement)? else {
        return None;
    };
    let call = arena.get_call_expr(data.expression)?;
    if !arena.is_identifier_named(call.callee, "require") {
        return None;
    }
    match call.arguments.nodes.as_slice() {
        [arg] => arena.string_literal_value(*arg),
        _ => None,
    }
}
