//! The two inclusion output forms.

use shimkit_ast::{NodeArena, NodeIndex, SourceType, VariableKind};
use shimkit_common::ModuleKind;

/// How a unit includes other modules. Chosen once per unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ImportStyle {
    /// `require("url")` calls and `var` bindings.
    Require,
    /// `import` declarations.
    Import,
}

impl ImportStyle {
    #[must_use]
    pub const fn for_unit(source_type: SourceType, module: ModuleKind) -> Self {
        if module.uses_require(source_type) {
            Self::Require
        } else {
            Self::Import
        }
    }

    #[must_use]
    pub const fn is_require(self) -> bool {
        matches!(self, Self::Require)
    }

    /// `import "url";` or `require("url");`
    pub fn build_side_effect(self, arena: &mut NodeArena, url: &str) -> NodeIndex {
        match self {
            Self::Import => {
                let source = arena.add_string_literal(url);
                arena.add_import_declaration(Vec::new(), source)
            }
            Self::Require => {
                let call = require_call(arena, url);
                arena.add_expression_statement(call)
            }
        }
    }

    /// `import { name as local } from "url";` or
    /// `var local = require("url").name;`. Names that are not identifiers
    /// become `"name"` and `["name"]`.
    pub fn build_named(self, arena: &mut NodeArena, url: &str, name: &str, local: &str) -> NodeIndex {
        match self {
            Self::Import => {
                let imported = if is_identifier_name(name) {
                    arena.add_identifier(name)
                } else {
                    arena.add_string_literal(name)
                };
                let local = arena.add_identifier(local);
                let specifier = arena.add_import_specifier(imported, local);
                let source = arena.add_string_literal(url);
                arena.add_import_declaration(vec![specifier], source)
            }
            Self::Require => {
                let call = require_call(arena, url);
                let access = if is_identifier_name(name) {
                    arena.add_property_access(call, name)
                } else {
                    let key = arena.add_string_literal(name);
                    arena.add_member_expression(call, key, true)
                };
                var_binding(arena, local, access)
            }
        }
    }

    /// `import local from "url";` or `var local = require("url");`
    pub fn build_default(self, arena: &mut NodeArena, url: &str, local: &str) -> NodeIndex {
        match self {
            Self::Import => {
                let local = arena.add_identifier(local);
                let specifier = arena.add_import_default_specifier(local);
                let source = arena.add_string_literal(url);
                arena.add_import_declaration(vec![specifier], source)
            }
            Self::Require => {
                let call = require_call(arena, url);
                var_binding(arena, local, call)
            }
        }
    }
}

fn require_call(arena: &mut NodeArena, url: &str) -> NodeIndex {
    let callee = arena.add_identifier("require");
    let source = arena.add_string_literal(url);
    arena.add_call_expression(callee, vec![source])
}

fn var_binding(arena: &mut NodeArena, local: &str, init: NodeIndex) -> NodeIndex {
    let name = arena.add_identifier(local);
    let decl = arena.add_variable_declarator(name, init);
    arena.add_variable_statement(VariableKind::Var, vec![decl])
}

/// Whether `name` can follow a `.` in a property access. Reserved words
/// can (`require("x").default`).
pub(crate) fn is_identifier_name(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first == '_' || first == '$' || first.is_alphabetic())
        && chars.all(|c| c == '_' || c == '$' || c.is_alphanumeric())
}
