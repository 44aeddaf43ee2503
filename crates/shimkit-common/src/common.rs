//! Source and module system kinds shared by the binder, injector and printer.

use serde::{Deserialize, Serialize};

/// How a compilation unit was parsed.
///
/// A `Script` has no static `import`/`export` syntax available, so any
/// module inclusion must be emitted in call form (`require(...)`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceType {
    Script,
    #[default]
    Module,
}

impl SourceType {
    #[must_use]
    pub const fn is_script(self) -> bool {
        matches!(self, Self::Script)
    }
}

/// Module system requested by configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModuleKind {
    /// Follow each unit's own `SourceType`.
    #[default]
    Preserve,
    /// Always emit `require(...)` inclusions.
    CommonJS,
    /// Always emit `import` declarations.
    ESNext,
}

impl ModuleKind {
    /// Whether units of `source_type` get call-style (`require`) inclusions.
    #[must_use]
    pub const fn uses_require(self, source_type: SourceType) -> bool {
        match self {
            Self::Preserve => source_type.is_script(),
            Self::CommonJS => true,
            Self::ESNext => false,
        }
    }
}
