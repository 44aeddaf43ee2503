//! Static resolution of what an expression denotes.
//!
//! All queries go through [`Resolver`], which borrows a bound unit (arena and
//! binder) and owns the constant evaluator used for property keys. Every
//! query answers `None`/unknown when the program does not pin the answer
//! down; callers treat that as "be conservative".
//!
//! ```text
//! resolve_source / resolve_key
//!         |
//!     resolve_id
//!         |
//!      resolve
//! ```

use shimkit_ast::NodeArena;
use shimkit_binder::{BinderState, ConstantEvaluator, StaticEvaluator};

mod identifier;
mod key;
mod resolver;

pub mod source;
pub use source::{Placement, SourceDescriptor};

pub mod usage;
pub use usage::Usage;

/// Resolution queries over one bound compilation unit.
pub struct Resolver<'a, E = StaticEvaluator<'a>> {
    arena: &'a NodeArena,
    binder: &'a BinderState,
    evaluator: E,
}

impl<'a> Resolver<'a> {
    /// Resolver using the binder's own static evaluator.
    pub fn new(arena: &'a NodeArena, binder: &'a BinderState) -> Self {
        Self {
            arena,
            binder,
            evaluator: StaticEvaluator::new(arena, binder),
        }
    }
}

impl<'a, E: ConstantEvaluator> Resolver<'a, E> {
    pub fn with_evaluator(arena: &'a NodeArena, binder: &'a BinderState, evaluator: E) -> Self {
        Self {
            arena,
            binder,
            evaluator,
        }
    }

    #[must_use]
    pub const fn arena(&self) -> &'a NodeArena {
        self.arena
    }

    #[must_use]
    pub const fn binder(&self) -> &'a BinderState {
        self.binder
    }
}
