//! One bound compilation unit.

use shimkit_ast::{NodeArena, NodeIndex};
use shimkit_binder::BinderState;
use shimkit_emitter::{PrintOptions, print_to_string};
use shimkit_imports::{ImportCache, ImportInjector};
use shimkit_resolve::Resolver;
use tracing::debug;

/// A source file with its arena and binder.
///
/// Injected inclusions are not bound until [`CompilationUnit::rebind`]; the
/// names they introduce are still reserved in the binder.
pub struct CompilationUnit {
    arena: NodeArena,
    binder: BinderState,
    root: NodeIndex,
}

impl CompilationUnit {
    /// Bind the source file `root` of `arena`.
    pub fn new(arena: NodeArena, root: NodeIndex) -> Self {
        let binder = BinderState::bind(&arena, root);
        Self {
            arena,
            binder,
            root,
        }
    }

    #[must_use]
    pub const fn root(&self) -> NodeIndex {
        self.root
    }

    #[must_use]
    pub const fn arena(&self) -> &NodeArena {
        &self.arena
    }

    #[must_use]
    pub const fn binder(&self) -> &BinderState {
        &self.binder
    }

    pub fn resolver(&self) -> Resolver<'_> {
        Resolver::new(&self.arena, &self.binder)
    }

    /// Import capabilities for this unit, backed by `cache`.
    pub fn injector<'c>(&'c mut self, cache: &'c mut ImportCache) -> Option<ImportInjector<'c>> {
        cache.injector(&mut self.arena, &mut self.binder, self.root)
    }

    /// Rebuild scopes and bindings after the statement list changed.
    pub fn rebind(&mut self) {
        debug!(root = self.root.0, "rebinding unit");
        self.binder = BinderState::bind(&self.arena, self.root);
    }

    pub fn print(&self) -> String {
        print_to_string(&self.arena, self.root, PrintOptions::default())
    }

    pub fn into_arena(self) -> NodeArena {
        self.arena
    }
}
