//! Per-unit deduplicating store for injected inclusions.
//!
//! The cache is explicit state threaded through a transformation run; it is
//! keyed by [`UnitKey`], so it must not outlive the arenas it has seen. Each
//! unit gets its [`ImportStyle`] on first use and keeps it.
//!
//! Injected statements sit at the top of the unit, in this order:
//!
//! ```text
//! hoisted bindings (call-style named/default, when hoistRequires is on)
//! inclusions for hint #1, in injection order
//! inclusions for hint #2, ...
//! the unit's own statements
//! ```

use indexmap::IndexMap;
use rustc_hash::{FxHashMap, FxHashSet};
use shimkit_ast::{ArenaId, NodeArena, NodeIndex};
use shimkit_binder::BinderState;
use shimkit_common::ImportOptions;
use tracing::{debug, trace};

use crate::injector::ImportInjector;
use crate::strategy::ImportStyle;

/// Identity of one compilation unit: its arena and its source file node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct UnitKey {
    pub arena: ArenaId,
    pub root: NodeIndex,
}

impl UnitKey {
    /// Key of the unit enclosing `position`.
    pub fn enclosing(arena: &NodeArena, position: NodeIndex) -> Option<Self> {
        let root = arena.enclosing_source_file(position)?;
        Some(Self {
            arena: arena.id(),
            root,
        })
    }
}

#[derive(Debug)]
struct UnitImports {
    style: ImportStyle,
    /// `(url, hint)` of side-effect inclusions.
    anonymous: FxHashSet<(String, String)>,
    /// `(url, export name, hint)` to generated local name.
    named: FxHashMap<(String, String, String), String>,
    hoisted: Vec<NodeIndex>,
    by_hint: IndexMap<String, Vec<NodeIndex>>,
    injected: FxHashSet<NodeIndex>,
}

impl UnitImports {
    fn new(style: ImportStyle) -> Self {
        Self {
            style,
            anonymous: FxHashSet::default(),
            named: FxHashMap::default(),
            hoisted: Vec::new(),
            by_hint: IndexMap::new(),
            injected: FxHashSet::default(),
        }
    }

    fn push(&mut self, statement: NodeIndex, hint: &str, hoist: bool) {
        if hoist {
            self.hoisted.push(statement);
        } else {
            self.by_hint
                .entry(hint.to_string())
                .or_default()
                .push(statement);
        }
        self.injected.insert(statement);
    }

    /// Rewrite the unit's statement list: injected statements first, then
    /// every other statement in its current order.
    fn lay_out(&self, arena: &mut NodeArena, root: NodeIndex) {
        let Some(current) = arena.statements_of(root) else {
            return;
        };
        let rest: Vec<NodeIndex> = current
            .nodes
            .iter()
            .copied()
            .filter(|stmt| !self.injected.contains(stmt))
            .collect();

        let mut statements = Vec::with_capacity(self.injected.len() + rest.len());
        statements.extend_from_slice(&self.hoisted);
        for group in self.by_hint.values() {
            statements.extend_from_slice(group);
        }
        statements.extend(rest);
        arena.set_statements(root, statements);
    }
}

#[derive(Debug, Default)]
pub struct ImportCache {
    options: ImportOptions,
    units: FxHashMap<UnitKey, UnitImports>,
}

impl ImportCache {
    pub fn new(options: ImportOptions) -> Self {
        Self {
            options,
            units: FxHashMap::default(),
        }
    }

    #[must_use]
    pub const fn options(&self) -> ImportOptions {
        self.options
    }

    /// Import capabilities for the unit enclosing `position`, or `None` when
    /// `position` is not inside a source file. `binder` must be the unit's
    /// binder: it generates the local names.
    pub fn injector<'c>(
        &'c mut self,
        arena: &'c mut NodeArena,
        binder: &'c mut BinderState,
        position: NodeIndex,
    ) -> Option<ImportInjector<'c>> {
        let unit = UnitKey::enclosing(arena, position)?;
        Some(ImportInjector::new(self, arena, binder, unit))
    }

    /// Style of `unit`, fixed the first time the unit is seen.
    pub fn style(&mut self, arena: &NodeArena, unit: UnitKey) -> ImportStyle {
        self.unit_mut(arena, unit).style
    }

    /// Number of statements injected into `unit` so far.
    #[must_use]
    pub fn injected_count(&self, unit: UnitKey) -> usize {
        self.units.get(&unit).map_or(0, |imports| imports.injected.len())
    }

    /// Include `url` for its side effects, once per `(unit, url, hint)`.
    ///
    /// `build` creates the inclusion statement in the unit's style; it is not
    /// called when the inclusion already exists.
    pub fn store_anonymous<F>(
        &mut self,
        arena: &mut NodeArena,
        unit: UnitKey,
        url: &str,
        hint: &str,
        build: F,
    ) where
        F: FnOnce(&mut NodeArena, ImportStyle) -> NodeIndex,
    {
        let imports = self.unit_mut(arena, unit);
        let key = (url.to_string(), hint.to_string());
        if imports.anonymous.contains(&key) {
            trace!(url, hint, "inclusion already present");
            return;
        }

        let statement = build(arena, imports.style);
        debug!(url, hint, statement = statement.0, "injected inclusion");
        imports.anonymous.insert(key);
        imports.push(statement, hint, false);
        imports.lay_out(arena, unit.root);
    }

    /// Bind export `name` of `url` to a local, once per
    /// `(unit, url, name, hint)`, and return the local's name.
    ///
    /// `build` creates the binding statement in the unit's style and returns
    /// it with the local name it binds. Later calls with the same key return
    /// that name without calling `build`.
    pub fn store_named<F>(
        &mut self,
        arena: &mut NodeArena,
        unit: UnitKey,
        url: &str,
        name: &str,
        hint: &str,
        build: F,
    ) -> String
    where
        F: FnOnce(&mut NodeArena, ImportStyle) -> (NodeIndex, String),
    {
        let hoist_requires = self.options.hoist_requires;
        let imports = self.unit_mut(arena, unit);
        let key = (url.to_string(), name.to_string(), hint.to_string());
        if let Some(local) = imports.named.get(&key) {
            trace!(url, name, hint, local = %local, "binding already present");
            return local.clone();
        }

        let (statement, local) = build(arena, imports.style);
        let hoist = hoist_requires && imports.style.is_require();
        debug!(url, name, hint, local = %local, hoist, "injected binding");
        imports.named.insert(key, local.clone());
        imports.push(statement, hint, hoist);
        imports.lay_out(arena, unit.root);
        local
    }

    fn unit_mut(&mut self, arena: &NodeArena, unit: UnitKey) -> &mut UnitImports {
        let module = self.options.module;
        self.units.entry(unit).or_insert_with(|| {
            let source_type = arena.source_type_of(unit.root).unwrap_or_default();
            let style = ImportStyle::for_unit(source_type, module);
            debug!(root = unit.root.0, ?source_type, ?style, "new import unit");
            UnitImports::new(style)
        })
    }
}
