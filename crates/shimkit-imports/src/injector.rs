//! Capability set handed to transforms.

use shimkit_ast::NodeArena;
use shimkit_binder::BinderState;
use tracing::{Level, span};

use crate::cache::{ImportCache, UnitKey};
use crate::strategy::ImportStyle;

/// Import operations bound to one unit. Obtained from
/// [`ImportCache::injector`].
pub struct ImportInjector<'c> {
    cache: &'c mut ImportCache,
    arena: &'c mut NodeArena,
    binder: &'c mut BinderState,
    unit: UnitKey,
}

impl<'c> ImportInjector<'c> {
    pub(crate) fn new(
        cache: &'c mut ImportCache,
        arena: &'c mut NodeArena,
        binder: &'c mut BinderState,
        unit: UnitKey,
    ) -> Self {
        Self {
            cache,
            arena,
            binder,
            unit,
        }
    }

    #[must_use]
    pub const fn unit(&self) -> UnitKey {
        self.unit
    }

    pub fn style(&mut self) -> ImportStyle {
        self.cache.style(self.arena, self.unit)
    }

    /// Include `url` for its side effects.
    pub fn inject_global_import(&mut self, url: &str, module_hint: &str) {
        let _span = span!(Level::DEBUG, "inject_global_import", url, module_hint).entered();
        self.cache
            .store_anonymous(self.arena, self.unit, url, module_hint, |arena, style| {
                style.build_side_effect(arena, url)
            });
    }

    /// Bind export `export_name` of `url` to a fresh local and return its
    /// name. The local is named after `name_hint`, or the export when absent.
    pub fn inject_named_import(
        &mut self,
        url: &str,
        export_name: &str,
        name_hint: Option<&str>,
        module_hint: &str,
    ) -> String {
        let _span = span!(Level::DEBUG, "inject_named_import", url, export_name, module_hint).entered();
        let binder = &mut *self.binder;
        let hint = name_hint.unwrap_or(export_name);
        self.cache.store_named(
            self.arena,
            self.unit,
            url,
            export_name,
            module_hint,
            |arena, style| {
                let local = binder.generate_unique_name(hint);
                (style.build_named(arena, url, export_name, &local), local)
            },
        )
    }

    /// Bind the default export of `url` to a fresh local and return its
    /// name. The local is named after `name_hint`, or the url when absent.
    pub fn inject_default_import(
        &mut self,
        url: &str,
        name_hint: Option<&str>,
        module_hint: &str,
    ) -> String {
        let _span = span!(Level::DEBUG, "inject_default_import", url, module_hint).entered();
        let binder = &mut *self.binder;
        let hint = name_hint.unwrap_or(url);
        self.cache.store_named(
            self.arena,
            self.unit,
            url,
            "default",
            module_hint,
            |arena, style| {
                let local = binder.generate_unique_name(hint);
                (style.build_default(arena, url, &local), local)
            },
        )
    }
}
