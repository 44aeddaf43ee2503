//! Static binding resolution and deduplicated import injection for
//! JavaScript polyfill transforms.
//!
//! The workspace crates are re-exported under their roles:
//!
//! - [`ast`]: the arena program graph
//! - [`binder`]: scopes, bindings, constant evaluation, unique names
//! - [`resolve`]: what an expression denotes (`Resolver`)
//! - [`imports`]: per-unit deduplicated inclusions (`ImportCache`)
//! - [`emitter`]: JavaScript printer
//!
//! [`CompilationUnit`] bundles one bound source file for transforms that
//! need all of them at once.

pub use shimkit_ast as ast;
pub use shimkit_binder as binder;
pub use shimkit_common as common;
pub use shimkit_emitter as emitter;
pub use shimkit_imports as imports;
pub use shimkit_resolve as resolve;

pub use shimkit_common::{ImportOptions, ModuleKind, SourceType, load_config, parse_config};
pub use shimkit_imports::{ImportCache, ImportInjector, ImportStyle};
pub use shimkit_resolve::{Placement, Resolver, SourceDescriptor, Usage};

pub mod tracing_config;
pub use tracing_config::init_tracing;

pub mod unit;
pub use unit::CompilationUnit;
