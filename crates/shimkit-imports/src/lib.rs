//! Import surface for polyfill transforms.
//!
//! Transforms ask for supporting module inclusions through an
//! [`ImportInjector`], obtained from the per-run [`ImportCache`] for the unit
//! enclosing the node being transformed. The cache guarantees each distinct
//! inclusion is emitted once per unit; the unit's [`ImportStyle`] decides
//! whether it is emitted as `import` syntax or as a `require` call.

pub mod cache;
pub use cache::{ImportCache, UnitKey};

pub mod existing;
pub use existing::{import_source, require_source};

pub mod injector;
pub use injector::ImportInjector;

pub mod strategy;
pub use strategy::ImportStyle;
