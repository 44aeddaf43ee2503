//! Name binder for the shimkit program graph.
//!
//! Binding a source file builds persistent lexical scopes, one `Binding` per
//! declared name, and records every reassignment as a constant violation.
//! On top of that the crate answers the questions transforms ask of a unit:
//! "what does this name bind to", "is it constant", "what constant does this
//! expression evaluate to", "is this expression side-effect free", and "give
//! me a fresh name".

pub mod scopes;
pub use scopes::{Binding, BindingId, BindingKind, Scope, ScopeId, ScopeKind};

pub mod state;
pub use state::BinderState;

mod state_binding;

pub mod globals;
pub use globals::{is_global_name, is_reserved_word};

pub mod evaluate;
pub use evaluate::{ConstantEvaluator, ConstantValue, StaticEvaluator};

mod purity;

pub mod unique_names;
pub use unique_names::to_identifier;
