//! Arena-backed program graph.
//!
//! Nodes are stored in a [`NodeArena`] and addressed by [`NodeIndex`]; two
//! occurrences of the same syntactic position are the same index. Nodes are
//! created bottom-up (children before parents) and every `add_*` method wires
//! parent pointers for the children it receives.

pub mod base;
pub use base::{ArenaId, NodeIndex, NodeList};

pub mod node;
pub use node::{
    AssignmentOperator, BinaryOperator, Node, NodeArena, NodeKind, UnaryOperator,
    UpdateOperator, VariableKind,
};

mod node_access;
pub use node_access::Children;
mod node_arena;

pub use shimkit_common::SourceType;
