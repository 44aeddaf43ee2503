//! Common types and configuration for the shimkit transform toolkit.
//!
//! This crate provides foundational types used across all shimkit crates:
//! - Source and module system kinds (`SourceType`, `ModuleKind`)
//! - Import injection configuration (`ShimkitConfig`, `ImportOptions`)

// Common types - Shared constants to break circular dependencies
pub mod common;
pub use common::{ModuleKind, SourceType};

// Configuration loading (JSON, serde)
pub mod config;
pub use config::{ImportConfig, ImportOptions, ShimkitConfig, load_config, parse_config};
