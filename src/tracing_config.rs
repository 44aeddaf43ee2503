//! Log output for following resolution and injection decisions.
//!
//! Every crate logs through `tracing`; nothing is printed unless
//! [`init_tracing`] installs a subscriber. The spans worth filtering on:
//!
//! | Target | Span / event | Answers |
//! |---|---|---|
//! | `shimkit_binder` | `bind_source_file`, `declared binding`, `constant violation` | why a binding counts as reassigned |
//! | `shimkit_binder` | `lookup_binding`, `no lexical binding` | which scope a name was found in |
//! | `shimkit_resolve` | `resolve`, `cycle in binding chain`, `binding is reassigned` | where a chain of aliases stopped |
//! | `shimkit_resolve` | `key is undetermined`, `source is unknown` | why a member access was not recognised |
//! | `shimkit_imports` | `inject_*_import`, `injected inclusion`, `inclusion already present` | what a pass added to a unit and what it deduplicated |
//!
//! `SHIMKIT_LOG` takes an `EnvFilter` directive (falling back to `RUST_LOG`)
//! and `SHIMKIT_LOG_FORMAT` picks `text` (default), `tree` or `json`:
//!
//! ```bash
//! # Nested view of one resolution: each alias hop is a line under `resolve`.
//! SHIMKIT_LOG=shimkit_resolve=trace,shimkit_binder=debug SHIMKIT_LOG_FORMAT=tree \
//!     cargo test -p shimkit-resolve --test resolver_tests
//!
//! # Injected inclusions per unit, one JSON object each, for diffing two runs.
//! SHIMKIT_LOG=shimkit_imports=debug SHIMKIT_LOG_FORMAT=json cargo test --test transform_api_tests
//! ```

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry, fmt};

/// Shape of the log output on stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// One line per event.
    Text,
    /// Events indented under their `resolve` / `inject_*` spans.
    Tree,
    /// One JSON object per event, for tooling.
    Json,
}

impl LogFormat {
    /// Parse a `SHIMKIT_LOG_FORMAT` value; unknown values fall back to text.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "tree" => Self::Tree,
            "json" => Self::Json,
            _ => Self::Text,
        }
    }

    fn from_env() -> Self {
        Self::parse(&std::env::var("SHIMKIT_LOG_FORMAT").unwrap_or_default())
    }
}

fn build_filter() -> EnvFilter {
    if let Ok(val) = std::env::var("SHIMKIT_LOG") {
        EnvFilter::builder().parse_lossy(val)
    } else {
        EnvFilter::from_default_env()
    }
}

/// Install the stderr subscriber when `SHIMKIT_LOG` or `RUST_LOG` is set.
///
/// Test binaries and embedding tools may call this more than once; an
/// already installed subscriber is kept.
pub fn init_tracing() {
    let has_shimkit_log = std::env::var("SHIMKIT_LOG").is_ok();
    let has_rust_log = std::env::var("RUST_LOG").is_ok();
    if !has_shimkit_log && !has_rust_log {
        return;
    }

    let filter = build_filter();
    match LogFormat::from_env() {
        LogFormat::Tree => {
            let tree_layer = tracing_tree::HierarchicalLayer::default()
                .with_indent_amount(2)
                .with_indent_lines(true)
                .with_deferred_spans(true)
                .with_span_retrace(true)
                .with_targets(true);

            let _ = Registry::default().with(filter).with(tree_layer).try_init();
        }
        LogFormat::Json => {
            let json_layer = fmt::layer().json().with_writer(std::io::stderr);

            let _ = Registry::default().with(filter).with(json_layer).try_init();
        }
        LogFormat::Text => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .try_init();
        }
    }
}
