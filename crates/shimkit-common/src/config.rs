//! Configuration for import injection.
//!
//! Configuration is read from a JSON document of the form
//!
//! ```json
//! { "imports": { "module": "commonjs", "hoistRequires": true } }
//! ```
//!
//! The raw, serde-facing shape (`ShimkitConfig`) keeps every field optional;
//! `ShimkitConfig::resolve` validates it into the options the injector uses.

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Deserializer};
use std::path::Path;

use crate::common::ModuleKind;

/// Custom deserializer for boolean options that accepts both bool and string values.
/// This handles configs written as `"hoistRequires": "true"` instead of `true`.
fn deserialize_bool_or_string<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum BoolOrString {
        Bool(bool),
        String(String),
    }

    match Option::<BoolOrString>::deserialize(deserializer)? {
        None => Ok(None),
        Some(BoolOrString::Bool(b)) => Ok(Some(b)),
        Some(BoolOrString::String(s)) => {
            let normalized = s.trim().to_lowercase();
            match normalized.as_str() {
                "true" | "1" | "yes" | "on" => Ok(Some(true)),
                "false" | "0" | "no" | "off" => Ok(Some(false)),
                _ => Err(Error::custom(format!(
                    "invalid boolean value: '{}'. Expected true, false, 'true', or 'false'",
                    s
                ))),
            }
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ShimkitConfig {
    #[serde(default)]
    pub imports: Option<ImportConfig>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ImportConfig {
    #[serde(default)]
    pub module: Option<String>,
    #[serde(default, deserialize_with = "deserialize_bool_or_string")]
    pub hoist_requires: Option<bool>,
}

/// Validated import injection options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportOptions {
    /// Module system for injected inclusions.
    pub module: ModuleKind,
    /// Place call-style bindings (`var _x = require(...)`) ahead of every
    /// other injected statement.
    pub hoist_requires: bool,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            module: ModuleKind::Preserve,
            hoist_requires: true,
        }
    }
}

impl ShimkitConfig {
    pub fn resolve(&self) -> Result<ImportOptions> {
        let mut options = ImportOptions::default();
        let Some(imports) = &self.imports else {
            return Ok(options);
        };
        if let Some(module) = imports.module.as_deref() {
            options.module = parse_module_kind(module)?;
        }
        if let Some(hoist) = imports.hoist_requires {
            options.hoist_requires = hoist;
        }
        Ok(options)
    }
}

fn parse_module_kind(value: &str) -> Result<ModuleKind> {
    let normalized = value.trim().to_ascii_lowercase();
    Ok(match normalized.as_str() {
        "preserve" | "auto" => ModuleKind::Preserve,
        "commonjs" | "cjs" => ModuleKind::CommonJS,
        "esnext" | "es2015" | "es6" | "esm" => ModuleKind::ESNext,
        _ => bail!("unsupported imports.module '{}'", value),
    })
}

/// Parse and validate a configuration document.
pub fn parse_config(source: &str) -> Result<ImportOptions> {
    let config: ShimkitConfig =
        serde_json::from_str(source).context("failed to parse shimkit config")?;
    config.resolve()
}

/// Read, parse and validate the configuration file at `path`.
pub fn load_config(path: &Path) -> Result<ImportOptions> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    parse_config(&source).with_context(|| format!("invalid config {}", path.display()))
}
