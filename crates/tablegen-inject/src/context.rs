//! Static context injected into every generated file.
//!
//! The generator hands each table's render pass a fresh [`ContextMap`]. Values
//! registered in a [`StaticContext`] are copied into that map before the
//! [`OutputHook`](crate::OutputHook) runs, so templates can read caller-wide
//! settings (author, base package, license text) without the hook repeating them.
//!
//! # Example
//!
//! ```rust
//! use tablegen_inject::context::{ContextMap, StaticContext};
//! use serde_json::json;
//!
//! let store = StaticContext::from_value(json!({"author": "alice"})).unwrap();
//!
//! let mut ctx = ContextMap::new();
//! ctx.insert("author".into(), json!("engine"));
//! store.apply_to(&mut ctx);
//!
//! assert_eq!(ctx["author"], json!("alice"));
//! ```

use crate::error::{InjectionError, Result};
use serde_json::Value;
use std::collections::HashMap;

/// The per-table map handed to the template renderer.
pub type ContextMap = HashMap<String, Value>;

/// Caller-wide key/value pairs applied to every table's context.
///
/// An empty store means "no customization"; there is no absent state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StaticContext {
    entries: ContextMap,
}

impl StaticContext {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from an arbitrary JSON value.
    ///
    /// The value must be an object. `null` is rejected: use an empty object to
    /// express the absence of static context.
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(map) => Ok(Self {
                entries: map.into_iter().collect(),
            }),
            Value::Null => Err(InjectionError::invalid_config(
                "static context must be a mapping, got null",
            )),
            other => Err(InjectionError::invalid_config(format!(
                "static context must be a mapping, got {}",
                json_kind(&other)
            ))),
        }
    }

    /// Replaces every entry.
    pub fn set(&mut self, entries: ContextMap) {
        self.entries = entries;
    }

    /// Returns the stored entries.
    pub fn get(&self) -> &ContextMap {
        &self.entries
    }

    /// Gets a single entry by key.
    pub fn value(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Copies every entry into `target`, overwriting keys already present.
    pub fn apply_to(&self, target: &mut ContextMap) {
        target.extend(self.entries.iter().map(|(k, v)| (k.clone(), v.clone())));
    }
}

impl From<ContextMap> for StaticContext {
    fn from(entries: ContextMap) -> Self {
        Self { entries }
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for StaticContext {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "a mapping",
    }
}
