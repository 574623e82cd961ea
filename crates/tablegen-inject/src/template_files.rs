//! Registry of alternate template sources.
//!
//! [`TemplateFiles`] maps a logical output name (e.g. `"mapper.xml.vm"`) to the
//! template the generator should load instead of its built-in one. Lookups for
//! unregistered names return `None`, which tells the engine to fall back to its
//! default template.
//!
//! Locators are plain strings: a filesystem path, a classpath-style resource
//! (`/templates/entity.java`) or anything else the engine knows how to load.

use crate::error::{InjectionError, Result};
use std::collections::BTreeMap;

/// Logical template name to template locator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateFiles {
    entries: BTreeMap<String, String>,
}

impl TemplateFiles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces every entry.
    pub fn set(&mut self, entries: BTreeMap<String, String>) {
        self.entries = entries;
    }

    /// Registers one template, returning the locator it replaced.
    pub fn insert(&mut self, name: impl Into<String>, locator: impl Into<String>) -> Option<String> {
        self.entries.insert(name.into(), locator.into())
    }

    /// Looks up the locator registered for `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(|s| s.as_str())
    }

    /// Returns the registered locator, or `default` when `name` is not registered.
    ///
    /// ```rust
    /// use tablegen_inject::TemplateFiles;
    ///
    /// let mut files = TemplateFiles::new();
    /// files.insert("entity.java", "/custom/entity.java.vm");
    ///
    /// assert_eq!(files.resolve("entity.java", "/templates/entity.java.vm"), "/custom/entity.java.vm");
    /// assert_eq!(files.resolve("mapper.xml", "/templates/mapper.xml.vm"), "/templates/mapper.xml.vm");
    /// ```
    pub fn resolve<'a>(&'a self, name: &str, default: &'a str) -> &'a str {
        self.get(name).unwrap_or(default)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Registered names, in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(|s| s.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for TemplateFiles {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Rejects entries with an empty name or locator.
pub(crate) fn validate_entry(name: &str, locator: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(InjectionError::invalid_config(
            "template file name must not be empty",
        ));
    }
    if locator.trim().is_empty() {
        return Err(InjectionError::invalid_config(format!(
            "template file \"{}\" has an empty locator",
            name
        )));
    }
    Ok(())
}
