//! Declarative injection settings loaded from YAML or JSON.
//!
//! Everything except the output hook can be expressed in a settings document:
//!
//! ```yaml
//! static_context:
//!   author: alice
//!   base_package: com.example.shop
//! template_files:
//!   mapper.xml.vm: /templates/custom/mapper.xml.vm
//! file_override: true
//! ```
//!
//! A missing key leaves whatever the builder already holds. An explicit `null`
//! is kept and rejected when the settings are applied to a builder, since an
//! empty mapping is the only way to say "no customization".

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::builder::InjectionConfigBuilder;
use crate::context::ContextMap;
use crate::error::{InjectionError, Result};

/// A settings value that may be missing, explicitly `null`, or present.
#[derive(Debug, Clone, PartialEq)]
pub enum Setting<T> {
    /// The key did not appear in the document.
    Absent,
    /// The key was set to `null`.
    Null,
    /// The key carried a value.
    Value(T),
}

impl<T> Setting<T> {
    pub fn is_absent(&self) -> bool {
        matches!(self, Setting::Absent)
    }

    /// Returns the value, if one was given.
    pub fn value(&self) -> Option<&T> {
        match self {
            Setting::Value(value) => Some(value),
            _ => None,
        }
    }

    pub fn into_value(self) -> Option<T> {
        match self {
            Setting::Value(value) => Some(value),
            _ => None,
        }
    }
}

impl<T> Default for Setting<T> {
    fn default() -> Self {
        Setting::Absent
    }
}

impl<T> From<T> for Setting<T> {
    fn from(value: T) -> Self {
        Setting::Value(value)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Setting<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        // Only reached when the key is present; absence comes from `#[serde(default)]`
        Ok(match Option::<T>::deserialize(deserializer)? {
            Some(value) => Setting::Value(value),
            None => Setting::Null,
        })
    }
}

impl<T: Serialize> Serialize for Setting<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Setting::Value(value) => serializer.serialize_some(value),
            Setting::Absent | Setting::Null => serializer.serialize_none(),
        }
    }
}

/// Serializable subset of an [`InjectionConfig`](crate::InjectionConfig).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InjectionSettings {
    /// Values copied into every table's context.
    #[serde(default, alias = "custom_map", skip_serializing_if = "Setting::is_absent")]
    pub static_context: Setting<ContextMap>,

    /// Template name to template locator overrides.
    #[serde(default, alias = "custom_file", skip_serializing_if = "Setting::is_absent")]
    pub template_files: Setting<BTreeMap<String, String>>,

    /// Whether existing output files may be overwritten.
    #[serde(default)]
    pub file_override: bool,
}

impl InjectionSettings {
    /// Parses settings from a YAML document.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Parses settings from a JSON document.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Loads settings from a `.yaml`, `.yml` or `.json` file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        let content = fs::read_to_string(path).map_err(|source| InjectionError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let settings = match extension.as_deref() {
            Some("yaml") | Some("yml") => Self::from_yaml(&content)?,
            Some("json") => Self::from_json(&content)?,
            _ => {
                return Err(InjectionError::Parse(format!(
                    "unsupported settings file extension: {}",
                    path.display()
                )))
            }
        };
        tracing::debug!(path = %path.display(), "loaded injection settings");
        Ok(settings)
    }

    /// Starts a builder from these settings.
    pub fn into_builder(self) -> InjectionConfigBuilder {
        InjectionConfigBuilder::from_settings(self)
    }
}
