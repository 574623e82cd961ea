//! Fluent construction of [`InjectionConfig`].
//!
//! Setters validate their input as soon as they are called. The first problem is
//! recorded on the builder and reported by [`build`](InjectionConfigBuilder::build),
//! in which case no config is produced. This keeps the chain fluent:
//!
//! ```rust
//! use tablegen_inject::InjectionConfig;
//! use serde_json::Value;
//!
//! let result = InjectionConfig::builder()
//!     .static_context(Value::Null)
//!     .enable_file_override()
//!     .build();
//!
//! assert!(result.unwrap_err().is_invalid_config());
//! ```
//!
//! # Single-use
//!
//! A builder produces at most one config. Calling `build()` again hands back
//! the same `Arc`, and setters called after a successful build are rejected.

use std::sync::Arc;

use once_cell::sync::OnceCell;
use serde::Serialize;

use crate::config::InjectionConfig;
use crate::context::StaticContext;
use crate::error::{InjectionError, Result};
use crate::hook::OutputHook;
use crate::settings::{InjectionSettings, Setting};
use crate::template_files::{self, TemplateFiles};

static FILE_OVERRIDE_DEPRECATION: OnceCell<()> = OnceCell::new();

/// Builder for [`InjectionConfig`].
///
/// # Example
///
/// ```rust
/// use tablegen_inject::{ContextMap, InjectionConfig, TableInfo};
/// use serde_json::json;
///
/// let config = InjectionConfig::builder()
///     .static_context(json!({"author": "alice", "base_package": "com.example"}))
///     .template_file("mapper.xml.vm", "/templates/custom/mapper.xml.vm")
///     .output_hook(|table: &TableInfo, ctx: &mut ContextMap| {
///         ctx.insert("dto_name".into(), json!(format!("{}Dto", table.entity_name)));
///     })
///     .enable_file_override()
///     .build()
///     .unwrap();
///
/// assert!(config.is_file_override());
/// assert_eq!(config.template_file("mapper.xml.vm"), Some("/templates/custom/mapper.xml.vm"));
/// ```
#[derive(Default)]
pub struct InjectionConfigBuilder {
    static_context: StaticContext,
    template_files: TemplateFiles,
    file_override: bool,
    output_hook: Option<Arc<dyn OutputHook>>,
    /// First validation failure, reported by `build()`.
    error: Option<String>,
    built: Option<Arc<InjectionConfig>>,
}

impl InjectionConfigBuilder {
    /// Creates a builder with an empty static context, no template overrides,
    /// no hook, and file override disabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder pre-populated from declarative settings.
    pub fn from_settings(settings: InjectionSettings) -> Self {
        Self::new().settings(settings)
    }

    /// Replaces the static context.
    ///
    /// Accepts anything that serializes to a mapping: a `HashMap`, a
    /// `serde_json::Value` object, or a `#[derive(Serialize)]` struct. `null`
    /// (including `None` and `()`) is rejected; pass an empty mapping instead.
    pub fn static_context<S: Serialize>(mut self, context: S) -> Self {
        if !self.ensure_open() {
            return self;
        }
        match serde_json::to_value(context)
            .map_err(InjectionError::from)
            .and_then(StaticContext::from_value)
        {
            Ok(store) => self.static_context = store,
            Err(err) => self.record(err),
        }
        self
    }

    /// Replaces the template override registry.
    ///
    /// Every entry needs a non-empty name and a non-empty locator; a blank
    /// locator would silently point the engine at nothing, so it is rejected
    /// and `build()` fails.
    pub fn template_files<I, K, V>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        if !self.ensure_open() {
            return self;
        }
        let mut files = TemplateFiles::new();
        for (name, locator) in entries {
            let (name, locator) = (name.into(), locator.into());
            if let Err(err) = template_files::validate_entry(&name, &locator) {
                self.record(err);
                return self;
            }
            files.insert(name, locator);
        }
        self.template_files = files;
        self
    }

    /// Registers a single template override, keeping the others.
    ///
    /// Blank names and blank locators are rejected, as in
    /// [`template_files`](Self::template_files).
    pub fn template_file(mut self, name: impl Into<String>, locator: impl Into<String>) -> Self {
        if !self.ensure_open() {
            return self;
        }
        let (name, locator) = (name.into(), locator.into());
        match template_files::validate_entry(&name, &locator) {
            Ok(()) => {
                self.template_files.insert(name, locator);
            }
            Err(err) => self.record(err),
        }
        self
    }

    /// Sets the per-table output hook, replacing any previous one.
    pub fn output_hook<H: OutputHook + 'static>(mut self, hook: H) -> Self {
        if !self.ensure_open() {
            return self;
        }
        self.output_hook = Some(Arc::new(hook));
        self
    }

    /// Allows the generator to overwrite existing output files.
    pub fn enable_file_override(mut self) -> Self {
        if !self.ensure_open() {
            return self;
        }
        self.file_override = true;
        self
    }

    /// Allows the generator to overwrite existing output files.
    #[deprecated(since = "0.2.0", note = "use `enable_file_override` instead")]
    pub fn file_override(self) -> Self {
        FILE_OVERRIDE_DEPRECATION.get_or_init(|| {
            tracing::warn!(
                "`InjectionConfigBuilder::file_override` is deprecated and will be removed; \
                 use `enable_file_override` instead"
            );
        });
        self.enable_file_override()
    }

    /// Applies declarative settings.
    ///
    /// Maps present in the settings replace the builder's; maps missing from the
    /// settings leave the builder's untouched, and an explicit `null` is
    /// rejected. The override flag is only ever turned on, never off.
    pub fn settings(mut self, settings: InjectionSettings) -> Self {
        match settings.static_context {
            Setting::Value(context) => self = self.static_context(context),
            Setting::Absent => {}
            Setting::Null => {
                self.record(InjectionError::invalid_config(
                    "static_context must be a mapping, got null",
                ));
                return self;
            }
        }
        match settings.template_files {
            Setting::Value(files) => self = self.template_files(files),
            Setting::Absent => {}
            Setting::Null => {
                self.record(InjectionError::invalid_config(
                    "template_files must be a mapping, got null",
                ));
                return self;
            }
        }
        if settings.file_override {
            self = self.enable_file_override();
        }
        self
    }

    /// Finalizes the config.
    ///
    /// Fails with [`InjectionError::InvalidConfig`] if any setter rejected its
    /// input. Repeated calls return the same instance.
    pub fn build(&mut self) -> Result<Arc<InjectionConfig>> {
        if let Some(msg) = &self.error {
            return Err(InjectionError::InvalidConfig(msg.clone()));
        }
        if let Some(config) = &self.built {
            return Ok(Arc::clone(config));
        }

        let config = Arc::new(InjectionConfig {
            static_context: std::mem::take(&mut self.static_context),
            template_files: std::mem::take(&mut self.template_files),
            file_override: self.file_override,
            output_hook: self.output_hook.take(),
        });
        tracing::debug!(
            static_entries = config.static_context().len(),
            template_files = config.template_files().len(),
            file_override = config.is_file_override(),
            has_hook = config.has_output_hook(),
            "built injection config"
        );
        self.built = Some(Arc::clone(&config));
        Ok(config)
    }

    /// Records a setter call made after `build()`. Returns false if closed.
    fn ensure_open(&mut self) -> bool {
        if self.built.is_some() {
            self.record(InjectionError::invalid_config(
                "builder already produced a config; start a new builder",
            ));
            return false;
        }
        true
    }

    fn record(&mut self, err: InjectionError) {
        tracing::debug!(error = %err, "rejected injection setting");
        if self.error.is_none() {
            self.error = Some(match err {
                InjectionError::InvalidConfig(msg) => msg,
                other => other.to_string(),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::ContextMap;
    use crate::table::TableInfo;
    use serde_json::{json, Value};
    use std::collections::HashMap;

    #[test]
    fn defaults() {
        let config = InjectionConfigBuilder::new().build().unwrap();
        assert!(config.static_context().is_empty());
        assert!(config.template_files().is_empty());
        assert!(!config.is_file_override());
        assert!(!config.has_output_hook());
    }

    #[test]
    fn static_context_from_hashmap() {
        let map = HashMap::from([("author", "alice")]);
        let config = InjectionConfigBuilder::new()
            .static_context(map)
            .build()
            .unwrap();
        assert_eq!(config.static_context()["author"], json!("alice"));
    }

    #[test]
    fn static_context_from_struct() {
        #[derive(Serialize)]
        struct Globals {
            author: &'static str,
            swagger: bool,
        }

        let config = InjectionConfigBuilder::new()
            .static_context(Globals {
                author: "alice",
                swagger: true,
            })
            .build()
            .unwrap();
        assert_eq!(config.static_context()["swagger"], json!(true));
    }

    #[test]
    fn static_context_replaces_wholesale() {
        let config = InjectionConfigBuilder::new()
            .static_context(json!({"a": 1, "b": 2}))
            .static_context(json!({"c": 3}))
            .build()
            .unwrap();

        assert_eq!(config.static_context().len(), 1);
        assert!(!config.static_context().contains_key("a"));
    }

    #[test]
    fn null_static_context_fails_build() {
        for null in [Value::Null, serde_json::to_value(None::<HashMap<String, String>>).unwrap()] {
            let err = InjectionConfigBuilder::new()
                .static_context(null)
                .build()
                .unwrap_err();
            assert!(err.is_invalid_config());
        }

        let err = InjectionConfigBuilder::new()
            .static_context(())
            .build()
            .unwrap_err();
        assert!(err.is_invalid_config());
    }

    #[test]
    fn non_mapping_static_context_fails_build() {
        let err = InjectionConfigBuilder::new()
            .static_context(vec!["author"])
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("an array"));
    }

    #[test]
    fn first_error_wins() {
        let err = InjectionConfigBuilder::new()
            .static_context(Value::Null)
            .template_file("", "/tpl/a.vm")
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("static context"));
    }

    #[test]
    fn failed_build_stays_failed() {
        let mut builder = InjectionConfigBuilder::new().static_context(Value::Null);
        assert!(builder.build().is_err());
        assert!(builder.build().is_err());
    }

    #[test]
    fn template_files_replace_wholesale() {
        let config = InjectionConfigBuilder::new()
            .template_file("dto.java", "/tpl/dto.java.vm")
            .template_files([("vo.java", "/tpl/vo.java.vm")])
            .build()
            .unwrap();

        assert_eq!(config.template_file("dto.java"), None);
        assert_eq!(config.template_file("vo.java"), Some("/tpl/vo.java.vm"));
    }

    #[test]
    fn template_file_adds() {
        let config = InjectionConfigBuilder::new()
            .template_files([("vo.java", "/tpl/vo.java.vm")])
            .template_file("dto.java", "/tpl/dto.java.vm")
            .build()
            .unwrap();
        assert_eq!(config.template_files().len(), 2);
    }

    #[test]
    fn empty_template_locator_fails_build() {
        let err = InjectionConfigBuilder::new()
            .template_files([("dto.java", "")])
            .build()
            .unwrap_err();
        assert!(err.is_invalid_config());
    }

    #[test]
    fn blank_template_locator_fails_build() {
        let err = InjectionConfigBuilder::new()
            .template_file("mapper.xml.vm", "   ")
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("mapper.xml.vm"));
    }

    #[test]
    fn second_hook_replaces_first() {
        let config = InjectionConfigBuilder::new()
            .output_hook(|_: &TableInfo, ctx: &mut ContextMap| {
                ctx.insert("first".into(), json!(true));
            })
            .output_hook(|_: &TableInfo, ctx: &mut ContextMap| {
                ctx.insert("second".into(), json!(true));
            })
            .build()
            .unwrap();

        let ctx = config.merged_context(&TableInfo::new("t"), ContextMap::new());
        assert!(!ctx.contains_key("first"));
        assert_eq!(ctx["second"], json!(true));
    }

    #[test]
    fn enable_file_override_is_idempotent() {
        let config = InjectionConfigBuilder::new()
            .enable_file_override()
            .enable_file_override()
            .build()
            .unwrap();
        assert!(config.is_file_override());
    }

    #[test]
    #[allow(deprecated)]
    fn deprecated_file_override_forwards() {
        let config = InjectionConfigBuilder::new()
            .file_override()
            .file_override()
            .build()
            .unwrap();
        assert!(config.is_file_override());
    }

    #[test]
    fn build_twice_returns_same_instance() {
        let mut builder = InjectionConfigBuilder::new().static_context(json!({"a": 1}));
        let first = builder.build().unwrap();
        let second = builder.build().unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(second.static_context()["a"], json!(1));
    }

    #[test]
    fn setter_after_build_is_rejected() {
        let mut builder = InjectionConfigBuilder::new();
        let built = builder.build().unwrap();

        let mut builder = builder.enable_file_override();
        let err = builder.build().unwrap_err();
        assert!(err.to_string().contains("already produced"));
        // The config handed out earlier is unchanged
        assert!(!built.is_file_override());
    }
}
