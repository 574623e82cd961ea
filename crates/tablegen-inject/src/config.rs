//! The assembled injection configuration.

use std::fmt;
use std::sync::Arc;

use crate::builder::InjectionConfigBuilder;
use crate::context::{ContextMap, StaticContext};
use crate::hook::OutputHook;
use crate::table::TableInfo;
use crate::template_files::TemplateFiles;

/// Read-only injection settings for one generation run.
///
/// Built once through [`InjectionConfigBuilder`] and shared as
/// `Arc<InjectionConfig>` with the generator engine. It holds no per-table
/// state: everything table-specific lives in the context map passed to
/// [`before_output_file`](Self::before_output_file).
///
/// # Example
///
/// ```rust
/// use tablegen_inject::{ContextMap, InjectionConfig, TableInfo};
/// use serde_json::json;
///
/// let config = InjectionConfig::builder()
///     .static_context(json!({"author": "alice"}))
///     .output_hook(|_: &TableInfo, ctx: &mut ContextMap| {
///         ctx.insert("author".into(), json!("bob"));
///         ctx.insert("date".into(), json!("2024-01-01"));
///     })
///     .build()
///     .unwrap();
///
/// let mut ctx = ContextMap::new();
/// config.before_output_file(&TableInfo::new("sys_user"), &mut ctx);
///
/// assert_eq!(ctx["author"], json!("bob"));
/// assert_eq!(ctx["date"], json!("2024-01-01"));
/// ```
pub struct InjectionConfig {
    pub(crate) static_context: StaticContext,
    pub(crate) template_files: TemplateFiles,
    pub(crate) file_override: bool,
    pub(crate) output_hook: Option<Arc<dyn OutputHook>>,
}

impl InjectionConfig {
    /// Starts a new builder.
    pub fn builder() -> InjectionConfigBuilder {
        InjectionConfigBuilder::new()
    }

    /// Populates `context` for `table` just before its files are rendered.
    ///
    /// Static context is copied in first, overwriting anything the engine put
    /// there. The output hook runs second, so its writes win over static values.
    /// With no static context and no hook, `context` is left untouched.
    pub fn before_output_file(&self, table: &TableInfo, context: &mut ContextMap) {
        tracing::trace!(
            table = %table.name,
            static_entries = self.static_context.len(),
            has_hook = self.output_hook.is_some(),
            "injecting context before output"
        );

        if !self.static_context.is_empty() {
            self.static_context.apply_to(context);
        }
        if let Some(hook) = &self.output_hook {
            hook.before_output_file(table, context);
        }
    }

    /// Owned-map form of [`before_output_file`](Self::before_output_file).
    pub fn merged_context(&self, table: &TableInfo, mut context: ContextMap) -> ContextMap {
        self.before_output_file(table, &mut context);
        context
    }

    /// The static context applied to every table.
    pub fn static_context(&self) -> &ContextMap {
        self.static_context.get()
    }

    /// The template override registry.
    pub fn template_files(&self) -> &TemplateFiles {
        &self.template_files
    }

    /// Looks up an alternate template for `name`. `None` means use the default.
    pub fn template_file(&self, name: &str) -> Option<&str> {
        self.template_files.get(name)
    }

    /// Whether existing output files may be overwritten during this run.
    pub fn is_file_override(&self) -> bool {
        self.file_override
    }

    pub fn has_output_hook(&self) -> bool {
        self.output_hook.is_some()
    }
}

impl Default for InjectionConfig {
    fn default() -> Self {
        Self {
            static_context: StaticContext::new(),
            template_files: TemplateFiles::new(),
            file_override: false,
            output_hook: None,
        }
    }
}

impl fmt::Debug for InjectionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InjectionConfig")
            .field("static_context", &self.static_context)
            .field("template_files", &self.template_files)
            .field("file_override", &self.file_override)
            .field("output_hook", &self.output_hook.is_some())
            .finish()
    }
}
