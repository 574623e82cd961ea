//! # tablegen-inject - Context Injection for Table-Driven Code Generators
//!
//! A code generator that emits one set of files per database table usually
//! needs a way for callers to customize what the templates see without forking
//! the engine. `tablegen-inject` is that customization layer. It does not walk
//! tables, render templates or write files; it only decides what goes into each
//! table's context map and reports the caller's choices about template sources
//! and overwriting.
//!
//! ## Core Concepts
//!
//! - [`StaticContext`]: Values copied into every table's context
//! - [`OutputHook`]: Per-table callback that may edit the context last
//! - [`TemplateFiles`]: Logical template name to alternate template locator
//! - [`InjectionConfig`]: The read-only bundle of all of the above plus the
//!   file-override flag
//! - [`InjectionConfigBuilder`]: Fluent, validating construction
//! - [`InjectionSettings`]: The declarative (YAML/JSON) subset of a config
//!
//! ## Merge Order
//!
//! [`InjectionConfig::before_output_file`] runs once per table, right before
//! rendering:
//!
//! ```text
//! engine-populated context
//!   → static context copied in (overwrites engine keys)
//!   → output hook (overwrites anything)
//!   → renderer
//! ```
//!
//! The hook always has the last word.
//!
//! ## Quick Start
//!
//! ```rust
//! use tablegen_inject::{ContextMap, InjectionConfig, TableField, TableInfo};
//! use serde_json::json;
//!
//! let config = InjectionConfig::builder()
//!     .static_context(json!({"author": "alice"}))
//!     .template_file("mapper.xml.vm", "/templates/custom/mapper.xml.vm")
//!     .output_hook(|table: &TableInfo, ctx: &mut ContextMap| {
//!         let keys: Vec<_> = table.primary_keys().map(|f| f.property_name.clone()).collect();
//!         ctx.insert("primary_keys".into(), json!(keys));
//!     })
//!     .build()
//!     .unwrap();
//!
//! let table = TableInfo::new("sys_user").with_field(TableField::new("user_id", "bigint").primary_key());
//! let ctx = config.merged_context(&table, ContextMap::new());
//!
//! assert_eq!(ctx["author"], json!("alice"));
//! assert_eq!(ctx["primary_keys"], json!(["userId"]));
//! assert_eq!(config.template_file("entity.java.vm"), None); // engine default
//! assert!(!config.is_file_override());
//! ```
//!
//! ## Sharing Across Workers
//!
//! A built config is handed out as `Arc<InjectionConfig>` and is `Send + Sync`.
//! Each worker must pass its own context map.

pub mod builder;
pub mod config;
pub mod context;
mod error;
pub mod hook;
pub mod settings;
pub mod table;
pub mod template_files;

pub use builder::InjectionConfigBuilder;
pub use config::InjectionConfig;
pub use context::{ContextMap, StaticContext};
pub use error::{InjectionError, Result};
pub use hook::OutputHook;
pub use settings::{InjectionSettings, Setting};
pub use table::{TableField, TableInfo};
pub use template_files::TemplateFiles;
