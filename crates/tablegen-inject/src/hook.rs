//! Per-table output hook.
//!
//! An [`OutputHook`] runs once per table, right before that table's files are
//! rendered. It sees the table metadata and the context map after static context
//! has been applied, and may add, replace or remove any entry.
//!
//! ```text
//! engine-populated context
//!   → static context copied in
//!   → OUTPUT HOOK (table, &mut context)
//!   → renderer
//! ```
//!
//! Hooks return nothing; all communication happens through the map. A hook that
//! panics is not caught, the panic reaches whoever called
//! [`InjectionConfig::before_output_file`](crate::InjectionConfig::before_output_file).

use crate::context::ContextMap;
use crate::table::TableInfo;

/// Trait for per-table context customization.
///
/// A blanket implementation covers closures, so most callers never implement
/// this trait by hand:
///
/// ```rust
/// use tablegen_inject::{ContextMap, InjectionConfig, TableInfo};
/// use serde_json::json;
///
/// let config = InjectionConfig::builder()
///     .output_hook(|table: &TableInfo, ctx: &mut ContextMap| {
///         ctx.insert("mapper_name".into(), json!(format!("{}Mapper", table.entity_name)));
///     })
///     .build()
///     .unwrap();
/// # let _ = config;
/// ```
///
/// Hooks must be `Send + Sync` because a built config may be shared across
/// generator worker threads.
pub trait OutputHook: Send + Sync {
    /// Customize the context for `table`.
    fn before_output_file(&self, table: &TableInfo, context: &mut ContextMap);
}

impl<F> OutputHook for F
where
    F: Fn(&TableInfo, &mut ContextMap) + Send + Sync,
{
    fn before_output_file(&self, table: &TableInfo, context: &mut ContextMap) {
        (self)(table, context)
    }
}
