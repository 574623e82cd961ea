//! Table metadata handed to output hooks.
//!
//! [`TableInfo`] is produced by whatever introspects the database and consumed by
//! [`OutputHook`](crate::OutputHook) implementations. The injection layer itself
//! only passes it through.

use heck::{ToLowerCamelCase, ToUpperCamelCase};
use serde::{Deserialize, Serialize};

/// A single column of a table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableField {
    /// Column name as it appears in the database (e.g. `"user_name"`).
    pub name: String,
    /// Database column type (e.g. `"varchar(64)"`).
    pub column_type: String,
    /// Property name used in generated code (e.g. `"userName"`).
    pub property_name: String,
    /// Whether the column is part of the primary key.
    #[serde(default)]
    pub primary_key: bool,
}

impl TableField {
    /// Creates a field, deriving the property name from the column name.
    pub fn new(name: impl Into<String>, column_type: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            property_name: name.to_lower_camel_case(),
            name,
            column_type: column_type.into(),
            primary_key: false,
        }
    }

    /// Marks the field as a primary key column.
    pub fn primary_key(mut self) -> Self {
        self.primary_key = true;
        self
    }

    /// Overrides the derived property name.
    pub fn with_property_name(mut self, property_name: impl Into<String>) -> Self {
        self.property_name = property_name.into();
        self
    }
}

/// Metadata describing the table currently being generated.
///
/// # Example
///
/// ```rust
/// use tablegen_inject::{TableField, TableInfo};
///
/// let table = TableInfo::new("sys_user")
///     .with_comment("system users")
///     .with_field(TableField::new("id", "bigint").primary_key())
///     .with_field(TableField::new("user_name", "varchar(64)"));
///
/// assert_eq!(table.entity_name, "SysUser");
/// assert_eq!(table.fields[1].property_name, "userName");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableInfo {
    /// Table name as it appears in the database.
    pub name: String,
    /// Table comment, if the database has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    /// Entity type name used in generated code.
    pub entity_name: String,
    /// Columns in declaration order.
    #[serde(default)]
    pub fields: Vec<TableField>,
}

impl TableInfo {
    /// Creates table metadata, deriving the entity name from the table name.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            entity_name: name.to_upper_camel_case(),
            name,
            comment: None,
            fields: Vec::new(),
        }
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn with_entity_name(mut self, entity_name: impl Into<String>) -> Self {
        self.entity_name = entity_name.into();
        self
    }

    pub fn with_field(mut self, field: TableField) -> Self {
        self.fields.push(field);
        self
    }

    /// Returns the primary key columns, in declaration order.
    pub fn primary_keys(&self) -> impl Iterator<Item = &TableField> {
        self.fields.iter().filter(|f| f.primary_key)
    }

    /// Looks up a column by its database name.
    pub fn field(&self, name: &str) -> Option<&TableField> {
        self.fields.iter().find(|f| f.name == name)
    }
}
