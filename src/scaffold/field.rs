//! Field definitions for CRUD scaffolding
//!
//! A field is a (name, type) pair collected interactively. The type set is
//! closed: it is exactly the set of choices offered by the type prompt, and
//! each type maps to one schema-builder method in the generated migration
//! and one input flavor in the generated views.

use std::fmt;
use std::slice;

/// Field type, as offered by the interactive type prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    /// Short string column (`VARCHAR`)
    String,
    /// Integer column
    Integer,
    /// Unbounded text column; rendered as a multi-line input in views
    Text,
    /// Boolean column
    Boolean,
    /// Date column; rendered as a date-typed input in views
    Date,
    /// Fixed-precision decimal column
    Decimal,
}

impl FieldType {
    /// All types, in prompt order. The first entry is the prompt default.
    pub const ALL: [Self; 6] = [
        Self::String,
        Self::Integer,
        Self::Text,
        Self::Boolean,
        Self::Date,
        Self::Decimal,
    ];

    /// Schema-builder method name used in the generated migration.
    #[must_use]
    pub const fn schema_method(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Integer => "integer",
            Self::Text => "text",
            Self::Boolean => "boolean",
            Self::Date => "date",
            Self::Decimal => "decimal",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.schema_method())
    }
}

/// A single accepted (name, type) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Field name as entered (e.g., "title")
    pub name: String,
    /// Field type selected from [`FieldType::ALL`]
    pub field_type: FieldType,
}

impl Field {
    /// Schema declaration line for the generated migration, e.g.
    /// `$table->string('title');` with the surrounding closure's indent.
    #[must_use]
    pub fn schema_line(&self) -> String {
        format!(
            "            $table->{}('{}');",
            self.field_type.schema_method(),
            self.name
        )
    }
}

/// Ordered field accumulator with case-sensitive name uniqueness.
///
/// Insertion order is preserved and reflected in generated schema and form
/// order. The accumulator is threaded through the run as an explicit value;
/// there is no ambient state.
#[derive(Debug, Clone, Default)]
pub struct FieldList {
    fields: Vec<Field>,
}

impl FieldList {
    /// Create an empty field list.
    #[must_use]
    pub const fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Whether a field with this exact name was already accepted.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.fields.iter().any(|f| f.name == name)
    }

    /// Append a field, rejecting duplicate names.
    ///
    /// Returns `false` (and appends nothing) when the name is already
    /// taken; the comparison is case-sensitive, exact match.
    pub fn push(&mut self, name: impl Into<String>, field_type: FieldType) -> bool {
        let name = name.into();
        if self.contains(&name) {
            return false;
        }
        self.fields.push(Field { name, field_type });
        true
    }

    /// Iterate fields in insertion order.
    pub fn iter(&self) -> slice::Iter<'_, Field> {
        self.fields.iter()
    }

    /// Number of accepted fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether no fields were accepted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<'a> IntoIterator for &'a FieldList {
    type Item = &'a Field;
    type IntoIter = slice::Iter<'a, Field>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}
