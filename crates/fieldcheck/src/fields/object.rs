//! Object field
//!
//! Composite field for keyed members: type-checks the object shape, then
//! delegates to an owned [`Schema`]. Nesting a schema under a name is how
//! object trees recurse to arbitrary depth.

use std::fmt;

use serde_json::Value;

use crate::core::{Field, FieldKind, ValidationError, ValidationErrors, value_kind};
use crate::schema::Schema;

// ============================================================================
// OBJECT FIELD
// ============================================================================

/// Validates a JSON object against a nested schema.
///
/// The shape check cites this field's name; everything past it (member
/// lookup, missing-key-as-null, one `property_invalid` wrapper per failing
/// member) is the schema's contract. Members the schema does not declare
/// are ignored.
///
/// # Examples
///
/// ```rust
/// use fieldcheck::prelude::*;
/// use serde_json::json;
///
/// let address = object(
///     "address",
///     Schema::new()
///         .field(string("city").required().min_length(1))
///         .field(string("zip").required()),
/// )
/// .required();
///
/// assert!(address.validate(&json!({"city": "Oslo", "zip": "0150"})).is_ok());
/// assert!(address.validate(&json!({"city": "Oslo"})).is_err());
/// assert!(address.validate(&json!("not an object")).is_err());
/// ```
pub struct ObjectField {
    name: String,
    required: bool,
    schema: Schema,
}

impl ObjectField {
    /// Creates an object field whose members are validated by `schema`.
    pub fn new(name: impl Into<String>, schema: Schema) -> Self {
        Self {
            name: name.into(),
            required: false,
            schema,
        }
    }

    /// Rejects null values.
    #[must_use = "builder methods must be chained or built"]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Returns the nested schema.
    #[must_use]
    pub fn schema(&self) -> &Schema {
        &self.schema
    }
}

impl Field for ObjectField {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> FieldKind {
        FieldKind::Object
    }

    fn is_required(&self) -> bool {
        self.required
    }

    fn validate(&self, value: &Value) -> Result<(), ValidationErrors> {
        if value.is_null() {
            if self.required {
                return Err(ValidationError::required(self.name.clone()).into());
            }
            return Ok(());
        }

        if !value.is_object() {
            return Err(ValidationError::kind_mismatch(
                self.name.clone(),
                FieldKind::Object.as_str(),
                value_kind(value),
            )
            .into());
        }

        self.schema.validate(value)
    }
}

impl fmt::Debug for ObjectField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectField")
            .field("name", &self.name)
            .field("required", &self.required)
            .field("schema", &self.schema)
            .finish()
    }
}

/// Creates an object field whose members are validated by `schema`.
pub fn object(name: impl Into<String>, schema: Schema) -> ObjectField {
    ObjectField::new(name, schema)
}

// ============================================================================
// TESTS
// ============================================================================
