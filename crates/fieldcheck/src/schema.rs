//! Schema
//!
//! The root collection: an ordered list of fields validated against an
//! object's members. A missing key and an explicit JSON null are equivalent
//! at validation time — both are presented to the child field as `Null`, so
//! the field's required flag decides whether absence is acceptable.

use std::fmt;

use serde_json::Value;

use crate::core::{Field, FieldKind, ValidationError, ValidationErrors, value_kind};

// ============================================================================
// SCHEMA
// ============================================================================

/// An ordered collection of fields validated against an object's members.
///
/// Each declared field is looked up by name in the object; every failing
/// field contributes one `property_invalid` error wrapping the field's own
/// failures, and the report preserves declaration order. Members the schema
/// does not declare are ignored.
///
/// A schema has no name and no required flag of its own; nesting one under
/// a name is what [`ObjectField`](crate::fields::ObjectField) is for.
///
/// # Examples
///
/// ```rust
/// use fieldcheck::prelude::*;
/// use serde_json::json;
///
/// let schema = Schema::new()
///     .field(string("name").required().min_length(1))
///     .field(integer("age").range(13, 120));
///
/// assert!(schema.validate(&json!({"name": "Alice", "age": 30})).is_ok());
///
/// // Missing key and explicit null are both absences:
/// let report = schema.validate(&json!({"age": null})).unwrap_err();
/// assert_eq!(report.len(), 1);
/// assert_eq!(report.first().unwrap().field.as_deref(), Some("name"));
/// ```
#[derive(Default)]
pub struct Schema {
    fields: Vec<Box<dyn Field>>,
}

impl Schema {
    /// Creates an empty schema.
    #[must_use]
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Appends one field; declaration order is preserved in reports.
    #[must_use = "builder methods must be chained or built"]
    pub fn field(mut self, field: impl Field + 'static) -> Self {
        self.fields.push(Box::new(field));
        self
    }

    /// Returns the declared fields in declaration order.
    #[must_use]
    pub fn fields(&self) -> &[Box<dyn Field>] {
        &self.fields
    }

    /// Validates a decoded value against every declared field.
    ///
    /// The value must be an object; anything else (a root `Null` included)
    /// is a single kind-mismatch error. Each declared field is then run
    /// against the member of the same name (missing members validate as
    /// `Null`), and every failing field contributes one `property_invalid`
    /// wrapper carrying its failures.
    pub fn validate(&self, value: &Value) -> Result<(), ValidationErrors> {
        let Some(members) = value.as_object() else {
            return Err(ValidationError::new(
                "kind_mismatch",
                format!(
                    "Expected {}, got {}",
                    FieldKind::Object.as_str(),
                    value_kind(value)
                ),
            )
            .with_param("expected", FieldKind::Object.as_str())
            .with_param("actual", value_kind(value))
            .into());
        };

        let mut errors = ValidationErrors::new();

        for field in &self.fields {
            let member = members.get(field.name()).unwrap_or(&Value::Null);
            if let Err(failures) = field.validate(member) {
                errors.add(
                    ValidationError::property_invalid(field.name().to_owned())
                        .with_nested(failures.into_vec()),
                );
            }
        }

        errors.into_result(())
    }
}

impl fmt::Debug for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.fields.iter().map(|field| field.name()).collect();
        f.debug_struct("Schema").field("fields", &names).finish()
    }
}

// ============================================================================
// TESTS
// ============================================================================
