//! Null field
//!
//! Leaf field that accepts JSON null and nothing else. `Null` is this
//! variant's expected shape, so the usual absent-value rule never applies:
//! `validate(Null)` passes whether or not the field is required. The flag is
//! still carried for contract uniformity.

use serde_json::Value;

use crate::core::{Field, FieldKind, ValidationError, ValidationErrors, value_kind};

// ============================================================================
// NULL FIELD
// ============================================================================

/// Validates that a value is exactly JSON null.
///
/// Useful for fields that must be explicitly cleared, or as a placeholder in
/// schemas describing tombstoned members.
///
/// # Examples
///
/// ```rust
/// use fieldcheck::prelude::*;
/// use serde_json::json;
///
/// let tombstone = null("deleted_at");
///
/// assert!(tombstone.validate(&json!(null)).is_ok());
/// assert!(tombstone.validate(&json!(0)).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct NullField {
    name: String,
    required: bool,
}

impl NullField {
    /// Creates a null field.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            required: false,
        }
    }

    /// Marks the field required. Null is this variant's expected shape, so
    /// the flag never rejects a null value; it is carried for contract
    /// uniformity and schema introspection only.
    #[must_use = "builder methods must be chained or built"]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

impl Field for NullField {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> FieldKind {
        FieldKind::Null
    }

    fn is_required(&self) -> bool {
        self.required
    }

    fn validate(&self, value: &Value) -> Result<(), ValidationErrors> {
        if value.is_null() {
            return Ok(());
        }

        Err(ValidationError::kind_mismatch(
            self.name.clone(),
            FieldKind::Null.as_str(),
            value_kind(value),
        )
        .into())
    }
}

/// Creates a null field.
pub fn null(name: impl Into<String>) -> NullField {
    NullField::new(name)
}

// ============================================================================
// TESTS
// ============================================================================
