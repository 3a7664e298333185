//! Boolean field
//!
//! Leaf field for JSON booleans. The only constraint is an expected
//! constant; a string `"true"` is a kind mismatch, never a coercion.

use serde_json::Value;

use crate::core::{Field, FieldKind, ValidationError, ValidationErrors, value_kind};

// ============================================================================
// BOOLEAN FIELD
// ============================================================================

/// Validates a JSON boolean, optionally against an expected constant.
///
/// # Examples
///
/// ```rust
/// use fieldcheck::prelude::*;
/// use serde_json::json;
///
/// let terms = boolean("terms_accepted").required().must_be(true);
///
/// assert!(terms.validate(&json!(true)).is_ok());
/// assert!(terms.validate(&json!(false)).is_err());
/// assert!(terms.validate(&json!("true")).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct BooleanField {
    name: String,
    required: bool,
    expected: Option<bool>,
}

impl BooleanField {
    /// Creates a boolean field with no constraints configured.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            required: false,
            expected: None,
        }
    }

    /// Rejects null values.
    #[must_use = "builder methods must be chained or built"]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Requires the value to equal `expected`. Calling again replaces the
    /// previous constant.
    #[must_use = "builder methods must be chained or built"]
    pub fn must_be(mut self, expected: bool) -> Self {
        self.expected = Some(expected);
        self
    }
}

impl Field for BooleanField {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> FieldKind {
        FieldKind::Boolean
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

        let Some(actual) = value.as_bool() else {
            return Err(ValidationError::kind_mismatch(
                self.name.clone(),
                FieldKind::Boolean.as_str(),
                value_kind(value),
            )
            .into());
        };

        let mut errors = ValidationErrors::new();

        if let Some(expected) = self.expected {
            if actual != expected {
                errors.add(
                    ValidationError::new("constant", format!("Value must be {expected}"))
                        .with_field(self.name.clone())
                        .with_param("expected", expected.to_string())
                        .with_param("actual", actual.to_string()),
                );
            }
        }

        errors.into_result(())
    }
}

/// Creates a boolean field.
pub fn boolean(name: impl Into<String>) -> BooleanField {
    BooleanField::new(name)
}

// ============================================================================
// TESTS
// ============================================================================
