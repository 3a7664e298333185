//! Array field
//!
//! The representative composite: type-checks the container shape, applies
//! length bounds over the element count, then delegates every element to one
//! nested item field and folds container failures plus per-element failures
//! into a single ordered report. Elements are never skipped: a failing
//! element at index 0 does not stop index 1 from being checked.

use std::fmt;

use serde_json::Value;

use crate::core::{Field, FieldKind, ValidationError, ValidationErrors, value_kind};

// ============================================================================
// ARRAY FIELD
// ============================================================================

/// Validates a JSON array: length bounds first, then every element against
/// the nested item field.
///
/// The item field is owned as a `Box<dyn Field>`, so arrays nest openly —
/// an array of arrays of floats needs no special casing. Each failing
/// element contributes one `item_invalid` error carrying the element index
/// and a rendering of the element value, with the item field's own failures
/// attached verbatim as nested errors.
///
/// Result ordering is evaluation ordering: the length-min check, the
/// length-max check, then elements in index order.
///
/// # Examples
///
/// ```rust
/// use fieldcheck::prelude::*;
/// use serde_json::json;
///
/// let scores = array("scores", float("score").required().positive())
///     .required()
///     .min_length(1);
///
/// assert!(scores.validate(&json!([1.5, 2.0])).is_ok());
///
/// // Both bad elements are reported, not just the first:
/// let report = scores.validate(&json!([1.0, -2.0, 3.0, -4.0])).unwrap_err();
/// assert_eq!(report.len(), 2);
/// ```
pub struct ArrayField {
    name: String,
    required: bool,
    items: Box<dyn Field>,
    min_length: Option<usize>,
    max_length: Option<usize>,
}

impl ArrayField {
    /// Creates an array field whose elements are validated by `items`.
    pub fn new(name: impl Into<String>, items: impl Field + 'static) -> Self {
        Self {
            name: name.into(),
            required: false,
            items: Box::new(items),
            min_length: None,
            max_length: None,
        }
    }

    /// Rejects null values.
    #[must_use = "builder methods must be chained or built"]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Requires at least `length` elements (inclusive).
    #[must_use = "builder methods must be chained or built"]
    pub fn min_length(mut self, length: usize) -> Self {
        self.min_length = Some(length);
        self
    }

    /// Requires at most `length` elements (inclusive).
    #[must_use = "builder methods must be chained or built"]
    pub fn max_length(mut self, length: usize) -> Self {
        self.max_length = Some(length);
        self
    }

    /// Returns the nested item field.
    #[must_use]
    pub fn items(&self) -> &dyn Field {
        &*self.items
    }
}

impl Field for ArrayField {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> FieldKind {
        FieldKind::Array
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

        let Some(elements) = value.as_array() else {
            return Err(ValidationError::kind_mismatch(
                self.name.clone(),
                FieldKind::Array.as_str(),
                value_kind(value),
            )
            .into());
        };

        let mut errors = ValidationErrors::new();
        let count = elements.len();

        if let Some(min) = self.min_length {
            if count < min {
                errors.add(
                    ValidationError::new(
                        "min_length",
                        format!("Array must have at least {min} elements, got {count}"),
                    )
                    .with_field(self.name.clone())
                    .with_param("min", min.to_string())
                    .with_param("actual", count.to_string()),
                );
            }
        }

        if let Some(max) = self.max_length {
            if count > max {
                errors.add(
                    ValidationError::new(
                        "max_length",
                        format!("Array must have at most {max} elements, got {count}"),
                    )
                    .with_field(self.name.clone())
                    .with_param("max", max.to_string())
                    .with_param("actual", count.to_string()),
                );
            }
        }

        for (index, element) in elements.iter().enumerate() {
            if let Err(failures) = self.items.validate(element) {
                errors.add(
                    ValidationError::item_invalid(self.name.clone(), index, element.to_string())
                        .with_nested(failures.into_vec()),
                );
            }
        }

        errors.into_result(())
    }
}

impl fmt::Debug for ArrayField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArrayField")
            .field("name", &self.name)
            .field("required", &self.required)
            .field("items", &self.items.name())
            .field("min_length", &self.min_length)
            .field("max_length", &self.max_length)
            .finish()
    }
}

/// Creates an array field whose elements are validated by `items`.
pub fn array(name: impl Into<String>, items: impl Field + 'static) -> ArrayField {
    ArrayField::new(name, items)
}

// ============================================================================
// TESTS
// ============================================================================
