//! Integer field
//!
//! Leaf field for JSON numbers without a fractional part. A number like
//! `2.5` is a kind mismatch here, not a truncation candidate; floats never
//! narrow into an integer field.

use serde_json::Value;

use crate::core::{Field, FieldKind, ValidationError, ValidationErrors, value_kind};
use crate::fields::format_ranges;

// ============================================================================
// INTEGER FIELD
// ============================================================================

/// Validates a JSON integer against sign, bound and range constraints.
///
/// Constraint semantics are identical to [`FloatField`](crate::fields::FloatField)
/// over `i64`: opt-in, exhaustively evaluated, scalar bounds replaced on
/// repeat calls, ranges appended as disjunctive alternatives.
///
/// # Examples
///
/// ```rust
/// use fieldcheck::prelude::*;
/// use serde_json::json;
///
/// let port = integer("port").required().range(1, 65535);
///
/// assert!(port.validate(&json!(8080)).is_ok());
/// assert!(port.validate(&json!(0)).is_err());
/// assert!(port.validate(&json!(80.5)).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct IntegerField {
    name: String,
    required: bool,
    positive: bool,
    negative: bool,
    min: Option<i64>,
    max: Option<i64>,
    ranges: Vec<(i64, i64)>,
}

impl IntegerField {
    /// Creates an integer field with no constraints configured.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            required: false,
            positive: false,
            negative: false,
            min: None,
            max: None,
            ranges: Vec::new(),
        }
    }

    /// Rejects null values.
    #[must_use = "builder methods must be chained or built"]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Requires the value to be strictly greater than zero.
    #[must_use = "builder methods must be chained or built"]
    pub fn positive(mut self) -> Self {
        self.positive = true;
        self
    }

    /// Requires the value to be strictly less than zero.
    #[must_use = "builder methods must be chained or built"]
    pub fn negative(mut self) -> Self {
        self.negative = true;
        self
    }

    /// Requires the value to be at least `bound` (inclusive).
    #[must_use = "builder methods must be chained or built"]
    pub fn min(mut self, bound: i64) -> Self {
        self.min = Some(bound);
        self
    }

    /// Requires the value to be at most `bound` (inclusive).
    #[must_use = "builder methods must be chained or built"]
    pub fn max(mut self, bound: i64) -> Self {
        self.max = Some(bound);
        self
    }

    /// Adds one `[low, high]` alternative to the range set; the value must
    /// fall within at least one registered alternative.
    #[must_use = "builder methods must be chained or built"]
    pub fn range(mut self, low: i64, high: i64) -> Self {
        self.ranges.push((low, high));
        self
    }
}

impl Field for IntegerField {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> FieldKind {
        FieldKind::Integer
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

        let Some(number) = value.as_i64() else {
            return Err(ValidationError::kind_mismatch(
                self.name.clone(),
                FieldKind::Integer.as_str(),
                value_kind(value),
            )
            .into());
        };

        let mut errors = ValidationErrors::new();

        if self.positive && number <= 0 {
            errors.add(
                ValidationError::new("positive", format!("Value must be positive, got {number}"))
                    .with_field(self.name.clone())
                    .with_param("actual", number.to_string()),
            );
        }

        if self.negative && number >= 0 {
            errors.add(
                ValidationError::new("negative", format!("Value must be negative, got {number}"))
                    .with_field(self.name.clone())
                    .with_param("actual", number.to_string()),
            );
        }

        if let Some(min) = self.min {
            if number < min {
                errors.add(
                    ValidationError::new("min", format!("Value must be at least {min}, got {number}"))
                        .with_field(self.name.clone())
                        .with_param("min", min.to_string())
                        .with_param("actual", number.to_string()),
                );
            }
        }

        if let Some(max) = self.max {
            if number > max {
                errors.add(
                    ValidationError::new("max", format!("Value must be at most {max}, got {number}"))
                        .with_field(self.name.clone())
                        .with_param("max", max.to_string())
                        .with_param("actual", number.to_string()),
                );
            }
        }

        if !self.ranges.is_empty() {
            let in_any = self
                .ranges
                .iter()
                .any(|&(low, high)| number >= low && number <= high);
            if !in_any {
                errors.add(
                    ValidationError::new("range", "Value does not fall within any configured range")
                        .with_field(self.name.clone())
                        .with_param("ranges", format_ranges(&self.ranges))
                        .with_param("actual", number.to_string()),
                );
            }
        }

        errors.into_result(())
    }
}

/// Creates an integer field.
pub fn integer(name: impl Into<String>) -> IntegerField {
    IntegerField::new(name)
}

// ============================================================================
// TESTS
// ============================================================================
