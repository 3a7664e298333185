//! Float field
//!
//! Leaf field for JSON numbers. Any number the decoder can represent as
//! `f64` matches, so integers widen into a float field.

use serde_json::Value;

use crate::core::{Field, FieldKind, ValidationError, ValidationErrors, value_kind};
use crate::fields::format_ranges;

// ============================================================================
// FLOAT FIELD
// ============================================================================

/// Validates a JSON number against sign, bound and range constraints.
///
/// Every constraint is opt-in and all configured constraints are evaluated
/// on each pass, each failing one contributing its own error. Calling a
/// scalar-bound builder again replaces the bound (last call wins); calling
/// [`FloatField::range`] again appends one more disjunctive alternative.
///
/// # Examples
///
/// ```rust
/// use fieldcheck::prelude::*;
/// use serde_json::json;
///
/// let score = float("score").required().min(0.0).max(100.0);
///
/// assert!(score.validate(&json!(87.5)).is_ok());
/// assert!(score.validate(&json!(-3.0)).is_err());
/// ```
///
/// Disjunctive ranges — the value must land in at least one:
///
/// ```rust
/// use fieldcheck::prelude::*;
/// use serde_json::json;
///
/// let offset = float("offset").range(-10.0, 10.0).range(20.0, 30.0);
///
/// assert!(offset.validate(&json!(2.0)).is_ok());
/// assert!(offset.validate(&json!(25.0)).is_ok());
/// assert!(offset.validate(&json!(15.0)).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct FloatField {
    name: String,
    required: bool,
    positive: bool,
    negative: bool,
    min: Option<f64>,
    max: Option<f64>,
    ranges: Vec<(f64, f64)>,
}

impl FloatField {
    /// Creates a float field with no constraints configured.
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
    pub fn min(mut self, bound: f64) -> Self {
        self.min = Some(bound);
        self
    }

    /// Requires the value to be at most `bound` (inclusive).
    #[must_use = "builder methods must be chained or built"]
    pub fn max(mut self, bound: f64) -> Self {
        self.max = Some(bound);
        self
    }

    /// Adds one `[low, high]` alternative to the range set.
    ///
    /// Each call appends, never replaces: the value passes the range check
    /// if it falls within ANY registered alternative. Exhausting them all
    /// contributes exactly one error regardless of how many were registered.
    #[must_use = "builder methods must be chained or built"]
    pub fn range(mut self, low: f64, high: f64) -> Self {
        self.ranges.push((low, high));
        self
    }
}

impl Field for FloatField {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> FieldKind {
        FieldKind::Float
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

        let Some(number) = value.as_f64() else {
            return Err(ValidationError::kind_mismatch(
                self.name.clone(),
                FieldKind::Float.as_str(),
                value_kind(value),
            )
            .into());
        };

        let mut errors = ValidationErrors::new();

        if self.positive && number <= 0.0 {
            errors.add(
                ValidationError::new("positive", format!("Value must be positive, got {number}"))
                    .with_field(self.name.clone())
                    .with_param("actual", number.to_string()),
            );
        }

        if self.negative && number >= 0.0 {
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

/// Creates a float field.
pub fn float(name: impl Into<String>) -> FloatField {
    FloatField::new(name)
}

// ============================================================================
// TESTS
// ============================================================================
