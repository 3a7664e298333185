//! String field
//!
//! Leaf field for JSON strings: length bounds counted in Unicode scalar
//! values, an optional regex pattern, and an optional membership list.

use serde_json::Value;

use crate::core::{Field, FieldKind, PatternError, ValidationError, ValidationErrors, value_kind};

// ============================================================================
// STRING FIELD
// ============================================================================

/// Validates a JSON string against length, pattern and membership
/// constraints.
///
/// The pattern compiles when the builder runs, so a bad pattern surfaces as
/// a [`PatternError`] where the schema is declared. Matching is unanchored,
/// as with [`regex::Regex::is_match`]; anchor with `^`/`$` when the whole
/// value must match.
///
/// # Examples
///
/// ```rust
/// use fieldcheck::prelude::*;
/// use serde_json::json;
///
/// let username = string("username")
///     .required()
///     .min_length(3)
///     .max_length(16)
///     .pattern("^[a-z0-9_]+$")?;
///
/// assert!(username.validate(&json!("alice_42")).is_ok());
/// assert!(username.validate(&json!("A!")).is_err());
/// # Ok::<(), fieldcheck::core::PatternError>(())
/// ```
#[derive(Debug, Clone)]
pub struct StringField {
    name: String,
    required: bool,
    min_length: Option<usize>,
    max_length: Option<usize>,
    pattern: Option<regex::Regex>,
    choices: Vec<String>,
}

impl StringField {
    /// Creates a string field with no constraints configured.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            required: false,
            min_length: None,
            max_length: None,
            pattern: None,
            choices: Vec::new(),
        }
    }

    /// Rejects null values.
    #[must_use = "builder methods must be chained or built"]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Requires at least `length` characters (Unicode scalar values).
    #[must_use = "builder methods must be chained or built"]
    pub fn min_length(mut self, length: usize) -> Self {
        self.min_length = Some(length);
        self
    }

    /// Requires at most `length` characters (Unicode scalar values).
    #[must_use = "builder methods must be chained or built"]
    pub fn max_length(mut self, length: usize) -> Self {
        self.max_length = Some(length);
        self
    }

    /// Requires the value to match `pattern`.
    ///
    /// The pattern compiles eagerly; an invalid one is reported here rather
    /// than on the first validated value.
    pub fn pattern(mut self, pattern: &str) -> Result<Self, PatternError> {
        match regex::Regex::new(pattern) {
            Ok(compiled) => {
                self.pattern = Some(compiled);
                Ok(self)
            }
            Err(source) => Err(PatternError {
                field: self.name,
                source,
            }),
        }
    }

    /// Requires the value to equal one of `choices`. Calling again replaces
    /// the previous list.
    #[must_use = "builder methods must be chained or built"]
    pub fn choices<I, S>(mut self, choices: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.choices = choices.into_iter().map(Into::into).collect();
        self
    }
}

impl Field for StringField {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> FieldKind {
        FieldKind::String
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

        let Some(text) = value.as_str() else {
            return Err(ValidationError::kind_mismatch(
                self.name.clone(),
                FieldKind::String.as_str(),
                value_kind(value),
            )
            .into());
        };

        let mut errors = ValidationErrors::new();
        let count = text.chars().count();

        if let Some(min) = self.min_length {
            if count < min {
                errors.add(
                    ValidationError::new(
                        "min_length",
                        format!("String must be at least {min} characters, got {count}"),
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
                        format!("String must be at most {max} characters, got {count}"),
                    )
                    .with_field(self.name.clone())
                    .with_param("max", max.to_string())
                    .with_param("actual", count.to_string()),
                );
            }
        }

        if let Some(pattern) = &self.pattern {
            if !pattern.is_match(text) {
                errors.add(
                    ValidationError::new("pattern", "String does not match the required pattern")
                        .with_field(self.name.clone())
                        .with_param("pattern", pattern.as_str().to_string()),
                );
            }
        }

        if !self.choices.is_empty() && !self.choices.iter().any(|choice| choice == text) {
            errors.add(
                ValidationError::new("choices", "Value is not one of the allowed choices")
                    .with_field(self.name.clone())
                    .with_param("choices", self.choices.join(", "))
                    .with_param("actual", text.to_string()),
            );
        }

        errors.into_result(())
    }
}

/// Creates a string field.
pub fn string(name: impl Into<String>) -> StringField {
    StringField::new(name)
}

// ============================================================================
// TESTS
// ============================================================================
