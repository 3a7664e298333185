//! The field capability contract
//!
//! Every field variant, leaf or composite, implements [`Field`]: a named,
//! kinded, optionally required validation unit over decoded JSON values.
//! Composites own their children as `Box<dyn Field>`, which keeps recursion
//! open-ended: an array of objects of arrays needs no special casing.

use serde_json::Value;

use crate::core::error::ValidationErrors;

// ============================================================================
// FIELD KIND
// ============================================================================

/// The fixed kind tag of a field variant.
///
/// A field's kind is baked in at construction and never changes; it names
/// the JSON shape the field expects and appears in kind-mismatch errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// A JSON string.
    String,
    /// A JSON number without a fractional part.
    Integer,
    /// Any JSON number.
    Float,
    /// A JSON boolean.
    Boolean,
    /// JSON null, and nothing else.
    Null,
    /// A JSON array, elements validated by one item field.
    Array,
    /// A JSON object, members validated by a schema.
    Object,
}

impl FieldKind {
    /// Returns the lowercase tag used in error messages and reports.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Integer => "integer",
            Self::Float => "float",
            Self::Boolean => "boolean",
            Self::Null => "null",
            Self::Array => "array",
            Self::Object => "object",
        }
    }
}

impl std::fmt::Display for FieldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returns the runtime kind tag of a decoded value, for mismatch reporting.
#[must_use]
pub const fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// ============================================================================
// FIELD TRAIT
// ============================================================================

/// The shared capability of every field variant.
///
/// A field is configured once through its builder chain and is immutable
/// afterwards, so `&Field` can be shared across threads and reused for any
/// number of [`Field::validate`] calls; the `Send + Sync` supertraits encode
/// that. Validation is pure: the result depends only on the configuration
/// and the input value.
///
/// # Validation contract
///
/// Every implementation honors the same three steps:
///
/// 1. A `Null` input passes when the field is not required, and fails with
///    a single `required` error when it is.
/// 2. A non-null input of the wrong JSON shape fails with a single
///    `kind_mismatch` error; constraints are not evaluated.
/// 3. On shape match, every configured constraint is evaluated with no
///    short-circuiting, and all failures are aggregated into one
///    [`ValidationErrors`] report.
///
/// The one deliberate exception is the null field, whose expected shape IS
/// `Null`: step 1 never produces a `required` error for it.
///
/// # Examples
///
/// ```rust
/// use fieldcheck::prelude::*;
/// use serde_json::json;
///
/// let price = float("price").required().positive();
///
/// assert_eq!(price.name(), "price");
/// assert_eq!(price.kind(), FieldKind::Float);
/// assert!(price.validate(&json!(9.99)).is_ok());
/// assert!(price.validate(&json!(-1.0)).is_err());
/// ```
pub trait Field: Send + Sync {
    /// Returns the configured field name.
    fn name(&self) -> &str;

    /// Returns the fixed kind tag of this variant.
    fn kind(&self) -> FieldKind;

    /// Returns true if a null value is rejected.
    fn is_required(&self) -> bool;

    /// Validates a decoded value against this field's configuration.
    ///
    /// Returns `Ok(())` when the value is acceptable, otherwise the ordered
    /// aggregate of every independent violation found in this pass.
    fn validate(&self, value: &Value) -> Result<(), ValidationErrors>;
}

impl<F: Field + ?Sized> Field for Box<F> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn kind(&self) -> FieldKind {
        (**self).kind()
    }

    fn is_required(&self) -> bool {
        (**self).is_required()
    }

    fn validate(&self, value: &Value) -> Result<(), ValidationErrors> {
        (**self).validate(value)
    }
}

// ============================================================================
// TESTS
// ============================================================================
