//! Error types for validation failures
//!
//! Validation produces two layers of error value: [`ValidationError`] is one
//! independent failure (a missing required value, a kind mismatch, a single
//! violated constraint), and [`ValidationErrors`] is the ordered aggregate a
//! whole validation pass returns. An empty aggregate means the value was
//! acceptable; a non-empty one lists every independent violation found in
//! that pass, in evaluation order.
//!
//! All string fields use `Cow<'static, str>` for zero-allocation in the
//! common case of static error codes and messages.

use std::borrow::Cow;
use std::fmt;

use serde::Serialize;
use smallvec::SmallVec;

/// One key/value pair of error context.
pub type Param = (Cow<'static, str>, Cow<'static, str>);

/// Errors carry few params (a bound and an actual value, typically), so the
/// backing storage is inline until a third param is pushed.
type Params = SmallVec<[Param; 2]>;

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A single validation failure with structured context.
///
/// Composite fields wrap child failures: an element or property error keeps
/// the child's own errors verbatim in `nested`, so a deeply nested schema
/// produces a tree whose leaves are the individual constraint violations.
///
/// # Examples
///
/// ## Simple error
///
/// ```rust
/// use fieldcheck::core::ValidationError;
///
/// let error = ValidationError::new("min", "Value must be at least 10");
/// assert_eq!(error.code, "min");
/// ```
///
/// ## Error with field and parameters
///
/// ```rust
/// use fieldcheck::core::ValidationError;
///
/// let error = ValidationError::new("min", "Value must be at least 10, got 3")
///     .with_field("age")
///     .with_param("min", "10")
///     .with_param("actual", "3");
///
/// assert_eq!(error.param("min"), Some("10"));
/// ```
///
/// ## Wrapping child failures
///
/// ```rust
/// use fieldcheck::core::ValidationError;
///
/// let error = ValidationError::item_invalid("scores", 1, "-2.0")
///     .with_nested(vec![ValidationError::new("positive", "Value must be positive")]);
///
/// assert!(error.has_nested());
/// assert_eq!(error.total_error_count(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationError {
    /// Stable machine tag for programmatic handling.
    ///
    /// Examples: "required", "kind_mismatch", "min_length", "range"
    pub code: Cow<'static, str>,

    /// Human-readable description of the failure, in English.
    pub message: Cow<'static, str>,

    /// Name of the field that produced the failure, when known.
    pub field: Option<Cow<'static, str>>,

    /// Ordered key/value context: bounds, counts, indices.
    pub params: Params,

    /// Child failures for composite wrapping.
    ///
    /// An array's `item_invalid` error carries the item field's failures
    /// here; an object's `property_invalid` error carries the property's.
    pub nested: Vec<ValidationError>,
}

impl ValidationError {
    /// Creates a new validation error with a code and message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fieldcheck::core::ValidationError;
    ///
    /// // Static strings — zero allocation:
    /// let error = ValidationError::new("positive", "Value must be positive");
    ///
    /// // Dynamic strings — allocates only when needed:
    /// let error = ValidationError::new("min", format!("Value must be at least {}", 10));
    /// ```
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            field: None,
            params: Params::new(),
            nested: Vec::new(),
        }
    }

    /// Sets the field name for this error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_field(mut self, field: impl Into<Cow<'static, str>>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Adds a context parameter to the error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Attaches child failures, replacing any already present.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_nested(mut self, errors: Vec<ValidationError>) -> Self {
        self.nested = errors;
        self
    }

    /// Attaches a single child failure.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_nested_error(mut self, error: ValidationError) -> Self {
        self.nested.push(error);
        self
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }

    /// Returns true if this error wraps child failures.
    #[must_use]
    pub fn has_nested(&self) -> bool {
        !self.nested.is_empty()
    }

    /// Returns the number of errors in this tree (this one plus nested).
    #[must_use]
    pub fn total_error_count(&self) -> usize {
        1 + self
            .nested
            .iter()
            .map(ValidationError::total_error_count)
            .sum::<usize>()
    }

    /// Flattens the error tree into a single list (depth-first).
    #[must_use]
    pub fn flatten(&self) -> Vec<&ValidationError> {
        let mut result = vec![self];
        for nested in &self.nested {
            result.extend(nested.flatten());
        }
        result
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(field) = &self.field {
            write!(f, "[{}] {}: {}", field, self.code, self.message)?;
        } else {
            write!(f, "{}: {}", self.code, self.message)?;
        }

        if !self.params.is_empty() {
            write!(f, " (")?;
            for (i, (k, v)) in self.params.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{k}={v}")?;
            }
            write!(f, ")")?;
        }

        if !self.nested.is_empty() {
            write!(f, "\n  Nested errors:")?;
            for (i, error) in self.nested.iter().enumerate() {
                write!(f, "\n    {}. {}", i + 1, error)?;
            }
        }

        Ok(())
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// CONVENIENCE CONSTRUCTORS
// ============================================================================

/// One constructor per failure the library emits in more than one place.
/// Single-site constraint errors (sign checks, bounds, pattern) are built
/// inline by the field that owns them.
impl ValidationError {
    /// Absent value on a required field.
    pub fn required(field: impl Into<Cow<'static, str>>) -> Self {
        Self::new("required", "Value is required").with_field(field)
    }

    /// Decoded value's runtime kind does not match the field's kind.
    pub fn kind_mismatch(
        field: impl Into<Cow<'static, str>>,
        expected: &'static str,
        actual: &'static str,
    ) -> Self {
        Self::new("kind_mismatch", format!("Expected {expected}, got {actual}"))
            .with_field(field)
            .with_param("expected", expected)
            .with_param("actual", actual)
    }

    /// One invalid element of an array field. The item field's own failures
    /// are attached by the caller via [`ValidationError::with_nested`].
    pub fn item_invalid(
        field: impl Into<Cow<'static, str>>,
        index: usize,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self::new("item_invalid", format!("Item at index {index} is invalid"))
            .with_field(field)
            .with_param("index", index.to_string())
            .with_param("value", value)
    }

    /// One invalid property of an object's schema. The property field's own
    /// failures are attached by the caller via [`ValidationError::with_nested`].
    pub fn property_invalid(name: impl Into<Cow<'static, str>>) -> Self {
        let name = name.into();
        Self::new(
            "property_invalid",
            format!("Property '{name}' is invalid"),
        )
        .with_field(name)
    }
}

// ============================================================================
// ERROR AGGREGATOR
// ============================================================================

/// The ordered aggregate of every independent failure from one validation
/// pass.
///
/// Iteration order is push order, which is evaluation order: length checks
/// before element checks, elements in index order, schema properties in
/// declaration order. An empty collection signals success; [`ValidationErrors::into_result`]
/// performs that conversion.
///
/// # Examples
///
/// ```rust
/// use fieldcheck::core::{ValidationError, ValidationErrors};
///
/// let errors = ValidationErrors::new();
/// assert!(errors.into_result(()).is_ok());
///
/// let mut errors = ValidationErrors::new();
/// errors.add(ValidationError::required("name"));
/// let report = errors.into_result(()).unwrap_err();
/// assert_eq!(report.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    /// Creates a new empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Appends an error.
    pub fn add(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Appends every error of another collection, preserving order.
    pub fn merge(&mut self, other: ValidationErrors) {
        self.errors.extend(other.errors);
    }

    /// Returns true if no error was collected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the number of collected errors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns all errors in evaluation order.
    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Returns the first error, if any.
    #[must_use]
    pub fn first(&self) -> Option<&ValidationError> {
        self.errors.first()
    }

    /// Iterates the errors in evaluation order.
    pub fn iter(&self) -> std::slice::Iter<'_, ValidationError> {
        self.errors.iter()
    }

    /// Consumes the collection, returning the underlying list.
    #[must_use]
    pub fn into_vec(self) -> Vec<ValidationError> {
        self.errors
    }

    /// Converts to a `Result`: `Ok(ok_value)` iff no error was collected.
    #[must_use = "result must be used"]
    pub fn into_result<T>(self, ok_value: T) -> Result<T, ValidationErrors> {
        if self.is_empty() { Ok(ok_value) } else { Err(self) }
    }
}

impl From<ValidationError> for ValidationErrors {
    fn from(error: ValidationError) -> Self {
        Self {
            errors: vec![error],
        }
    }
}

impl FromIterator<ValidationError> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = ValidationError>>(iter: I) -> Self {
        Self {
            errors: iter.into_iter().collect(),
        }
    }
}

impl Extend<ValidationError> for ValidationErrors {
    fn extend<I: IntoIterator<Item = ValidationError>>(&mut self, iter: I) {
        self.errors.extend(iter);
    }
}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Validation failed with {} error(s):", self.errors.len())?;
        for (i, error) in self.errors.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

// ============================================================================
// PATTERN ERROR
// ============================================================================

/// Error returned when a string field's pattern fails to compile.
///
/// This is the only build-time failure in the crate; everything else is a
/// validation-time result. Patterns compile eagerly so a typo surfaces where
/// the schema is declared, not on the first validated value.
#[derive(Debug, thiserror::Error)]
#[error("invalid pattern for field '{field}': {source}")]
pub struct PatternError {
    /// Name of the field whose pattern was rejected.
    pub field: String,
    /// The underlying compilation failure.
    #[source]
    pub source: regex::Error,
}

// ============================================================================
// TESTS
// ============================================================================
