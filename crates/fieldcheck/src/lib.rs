//! # fieldcheck
//!
//! Declarative validation for decoded JSON values.
//!
//! A schema is built out of composable field definitions, each configured
//! with opt-in constraints; validating a [`serde_json::Value`] against it
//! collects every violation found in one pass into a single ordered report
//! instead of failing on the first.
//!
//! ## Quick Start
//!
//! ```rust
//! use fieldcheck::prelude::*;
//! use serde_json::json;
//!
//! let schema = Schema::new()
//!     .field(string("username").required().min_length(3))
//!     .field(float("score").min(0.0).max(100.0))
//!     .field(array("tags", string("tag").min_length(1)).max_length(8));
//!
//! assert!(schema.validate(&json!({
//!     "username": "alice",
//!     "score": 87.5,
//!     "tags": ["rust", "validation"]
//! })).is_ok());
//!
//! // Both violations are reported, in declaration order:
//! let report = schema.validate(&json!({
//!     "username": "x",
//!     "score": 250.0
//! })).unwrap_err();
//! assert_eq!(report.len(), 2);
//! ```
//!
//! ## Built-in Fields
//!
//! - **String**: [`string`] (length bounds, regex pattern, membership)
//! - **Numeric**: [`integer`], [`float`] (sign checks, bounds, disjunctive ranges)
//! - **Boolean**: [`boolean`] (expected constant)
//! - **Null**: [`null`] (accepts only JSON null)
//! - **Array**: [`array`] (length bounds plus one item field applied to every element)
//! - **Object**: [`object`] (a nested [`Schema`] for keyed members)
//!
//! ## Error Reports
//!
//! Validation never panics on ordinarily invalid input: the result is either
//! `Ok(())` or a [`ValidationErrors`] aggregate listing every independent
//! violation with a stable code, the field name, and structured params.
//! Composite fields wrap child failures as nested errors, so the report is a
//! tree mirroring the schema.
//!
//! ## Concurrency
//!
//! Fields and schemas are configured through consuming builder chains and are
//! immutable afterwards. [`Field`] is `Send + Sync`, so one configured schema
//! can validate values on any number of threads concurrently.

pub mod core;
pub mod fields;
pub mod prelude;
pub mod schema;

pub use crate::core::{Field, FieldKind, PatternError, ValidationError, ValidationErrors};
pub use crate::fields::{
    ArrayField, BooleanField, FloatField, IntegerField, NullField, ObjectField, StringField,
    array, boolean, float, integer, null, object, string,
};
pub use crate::schema::Schema;
