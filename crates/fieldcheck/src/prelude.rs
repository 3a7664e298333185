//! Prelude module for convenient imports.
//!
//! Provides a single `use fieldcheck::prelude::*;` import that brings in the
//! field trait, every built-in field variant with its factory, the schema
//! type, and the error types.
//!
//! # Examples
//!
//! ```rust
//! use fieldcheck::prelude::*;
//! use serde_json::json;
//!
//! let schema = Schema::new()
//!     .field(string("name").required().min_length(1))
//!     .field(integer("age").range(13, 120));
//!
//! assert!(schema.validate(&json!({"name": "Alice", "age": 30})).is_ok());
//! ```

// ============================================================================
// CORE: Field contract, kinds, errors
// ============================================================================

pub use crate::core::{
    Field, FieldKind, Param, PatternError, ValidationError, ValidationErrors, value_kind,
};

// ============================================================================
// FIELDS: Every built-in variant and its factory
// ============================================================================

pub use crate::fields::{
    ArrayField, BooleanField, FloatField, IntegerField, NullField, ObjectField, StringField,
    array, boolean, float, integer, null, object, string,
};

// ============================================================================
// SCHEMA: Root collection
// ============================================================================

pub use crate::schema::Schema;
