//! Core validation types and traits
//!
//! This module contains the fundamental building blocks of the library:
//!
//! - **Trait**: [`Field`] — the capability every field variant implements
//! - **Kinds**: [`FieldKind`] — the fixed shape tag of each variant
//! - **Errors**: [`ValidationError`], [`ValidationErrors`], [`PatternError`]
//!
//! # Architecture
//!
//! The core is designed around three principles:
//!
//! ## 1. One contract, open recursion
//!
//! `Field` is object-safe and composites own children as `Box<dyn Field>`,
//! so arbitrarily nested schemas need no special casing:
//!
//! ```rust,ignore
//! let matrix = array("matrix", array("row", float("cell").required()));
//! ```
//!
//! ## 2. Collect everything, fail nothing fast
//!
//! A validation pass evaluates every applicable constraint and every
//! element, merging all failures into one ordered [`ValidationErrors`]
//! report. The only terminal per-field cases are a missing required value
//! and a kind mismatch, which make further checks meaningless.
//!
//! ## 3. Build mutable, validate immutable
//!
//! Builder methods consume and return the field (`field.required().min(1.0)`);
//! once the chain ends the field is an immutable value, safe to share across
//! threads and reuse for any number of validations.

// Module declarations
pub mod error;
pub mod field;

// Re-export everything at the core level for convenience
pub use error::{Param, PatternError, ValidationError, ValidationErrors};
pub use field::{Field, FieldKind, value_kind};
