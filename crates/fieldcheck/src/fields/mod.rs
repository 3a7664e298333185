//! Built-in field variants
//!
//! Leaves validate primitive values directly: [`FloatField`], [`IntegerField`],
//! [`StringField`], [`BooleanField`], [`NullField`]. Composites type-check the
//! container shape and delegate to nested fields: [`ArrayField`] applies one
//! item field to every element, [`ObjectField`] applies a
//! [`Schema`](crate::schema::Schema) to keyed members.
//!
//! Every variant implements [`Field`](crate::core::Field) and comes with a
//! lowercase factory matching its kind tag:
//!
//! ```rust
//! use fieldcheck::prelude::*;
//!
//! let tags = array("tags", string("tag").min_length(1)).max_length(8);
//! ```

use std::fmt;

// Module declarations
pub mod array;
pub mod boolean;
pub mod float;
pub mod integer;
pub mod null;
pub mod object;
pub mod string;

// Re-export every variant and its factory at the fields level
pub use array::{ArrayField, array};
pub use boolean::{BooleanField, boolean};
pub use float::{FloatField, float};
pub use integer::{IntegerField, integer};
pub use null::{NullField, null};
pub use object::{ObjectField, object};
pub use string::{StringField, string};

/// Renders a range set as `[low, high], [low, high]` for error params.
pub(crate) fn format_ranges<T: fmt::Display>(ranges: &[(T, T)]) -> String {
    ranges
        .iter()
        .map(|(low, high)| format!("[{low}, {high}]"))
        .collect::<Vec<_>>()
        .join(", ")
}

// ============================================================================
// TESTS
// ============================================================================
