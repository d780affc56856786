//! Schema module for Tessera.
//!
//! A tuple descriptor is an ordered list of `(type, name?)` entries describing
//! the shape and byte size of a tuple.

mod builder;
mod field;
mod tuple_desc;

pub use builder::TupleDescBuilder;
pub use field::{FieldItem, ANONYMOUS_FIELD_NAME};
pub use tuple_desc::{TupleDesc, TupleDescRef};
