//! Fixed byte layout of Tessera tuples.
//!
//! Every field type has a fixed width, so a descriptor determines where each
//! field starts inside a tuple image:
//!
//! ```text
//! Tuple image (row_stride = TupleDesc::byte_size()):
//! +--------+--------+-----+--------+
//! | field0 | field1 | ... | fieldN |
//! +--------+--------+-----+--------+
//! offset(i + 1) = offset(i) + width(i)
//! ```

#![no_std]

extern crate alloc;

mod layout_cache;
mod tuple_layout;

pub use layout_cache::LayoutCache;
pub use tuple_layout::{FieldLayout, TupleLayout};
