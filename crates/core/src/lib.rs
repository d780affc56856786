//! Tessera Core - Tuple and tuple descriptor types for the Tessera storage engine.
//!
//! This crate provides the data model every other layer reads and writes through:
//!
//! - `DataType`: Field types with a fixed byte width (Boolean, Int32, Int64, Float64, DateTime, String)
//! - `Value`: Runtime values stored in tuple slots
//! - `RecordId`: Location of a tuple in persistent storage (page + slot)
//! - `schema`: Tuple descriptors (`TupleDesc`, `FieldItem`, `TupleDescBuilder`)
//! - `Tuple`: A fixed-size row of values bound to a shared descriptor
//! - `Error`: Error types for descriptor and tuple operations
//!
//! # Example
//!
//! ```rust
//! use tessera_core::{DataType, Tuple, Value};
//! use tessera_core::schema::TupleDesc;
//!
//! let desc = TupleDesc::new(
//!     &[DataType::Int32, DataType::String],
//!     &[Some("id"), Some("name")],
//! )
//! .unwrap()
//! .into_ref();
//!
//! let mut tuple = Tuple::new(desc.clone());
//! tuple.set_field(0, Value::Int32(5)).unwrap();
//! tuple.set_field(1, Value::from("abc")).unwrap();
//!
//! assert_eq!(desc.index_of("name").unwrap(), 1);
//! assert_eq!(tuple.render(), "5\tabc\n");
//! ```

#![no_std]

extern crate alloc;

mod error;
mod record_id;
pub mod schema;
mod tuple;
mod types;
mod value;

pub use error::{Error, Result};
pub use record_id::{PageId, RecordId, SlotId};
pub use schema::{TupleDesc, TupleDescRef};
pub use tuple::{Fields, Tuple};
pub use types::{DataType, STRING_LEN};
pub use value::Value;
