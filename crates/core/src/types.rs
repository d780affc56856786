//! Data type definitions for Tessera.
//!
//! Every type occupies a fixed number of bytes in a tuple image, which is what
//! makes tuples of a given descriptor fixed-size.

use core::fmt;

/// Maximum number of bytes stored for a `String` field.
pub const STRING_LEN: usize = 128;

/// Supported field types.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DataType {
    /// Boolean type (true/false)
    Boolean,
    /// 32-bit signed integer
    Int32,
    /// 64-bit signed integer
    Int64,
    /// 64-bit floating point number
    Float64,
    /// Date and time stored as Unix timestamp (milliseconds)
    DateTime,
    /// UTF-8 string, length-prefixed and padded to `STRING_LEN` bytes
    String,
}

impl DataType {
    /// Returns the number of bytes a field of this type occupies.
    pub fn byte_width(&self) -> usize {
        match self {
            DataType::Boolean => 1,
            DataType::Int32 => 4,
            DataType::Int64 => 8,
            DataType::Float64 => 8,
            DataType::DateTime => 8,
            DataType::String => 4 + STRING_LEN,
        }
    }

    /// Returns the upper-case type name used in diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            DataType::Boolean => "BOOLEAN",
            DataType::Int32 => "INT32",
            DataType::Int64 => "INT64",
            DataType::Float64 => "FLOAT64",
            DataType::DateTime => "DATETIME",
            DataType::String => "STRING",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
