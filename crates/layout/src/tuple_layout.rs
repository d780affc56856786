//! Per-field offsets for a tuple descriptor.

use alloc::vec::Vec;
use tessera_core::{DataType, TupleDesc};

/// Layout information for a single field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldLayout {
    /// Field data type
    pub data_type: DataType,
    /// Fixed size in bytes
    pub width: usize,
    /// Offset from the start of the tuple image
    pub offset: usize,
}

/// Pre-computed byte layout of a tuple descriptor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TupleLayout {
    fields: Vec<FieldLayout>,
    /// Total bytes per tuple
    row_stride: usize,
}

impl TupleLayout {
    /// Compute the layout of a descriptor
    pub fn from_desc(desc: &TupleDesc) -> Self {
        let fields: Vec<FieldLayout> = desc
            .types()
            .scan(0usize, |offset, data_type| {
                let width = data_type.byte_width();
                let layout = FieldLayout {
                    data_type,
                    width,
                    offset: *offset,
                };
                *offset += width;
                Some(layout)
            })
            .collect();

        let row_stride = fields.iter().map(|f| f.width).sum();

        Self { fields, row_stride }
    }

    /// Get the field layouts
    pub fn fields(&self) -> &[FieldLayout] {
        &self.fields
    }

    /// Get the number of fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if the layout has no fields
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Get row stride (total bytes per tuple)
    pub fn row_stride(&self) -> usize {
        self.row_stride
    }

    /// Get the offset of field `i`
    pub fn offset_of(&self, i: usize) -> Option<usize> {
        self.fields.get(i).map(|f| f.offset)
    }

    /// Byte range occupied by field `i`
    pub fn range_of(&self, i: usize) -> Option<core::ops::Range<usize>> {
        self.fields.get(i).map(|f| f.offset..f.offset + f.width)
    }

    /// Calculate required buffer size for N tuples
    pub fn buffer_size(&self, tuple_count: usize) -> usize {
        self.row_stride * tuple_count
    }
}
