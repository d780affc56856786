//! Tuple descriptor definition.

use super::field::FieldItem;
use crate::error::{Error, Result};
use crate::types::DataType;
use alloc::string::ToString;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;
use core::hash::{Hash, Hasher};
use log::trace;

/// Shared handle to an immutable descriptor. Rows of the same shape hold clones
/// of one `TupleDescRef` instead of their own copy.
pub type TupleDescRef = Arc<TupleDesc>;

/// The schema of a tuple: an ordered, immutable list of field entries.
///
/// Two descriptors are equal when they have the same number of fields and the
/// same type at every position. Field names take no part in equality.
#[derive(Clone, Debug, Default)]
pub struct TupleDesc {
    items: Vec<FieldItem>,
}

impl TupleDesc {
    /// Creates a descriptor from parallel type and name sequences.
    ///
    /// Fails with `InvalidArgument` when the sequences differ in length.
    pub fn new<N: AsRef<str>>(types: &[DataType], names: &[Option<N>]) -> Result<Self> {
        if types.len() != names.len() {
            return Err(Error::invalid_argument(alloc::format!(
                "{} types but {} names",
                types.len(),
                names.len()
            )));
        }
        Ok(types
            .iter()
            .zip(names)
            .map(|(dt, name)| FieldItem::new(*dt, name.as_ref().map(|n| n.as_ref().to_string())))
            .collect())
    }

    /// Creates a descriptor whose fields all carry the anonymous placeholder name.
    pub fn unnamed(types: &[DataType]) -> Self {
        types.iter().map(|dt| FieldItem::anonymous(*dt)).collect()
    }

    /// Returns a builder for incremental construction.
    pub fn builder() -> super::TupleDescBuilder {
        super::TupleDescBuilder::new()
    }

    /// Wraps this descriptor in a shared reference.
    pub fn into_ref(self) -> TupleDescRef {
        Arc::new(self)
    }

    /// Returns the number of fields.
    #[inline]
    pub fn num_fields(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the descriptor has no fields.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the entry at position `i`.
    pub fn field(&self, i: usize) -> Result<&FieldItem> {
        self.items
            .get(i)
            .ok_or_else(|| Error::field_not_found(i, self.items.len()))
    }

    /// Returns the type of the field at position `i`.
    pub fn field_type(&self, i: usize) -> Result<DataType> {
        self.field(i).map(FieldItem::data_type)
    }

    /// Returns the (possibly absent) name of the field at position `i`.
    pub fn field_name(&self, i: usize) -> Result<Option<&str>> {
        self.field(i).map(FieldItem::name)
    }

    /// Returns the position of the first field named `name`.
    ///
    /// Matching is exact and case-sensitive. Unnamed fields never match.
    pub fn index_of(&self, name: &str) -> Result<usize> {
        self.items
            .iter()
            .position(|item| item.name() == Some(name))
            .ok_or_else(|| Error::field_name_not_found(name))
    }

    /// Returns the size in bytes of a tuple image with this descriptor.
    pub fn byte_size(&self) -> usize {
        self.items.iter().map(FieldItem::byte_width).sum()
    }

    /// Returns an iterator over the field entries.
    pub fn iter(&self) -> core::slice::Iter<'_, FieldItem> {
        self.items.iter()
    }

    /// Returns an iterator over the field types.
    pub fn types(&self) -> impl Iterator<Item = DataType> + '_ {
        self.items.iter().map(FieldItem::data_type)
    }

    /// Builds a descriptor with the fields of `first` followed by those of `second`.
    pub fn merge(first: &TupleDesc, second: &TupleDesc) -> TupleDesc {
        trace!(
            "merging descriptors with {} and {} fields",
            first.num_fields(),
            second.num_fields()
        );
        first.items.iter().chain(second.items.iter()).cloned().collect()
    }

    /// Builds a descriptor from the fields at the given positions, in that order.
    pub fn project(&self, indices: &[usize]) -> Result<TupleDesc> {
        trace!("projecting {} of {} fields", indices.len(), self.num_fields());
        indices.iter().map(|&i| self.field(i).cloned()).collect()
    }
}

impl FromIterator<FieldItem> for TupleDesc {
    fn from_iter<I: IntoIterator<Item = FieldItem>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a TupleDesc {
    type Item = &'a FieldItem;
    type IntoIter = core::slice::Iter<'a, FieldItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl PartialEq for TupleDesc {
    fn eq(&self, other: &Self) -> bool {
        self.items.len() == other.items.len() && self.types().eq(other.types())
    }
}

impl Eq for TupleDesc {}

impl Hash for TupleDesc {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.items.len().hash(state);
        for dt in self.types() {
            dt.hash(state);
        }
    }
}

impl fmt::Display for TupleDesc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", item)?;
        }
        Ok(())
    }
}
