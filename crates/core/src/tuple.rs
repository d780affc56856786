//! Tuple structure for Tessera.
//!
//! A `Tuple` is a fixed-size row of value slots bound to a shared descriptor.
//! The slot count is taken from the descriptor at construction and never
//! changes afterwards.

use crate::error::{Error, Result};
use crate::record_id::RecordId;
use crate::schema::TupleDescRef;
use crate::value::Value;
use alloc::boxed::Box;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;
use core::iter::FusedIterator;
use log::debug;

/// A row of field values bound to a tuple descriptor.
#[derive(Clone, Debug)]
pub struct Tuple {
    /// Descriptor this tuple is currently bound to.
    desc: TupleDescRef,
    /// Field slots, `None` until set.
    fields: Box<[Option<Value>]>,
    /// Location in persistent storage, once the tuple has been placed.
    record_id: Option<RecordId>,
}

impl Tuple {
    /// Creates a tuple with every slot unset.
    pub fn new(desc: TupleDescRef) -> Self {
        let fields = (0..desc.num_fields()).map(|_| None).collect();
        Self {
            desc,
            fields,
            record_id: None,
        }
    }

    /// Creates a tuple with every slot set from `values`.
    pub fn from_values(desc: TupleDescRef, values: Vec<Value>) -> Result<Self> {
        if values.len() != desc.num_fields() {
            return Err(Error::invalid_argument(alloc::format!(
                "{} values for a descriptor with {} fields",
                values.len(),
                desc.num_fields()
            )));
        }
        Ok(Self {
            desc,
            fields: values.into_iter().map(Some).collect(),
            record_id: None,
        })
    }

    /// Joins two tuples into a new tuple bound to `desc`.
    ///
    /// `desc` is normally `TupleDesc::merge` of both inputs' descriptors and
    /// must have as many fields as both tuples together.
    pub fn concat(left: &Tuple, right: &Tuple, desc: TupleDescRef) -> Result<Self> {
        let len = left.len() + right.len();
        if desc.num_fields() != len {
            debug!(
                "rejecting concat of {} slots into descriptor with {} fields",
                len,
                desc.num_fields()
            );
            return Err(Error::invalid_argument(alloc::format!(
                "{} slots for a descriptor with {} fields",
                len,
                desc.num_fields()
            )));
        }
        let fields = left.fields.iter().chain(right.fields.iter()).cloned().collect();
        Ok(Self {
            desc,
            fields,
            record_id: None,
        })
    }

    /// Returns the descriptor this tuple is bound to.
    #[inline]
    pub fn desc(&self) -> &TupleDescRef {
        &self.desc
    }

    /// Rebinds this tuple to another descriptor.
    ///
    /// Only the descriptor reference changes. The new descriptor must have the
    /// same number of fields as this tuple has slots.
    pub fn reset_desc(&mut self, desc: TupleDescRef) -> Result<()> {
        if desc.num_fields() != self.fields.len() {
            debug!(
                "rejecting rebind of {}-slot tuple to descriptor with {} fields",
                self.fields.len(),
                desc.num_fields()
            );
            return Err(Error::invalid_argument(alloc::format!(
                "cannot rebind a tuple with {} fields to a descriptor with {} fields",
                self.fields.len(),
                desc.num_fields()
            )));
        }
        self.desc = desc;
        Ok(())
    }

    /// Returns the number of slots.
    #[inline]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if this tuple has no slots.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Gets the value at slot `i`, `None` if the slot has not been set.
    pub fn get_field(&self, i: usize) -> Result<Option<&Value>> {
        self.fields
            .get(i)
            .map(Option::as_ref)
            .ok_or_else(|| Error::index_out_of_range(i, self.fields.len()))
    }

    /// Sets the value at slot `i`. The value's type is not checked against the descriptor.
    pub fn set_field(&mut self, i: usize, value: Value) -> Result<()> {
        let len = self.fields.len();
        let slot = self
            .fields
            .get_mut(i)
            .ok_or_else(|| Error::index_out_of_range(i, len))?;
        *slot = Some(value);
        Ok(())
    }

    /// Resets slot `i` to unset.
    pub fn clear_field(&mut self, i: usize) -> Result<()> {
        let len = self.fields.len();
        let slot = self
            .fields
            .get_mut(i)
            .ok_or_else(|| Error::index_out_of_range(i, len))?;
        *slot = None;
        Ok(())
    }

    /// Returns the storage location, if the tuple has been placed.
    #[inline]
    pub fn record_id(&self) -> Option<RecordId> {
        self.record_id
    }

    /// Sets the storage location of this tuple.
    #[inline]
    pub fn set_record_id(&mut self, rid: RecordId) {
        self.record_id = Some(rid);
    }

    /// Forgets the storage location of this tuple.
    #[inline]
    pub fn clear_record_id(&mut self) {
        self.record_id = None;
    }

    /// Returns an iterator over the slots in positional order.
    pub fn fields(&self) -> Fields<'_> {
        Fields {
            inner: self.fields.iter(),
        }
    }

    /// Renders the tuple as `v1\tv2\t...\tvN\n`.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

/// Tuples compare by descriptor and slot values; the record id is ignored.
impl PartialEq for Tuple {
    fn eq(&self, other: &Self) -> bool {
        self.desc == other.desc && self.fields == other.fields
    }
}

impl fmt::Display for Tuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, field) in self.fields.iter().enumerate() {
            if i > 0 {
                f.write_str("\t")?;
            }
            match field {
                Some(value) => write!(f, "{}", value)?,
                None => f.write_str("null")?,
            }
        }
        f.write_str("\n")
    }
}

/// Iterator over the slots of a tuple, created by [`Tuple::fields`].
#[derive(Clone, Debug)]
pub struct Fields<'a> {
    inner: core::slice::Iter<'a, Option<Value>>,
}

impl<'a> Iterator for Fields<'a> {
    type Item = Option<&'a Value>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(Option::as_ref)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Fields<'_> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(Option::as_ref)
    }
}

impl ExactSizeIterator for Fields<'_> {}

impl FusedIterator for Fields<'_> {}
