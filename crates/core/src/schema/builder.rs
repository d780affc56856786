//! Builder for tuple descriptors.

use super::field::{FieldItem, ANONYMOUS_FIELD_NAME};
use super::tuple_desc::TupleDesc;
use crate::error::{Error, Result};
use crate::types::DataType;
use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

/// Builder for creating tuple descriptors.
///
/// Types are required; names are optional. When no names are supplied every
/// field receives the anonymous placeholder name.
#[derive(Debug, Default)]
pub struct TupleDescBuilder {
    types: Option<Vec<DataType>>,
    names: Option<Vec<Option<String>>>,
}

impl TupleDescBuilder {
    /// Creates a new, empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the field types, replacing any set before.
    pub fn types(mut self, types: impl IntoIterator<Item = DataType>) -> Self {
        self.types = Some(types.into_iter().collect());
        self
    }

    /// Sets the field names, replacing any set before.
    pub fn names<I, N>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = Option<N>>,
        N: Into<String>,
    {
        self.names = Some(names.into_iter().map(|n| n.map(Into::into)).collect());
        self
    }

    /// Appends a single field.
    pub fn field(mut self, data_type: DataType, name: Option<&str>) -> Self {
        let types = self.types.get_or_insert_with(Vec::new);
        let names = self.names.get_or_insert_with(|| {
            (0..types.len())
                .map(|_| Some(ANONYMOUS_FIELD_NAME.to_string()))
                .collect()
        });
        types.push(data_type);
        names.push(name.map(ToString::to_string));
        self
    }

    /// Builds the descriptor.
    pub fn build(self) -> Result<TupleDesc> {
        let types = self
            .types
            .ok_or_else(|| Error::invalid_argument("type sequence is required"))?;

        match self.names {
            None => Ok(types.into_iter().map(FieldItem::anonymous).collect()),
            Some(names) if names.len() != types.len() => Err(Error::invalid_argument(format!(
                "{} types but {} names",
                types.len(),
                names.len()
            ))),
            Some(names) => Ok(types
                .into_iter()
                .zip(names)
                .map(|(dt, name)| FieldItem::new(dt, name))
                .collect()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_with_names() {
        let desc = TupleDesc::builder()
            .types([DataType::Int32, DataType::String])
            .names([Some("id"), Some("name")])
            .build()
            .unwrap();

        assert_eq!(desc.num_fields(), 2);
        assert_eq!(desc.index_of("name").unwrap(), 1);
    }

    #[test]
    fn test_builder_without_names() {
        let desc = TupleDesc::builder()
            .types([DataType::Int64])
            .build()
            .unwrap();
        assert_eq!(desc.field_name(0).unwrap(), Some(ANONYMOUS_FIELD_NAME));
    }

    #[test]
    fn test_builder_missing_types() {
        let err = TupleDesc::builder()
            .names([Some("id")])
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::InvalidArgument { .. }));

        assert!(TupleDescBuilder::new().build().is_err());
    }

    #[test]
    fn test_builder_length_mismatch() {
        let err = TupleDesc::builder()
            .types([DataType::Int32])
            .names([Some("a"), Some("b")])
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::InvalidArgument { .. }));
    }

    #[test]
    fn test_builder_field() {
        let desc = TupleDesc::builder()
            .types([DataType::Boolean])
            .field(DataType::Int32, Some("count"))
            .field(DataType::String, None)
            .build()
            .unwrap();

        assert_eq!(desc.num_fields(), 3);
        assert_eq!(desc.field_name(0).unwrap(), Some(ANONYMOUS_FIELD_NAME));
        assert_eq!(desc.field_name(1).unwrap(), Some("count"));
        assert_eq!(desc.field_name(2).unwrap(), None);
        assert_eq!(desc.field_type(2).unwrap(), DataType::String);
    }
}
