//! Field entry of a tuple descriptor.

use crate::types::DataType;
use alloc::string::String;
use core::fmt;

/// Name given to every field of a descriptor built without names.
pub const ANONYMOUS_FIELD_NAME: &str = "anonymous";

/// One `(type, name?)` entry of a tuple descriptor.
#[derive(Clone, Debug)]
pub struct FieldItem {
    /// Data type of the field.
    data_type: DataType,
    /// Field name, absent for unnamed fields.
    name: Option<String>,
}

impl FieldItem {
    /// Creates a new field entry.
    pub fn new(data_type: DataType, name: Option<String>) -> Self {
        Self { data_type, name }
    }

    /// Creates a named field entry.
    pub fn named(data_type: DataType, name: impl Into<String>) -> Self {
        Self::new(data_type, Some(name.into()))
    }

    /// Creates a field entry carrying the anonymous placeholder name.
    pub fn anonymous(data_type: DataType) -> Self {
        Self::named(data_type, ANONYMOUS_FIELD_NAME)
    }

    /// Returns the data type.
    #[inline]
    pub fn data_type(&self) -> DataType {
        self.data_type
    }

    /// Returns the field name.
    #[inline]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns the number of bytes this field occupies.
    #[inline]
    pub fn byte_width(&self) -> usize {
        self.data_type.byte_width()
    }
}

/// Entries compare by type only, matching descriptor equality.
impl PartialEq for FieldItem {
    fn eq(&self, other: &Self) -> bool {
        self.data_type == other.data_type
    }
}

impl Eq for FieldItem {}

impl fmt::Display for FieldItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.data_type, self.name.as_deref().unwrap_or("null"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_field_item_new() {
        let item = FieldItem::named(DataType::Int32, "id");
        assert_eq!(item.data_type(), DataType::Int32);
        assert_eq!(item.name(), Some("id"));
        assert_eq!(item.byte_width(), 4);
    }

    #[test]
    fn test_field_item_anonymous() {
        let item = FieldItem::anonymous(DataType::String);
        assert_eq!(item.name(), Some(ANONYMOUS_FIELD_NAME));
    }

    #[test]
    fn test_field_item_equality_ignores_name() {
        assert_eq!(
            FieldItem::named(DataType::Int32, "a"),
            FieldItem::named(DataType::Int32, "b")
        );
        assert_ne!(
            FieldItem::named(DataType::Int32, "a"),
            FieldItem::named(DataType::String, "a")
        );
    }

    #[test]
    fn test_field_item_display() {
        assert_eq!(FieldItem::named(DataType::Int32, "id").to_string(), "INT32(id)");
        assert_eq!(FieldItem::new(DataType::String, None).to_string(), "STRING(null)");
    }
}
