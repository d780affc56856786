//! Storage location of a tuple.
//!
//! The tuple stores a `RecordId` without interpreting it; page storage decides
//! what the numbers mean.

use core::fmt;

/// Slot number within a page.
pub type SlotId = u16;

/// Identifies a page of a table's heap file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageId {
    /// Table the page belongs to.
    pub table_id: u32,
    /// Page number within the table.
    pub page_no: u32,
}

impl PageId {
    /// Creates a new page identifier.
    pub fn new(table_id: u32, page_no: u32) -> Self {
        Self { table_id, page_no }
    }
}

/// Global identifier for a record (page + slot).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RecordId {
    /// Page containing the record.
    pub page_id: PageId,
    /// Slot within the page.
    pub slot: SlotId,
}

impl RecordId {
    /// Creates a new record identifier.
    pub fn new(page_id: PageId, slot: SlotId) -> Self {
        Self { page_id, slot }
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}",
            self.page_id.table_id, self.page_id.page_no, self.slot
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_record_id_equality() {
        let a = RecordId::new(PageId::new(1, 2), 3);
        let b = RecordId::new(PageId::new(1, 2), 3);
        let c = RecordId::new(PageId::new(1, 2), 4);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_record_id_display() {
        let rid = RecordId::new(PageId::new(7, 0), 12);
        assert_eq!(rid.to_string(), "7:0:12");
    }
}
