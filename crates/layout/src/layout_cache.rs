//! TupleLayout cache for avoiding repeated layout computation.
//!
//! Layouts are cached by table name together with the descriptor they were
//! computed from.

use super::TupleLayout;
use alloc::string::String;
use hashbrown::HashMap;
use log::trace;
use tessera_core::TupleDesc;

/// Cache for TupleLayout instances, keyed by table name.
///
/// A cached layout is only reused while the supplied descriptor equals the one
/// it was computed from. Descriptor equality looks at types only, which is all
/// a layout depends on.
#[derive(Default)]
pub struct LayoutCache {
    layouts: HashMap<String, (TupleDesc, TupleLayout)>,
}

impl LayoutCache {
    /// Create a new empty cache
    pub fn new() -> Self {
        Self {
            layouts: HashMap::new(),
        }
    }

    /// Get or create the layout of a table's descriptor.
    pub fn get_or_create(&mut self, table_name: &str, desc: &TupleDesc) -> &TupleLayout {
        let stale = match self.layouts.get(table_name) {
            Some((cached, _)) => cached != desc,
            None => true,
        };
        if stale {
            trace!("computing layout for table {}", table_name);
            self.layouts.insert(
                table_name.into(),
                (desc.clone(), TupleLayout::from_desc(desc)),
            );
        } else {
            trace!("layout cache hit for table {}", table_name);
        }
        &self.layouts[table_name].1
    }

    /// Returns the cached layout of a table, if any.
    pub fn get(&self, table_name: &str) -> Option<&TupleLayout> {
        self.layouts.get(table_name).map(|(_, layout)| layout)
    }

    /// Invalidate cache for a specific table (call when schema changes)
    pub fn invalidate(&mut self, table_name: &str) {
        trace!("invalidating layout for table {}", table_name);
        self.layouts.remove(table_name);
    }

    /// Clear all cached layouts
    pub fn clear(&mut self) {
        self.layouts.clear();
    }

    /// Number of cached layouts
    pub fn len(&self) -> usize {
        self.layouts.len()
    }

    /// Check if the cache is empty
    pub fn is_empty(&self) -> bool {
        self.layouts.is_empty()
    }
}
