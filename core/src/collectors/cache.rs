//! Memo tables feeding and fed by the collector ladder.

use std::sync::Arc;

use hashbrown::HashMap;
use parking_lot::RwLock;

use crate::{
    memo::{ArityTable, Slot},
    types::Type,
};

/// Append-only tables of synthesized collectors. Nothing is ever evicted.
pub struct CollectorCache {
    pub(crate) base_arrays: ArityTable,
    pub(crate) base_fills: ArityTable,
    pub(crate) arrays: ArityTable,
    pub(crate) fill_to_right: ArityTable,
    pub(crate) lists: ArityTable,
    typed: RwLock<HashMap<Type, Arc<ArityTable>>>,
    pub(crate) fill_new_array: Slot,
    pub(crate) fill_new_typed_array: Slot,
    pub(crate) array_identity: Slot,
    pub(crate) as_list: Slot,
    max_arity: usize,
}

/// How many collectors have been synthesized so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CacheStats {
    pub arrays: usize,
    pub fills: usize,
    pub lists: usize,
    pub typed_components: usize,
    pub typed: usize,
}

impl CollectorCache {
    pub fn new(chunk_size: usize, max_arity: usize) -> Self {
        CollectorCache {
            base_arrays: ArityTable::new(chunk_size + 1),
            base_fills: ArityTable::new(chunk_size + 1),
            arrays: ArityTable::new(max_arity + 1),
            fill_to_right: ArityTable::new(max_arity + 1),
            lists: ArityTable::new(max_arity + 1),
            typed: RwLock::new(HashMap::new()),
            fill_new_array: Slot::new(),
            fill_new_typed_array: Slot::new(),
            array_identity: Slot::new(),
            as_list: Slot::new(),
            max_arity,
        }
    }

    /// The arity table for collectors into arrays of `component`, created on
    /// first request.
    pub(crate) fn typed_table(&self, component: &Type) -> Arc<ArityTable> {
        if let Some(table) = self.typed.read().get(component) {
            return Arc::clone(table);
        }
        let mut typed = self.typed.write();
        let table = typed
            .entry(component.clone())
            .or_insert_with(|| Arc::new(ArityTable::new(self.max_arity + 1)));
        Arc::clone(table)
    }

    pub fn stats(&self) -> CacheStats {
        let typed = self.typed.read();
        CacheStats {
            arrays: self.arrays.populated(),
            fills: self.fill_to_right.populated(),
            lists: self.lists.populated(),
            typed_components: typed.len(),
            typed: typed.values().map(|table| table.populated()).sum(),
        }
    }
}
