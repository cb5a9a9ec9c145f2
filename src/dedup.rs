//! First-occurrence-wins store of unique flow lines.

use std::collections::btree_map::{BTreeMap, Entry};

use crate::flow::FlowKey;

/// Maps each flow key to the raw bytes of the line it was first seen on.
///
/// Lines are kept as read, including any bytes that are not valid UTF-8.
/// Entries are never replaced or removed once inserted. Iteration yields
/// lines in ascending key order so output is stable between runs.
#[derive(Debug, Default)]
pub struct DedupStore {
    flows: BTreeMap<FlowKey, Vec<u8>>,
}

impl DedupStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `line` under `key` unless the key has been seen before.
    ///
    /// Returns `true` if the line was stored, `false` for a duplicate.
    pub fn insert_if_absent(&mut self, key: FlowKey, line: &[u8]) -> bool {
        match self.flows.entry(key) {
            Entry::Vacant(slot) => {
                slot.insert(line.to_vec());
                true
            }
            Entry::Occupied(_) => false,
        }
    }

    pub fn len(&self) -> usize {
        self.flows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flows.is_empty()
    }

    /// Retained lines in key order.
    pub fn lines(&self) -> impl Iterator<Item = &[u8]> {
        self.flows.values().map(Vec::as_slice)
    }
}
