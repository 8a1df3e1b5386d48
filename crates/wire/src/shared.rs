//! Shared-string table for one marshalling session.
//!
//! Identifiers such as class and type names recur across many fields of
//! the same request. The first occurrence is sent in full and registered
//! here; later occurrences are sent as the 2-byte handle assigned on
//! first sight. Handles start at 0 and grow by one per newly seen string,
//! so the remote decoder can rebuild the same table by reading in order.
//!
//! The table is owned by its session: independent sessions never share
//! state, and a fresh session always starts from handle 0.

use std::collections::HashMap;

/// Insertion-ordered assignment of handles to previously seen strings.
///
/// Handles are written on the wire as 2 bytes. A session would need more
/// than 65 536 distinct shared strings to overflow that width, far beyond
/// any request that fits the framed stream, so the table keeps a plain
/// counter rather than an error path.
#[derive(Debug, Default)]
pub(crate) struct SharedStringTable {
    handles: HashMap<String, u16>,
    next: u16,
}

impl SharedStringTable {
    /// Create an empty table.
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Look up the handle assigned to `s`, if it has been seen before.
    pub(crate) fn get(&self, s: &str) -> Option<u16> {
        self.handles.get(s).copied()
    }

    /// Register `s` as newly seen and return its assigned handle.
    ///
    /// Must only be called after [`get`](Self::get) returned `None`.
    pub(crate) fn register(&mut self, s: &str) -> u16 {
        let handle = self.next;
        self.handles.insert(s.to_owned(), handle);
        self.next += 1;
        handle
    }

    /// Number of strings registered so far.
    pub(crate) fn len(&self) -> usize {
        self.handles.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handles_start_at_zero_and_increment() {
        let mut table = SharedStringTable::new();
        assert_eq!(table.register("a"), 0);
        assert_eq!(table.register("b"), 1);
        assert_eq!(table.register("c"), 2);
    }

    #[test]
    fn test_get_before_and_after_register() {
        let mut table = SharedStringTable::new();
        assert_eq!(table.get("takamaka"), None);
        let handle = table.register("takamaka");
        assert_eq!(table.get("takamaka"), Some(handle));
    }

    #[test]
    fn test_len_counts_distinct_strings() {
        let mut table = SharedStringTable::new();
        table.register("a");
        table.register("b");
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_fresh_table_is_independent() {
        let mut first = SharedStringTable::new();
        first.register("a");
        first.register("b");

        // A new session starts over from handle 0.
        let mut second = SharedStringTable::new();
        assert_eq!(second.get("a"), None);
        assert_eq!(second.register("z"), 0);
    }
}
