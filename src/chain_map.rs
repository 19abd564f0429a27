//! ChainHashMap: fixed bucket array with per-bucket entry chains.

use crate::error::TableError;
use crate::hash::bucket_index;
use core::fmt;
use slotmap::SlotMap;

slotmap::new_key_type! {
    /// Arena handle for one chain node.
    struct EntryKey;
}

/// One key/value node. `next` links to the chain successor in the arena.
#[derive(Debug)]
struct Entry {
    key: String,
    value: String,
    next: Option<EntryKey>,
}

/// String-keyed hash table with a fixed bucket array and chained collision
/// resolution.
///
/// Each bucket holds the head of a singly linked chain; the nodes themselves
/// live in a slotmap arena, so chain surgery is edits to small copyable keys
/// and teardown releases every node exactly once. Bucket placement uses the
/// fixed djb2 hash (see [`crate::hash`]); the index depends on the bucket
/// count, so capacity never changes in place. Growth goes through
/// [`ChainHashMap::resize`], which consumes the table and returns a rebuilt
/// one.
pub struct ChainHashMap {
    buckets: Vec<Option<EntryKey>>,
    slots: SlotMap<EntryKey, Entry>,
}

/// Failed resize. Carries the untouched original table back to the caller,
/// in the style of `std::sync::mpsc::SendError`.
#[derive(Debug, thiserror::Error)]
#[error("resize failed: {error}")]
pub struct ResizeError {
    /// The original table, exactly as it was before the call.
    pub table: ChainHashMap,
    /// What went wrong.
    #[source]
    pub error: TableError,
}

impl ChainHashMap {
    /// Creates a table with `capacity` empty buckets and no entries.
    pub fn with_capacity(capacity: usize) -> Result<Self, TableError> {
        if capacity == 0 {
            return Err(TableError::ZeroCapacity);
        }
        let mut buckets = Vec::new();
        buckets
            .try_reserve_exact(capacity)
            .map_err(|_| TableError::OutOfMemory)?;
        buckets.resize(capacity, None);
        Ok(Self {
            buckets,
            slots: SlotMap::with_key(),
        })
    }

    /// Number of buckets. Fixed for the lifetime of this table value.
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Inserts or updates. A key already present has its value overwritten
    /// in place; a new key becomes the tail of its bucket's chain. The table
    /// stores its own copies of `key` and `value`.
    pub fn insert(&mut self, key: &str, value: &str) {
        let index = bucket_index(key, self.buckets.len());
        let mut tail = None;
        let mut cursor = self.buckets[index];
        while let Some(slot) = cursor {
            let entry = &mut self.slots[slot];
            if entry.key == key {
                entry.value = value.to_owned();
                return;
            }
            tail = Some(slot);
            cursor = entry.next;
        }
        let slot = self.slots.insert(Entry {
            key: key.to_owned(),
            value: value.to_owned(),
            next: None,
        });
        match tail {
            Some(prev) => self.slots[prev].next = Some(slot),
            None => self.buckets[index] = Some(slot),
        }
        trace_op!("insert: new entry in bucket {index}");
    }

    /// Looks up `key`, returning a borrow of its stored value.
    pub fn retrieve(&self, key: &str) -> Option<&str> {
        let index = bucket_index(key, self.buckets.len());
        let mut cursor = self.buckets[index];
        while let Some(slot) = cursor {
            let entry = &self.slots[slot];
            if entry.key == key {
                return Some(&entry.value);
            }
            cursor = entry.next;
        }
        None
    }

    /// Removes `key` if present. Returns whether an entry was removed.
    ///
    /// Head removal repoints the bucket at the successor; interior removal
    /// repoints the predecessor. At most one entry can match (keys are
    /// unique table-wide), so the scan stops at the first hit. An empty or
    /// non-matching chain is a no-op.
    pub fn remove(&mut self, key: &str) -> bool {
        let index = bucket_index(key, self.buckets.len());
        let mut prev: Option<EntryKey> = None;
        let mut cursor = self.buckets[index];
        while let Some(slot) = cursor {
            let next = self.slots[slot].next;
            if self.slots[slot].key == key {
                match prev {
                    Some(p) => self.slots[p].next = next,
                    None => self.buckets[index] = next,
                }
                self.slots.remove(slot);
                trace_op!("remove: unlinked entry from bucket {index}");
                return true;
            }
            prev = cursor;
            cursor = next;
        }
        false
    }

    /// Rebuilds into a table with doubled capacity, consuming `self`.
    ///
    /// Every entry is re-inserted through the normal insert path, so bucket
    /// positions are recomputed under the new modulus; traversal order is
    /// unspecified. On failure the original table comes back untouched
    /// inside the error.
    pub fn resize(self) -> Result<Self, ResizeError> {
        let doubled = match self.buckets.len().checked_mul(2) {
            Some(n) => n,
            None => {
                return Err(ResizeError {
                    table: self,
                    error: TableError::CapacityOverflow,
                })
            }
        };
        let mut grown = match Self::with_capacity(doubled) {
            Ok(table) => table,
            Err(error) => return Err(ResizeError { table: self, error }),
        };
        for (_slot, entry) in &self.slots {
            grown.insert(&entry.key, &entry.value);
        }
        trace_op!(
            "resize: {} -> {} buckets, {} entries rehashed",
            self.buckets.len(),
            doubled,
            grown.len()
        );
        Ok(grown)
    }

    /// Unordered iteration over `(key, value)` pairs.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            it: self.slots.iter(),
        }
    }
}

impl fmt::Debug for ChainHashMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// Iterator over entries in unspecified order.
pub struct Iter<'a> {
    it: slotmap::basic::Iter<'a, EntryKey, Entry>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a str);
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.it
            .next()
            .map(|(_slot, e)| (e.key.as_str(), e.value.as_str()))
    }
}
