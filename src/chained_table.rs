//! ChainedHashTable: fixed bucket array with singly-linked collision chains.

use crate::error::BuildError;
use crate::hash::{CharSum, KeyHash};
use log::{debug, trace};
use slotmap::{DefaultKey, SlotMap};

/// Bucket count used by [`ChainedHashTable::new`].
pub const DEFAULT_BUCKETS: usize = 16;

#[derive(Debug)]
struct Entry {
    key: String,
    value: String,
    next: Option<DefaultKey>,
}

/// String-to-string map using separate chaining over a fixed number of
/// buckets.
///
/// Each bucket holds the arena key of its chain head; each entry holds the
/// arena key of its successor. The bucket count never changes, so a key
/// stays in the bucket it was first stored in.
#[derive(Debug)]
pub struct ChainedHashTable<H = CharSum> {
    hasher: H,
    buckets: Box<[Option<DefaultKey>]>,
    entries: SlotMap<DefaultKey, Entry>, // every live entry is linked from exactly one chain
}

impl ChainedHashTable {
    /// Creates a table with [`DEFAULT_BUCKETS`] buckets and the [`CharSum`] hash.
    pub fn new() -> Self {
        Self::build(DEFAULT_BUCKETS, CharSum)
    }

    pub fn with_buckets(buckets: usize) -> Result<Self, BuildError> {
        Self::with_hasher(buckets, CharSum)
    }
}

impl Default for ChainedHashTable {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: KeyHash> ChainedHashTable<H> {
    pub fn with_hasher(buckets: usize, hasher: H) -> Result<Self, BuildError> {
        if buckets == 0 {
            return Err(BuildError::ZeroBuckets);
        }
        Ok(Self::build(buckets, hasher))
    }

    fn build(buckets: usize, hasher: H) -> Self {
        debug!("creating chained hash table with {} buckets", buckets);
        Self {
            hasher,
            buckets: vec![None; buckets].into_boxed_slice(),
            entries: SlotMap::with_key(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Stored entries per bucket. Not managed: there is no rehashing.
    pub fn load_factor(&self) -> f64 {
        self.len() as f64 / self.bucket_count() as f64
    }

    /// Index of the bucket `key` hashes to.
    pub fn bucket_index(&self, key: &str) -> usize {
        (self.hasher.hash_key(key) % self.buckets.len() as u64) as usize
    }

    /// Number of entries chained in `bucket`, or `None` if out of range.
    pub fn chain_len(&self, bucket: usize) -> Option<usize> {
        let head = *self.buckets.get(bucket)?;
        Some(self.chain(head).count())
    }

    fn chain(&self, head: Option<DefaultKey>) -> Chain<'_> {
        Chain {
            entries: &self.entries,
            cur: head,
        }
    }

    fn find(&self, key: &str) -> Option<DefaultKey> {
        let head = self.buckets[self.bucket_index(key)];
        self.chain(head)
            .find(|&(_, e)| e.key == key)
            .map(|(k, _)| k)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        let k = self.find(key)?;
        self.entries.get(k).map(|e| e.value.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.find(key).is_some()
    }

    /// Inserts `key`, or overwrites its value in place if already present.
    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        let index = self.bucket_index(key);
        let value = value.into();

        let mut cur = match self.buckets[index] {
            Some(head) => head,
            None => {
                let k = self.alloc(key, value);
                self.buckets[index] = Some(k);
                trace!("bucket {}: new chain head {:?}", index, key);
                return;
            }
        };

        loop {
            let entry = &mut self.entries[cur];
            if entry.key == key {
                entry.value = value;
                return;
            }
            match entry.next {
                Some(next) => cur = next,
                None => break,
            }
        }

        // `cur` is the tail of the chain.
        let k = self.alloc(key, value);
        self.entries[cur].next = Some(k);
        trace!("bucket {}: appended {:?} to chain", index, key);
    }

    fn alloc(&mut self, key: &str, value: String) -> DefaultKey {
        self.entries.insert(Entry {
            key: key.to_owned(),
            value,
            next: None,
        })
    }

    /// Unlinks the entry for `key`. Returns whether one was removed.
    pub fn remove(&mut self, key: &str) -> bool {
        let index = self.bucket_index(key);
        let mut prev: Option<DefaultKey> = None;
        let mut cur = self.buckets[index];

        while let Some(k) = cur {
            let entry = &self.entries[k];
            if entry.key != key {
                prev = cur;
                cur = entry.next;
                continue;
            }

            let next = entry.next;
            match prev {
                None => self.buckets[index] = next,
                Some(p) => self.entries[p].next = next,
            }
            self.entries.remove(k);
            trace!(
                "bucket {}: unlinked {:?} (head: {}, tail: {})",
                index,
                key,
                prev.is_none(),
                next.is_none()
            );
            return true;
        }
        false
    }
}

/// Walks one chain from a head key to its empty marker.
struct Chain<'a> {
    entries: &'a SlotMap<DefaultKey, Entry>,
    cur: Option<DefaultKey>,
}

impl<'a> Iterator for Chain<'a> {
    type Item = (DefaultKey, &'a Entry);
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let k = self.cur?;
        let e = self.entries.get(k)?;
        self.cur = e.next;
        Some((k, e))
    }
}
