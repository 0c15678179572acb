//! Ordered doubly-linked chain of entries for one table slot.
//!
//! # Chain Structure
//!
//! ```text
//! head (smallest key) <-> e1 <-> e2 <-> ... <-> tail (largest key)
//! ```
//!
//! Nodes are stored in a per-bucket arena and linked by index, so the
//! bucket owns all of its entries and no node is aliased from outside.
//! Entries are never removed; an index stays valid for the life of the
//! bucket.
//!
//! # Ordering
//!
//! Insertion splices the new node after the last node whose key is less
//! than or equal to the new key. Keys are therefore non-decreasing from head
//! to tail, and duplicates of a key appear in insertion order.

/// Sentinel link meaning "no node".
const NIL: u32 = u32::MAX;

struct Node<V> {
    key: u64,
    value: V,
    prev: u32,
    next: u32,
}

impl<V> Node<V> {
    /// Get the next node index, or None at the tail.
    #[inline]
    fn next_id(&self) -> Option<usize> {
        if self.next == NIL {
            None
        } else {
            Some(self.next as usize)
        }
    }
}

/// An ordered chain of `(key, value)` entries.
pub struct Bucket<V> {
    nodes: Vec<Node<V>>,
    head: u32,
    tail: u32,
}

impl<V> Default for Bucket<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Bucket<V> {
    /// Create an empty bucket.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            head: NIL,
            tail: NIL,
        }
    }

    /// Create a bucket holding a single entry.
    pub fn with_entry(key: u64, value: V) -> Self {
        let mut bucket = Self::new();
        bucket.insert(key, value);
        bucket
    }

    /// Number of entries in the chain.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the chain is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head == NIL
    }

    /// Insert an entry, keeping keys in ascending order.
    ///
    /// The search for the insertion point starts at the tail, so keys that
    /// arrive in ascending order are appended in constant time. An entry
    /// whose key is already present goes after the existing ones.
    ///
    /// # Panics
    ///
    /// Panics if the bucket already holds `u32::MAX` entries.
    pub fn insert(&mut self, key: u64, value: V) {
        assert!(self.nodes.len() < NIL as usize, "bucket is full");
        let id = self.nodes.len() as u32;

        // find the last node with a key <= the new key
        let mut prev = self.tail;
        while prev != NIL && self.nodes[prev as usize].key > key {
            prev = self.nodes[prev as usize].prev;
        }
        let next = if prev == NIL {
            self.head
        } else {
            self.nodes[prev as usize].next
        };

        self.nodes.push(Node {
            key,
            value,
            prev,
            next,
        });

        if prev == NIL {
            self.head = id;
        } else {
            self.nodes[prev as usize].next = id;
        }
        if next == NIL {
            self.tail = id;
        } else {
            self.nodes[next as usize].prev = id;
        }
    }

    /// Index of the first node (from the head) holding `key`.
    fn find(&self, key: u64) -> Option<usize> {
        let mut id = self.head_id();
        while let Some(index) = id {
            let node = &self.nodes[index];
            if node.key == key {
                return Some(index);
            }
            if node.key > key {
                return None;
            }
            id = node.next_id();
        }
        None
    }

    /// Look up the first entry for `key` in head-to-tail order.
    pub fn get(&self, key: u64) -> Option<&V> {
        self.find(key).map(|index| &self.nodes[index].value)
    }

    /// Mutable variant of [`get`](Self::get).
    pub fn get_mut(&mut self, key: u64) -> Option<&mut V> {
        self.find(key).map(|index| &mut self.nodes[index].value)
    }

    /// Entry with the smallest key.
    pub fn first(&self) -> Option<(u64, &V)> {
        self.head_id().map(|index| self.entry(index))
    }

    /// Entry with the largest key.
    pub fn last(&self) -> Option<(u64, &V)> {
        self.tail_id().map(|index| self.entry(index))
    }

    /// Iterate entries from head to tail. Use `.rev()` to walk the
    /// `prev` links from tail to head.
    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            bucket: self,
            front: self.head,
            back: self.tail,
            remaining: self.nodes.len(),
        }
    }

    /// Iterate keys from head to tail.
    pub fn keys(&self) -> impl DoubleEndedIterator<Item = u64> + '_ {
        self.iter().map(|(key, _)| key)
    }

    /// Walk the chain in both directions and check its invariants.
    ///
    /// Returns `true` if keys are non-decreasing from head to tail, every
    /// `next` link is mirrored by the `prev` link of its target, and both
    /// walks visit exactly `len()` entries.
    pub fn is_consistent(&self) -> bool {
        let mut count = 0;
        let mut prev = NIL;
        let mut id = self.head;
        while id != NIL {
            let node = &self.nodes[id as usize];
            if node.prev != prev {
                return false;
            }
            if prev != NIL && self.nodes[prev as usize].key > node.key {
                return false;
            }
            count += 1;
            if count > self.nodes.len() {
                return false;
            }
            prev = id;
            id = node.next;
        }
        if prev != self.tail || count != self.nodes.len() {
            return false;
        }

        let mut count = 0;
        let mut id = self.tail;
        while id != NIL {
            count += 1;
            if count > self.nodes.len() {
                return false;
            }
            id = self.nodes[id as usize].prev;
        }
        count == self.nodes.len()
    }

    #[inline]
    fn head_id(&self) -> Option<usize> {
        (self.head != NIL).then_some(self.head as usize)
    }

    #[inline]
    fn tail_id(&self) -> Option<usize> {
        (self.tail != NIL).then_some(self.tail as usize)
    }

    #[inline]
    fn entry(&self, index: usize) -> (u64, &V) {
        let node = &self.nodes[index];
        (node.key, &node.value)
    }
}

impl<V: std::fmt::Debug> std::fmt::Debug for Bucket<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<'a, V> IntoIterator for &'a Bucket<V> {
    type Item = (u64, &'a V);
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Double-ended iterator over the entries of a [`Bucket`].
pub struct Iter<'a, V> {
    bucket: &'a Bucket<V>,
    front: u32,
    back: u32,
    remaining: usize,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (u64, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = &self.bucket.nodes[self.front as usize];
        self.front = node.next;
        self.remaining -= 1;
        Some((node.key, &node.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<V> DoubleEndedIterator for Iter<'_, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = &self.bucket.nodes[self.back as usize];
        self.back = node.prev;
        self.remaining -= 1;
        Some((node.key, &node.value))
    }
}

impl<V> ExactSizeIterator for Iter<'_, V> {}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::seq::SliceRandom;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256PlusPlus;

    fn keys_of<V>(bucket: &Bucket<V>) -> Vec<u64> {
        bucket.keys().collect()
    }

    #[test]
    fn test_empty_bucket() {
        let bucket: Bucket<&str> = Bucket::new();
        assert!(bucket.is_empty());
        assert_eq!(bucket.len(), 0);
        assert!(bucket.first().is_none());
        assert!(bucket.last().is_none());
        assert!(bucket.get(0).is_none());
        assert_eq!(bucket.iter().count(), 0);
        assert!(bucket.is_consistent());
    }

    #[test]
    fn test_with_entry() {
        let bucket = Bucket::with_entry(5, "five");
        assert_eq!(bucket.len(), 1);
        assert_eq!(bucket.first(), Some((5, &"five")));
        assert_eq!(bucket.last(), Some((5, &"five")));
        assert_eq!(bucket.get(5), Some(&"five"));
        assert!(bucket.is_consistent());
    }

    #[test]
    fn test_ascending_appends_at_tail() {
        let mut bucket = Bucket::new();
        for k in 0..10 {
            bucket.insert(k, k * 10);
        }
        assert_eq!(keys_of(&bucket), (0..10).collect::<Vec<_>>());
        assert_eq!(bucket.last(), Some((9, &90)));
        assert!(bucket.is_consistent());
    }

    #[test]
    fn test_descending_prepends_at_head() {
        let mut bucket = Bucket::new();
        for k in (0..10).rev() {
            bucket.insert(k, ());
        }
        assert_eq!(keys_of(&bucket), (0..10).collect::<Vec<_>>());
        assert_eq!(bucket.first().map(|(k, _)| k), Some(0));
        assert!(bucket.is_consistent());
    }

    #[test]
    fn test_insert_into_middle() {
        // smaller than the tail and smaller than an earlier entry
        let mut bucket = Bucket::new();
        bucket.insert(10, "a");
        bucket.insert(30, "b");
        bucket.insert(40, "c");
        bucket.insert(20, "d");
        bucket.insert(5, "e");
        bucket.insert(35, "f");
        assert_eq!(keys_of(&bucket), vec![5, 10, 20, 30, 35, 40]);
        assert_eq!(bucket.get(20), Some(&"d"));
        assert_eq!(bucket.get(35), Some(&"f"));
        assert!(bucket.is_consistent());
    }

    #[test]
    fn test_duplicates_are_kept_in_order() {
        let mut bucket = Bucket::new();
        bucket.insert(7, "first");
        bucket.insert(3, "low");
        bucket.insert(7, "second");
        bucket.insert(9, "high");
        bucket.insert(7, "third");

        assert_eq!(bucket.len(), 5);
        assert_eq!(keys_of(&bucket), vec![3, 7, 7, 7, 9]);
        let sevens: Vec<_> = bucket
            .iter()
            .filter(|(k, _)| *k == 7)
            .map(|(_, v)| *v)
            .collect();
        assert_eq!(sevens, vec!["first", "second", "third"]);
        // lookup returns the first match from the head
        assert_eq!(bucket.get(7), Some(&"first"));
        assert!(bucket.is_consistent());
    }

    #[test]
    fn test_duplicate_of_tail_is_not_dropped() {
        let mut bucket = Bucket::new();
        bucket.insert(4, 1);
        bucket.insert(4, 2);
        assert_eq!(bucket.len(), 2);
        assert_eq!(bucket.iter().map(|(_, v)| *v).collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn test_get_miss_stops_early() {
        let mut bucket = Bucket::new();
        for k in [2, 4, 6, 8] {
            bucket.insert(k, k);
        }
        assert!(bucket.get(1).is_none());
        assert!(bucket.get(5).is_none());
        assert!(bucket.get(9).is_none());
    }

    #[test]
    fn test_get_mut() {
        let mut bucket = Bucket::new();
        bucket.insert(1, String::from("a"));
        bucket.insert(2, String::from("b"));
        bucket.get_mut(2).unwrap().push('!');
        assert_eq!(bucket.get(2).map(String::as_str), Some("b!"));
        assert!(bucket.get_mut(3).is_none());
    }

    #[test]
    fn test_reverse_iteration_follows_prev_links() {
        let mut bucket = Bucket::new();
        for k in [50, 10, 40, 20, 30] {
            bucket.insert(k, ());
        }
        let backward: Vec<u64> = bucket.keys().rev().collect();
        assert_eq!(backward, vec![50, 40, 30, 20, 10]);
    }

    #[test]
    fn test_iter_from_both_ends() {
        let mut bucket = Bucket::new();
        for k in 0..5 {
            bucket.insert(k, ());
        }
        let mut iter = bucket.iter();
        assert_eq!(iter.len(), 5);
        assert_eq!(iter.next().map(|(k, _)| k), Some(0));
        assert_eq!(iter.next_back().map(|(k, _)| k), Some(4));
        assert_eq!(iter.next().map(|(k, _)| k), Some(1));
        assert_eq!(iter.next_back().map(|(k, _)| k), Some(3));
        assert_eq!(iter.next().map(|(k, _)| k), Some(2));
        assert!(iter.next().is_none());
        assert!(iter.next_back().is_none());
    }

    #[test]
    fn test_random_order_stays_sorted() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(0xdead_beef);
        for round in 0..20 {
            let mut keys: Vec<u64> = (0..200).map(|k| k % 150).collect();
            keys.shuffle(&mut rng);

            let mut bucket = Bucket::new();
            for (i, &k) in keys.iter().enumerate() {
                bucket.insert(k, i);
                assert!(bucket.is_consistent(), "round {round} insert {i}");
            }

            let mut expected = keys.clone();
            expected.sort_unstable();
            assert_eq!(keys_of(&bucket), expected);
        }
    }

    #[test]
    fn test_debug_format() {
        let mut bucket = Bucket::new();
        bucket.insert(2, "b");
        bucket.insert(1, "a");
        assert_eq!(format!("{:?}", bucket), r#"{1: "a", 2: "b"}"#);
    }
}
