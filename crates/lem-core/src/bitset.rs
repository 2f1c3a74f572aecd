//! Fixed-capacity dense bitset over `usize` indices.
//!
//! Used for route interiors (indexed by `RoomId`), the enumerator's visited
//! set, and the scheduler's per-turn room/tunnel usage.  Capacity is fixed at
//! construction; indexing past it panics like a slice would.

const WORD_BITS: usize = u64::BITS as usize;

/// A set of small integers backed by a `Vec<u64>`.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Default)]
pub struct BitSet {
    words: Vec<u64>,
    capacity: usize,
}

impl BitSet {
    /// An empty set able to hold indices `0..capacity`.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            words: vec![0; capacity.div_ceil(WORD_BITS)],
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Insert `i`; returns `true` if it was not already present.
    #[inline]
    pub fn insert(&mut self, i: usize) -> bool {
        assert!(i < self.capacity, "bit {i} out of range 0..{}", self.capacity);
        let (w, mask) = (i / WORD_BITS, 1u64 << (i % WORD_BITS));
        let fresh = self.words[w] & mask == 0;
        self.words[w] |= mask;
        fresh
    }

    /// Remove `i`; returns `true` if it was present.
    #[inline]
    pub fn remove(&mut self, i: usize) -> bool {
        assert!(i < self.capacity, "bit {i} out of range 0..{}", self.capacity);
        let (w, mask) = (i / WORD_BITS, 1u64 << (i % WORD_BITS));
        let present = self.words[w] & mask != 0;
        self.words[w] &= !mask;
        present
    }

    #[inline]
    pub fn contains(&self, i: usize) -> bool {
        i < self.capacity && self.words[i / WORD_BITS] & (1u64 << (i % WORD_BITS)) != 0
    }

    /// `true` if no index is in both sets.
    ///
    /// Sets of different capacity compare over their common prefix.
    #[inline]
    pub fn is_disjoint(&self, other: &BitSet) -> bool {
        self.words
            .iter()
            .zip(&other.words)
            .all(|(a, b)| a & b == 0)
    }

    /// Add every index of `other` to `self`.
    ///
    /// # Panics
    /// Panics if `other` is larger than `self`.
    pub fn union_with(&mut self, other: &BitSet) {
        assert!(other.words.len() <= self.words.len(), "union with a larger set");
        for (a, b) in self.words.iter_mut().zip(&other.words) {
            *a |= *b;
        }
    }

    pub fn len(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|&w| w == 0)
    }

    /// Indices in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.words.iter().enumerate().flat_map(|(wi, &word)| {
            let mut rest = word;
            std::iter::from_fn(move || {
                if rest == 0 {
                    return None;
                }
                let bit = rest.trailing_zeros() as usize;
                rest &= rest - 1;
                Some(wi * WORD_BITS + bit)
            })
        })
    }
}
