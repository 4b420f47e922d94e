//! Modulo-wrapped indexing over a fixed list
//!
//! Lets the walkers replay a finite slot schedule indefinitely: any `i64`
//! index resolves to `((i % n) + n) % n`, so negative and out-of-range
//! indices are well defined.

use std::ops::Index;

/// A fixed, non-empty ordered sequence accessed with wrapping indices.
#[derive(Debug, Clone, PartialEq)]
pub struct CyclicList<T> {
    items: Vec<T>,
}

// The constructor rejects empty input, so there is no `is_empty` to pair
// with `len`.
#[allow(clippy::len_without_is_empty)]
impl<T> CyclicList<T> {
    /// Returns `None` for an empty input; index resolution needs a
    /// non-zero length.
    pub fn new(items: Vec<T>) -> Option<CyclicList<T>> {
        if items.is_empty() {
            None
        } else {
            Some(CyclicList { items })
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn get(&self, index: i64) -> &T {
        let n = self.items.len() as i64;
        &self.items[index.rem_euclid(n) as usize]
    }
}

impl<T> Index<i64> for CyclicList<T> {
    type Output = T;

    fn index(&self, index: i64) -> &T {
        self.get(index)
    }
}

// ── Tests ──────────────────────────────────────────────────────
