use smallvec::SmallVec;
use std::cmp::Reverse;

use super::NodeKind;

/// Sibling sort key: kind ascending, then priority descending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Rank {
    kind: NodeKind,
    priority: Reverse<usize>,
}

impl Rank {
    pub fn new(kind: NodeKind, priority: usize) -> Self {
        Self {
            kind,
            priority: Reverse(priority),
        }
    }
}

/// Sibling container kept in [`Rank`] order.
///
/// Items are handles, so every reordering operation takes the ranking function that
/// resolves a handle to its current rank. Sorting is stable: equal ranks keep their
/// previous relative order.
#[derive(Debug, Clone)]
pub struct PriorityList<I> {
    items: SmallVec<[I; 4]>,
}

impl<I> Default for PriorityList<I> {
    fn default() -> Self {
        Self {
            items: SmallVec::new(),
        }
    }
}

impl<I: Copy + PartialEq> PriorityList<I> {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<I> {
        self.items.get(index).copied()
    }

    #[inline]
    pub fn first(&self) -> Option<I> {
        self.get(0)
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = I> + ExactSizeIterator + '_ {
        self.items.iter().copied()
    }

    pub fn position(&self, item: I) -> Option<usize> {
        self.items.iter().position(|&existing| existing == item)
    }

    pub fn append<R>(&mut self, items: impl IntoIterator<Item = I>, rank: R)
    where
        R: Fn(I) -> Rank,
    {
        self.items.extend(items);
        self.sort(rank);
    }

    pub fn replace<R>(&mut self, index: usize, item: I, rank: R)
    where
        R: Fn(I) -> Rank,
    {
        self.items[index] = item;
        self.sort(rank);
    }

    /// Removes `item` by identity. Relative order of the rest is unaffected.
    pub fn remove(&mut self, item: I) -> bool {
        match self.position(item) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn sort<R>(&mut self, rank: R)
    where
        R: Fn(I) -> Rank,
    {
        self.items.sort_by_key(|&item| rank(item));
    }
}
