//! A double-ended queue backed by a circular doubly-linked list with a sentinel node.
//!
//! Nodes live in an arena and refer to each other by index, so no node is ever shared or
//! aliased. Index 0 is the sentinel: its `next` is the first element and its `prev` is the last,
//! and an empty list is the sentinel linked to itself.
//!
//! ```
//! use twindeque::LinkedDeque;
//!
//! let mut d = LinkedDeque::new();
//! d.add_last(2);
//! d.add_first(1);
//! d.add_last(3);
//! assert_eq!(d.get(2), Some(&3));
//! assert_eq!(d.remove_first(), Some(1));
//! assert_eq!(d, vec![2, 3]);
//! ```

use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::iter::{FromIterator, FusedIterator};

use alloc::vec::Vec;

use crate::Deque;

const SENTINEL: usize = 0;
/// Arenas at or below this many nodes are never compacted while non-empty.
const COMPACT_FLOOR: usize = 16;

#[derive(Debug)]
struct Node<T> {
    prev: usize,
    next: usize,
    // `None` for the sentinel and for vacated nodes.
    item: Option<T>,
}

impl<T> Node<T> {
    fn sentinel() -> Self {
        Node {
            prev: SENTINEL,
            next: SENTINEL,
            item: None,
        }
    }
}

/// A double-ended queue backed by a circular doubly-linked list with a sentinel node.
///
/// See the [module-level documentation](self) for the layout.
///
/// Removed nodes are kept for reuse by later additions. Once more than half of an arena
/// larger than 16 nodes is vacant, the live nodes are moved into a fresh arena of just the
/// right size, so memory follows the length of the list rather than its peak.
pub struct LinkedDeque<T> {
    nodes: Vec<Node<T>>,
    // Vacated nodes, reused before the arena grows.
    free: Vec<usize>,
    len: usize,
}

impl<T> Default for LinkedDeque<T> {
    /// Creates an empty `LinkedDeque<T>`.
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> LinkedDeque<T> {
    /// Creates an empty `LinkedDeque`, holding only the sentinel.
    pub fn new() -> Self {
        Self {
            nodes: alloc::vec![Node::sentinel()],
            free: Vec::new(),
            len: 0,
        }
    }

    /// Creates a `LinkedDeque` holding exactly `item`.
    pub fn with_item(item: T) -> Self {
        let mut deque = Self::new();
        deque.add_first(item);
        deque
    }

    /// Returns the number of elements in the `LinkedDeque`.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Same as [`len`](LinkedDeque::len).
    #[inline]
    pub fn size(&self) -> usize {
        self.len
    }

    /// Returns `true` if the `LinkedDeque` is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Adds an element to the front.
    pub fn add_first(&mut self, item: T) {
        self.link_after(SENTINEL, item);
    }

    /// Adds an element to the back.
    pub fn add_last(&mut self, item: T) {
        let last = self.nodes[SENTINEL].prev;
        self.link_after(last, item);
    }

    /// Removes the first element and returns it, or `None` if the `LinkedDeque` is empty.
    pub fn remove_first(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let first = self.nodes[SENTINEL].next;
        Some(self.unlink(first))
    }

    /// Removes the last element and returns it, or `None` if the `LinkedDeque` is empty.
    pub fn remove_last(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let last = self.nodes[SENTINEL].prev;
        Some(self.unlink(last))
    }

    /// Provides a reference to the element at the given index, or `None` if it is out of bounds.
    ///
    /// Walks from whichever end of the list is nearer.
    ///
    /// # Examples
    ///
    /// ```
    /// use twindeque::LinkedDeque;
    ///
    /// let d: LinkedDeque<_> = (0..10).collect();
    /// assert_eq!(d.get(2), Some(&2));
    /// assert_eq!(d.get(8), Some(&8));
    /// assert_eq!(d.get(10), None);
    /// ```
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len {
            return None;
        }
        let mut node = SENTINEL;
        if index < self.len / 2 {
            for _ in 0..=index {
                node = self.nodes[node].next;
            }
        } else {
            for _ in index..self.len {
                node = self.nodes[node].prev;
            }
        }
        self.nodes[node].item.as_ref()
    }

    /// Same as [`get`](LinkedDeque::get), but walks recursively, from whichever end of the list
    /// is nearer.
    ///
    /// # Stack usage
    ///
    /// Each step of the walk is one stack frame, so the recursion is
    /// `min(index, len - 1 - index)` frames deep. Unoptimized builds do not turn the recursion
    /// into a loop, so on very long lists an index far from both ends can exhaust the stack.
    /// Prefer [`get`](LinkedDeque::get) there; it walks the same path without recursing.
    ///
    /// # Examples
    ///
    /// ```
    /// use twindeque::LinkedDeque;
    ///
    /// let d: LinkedDeque<_> = vec!['x', 'y', 'z'].into();
    /// assert_eq!(d.get_recursive(1), Some(&'y'));
    /// assert_eq!(d.get_recursive(3), None);
    /// ```
    pub fn get_recursive(&self, index: usize) -> Option<&T> {
        if index >= self.len {
            return None;
        }
        if index < self.len / 2 {
            self.walk_forward(self.nodes[SENTINEL].next, index)
        } else {
            self.walk_backward(self.nodes[SENTINEL].prev, self.len - 1 - index)
        }
    }

    fn walk_forward(&self, node: usize, steps: usize) -> Option<&T> {
        if steps == 0 {
            self.nodes[node].item.as_ref()
        } else {
            self.walk_forward(self.nodes[node].next, steps - 1)
        }
    }

    fn walk_backward(&self, node: usize, steps: usize) -> Option<&T> {
        if steps == 0 {
            self.nodes[node].item.as_ref()
        } else {
            self.walk_backward(self.nodes[node].prev, steps - 1)
        }
    }

    /// Returns a front-to-back iterator.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            nodes: &self.nodes,
            front: self.nodes[SENTINEL].next,
            back: self.nodes[SENTINEL].prev,
            remaining: self.len,
        }
    }

    /// Returns `true` if the `LinkedDeque` contains an element equal to the given value.
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq<T>,
    {
        self.iter().any(|e| e == x)
    }

    fn link_after(&mut self, prev: usize, item: T) {
        let next = self.nodes[prev].next;
        let node = Node {
            prev,
            next,
            item: Some(item),
        };
        let idx = match self.free.pop() {
            Some(idx) => {
                self.nodes[idx] = node;
                idx
            }
            None => {
                self.nodes.push(node);
                self.nodes.len() - 1
            }
        };
        self.nodes[prev].next = idx;
        self.nodes[next].prev = idx;
        self.len += 1;
    }

    fn unlink(&mut self, idx: usize) -> T {
        debug_assert_ne!(idx, SENTINEL);
        let (prev, next) = (self.nodes[idx].prev, self.nodes[idx].next);
        self.nodes[prev].next = next;
        self.nodes[next].prev = prev;
        let item = match self.nodes[idx].item.take() {
            Some(item) => item,
            None => unreachable!("linked node without an item"),
        };
        self.len -= 1;
        self.free.push(idx);

        if self.len == 0
            || (self.nodes.len() > COMPACT_FLOOR && self.free.len() * 2 > self.nodes.len())
        {
            self.compact();
        }
        item
    }

    /// Rebuilds the arena with only the live nodes, in list order.
    #[cold]
    #[inline(never)]
    fn compact(&mut self) {
        let mut nodes = Vec::with_capacity(self.len + 1);
        nodes.push(Node::sentinel());
        let mut cursor = self.nodes[SENTINEL].next;
        while cursor != SENTINEL {
            let node = &mut self.nodes[cursor];
            cursor = node.next;
            let idx = nodes.len();
            nodes[idx - 1].next = idx;
            nodes.push(Node {
                prev: idx - 1,
                next: SENTINEL,
                item: node.item.take(),
            });
        }
        nodes[SENTINEL].prev = nodes.len() - 1;
        debug_assert_eq!(nodes.len(), self.len + 1);

        self.nodes = nodes;
        self.free = Vec::new();
    }
}

impl<T: Clone> Clone for LinkedDeque<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }

    fn clone_from(&mut self, other: &Self) {
        while self.remove_last().is_some() {}
        self.extend(other.iter().cloned());
    }
}

impl<T> Deque<T> for LinkedDeque<T> {
    type Iter<'a> = Iter<'a, T> where T: 'a;

    #[inline]
    fn add_first(&mut self, item: T) {
        LinkedDeque::add_first(self, item)
    }

    #[inline]
    fn add_last(&mut self, item: T) {
        LinkedDeque::add_last(self, item)
    }

    #[inline]
    fn remove_first(&mut self) -> Option<T> {
        LinkedDeque::remove_first(self)
    }

    #[inline]
    fn remove_last(&mut self) -> Option<T> {
        LinkedDeque::remove_last(self)
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&T> {
        LinkedDeque::get(self, index)
    }

    #[inline]
    fn size(&self) -> usize {
        self.len
    }

    #[inline]
    fn iter(&self) -> Iter<'_, T> {
        LinkedDeque::iter(self)
    }
}

impl<A: PartialEq> PartialEq for LinkedDeque<A> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<A: Eq> Eq for LinkedDeque<A> {}

impl<A: PartialOrd> PartialOrd for LinkedDeque<A> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<A: Ord> Ord for LinkedDeque<A> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<A: Hash> Hash for LinkedDeque<A> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len.hash(state);
        self.iter().for_each(|elem| elem.hash(state));
    }
}

impl<A> FromIterator<A> for LinkedDeque<A> {
    fn from_iter<T: IntoIterator<Item = A>>(iter: T) -> Self {
        let mut deq = Self::new();
        deq.extend(iter);
        deq
    }
}

impl<A> Extend<A> for LinkedDeque<A> {
    fn extend<T: IntoIterator<Item = A>>(&mut self, iter: T) {
        let iter = iter.into_iter();
        self.nodes.reserve(iter.size_hint().0.saturating_sub(self.free.len()));
        iter.for_each(move |v| self.add_last(v));
    }
}

impl<'a, T: 'a + Copy> Extend<&'a T> for LinkedDeque<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T> IntoIterator for LinkedDeque<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter { deque: self }
    }
}

impl<'a, T> IntoIterator for &'a LinkedDeque<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedDeque<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self).finish()
    }
}

impl<T> From<Vec<T>> for LinkedDeque<T> {
    fn from(other: Vec<T>) -> Self {
        other.into_iter().collect()
    }
}

impl<T> From<LinkedDeque<T>> for Vec<T> {
    fn from(other: LinkedDeque<T>) -> Self {
        let mut v = Vec::with_capacity(other.len());
        v.extend(other);
        v
    }
}

/// An iterator over the elements of a `LinkedDeque`.
///
/// This `struct` is created by the [`iter`](LinkedDeque::iter) method on [`LinkedDeque`].
pub struct Iter<'a, T> {
    nodes: &'a [Node<T>],
    front: usize,
    back: usize,
    remaining: usize,
}

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Self { ..*self }
    }
}

impl<'a, T: fmt::Debug> fmt::Debug for Iter<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let node = &self.nodes[self.front];
        self.front = node.next;
        self.remaining -= 1;
        node.item.as_ref()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }

    #[inline]
    fn last(mut self) -> Option<&'a T> {
        self.next_back()
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let node = &self.nodes[self.back];
        self.back = node.prev;
        self.remaining -= 1;
        node.item.as_ref()
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// An owning iterator over the elements of a `LinkedDeque`.
///
/// This `struct` is created by the `into_iter` method on [`LinkedDeque`]
/// (provided by the `IntoIterator` trait).
#[derive(Clone, Debug)]
pub struct IntoIter<T> {
    deque: LinkedDeque<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.deque.remove_first()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.deque.len, Some(self.deque.len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.deque.remove_last()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

#[cfg(test)]
#[cfg(not(tarpaulin_include))] // don't count for coverage
mod tests {
    use super::{LinkedDeque, SENTINEL};
    use crate::{ArrayDeque, Deque};
    use std::string::String;
    use std::vec::Vec;

    #[test]
    fn test_empty_sentinel_loops() {
        let d: LinkedDeque<i32> = LinkedDeque::new();
        assert_eq!(d.nodes.len(), 1);
        assert_eq!(d.nodes[SENTINEL].next, SENTINEL);
        assert_eq!(d.nodes[SENTINEL].prev, SENTINEL);
        assert!(d.is_empty());
    }

    #[test]
    fn test_with_item() {
        let d = LinkedDeque::with_item('q');
        assert_eq!(d.len(), 1);
        assert_eq!(d.get(0), Some(&'q'));
        assert_eq!(d.nodes[SENTINEL].next, d.nodes[SENTINEL].prev);
    }

    #[test]
    fn test_add_remove() {
        let mut d = LinkedDeque::new();
        d.add_first(2);
        d.add_first(1);
        d.add_last(3);
        assert_eq!(d, vec![1, 2, 3]);
        assert_eq!(d.remove_last(), Some(3));
        assert_eq!(d.remove_first(), Some(1));
        assert_eq!(d.remove_first(), Some(2));
        assert_eq!(d.remove_first(), None);
        assert_eq!(d.remove_last(), None);

        // emptying the list leaves only the sentinel behind
        assert_eq!(d.nodes.len(), 1);
        assert!(d.free.is_empty());
        assert_eq!(d.nodes[SENTINEL].next, SENTINEL);
    }

    #[test]
    fn test_single_element_remove_last() {
        let mut d = LinkedDeque::with_item(5);
        assert_eq!(d.remove_last(), Some(5));
        assert!(d.is_empty());
        d.add_last(6);
        assert_eq!(d.remove_first(), Some(6));
    }

    #[test]
    fn test_reuses_vacated_nodes() {
        let mut d: LinkedDeque<_> = (0..4).collect();
        assert_eq!(d.nodes.len(), 5);
        d.remove_first();
        d.remove_last();
        assert_eq!(d.free.len(), 2);
        d.add_first(10);
        d.add_last(11);
        assert_eq!(d.nodes.len(), 5);
        assert!(d.free.is_empty());
        assert_eq!(d, vec![10, 1, 2, 11]);
    }

    #[test]
    fn test_get_both_directions() {
        let d: LinkedDeque<_> = (0..11).collect();
        for i in 0..11 {
            assert_eq!(d.get(i), Some(&i));
            assert_eq!(d.get_recursive(i), Some(&i));
        }
        assert_eq!(d.get(11), None);
        assert_eq!(d.get_recursive(11), None);

        let empty: LinkedDeque<usize> = LinkedDeque::new();
        assert_eq!(empty.get(0), None);
        assert_eq!(empty.get_recursive(0), None);
    }

    #[test]
    fn test_get_recursive_deep() {
        // the walk starts at the nearer end, so the deepest recursion here is 5_000 frames
        let d: LinkedDeque<u32> = (0..10_000).collect();
        assert_eq!(d.get_recursive(9_999), Some(&9_999));
        assert_eq!(d.get_recursive(0), Some(&0));
        assert_eq!(d.get_recursive(4_999), Some(&4_999));
        assert_eq!(d.get_recursive(5_000), Some(&5_000));
        assert_eq!(d.get_recursive(10_000), None);
        for i in (0..10_000).step_by(997) {
            assert_eq!(d.get_recursive(i as usize), d.get(i as usize));
        }
    }

    #[test]
    fn test_compacts_when_mostly_vacant() {
        let mut d: LinkedDeque<usize> = (0..1000).collect();
        assert_eq!(d.nodes.len(), 1001);

        for i in 0..999 {
            if i % 2 == 0 {
                d.remove_first();
            } else {
                d.remove_last();
            }
            assert!(d.nodes.len() <= 16 || d.free.len() * 2 <= d.nodes.len());
            assert_eq!(d.nodes.len(), d.len() + 1 + d.free.len());
        }
        assert_eq!(d.len(), 1);
        assert!(d.nodes.len() <= 16);
        assert_eq!(d, vec![500]);

        // links survive the rebuilds in both directions
        d.add_first(499);
        d.add_last(501);
        assert_eq!(d, vec![499, 500, 501]);
        assert!(d.iter().rev().copied().eq((499..=501).rev()));
    }

    #[test]
    fn test_compaction_keeps_order() {
        let mut d: LinkedDeque<usize> = LinkedDeque::new();
        for i in 0..100 {
            if i % 3 == 0 {
                d.add_first(i);
            } else {
                d.add_last(i);
            }
        }
        let expected: Vec<usize> = d.iter().copied().collect();
        for _ in 0..60 {
            d.remove_last();
        }
        assert!(d.iter().copied().eq(expected[..40].iter().copied()));
        for i in 0..40 {
            assert_eq!(d.get(i), Some(&expected[i]));
        }
    }

    #[test]
    fn test_clone_is_independent() {
        let mut a: LinkedDeque<String> = LinkedDeque::new();
        a.add_last(String::from("x"));
        a.add_last(String::from("y"));
        let mut b = a.clone();
        b.add_first(String::from("w"));
        a.remove_last();
        assert_eq!(a, vec![String::from("x")]);
        assert_eq!(
            b,
            vec![String::from("w"), String::from("x"), String::from("y")]
        );
    }

    #[test]
    fn test_clone_from() {
        let a: LinkedDeque<_> = (0..5).collect();
        let mut b: LinkedDeque<_> = (10..100).collect();
        b.clone_from(&a);
        assert_eq!(a, b);
    }

    #[test]
    fn test_iter() {
        let d: LinkedDeque<_> = (0..6).collect();
        assert!(d.iter().copied().eq(0..6));
        assert!(d.iter().rev().copied().eq((0..6).rev()));

        let mut it = d.iter();
        assert_eq!(it.next(), Some(&0));
        assert_eq!(it.next_back(), Some(&5));
        assert_eq!(it.len(), 4);
        assert!(it.copied().eq(1..5));

        let v: Vec<_> = d.into_iter().rev().collect();
        assert_eq!(v, [5, 4, 3, 2, 1, 0]);
    }

    #[test]
    fn test_show() {
        let d: LinkedDeque<_> = vec![1, 2].into();
        assert_eq!(format!("{:?}", d), "[1, 2]");
        assert_eq!(format!("{:?}", d.iter()), "[1, 2]");
    }

    #[test]
    fn test_write_deque() {
        let d: LinkedDeque<_> = vec!["to", "be"].into();
        let mut out = String::new();
        d.write_deque(&mut out).unwrap();
        assert_eq!(out, "to be\n");
    }

    #[test]
    #[cfg(feature = "std")]
    fn test_print_deque() {
        let d: LinkedDeque<_> = vec!["to", "be"].into();
        d.print_deque();
        assert_eq!(d, vec!["to", "be"]);
    }

    #[test]
    fn test_matches_array_deque() {
        let mut a = ArrayDeque::new();
        let mut l = LinkedDeque::new();
        for i in 0..50 {
            if i % 3 == 0 {
                a.add_first(i);
                l.add_first(i);
            } else {
                a.add_last(i);
                l.add_last(i);
            }
        }
        assert_eq!(a, l);
        assert_eq!(l, a);
        for _ in 0..20 {
            assert_eq!(a.remove_last(), l.remove_last());
            assert_eq!(a.remove_first(), l.remove_first());
        }
        assert_eq!(a, l);
    }
}
