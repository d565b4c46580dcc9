//! Double-ended queues behind one interface: a circular growable array and a sentinel linked list.
//!
//! Both [`ArrayDeque`] and [`LinkedDeque`] implement the [`Deque`] trait, which is the only
//! contract that clients such as the [`Palindrome`] checker depend on. Either backing can be
//! swapped in without the client noticing.
//!
//! The interesting one is [`ArrayDeque`]. It keeps its elements in a fixed-length buffer of slots
//! and tracks two cursors: `next_first`, the slot the next [`add_first`] will fill, and
//! `next_last`, the slot the next [`add_last`] will fill. Both cursors wrap around the ends of the
//! buffer, so the live elements form one contiguous _circular_ run that may straddle the physical
//! end of the buffer.
//!
//! When an insertion would overflow the buffer, the deque grows to twice the new element count,
//! and the run is moved so that it starts a quarter of the way into the new buffer. That leaves
//! room to grow at both ends before the next resize. When removals leave the buffer less than a
//! quarter full (and the buffer is larger than 16 slots), it is halved the same way. The gap
//! between the grow point and the shrink point means that alternating pushes and pops at a
//! boundary never thrash between two sizes, so every end operation is amortized `O(1)`.
//!
//! ```
//! use twindeque::{ArrayDeque, Deque};
//!
//! let mut d = ArrayDeque::new();
//! for i in 0..9 {
//!     d.add_last(i);
//! }
//! // the ninth element did not fit in the starting buffer of 8
//! assert_eq!(d.capacity(), 18);
//! assert_eq!(d.get(8), Some(&8));
//!
//! while d.size() > 4 {
//!     d.remove_first();
//! }
//! // four out of eighteen is below a quarter, so the buffer was halved
//! assert_eq!(d.capacity(), 9);
//! assert_eq!(d, vec![5, 6, 7, 8]);
//! ```
//!
//! Absence is never an error here: removing from an empty deque, or asking for an index past the
//! end, simply yields `None`.
//!
//! [`add_first`]: ArrayDeque::add_first
//! [`add_last`]: ArrayDeque::add_last

#![no_std]
#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

#[cfg(any(test, feature = "std"))]
#[macro_use]
extern crate std;

#[cfg_attr(test, macro_use)]
extern crate alloc;

use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::iter::{repeat_with, FromIterator};
use core::ops::{Index, IndexMut};

use alloc::boxed::Box;
use alloc::vec::Vec;

mod comparator;
mod external_trait_impls;
mod iter;
pub mod linked;
mod palindrome;

pub use comparator::{CharacterComparator, OffByN, OffByOne};
pub use linked::LinkedDeque;
pub use palindrome::Palindrome;

/// Iterator types for [`ArrayDeque`].
pub mod array {
    pub use super::iter::*;

    /// Parallel iterator types for [`ArrayDeque`](crate::ArrayDeque).
    #[cfg(feature = "rayon")]
    pub mod rayon {
        pub use crate::external_trait_impls::rayon::*;
    }
}

/// Number of slots a fresh [`ArrayDeque`] starts with.
const STARTING_CAPACITY: usize = 8;
/// An [`ArrayDeque`] at or below this capacity never shrinks.
const SHRINK_FLOOR: usize = 16;
/// Shrink once fewer than `1 / USAGE_FACTOR` of the slots are in use.
const USAGE_FACTOR: usize = 4;

/// The capabilities every double-ended queue in this crate provides.
///
/// Clients should depend on this trait rather than on a particular backing, so that
/// [`ArrayDeque`] and [`LinkedDeque`] stay interchangeable.
///
/// ```
/// use twindeque::{ArrayDeque, Deque, LinkedDeque};
///
/// fn drain_back<D: Deque<u8>>(mut d: D) -> Vec<u8> {
///     let mut out = Vec::new();
///     while let Some(x) = d.remove_last() {
///         out.push(x);
///     }
///     out
/// }
///
/// let a: ArrayDeque<u8> = (1..=3).collect();
/// let l: LinkedDeque<u8> = (1..=3).collect();
/// assert_eq!(drain_back(a), drain_back(l));
/// ```
pub trait Deque<T> {
    /// Front-to-back iterator over shared references.
    type Iter<'a>: Iterator<Item = &'a T>
    where
        Self: 'a,
        T: 'a;

    /// Adds `item` to the front of the deque.
    fn add_first(&mut self, item: T);

    /// Adds `item` to the back of the deque.
    fn add_last(&mut self, item: T);

    /// Removes and returns the front element, or `None` if the deque is empty.
    fn remove_first(&mut self) -> Option<T>;

    /// Removes and returns the back element, or `None` if the deque is empty.
    fn remove_last(&mut self) -> Option<T>;

    /// Returns the element `index` positions from the front, or `None` if there is no such
    /// element. Does not alter the deque.
    fn get(&self, index: usize) -> Option<&T>;

    /// Returns the number of elements in the deque.
    fn size(&self) -> usize;

    /// Returns `true` if the deque holds no elements.
    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Returns a front-to-back iterator.
    fn iter(&self) -> Self::Iter<'_>;

    /// Writes the elements from front to back, separated by a space, followed by a newline.
    ///
    /// ```
    /// use twindeque::{Deque, LinkedDeque};
    ///
    /// let d: LinkedDeque<_> = vec!['a', 'b', 'c'].into();
    /// let mut out = String::new();
    /// d.write_deque(&mut out).unwrap();
    /// assert_eq!(out, "a b c\n");
    /// ```
    fn write_deque<W: fmt::Write>(&self, out: &mut W) -> fmt::Result
    where
        T: fmt::Display,
    {
        for (i, item) in self.iter().enumerate() {
            if i != 0 {
                out.write_char(' ')?;
            }
            write!(out, "{}", item)?;
        }
        out.write_char('\n')
    }

    /// Prints the elements from front to back to standard output, as [`write_deque`] renders
    /// them.
    ///
    /// [`write_deque`]: Deque::write_deque
    #[cfg(feature = "std")]
    fn print_deque(&self)
    where
        T: fmt::Display,
    {
        for (i, item) in self.iter().enumerate() {
            if i != 0 {
                std::print!(" ");
            }
            std::print!("{}", item);
        }
        std::println!();
    }
}

/// A double-ended queue backed by a circular, resizable array.
///
/// See the [crate-level documentation] for how growing and shrinking work.
///
/// [crate-level documentation]: index.html
pub struct ArrayDeque<T> {
    // Slots outside the live run are always `None`.
    items: Box<[Option<T>]>,
    len: usize,
    next_first: usize,
    next_last: usize,
}

fn vacant<T>(capacity: usize) -> Box<[Option<T>]> {
    repeat_with(|| None).take(capacity).collect()
}

impl<T: Clone> Clone for ArrayDeque<T> {
    fn clone(&self) -> ArrayDeque<T> {
        ArrayDeque {
            items: self.items.clone(),
            len: self.len,
            next_first: self.next_first,
            next_last: self.next_last,
        }
    }

    fn clone_from(&mut self, other: &Self) {
        self.items.clone_from(&other.items);
        self.len = other.len;
        self.next_first = other.next_first;
        self.next_last = other.next_last;
    }
}

impl<T> Default for ArrayDeque<T> {
    /// Creates an empty `ArrayDeque<T>`.
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ArrayDeque<T> {
    /// Creates an empty `ArrayDeque` with room for eight elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use twindeque::ArrayDeque;
    ///
    /// let deque: ArrayDeque<u32> = ArrayDeque::new();
    /// assert_eq!(deque.capacity(), 8);
    /// ```
    pub fn new() -> Self {
        let next_first = STARTING_CAPACITY / 2;
        Self {
            items: vacant(STARTING_CAPACITY),
            len: 0,
            next_first,
            next_last: next_first + 1,
        }
    }

    /// Creates an `ArrayDeque` holding exactly `item`.
    ///
    /// # Examples
    ///
    /// ```
    /// use twindeque::ArrayDeque;
    ///
    /// let deque = ArrayDeque::with_item("seed");
    /// assert_eq!(deque.len(), 1);
    /// assert_eq!(deque.get(0), Some(&"seed"));
    /// ```
    pub fn with_item(item: T) -> Self {
        let mut deque = Self::new();
        deque.add_first(item);
        deque
    }

    /// Returns the number of slots in the backing buffer.
    ///
    /// This is never below eight.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.items.len()
    }

    /// Returns the number of elements in the `ArrayDeque`.
    ///
    /// # Examples
    ///
    /// ```
    /// use twindeque::ArrayDeque;
    ///
    /// let mut d = ArrayDeque::new();
    /// assert_eq!(d.len(), 0);
    /// d.add_last(1);
    /// assert_eq!(d.len(), 1);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Same as [`len`](ArrayDeque::len).
    #[inline]
    pub fn size(&self) -> usize {
        self.len
    }

    /// Returns `true` if the `ArrayDeque` is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Provides a reference to the element at the given index.
    ///
    /// Element at index 0 is the front of the queue. Returns `None` if `index` is out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// use twindeque::ArrayDeque;
    ///
    /// let mut buf = ArrayDeque::new();
    /// buf.add_last(3);
    /// buf.add_last(4);
    /// buf.add_first(5);
    /// assert_eq!(buf.get(1), Some(&3));
    /// assert_eq!(buf.get(3), None);
    /// ```
    pub fn get(&self, index: usize) -> Option<&T> {
        if index < self.len {
            self.items[self.physical(index)].as_ref()
        } else {
            None
        }
    }

    /// Provides a mutable reference to the element at the given index.
    ///
    /// # Examples
    ///
    /// ```
    /// use twindeque::ArrayDeque;
    ///
    /// let mut buf: ArrayDeque<_> = vec![3, 4, 5].into();
    /// if let Some(elem) = buf.get_mut(1) {
    ///     *elem = 7;
    /// }
    /// assert_eq!(buf[1], 7);
    /// ```
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index < self.len {
            let slot = self.physical(index);
            self.items[slot].as_mut()
        } else {
            None
        }
    }

    /// Prepends an element to the `ArrayDeque`, growing the buffer first if it is full.
    ///
    /// # Examples
    ///
    /// ```
    /// use twindeque::ArrayDeque;
    ///
    /// let mut d = ArrayDeque::new();
    /// d.add_first(1);
    /// d.add_first(2);
    /// assert_eq!(d, vec![2, 1]);
    /// ```
    pub fn add_first(&mut self, item: T) {
        if self.len + 1 > self.capacity() {
            self.grow();
        }
        debug_assert!(self.items[self.next_first].is_none());
        self.items[self.next_first] = Some(item);
        self.next_first = self.backward(self.next_first);
        self.len += 1;
    }

    /// Appends an element to the `ArrayDeque`, growing the buffer first if it is full.
    ///
    /// # Examples
    ///
    /// ```
    /// use twindeque::ArrayDeque;
    ///
    /// let mut d = ArrayDeque::new();
    /// d.add_last(1);
    /// d.add_last(2);
    /// assert_eq!(d, vec![1, 2]);
    /// ```
    pub fn add_last(&mut self, item: T) {
        if self.len + 1 > self.capacity() {
            self.grow();
        }
        debug_assert!(self.items[self.next_last].is_none());
        self.items[self.next_last] = Some(item);
        self.next_last = self.forward(self.next_last);
        self.len += 1;
    }

    /// Removes the first element and returns it, or `None` if the `ArrayDeque` is empty.
    ///
    /// The buffer is halved afterwards if it has become sparse.
    ///
    /// # Examples
    ///
    /// ```
    /// use twindeque::ArrayDeque;
    ///
    /// let mut d = ArrayDeque::new();
    /// d.add_last(1);
    /// d.add_last(2);
    ///
    /// assert_eq!(d.remove_first(), Some(1));
    /// assert_eq!(d.remove_first(), Some(2));
    /// assert_eq!(d.remove_first(), None);
    /// ```
    pub fn remove_first(&mut self) -> Option<T> {
        let item = self.take_first()?;
        self.shrink_if_sparse();
        Some(item)
    }

    /// Removes the last element and returns it, or `None` if the `ArrayDeque` is empty.
    ///
    /// The buffer is halved afterwards if it has become sparse.
    ///
    /// # Examples
    ///
    /// ```
    /// use twindeque::ArrayDeque;
    ///
    /// let mut buf = ArrayDeque::new();
    /// assert_eq!(buf.remove_last(), None);
    /// buf.add_last(1);
    /// buf.add_last(3);
    /// assert_eq!(buf.remove_last(), Some(3));
    /// ```
    pub fn remove_last(&mut self) -> Option<T> {
        let item = self.take_last()?;
        self.shrink_if_sparse();
        Some(item)
    }

    /// Returns a front-to-back iterator.
    ///
    /// # Examples
    ///
    /// ```
    /// use twindeque::ArrayDeque;
    ///
    /// let mut buf = ArrayDeque::new();
    /// buf.add_last(5);
    /// buf.add_last(3);
    /// buf.add_first(4);
    /// let c: Vec<&i32> = buf.iter().collect();
    /// assert_eq!(c, [&4, &5, &3]);
    /// ```
    pub fn iter(&self) -> iter::Iter<'_, T> {
        let (head, tail) = self.live_slices();
        iter::Iter {
            head: head.iter(),
            tail: tail.iter(),
        }
    }

    /// Returns a front-to-back iterator that returns mutable references.
    ///
    /// # Examples
    ///
    /// ```
    /// use twindeque::ArrayDeque;
    ///
    /// let mut buf: ArrayDeque<_> = vec![5, 3, 4].into();
    /// for num in buf.iter_mut() {
    ///     *num -= 2;
    /// }
    /// assert_eq!(buf, vec![3, 1, 2]);
    /// ```
    pub fn iter_mut(&mut self) -> iter::IterMut<'_, T> {
        let (head, tail) = self.live_slices_mut();
        iter::IterMut {
            head: head.iter_mut(),
            tail: tail.iter_mut(),
        }
    }

    /// Returns `true` if the `ArrayDeque` contains an element equal to the given value.
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq<T>,
    {
        self.iter().any(|e| e == x)
    }

    /// The live run as at most two contiguous slot ranges, in logical order.
    pub(crate) fn live_slices(&self) -> (&[Option<T>], &[Option<T>]) {
        let first = self.forward(self.next_first);
        let capacity = self.capacity();
        if first + self.len <= capacity {
            (&self.items[first..first + self.len], &[])
        } else {
            let (wrapped, leading) = self.items.split_at(first);
            (leading, &wrapped[..first + self.len - capacity])
        }
    }

    pub(crate) fn live_slices_mut(&mut self) -> (&mut [Option<T>], &mut [Option<T>]) {
        let first = self.forward(self.next_first);
        let capacity = self.capacity();
        let len = self.len;
        if first + len <= capacity {
            (&mut self.items[first..first + len], &mut [])
        } else {
            let (wrapped, leading) = self.items.split_at_mut(first);
            (leading, &mut wrapped[..first + len - capacity])
        }
    }

    /// Removes the front element without considering a shrink.
    pub(crate) fn take_first(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let first = self.forward(self.next_first);
        let item = self.items[first].take();
        debug_assert!(item.is_some(), "vacant slot at the front of the live run");
        self.next_first = first;
        self.len -= 1;
        item
    }

    /// Removes the back element without considering a shrink.
    pub(crate) fn take_last(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let last = self.backward(self.next_last);
        let item = self.items[last].take();
        debug_assert!(item.is_some(), "vacant slot at the back of the live run");
        self.next_last = last;
        self.len -= 1;
        item
    }

    #[inline]
    fn forward(&self, slot: usize) -> usize {
        if slot + 1 == self.capacity() {
            0
        } else {
            slot + 1
        }
    }

    #[inline]
    fn backward(&self, slot: usize) -> usize {
        if slot == 0 {
            self.capacity() - 1
        } else {
            slot - 1
        }
    }

    /// Maps a logical index to its slot in `items`.
    #[inline]
    fn physical(&self, index: usize) -> usize {
        (self.next_first + 1 + index) % self.capacity()
    }
}

impl<T: Clone> ArrayDeque<T> {
    /// Creates an independent copy of `other`, with equal contents and no shared storage.
    ///
    /// This is the same as `other.clone()`.
    pub fn copy_of(other: &Self) -> Self {
        other.clone()
    }
}

impl<T> Deque<T> for ArrayDeque<T> {
    type Iter<'a> = iter::Iter<'a, T> where T: 'a;

    #[inline]
    fn add_first(&mut self, item: T) {
        ArrayDeque::add_first(self, item)
    }

    #[inline]
    fn add_last(&mut self, item: T) {
        ArrayDeque::add_last(self, item)
    }

    #[inline]
    fn remove_first(&mut self) -> Option<T> {
        ArrayDeque::remove_first(self)
    }

    #[inline]
    fn remove_last(&mut self) -> Option<T> {
        ArrayDeque::remove_last(self)
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&T> {
        ArrayDeque::get(self, index)
    }

    #[inline]
    fn size(&self) -> usize {
        self.len
    }

    #[inline]
    fn iter(&self) -> iter::Iter<'_, T> {
        ArrayDeque::iter(self)
    }
}

macro_rules! __impl_seq_eq1 {
    ($lhs:ty, $rhs:ty, $($constraints:tt)*) => {
        impl<A, B> PartialEq<$rhs> for $lhs
        where
            A: PartialEq<B>,
            $($constraints)*
        {
            fn eq(&self, other: &$rhs) -> bool {
                self.len() == other.len() && self.iter().eq(other.iter())
            }
        }
    }
}

__impl_seq_eq1! { ArrayDeque<A>, Vec<B>, }
__impl_seq_eq1! { ArrayDeque<A>, &[B], }
__impl_seq_eq1! { ArrayDeque<A>, &mut [B], }
__impl_seq_eq1! { ArrayDeque<A>, LinkedDeque<B>, }
__impl_seq_eq1! { LinkedDeque<A>, Vec<B>, }
__impl_seq_eq1! { LinkedDeque<A>, &[B], }
__impl_seq_eq1! { LinkedDeque<A>, &mut [B], }
__impl_seq_eq1! { LinkedDeque<A>, ArrayDeque<B>, }

// For symmetry:

macro_rules! __impl_seq_eq2 {
    ($lhs:ty, $rhs:ty, $($constraints:tt)*) => {
        impl<A, B> PartialEq<$lhs> for $rhs
        where
            A: PartialEq<B>,
            $($constraints)*
        {
            fn eq(&self, other: &$lhs) -> bool {
                other.len() == self.len() && other.iter().eq(self.iter())
            }
        }
    }
}

__impl_seq_eq2! { ArrayDeque<A>, Vec<B>, }
__impl_seq_eq2! { ArrayDeque<A>, &[B], }
__impl_seq_eq2! { ArrayDeque<A>, &mut [B], }
__impl_seq_eq2! { LinkedDeque<A>, Vec<B>, }
__impl_seq_eq2! { LinkedDeque<A>, &[B], }
__impl_seq_eq2! { LinkedDeque<A>, &mut [B], }

impl<A: PartialEq> PartialEq for ArrayDeque<A> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<A: Eq> Eq for ArrayDeque<A> {}

impl<A: PartialOrd> PartialOrd for ArrayDeque<A> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<A: Ord> Ord for ArrayDeque<A> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<A: Hash> Hash for ArrayDeque<A> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Only the logical contents count, not where they sit in the buffer.
        self.len.hash(state);
        self.iter().for_each(|elem| elem.hash(state));
    }
}

impl<A> Index<usize> for ArrayDeque<A> {
    type Output = A;

    #[inline]
    fn index(&self, index: usize) -> &A {
        self.get(index).expect("Out of bounds access")
    }
}

impl<A> IndexMut<usize> for ArrayDeque<A> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut A {
        self.get_mut(index).expect("Out of bounds access")
    }
}

impl<A> FromIterator<A> for ArrayDeque<A> {
    fn from_iter<T: IntoIterator<Item = A>>(iter: T) -> Self {
        let mut deq = Self::new();
        deq.extend(iter);
        deq
    }
}

impl<T> IntoIterator for ArrayDeque<T> {
    type Item = T;
    type IntoIter = iter::IntoIter<T>;

    fn into_iter(self) -> iter::IntoIter<T> {
        iter::IntoIter { deque: self }
    }
}

impl<'a, T> IntoIterator for &'a ArrayDeque<T> {
    type Item = &'a T;
    type IntoIter = iter::Iter<'a, T>;

    fn into_iter(self) -> iter::Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut ArrayDeque<T> {
    type Item = &'a mut T;
    type IntoIter = iter::IterMut<'a, T>;

    fn into_iter(self) -> iter::IterMut<'a, T> {
        self.iter_mut()
    }
}

impl<A> Extend<A> for ArrayDeque<A> {
    fn extend<T: IntoIterator<Item = A>>(&mut self, iter: T) {
        iter.into_iter().for_each(move |v| self.add_last(v));
    }
}

impl<'a, T: 'a + Copy> Extend<&'a T> for ArrayDeque<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T: fmt::Debug> fmt::Debug for ArrayDeque<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self).finish()
    }
}

impl<T> From<Vec<T>> for ArrayDeque<T> {
    fn from(other: Vec<T>) -> Self {
        other.into_iter().collect()
    }
}

impl<T> From<ArrayDeque<T>> for Vec<T> {
    fn from(other: ArrayDeque<T>) -> Self {
        let mut v = Vec::with_capacity(other.len());
        v.extend(other);
        v
    }
}

////////////////////////////////////////////////////////////////////////////////
// Resizing
////////////////////////////////////////////////////////////////////////////////

impl<T> ArrayDeque<T> {
    /// Called only when the buffer is full.
    #[cold]
    #[inline(never)]
    fn grow(&mut self) {
        debug_assert_eq!(self.len, self.capacity());
        let new_capacity = 2 * (self.len + 1);
        let offset = new_capacity / 4;
        let mut items = vacant(new_capacity);

        // A full buffer's run is [first, capacity) followed by [0, first).
        let first = self.forward(self.next_first);
        let (wrapped, leading) = self.items.split_at_mut(first);
        for (to, from) in items[offset..]
            .iter_mut()
            .zip(leading.iter_mut().chain(wrapped.iter_mut()))
        {
            *to = from.take();
        }

        self.install(items, offset);
    }

    fn shrink_if_sparse(&mut self) {
        let capacity = self.capacity();
        if capacity > SHRINK_FLOOR && self.len * USAGE_FACTOR < capacity {
            self.shrink();
        }
    }

    #[cold]
    #[inline(never)]
    fn shrink(&mut self) {
        let new_capacity = self.capacity() / 2;
        let offset = new_capacity / 4;
        debug_assert!(offset + self.len < new_capacity);
        let mut items = vacant(new_capacity);

        for i in 0..self.len {
            let from = self.physical(i);
            items[offset + i] = self.items[from].take();
        }

        self.install(items, offset);
    }

    /// Swaps in a buffer whose live run starts at `offset`.
    fn install(&mut self, items: Box<[Option<T>]>, offset: usize) {
        debug_assert!(offset >= 1 && offset + self.len < items.len());
        self.items = items;
        self.next_first = offset - 1;
        self.next_last = offset + self.len;
    }
}
