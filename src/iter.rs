use core::fmt;
use core::iter::FusedIterator;
use core::slice;

use crate::ArrayDeque;

/// Unwraps a slot inside the live run, which is never vacant.
#[inline]
pub(crate) fn occupied<T>(slot: &Option<T>) -> &T {
    match slot {
        Some(item) => item,
        None => unreachable!("vacant slot inside the live run"),
    }
}

#[inline]
pub(crate) fn occupied_mut<T>(slot: &mut Option<T>) -> &mut T {
    match slot {
        Some(item) => item,
        None => unreachable!("vacant slot inside the live run"),
    }
}

/// An iterator over the elements of an `ArrayDeque`.
///
/// This `struct` is created by the [`iter`] method on [`ArrayDeque`]. See its
/// documentation for more.
///
/// [`iter`]: crate::ArrayDeque::iter
/// [`ArrayDeque`]: crate::ArrayDeque
pub struct Iter<'a, T> {
    // `head` runs up to the physical end of the buffer, `tail` continues from slot 0.
    pub(super) head: slice::Iter<'a, Option<T>>,
    pub(super) tail: slice::Iter<'a, Option<T>>,
}

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Self {
            head: self.head.clone(),
            tail: self.tail.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

macro_rules! _impl {
    (fw, $occupied:path) => {
        #[inline]
        fn next(&mut self) -> Option<Self::Item> {
            let tail = &mut self.tail;
            self.head.next().or_else(|| tail.next()).map($occupied)
        }

        #[inline]
        fn size_hint(&self) -> (usize, Option<usize>) {
            let len = self.head.len() + self.tail.len();
            (len, Some(len))
        }

        fn fold<Acc, F>(self, accum: Acc, mut f: F) -> Acc
        where
            F: FnMut(Acc, Self::Item) -> Acc,
        {
            let accum = self.head.map($occupied).fold(accum, &mut f);
            self.tail.map($occupied).fold(accum, f)
        }

        fn nth(&mut self, n: usize) -> Option<Self::Item> {
            let head_ln = self.head.len();
            if n < head_ln {
                self.head.nth(n).map($occupied)
            } else {
                // exhaust the head so that later calls start in the tail
                let _ = self.head.nth(head_ln);
                self.tail.nth(n - head_ln).map($occupied)
            }
        }

        #[inline]
        fn last(mut self) -> Option<Self::Item> {
            self.next_back()
        }
    };

    (bw, $occupied:path) => {
        #[inline]
        fn next_back(&mut self) -> Option<Self::Item> {
            let head = &mut self.head;
            self.tail
                .next_back()
                .or_else(|| head.next_back())
                .map($occupied)
        }

        fn rfold<Acc, F>(self, accum: Acc, mut f: F) -> Acc
        where
            F: FnMut(Acc, Self::Item) -> Acc,
        {
            let accum = self.tail.rev().map($occupied).fold(accum, &mut f);
            self.head.rev().map($occupied).fold(accum, f)
        }
    };
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    _impl!(fw, occupied);
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    _impl!(bw, occupied);
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// A mutable iterator over the elements of an `ArrayDeque`.
///
/// This `struct` is created by the [`iter_mut`] method on [`ArrayDeque`]. See its
/// documentation for more.
///
/// [`iter_mut`]: crate::ArrayDeque::iter_mut
/// [`ArrayDeque`]: crate::ArrayDeque
pub struct IterMut<'a, T> {
    pub(super) head: slice::IterMut<'a, Option<T>>,
    pub(super) tail: slice::IterMut<'a, Option<T>>,
}

impl<T: fmt::Debug> fmt::Debug for IterMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let remaining = self.head.as_slice().iter().chain(self.tail.as_slice());
        f.debug_list().entries(remaining.map(occupied)).finish()
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    _impl!(fw, occupied_mut);
}

impl<'a, T> DoubleEndedIterator for IterMut<'a, T> {
    _impl!(bw, occupied_mut);
}

impl<'a, T> ExactSizeIterator for IterMut<'a, T> {}

impl<T> FusedIterator for IterMut<'_, T> {}

/// An owning iterator over the elements of an `ArrayDeque`.
///
/// This `struct` is created by the [`into_iter`] method on [`ArrayDeque`]
/// (provided by the `IntoIterator` trait). See its documentation for more.
///
/// [`into_iter`]: crate::ArrayDeque::into_iter
/// [`ArrayDeque`]: crate::ArrayDeque
#[derive(Clone, Debug)]
pub struct IntoIter<T> {
    pub(super) deque: ArrayDeque<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    // The buffer is about to be dropped anyway, so never shrink it.
    #[inline]
    fn next(&mut self) -> Option<T> {
        self.deque.take_first()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.deque.len();
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.deque.take_last()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}
