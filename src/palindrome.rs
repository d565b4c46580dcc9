use core::fmt;
use core::marker::PhantomData;

use crate::{CharacterComparator, Deque, LinkedDeque};

/// Checks words for (generalized) palindromes using only the [`Deque`] interface.
///
/// The backing deque is a type parameter; it defaults to [`LinkedDeque`].
///
/// ```
/// use twindeque::{ArrayDeque, OffByN, Palindrome};
///
/// let palindrome = Palindrome::new();
/// assert!(palindrome.is_palindrome("racecar"));
/// assert!(!palindrome.is_palindrome("lecture"));
///
/// // any backing works the same
/// let on_array = Palindrome::<ArrayDeque<char>>::default();
/// assert!(on_array.is_palindrome_by("cdafih", &OffByN::new(5)));
/// ```
pub struct Palindrome<D = LinkedDeque<char>> {
    marker: PhantomData<fn() -> D>,
}

impl Palindrome {
    /// Creates a checker backed by a [`LinkedDeque`].
    pub fn new() -> Self {
        Self::default()
    }
}

impl<D> Default for Palindrome<D> {
    fn default() -> Self {
        Self {
            marker: PhantomData,
        }
    }
}

impl<D> Clone for Palindrome<D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<D> Copy for Palindrome<D> {}

impl<D> fmt::Debug for Palindrome<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Palindrome").finish()
    }
}

impl<D> Palindrome<D>
where
    D: Deque<char> + Default,
{
    /// Builds a deque holding the characters of `word`, front to back.
    ///
    /// ```
    /// use twindeque::Palindrome;
    ///
    /// let mut d = Palindrome::new().word_to_deque("abc");
    /// assert_eq!(d.remove_first(), Some('a'));
    /// assert_eq!(d.remove_last(), Some('c'));
    /// ```
    pub fn word_to_deque(&self, word: &str) -> D {
        let mut deque = D::default();
        for c in word.chars() {
            deque.add_last(c);
        }
        deque
    }

    /// Returns `true` if `word` reads the same forwards and backwards.
    ///
    /// Words of length 0 or 1 are palindromes.
    pub fn is_palindrome(&self, word: &str) -> bool {
        self.is_palindrome_by(word, &|x: char, y: char| x == y)
    }

    /// Returns `true` if every pair of characters mirrored around the middle of `word` is equal
    /// according to `cc`.
    ///
    /// The middle character of an odd-length word is not compared with anything.
    ///
    /// ```
    /// use twindeque::{OffByOne, Palindrome};
    ///
    /// let palindrome = Palindrome::new();
    /// assert!(palindrome.is_palindrome_by("flake", &OffByOne));
    /// ```
    pub fn is_palindrome_by<C>(&self, word: &str, cc: &C) -> bool
    where
        C: CharacterComparator + ?Sized,
    {
        let mut deque = self.word_to_deque(word);
        while deque.size() > 1 {
            match (deque.remove_first(), deque.remove_last()) {
                (Some(x), Some(y)) if cc.equal_chars(x, y) => {}
                _ => return false,
            }
        }
        true
    }
}

#[cfg(test)]
#[cfg(not(tarpaulin_include))] // don't count for coverage
mod tests {
    use super::Palindrome;
    use crate::{ArrayDeque, CharacterComparator, OffByN};
    use std::string::String;

    #[test]
    fn test_word_to_deque_keeps_order() {
        let mut d = Palindrome::new().word_to_deque("persiflage");
        let mut actual = String::new();
        while let Some(c) = d.remove_first() {
            actual.push(c);
        }
        assert_eq!(actual, "persiflage");
    }

    #[test]
    fn test_dyn_comparator() {
        let off_by_five: &dyn CharacterComparator = &OffByN::new(5);
        let on_array = Palindrome::<ArrayDeque<char>>::default();
        assert!(on_array.is_palindrome_by("cdafih", off_by_five));
        assert!(!on_array.is_palindrome_by("car", off_by_five));
    }

    #[test]
    fn test_long_word() {
        let half: String = (0..500).map(|i| (b'a' + (i % 26) as u8) as char).collect();
        let word: String = half.chars().chain(half.chars().rev()).collect();
        let on_array = Palindrome::<ArrayDeque<char>>::default();
        assert!(on_array.is_palindrome(&word));
        assert!(Palindrome::new().is_palindrome(&word));

        let mut broken = word.clone();
        broken.push('!');
        assert!(!on_array.is_palindrome(&broken));
        assert_eq!(on_array.word_to_deque(&broken).size(), 1001);
    }
}
