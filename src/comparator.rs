/// A rule deciding whether two characters count as equal.
///
/// Any `Fn(char, char) -> bool` closure is a comparator, so exact equality is just
/// `|x, y| x == y`.
pub trait CharacterComparator {
    /// Returns `true` if `x` and `y` are equal under this rule.
    fn equal_chars(&self, x: char, y: char) -> bool;
}

impl<F> CharacterComparator for F
where
    F: Fn(char, char) -> bool,
{
    #[inline]
    fn equal_chars(&self, x: char, y: char) -> bool {
        self(x, y)
    }
}

/// Treats two characters as equal when their code points are exactly `n` apart.
///
/// ```
/// use twindeque::{CharacterComparator, OffByN};
///
/// let off_by_five = OffByN::new(5);
/// assert!(off_by_five.equal_chars('a', 'f'));
/// assert!(off_by_five.equal_chars('f', 'a'));
/// assert!(!off_by_five.equal_chars('f', 'g'));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct OffByN {
    n: u32,
}

impl OffByN {
    /// Creates a comparator for characters `n` code points apart.
    pub const fn new(n: u32) -> Self {
        Self { n }
    }

    /// The distance this comparator accepts.
    pub const fn distance(&self) -> u32 {
        self.n
    }
}

impl CharacterComparator for OffByN {
    #[inline]
    fn equal_chars(&self, x: char, y: char) -> bool {
        distance(x, y) == self.n
    }
}

/// Treats two characters as equal when they are neighbours, like `'a'` and `'b'`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct OffByOne;

impl CharacterComparator for OffByOne {
    #[inline]
    fn equal_chars(&self, x: char, y: char) -> bool {
        distance(x, y) == 1
    }
}

#[inline]
fn distance(x: char, y: char) -> u32 {
    let (x, y) = (u32::from(x), u32::from(y));
    if x > y {
        x - y
    } else {
        y - x
    }
}
