use twindeque::{ArrayDeque, CharacterComparator, Deque, LinkedDeque, OffByN, OffByOne, Palindrome};

fn drain_front<D: Deque<char>>(mut d: D) -> String {
    let mut actual = String::new();
    while let Some(c) = d.remove_first() {
        actual.push(c);
    }
    actual
}

fn check_exact<D: Deque<char> + Default>(palindrome: Palindrome<D>) {
    assert!(palindrome.is_palindrome("racecar"));
    assert!(palindrome.is_palindrome("noon"));
    assert!(palindrome.is_palindrome(""));
    assert!(palindrome.is_palindrome("i"));
    assert!(!palindrome.is_palindrome("lecture"));
    assert!(!palindrome.is_palindrome("ab"));
    // exact matching is case sensitive
    assert!(!palindrome.is_palindrome("Racecar"));
}

fn check_comparators<D: Deque<char> + Default>(palindrome: Palindrome<D>) {
    assert!(palindrome.is_palindrome_by("flake", &OffByOne));
    assert!(!palindrome.is_palindrome_by("lecture", &OffByOne));
    assert!(palindrome.is_palindrome_by("", &OffByOne));
    assert!(palindrome.is_palindrome_by("&", &OffByOne));
    // 'a' and 'a' are not off by one, and odd words skip the middle
    assert!(!palindrome.is_palindrome_by("aa", &OffByOne));
    assert!(palindrome.is_palindrome_by("abb", &OffByOne));
    assert!(!palindrome.is_palindrome_by("racecar", &OffByOne));

    let off_by_five = OffByN::new(5);
    assert!(palindrome.is_palindrome_by("cdafih", &off_by_five));
    assert!(!palindrome.is_palindrome_by("car", &off_by_five));
    assert!(palindrome.is_palindrome_by("z", &off_by_five));
}

#[test]
fn word_to_deque_round_trip() {
    let on_list = Palindrome::new();
    assert_eq!(drain_front(on_list.word_to_deque("persiflage")), "persiflage");

    let on_array = Palindrome::<ArrayDeque<char>>::default();
    let d = on_array.word_to_deque("persiflage");
    assert_eq!(d.size(), 10);
    assert_eq!(drain_front(d), "persiflage");

    assert!(on_list.word_to_deque("").is_empty());
}

#[test]
fn exact_on_linked() {
    check_exact(Palindrome::<LinkedDeque<char>>::default());
}

#[test]
fn exact_on_array() {
    check_exact(Palindrome::<ArrayDeque<char>>::default());
}

#[test]
fn comparators_on_linked() {
    check_comparators(Palindrome::new());
}

#[test]
fn comparators_on_array() {
    check_comparators(Palindrome::<ArrayDeque<char>>::default());
}

#[test]
fn closure_comparator() {
    let ignore_case = |x: char, y: char| x.eq_ignore_ascii_case(&y);
    let palindrome = Palindrome::new();
    assert!(palindrome.is_palindrome_by("Racecar", &ignore_case));
    assert!(!palindrome.is_palindrome_by("Racecars", &ignore_case));
    assert!(ignore_case.equal_chars('Q', 'q'));
}
