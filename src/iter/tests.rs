#![cfg(test)]

use std::cell::Cell;
use std::collections::{HashMap, HashSet};

use proptest::collection::vec as propvec;
use proptest::prelude::*;

use super::*;
use crate::collections::circ::RingDeque;
use crate::util::panic::assert_panics;

#[test]
fn test_construction_is_lazy() {
    let pulled = Cell::new(0);
    let iter = [1, 2, 3]
        .into_lazy()
        .inspect(|_| pulled.set(pulled.get() + 1))
        .map(|x| x * 2)
        .filter(|x| *x > 2);
    assert_eq!(pulled.get(), 0, "Chaining shouldn't pull anything.");

    let mut iter = iter.peekable();
    assert_eq!(pulled.get(), 0, "Making an iterator peekable shouldn't pull anything.");
    assert_eq!(iter.next(), Some(4));
    assert_eq!(pulled.get(), 2);
}

#[test]
fn test_done_flag() {
    let mut iter = lazy([1]);
    assert!(!iter.is_done(), "A fresh iterator isn't done.");
    assert_eq!(iter.next(), Some(1));
    assert!(!iter.is_done());
    assert_eq!(iter.next(), None);
    assert!(iter.is_done());
}

#[test]
fn test_next_chunk() {
    let mut iter = (1..=8).into_lazy();

    let chunk = iter.next_chunk(2);
    assert_eq!((chunk.items, chunk.done), (vec![1, 2], false));
    let chunk = iter.next_chunk(3);
    assert_eq!((chunk.items, chunk.done), (vec![3, 4, 5], false));
    let chunk = iter.next_chunk(4);
    assert_eq!((chunk.items, chunk.done), (vec![6, 7, 8], true), "Short chunks should be done.");
    assert!(iter.is_done());
}

#[test]
fn test_positional_access() {
    let mut iter = (0..10).into_lazy();
    assert_eq!(iter.nth(2), Some(2));
    assert_eq!(iter.advance_by(3).next(), Some(6));
    assert_eq!(iter.nth(10), None);
    assert!(iter.is_done());

    assert_eq!((0..10).into_lazy().count(), 10);
    assert_eq!((0..10).into_lazy().last(), Some(9));
    assert_eq!(Vec::<u8>::new().into_lazy().last(), None);
}

#[test]
fn test_collecting() {
    assert_eq!(lazy("abc".chars()).collect(), ['a', 'b', 'c']);

    let set = [1, 2, 2, 3].into_lazy().into_set();
    assert_eq!(set, HashSet::from([1, 2, 3]));

    let map = ["a", "bb", "a"].into_lazy().map(|s| (s, s.len())).into_map();
    assert_eq!(map, HashMap::from([("a", 1), ("bb", 2)]));

    let deque: RingDeque<_> = (1..=3).into_lazy().collect_into();
    assert_eq!(deque, RingDeque::from([1, 2, 3]));

    let mut seen = Vec::new();
    (1..=3).into_lazy().for_each(|x| seen.push(x));
    assert_eq!(seen, [1, 2, 3]);
}

#[test]
fn test_folding() {
    assert_eq!((1..=4).into_lazy().fold(String::new(), |acc, x| format!("{acc}{x}")), "1234");

    let mut calls = Vec::new();
    let product = (1..=4).into_lazy().reduce(|acc, x| {
        calls.push((acc, x));
        acc * x
    });
    assert_eq!(product, Some(24));
    assert_eq!(calls[0], (1, 2), "The first item should seed the accumulator.");
    assert_eq!(Vec::<u8>::new().into_lazy().reduce(|a, b| a + b), None);

    assert_eq!((1..=100).into_lazy().sum(), Some(5050));
    assert_eq!([0.5, 0.25].into_lazy().sum(), Some(0.75));
    assert_eq!(
        ["lazy", "-", "std"].into_lazy().map(str::to_owned).sum(),
        Some(String::from("lazy-std"))
    );
    assert_eq!(Vec::<i32>::new().into_lazy().sum(), None);
}

#[test]
fn test_searching() {
    let mut iter = (1..=10).into_lazy();
    assert_eq!(iter.find(|x| x % 4 == 0), Some(4));
    assert_eq!(iter.next(), Some(5), "Find should stop at the first match.");
    assert_eq!(iter.position(|x| x == 8), Some(2));
    assert_eq!(iter.find_index(|x| x == 100), None);

    assert!((1..=5).into_lazy().all(|x| x > 0));
    assert!(!(1..=5).into_lazy().all(|x| x < 3));
    assert!(Vec::<u8>::new().into_lazy().all(|_| false), "All should be true when empty.");
    assert!((1..=5).into_lazy().any(|x| x == 3));
    assert!(!Vec::<u8>::new().into_lazy().any(|_| true), "Any should be false when empty.");

    let mut iter = (1..=5).into_lazy();
    assert!(iter.any(|x| x == 2));
    assert_eq!(iter.next(), Some(3), "Any should stop at the first match.");
}

#[test]
fn test_extremes() {
    assert_eq!([3, 7, 1, 7].into_lazy().max(), Some(7));
    assert_eq!([3, 7, 1, 7].into_lazy().min(), Some(1));
    assert_eq!([2.5, f64::NAN, 1.5].into_lazy().min(), Some(1.5));
    assert_eq!(Vec::<u8>::new().into_lazy().max(), None);

    let first = [(1, 'a'), (1, 'b')].into_lazy().map(|(k, c)| Keyed(k, c)).max();
    assert_eq!(first.map(|Keyed(_, c)| c), Some('a'), "The first of equal maxima should win.");
}

#[derive(Debug, PartialEq)]
struct Keyed(i32, char);

impl PartialOrd for Keyed {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

#[test]
fn test_chained_stages() {
    let result = (1_usize..)
        .into_lazy()
        .step_by(2)
        .enumerate()
        .map(|(i, x)| i * x)
        .take_while(|x| *x < 50)
        .collect();
    assert_eq!(result, [0, 3, 10, 21, 36]);

    let windows = [1, 2, 3, 4].into_lazy().window(2).map(|w| w[0] + w[1]).collect();
    assert_eq!(windows, [3, 5, 7]);

    let chunks = (1..=7).into_lazy().array_chunks(3).map(|c| c.len()).collect();
    assert_eq!(chunks, [3, 3, 1]);

    let zipped = ['a', 'b', 'c'].into_lazy().zip(1..).chain([('z', 0)]).collect();
    assert_eq!(zipped, [('a', 1), ('b', 2), ('c', 3), ('z', 0)]);

    let joined = [1].into_lazy().chain_all([vec![2, 3], vec![], vec![4]]).collect();
    assert_eq!(joined, [1, 2, 3, 4]);

    let running = [1, 2, 3].into_lazy().scan(0, |sum, x| {
        *sum += x;
        *sum
    });
    assert_eq!(running.reverse().collect(), [6, 3, 1]);

    let flattened = [vec!["a", "b"], vec!["c"]].into_lazy().flat().collect();
    assert_eq!(flattened, ["a", "b", "c"]);
    let doubled = [1, 2].into_lazy().flat_map(|x| [x, x]).collect();
    assert_eq!(doubled, [1, 1, 2, 2]);

    let tree = [Nested::Atom(1), Nested::List(vec![Nested::Atom(2)])];
    let atoms = tree.into_lazy().flat_depth(1).filter(Nested::is_atom).count();
    assert_eq!(atoms, 2);

    let cycled = [1, 2].into_lazy().cycle().take(5).collect();
    assert_eq!(cycled, [1, 2, 1, 2, 1]);

    let sorted = ["pear", "fig", "apple"].into_lazy().sort().take(2).collect();
    assert_eq!(sorted, ["apple", "fig"]);
    let by_len = ["pear", "fig", "apple"].into_lazy().sort_by(|a, b| a.len().cmp(&b.len()));
    assert_eq!(by_len.collect(), ["fig", "pear", "apple"]);

    assert_panics!({
        lazy([1]).step_by(0);
    });
    assert_panics!({
        lazy([1]).window(0);
    });
    assert_panics!({
        lazy([1]).array_chunks(0);
    });
}

#[test]
fn test_take_while_peek() {
    let mut plain = [1, 2, 3, 4, 5].into_lazy().peekable();
    assert_eq!(plain.by_ref().take_while(|x| *x < 4).count(), 3);
    assert_eq!(plain.next(), Some(5), "Plain take_while should lose the failing item.");

    let mut peekable = [1, 2, 3, 4, 5].into_lazy().peekable();
    assert_eq!(peekable.take_while_peek(|x| *x < 4).collect(), [1, 2, 3]);
    assert_eq!(peekable.peek(), Some(&4), "The failing item should still be there.");
    assert_eq!(peekable.next(), Some(4));
    assert_eq!(peekable.take_while_peek(|_| true).collect(), [5]);
    assert_eq!(peekable.peek(), None);
    assert!(peekable.is_done());
}

#[test]
fn test_peek() {
    let mut iter = lazy([1, 2]).peekable();
    assert_eq!(iter.peek(), Some(&1));
    assert_eq!(iter.peek(), Some(&1), "Peeking twice shouldn't advance.");
    assert_eq!(iter.size_hint(), (2, Some(2)));
    assert_eq!(iter.next(), Some(1));
    assert_eq!(iter.next(), Some(2));
    assert_eq!(iter.peek(), None);
    assert_eq!(iter.next(), None);
}

#[test]
fn test_range() {
    assert_eq!(range(1, 5).collect::<Vec<_>>(), [1, 2, 3, 4, 5]);
    assert_eq!(range(5, 1).count(), 0);
    assert_eq!(range(0, 9).with_step(3).collect::<Vec<_>>(), [0, 3, 6, 9]);
    assert_eq!(range(0, 9).with_step(3).size_hint(), (4, Some(4)));
    assert_eq!(range_from(i64::MAX - 1).collect::<Vec<_>>(), [i64::MAX - 1, i64::MAX]);
    assert_eq!(range_from(0).with_step(usize::MAX).count(), 2, "Huge steps should clamp.");
    assert_eq!(range_from(0).with_step(usize::MAX).collect::<Vec<_>>(), [0, i64::MAX]);
    assert_eq!(range_from(i64::MAX - 1).size_hint(), (2, Some(2)), "Overflow ends the range.");
    assert_eq!(range(3, 2).size_hint(), (0, Some(0)));

    let near_max = parse_range("9223372036854775806..").expect("Notation should be valid.");
    assert_eq!(near_max.into_lazy().collect(), [i64::MAX - 1, i64::MAX]);
    let deque: RingDeque<_> = range_from(i64::MAX).collect();
    assert_eq!(deque, RingDeque::from([i64::MAX]));
    assert_panics!({
        range(0, 1).with_step(0);
    });
}

#[test]
fn test_range_notation() {
    let collect = |notation: &str| parse_range(notation).map(|range| range.collect::<Vec<_>>());

    assert_eq!(collect("1..5"), Ok(vec![1, 2, 3, 4]));
    assert_eq!(collect("1..=5"), Ok(vec![1, 2, 3, 4, 5]));
    assert_eq!(collect("..5"), Ok(vec![0, 1, 2, 3, 4]));
    assert_eq!(collect("3..3"), Ok(vec![]));
    assert_eq!(collect("0..0"), Ok(vec![]));

    let unbounded: Range = "..".parse().expect("Notation should be valid.");
    assert_eq!(unbounded.end(), None);
    assert_eq!(unbounded.take(4).collect::<Vec<_>>(), [0, 1, 2, 3]);
    assert_eq!(parse_range("7..").map(|r| r.end()), Ok(None));

    assert!(parse_range("1-5").is_err_and(|e| e.is_missing_separator()));
    assert!(parse_range("-1..5").is_err_and(|e| e.is_invalid_bound()));
    assert!(parse_range("1..+5").is_err_and(|e| e.is_invalid_bound()));
    assert!(parse_range("1...5").is_err_and(|e| e.is_invalid_bound()));
    assert!(parse_range("99999999999999999999..").is_err_and(|e| e.is_bound_overflow()));
    assert_eq!(
        parse_range("a..b").map_err(|e| e.to_string()),
        Err(String::from("Range bound \"a\" must be made of decimal digits only!"))
    );
}

#[test]
fn test_deque_lazy() {
    let mut deque = RingDeque::with_cap(2);
    deque.push(2);
    deque.push(3);
    deque.unshift(1);
    assert_eq!(deque.lazy().copied().collect::<Vec<_>>(), [1, 2, 3]);
    assert_eq!(deque.lazy().map(|x| x * 2).sum(), Some(12));
    assert_eq!(deque.into_lazy().reverse().collect(), [3, 2, 1]);
}

proptest! {
    #[test]
    fn pipeline_matches_std(
        items in propvec(any::<i16>(), ..64),
        n in 0_usize..70,
        step in 1_usize..5,
    ) {
        let ours = items.clone()
            .into_lazy()
            .filter(|x| x % 3 != 0)
            .map(i32::from)
            .step_by(step)
            .enumerate()
            .take(n)
            .collect();
        let reference: Vec<_> = items.iter()
            .filter(|x| *x % 3 != 0)
            .map(|x| i32::from(*x))
            .step_by(step)
            .enumerate()
            .take(n)
            .collect();
        prop_assert_eq!(ours, reference);
    }

    #[test]
    fn sort_matches_std(items in propvec(any::<u8>(), ..64)) {
        let mut reference = items.clone();
        reference.sort_unstable();
        prop_assert_eq!(items.into_lazy().sort().collect(), reference);
    }

    #[test]
    fn window_and_chunks_match_std(items in propvec(any::<u8>(), ..64), size in 1_usize..8) {
        let windows = items.clone().into_lazy().window(size).collect();
        let reference: Vec<_> = items.windows(size).map(<[u8]>::to_vec).collect();
        prop_assert_eq!(windows, reference);

        let chunks = items.clone().into_lazy().array_chunks(size).collect();
        let reference: Vec<_> = items.chunks(size).map(<[u8]>::to_vec).collect();
        prop_assert_eq!(chunks, reference);
    }
}
