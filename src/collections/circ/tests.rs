#![cfg(test)]

use std::collections::VecDeque;

use proptest::collection::vec as propvec;
use proptest::prelude::*;
use proptest::test_runner::TestCaseResult;

use super::*;
use crate::util::alloc::{CountedDrop, ZeroSizedType};
use crate::util::panic::assert_panics;

#[test]
fn test_from_sequence() {
    let deque = RingDeque::from([1, 2, 3]);
    assert_eq!(&*deque.buffer, &[Some(1), Some(2), Some(3)], "Buffer should hold the sequence as-is.");
    assert_eq!((deque.head, deque.tail, deque.len, deque.cap()), (0, 0, 3, 3));
    assert_eq!(deque.first(), Some(&1));
    assert_eq!(deque.last(), Some(&3));

    let empty: RingDeque<u8> = RingDeque::from_iter([]);
    assert_eq!(empty.cap(), 1, "Capacity should never be 0.");
    assert!(empty.is_empty());
}

#[test]
fn test_from_fn() {
    let deque = RingDeque::from_fn(5, |i| i * 2);
    assert_eq!(deque.iter().copied().collect::<Vec<_>>(), [0, 2, 4, 6, 8]);
    assert_eq!(deque.cap(), 5);

    let mut calls = Vec::new();
    let _ = RingDeque::from_fn(3, |i| calls.push(i));
    assert_eq!(calls, [0, 1, 2], "Generator should be called once per index, in order.");
}

#[test]
fn test_push_and_pop() {
    let mut deque = RingDeque::with_cap(3);
    deque.push(4);
    assert_eq!(&*deque.buffer, &[Some(4), None, None]);
    assert_eq!(deque.first(), Some(&4));
    assert_eq!(deque.last(), Some(&4));

    let mut deque = RingDeque::from([1, 2, 3]);
    assert_eq!(deque.pop(), Some(3));
    assert_eq!(&*deque.buffer, &[Some(1), Some(2), None], "Popped slot should be cleared.");
    assert_eq!(deque.first(), Some(&1));
    assert_eq!(deque.last(), Some(&2));
}

#[test]
fn test_unshift_and_shift() {
    let mut deque = RingDeque::with_cap(3);
    deque.unshift(4);
    assert_eq!(&*deque.buffer, &[None, None, Some(4)], "Unshift should wrap head to the end.");
    assert_eq!(deque.first(), Some(&4));
    assert_eq!(deque.last(), Some(&4));

    deque.unshift(5);
    assert_eq!(deque.shift(), Some(5));
    assert_eq!(deque.shift(), Some(4));
    assert_eq!(deque.shift(), None);
    assert!(deque.is_empty());
}

#[test]
fn test_empty_removal() {
    let mut deque: RingDeque<u8> = RingDeque::new();
    assert_eq!(deque.pop(), None);
    assert_eq!(deque.shift(), None);
    assert_eq!((deque.head, deque.tail, deque.len), (0, 0, 0), "Empty removals shouldn't move anything.");
    assert_eq!(deque.first(), None);
    assert_eq!(deque.last(), None);
}

#[test]
fn test_grow_relocation() {
    let mut deque = RingDeque::with_cap(3);
    deque.push(1);
    deque.push(2);
    deque.push(3);
    assert_eq!(deque.shift(), Some(1));
    deque.push(4);

    assert_eq!(&*deque.buffer, &[Some(4), Some(2), Some(3)]);
    assert_eq!((deque.head, deque.tail), (1, 1), "A full deque should have tail == head.");

    deque.push(5);
    assert_eq!(deque.cap(), 6, "Capacity should double.");
    assert_eq!(deque.head, 1, "Growing shouldn't move head.");
    assert_eq!(
        &*deque.buffer,
        &[None, Some(2), Some(3), Some(4), Some(5), None],
        "Wrapped elements should be moved directly after the old end."
    );
    assert_eq!(deque.iter().copied().collect::<Vec<_>>(), [2, 3, 4, 5]);
}

#[test]
fn test_grow_unwrapped() {
    let mut deque = RingDeque::from([1, 2]);
    deque.push(3);
    assert_eq!(&*deque.buffer, &[Some(1), Some(2), Some(3), None]);
    assert_eq!((deque.head, deque.tail, deque.cap()), (0, 3, 4));

    let mut deque = RingDeque::from([1, 2]);
    deque.unshift(0);
    assert_eq!(deque.iter().copied().collect::<Vec<_>>(), [0, 1, 2]);
    assert_eq!((deque.head, deque.tail), (3, 2));
}

#[test]
fn test_indexing() {
    let mut deque = RingDeque::with_cap(4);
    deque.extend([2, 3]);
    deque.unshift(1);

    assert_eq!(deque.get(0), Some(&1));
    assert_eq!(deque.get(2), Some(&3));
    assert_eq!(deque.get(3), None, "The slot just past the end shouldn't be readable.");

    assert_eq!(deque.at(-1), Some(&3));
    assert_eq!(deque.at(-3), Some(&1));
    assert_eq!(deque.at(-4), None);
    assert_eq!(deque.at(3), None);

    assert_eq!(deque.set(1, 20), Ok(2));
    assert_eq!(deque.set(3, 40), Err(IndexOutOfBounds { index: 3, len: 3 }));
    assert_eq!(deque[1], 20);

    deque[0] = 10;
    assert_eq!(deque.first(), Some(&10));
    *deque.last_mut().unwrap() = 30;
    assert_eq!(deque.iter().copied().collect::<Vec<_>>(), [10, 20, 30]);

    assert_panics!({
        let deque = RingDeque::from([1]);
        let _value: i32 = deque[1];
    });
}

#[test]
fn test_iterators() {
    let mut deque = RingDeque::with_cap(4);
    deque.extend([3, 4]);
    deque.unshift(2);
    deque.unshift(1);

    let mut iter = deque.iter();
    assert_eq!(iter.len(), 4);
    assert_eq!(iter.next(), Some(&1));
    assert_eq!(iter.next_back(), Some(&4));
    assert_eq!(iter.next(), Some(&2));
    assert_eq!(iter.next_back(), Some(&3));
    assert_eq!(iter.next(), None);

    assert!(deque.contains(&3));
    assert!(!deque.contains(&5));

    let mut iter = deque.clone().into_iter();
    assert_eq!(iter.next_back(), Some(4));
    assert_eq!(iter.collect::<Vec<_>>(), [1, 2, 3]);

    assert_eq!(deque.lazy().map(|x| x * 10).collect(), [10, 20, 30, 40]);
}

#[test]
fn test_equality_and_format() {
    let mut wrapped = RingDeque::with_cap(3);
    wrapped.extend([0, 1, 2]);
    wrapped.shift();
    wrapped.push(3);

    assert_eq!(wrapped, RingDeque::from([1, 2, 3]), "Layout shouldn't affect equality.");
    assert_eq!(format!("{wrapped}"), "[1, 2, 3]");
    assert_eq!(
        format!("{wrapped:?}"),
        "RingDeque { contents: [1, 2, 3], head: 1, tail: 1, len: 3, cap: 3 }"
    );
}

#[test]
fn test_clear() {
    let mut deque = RingDeque::from([1, 2, 3]);
    deque.clear();
    assert!(deque.is_empty());
    assert_eq!(deque.cap(), 3, "Clearing shouldn't shrink.");
    assert!(deque.buffer.iter().all(Option::is_none));
}

#[test]
fn test_drop() {
    let counter = CountedDrop::new();
    let mut deque = RingDeque::new();
    for _ in 0..10 {
        deque.push(counter.clone());
    }
    drop(deque.shift());
    assert_eq!(counter.dropped(), 1);

    drop(deque);
    assert_eq!(counter.dropped(), 10, "All remaining elements should be dropped with the deque.");
}

#[test]
fn test_zst_support() {
    let mut deque = RingDeque::new();
    for _ in 0..10 {
        deque.push(ZeroSizedType);
    }
    assert_eq!(deque.len(), 10);
    assert_eq!(deque.pop(), Some(ZeroSizedType));
    assert_eq!(deque.iter().count(), 9);
}

#[derive(Debug, Clone)]
enum Op {
    Push(i32),
    Pop,
    Unshift(i32),
    Shift,
}

fn check_against_reference(ops: Vec<Op>, cap: usize) -> TestCaseResult {
    let mut deque = RingDeque::with_cap(cap);
    let mut reference = VecDeque::new();

    for op in ops {
        match op {
            Op::Push(value) => {
                deque.push(value);
                reference.push_back(value);
            },
            Op::Pop => prop_assert_eq!(deque.pop(), reference.pop_back()),
            Op::Unshift(value) => {
                deque.unshift(value);
                reference.push_front(value);
            },
            Op::Shift => prop_assert_eq!(deque.shift(), reference.pop_front()),
        }

        prop_assert_eq!(deque.len(), reference.len());
        prop_assert!(deque.head < deque.cap() && deque.tail < deque.cap());
        prop_assert_eq!(deque.tail, (deque.head + deque.len()) % deque.cap());
        prop_assert!(deque.iter().eq(reference.iter()), "{} != {:?}", deque, reference);
    }

    Ok(())
}

proptest! {
    #[test]
    fn queue_matches_reference(
        ops in propvec(prop_oneof![any::<i32>().prop_map(Op::Push), Just(Op::Shift)], ..200),
        cap in 1_usize..5,
    ) {
        check_against_reference(ops, cap)?;
    }

    #[test]
    fn stack_matches_reference(
        ops in propvec(prop_oneof![any::<i32>().prop_map(Op::Push), Just(Op::Pop)], ..200),
        cap in 1_usize..5,
    ) {
        check_against_reference(ops, cap)?;
    }

    #[test]
    fn deque_matches_reference(
        ops in propvec(
            prop_oneof![
                any::<i32>().prop_map(Op::Push),
                Just(Op::Pop),
                any::<i32>().prop_map(Op::Unshift),
                Just(Op::Shift),
            ],
            ..200,
        ),
        cap in 1_usize..5,
    ) {
        check_against_reference(ops, cap)?;
    }
}
