//! Integration tests for `ExhaustiveSet`.
//!
//! Pins the capacity invariant, the FIFO eviction policy, and the
//! construction truncation rule.

use ordsets::{ExhaustiveSet, SetError};
use rstest::rstest;

fn collect<T: Clone + Eq + std::hash::Hash>(set: &ExhaustiveSet<T>) -> Vec<T> {
    set.iter().cloned().collect()
}

#[rstest]
fn push_front_evicts_the_oldest_element() {
    let mut set = ExhaustiveSet::from_elements(3, ['x', 'y', 'z']).unwrap();
    set.push_front('w');
    assert_eq!(collect(&set), vec!['w', 'x', 'y']); // 'z' evicted
}

#[rstest]
fn inserting_capacity_plus_one_distinct_elements_keeps_the_last_capacity() {
    let capacity = 4;
    let mut set = ExhaustiveSet::new(capacity).unwrap();
    for element in 0..=capacity as i32 {
        set.push_front(element);
    }

    assert_eq!(set.len(), capacity);
    assert!(!set.contains(&0)); // the first insertion was evicted
    // Back to front reads the surviving insertions in insertion order.
    let in_insertion_order: Vec<i32> = set.iter().rev().copied().collect();
    assert_eq!(in_insertion_order, vec![1, 2, 3, 4]);
}

#[rstest]
#[case::small(1)]
#[case::medium(10)]
#[case::large(1000)]
fn capacity_invariant_holds_after_every_insertion(#[case] capacity: usize) {
    let mut set = ExhaustiveSet::new(capacity).unwrap();
    for element in 0..(capacity as i64 * 3) {
        set.push_front(element);
        assert!(set.len() <= set.capacity());
    }
    assert_eq!(set.len(), capacity);
}

#[rstest]
fn zero_capacity_construction_fails() {
    assert_eq!(
        ExhaustiveSet::<i32>::new(0).unwrap_err(),
        SetError::InvalidCapacity(0)
    );
    assert_eq!(
        ExhaustiveSet::from_elements(0, [1, 2]).unwrap_err(),
        SetError::InvalidCapacity(0)
    );
}

#[rstest]
fn oversized_initial_iterable_is_truncated_from_the_back() {
    let set = ExhaustiveSet::from_elements(3, 0..10).unwrap();
    assert_eq!(set.len(), 3);
    assert_eq!(collect(&set), vec![0, 1, 2]);
}

#[rstest]
fn duplicate_insertions_do_not_trigger_eviction() {
    let mut set = ExhaustiveSet::from_elements(2, [1, 2]).unwrap();
    for _ in 0..10 {
        assert!(!set.push_front(1));
    }
    assert_eq!(collect(&set), vec![1, 2]);
}

#[rstest]
fn eviction_hand_back_matches_the_displaced_element() {
    let mut set = ExhaustiveSet::from_elements(2, [10, 20]).unwrap();

    let (inserted, evicted) = set.push_front_with_eviction(30);
    assert!(inserted);
    assert_eq!(evicted, Some(20));

    // Under capacity again after a manual removal: no eviction.
    set.discard(&10);
    assert_eq!(set.push_front_with_eviction(40), (true, None));
}

#[rstest]
fn removal_operations_behave_as_double_sided_set() {
    let mut set = ExhaustiveSet::from_elements(5, [1, 2, 3]).unwrap();
    assert_eq!(set.remove(&2), Ok(2));
    assert_eq!(set.remove(&2), Err(SetError::NotFound));
    assert!(set.discard(&1));
    assert_eq!(set.pop_back(), Ok(3));
    assert_eq!(set.pop_back(), Err(SetError::Empty));
}

#[rstest]
fn round_trip_construction_from_iteration_sequence() {
    let original = ExhaustiveSet::from_elements(4, [9, 7, 8]).unwrap();
    let rebuilt = ExhaustiveSet::from_elements(4, original.iter().copied()).unwrap();
    assert_eq!(original, rebuilt);
}

#[rstest]
fn algebra_results_stay_within_the_inherited_capacity() {
    let set = ExhaustiveSet::from_elements(3, [1, 2, 3]).unwrap();
    let union = set.union([4, 5, 6]);

    assert_eq!(union.capacity(), 3);
    assert!(union.len() <= union.capacity());
}

#[rstest]
fn long_stream_deduplication_scenario() {
    // Bounded dedup over a stream that repeats itself: repeats are no-ops,
    // so only the newest distinct identifiers stay members.
    let mut seen = ExhaustiveSet::new(10).unwrap();
    let mut accepted = 0;
    for element in (0..100).chain(90..100) {
        if seen.push_front(element) {
            accepted += 1;
        }
    }
    assert_eq!(accepted, 100);
    assert_eq!(seen.len(), 10);
    assert!(seen.contains(&99));
    assert!(!seen.contains(&89));
}
