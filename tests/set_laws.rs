//! Property-based tests for the ordered set containers.
//!
//! Verifies the structural invariants (membership/order synchronization,
//! the capacity bound) and the algebra's agreement with plain hash-set
//! semantics using proptest.

use ordsets::{DoubleSidedSet, ExhaustiveSet, OrderedSet};
use proptest::prelude::*;
use std::collections::HashSet;

// =============================================================================
// Strategies for generating test data
// =============================================================================

fn arbitrary_element() -> impl Strategy<Value = i32> {
    // A narrow domain keeps duplicate and collision cases frequent.
    0..64i32
}

fn arbitrary_elements() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(arbitrary_element(), 0..50)
}

fn arbitrary_capacity() -> impl Strategy<Value = usize> {
    1..32usize
}

/// A single mutating operation, applied uniformly across the containers.
#[derive(Debug, Clone)]
enum Operation {
    Insert(i32),
    Discard(i32),
    PopBack,
}

fn arbitrary_operations() -> impl Strategy<Value = Vec<Operation>> {
    prop::collection::vec(
        prop_oneof![
            arbitrary_element().prop_map(Operation::Insert),
            arbitrary_element().prop_map(Operation::Discard),
            Just(Operation::PopBack),
        ],
        0..100,
    )
}

fn first_occurrence_order(elements: &[i32]) -> Vec<i32> {
    let mut seen = HashSet::new();
    elements
        .iter()
        .copied()
        .filter(|element| seen.insert(*element))
        .collect()
}

// =============================================================================
// Order Invariant: iteration yields each member exactly once
// =============================================================================

proptest! {
    #[test]
    fn prop_order_structure_matches_membership(elements in arbitrary_elements()) {
        let set: OrderedSet<i32> = elements.iter().copied().collect();

        let iterated: Vec<i32> = set.iter().copied().collect();
        let deduplicated: HashSet<i32> = iterated.iter().copied().collect();

        // No duplicates in the order structure, no omissions either way.
        prop_assert_eq!(iterated.len(), deduplicated.len());
        prop_assert_eq!(iterated.len(), set.len());
        for element in &iterated {
            prop_assert!(set.contains(element));
        }
    }
}

proptest! {
    #[test]
    fn prop_order_invariant_survives_operation_sequences(
        seed in arbitrary_elements(),
        operations in arbitrary_operations()
    ) {
        let mut set: DoubleSidedSet<i32> = seed.into_iter().collect();

        for operation in operations {
            match operation {
                Operation::Insert(element) => { set.push_front(element); }
                Operation::Discard(element) => { set.discard(&element); }
                Operation::PopBack => { let _ = set.pop_back(); }
            }

            let iterated: Vec<i32> = set.iter().copied().collect();
            let deduplicated: HashSet<i32> = iterated.iter().copied().collect();
            prop_assert_eq!(iterated.len(), deduplicated.len());
            prop_assert_eq!(iterated.len(), set.len());
        }
    }
}

// =============================================================================
// Construction: duplicates collapse to first-occurrence order
// =============================================================================

proptest! {
    #[test]
    fn prop_construction_preserves_first_occurrence_order(elements in arbitrary_elements()) {
        let set: OrderedSet<i32> = elements.iter().copied().collect();
        let iterated: Vec<i32> = set.iter().copied().collect();
        prop_assert_eq!(iterated, first_occurrence_order(&elements));
    }
}

// =============================================================================
// Capacity Invariant: len <= capacity after every operation
// =============================================================================

proptest! {
    #[test]
    fn prop_capacity_bound_holds_after_every_operation(
        capacity in arbitrary_capacity(),
        operations in arbitrary_operations()
    ) {
        let mut set = ExhaustiveSet::new(capacity).unwrap();

        for operation in operations {
            match operation {
                Operation::Insert(element) => { set.push_front(element); }
                Operation::Discard(element) => { set.discard(&element); }
                Operation::PopBack => { let _ = set.pop_back(); }
            }
            prop_assert!(set.len() <= set.capacity());
        }
    }
}

// =============================================================================
// Eviction FIFO: the most recent `capacity` insertions survive
// =============================================================================

proptest! {
    #[test]
    fn prop_eviction_is_fifo(capacity in arbitrary_capacity()) {
        let mut set = ExhaustiveSet::new(capacity).unwrap();
        let total = capacity as i32 + 1;
        for element in 0..total {
            set.push_front(element);
        }

        prop_assert_eq!(set.len(), capacity);
        prop_assert!(!set.contains(&0));
        // Back-to-front reads the survivors in insertion order.
        let in_insertion_order: Vec<i32> = set.iter().rev().copied().collect();
        let expected: Vec<i32> = (1..total).collect();
        prop_assert_eq!(in_insertion_order, expected);
    }
}

// =============================================================================
// Equality Law: membership decides, order does not
// =============================================================================

proptest! {
    #[test]
    fn prop_equality_ignores_order(elements in arbitrary_elements()) {
        let forward: OrderedSet<i32> = elements.iter().copied().collect();
        let backward: OrderedSet<i32> = elements.iter().rev().copied().collect();

        prop_assert_eq!(&forward, &backward);

        let std_set: HashSet<i32> = elements.iter().copied().collect();
        prop_assert_eq!(&forward, &std_set);
    }
}

// =============================================================================
// Duplicate Insertion Law: push_front on a member changes nothing
// =============================================================================

proptest! {
    #[test]
    fn prop_duplicate_push_front_is_idempotent(
        elements in arbitrary_elements(),
        element in arbitrary_element()
    ) {
        let mut set: DoubleSidedSet<i32> = elements.into_iter().collect();

        if set.contains(&element) {
            let before: Vec<i32> = set.iter().copied().collect();
            prop_assert!(!set.push_front(element));
            let after: Vec<i32> = set.iter().copied().collect();
            prop_assert_eq!(before, after);
        }
    }
}

// =============================================================================
// Algebra Laws: membership agrees with std::collections::HashSet
// =============================================================================

proptest! {
    #[test]
    fn prop_algebra_membership_agrees_with_std(
        left in arbitrary_elements(),
        right in arbitrary_elements()
    ) {
        let set: OrderedSet<i32> = left.iter().copied().collect();
        let std_left: HashSet<i32> = left.iter().copied().collect();
        let std_right: HashSet<i32> = right.iter().copied().collect();

        let union: HashSet<i32> = std_left.union(&std_right).copied().collect();
        prop_assert_eq!(set.union(right.iter().copied()), union);

        let intersection: HashSet<i32> =
            std_left.intersection(&std_right).copied().collect();
        prop_assert_eq!(set.intersection(right.iter().copied()), intersection);

        let difference: HashSet<i32> = std_left.difference(&std_right).copied().collect();
        prop_assert_eq!(set.difference(right.iter().copied()), difference);

        let symmetric: HashSet<i32> =
            std_left.symmetric_difference(&std_right).copied().collect();
        prop_assert_eq!(set.symmetric_difference(right.iter().copied()), symmetric);
    }
}

proptest! {
    #[test]
    fn prop_update_forms_match_their_pure_counterparts(
        left in arbitrary_elements(),
        right in arbitrary_elements()
    ) {
        let base: OrderedSet<i32> = left.iter().copied().collect();

        let mut updated = base.clone();
        updated.update(right.iter().copied());
        prop_assert_eq!(&updated, &base.union(right.iter().copied()));

        let mut intersected = base.clone();
        intersected.intersection_update(right.iter().copied());
        prop_assert_eq!(&intersected, &base.intersection(right.iter().copied()));

        let mut differenced = base.clone();
        differenced.difference_update(right.iter().copied());
        prop_assert_eq!(&differenced, &base.difference(right.iter().copied()));

        let mut toggled = base.clone();
        toggled.symmetric_difference_update(right.iter().copied());
        prop_assert_eq!(&toggled, &base.symmetric_difference(right.iter().copied()));
    }
}

// =============================================================================
// Round Trip Law: rebuilding from the iteration sequence compares equal
// =============================================================================

proptest! {
    #[test]
    fn prop_round_trip_for_all_three_types(
        elements in arbitrary_elements(),
        capacity in arbitrary_capacity()
    ) {
        let ordered: OrderedSet<i32> = elements.iter().copied().collect();
        let ordered_rebuilt: OrderedSet<i32> = ordered.iter().copied().collect();
        prop_assert_eq!(ordered, ordered_rebuilt);

        let double_sided: DoubleSidedSet<i32> = elements.iter().copied().collect();
        let double_sided_rebuilt: DoubleSidedSet<i32> =
            double_sided.iter().copied().collect();
        prop_assert_eq!(double_sided, double_sided_rebuilt);

        let exhaustive =
            ExhaustiveSet::from_elements(capacity, elements.iter().copied()).unwrap();
        let exhaustive_rebuilt =
            ExhaustiveSet::from_elements(capacity, exhaustive.iter().copied()).unwrap();
        prop_assert_eq!(exhaustive, exhaustive_rebuilt);
    }
}
