//! Shared membership + order engine backing the public containers.
//!
//! [`OrderCore`] pairs a hash set (the membership structure) with a
//! `VecDeque` (the order structure). The public containers differ only in
//! which end they insert at and how they bound their length, so the
//! uniqueness bookkeeping and the set-algebra scans live here exactly once.
//!
//! Invariant: the order structure holds every member exactly once, with
//! no duplicates and no orphans. Mutating methods debug-assert this on exit.

use std::borrow::Borrow;
use std::collections::HashSet;
use std::collections::VecDeque;
use std::collections::vec_deque;
use std::hash::Hash;

use super::DefaultHashBuilder;

/// Message for the membership/order synchronization debug assertion.
const SYNC_INVARIANT_PANIC_MESSAGE: &str =
    "membership and order structures fell out of sync (duplicate or orphaned element)";

/// Membership structure + order structure, kept in exact correspondence.
///
/// Elements are stored twice, once per structure, hence the `T: Clone`
/// bound carried by every container in this crate.
#[derive(Clone)]
pub(crate) struct OrderCore<T: Clone + Eq + Hash> {
    membership: HashSet<T, DefaultHashBuilder>,
    order: VecDeque<T>,
}

impl<T: Clone + Eq + Hash> OrderCore<T> {
    pub(crate) fn new() -> Self {
        Self {
            membership: HashSet::default(),
            order: VecDeque::new(),
        }
    }

    /// Builds a core from an iterator, collapsing duplicates and preserving
    /// first-occurrence order.
    pub(crate) fn from_iter_back<I: IntoIterator<Item = T>>(elements: I) -> Self {
        let mut core = Self::new();
        for element in elements {
            core.push_back(element);
        }
        core
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.membership.len()
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.membership.is_empty()
    }

    #[inline]
    pub(crate) fn contains<Q>(&self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.membership.contains(element)
    }

    /// Appends to the back of the order structure.
    ///
    /// Returns `true` if the element was newly inserted, `false` if it was
    /// already a member (in which case nothing changes).
    pub(crate) fn push_back(&mut self, element: T) -> bool {
        if self.membership.contains(&element) {
            return false;
        }
        self.membership.insert(element.clone());
        self.order.push_back(element);
        self.debug_assert_consistent();
        true
    }

    /// Prepends to the front of the order structure.
    ///
    /// Same uniqueness rule as [`push_back`](Self::push_back): a duplicate
    /// insertion is a no-op, it does not re-position the element.
    pub(crate) fn push_front(&mut self, element: T) -> bool {
        if self.membership.contains(&element) {
            return false;
        }
        self.membership.insert(element.clone());
        self.order.push_front(element);
        self.debug_assert_consistent();
        true
    }

    /// Removes an element from both structures, returning it if present.
    pub(crate) fn remove<Q>(&mut self, element: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let removed = self.membership.take(element)?;
        let position = self
            .order
            .iter()
            .position(|candidate| candidate.borrow() == element);
        debug_assert!(position.is_some(), "{SYNC_INVARIANT_PANIC_MESSAGE}");
        if let Some(position) = position {
            self.order.remove(position);
        }
        self.debug_assert_consistent();
        Some(removed)
    }

    pub(crate) fn pop_back(&mut self) -> Option<T> {
        let element = self.order.pop_back()?;
        let was_member = self.membership.remove(&element);
        debug_assert!(was_member, "{SYNC_INVARIANT_PANIC_MESSAGE}");
        self.debug_assert_consistent();
        Some(element)
    }

    pub(crate) fn pop_front(&mut self) -> Option<T> {
        let element = self.order.pop_front()?;
        let was_member = self.membership.remove(&element);
        debug_assert!(was_member, "{SYNC_INVARIANT_PANIC_MESSAGE}");
        self.debug_assert_consistent();
        Some(element)
    }

    #[inline]
    pub(crate) fn get(&self, index: usize) -> Option<&T> {
        self.order.get(index)
    }

    #[inline]
    pub(crate) fn front(&self) -> Option<&T> {
        self.order.front()
    }

    #[inline]
    pub(crate) fn back(&self) -> Option<&T> {
        self.order.back()
    }

    #[inline]
    pub(crate) fn iter(&self) -> vec_deque::Iter<'_, T> {
        self.order.iter()
    }

    /// Consumes the core, yielding elements in order.
    #[inline]
    pub(crate) fn into_ordered_iter(self) -> vec_deque::IntoIter<T> {
        self.order.into_iter()
    }

    pub(crate) fn clear(&mut self) {
        self.membership.clear();
        self.order.clear();
    }

    /// Keeps only the elements satisfying the predicate, preserving the
    /// relative order of survivors.
    pub(crate) fn retain<F: FnMut(&T) -> bool>(&mut self, mut predicate: F) {
        let Self { membership, order } = self;
        order.retain(|element| {
            if predicate(element) {
                true
            } else {
                membership.remove(element);
                false
            }
        });
        self.debug_assert_consistent();
    }

    /// Membership-only equality against another core; order is ignored.
    pub(crate) fn eq_members(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|element| other.contains(element))
    }

    // =========================================================================
    // In-place algebra
    // =========================================================================

    /// In-place union: appends each new element at the back, in encounter
    /// order. Existing elements keep their positions.
    pub(crate) fn update_back<I: IntoIterator<Item = T>>(&mut self, other: I) {
        for element in other {
            self.push_back(element);
        }
    }

    /// In-place intersection: drops every element not present in `other`,
    /// preserving the relative order of survivors.
    pub(crate) fn intersection_update<I: IntoIterator<Item = T>>(&mut self, other: I) {
        let other_membership: HashSet<T, DefaultHashBuilder> = other.into_iter().collect();
        self.retain(|element| other_membership.contains(element));
    }

    /// In-place difference: discards every element of `other`.
    pub(crate) fn difference_update<I: IntoIterator<Item = T>>(&mut self, other: I) {
        for element in other {
            self.remove(&element);
        }
    }

    /// In-place symmetric difference: removes elements shared with `other`
    /// and appends the elements unique to `other` at the back, in encounter
    /// order. Duplicate occurrences in `other` count once.
    pub(crate) fn symmetric_difference_update<I: IntoIterator<Item = T>>(&mut self, other: I) {
        let deduplicated = Self::from_iter_back(other);
        for element in deduplicated.into_ordered_iter() {
            if self.contains(&element) {
                self.remove(&element);
            } else {
                self.push_back(element);
            }
        }
    }

    #[inline]
    fn debug_assert_consistent(&self) {
        #[cfg(debug_assertions)]
        debug_assert!(self.is_consistent(), "{SYNC_INVARIANT_PANIC_MESSAGE}");
    }

    #[cfg(debug_assertions)]
    fn is_consistent(&self) -> bool {
        self.order.len() == self.membership.len()
            && self
                .order
                .iter()
                .all(|element| self.membership.contains(element))
    }
}

// =============================================================================
// Algebra scans
// =============================================================================
//
// Result ordering for all four operations: elements appear in the order they
// are first encountered scanning the operands left to right, `base` first,
// then `other`. This is the ordering contract the public containers document.

/// Union scan: all of `base` in order, then the new elements of `other` in
/// encounter order.
pub(crate) fn union_scan<T, I>(base: &OrderCore<T>, other: I) -> OrderCore<T>
where
    T: Clone + Eq + Hash,
    I: IntoIterator<Item = T>,
{
    let mut result = base.clone();
    result.update_back(other);
    result
}

/// Intersection scan: the elements of `base` that are also in `other`, in
/// `base` order. Every element of the intersection is in `base`, so scanning
/// `base` alone realizes the left-to-right ordering rule.
pub(crate) fn intersection_scan<T, I>(base: &OrderCore<T>, other: I) -> OrderCore<T>
where
    T: Clone + Eq + Hash,
    I: IntoIterator<Item = T>,
{
    let other_membership: HashSet<T, DefaultHashBuilder> = other.into_iter().collect();
    let mut result = OrderCore::new();
    for element in base.iter() {
        if other_membership.contains(element) {
            result.push_back(element.clone());
        }
    }
    result
}

/// Difference scan: the elements of `base` not in `other`, in `base` order.
pub(crate) fn difference_scan<T, I>(base: &OrderCore<T>, other: I) -> OrderCore<T>
where
    T: Clone + Eq + Hash,
    I: IntoIterator<Item = T>,
{
    let other_membership: HashSet<T, DefaultHashBuilder> = other.into_iter().collect();
    let mut result = OrderCore::new();
    for element in base.iter() {
        if !other_membership.contains(element) {
            result.push_back(element.clone());
        }
    }
    result
}

/// Symmetric-difference scan: elements unique to `base` in `base` order,
/// then elements unique to `other` in encounter order.
pub(crate) fn symmetric_difference_scan<T, I>(base: &OrderCore<T>, other: I) -> OrderCore<T>
where
    T: Clone + Eq + Hash,
    I: IntoIterator<Item = T>,
{
    let other_core = OrderCore::from_iter_back(other);
    let mut result = OrderCore::new();
    for element in base.iter() {
        if !other_core.contains(element) {
            result.push_back(element.clone());
        }
    }
    for element in other_core.into_ordered_iter() {
        if !base.contains(&element) {
            result.push_back(element);
        }
    }
    result
}
