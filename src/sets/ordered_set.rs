//! Insertion-order-preserving set.
//!
//! This module provides [`OrderedSet`], a uniqueness-enforcing container
//! that remembers the order in which elements were added and exposes that
//! order through sequence-style indexing and iteration.
//!
//! # Overview
//!
//! `OrderedSet` pairs a hash-based membership structure with an explicit
//! order structure:
//!
//! - Membership tests, insertion, and silent removal are O(1) average
//! - Iteration yields elements in insertion order, front to back
//! - Positional access (`get`, the `[]` operator) reads the order structure
//!
//! Equality is membership-only: two sets containing the same elements
//! compare equal even when their orders differ. Order is observable through
//! iteration and indexing, never through `==`. This asymmetry is deliberate
//! and matches plain hash-set semantics.
//!
//! # Time Complexity
//!
//! | Operation              | Cost          |
//! |------------------------|---------------|
//! | `contains`             | O(1) average  |
//! | `add`                  | O(1) average  |
//! | `discard` / `remove`   | O(n)          |
//! | `get` / indexing       | O(1)          |
//! | `iter`                 | O(1) + O(n)   |
//! | algebra operations     | O(n + m)      |
//!
//! Targeted removal pays O(n) to excise the element from the order
//! structure; the membership update itself is O(1) average.
//!
//! # Examples
//!
//! ```rust
//! use ordsets::OrderedSet;
//!
//! let mut set = OrderedSet::new();
//! assert!(set.add("b"));
//! assert!(set.add("a"));
//! assert!(!set.add("b")); // duplicate: no-op
//!
//! assert_eq!(set[0], "b");
//! let in_order: Vec<&str> = set.iter().copied().collect();
//! assert_eq!(in_order, vec!["b", "a"]);
//!
//! // Equality ignores order.
//! let reversed: OrderedSet<&str> = ["a", "b"].into();
//! assert_eq!(set, reversed);
//! ```

use std::borrow::Borrow;
use std::collections::HashSet;
use std::collections::vec_deque;
use std::fmt;
use std::hash::BuildHasher;
use std::hash::Hash;
use std::ops::BitAnd;
use std::ops::BitOr;
use std::ops::BitXor;
use std::ops::Index;
use std::ops::Sub;

use super::SetLike;
use super::core;
use super::core::OrderCore;
use crate::error::SetError;

/// A set that remembers the order in which elements were added.
///
/// Supports the full set-algebra surface with a deterministic result order:
/// elements appear in the order they are first encountered scanning the
/// operands left to right, `self` first, then the argument.
///
/// # Type Parameters
///
/// * `T` - The element type. Must implement `Clone`, `Eq`, and `Hash`;
///   elements are stored in both the membership and the order structure.
///
/// # Examples
///
/// ```rust
/// use ordsets::OrderedSet;
///
/// let left: OrderedSet<i32> = [1, 2, 3].into();
/// let union = left.union([5, 3, 4]);
///
/// let in_order: Vec<i32> = union.iter().copied().collect();
/// assert_eq!(in_order, vec![1, 2, 3, 5, 4]);
/// ```
#[derive(Clone)]
pub struct OrderedSet<T: Clone + Eq + Hash> {
    core: OrderCore<T>,
}

static_assertions::assert_impl_all!(OrderedSet<i32>: Send, Sync, Clone);
static_assertions::assert_impl_all!(OrderedSet<String>: Send, Sync, Clone);

impl<T: Clone + Eq + Hash> OrderedSet<T> {
    /// Creates a new empty set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordsets::OrderedSet;
    ///
    /// let set: OrderedSet<i32> = OrderedSet::new();
    /// assert!(set.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            core: OrderCore::new(),
        }
    }

    /// Returns the number of elements in the set.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.core.len()
    }

    /// Returns `true` if the set contains no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.core.is_empty()
    }

    /// Returns `true` if the set contains the specified element.
    ///
    /// Supports borrowed forms of the element type through the `Borrow`
    /// trait: with `OrderedSet<String>` you can pass a `&str` directly.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordsets::OrderedSet;
    ///
    /// let set: OrderedSet<String> = ["hello".to_string()].into();
    /// assert!(set.contains("hello")); // no allocation needed
    /// assert!(!set.contains("world"));
    /// ```
    #[inline]
    #[must_use]
    pub fn contains<Q>(&self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.core.contains(element)
    }

    /// Adds an element to the set, appending it at the end of the order.
    ///
    /// Returns `true` if the element was newly inserted. If the element is
    /// already a member the call is a no-op returning `false`: the element
    /// keeps its original position.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordsets::OrderedSet;
    ///
    /// let mut set = OrderedSet::new();
    /// assert!(set.add(1));
    /// assert!(!set.add(1));
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn add(&mut self, element: T) -> bool {
        self.core.push_back(element)
    }

    /// Removes an element if present, silently doing nothing otherwise.
    ///
    /// Returns `true` if an element was removed. The relative order of the
    /// remaining elements is unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordsets::OrderedSet;
    ///
    /// let mut set: OrderedSet<i32> = [1, 2].into();
    /// assert!(set.discard(&1));
    /// assert!(!set.discard(&1)); // already gone: still no error
    /// ```
    pub fn discard<Q>(&mut self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.core.remove(element).is_some()
    }

    /// Removes an element, returning it.
    ///
    /// # Errors
    ///
    /// Returns [`SetError::NotFound`] if the element is not a member; the
    /// set is left unchanged. Use [`discard`](Self::discard) for the silent
    /// variant.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordsets::{OrderedSet, SetError};
    ///
    /// let mut set: OrderedSet<i32> = [1].into();
    /// assert_eq!(set.remove(&1), Ok(1));
    /// assert_eq!(set.remove(&1), Err(SetError::NotFound));
    /// ```
    pub fn remove<Q>(&mut self, element: &Q) -> Result<T, SetError>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.core.remove(element).ok_or(SetError::NotFound)
    }

    /// Returns a reference to the element at the given position in the
    /// order, or `None` if the index is out of range.
    ///
    /// The `[]` operator provides the panicking form.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordsets::OrderedSet;
    ///
    /// let set: OrderedSet<&str> = ["a", "b"].into();
    /// assert_eq!(set.get(1), Some(&"b"));
    /// assert_eq!(set.get(2), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.core.get(index)
    }

    /// Removes all elements.
    pub fn clear(&mut self) {
        self.core.clear();
    }

    /// Returns an iterator over references to the elements in insertion
    /// order.
    ///
    /// The iterator is double-ended; `.rev()` gives the reversed view.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordsets::OrderedSet;
    ///
    /// let set: OrderedSet<i32> = [1, 2, 3].into();
    /// let reversed: Vec<i32> = set.iter().rev().copied().collect();
    /// assert_eq!(reversed, vec![3, 2, 1]);
    /// ```
    #[inline]
    #[must_use]
    pub fn iter(&self) -> OrderedSetIterator<'_, T> {
        OrderedSetIterator {
            inner: self.core.iter(),
        }
    }

    // =========================================================================
    // Set algebra
    // =========================================================================

    /// Returns a new set containing the elements of `self` and `other`.
    ///
    /// Result order: all of `self` in order, then the elements of `other`
    /// not already present, in encounter order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordsets::OrderedSet;
    ///
    /// let set: OrderedSet<i32> = [1, 2].into();
    /// let union = set.union([3, 2]);
    /// let in_order: Vec<i32> = union.iter().copied().collect();
    /// assert_eq!(in_order, vec![1, 2, 3]);
    /// ```
    #[must_use]
    pub fn union<I: IntoIterator<Item = T>>(&self, other: I) -> Self {
        Self {
            core: core::union_scan(&self.core, other),
        }
    }

    /// Returns a new set containing the elements present in both `self` and
    /// `other`, in `self` order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordsets::OrderedSet;
    ///
    /// let set: OrderedSet<i32> = [3, 1, 2].into();
    /// let intersection = set.intersection([2, 3]);
    /// let in_order: Vec<i32> = intersection.iter().copied().collect();
    /// assert_eq!(in_order, vec![3, 2]);
    /// ```
    #[must_use]
    pub fn intersection<I: IntoIterator<Item = T>>(&self, other: I) -> Self {
        Self {
            core: core::intersection_scan(&self.core, other),
        }
    }

    /// Returns a new set containing the elements of `self` that are not in
    /// `other`, in `self` order.
    #[must_use]
    pub fn difference<I: IntoIterator<Item = T>>(&self, other: I) -> Self {
        Self {
            core: core::difference_scan(&self.core, other),
        }
    }

    /// Returns a new set containing the elements in exactly one of `self`
    /// and `other`.
    ///
    /// Result order: the elements unique to `self` in `self` order, then
    /// the elements unique to `other` in encounter order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordsets::OrderedSet;
    ///
    /// let set: OrderedSet<i32> = [1, 2, 3].into();
    /// let difference = set.symmetric_difference([3, 4]);
    /// let in_order: Vec<i32> = difference.iter().copied().collect();
    /// assert_eq!(in_order, vec![1, 2, 4]);
    /// ```
    #[must_use]
    pub fn symmetric_difference<I: IntoIterator<Item = T>>(&self, other: I) -> Self {
        Self {
            core: core::symmetric_difference_scan(&self.core, other),
        }
    }

    /// In-place union: appends the new elements of `other` at the end, in
    /// encounter order. Existing elements keep their positions.
    pub fn update<I: IntoIterator<Item = T>>(&mut self, other: I) {
        self.core.update_back(other);
    }

    /// In-place intersection: keeps only the elements present in `other`,
    /// preserving the relative order of survivors.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordsets::OrderedSet;
    ///
    /// let mut set: OrderedSet<&str> = ["c", "b", "d"].into();
    /// set.add("a");
    /// set.intersection_update(["a", "c"]);
    ///
    /// let survivors: Vec<&str> = set.iter().copied().collect();
    /// assert_eq!(survivors, vec!["c", "a"]);
    /// ```
    pub fn intersection_update<I: IntoIterator<Item = T>>(&mut self, other: I) {
        self.core.intersection_update(other);
    }

    /// In-place difference: discards every element of `other`, preserving
    /// the relative order of survivors.
    pub fn difference_update<I: IntoIterator<Item = T>>(&mut self, other: I) {
        self.core.difference_update(other);
    }

    /// In-place symmetric difference: removes the elements shared with
    /// `other` and appends the elements unique to `other` at the end, in
    /// encounter order.
    pub fn symmetric_difference_update<I: IntoIterator<Item = T>>(&mut self, other: I) {
        self.core.symmetric_difference_update(other);
    }

    /// Returns `true` if every element of `self` is a member of `other`.
    #[must_use]
    pub fn is_subset(&self, other: &Self) -> bool {
        self.iter().all(|element| other.contains(element))
    }

    /// Returns `true` if every element of `other` is a member of `self`.
    #[must_use]
    pub fn is_superset(&self, other: &Self) -> bool {
        other.is_subset(self)
    }

    /// Returns `true` if `self` and `other` share no elements.
    #[must_use]
    pub fn is_disjoint(&self, other: &Self) -> bool {
        self.iter().all(|element| !other.contains(element))
    }
}

impl<T: Clone + Eq + Hash> Default for OrderedSet<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + Eq + Hash> SetLike<T> for OrderedSet<T> {
    type Iter<'a>
        = OrderedSetIterator<'a, T>
    where
        Self: 'a,
        T: 'a;

    fn len(&self) -> usize {
        Self::len(self)
    }

    fn contains(&self, element: &T) -> bool {
        Self::contains(self, element)
    }

    /// The designated insertion end of an `OrderedSet` is the back.
    fn insert(&mut self, element: T) -> bool {
        self.add(element)
    }

    fn discard(&mut self, element: &T) -> bool {
        Self::discard(self, element)
    }

    fn iter(&self) -> Self::Iter<'_> {
        Self::iter(self)
    }
}

// =============================================================================
// Iterators
// =============================================================================

/// Iterator over references to the elements of an [`OrderedSet`] in
/// insertion order.
pub struct OrderedSetIterator<'a, T> {
    inner: vec_deque::Iter<'a, T>,
}

impl<'a, T> Iterator for OrderedSetIterator<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for OrderedSetIterator<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for OrderedSetIterator<'_, T> {
    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }
}

/// Owning iterator over the elements of an [`OrderedSet`] in insertion
/// order.
pub struct OrderedSetIntoIterator<T> {
    inner: vec_deque::IntoIter<T>,
}

impl<T> Iterator for OrderedSetIntoIterator<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for OrderedSetIntoIterator<T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for OrderedSetIntoIterator<T> {
    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T: Clone + Eq + Hash> IntoIterator for OrderedSet<T> {
    type Item = T;
    type IntoIter = OrderedSetIntoIterator<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        OrderedSetIntoIterator {
            inner: self.core.into_ordered_iter(),
        }
    }
}

impl<'a, T: Clone + Eq + Hash> IntoIterator for &'a OrderedSet<T> {
    type Item = &'a T;
    type IntoIter = OrderedSetIterator<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// Construction traits
// =============================================================================

impl<T: Clone + Eq + Hash> FromIterator<T> for OrderedSet<T> {
    /// Collapses duplicates, keeping first-occurrence order.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            core: OrderCore::from_iter_back(iter),
        }
    }
}

impl<T: Clone + Eq + Hash, const N: usize> From<[T; N]> for OrderedSet<T> {
    fn from(elements: [T; N]) -> Self {
        elements.into_iter().collect()
    }
}

impl<T: Clone + Eq + Hash> Extend<T> for OrderedSet<T> {
    /// Appends new elements at the end, in encounter order.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.update(iter);
    }
}

// =============================================================================
// Comparison, indexing, formatting
// =============================================================================

impl<T: Clone + Eq + Hash> PartialEq for OrderedSet<T> {
    /// Membership-only equality; order is ignored.
    fn eq(&self, other: &Self) -> bool {
        self.core.eq_members(&other.core)
    }
}

impl<T: Clone + Eq + Hash> Eq for OrderedSet<T> {}

impl<T: Clone + Eq + Hash, S: BuildHasher> PartialEq<HashSet<T, S>> for OrderedSet<T> {
    fn eq(&self, other: &HashSet<T, S>) -> bool {
        self.len() == other.len() && self.iter().all(|element| other.contains(element))
    }
}

impl<T: Clone + Eq + Hash> Index<usize> for OrderedSet<T> {
    type Output = T;

    /// # Panics
    ///
    /// Panics if `index` is out of range. Use [`get`](OrderedSet::get) for
    /// the non-panicking form.
    ///
    /// ```rust,should_panic
    /// use ordsets::OrderedSet;
    ///
    /// let set: OrderedSet<i32> = [1].into();
    /// let _ = set[1]; // panics
    /// ```
    fn index(&self, index: usize) -> &Self::Output {
        self.get(index).unwrap_or_else(|| {
            panic!(
                "index out of bounds: the len is {} but the index is {}",
                self.len(),
                index
            )
        })
    }
}

impl<T: Clone + Eq + Hash + fmt::Debug> fmt::Debug for OrderedSet<T> {
    /// Renders the type name and the contents in current order, e.g.
    /// `OrderedSet(["a", "c"])`.
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("OrderedSet(")?;
        formatter.debug_list().entries(self.iter()).finish()?;
        formatter.write_str(")")
    }
}

impl<T: Clone + Eq + Hash + fmt::Display> fmt::Display for OrderedSet<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        let mut first = true;
        for element in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "}}")
    }
}

// =============================================================================
// Operators
// =============================================================================

impl<T: Clone + Eq + Hash> BitOr for &OrderedSet<T> {
    type Output = OrderedSet<T>;

    /// Union via `|`, cloning the operands' elements.
    fn bitor(self, other: Self) -> Self::Output {
        self.union(other.iter().cloned())
    }
}

impl<T: Clone + Eq + Hash> BitAnd for &OrderedSet<T> {
    type Output = OrderedSet<T>;

    /// Intersection via `&`.
    fn bitand(self, other: Self) -> Self::Output {
        self.intersection(other.iter().cloned())
    }
}

impl<T: Clone + Eq + Hash> Sub for &OrderedSet<T> {
    type Output = OrderedSet<T>;

    /// Difference via `-`.
    fn sub(self, other: Self) -> Self::Output {
        self.difference(other.iter().cloned())
    }
}

impl<T: Clone + Eq + Hash> BitXor for &OrderedSet<T> {
    type Output = OrderedSet<T>;

    /// Symmetric difference via `^`.
    fn bitxor(self, other: Self) -> Self::Output {
        self.symmetric_difference(other.iter().cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn collect(set: &OrderedSet<i32>) -> Vec<i32> {
        set.iter().copied().collect()
    }

    #[rstest]
    fn add_reports_whether_insertion_occurred() {
        let mut set = OrderedSet::new();
        assert!(set.add(1));
        assert!(!set.add(1));
        assert_eq!(set.len(), 1);
    }

    #[rstest]
    fn iteration_follows_insertion_order() {
        let set: OrderedSet<i32> = [3, 1, 2, 1].into();
        assert_eq!(collect(&set), vec![3, 1, 2]);
    }

    #[rstest]
    fn reversed_iteration_is_the_mirror_view() {
        let set: OrderedSet<i32> = [1, 2, 3].into();
        let reversed: Vec<i32> = set.iter().rev().copied().collect();
        assert_eq!(reversed, vec![3, 2, 1]);
    }

    #[rstest]
    fn indexing_reads_the_order_structure() {
        let set: OrderedSet<i32> = [3, 1, 2].into();
        assert_eq!(set[0], 3);
        assert_eq!(set[2], 2);
        assert_eq!(set.get(3), None);
    }

    #[rstest]
    #[should_panic(expected = "index out of bounds: the len is 3 but the index is 3")]
    fn indexing_out_of_range_panics() {
        let set: OrderedSet<i32> = [3, 1, 2].into();
        let _ = set[3];
    }

    #[rstest]
    fn remove_errors_on_missing_element_and_discard_does_not() {
        let mut set: OrderedSet<i32> = [1].into();
        assert_eq!(set.remove(&1), Ok(1));
        assert_eq!(set.remove(&1), Err(SetError::NotFound));
        assert!(!set.discard(&1));
    }

    #[rstest]
    fn remove_failure_leaves_set_unchanged() {
        let mut set: OrderedSet<i32> = [1, 2].into();
        assert_eq!(set.remove(&9), Err(SetError::NotFound));
        assert_eq!(collect(&set), vec![1, 2]);
    }

    #[rstest]
    fn equality_ignores_order_but_debug_does_not() {
        let left: OrderedSet<i32> = [1, 2].into();
        let right: OrderedSet<i32> = [2, 1].into();
        assert_eq!(left, right);
        assert_ne!(format!("{left:?}"), format!("{right:?}"));
    }

    #[rstest]
    fn equality_against_std_hash_set() {
        let set: OrderedSet<i32> = [1, 2, 3].into();
        let std_set: HashSet<i32> = [3, 2, 1].into_iter().collect();
        assert_eq!(set, std_set);

        let smaller: HashSet<i32> = [1, 2].into_iter().collect();
        assert_ne!(set, smaller);
    }

    #[rstest]
    fn union_orders_self_first_then_new_elements() {
        let set: OrderedSet<i32> = [1, 2, 3].into();
        let union = set.union([5, 3, 4]);
        assert_eq!(collect(&union), vec![1, 2, 3, 5, 4]);
        // Operands unchanged.
        assert_eq!(collect(&set), vec![1, 2, 3]);
    }

    #[rstest]
    fn intersection_preserves_self_order() {
        let set: OrderedSet<i32> = [3, 1, 2].into();
        let intersection = set.intersection([2, 3, 9]);
        assert_eq!(collect(&intersection), vec![3, 2]);
    }

    #[rstest]
    fn difference_preserves_self_order() {
        let set: OrderedSet<i32> = [3, 1, 2].into();
        let difference = set.difference([1, 9]);
        assert_eq!(collect(&difference), vec![3, 2]);
    }

    #[rstest]
    fn symmetric_difference_orders_self_then_other() {
        let set: OrderedSet<i32> = [1, 2, 3].into();
        let difference = set.symmetric_difference([3, 4, 5]);
        assert_eq!(collect(&difference), vec![1, 2, 4, 5]);
    }

    #[rstest]
    fn update_appends_new_elements_in_encounter_order() {
        let mut set: OrderedSet<i32> = [1, 2].into();
        set.update([4, 2, 3]);
        assert_eq!(collect(&set), vec![1, 2, 4, 3]);
    }

    #[rstest]
    fn intersection_update_preserves_survivor_order() {
        let mut set: OrderedSet<&str> = ["c", "b", "d"].into();
        set.add("a");
        set.intersection_update(["a", "c"]);
        let survivors: Vec<&str> = set.iter().copied().collect();
        assert_eq!(survivors, vec!["c", "a"]);
    }

    #[rstest]
    fn difference_update_discards_named_elements() {
        let mut set: OrderedSet<i32> = [3, 1, 2].into();
        set.difference_update([1, 9]);
        assert_eq!(collect(&set), vec![3, 2]);
    }

    #[rstest]
    fn symmetric_difference_update_toggles_membership() {
        let mut set: OrderedSet<i32> = [1, 2, 3].into();
        set.symmetric_difference_update([3, 4]);
        assert_eq!(collect(&set), vec![1, 2, 4]);
    }

    #[rstest]
    fn operators_delegate_to_the_algebra() {
        let left: OrderedSet<i32> = [1, 2, 3].into();
        let right: OrderedSet<i32> = [3, 4].into();

        assert_eq!(collect(&(&left | &right)), vec![1, 2, 3, 4]);
        assert_eq!(collect(&(&left & &right)), vec![3]);
        assert_eq!(collect(&(&left - &right)), vec![1, 2]);
        assert_eq!(collect(&(&left ^ &right)), vec![1, 2, 4]);
    }

    #[rstest]
    fn subset_superset_disjoint_predicates() {
        let small: OrderedSet<i32> = [1, 2].into();
        let large: OrderedSet<i32> = [3, 2, 1].into();
        let other: OrderedSet<i32> = [9].into();

        assert!(small.is_subset(&large));
        assert!(large.is_superset(&small));
        assert!(small.is_disjoint(&other));
        assert!(!small.is_disjoint(&large));
    }

    #[rstest]
    fn debug_names_the_type_and_keeps_order() {
        let set: OrderedSet<&str> = ["a", "c"].into();
        assert_eq!(format!("{set:?}"), r#"OrderedSet(["a", "c"])"#);
    }

    #[rstest]
    fn display_renders_braces() {
        let set: OrderedSet<i32> = [1, 2].into();
        assert_eq!(format!("{set}"), "{1, 2}");
    }

    #[rstest]
    fn owned_iteration_yields_elements_in_order() {
        let set: OrderedSet<i32> = [3, 1, 2].into();
        let drained: Vec<i32> = set.into_iter().collect();
        assert_eq!(drained, vec![3, 1, 2]);
    }

    #[rstest]
    fn borrowed_lookup_with_str() {
        let mut set: OrderedSet<String> = ["apple".to_string(), "pear".to_string()].into();
        assert!(set.contains("apple"));
        assert!(set.discard("apple"));
        assert_eq!(set.remove("pear"), Ok("pear".to_string()));
    }

    #[rstest]
    fn round_trip_through_iteration_compares_equal() {
        let set: OrderedSet<i32> = [3, 1, 2].into();
        let rebuilt: OrderedSet<i32> = set.iter().copied().collect();
        assert_eq!(set, rebuilt);
    }
}
