//! Capacity-bounded set with automatic eviction.
//!
//! This module provides [`ExhaustiveSet`], a [`DoubleSidedSet`] with a
//! fixed maximum size set at construction. Inserting past capacity silently
//! evicts the oldest element, the one at the back.
//!
//! # Capacity Invariant
//!
//! `len() <= capacity()` holds after every operation. When the set is at
//! capacity, each successful `push_front` evicts exactly one element; the
//! set is never evicted below the bound unless it was under capacity to
//! begin with. The capacity is positive and immutable after construction.
//!
//! # Examples
//!
//! ```rust
//! use ordsets::ExhaustiveSet;
//!
//! let mut seen = ExhaustiveSet::new(3).unwrap();
//! for identifier in ["a", "b", "c", "d"] {
//!     seen.push_front(identifier);
//! }
//!
//! // "a" was the oldest entry and has been evicted.
//! assert_eq!(seen.len(), 3);
//! assert!(!seen.contains(&"a"));
//! ```

use std::borrow::Borrow;
use std::collections::HashSet;
use std::fmt;
use std::hash::BuildHasher;
use std::hash::Hash;
use std::ops::Index;

use super::DoubleSidedSet;
use super::SetLike;
use super::double_sided_set::DoubleSidedSetIntoIterator;
use super::double_sided_set::DoubleSidedSetIterator;
use crate::error::SetError;

/// A set that automatically evicts its oldest entries when a fixed capacity
/// is exceeded.
///
/// Mechanically identical to [`DoubleSidedSet`] (front insertion, back
/// removal, uniqueness no-op on duplicates) with a capacity bound layered
/// on top. Typical use is deduplication over an unbounded stream with
/// bounded memory: recently seen identifiers stay members, the oldest are
/// forgotten first.
///
/// The capacity participates in construction and eviction only; equality
/// remains membership-based, so two sets with equal members and different
/// capacities compare equal.
///
/// # Examples
///
/// ```rust
/// use ordsets::ExhaustiveSet;
///
/// let mut set = ExhaustiveSet::from_elements(3, ["x", "y", "z"]).unwrap();
/// set.push_front("w");
///
/// let retained: Vec<&str> = set.iter().copied().collect();
/// assert_eq!(retained, vec!["w", "x", "y"]); // "z" evicted
/// ```
#[derive(Clone)]
pub struct ExhaustiveSet<T: Clone + Eq + Hash> {
    inner: DoubleSidedSet<T>,
    capacity: usize,
}

static_assertions::assert_impl_all!(ExhaustiveSet<i32>: Send, Sync, Clone);

impl<T: Clone + Eq + Hash> ExhaustiveSet<T> {
    /// Creates a new empty set with the given capacity.
    ///
    /// # Errors
    ///
    /// Returns [`SetError::InvalidCapacity`] if `capacity` is zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordsets::{ExhaustiveSet, SetError};
    ///
    /// let set: ExhaustiveSet<i32> = ExhaustiveSet::new(100).unwrap();
    /// assert_eq!(set.capacity(), 100);
    ///
    /// let invalid = ExhaustiveSet::<i32>::new(0);
    /// assert_eq!(invalid.unwrap_err(), SetError::InvalidCapacity(0));
    /// ```
    pub fn new(capacity: usize) -> Result<Self, SetError> {
        if capacity == 0 {
            return Err(SetError::InvalidCapacity(capacity));
        }
        Ok(Self {
            inner: DoubleSidedSet::new(),
            capacity,
        })
    }

    /// Creates a set with the given capacity from an iterable.
    ///
    /// Duplicates are collapsed in first-occurrence order, the first
    /// element of the iterable ending up at the front. If the deduplicated
    /// length exceeds `capacity`, elements are evicted from the back until
    /// the bound holds: the retained elements are the ones nearest the
    /// front, consistent with steady-state eviction.
    ///
    /// # Errors
    ///
    /// Returns [`SetError::InvalidCapacity`] if `capacity` is zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordsets::ExhaustiveSet;
    ///
    /// let set = ExhaustiveSet::from_elements(2, [1, 2, 3, 4]).unwrap();
    /// let retained: Vec<i32> = set.iter().copied().collect();
    /// assert_eq!(retained, vec![1, 2]);
    /// ```
    pub fn from_elements<I: IntoIterator<Item = T>>(
        capacity: usize,
        elements: I,
    ) -> Result<Self, SetError> {
        let mut set = Self::new(capacity)?;
        set.inner = elements.into_iter().collect();
        set.evict_overflow();
        Ok(set)
    }

    /// Returns the maximum number of elements the set may hold.
    ///
    /// Fixed at construction; there is no way to change it afterwards.
    #[inline]
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the number of elements in the set.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` if the set contains no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns `true` if the set contains the specified element.
    ///
    /// Accepts borrowed forms of the element type through `Borrow`.
    #[inline]
    #[must_use]
    pub fn contains<Q>(&self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.contains(element)
    }

    /// Inserts an element at the front, evicting from the back if the
    /// capacity would be exceeded.
    ///
    /// Returns `true` if the element was newly inserted. A duplicate
    /// insertion is a no-op returning `false` and never triggers an
    /// eviction. When the set is already at capacity, a successful
    /// insertion evicts exactly one element, the oldest.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordsets::ExhaustiveSet;
    ///
    /// let mut set = ExhaustiveSet::from_elements(2, [1, 2]).unwrap();
    /// assert!(set.push_front(3)); // evicts 2, the back element
    /// assert!(!set.contains(&2));
    /// assert_eq!(set.len(), 2);
    /// ```
    pub fn push_front(&mut self, element: T) -> bool {
        self.push_front_with_eviction(element).0
    }

    /// Inserts an element at the front, handing back the evicted element.
    ///
    /// Same mechanics as [`push_front`](Self::push_front); the second
    /// tuple field carries the element that was evicted to keep the set
    /// within capacity, if any. Callers that need to dispose of evicted
    /// entries receive them by value here.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordsets::ExhaustiveSet;
    ///
    /// let mut set = ExhaustiveSet::from_elements(2, [1, 2]).unwrap();
    /// assert_eq!(set.push_front_with_eviction(3), (true, Some(2)));
    /// assert_eq!(set.push_front_with_eviction(3), (false, None));
    /// ```
    pub fn push_front_with_eviction(&mut self, element: T) -> (bool, Option<T>) {
        if !self.inner.push_front(element) {
            return (false, None);
        }
        let evicted = if self.inner.len() > self.capacity {
            self.inner.pop_back().ok()
        } else {
            None
        };
        self.debug_assert_within_capacity();
        (true, evicted)
    }

    /// Alias for [`push_front`](Self::push_front): the designated
    /// insertion end is the front.
    pub fn add(&mut self, element: T) -> bool {
        self.push_front(element)
    }

    /// Removes and returns the element at the back (the oldest element).
    ///
    /// # Errors
    ///
    /// Returns [`SetError::Empty`] if the set has zero elements.
    pub fn pop_back(&mut self) -> Result<T, SetError> {
        self.inner.pop_back()
    }

    /// Returns a reference to the front (newest) element, or `None` if the
    /// set is empty.
    #[inline]
    #[must_use]
    pub fn front(&self) -> Option<&T> {
        self.inner.front()
    }

    /// Returns a reference to the back (oldest) element, or `None` if the
    /// set is empty.
    #[inline]
    #[must_use]
    pub fn back(&self) -> Option<&T> {
        self.inner.back()
    }

    /// Removes an element if present, silently doing nothing otherwise.
    ///
    /// Returns `true` if an element was removed.
    pub fn discard<Q>(&mut self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.discard(element)
    }

    /// Removes an element, returning it.
    ///
    /// # Errors
    ///
    /// Returns [`SetError::NotFound`] if the element is not a member; the
    /// set is left unchanged.
    pub fn remove<Q>(&mut self, element: &Q) -> Result<T, SetError>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.remove(element)
    }

    /// Returns a reference to the element at the given position, front to
    /// back, or `None` if out of range.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.inner.get(index)
    }

    /// Removes all elements. The capacity is unchanged.
    pub fn clear(&mut self) {
        self.inner.clear();
    }

    /// Returns an iterator over references to the elements, front to back.
    #[inline]
    #[must_use]
    pub fn iter(&self) -> ExhaustiveSetIterator<'_, T> {
        ExhaustiveSetIterator {
            inner: self.inner.iter(),
        }
    }

    // =========================================================================
    // Set algebra
    // =========================================================================
    //
    // Results carry the capacity of `self` and are truncated by
    // back-eviction when the scan produces more elements than fit.

    /// Returns a new set, with the capacity of `self`, containing the
    /// elements of `self` and `other` in encounter order. Overflow is
    /// evicted from the back.
    #[must_use]
    pub fn union<I: IntoIterator<Item = T>>(&self, other: I) -> Self {
        Self::bounded(self.inner.union(other), self.capacity)
    }

    /// Returns a new set, with the capacity of `self`, containing the
    /// elements present in both `self` and `other`, in `self` order.
    #[must_use]
    pub fn intersection<I: IntoIterator<Item = T>>(&self, other: I) -> Self {
        Self::bounded(self.inner.intersection(other), self.capacity)
    }

    /// Returns a new set, with the capacity of `self`, containing the
    /// elements of `self` not in `other`, in `self` order.
    #[must_use]
    pub fn difference<I: IntoIterator<Item = T>>(&self, other: I) -> Self {
        Self::bounded(self.inner.difference(other), self.capacity)
    }

    /// Returns a new set, with the capacity of `self`, containing the
    /// elements in exactly one of `self` and `other`. Overflow is evicted
    /// from the back.
    #[must_use]
    pub fn symmetric_difference<I: IntoIterator<Item = T>>(&self, other: I) -> Self {
        Self::bounded(self.inner.symmetric_difference(other), self.capacity)
    }

    /// In-place union: appends the new elements of `other` at the back in
    /// encounter order, then evicts from the back until the capacity bound
    /// holds, mirroring construction truncation.
    pub fn update<I: IntoIterator<Item = T>>(&mut self, other: I) {
        self.inner.update(other);
        self.evict_overflow();
    }

    /// In-place intersection: keeps only the elements present in `other`,
    /// preserving the relative order of survivors.
    pub fn intersection_update<I: IntoIterator<Item = T>>(&mut self, other: I) {
        self.inner.intersection_update(other);
        self.debug_assert_within_capacity();
    }

    /// In-place difference: discards every element of `other`.
    pub fn difference_update<I: IntoIterator<Item = T>>(&mut self, other: I) {
        self.inner.difference_update(other);
        self.debug_assert_within_capacity();
    }

    /// In-place symmetric difference: toggles membership against `other`,
    /// then evicts from the back until the capacity bound holds.
    pub fn symmetric_difference_update<I: IntoIterator<Item = T>>(&mut self, other: I) {
        self.inner.symmetric_difference_update(other);
        self.evict_overflow();
    }

    /// Returns `true` if every element of `self` is a member of `other`.
    #[must_use]
    pub fn is_subset(&self, other: &Self) -> bool {
        self.inner.is_subset(&other.inner)
    }

    /// Returns `true` if every element of `other` is a member of `self`.
    #[must_use]
    pub fn is_superset(&self, other: &Self) -> bool {
        self.inner.is_superset(&other.inner)
    }

    /// Returns `true` if `self` and `other` share no elements.
    #[must_use]
    pub fn is_disjoint(&self, other: &Self) -> bool {
        self.inner.is_disjoint(&other.inner)
    }

    /// Wraps an unbounded result, enforcing the capacity by back-eviction.
    fn bounded(inner: DoubleSidedSet<T>, capacity: usize) -> Self {
        let mut set = Self { inner, capacity };
        set.evict_overflow();
        set
    }

    /// Evicts from the back until `len() <= capacity()`.
    fn evict_overflow(&mut self) {
        while self.inner.len() > self.capacity {
            let _ = self.inner.pop_back();
        }
        self.debug_assert_within_capacity();
    }

    #[inline]
    fn debug_assert_within_capacity(&self) {
        debug_assert!(
            self.inner.len() <= self.capacity,
            "capacity bound violated: {} elements with capacity {}",
            self.inner.len(),
            self.capacity
        );
    }
}

impl<T: Clone + Eq + Hash> SetLike<T> for ExhaustiveSet<T> {
    type Iter<'a>
        = ExhaustiveSetIterator<'a, T>
    where
        Self: 'a,
        T: 'a;

    fn len(&self) -> usize {
        Self::len(self)
    }

    fn contains(&self, element: &T) -> bool {
        Self::contains(self, element)
    }

    /// The designated insertion end is the front; inserting past capacity
    /// evicts from the back.
    fn insert(&mut self, element: T) -> bool {
        self.push_front(element)
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

/// Iterator over references to the elements of an [`ExhaustiveSet`], front
/// to back.
pub struct ExhaustiveSetIterator<'a, T> {
    inner: DoubleSidedSetIterator<'a, T>,
}

impl<'a, T> Iterator for ExhaustiveSetIterator<'a, T> {
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

impl<T> DoubleEndedIterator for ExhaustiveSetIterator<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for ExhaustiveSetIterator<'_, T> {
    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }
}

/// Owning iterator over the elements of an [`ExhaustiveSet`], front to
/// back.
pub struct ExhaustiveSetIntoIterator<T> {
    inner: DoubleSidedSetIntoIterator<T>,
}

impl<T> Iterator for ExhaustiveSetIntoIterator<T> {
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

impl<T> DoubleEndedIterator for ExhaustiveSetIntoIterator<T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for ExhaustiveSetIntoIterator<T> {
    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T: Clone + Eq + Hash> IntoIterator for ExhaustiveSet<T> {
    type Item = T;
    type IntoIter = ExhaustiveSetIntoIterator<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        ExhaustiveSetIntoIterator {
            inner: self.inner.into_iter(),
        }
    }
}

impl<'a, T: Clone + Eq + Hash> IntoIterator for &'a ExhaustiveSet<T> {
    type Item = &'a T;
    type IntoIter = ExhaustiveSetIterator<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Clone + Eq + Hash> Extend<T> for ExhaustiveSet<T> {
    /// Appends new elements at the back in encounter order, then evicts
    /// from the back until the capacity bound holds.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.update(iter);
    }
}

// =============================================================================
// Comparison, indexing, formatting
// =============================================================================

impl<T: Clone + Eq + Hash> PartialEq for ExhaustiveSet<T> {
    /// Membership-only equality; neither order nor capacity participates.
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<T: Clone + Eq + Hash> Eq for ExhaustiveSet<T> {}

impl<T: Clone + Eq + Hash, S: BuildHasher> PartialEq<HashSet<T, S>> for ExhaustiveSet<T> {
    fn eq(&self, other: &HashSet<T, S>) -> bool {
        self.len() == other.len() && self.iter().all(|element| other.contains(element))
    }
}

impl<T: Clone + Eq + Hash> Index<usize> for ExhaustiveSet<T> {
    type Output = T;

    /// # Panics
    ///
    /// Panics if `index` is out of range. Use
    /// [`get`](ExhaustiveSet::get) for the non-panicking form.
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

impl<T: Clone + Eq + Hash + fmt::Debug> fmt::Debug for ExhaustiveSet<T> {
    /// Renders the type name and the contents front to back, e.g.
    /// `ExhaustiveSet([3, 2, 1])`.
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("ExhaustiveSet(")?;
        formatter.debug_list().entries(self.iter()).finish()?;
        formatter.write_str(")")
    }
}

impl<T: Clone + Eq + Hash + fmt::Display> fmt::Display for ExhaustiveSet<T> {
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
