//! Set with deque-style directional access.
//!
//! This module provides [`DoubleSidedSet`], a uniqueness-enforcing
//! container with double-ended access: insertion happens at the front,
//! removal at the back. The element at the front is the newest, the element
//! at the back the oldest.
//!
//! # Duplicate Policy
//!
//! `push_front` on an element that is already a member is a no-op:
//! uniqueness wins over re-positioning, the element keeps its original
//! position and the container is unchanged. This is a deliberate design
//! decision, not an accident, and is pinned by tests.
//!
//! # Examples
//!
//! ```rust
//! use ordsets::DoubleSidedSet;
//!
//! let mut set = DoubleSidedSet::new();
//! set.push_front(1);
//! set.push_front(2);
//! set.push_front(1); // duplicate: no-op
//!
//! let front_to_back: Vec<i32> = set.iter().copied().collect();
//! assert_eq!(front_to_back, vec![2, 1]);
//! assert_eq!(set.pop_back(), Ok(1));
//! ```

use std::borrow::Borrow;
use std::collections::HashSet;
use std::collections::vec_deque;
use std::fmt;
use std::hash::BuildHasher;
use std::hash::Hash;
use std::ops::Index;

use super::SetLike;
use super::core;
use super::core::OrderCore;
use crate::error::SetError;

/// A set that remembers order, inserts at the front, and pops from the
/// back.
///
/// Membership testing, length, iteration (front to back), and positional
/// indexing behave as in [`OrderedSet`](crate::OrderedSet). Construction
/// from an iterable collapses duplicates and preserves first-occurrence
/// order left to right; the first element of the iterable ends up at the
/// front.
///
/// # Examples
///
/// ```rust
/// use ordsets::DoubleSidedSet;
///
/// let mut set: DoubleSidedSet<&str> = ["a", "b"].into_iter().collect();
/// set.push_front("c");
///
/// let front_to_back: Vec<&str> = set.iter().copied().collect();
/// assert_eq!(front_to_back, vec!["c", "a", "b"]);
/// ```
#[derive(Clone)]
pub struct DoubleSidedSet<T: Clone + Eq + Hash> {
    core: OrderCore<T>,
}

static_assertions::assert_impl_all!(DoubleSidedSet<i32>: Send, Sync, Clone);

impl<T: Clone + Eq + Hash> DoubleSidedSet<T> {
    /// Creates a new empty set.
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
    /// Accepts borrowed forms of the element type through `Borrow`.
    #[inline]
    #[must_use]
    pub fn contains<Q>(&self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.core.contains(element)
    }

    /// Inserts an element at the front.
    ///
    /// Returns `true` if the element was newly inserted. If the element is
    /// already a member the call is a **no-op** returning `false`: the
    /// element is not moved to the front. Uniqueness wins over
    /// re-positioning.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordsets::DoubleSidedSet;
    ///
    /// let mut set: DoubleSidedSet<i32> = [1, 2].into_iter().collect();
    /// assert!(!set.push_front(2)); // member already: unchanged
    ///
    /// let front_to_back: Vec<i32> = set.iter().copied().collect();
    /// assert_eq!(front_to_back, vec![1, 2]);
    /// ```
    pub fn push_front(&mut self, element: T) -> bool {
        self.core.push_front(element)
    }

    /// Alias for [`push_front`](Self::push_front): the designated insertion
    /// end of a `DoubleSidedSet` is the front.
    pub fn add(&mut self, element: T) -> bool {
        self.push_front(element)
    }

    /// Removes and returns the element at the back (the oldest element).
    ///
    /// # Errors
    ///
    /// Returns [`SetError::Empty`] if the set has zero elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordsets::{DoubleSidedSet, SetError};
    ///
    /// let mut set: DoubleSidedSet<i32> = [1, 2].into_iter().collect();
    /// assert_eq!(set.pop_back(), Ok(2));
    /// assert_eq!(set.pop_back(), Ok(1));
    /// assert_eq!(set.pop_back(), Err(SetError::Empty));
    /// ```
    pub fn pop_back(&mut self) -> Result<T, SetError> {
        self.core.pop_back().ok_or(SetError::Empty)
    }

    /// Returns a reference to the front (newest) element, or `None` if the
    /// set is empty.
    #[inline]
    #[must_use]
    pub fn front(&self) -> Option<&T> {
        self.core.front()
    }

    /// Returns a reference to the back (oldest) element, or `None` if the
    /// set is empty.
    #[inline]
    #[must_use]
    pub fn back(&self) -> Option<&T> {
        self.core.back()
    }

    /// Removes an element if present, silently doing nothing otherwise.
    ///
    /// Returns `true` if an element was removed.
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
    /// set is left unchanged.
    pub fn remove<Q>(&mut self, element: &Q) -> Result<T, SetError>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.core.remove(element).ok_or(SetError::NotFound)
    }

    /// Returns a reference to the element at the given position, front to
    /// back, or `None` if out of range.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.core.get(index)
    }

    /// Removes all elements.
    pub fn clear(&mut self) {
        self.core.clear();
    }

    /// Returns an iterator over references to the elements, front to back.
    ///
    /// The iterator is double-ended; `.rev()` walks back to front.
    #[inline]
    #[must_use]
    pub fn iter(&self) -> DoubleSidedSetIterator<'_, T> {
        DoubleSidedSetIterator {
            inner: self.core.iter(),
        }
    }

    // =========================================================================
    // Set algebra
    // =========================================================================
    //
    // Results follow the same left-to-right first-encountered ordering rule
    // as OrderedSet; they do not replay the front-insertion discipline.

    /// Returns a new set containing the elements of `self` and `other`:
    /// all of `self` front to back, then the new elements of `other` in
    /// encounter order.
    #[must_use]
    pub fn union<I: IntoIterator<Item = T>>(&self, other: I) -> Self {
        Self {
            core: core::union_scan(&self.core, other),
        }
    }

    /// Returns a new set containing the elements present in both `self`
    /// and `other`, in `self` order.
    #[must_use]
    pub fn intersection<I: IntoIterator<Item = T>>(&self, other: I) -> Self {
        Self {
            core: core::intersection_scan(&self.core, other),
        }
    }

    /// Returns a new set containing the elements of `self` not in `other`,
    /// in `self` order.
    #[must_use]
    pub fn difference<I: IntoIterator<Item = T>>(&self, other: I) -> Self {
        Self {
            core: core::difference_scan(&self.core, other),
        }
    }

    /// Returns a new set containing the elements in exactly one of `self`
    /// and `other`: elements unique to `self` first, then elements unique
    /// to `other` in encounter order.
    #[must_use]
    pub fn symmetric_difference<I: IntoIterator<Item = T>>(&self, other: I) -> Self {
        Self {
            core: core::symmetric_difference_scan(&self.core, other),
        }
    }

    /// In-place union: appends the new elements of `other` at the back, in
    /// encounter order (mirroring construction, which lays the iterable out
    /// front to back). Use [`push_front`](Self::push_front) to insert at
    /// the newest end.
    pub fn update<I: IntoIterator<Item = T>>(&mut self, other: I) {
        self.core.update_back(other);
    }

    /// In-place intersection: keeps only the elements present in `other`,
    /// preserving the relative order of survivors.
    pub fn intersection_update<I: IntoIterator<Item = T>>(&mut self, other: I) {
        self.core.intersection_update(other);
    }

    /// In-place difference: discards every element of `other`.
    pub fn difference_update<I: IntoIterator<Item = T>>(&mut self, other: I) {
        self.core.difference_update(other);
    }

    /// In-place symmetric difference: removes the elements shared with
    /// `other` and appends the elements unique to `other` at the back, in
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

impl<T: Clone + Eq + Hash> Default for DoubleSidedSet<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + Eq + Hash> SetLike<T> for DoubleSidedSet<T> {
    type Iter<'a>
        = DoubleSidedSetIterator<'a, T>
    where
        Self: 'a,
        T: 'a;

    fn len(&self) -> usize {
        Self::len(self)
    }

    fn contains(&self, element: &T) -> bool {
        Self::contains(self, element)
    }

    /// The designated insertion end of a `DoubleSidedSet` is the front.
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

/// Iterator over references to the elements of a [`DoubleSidedSet`], front
/// to back.
pub struct DoubleSidedSetIterator<'a, T> {
    inner: vec_deque::Iter<'a, T>,
}

impl<'a, T> Iterator for DoubleSidedSetIterator<'a, T> {
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

impl<T> DoubleEndedIterator for DoubleSidedSetIterator<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for DoubleSidedSetIterator<'_, T> {
    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }
}

/// Owning iterator over the elements of a [`DoubleSidedSet`], front to
/// back.
pub struct DoubleSidedSetIntoIterator<T> {
    inner: vec_deque::IntoIter<T>,
}

impl<T> Iterator for DoubleSidedSetIntoIterator<T> {
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

impl<T> DoubleEndedIterator for DoubleSidedSetIntoIterator<T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for DoubleSidedSetIntoIterator<T> {
    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T: Clone + Eq + Hash> IntoIterator for DoubleSidedSet<T> {
    type Item = T;
    type IntoIter = DoubleSidedSetIntoIterator<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        DoubleSidedSetIntoIterator {
            inner: self.core.into_ordered_iter(),
        }
    }
}

impl<'a, T: Clone + Eq + Hash> IntoIterator for &'a DoubleSidedSet<T> {
    type Item = &'a T;
    type IntoIter = DoubleSidedSetIterator<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// Construction traits
// =============================================================================

impl<T: Clone + Eq + Hash> FromIterator<T> for DoubleSidedSet<T> {
    /// Collapses duplicates and preserves first-occurrence order left to
    /// right; the first element of the iterable ends up at the front.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            core: OrderCore::from_iter_back(iter),
        }
    }
}

impl<T: Clone + Eq + Hash, const N: usize> From<[T; N]> for DoubleSidedSet<T> {
    fn from(elements: [T; N]) -> Self {
        elements.into_iter().collect()
    }
}

impl<T: Clone + Eq + Hash> Extend<T> for DoubleSidedSet<T> {
    /// Appends new elements at the back, in encounter order, mirroring
    /// construction.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.update(iter);
    }
}

// =============================================================================
// Comparison, indexing, formatting
// =============================================================================

impl<T: Clone + Eq + Hash> PartialEq for DoubleSidedSet<T> {
    /// Membership-only equality; order is ignored.
    fn eq(&self, other: &Self) -> bool {
        self.core.eq_members(&other.core)
    }
}

impl<T: Clone + Eq + Hash> Eq for DoubleSidedSet<T> {}

impl<T: Clone + Eq + Hash, S: BuildHasher> PartialEq<HashSet<T, S>> for DoubleSidedSet<T> {
    fn eq(&self, other: &HashSet<T, S>) -> bool {
        self.len() == other.len() && self.iter().all(|element| other.contains(element))
    }
}

impl<T: Clone + Eq + Hash> Index<usize> for DoubleSidedSet<T> {
    type Output = T;

    /// # Panics
    ///
    /// Panics if `index` is out of range. Use
    /// [`get`](DoubleSidedSet::get) for the non-panicking form.
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

impl<T: Clone + Eq + Hash + fmt::Debug> fmt::Debug for DoubleSidedSet<T> {
    /// Renders the type name and the contents front to back, e.g.
    /// `DoubleSidedSet([2, 1])`.
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("DoubleSidedSet(")?;
        formatter.debug_list().entries(self.iter()).finish()?;
        formatter.write_str(")")
    }
}

impl<T: Clone + Eq + Hash + fmt::Display> fmt::Display for DoubleSidedSet<T> {
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
