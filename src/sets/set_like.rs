//! Common capability interface shared by the three containers.

use std::hash::Hash;

/// Capability interface for uniqueness-enforcing ordered containers.
///
/// All three containers in this crate implement `SetLike`, which captures
/// the operations they share: membership testing, sizing, insertion at the
/// container's designated insertion end, silent removal, and iteration in
/// the container's current order. The subset/superset/disjointness
/// predicates are provided on top of these and work across container types.
///
/// # Examples
///
/// ```rust
/// use ordsets::{DoubleSidedSet, OrderedSet, SetLike};
///
/// let ordered: OrderedSet<i32> = [1, 2, 3].into_iter().collect();
/// let double_sided: DoubleSidedSet<i32> = [2, 3].into_iter().collect();
///
/// // Predicates compare across container types.
/// assert!(double_sided.is_subset_of(&ordered));
/// assert!(ordered.is_superset_of(&double_sided));
/// ```
pub trait SetLike<T: Clone + Eq + Hash> {
    /// Iterator over references to the elements, in container order.
    type Iter<'a>: Iterator<Item = &'a T>
    where
        Self: 'a,
        T: 'a;

    /// Returns the number of elements in the container.
    fn len(&self) -> usize;

    /// Returns `true` if the element is a member.
    fn contains(&self, element: &T) -> bool;

    /// Inserts at the container's designated insertion end.
    ///
    /// Returns `true` if the element was newly inserted, `false` if it was
    /// already a member (in which case the container is unchanged).
    fn insert(&mut self, element: T) -> bool;

    /// Removes the element if present, silently doing nothing otherwise.
    ///
    /// Returns `true` if an element was removed.
    fn discard(&mut self, element: &T) -> bool;

    /// Returns an iterator over the elements in container order.
    fn iter(&self) -> Self::Iter<'_>;

    /// Returns `true` if the container has no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if every element of `self` is a member of `other`.
    fn is_subset_of<S: SetLike<T>>(&self, other: &S) -> bool {
        self.iter().all(|element| other.contains(element))
    }

    /// Returns `true` if every element of `other` is a member of `self`.
    fn is_superset_of<S: SetLike<T>>(&self, other: &S) -> bool {
        other.iter().all(|element| self.contains(element))
    }

    /// Returns `true` if `self` and `other` share no elements.
    fn is_disjoint_from<S: SetLike<T>>(&self, other: &S) -> bool {
        self.iter().all(|element| !other.contains(element))
    }
}
