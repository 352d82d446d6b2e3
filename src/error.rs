//! Error types for the ordered-set containers.
//!
//! Every fallible operation in this crate surfaces a [`SetError`]. There is
//! no partial-failure state: a mutating operation that returns an error
//! leaves the container unchanged.

use std::fmt;

/// Represents errors that can occur when operating on the containers.
///
/// # Examples
///
/// ```rust
/// use ordsets::{DoubleSidedSet, SetError};
///
/// let mut set: DoubleSidedSet<i32> = DoubleSidedSet::new();
/// assert_eq!(set.pop_back(), Err(SetError::Empty));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetError {
    /// `remove` was called for an element that is not a member.
    ///
    /// Distinct from `discard`, which never errors on a missing element.
    NotFound,
    /// `pop_back` was called on a container with zero elements.
    Empty,
    /// An `ExhaustiveSet` was constructed with a capacity of zero.
    ///
    /// Carries the rejected capacity value.
    InvalidCapacity(usize),
}

impl fmt::Display for SetError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => write!(formatter, "element not found in set"),
            Self::Empty => write!(formatter, "pop from an empty set"),
            Self::InvalidCapacity(capacity) => {
                write!(formatter, "capacity must be positive, got {capacity}")
            }
        }
    }
}

impl std::error::Error for SetError {}
