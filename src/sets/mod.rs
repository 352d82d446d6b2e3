//! Ordered set containers.
//!
//! This module provides three containers that enforce uniqueness while
//! keeping an explicit, deterministic element order:
//!
//! - [`OrderedSet`]: set semantics + stable insertion order
//! - [`DoubleSidedSet`]: set semantics + deque-style access
//! - [`ExhaustiveSet`]: [`DoubleSidedSet`] semantics + capacity-bounded
//!   eviction
//!
//! # Membership and Order
//!
//! Each container pairs a hash-based membership structure with an explicit
//! order structure. The two are kept in exact correspondence at all times:
//! the order structure holds every member exactly once, so ordering is never
//! inferred from hash iteration and is deterministic across platforms.
//!
//! # Examples
//!
//! ## `OrderedSet`
//!
//! ```rust
//! use ordsets::sets::OrderedSet;
//!
//! let mut set = OrderedSet::new();
//! set.add(3);
//! set.add(1);
//! set.add(3); // duplicate: no-op
//!
//! let in_order: Vec<i32> = set.iter().copied().collect();
//! assert_eq!(in_order, vec![3, 1]);
//! assert_eq!(set[0], 3);
//! ```
//!
//! ## `DoubleSidedSet`
//!
//! ```rust
//! use ordsets::sets::DoubleSidedSet;
//!
//! let mut set = DoubleSidedSet::new();
//! set.push_front(1);
//! set.push_front(2);
//!
//! assert_eq!(set.pop_back(), Ok(1)); // oldest element leaves first
//! ```
//!
//! ## `ExhaustiveSet`
//!
//! ```rust
//! use ordsets::sets::ExhaustiveSet;
//!
//! let mut set = ExhaustiveSet::from_elements(3, ["x", "y", "z"]).unwrap();
//! set.push_front("w");
//!
//! // "z" was the oldest element and has been evicted.
//! let retained: Vec<&str> = set.iter().copied().collect();
//! assert_eq!(retained, vec!["w", "x", "y"]);
//! ```

// =============================================================================
// Hash Builder Type Alias
// =============================================================================

/// Hash builder used by the membership structure.
///
/// When the `fxhash` feature is enabled, this is `rustc_hash::FxBuildHasher`,
/// a fast non-cryptographic hasher.
///
/// When the `ahash` feature is enabled (and `fxhash` is not), this is
/// `ahash::RandomState`.
///
/// Otherwise it is the standard library's `RandomState`.
#[cfg(feature = "fxhash")]
pub(crate) type DefaultHashBuilder = rustc_hash::FxBuildHasher;

#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
pub(crate) type DefaultHashBuilder = ahash::RandomState;

#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
pub(crate) type DefaultHashBuilder = std::collections::hash_map::RandomState;

mod core;
mod double_sided_set;
mod exhaustive_set;
mod ordered_set;
mod set_like;

pub use double_sided_set::DoubleSidedSet;
pub use double_sided_set::DoubleSidedSetIntoIterator;
pub use double_sided_set::DoubleSidedSetIterator;
pub use exhaustive_set::ExhaustiveSet;
pub use exhaustive_set::ExhaustiveSetIntoIterator;
pub use exhaustive_set::ExhaustiveSetIterator;
pub use ordered_set::OrderedSet;
pub use ordered_set::OrderedSetIntoIterator;
pub use ordered_set::OrderedSetIterator;
pub use set_like::SetLike;

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod hash_builder_tests {
    use super::DefaultHashBuilder;
    use std::collections::HashSet;

    #[test]
    fn membership_structure_builds_with_default_hasher() {
        let mut set: HashSet<i32, DefaultHashBuilder> = HashSet::default();
        assert!(set.insert(42));
        assert!(set.contains(&42));
    }
}
