//! # ordsets
//!
//! Insertion-ordered, double-ended, and capacity-bounded unique collections.
//!
//! ## Overview
//!
//! This library provides three set-like containers that combine hash-based
//! uniqueness with an explicit, deterministic element order:
//!
//! - [`OrderedSet`]: a set that remembers insertion order and supports
//!   sequence-style indexing and forward/reverse iteration
//! - [`DoubleSidedSet`]: a set with deque-style access (insertion at the
//!   front, removal from the back) and uniqueness enforced
//! - [`ExhaustiveSet`]: a [`DoubleSidedSet`] with a fixed capacity that
//!   silently evicts the oldest element on overflow
//!
//! All three expose the full set-algebra surface (`union`, `intersection`,
//! `difference`, `symmetric_difference` and their in-place forms) with a
//! deterministic result order: elements appear in the order they are first
//! encountered scanning the operands left to right, `self` first.
//!
//! ## Feature Flags
//!
//! - `fxhash`: use `rustc-hash` for the membership structure's hasher
//! - `ahash`: use `ahash` for the membership structure's hasher
//!
//! ## Example
//!
//! ```rust
//! use ordsets::prelude::*;
//!
//! let mut set = OrderedSet::from(["c", "b", "d"]);
//! set.add("a");
//! set.intersection_update(["a", "c"]);
//!
//! // Survivors keep their relative insertion order.
//! let remaining: Vec<&str> = set.iter().copied().collect();
//! assert_eq!(remaining, vec!["c", "a"]);
//! ```
//!
//! ## Thread Safety
//!
//! The containers hold plain owned data and are `Send`/`Sync` when their
//! element type is, but they provide no internal synchronization. Shared
//! mutation must be serialized externally; in safe Rust the `&mut self`
//! receivers on every mutating operation enforce this statically.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use ordsets::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::SetError;
    pub use crate::sets::*;
}

pub mod error;
pub mod sets;

pub use error::SetError;
pub use sets::DoubleSidedSet;
pub use sets::ExhaustiveSet;
pub use sets::OrderedSet;
pub use sets::SetLike;
