//! Lazy ranges - immutable views over indexable sequences.
//!
//! A [`Range`] is a length plus a way to compute the element at each index.
//! Slicing, reversing and appending build new views over the same data
//! without copying it; mapping and filtering realize fresh arrays.
//!
//! # Quick Start
//!
//! ```
//! use lazy_ranges::Range;
//!
//! let evens = Range::numeric_step(0, 10, 2)?;
//! assert_eq!(evens.to_vec(), vec![0, 2, 4, 6, 8]);
//!
//! let tail = evens.drop(2)?.reverse();
//! assert_eq!(tail.to_vec(), vec![8, 6, 4]);
//!
//! let joined = tail.append(&Range::vector(vec![1, 3]));
//! assert_eq!(joined.fold(0, |acc, x| acc + x), 22);
//! # Ok::<(), lazy_ranges::RangeError>(())
//! ```
//!
//! # Complexity
//!
//! Every reversal or append wraps the previous indexer in another layer, and
//! each layer costs an indirection per element read. A range counts its
//! layers in [`Range::complexity`]; once the count passes
//! [`MATERIALIZE_THRESHOLD`] the range is copied into a flat array and the
//! count starts again from zero.

pub mod error;
pub mod range;

pub use error::{RangeError, Result};
pub use range::{Generator, Iter, MATERIALIZE_THRESHOLD, Progression, Range, Segments};
