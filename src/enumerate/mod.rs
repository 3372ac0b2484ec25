//! Brute-force enumeration of candidate step multisets
//!
//! The production counter uses a linear recurrence; this module keeps the
//! exhaustive generate-and-filter formulation around as a slow, independent
//! oracle, together with the multiset ordering helpers it is built from.

mod exhaustive;
mod multisets;
mod orderings;

pub use exhaustive::exhaustive_count;
pub use multisets::{candidate_multisets, combinations_with_replacement, sub_multisets};
pub use orderings::{distinct_ordering_count, distinct_orderings};

#[cfg(test)]
mod tests;
