//! An ordered map based on a binary search tree.
//!
//! [`Map`] stores key-value entries in a plain (unbalanced) binary search
//! tree ordered by a pluggable comparator ([`compare::Compare`]). The
//! tree's shape is determined entirely by insertion order, so lookups and
//! removals are `O(height)` with no rebalancing ever performed.
//!
//! The [`viz`] module renders a map's tree structure as text for
//! debugging and teaching purposes: a level-by-level dump, an indented
//! sideways tree, and a DOT graph description.

pub mod map;
pub mod viz;

mod node;

#[cfg(feature = "ordered_iter")]
mod ordered_iter;
#[cfg(feature = "quickcheck")]
mod quickcheck;

pub use crate::map::Map;
