//! Lazy, restartable, composable sequences.
//!
//! A [`Sequence`] describes how to produce elements; nothing is read until a
//! [`Cursor`] or a terminal method starts pulling. Chains of `filter`, `map`,
//! `distinct`, `take` and friends stay lazy, so they work over unbounded
//! sources as long as something downstream bounds the traversal. Sorting,
//! grouping and the draining terminals need finite input.
//!
//! ```
//! use lazy_sequence::Sequence;
//!
//! # fn main() -> Result<(), lazy_sequence::SeqError> {
//! let fruits = Sequence::create(["Pear", "Apple", "Banana", "Pear"])
//!     .concat(&Sequence::repeat("Grape"));
//! let firsts = fruits.distinct().take(4)?.join(", ");
//! assert_eq!(firsts, "Pear, Apple, Banana, Grape");
//! # Ok(())
//! # }
//! ```

mod cast;
mod concat;
mod cursor;
mod deferred;
mod distinct;
mod error;
mod filter;
mod flat_map;
mod from_sequence;
mod group;
mod iter_source;
mod map;
mod pull;
mod repeat;
mod sequence;
mod skip;
mod slice_source;
mod sort;
mod take;
mod terminal;
mod without;

#[cfg(test)]
mod test_models;

pub use cast::*;
pub use concat::*;
pub use cursor::*;
pub use deferred::*;
pub use distinct::*;
pub use error::*;
pub use filter::*;
pub use flat_map::*;
pub use from_sequence::*;
pub use group::*;
pub use iter_source::*;
pub use map::*;
pub use pull::*;
pub use repeat::*;
pub use sequence::*;
pub use skip::*;
pub use slice_source::*;
pub use take::*;
