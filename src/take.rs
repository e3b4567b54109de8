use std::fmt::Display;

use log::trace;

use crate::{Pull, Result, SeqError};

/// A source that stops after `remaining` elements, whatever upstream holds.
pub struct Take<I> {
    source: I,
    remaining: usize,
}

impl<I> Take<I> {
    pub(crate) fn new(source: I, remaining: usize) -> Self {
        Take { source, remaining }
    }
}

impl<I: Pull> Pull for Take<I> {
    type Item = I::Item;

    fn pull(&mut self) -> Option<I::Item> {
        if self.remaining == 0 {
            // upstream may be unbounded, so it must not be touched again
            trace!("take limit reached");
            return None;
        }

        self.remaining -= 1;
        self.source.pull()
    }
}

/// Turns a caller supplied count into a `usize`, rejecting negative values.
pub(crate) fn element_count<N>(n: N, operation: &str) -> Result<usize>
where
    N: TryInto<usize> + Display + Copy,
{
    n.try_into().map_err(|_| {
        SeqError::invalid_argument(format!(
            "{operation} count must be a non-negative number, got {n}"
        ))
    })
}
