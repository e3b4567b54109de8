use log::trace;

use crate::{BoxPull, Pull, Result, SeqError};

/// The one-element lookahead buffer behind [`Cursor::has_more`].
enum Lookahead<T> {
    /// Nothing has been pulled since the last `advance`.
    NotFetched,
    /// An element was pulled by `has_more` and is waiting for `advance`.
    Fetched(T),
    /// Upstream reported the end. It is never pulled again.
    Done,
}

/// A single-use traversal over a [`Sequence`](crate::Sequence).
///
/// `has_more` may be called any number of times in a row: the first call pulls
/// one element from upstream into the lookahead buffer, later calls only
/// report what is buffered. `advance` hands the buffered element out (pulling
/// first if needed) and fails with [`SeqError::Exhausted`] at the end.
///
/// A cursor is also a plain [`Iterator`], so it works with `for` loops and
/// the std adapters.
pub struct Cursor<'a, T> {
    source: BoxPull<'a, T>,
    state: Lookahead<T>,
}

impl<'a, T> Cursor<'a, T> {
    pub fn new(source: BoxPull<'a, T>) -> Self {
        Cursor {
            source,
            state: Lookahead::NotFetched,
        }
    }

    /// Returns `true` if another element is available. Never skips elements.
    pub fn has_more(&mut self) -> bool {
        match self.state {
            Lookahead::NotFetched => self.fetch(),
            Lookahead::Fetched(_) => true,
            Lookahead::Done => false,
        }
    }

    /// Returns the next element and clears the lookahead buffer.
    pub fn advance(&mut self) -> Result<T> {
        if let Lookahead::NotFetched = self.state {
            self.fetch();
        }

        match std::mem::replace(&mut self.state, Lookahead::NotFetched) {
            Lookahead::Fetched(item) => Ok(item),
            exhausted => {
                self.state = exhausted;
                Err(SeqError::Exhausted)
            }
        }
    }

    fn fetch(&mut self) -> bool {
        match self.source.pull() {
            Some(item) => {
                self.state = Lookahead::Fetched(item);
                true
            }
            None => {
                trace!("cursor reached the end of its source");
                self.state = Lookahead::Done;
                false
            }
        }
    }
}

impl<'a, T> Iterator for Cursor<'a, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.advance().ok()
    }
}

/// Lets a partially consumed cursor feed another sequence chain.
impl<'a, T> Pull for Cursor<'a, T> {
    type Item = T;

    fn pull(&mut self) -> Option<T> {
        self.advance().ok()
    }
}
