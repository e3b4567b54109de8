/// The minimal producer trait every adapter and every source implements.
/// This is the upstream-facing half of iteration: it has no lookahead and no
/// idempotent query, it just hands out the next element or `None`.
///
/// Consumers should not drive a `Pull` directly; wrap it in a [`Cursor`]
/// (or ask a [`Sequence`] for one), which adds `has_more`/`advance`.
///
/// [`Cursor`]: crate::Cursor
/// [`Sequence`]: crate::Sequence
pub trait Pull {
    /// The type of the elements being produced.
    type Item;

    fn pull(&mut self) -> Option<Self::Item>;
}

/// A type-erased pull source, the form in which sequences hand out traversals.
pub type BoxPull<'a, T> = Box<dyn Pull<Item = T> + 'a>;

impl<P> Pull for Box<P>
where
    P: Pull + ?Sized,
{
    type Item = P::Item;

    fn pull(&mut self) -> Option<Self::Item> {
        (**self).pull()
    }
}

#[cfg(test)]
mod tests {
    use crate::SliceSource;

    use super::*;

    #[test]
    fn boxed_pull_delegates_to_inner_source() {
        let mut source: BoxPull<'_, i32> = Box::new(SliceSource::new(vec![1, 2].into()));
        assert_eq!(source.pull(), Some(1));
        assert_eq!(source.pull(), Some(2));
        assert_eq!(source.pull(), None);
    }
}
