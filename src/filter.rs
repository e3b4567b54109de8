use std::rc::Rc;

use crate::Pull;

/// A source that keeps only the upstream elements matching a predicate.
///
/// P (for predicate) is shared through an `Rc` because every traversal of the
/// owning sequence builds a fresh `Filter` around the same closure.
pub struct Filter<I, P> {
    source: I,
    predicate: Rc<P>,
}

impl<I, P> Filter<I, P> {
    pub(crate) fn new(source: I, predicate: Rc<P>) -> Self {
        Filter { source, predicate }
    }
}

impl<I, P> Pull for Filter<I, P>
where
    I: Pull,
    P: Fn(&I::Item) -> bool,
{
    type Item = I::Item;

    fn pull(&mut self) -> Option<Self::Item> {
        // pull until an element passes or upstream runs dry
        while let Some(item) = self.source.pull() {
            if (self.predicate)(&item) {
                return Some(item);
            }
        }

        None
    }
}
