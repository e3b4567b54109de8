use std::rc::Rc;

use crate::Pull;

/// A source that applies a function to each upstream element, one to one.
///
/// We introduce a generic parameter B for the element type the closure
/// produces; it becomes the `Item` of the adapter.
pub struct Map<I, F> {
    source: I,
    map_fn: Rc<F>,
}

impl<I, F> Map<I, F> {
    pub(crate) fn new(source: I, map_fn: Rc<F>) -> Self {
        Map { source, map_fn }
    }
}

impl<B, I, F> Pull for Map<I, F>
where
    I: Pull,
    F: Fn(I::Item) -> B,
{
    type Item = B;

    fn pull(&mut self) -> Option<B> {
        self.source.pull().map(|item| (self.map_fn)(item))
    }
}
