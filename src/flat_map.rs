use std::rc::Rc;

use crate::{BoxPull, Pull, Sequence};

/// A source that maps every outer element to a sequence and yields each inner
/// sequence fully, in outer order, before pulling the next outer element.
pub struct FlatMap<'a, I, F, R> {
    outer: I,
    map_fn: Rc<F>,
    inner: Option<BoxPull<'a, R>>,
}

impl<'a, I, F, R> FlatMap<'a, I, F, R> {
    pub(crate) fn new(outer: I, map_fn: Rc<F>) -> Self {
        FlatMap {
            outer,
            map_fn,
            inner: None,
        }
    }
}

impl<'a, I, F, R> Pull for FlatMap<'a, I, F, R>
where
    I: Pull,
    F: Fn(I::Item) -> Sequence<'a, R>,
    R: 'a,
{
    type Item = R;

    fn pull(&mut self) -> Option<R> {
        loop {
            if let Some(inner) = &mut self.inner {
                if let Some(item) = inner.pull() {
                    return Some(item);
                }
                self.inner = None;
            }

            let next = self.outer.pull()?;
            self.inner = Some((self.map_fn)(next).source());
        }
    }
}
