use std::rc::Rc;

use crate::Pull;

/// A source over a shared, immutable slice of `T`.
///
/// Every traversal of a sequence built by [`Sequence::create`](crate::Sequence::create)
/// gets its own `SliceSource` pointing at the same `Rc<[T]>`, so restarting a
/// sequence never copies the backing data, only the elements it hands out.
pub struct SliceSource<T> {
    data: Rc<[T]>,
    pos: usize,
}

impl<T> SliceSource<T> {
    pub fn new(data: Rc<[T]>) -> Self {
        SliceSource { data, pos: 0 }
    }
}

impl<T: Clone> Pull for SliceSource<T> {
    type Item = T;

    fn pull(&mut self) -> Option<T> {
        let item = self.data.get(self.pos)?.clone();
        self.pos += 1;
        Some(item)
    }
}
