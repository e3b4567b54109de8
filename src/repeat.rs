use crate::Pull;

/// An unbounded source yielding clones of one value forever.
///
/// Anything draining this (sorting, grouping, `last`, `length`...) never
/// returns. Bound it first with `take`, or use a short-circuiting consumer.
pub struct Repeat<T> {
    value: T,
}

impl<T> Repeat<T> {
    pub fn new(value: T) -> Self {
        Repeat { value }
    }
}

impl<T: Clone> Pull for Repeat<T> {
    type Item = T;

    fn pull(&mut self) -> Option<T> {
        Some(self.value.clone())
    }
}
