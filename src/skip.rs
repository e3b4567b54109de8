use crate::Pull;

/// A source that discards the first `remaining` upstream elements.
pub struct Skip<I> {
    source: I,
    remaining: usize,
}

impl<I> Skip<I> {
    pub(crate) fn new(source: I, remaining: usize) -> Self {
        Skip { source, remaining }
    }
}

impl<I: Pull> Pull for Skip<I> {
    type Item = I::Item;

    fn pull(&mut self) -> Option<I::Item> {
        while self.remaining > 0 {
            self.remaining -= 1;
            if self.source.pull().is_none() {
                self.remaining = 0;
                return None;
            }
        }

        self.source.pull()
    }
}
