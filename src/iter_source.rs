use crate::Pull;

/// Adapts any std [`Iterator`] into a [`Pull`] source.
pub struct IterSource<I> {
    iter: I,
}

impl<I: Iterator> IterSource<I> {
    pub fn new(iter: I) -> Self {
        IterSource { iter }
    }
}

impl<I: Iterator> Pull for IterSource<I> {
    type Item = I::Item;

    fn pull(&mut self) -> Option<I::Item> {
        self.iter.next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iter_source_forwards_std_iterator() {
        let mut source = IterSource::new("ab".chars());
        assert_eq!(source.pull(), Some('a'));
        assert_eq!(source.pull(), Some('b'));
        assert_eq!(source.pull(), None);
    }
}
