use crate::{BoxPull, Pull, Sequence};

/// A source that drains `first` completely before touching `second`.
///
/// The second traversal is only started once the first reports its end, so an
/// eager second sequence does no work while the first is still yielding.
pub struct Concat<'a, T> {
    first: Option<BoxPull<'a, T>>,
    second: Second<'a, T>,
}

enum Second<'a, T> {
    Pending(Sequence<'a, T>),
    Active(BoxPull<'a, T>),
}

impl<'a, T: 'a> Concat<'a, T> {
    pub(crate) fn new(first: BoxPull<'a, T>, second: Sequence<'a, T>) -> Self {
        Concat {
            first: Some(first),
            second: Second::Pending(second),
        }
    }
}

impl<'a, T: 'a> Pull for Concat<'a, T> {
    type Item = T;

    fn pull(&mut self) -> Option<T> {
        if let Some(first) = &mut self.first {
            if let Some(item) = first.pull() {
                return Some(item);
            }
            self.first = None;
        }

        if let Second::Pending(sequence) = &self.second {
            self.second = Second::Active(sequence.source());
        }

        match &mut self.second {
            Second::Active(source) => source.pull(),
            Second::Pending(_) => None,
        }
    }
}
