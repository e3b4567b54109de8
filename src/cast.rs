use std::marker::PhantomData;

use crate::Pull;

/// A source that narrows each upstream element to `U`, silently dropping the
/// ones that do not convert. Backs [`Sequence::of_class`](crate::Sequence::of_class).
pub struct OfClass<I, U> {
    source: I,
    _target: PhantomData<fn() -> U>,
}

impl<I, U> OfClass<I, U> {
    pub(crate) fn new(source: I) -> Self {
        OfClass {
            source,
            _target: PhantomData,
        }
    }
}

impl<I, U> Pull for OfClass<I, U>
where
    I: Pull,
    I::Item: TryInto<U>,
{
    type Item = U;

    fn pull(&mut self) -> Option<U> {
        while let Some(item) = self.source.pull() {
            if let Ok(narrowed) = item.try_into() {
                return Some(narrowed);
            }
        }

        None
    }
}
