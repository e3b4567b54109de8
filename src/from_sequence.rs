use std::collections::HashSet;
use std::hash::Hash;

use crate::{Pull, Sequence};

/// Defines how a container is filled by draining a [`Sequence`].
/// The sequence must be finite.
pub trait FromSequence<T> {
    fn from_seq<'a>(seq: &Sequence<'a, T>) -> Self
    where
        T: 'a;
}

impl<T> FromSequence<T> for Vec<T> {
    fn from_seq<'a>(seq: &Sequence<'a, T>) -> Self
    where
        T: 'a,
    {
        let mut source = seq.source();
        let mut vec = Vec::new();

        while let Some(item) = source.pull() {
            vec.push(item);
        }

        vec
    }
}

impl<T> FromSequence<T> for HashSet<T>
where
    T: Eq + Hash,
{
    fn from_seq<'a>(seq: &Sequence<'a, T>) -> Self
    where
        T: 'a,
    {
        let mut source = seq.source();
        let mut set = HashSet::new();

        while let Some(item) = source.pull() {
            set.insert(item);
        }

        set
    }
}
